use crate::constants::{
    CONTACT_FORM_ID, FORM_STATUS_ID, HIDDEN_CLASS, STATUS_ERROR_CLASS, STATUS_SUCCESS_CLASS,
    WHATSAPP_LINK_ID,
};
use crate::dom::{self, js_err, Clock};
use mascot_core::{
    messaging_greeting, whatsapp_link, ContactFlow, ContactForm, Locale, SiteConfig,
    StatusMessage, SubmitError, SubmitRequest, MESSAGING_LINK_DELAY_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct ContactWiring {
    form: web::HtmlFormElement,
    status: Option<web::Element>,
    button: Option<web::HtmlButtonElement>,
    link: Option<web::Element>,
    flow: Rc<RefCell<ContactFlow>>,
    locale: Locale,
    whatsapp_number: String,
    clock: Clock,
}

fn field_value(form: &web::HtmlFormElement, name: &str) -> String {
    let Ok(Some(el)) = form.query_selector(&format!("[name=\"{}\"]", name)) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<web::HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_default()
}

impl ContactWiring {
    fn read_form(&self) -> ContactForm {
        ContactForm {
            name: field_value(&self.form, "name"),
            phone: field_value(&self.form, "phone"),
            email: field_value(&self.form, "email"),
            message: field_value(&self.form, "message"),
        }
    }

    fn show_status(&self, msg: StatusMessage) {
        let Some(status) = &self.status else {
            return;
        };
        status.set_text_content(Some(msg.text(self.locale)));
        dom::set_class(status, HIDDEN_CLASS, false);
        dom::set_class(status, STATUS_ERROR_CLASS, msg.is_error());
        dom::set_class(
            status,
            STATUS_SUCCESS_CLASS,
            matches!(msg, StatusMessage::Sent),
        );
    }

    fn sync_button(&self) {
        if let Some(button) = &self.button {
            button.set_disabled(!self.flow.borrow().control_enabled());
        }
    }

    fn show_messaging_link(&self, name: &str) {
        if !self.flow.borrow_mut().take_due_messaging_link(self.clock.now_ms()) {
            return;
        }
        let Some(link) = &self.link else {
            return;
        };
        let href = whatsapp_link(
            &self.whatsapp_number,
            &messaging_greeting(self.locale, name),
        );
        _ = link.set_attribute("href", &href);
        _ = link.set_attribute("target", "_blank");
        _ = link.set_attribute("rel", "noopener");
        link.set_text_content(Some(StatusMessage::MessagingOffer.text(self.locale)));
        dom::set_class(link, HIDDEN_CLASS, false);
    }
}

async fn post(request: &SubmitRequest) -> anyhow::Result<u16> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = web::FormData::new().map_err(js_err)?;
    for (key, value) in &request.fields {
        body.append_with_str(key, value).map_err(js_err)?;
    }
    let headers = web::Headers::new().map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);
    init.set_headers(&headers);
    let req = web::Request::new_with_str_and_init(&request.endpoint, &init).map_err(js_err)?;

    let resp = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(js_err)?;
    let resp: web::Response = resp.dyn_into().map_err(js_err)?;
    Ok(resp.status())
}

fn on_submit(w: &ContactWiring) {
    let form = w.read_form();
    let request = match w.flow.borrow_mut().submit(&form) {
        Ok(r) => r,
        Err(SubmitError::Invalid(e)) => {
            log::info!("[contact] form rejected: {}", e);
            w.show_status(e.into());
            return;
        }
        Err(SubmitError::InFlight) => return,
    };
    w.show_status(StatusMessage::Sending);
    w.sync_button();
    if let Some(link) = &w.link {
        dom::set_class(link, HIDDEN_CLASS, true);
    }

    let w = w.clone();
    spawn_local(async move {
        let msg = match post(&request).await {
            Ok(status) => w.flow.borrow_mut().complete(status, w.clock.now_ms()),
            Err(e) => {
                log::error!("[contact] request failed: {:?}", e);
                w.flow.borrow_mut().network_failed()
            }
        };
        w.show_status(msg);
        w.sync_button();
        if msg == StatusMessage::Sent {
            w.form.reset();
            let name = form.name;
            let later = w.clone();
            dom::set_timeout(MESSAGING_LINK_DELAY_MS, move || {
                later.show_messaging_link(&name)
            });
        }
    });
}

/// Intercept the contact form's submit and run it through [`ContactFlow`].
pub fn wire_contact_form(document: &web::Document, config: &SiteConfig, clock: Clock) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[contact] missing #{}; form disabled", CONTACT_FORM_ID);
        return;
    };
    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok());

    let w = ContactWiring {
        form: form.clone(),
        status: document.get_element_by_id(FORM_STATUS_ID),
        button,
        link: document.get_element_by_id(WHATSAPP_LINK_ID),
        flow: Rc::new(RefCell::new(ContactFlow::new(config.form_endpoint.clone()))),
        locale: config.locale,
        whatsapp_number: config.whatsapp_number.clone(),
        clock,
    };
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        on_submit(&w);
    });
}
