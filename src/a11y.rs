use crate::constants::{
    A11Y_BUTTON_ID, A11Y_CLOSE_ID, A11Y_PANEL_ID, CONTRAST_TOGGLE_ID, FONT_DECREASE_ID,
    FONT_INCREASE_ID, HIGH_CONTRAST_CLASS, PANEL_OPEN_CLASS,
};
use crate::dom;
use mascot_core::{PanelFocus, PanelState, PreferenceError, PreferenceStore, Preferences};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HIGH_CONTRAST_CSS: &str = "
.high-contrast { background: #000 !important; color: #fff !important; }
.high-contrast * { background: #000 !important; color: #fff !important; border-color: #fff !important; }
.high-contrast a, .high-contrast .btn { color: #000 !important; background: #fff !important; border: 2px solid #fff !important; }
.high-contrast input, .high-contrast textarea, .high-contrast select { background: #111 !important; color: #fff !important; border: 2px solid #fff !important; }
";

/// `localStorage`-backed [`PreferenceStore`]. Private browsing modes may
/// deny storage; reads then come back empty and writes report an error.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[a11y] localStorage unavailable; preferences won't persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let storage = self.storage.as_ref().ok_or(PreferenceError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

fn apply_preferences(document: &web::Document, prefs: &Preferences) {
    if let Some(body) = document.body() {
        dom::set_class(&body, HIGH_CONTRAST_CLASS, prefs.high_contrast);
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.style().set_property("font-size", &prefs.font_size_css());
    }
}

fn inject_contrast_styles(document: &web::Document) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(HIGH_CONTRAST_CSS));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}

type PrefOp = fn(&mut Preferences, &mut dyn PreferenceStore) -> Result<bool, PreferenceError>;

#[derive(Clone)]
struct PrefsWiring {
    document: web::Document,
    prefs: Rc<RefCell<Preferences>>,
    store: Rc<RefCell<LocalStore>>,
}

impl PrefsWiring {
    fn update(&self, op: PrefOp) {
        let result = {
            let mut store = self.store.borrow_mut();
            op(&mut self.prefs.borrow_mut(), &mut *store)
        };
        match result {
            Ok(false) => {}
            Ok(true) => apply_preferences(&self.document, &self.prefs.borrow()),
            // the page still reflects the change for this visit
            Err(e) => {
                log::warn!("[a11y] {}", e);
                apply_preferences(&self.document, &self.prefs.borrow());
            }
        }
    }
}

/// Load stored preferences, apply them and wire the contrast and font
/// controls.
pub fn wire_preferences(document: &web::Document) {
    inject_contrast_styles(document);
    let store = LocalStore::open();
    let prefs = Preferences::load(&store);
    apply_preferences(document, &prefs);
    log::info!(
        "[a11y] contrast={} font={}",
        prefs.high_contrast,
        prefs.font_size_css()
    );

    let w = PrefsWiring {
        document: document.clone(),
        prefs: Rc::new(RefCell::new(prefs)),
        store: Rc::new(RefCell::new(store)),
    };
    let contrast = w.clone();
    dom::add_click_listener(document, CONTRAST_TOGGLE_ID, move |_ev| {
        contrast.update(|p, s| p.toggle_contrast(s).map(|_| true));
    });
    let bigger = w.clone();
    dom::add_click_listener(document, FONT_INCREASE_ID, move |_ev| {
        bigger.update(Preferences::increase_font);
    });
    let smaller = w;
    dom::add_click_listener(document, FONT_DECREASE_ID, move |_ev| {
        smaller.update(Preferences::decrease_font);
    });
}

struct Panel {
    panel: web::Element,
    button: web::HtmlElement,
    state: RefCell<PanelState>,
}

impl Panel {
    fn sync(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.panel, PANEL_OPEN_CLASS, open);
        _ = self
            .button
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }
}

fn within(el: &web::Node, target: Option<&web::Node>) -> bool {
    target.map(|t| el.contains(Some(t))).unwrap_or(false)
}

/// Open/close behaviour of the accessibility panel.
pub fn wire_panel(document: &web::Document) {
    let Some(panel) = document.get_element_by_id(A11Y_PANEL_ID) else {
        return;
    };
    let Some(button) = document
        .get_element_by_id(A11Y_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let p = Rc::new(Panel {
        panel,
        button,
        state: RefCell::new(PanelState::default()),
    });
    p.sync();

    let toggle = p.clone();
    dom::listen(&p.button, "click", move |_ev: web::MouseEvent| {
        toggle.state.borrow_mut().toggle();
        toggle.sync();
    });

    let keys = p.clone();
    dom::listen(&p.button, "keydown", move |ev: web::KeyboardEvent| {
        if keys.state.borrow_mut().on_button_key(&ev.key()) {
            ev.prevent_default();
            keys.sync();
        }
    });

    let close = p.clone();
    dom::add_click_listener(document, A11Y_CLOSE_ID, move |ev| {
        ev.stop_propagation();
        close.state.borrow_mut().close();
        close.sync();
    });

    let outside = p.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside = within(&outside.panel, target.as_ref());
        let on_button = within(&outside.button, target.as_ref());
        outside.state.borrow_mut().on_document_click(inside, on_button);
        outside.sync();
    });

    let escape = p;
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        let focus = escape.state.borrow_mut().on_key(&ev.key());
        if focus == PanelFocus::ReturnToButton {
            escape.sync();
            _ = escape.button.focus();
        }
    });
}
