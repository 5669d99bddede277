//! Contact form: validation, single-shot submission state and status copy.

use crate::constants::MESSAGING_LINK_DELAY_MS;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Israeli mobile or landline number once spaces, dashes and parentheses
/// are stripped: `0` or `+972`, an area/carrier prefix, seven digits.
pub const PHONE_PATTERN: &str = r"^(?:\+972|0)(?:[23489]|5\d|7\d)\d{7}$";

static PHONE_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    He,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        match primary.to_ascii_lowercase().as_str() {
            "he" | "iw" => Some(Locale::He),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("phone is required")]
    MissingPhone,
    #[error("phone number is not a valid local number")]
    InvalidPhone,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

pub fn is_valid_phone(raw: &str) -> bool {
    match &*PHONE_RE {
        Ok(re) => re.is_match(&normalize_phone(raw)),
        Err(e) => {
            log::error!("[contact] phone pattern failed to compile: {}", e);
            false
        }
    }
}

impl ContactForm {
    /// Checks run in field order; the first failure is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::MissingPhone);
        }
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }
}

/// The one network call a valid submission produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: String,
    pub fields: Vec<(&'static str, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    Sending,
    Sent,
    MissingName,
    MissingPhone,
    InvalidPhone,
    SendFailed,
    MessagingOffer,
}

impl From<ValidationError> for StatusMessage {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::MissingName => StatusMessage::MissingName,
            ValidationError::MissingPhone => StatusMessage::MissingPhone,
            ValidationError::InvalidPhone => StatusMessage::InvalidPhone,
        }
    }
}

impl StatusMessage {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (StatusMessage::Sending, Locale::He) => "שולח...",
            (StatusMessage::Sending, Locale::En) => "Sending...",
            (StatusMessage::Sent, Locale::He) => "תודה! ההודעה נשלחה, נחזור אליך בהקדם.",
            (StatusMessage::Sent, Locale::En) => "Thanks! Your message was sent, we'll be in touch soon.",
            (StatusMessage::MissingName, Locale::He) => "נא למלא שם.",
            (StatusMessage::MissingName, Locale::En) => "Please enter your name.",
            (StatusMessage::MissingPhone, Locale::He) => "נא למלא מספר טלפון.",
            (StatusMessage::MissingPhone, Locale::En) => "Please enter a phone number.",
            (StatusMessage::InvalidPhone, Locale::He) => "מספר הטלפון אינו תקין.",
            (StatusMessage::InvalidPhone, Locale::En) => "That phone number doesn't look right.",
            (StatusMessage::SendFailed, Locale::He) => "אירעה שגיאה בשליחה. נסו שוב מאוחר יותר.",
            (StatusMessage::SendFailed, Locale::En) => "Something went wrong sending your message. Please try again later.",
            (StatusMessage::MessagingOffer, Locale::He) => "מעדיפים וואטסאפ? דברו איתנו ישירות",
            (StatusMessage::MessagingOffer, Locale::En) => "Prefer WhatsApp? Chat with us directly",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self,
            StatusMessage::MissingName
                | StatusMessage::MissingPhone
                | StatusMessage::InvalidPhone
                | StatusMessage::SendFailed
        )
    }
}

#[derive(Clone, Debug)]
pub struct ContactFlow {
    endpoint: String,
    state: SubmitState,
    messaging_link_due_ms: Option<f64>,
}

impl ContactFlow {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            state: SubmitState::Idle,
            messaging_link_due_ms: None,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The submit control is disabled only while a request is in flight.
    pub fn control_enabled(&self) -> bool {
        self.state != SubmitState::Submitting
    }

    /// Validate and, if valid, hand back the request to send. Invalid forms
    /// never produce a request.
    pub fn submit(&mut self, form: &ContactForm) -> Result<SubmitRequest, SubmitError> {
        if self.state == SubmitState::Submitting {
            return Err(SubmitError::InFlight);
        }
        form.validate()?;
        self.state = SubmitState::Submitting;
        self.messaging_link_due_ms = None;
        log::info!("[contact] submitting to {}", self.endpoint);
        Ok(SubmitRequest {
            endpoint: self.endpoint.clone(),
            fields: vec![
                ("name", form.name.trim().to_string()),
                ("phone", normalize_phone(form.phone.trim())),
                ("email", form.email.trim().to_string()),
                ("message", form.message.trim().to_string()),
            ],
        })
    }

    /// Success is decided by the HTTP status alone.
    pub fn complete(&mut self, http_status: u16, now_ms: f64) -> StatusMessage {
        if (200..300).contains(&http_status) {
            self.state = SubmitState::Succeeded;
            self.messaging_link_due_ms = Some(now_ms + MESSAGING_LINK_DELAY_MS);
            log::info!("[contact] submitted (status {})", http_status);
            StatusMessage::Sent
        } else {
            log::warn!("[contact] submission rejected (status {})", http_status);
            self.network_failed()
        }
    }

    pub fn network_failed(&mut self) -> StatusMessage {
        self.state = SubmitState::Failed;
        StatusMessage::SendFailed
    }

    /// `true` exactly once, when the post-success messaging link is due.
    pub fn take_due_messaging_link(&mut self, now_ms: f64) -> bool {
        match self.messaging_link_due_ms {
            Some(due) if now_ms >= due => {
                self.messaging_link_due_ms = None;
                true
            }
            _ => false,
        }
    }
}

pub fn messaging_greeting(locale: Locale, name: &str) -> String {
    let name = name.trim();
    match locale {
        Locale::He if name.is_empty() => "היי, השארתי פרטים באתר".to_string(),
        Locale::He => format!("היי, זה {}, השארתי פרטים באתר", name),
        Locale::En if name.is_empty() => "Hi, I just left my details on your site".to_string(),
        Locale::En => format!("Hi, this is {}, I just left my details on your site", name),
    }
}

/// `https://wa.me/<digits>?text=<encoded>`
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
}
