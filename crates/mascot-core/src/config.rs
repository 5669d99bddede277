//! Per-deployment settings.
//!
//! Tuning constants live in [`crate::constants`]; this struct only carries the
//! values a deployment is expected to change. The web front-end starts from
//! [`SiteConfig::default`] and overrides fields from `data-*` attributes.

use crate::contact::Locale;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Form-handling service that receives the contact form POST.
    pub form_endpoint: String,
    /// Messaging number offered after a successful submission (digits, may
    /// include a leading `+`).
    pub whatsapp_number: String,
    pub locale: Locale,
    pub mascot_url: String,
    pub handheld_hero_video: String,
    /// Section whose video plays exactly once per entry.
    pub one_shot_video_section: Option<usize>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: "https://formspree.io/f/contact".to_string(),
            whatsapp_number: "+972500000000".to_string(),
            locale: Locale::He,
            mascot_url: "./assets/nati.glb".to_string(),
            handheld_hero_video: "./assets/NatiKangaroo.mp4".to_string(),
            one_shot_video_section: Some(1),
        }
    }
}

impl SiteConfig {
    /// Apply a single `data-*` override. Unknown keys and empty values are
    /// ignored; returns whether anything changed.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match key {
            "form-endpoint" => self.form_endpoint = value.to_string(),
            "whatsapp" => self.whatsapp_number = value.to_string(),
            "mascot-url" => self.mascot_url = value.to_string(),
            "locale" => match Locale::from_tag(value) {
                Some(l) => self.locale = l,
                None => {
                    log::warn!("[config] unknown locale {:?}, keeping {:?}", value, self.locale);
                    return false;
                }
            },
            "video-section" => match value.parse::<usize>() {
                Ok(i) => self.one_shot_video_section = Some(i),
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}

/// `data-*` keys read from `<body>` by the web front-end.
pub const OVERRIDE_KEYS: [&str; 5] = [
    "form-endpoint",
    "whatsapp",
    "mascot-url",
    "locale",
    "video-section",
];
