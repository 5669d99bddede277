//! Accessibility preferences and the settings panel's open state.

use crate::constants::{
    FONT_SIZE_DEFAULT_PX, FONT_SIZE_MAX_PX, FONT_SIZE_MIN_PX, FONT_SIZE_STEP_PX,
    STORAGE_KEY_FONT_SIZE, STORAGE_KEY_HIGH_CONTRAST,
};
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable key-value storage for the two preference entries.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store; stands in for browser storage off the web.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub high_contrast: bool,
    pub font_size_px: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            high_contrast: false,
            font_size_px: FONT_SIZE_DEFAULT_PX,
        }
    }
}

/// Parse a stored font size; out-of-range values are clamped, garbage is
/// ignored.
pub fn parse_font_size(raw: &str) -> Option<u8> {
    let v: i64 = raw.trim().parse().ok()?;
    Some(v.clamp(FONT_SIZE_MIN_PX as i64, FONT_SIZE_MAX_PX as i64) as u8)
}

impl Preferences {
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let mut prefs = Self::default();
        if store.get(STORAGE_KEY_HIGH_CONTRAST).as_deref() == Some("true") {
            prefs.high_contrast = true;
        }
        if let Some(raw) = store.get(STORAGE_KEY_FONT_SIZE) {
            match parse_font_size(&raw) {
                Some(px) => prefs.font_size_px = px,
                None => log::warn!("[a11y] ignoring stored font size {:?}", raw),
            }
        }
        prefs
    }

    /// Flip high contrast and persist it. The in-memory value changes even
    /// when the store write fails, so the page keeps the choice for this visit.
    pub fn toggle_contrast(
        &mut self,
        store: &mut dyn PreferenceStore,
    ) -> Result<bool, PreferenceError> {
        self.high_contrast = !self.high_contrast;
        store.set(
            STORAGE_KEY_HIGH_CONTRAST,
            if self.high_contrast { "true" } else { "false" },
        )?;
        Ok(self.high_contrast)
    }

    /// Step the font size up; returns `false` at the ceiling, where nothing
    /// is written. A failed write still leaves the new size in place.
    pub fn increase_font(
        &mut self,
        store: &mut dyn PreferenceStore,
    ) -> Result<bool, PreferenceError> {
        if self.font_size_px >= FONT_SIZE_MAX_PX {
            return Ok(false);
        }
        self.font_size_px = (self.font_size_px + FONT_SIZE_STEP_PX).min(FONT_SIZE_MAX_PX);
        self.persist_font(store)?;
        Ok(true)
    }

    /// Mirror of [`Preferences::increase_font`] at the floor.
    pub fn decrease_font(
        &mut self,
        store: &mut dyn PreferenceStore,
    ) -> Result<bool, PreferenceError> {
        if self.font_size_px <= FONT_SIZE_MIN_PX {
            return Ok(false);
        }
        self.font_size_px = self
            .font_size_px
            .saturating_sub(FONT_SIZE_STEP_PX)
            .max(FONT_SIZE_MIN_PX);
        self.persist_font(store)?;
        Ok(true)
    }

    fn persist_font(&self, store: &mut dyn PreferenceStore) -> Result<(), PreferenceError> {
        store.set(STORAGE_KEY_FONT_SIZE, &self.font_size_px.to_string())
    }

    /// Root font size as a CSS value.
    pub fn font_size_css(&self) -> String {
        format!("{}px", self.font_size_px)
    }
}

/// Open/closed state of the accessibility panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

/// What the panel should do with keyboard focus after an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelFocus {
    Keep,
    ReturnToButton,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clicks outside both the panel and its button close it.
    pub fn on_document_click(&mut self, inside_panel: bool, on_button: bool) {
        if !inside_panel && !on_button {
            self.open = false;
        }
    }

    pub fn on_key(&mut self, key: &str) -> PanelFocus {
        if key == "Escape" && self.open {
            self.open = false;
            return PanelFocus::ReturnToButton;
        }
        PanelFocus::Keep
    }

    /// Enter/Space on the panel button behave like a click.
    pub fn on_button_key(&mut self, key: &str) -> bool {
        if key == "Enter" || key == " " {
            self.toggle();
            return true;
        }
        false
    }
}
