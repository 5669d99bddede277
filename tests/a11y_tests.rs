// Host-side tests for accessibility preferences and the panel state.

use mascot_core::*;

#[test]
fn defaults_without_stored_values() {
    let store = MemoryStore::default();
    let prefs = Preferences::load(&store);
    assert_eq!(prefs, Preferences::default());
    assert!(!prefs.high_contrast);
    assert_eq!(prefs.font_size_px, FONT_SIZE_DEFAULT_PX);
    assert_eq!(prefs.font_size_css(), "16px");
}

#[test]
fn font_size_saturates_at_both_bounds() {
    let mut store = MemoryStore::default();
    let mut prefs = Preferences::default();
    let mut steps = 0;
    while prefs.increase_font(&mut store).expect("memory store") {
        steps += 1;
    }
    assert_eq!(steps, 4);
    assert_eq!(prefs.font_size_px, FONT_SIZE_MAX_PX);
    assert!(!prefs.increase_font(&mut store).expect("memory store"));

    while prefs.decrease_font(&mut store).expect("memory store") {}
    assert_eq!(prefs.font_size_px, FONT_SIZE_MIN_PX);
    assert_eq!(store.get(STORAGE_KEY_FONT_SIZE).as_deref(), Some("12"));
}

#[test]
fn preferences_survive_a_reload() {
    let mut store = MemoryStore::default();
    let mut prefs = Preferences::default();
    prefs.toggle_contrast(&mut store).expect("memory store");
    prefs.increase_font(&mut store).expect("memory store");

    let reloaded = Preferences::load(&store);
    assert!(reloaded.high_contrast);
    assert_eq!(reloaded.font_size_px, 18);

    let mut again = reloaded;
    again.toggle_contrast(&mut store).expect("memory store");
    assert_eq!(store.get(STORAGE_KEY_HIGH_CONTRAST).as_deref(), Some("false"));
    assert!(!Preferences::load(&store).high_contrast);
}

#[test]
fn stored_garbage_falls_back() {
    let mut store = MemoryStore::default();
    store.set(STORAGE_KEY_FONT_SIZE, "huge").expect("memory store");
    store.set(STORAGE_KEY_HIGH_CONTRAST, "yes").expect("memory store");
    assert_eq!(Preferences::load(&store), Preferences::default());

    store.set(STORAGE_KEY_FONT_SIZE, "40").expect("memory store");
    assert_eq!(Preferences::load(&store).font_size_px, FONT_SIZE_MAX_PX);
    assert_eq!(parse_font_size(" 14 "), Some(14));
    assert_eq!(parse_font_size("-3"), Some(FONT_SIZE_MIN_PX));
}

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}

#[test]
fn write_failures_surface_but_keep_the_session_value() {
    let mut prefs = Preferences::default();
    assert_eq!(
        prefs.increase_font(&mut ReadOnlyStore),
        Err(PreferenceError::Unavailable)
    );
    assert_eq!(prefs.font_size_px, 18);

    assert_eq!(
        prefs.toggle_contrast(&mut ReadOnlyStore),
        Err(PreferenceError::Unavailable)
    );
    assert!(prefs.high_contrast);

    assert_eq!(
        prefs.decrease_font(&mut ReadOnlyStore),
        Err(PreferenceError::Unavailable)
    );
    assert_eq!(prefs.font_size_px, 16);
}

#[test]
fn panel_opens_and_closes() {
    let mut panel = PanelState::default();
    assert!(!panel.is_open());
    assert!(panel.toggle());
    panel.on_document_click(true, false);
    assert!(panel.is_open());
    panel.on_document_click(false, true);
    assert!(panel.is_open());
    panel.on_document_click(false, false);
    assert!(!panel.is_open());
}

#[test]
fn escape_closes_and_returns_focus() {
    let mut panel = PanelState::default();
    assert_eq!(panel.on_key("Escape"), PanelFocus::Keep);
    panel.toggle();
    assert_eq!(panel.on_key("a"), PanelFocus::Keep);
    assert_eq!(panel.on_key("Escape"), PanelFocus::ReturnToButton);
    assert!(!panel.is_open());
}

#[test]
fn enter_and_space_toggle_from_the_button() {
    let mut panel = PanelState::default();
    assert!(panel.on_button_key("Enter"));
    assert!(panel.is_open());
    assert!(panel.on_button_key(" "));
    assert!(!panel.is_open());
    assert!(!panel.on_button_key("Tab"));
    panel.toggle();
    panel.close();
    assert!(!panel.is_open());
}
