use glam::Vec2;

// WheelEvent.deltaMode values
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Line-mode wheel deltas are scaled so a three-line notch lands near the
/// ~100px a pixel-mode notch reports.
pub const WHEEL_LINE_HEIGHT_PX: f64 = 40.0;

// ---------------- Pointer helpers ----------------
/// Viewport client coordinates → NDC (x right, y up, both in [-1, 1]).
#[inline]
pub fn client_to_ndc(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    Vec2::new(x as f32, y as f32)
}

// ---------------- Wheel helpers ----------------
/// Normalize a wheel delta to pixels so the jump threshold means the same
/// thing for line- and page-mode devices.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height_px: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta_y * WHEEL_LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta_y * page_height_px,
        _ => delta_y,
    }
}

// ---------------- Keyboard helpers ----------------
/// Elements where arrow/page keys belong to the element, not the page.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
