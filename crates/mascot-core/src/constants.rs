/// Timing, threshold and tuning constants shared by the core state machines.
///
/// Durations are milliseconds unless the name says otherwise.
// Viewport breakpoints (inclusive upper bounds, CSS px)
pub const EXTRA_SMALL_MAX_WIDTH: f64 = 320.0;
pub const SMALL_MAX_WIDTH: f64 = 460.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Handheld tiers render at most at this device pixel ratio
pub const HANDHELD_MAX_PIXEL_RATIO: f64 = 2.0;

// Section navigation
pub const SECTION_COUNT: usize = 8;
pub const WHEEL_DELTA_THRESHOLD: f64 = 50.0; // minimum |deltaY| to count as a jump
pub const WHEEL_DEBOUNCE_MS: f64 = 1500.0;
pub const TOUCH_SWIPE_THRESHOLD: f64 = 50.0; // minimum vertical swipe in px
pub const TOUCH_DEBOUNCE_MS: f64 = 1000.0;
pub const SECTION_HEIGHT_VH: f64 = 100.0;

// Mascot motion, matches the CSS section transition (0.8s)
pub const MASCOT_TWEEN_MS: f64 = 800.0;
pub const FOLLOW_UP_CLIP_DELAY_MS: f64 = 3000.0;

// Base facing angle of the mascot body (radians)
pub const BASE_ROTATION_Y: f32 = std::f32::consts::PI * 1.35;

// Body lean gains applied to the pointer offset
pub const BODY_LEAN_YAW_GAIN: f32 = 0.8;
pub const BODY_LEAN_PITCH_GAIN: f32 = 0.3;

// Head tracking
pub const HEAD_YAW_GAIN: f32 = 0.6;
pub const HEAD_YAW_SMOOTHING: f32 = 0.9; // fraction of the gap closed per frame
pub const HEAD_PITCH_SMOOTHING: f32 = 0.8;
pub const HEAD_DEBUG_SAMPLE_RATE: f64 = 0.01;

// Camera (matches the scene host)
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 2000.0;
pub const CAMERA_Z: f32 = 2.0;

// Testimonial carousel
pub const SLIDE_TRANSITION_MS: f64 = 600.0;
pub const AUTOPLAY_INTERVAL_MS: f64 = 5000.0;
pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;
pub const SWIPE_MAX_DURATION_MS: f64 = 500.0;

// Contact form
pub const MESSAGING_LINK_DELAY_MS: f64 = 2000.0;

// Accessibility
pub const FONT_SIZE_DEFAULT_PX: u8 = 16;
pub const FONT_SIZE_MIN_PX: u8 = 12;
pub const FONT_SIZE_MAX_PX: u8 = 24;
pub const FONT_SIZE_STEP_PX: u8 = 2;
pub const STORAGE_KEY_HIGH_CONTRAST: &str = "highContrast";
pub const STORAGE_KEY_FONT_SIZE: &str = "fontSize";
