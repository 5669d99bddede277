// DOM hooks the page markup provides. Missing elements disable the feature
// that needs them; nothing else depends on them.

// Scene
pub const CANVAS_ID: &str = "bg-canvas";
pub const SCENE_HOST_GLOBAL: &str = "mascotScene";

// Sections and navigation
pub const SECTIONS_CONTAINER_ID: &str = "sections-container";
pub const SECTION_SELECTOR: &str = ".section";
pub const NAV_DOTS_ID: &str = "nav-dots";
pub const NAV_DOT_ACTIVE_CLASS: &str = "bg-white";
// sections that animate in/out with their own CSS rather than just scrolling
pub const BESPOKE_SECTION_ATTR: &str = "data-bespoke-transition";

// Videos
pub const HERO_VIDEO_SOURCE_SELECTOR: &str = ".section video source";

// Testimonial carousel
pub const CAROUSEL_ID: &str = "testimonials-carousel";
pub const SLIDE_SELECTOR: &str = ".testimonial-slide";
pub const CAROUSEL_DOT_SELECTOR: &str = ".carousel-dot";
pub const CAROUSEL_PREV_ID: &str = "carousel-prev";
pub const CAROUSEL_NEXT_ID: &str = "carousel-next";
pub const SLIDE_ACTIVE_CLASS: &str = "active";
pub const SLIDE_EXIT_CLASS: &str = "exiting";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const WHATSAPP_LINK_ID: &str = "whatsapp-link";
pub const STATUS_ERROR_CLASS: &str = "error";
pub const STATUS_SUCCESS_CLASS: &str = "success";
pub const HIDDEN_CLASS: &str = "hidden";

// Accessibility panel
pub const A11Y_BUTTON_ID: &str = "accessibility-btn";
pub const A11Y_PANEL_ID: &str = "accessibility-panel";
pub const A11Y_CLOSE_ID: &str = "close-accessibility";
pub const CONTRAST_TOGGLE_ID: &str = "toggle-contrast";
pub const FONT_INCREASE_ID: &str = "font-increase";
pub const FONT_DECREASE_ID: &str = "font-decrease";
pub const PANEL_OPEN_CLASS: &str = "active";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";
