//! Window-level input listeners. Each adapter forwards to the shared
//! navigator or pointer state and applies accepted changes through `nav`.

mod keyboard;
mod pointer;
mod resize;
mod touch;
mod wheel;

pub use keyboard::wire_nav_keys;
pub use pointer::wire_pointer_tracking;
pub use resize::{apply_viewport, wire_resize, ResizeWiring};
pub use touch::wire_touch;
pub use wheel::wire_wheel;
