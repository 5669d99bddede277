//! Platform-free state for the mascot landing page.
//!
//! Nothing here touches the DOM; time is always passed in as milliseconds so
//! every timer-driven behaviour can be exercised on the host.

pub mod a11y;
pub mod camera;
pub mod carousel;
pub mod clips;
pub mod config;
pub mod constants;
pub mod contact;
pub mod mascot;
pub mod navigator;
pub mod tier;
pub mod tween;

pub use a11y::*;
pub use camera::*;
pub use carousel::*;
pub use clips::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use mascot::*;
pub use navigator::*;
pub use tier::*;
pub use tween::*;
