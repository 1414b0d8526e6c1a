//! Reusable UI components.
//!
//! # Components
//!
//! - [`Button`]: clickable button with variants
//! - [`Avatar`]: sender avatar for a message row
//! - icons: inline SVG icons

mod avatar;
mod button;
mod icons;

pub use avatar::Avatar;
pub use button::{Button, ButtonVariant};
pub use icons::*;
