//! Data model for the normalized slide-deck document.

pub mod slide;
pub mod style;

pub use slide::{SlideBody, SlideKind, SlideRecord};
pub use style::StyleConfig;
