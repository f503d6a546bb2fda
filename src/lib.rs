pub mod client;
pub mod converters;
pub mod errors;
pub mod models;
pub mod normalizer;

pub use client::generate_deck_outline;
pub use converters::outline;
pub use converters::vba::{convert_deck_to_vba, VbaConverter};
pub use errors::{DeckApiError, Result};
pub use models::slide::{SlideBody, SlideKind, SlideRecord};
pub use models::style::StyleConfig;
