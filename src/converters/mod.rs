//! Converters that lower the normalized slide document to other
//! representations: the VBA macro script and the editable plain-text outline.

pub mod outline;
pub mod vba;
