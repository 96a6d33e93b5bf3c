//! Constants used throughout the extractor

pub mod layout;
pub mod security_txt;
