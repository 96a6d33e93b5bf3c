//! Data models for program accounts and extracted security metadata

pub mod account;
pub mod security_info;

pub use self::account::{AccountKind, ProgramImage, RawAccount};
pub use self::security_info::{Extraction, MatchSource, SecurityInfo};
