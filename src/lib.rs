//! A library for recovering security.txt metadata from deployed Solana programs
//!
//! Program images are searched as lossy text by an ordered cascade of matchers,
//! from the NUL-delimited `security_txt!` block down to a free-text scan for
//! contact-shaped strings. Upgradeable programs are followed to their
//! program-data account first.

pub mod analyzer;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod monitor;
pub mod tool;

use std::path::Path;

use log::info;
use solana_pubkey::Pubkey;

use crate::analyzer::Analyzer;
use crate::errors::ExtractorResult;
use crate::models::Extraction;
use crate::monitor::{AccountSource, Monitor};

/// Main entry point for extracting security.txt metadata from a program
pub async fn extract_security_txt(program_id: &Pubkey, rpc_url: &str) -> ExtractorResult<Extraction> {
    let monitor = Monitor::new(rpc_url);
    extract_from_source(program_id, &monitor).await
}

/// Extract through any account source
pub async fn extract_from_source<S: AccountSource>(
    program_id: &Pubkey,
    source: &S,
) -> ExtractorResult<Extraction> {
    Analyzer::new().analyze_program(program_id, source).await
}

/// Extract from program image bytes that are already in hand
pub fn extract_from_bytes(bytes: &[u8]) -> Extraction {
    Analyzer::new().analyze_bytes(bytes)
}

/// Extract from a program image stored on disk, such as a `.so` dump
pub fn extract_from_file(path: &Path) -> ExtractorResult<Extraction> {
    let bytes = std::fs::read(path)?;
    info!("Read {} bytes of program image from {}", bytes.len(), path.display());
    Ok(extract_from_bytes(&bytes))
}

/// Version of the extractor
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
