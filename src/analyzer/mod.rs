//! Core extraction engine: account resolution, decoding and the matcher cascade

pub mod cascade;
pub mod decoder;
pub mod embedded;
pub mod heuristics;
pub mod layout;
pub mod normalizer;

use log::debug;
use solana_pubkey::Pubkey;

use crate::errors::ExtractorResult;
use crate::models::Extraction;
use crate::monitor::AccountSource;

/// Main analyzer that coordinates the extraction process.
///
/// Holds no state; every call works only on the bytes it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct Analyzer;

impl Analyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Resolve the program's image through `source` and search it
    pub async fn analyze_program<S: AccountSource>(
        &self,
        program_id: &Pubkey,
        source: &S,
    ) -> ExtractorResult<Extraction> {
        let image = layout::resolve_program_image(source, program_id).await?;
        debug!("Searching {} bytes of {:?} image for program {}", image.bytes.len(), image.kind, program_id);
        Ok(self.analyze_bytes(&image.bytes))
    }

    /// Search raw program image bytes. Never fails.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Extraction {
        let text = decoder::decode(bytes);
        cascade::run(&text)
    }
}
