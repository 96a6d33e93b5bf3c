//! Action boundary: program identity in, status-tagged security metadata out

use log::{info, warn};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::analyzer::Analyzer;
use crate::constants::layout::PUBKEY_LEN;
use crate::errors::{ErrorExt, ExtractorError, ExtractorResult};
use crate::models::{Extraction, MatchSource, SecurityInfo};
use crate::monitor::AccountSource;

/// Input accepted by the `get_security_txt` action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityTxtInput {
    /// Base58 program address
    pub program_id: String,
}

/// Outcome class of an action call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    /// Metadata was found
    Success,
    /// The program was read but carries no recognizable metadata
    Warning,
    /// The program could not be read
    Error,
}

/// Response returned to the calling agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    pub status: ToolStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchSource>,
    pub security_info: SecurityInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl ToolResponse {
    /// Map a finished extraction to `success` or `warning`
    pub fn from_extraction(program_id: &Pubkey, extraction: Extraction) -> Self {
        let (status, message) = if extraction.is_empty() {
            (
                ToolStatus::Warning,
                format!("No security.txt metadata found in program {}", program_id),
            )
        } else {
            (
                ToolStatus::Success,
                format!(
                    "Found {} security.txt field(s) in program {}",
                    extraction.info.len(),
                    program_id
                ),
            )
        };

        Self {
            status,
            message,
            program_id: Some(program_id.to_string()),
            matched_by: Some(extraction.source),
            security_info: extraction.info,
            error_kind: None,
        }
    }

    /// Map a failure to an `error` response
    pub fn from_error(program_id: Option<&Pubkey>, error: &ExtractorError) -> Self {
        Self {
            status: ToolStatus::Error,
            message: error.to_string(),
            program_id: program_id.map(ToString::to_string),
            matched_by: None,
            security_info: SecurityInfo::new(),
            error_kind: Some(error.kind().to_string()),
        }
    }

    /// Serialize for the calling framework
    pub fn to_json(&self) -> ExtractorResult<String> {
        serde_json::to_string_pretty(self).with_simple_context("tool", "serialize_response")
    }
}

/// Decode a base58 program address, rejecting anything that is not 32 bytes.
pub fn parse_program_id(input: &str) -> ExtractorResult<Pubkey> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ExtractorError::InvalidInput("program id is empty".to_string()));
    }

    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| ExtractorError::InvalidInput(format!("{:?} is not base58: {}", input, e)))?;

    let bytes: [u8; PUBKEY_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
        ExtractorError::InvalidInput(format!(
            "{:?} decodes to {} bytes, expected {}",
            input,
            bytes.len(),
            PUBKEY_LEN
        ))
    })?;

    Ok(Pubkey::new_from_array(bytes))
}

/// Run the `get_security_txt` action for a raw program id string.
pub async fn get_security_txt<S: AccountSource>(source: &S, program_id: &str) -> ToolResponse {
    let program_id = match parse_program_id(program_id) {
        Ok(program_id) => program_id,
        Err(e) => {
            warn!("Rejected program id: {}", e);
            return ToolResponse::from_error(None, &e);
        }
    };

    match Analyzer::new().analyze_program(&program_id, source).await {
        Ok(extraction) => {
            info!("Extraction for {} matched by {:?}", program_id, extraction.source);
            ToolResponse::from_extraction(&program_id, extraction)
        }
        Err(e) => {
            warn!("Extraction for {} failed: {}", program_id, e);
            ToolResponse::from_error(Some(&program_id), &e)
        }
    }
}

/// Run the action from a JSON-encoded [`SecurityTxtInput`].
pub async fn get_security_txt_json<S: AccountSource>(source: &S, input: &str) -> ToolResponse {
    match serde_json::from_str::<SecurityTxtInput>(input) {
        Ok(input) => get_security_txt(source, &input.program_id).await,
        Err(e) => {
            let error = ExtractorError::InvalidInput(format!("malformed action input: {}", e));
            ToolResponse::from_error(None, &error)
        }
    }
}
