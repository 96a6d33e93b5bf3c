//! NUL-delimited blocks written by the `security_txt!` macro
//!
//! Layout: begin marker, then alternating `key\0value\0` pairs, then the end
//! marker. Both markers carry their own trailing NUL.

use crate::constants::security_txt::{EMBEDDED_BEGIN_MARKER, EMBEDDED_END_MARKER};
use crate::models::SecurityInfo;
use super::normalizer::normalize_field_name;

/// Parse the first embedded block in `text`, if both markers are present.
pub fn match_embedded(text: &str) -> Option<SecurityInfo> {
    let start = text.find(EMBEDDED_BEGIN_MARKER)? + EMBEDDED_BEGIN_MARKER.len();
    let end = start + text[start..].find(EMBEDDED_END_MARKER)?;

    let parts: Vec<&str> = text[start..end].split_terminator('\0').collect();
    let info: SecurityInfo = parts
        .chunks_exact(2)
        .filter_map(|pair| {
            let key = pair[0].trim();
            let value = pair[1].trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            // Macro keys are snake_case; fold them like kebab-case fields.
            Some((normalize_field_name(&key.replace('_', "-")), value.to_string()))
        })
        .collect();

    Some(info)
}
