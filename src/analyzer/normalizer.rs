//! Turns captured `field: value` blocks into [`SecurityInfo`]

use crate::models::SecurityInfo;

/// Parse a captured block of `field: value` lines.
///
/// Blank lines, `#` comment lines and anything not shaped like `field: value`
/// are skipped. Never fails; a malformed block just yields fewer fields.
pub fn normalize_block(block: &str) -> SecurityInfo {
    let mut info = SecurityInfo::new();

    for line in block.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((field, value)) = split_field(line) {
            info.insert(normalize_field_name(field), value);
        }
    }

    info
}

/// Split on the first colon, rejecting lines whose left side is not a field name.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (field, value) = line.split_once(':')?;
    let field = field.trim();
    let value = value.trim();

    if field.is_empty() || value.is_empty() || !is_field_name(field) {
        return None;
    }
    Some((field, value))
}

/// Binary noise in front of a colon must not turn into a key.
fn is_field_name(field: &str) -> bool {
    field.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Lower-case a raw field name, then fold kebab-case into camelCase.
pub fn normalize_field_name(field: &str) -> String {
    kebab_to_camel(&field.trim().to_lowercase())
}

/// Replace every `-<letter>` with the upper-cased letter.
///
/// Hyphens not followed by a letter are kept, and input that is already
/// camelCase passes through unchanged.
pub fn kebab_to_camel(field: &str) -> String {
    let mut result = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(next) = chars.peek().copied().filter(|n| n.is_alphabetic()) {
                result.extend(next.to_uppercase());
                chars.next();
                continue;
            }
        }
        result.push(c);
    }

    result
}
