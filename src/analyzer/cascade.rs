//! Ordered matchers over the decoded program text

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::security_txt::fields;
use crate::models::{Extraction, MatchSource, SecurityInfo};
use super::embedded::match_embedded;
use super::heuristics;
use super::normalizer::normalize_block;

/// A line holding only `# security.txt`, at the start of the text or after a
/// newline or NUL.
static STANDARD_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\A|[\n\x00])[ \t]*#[ \t]*security\.txt[ \t]*\r?\n").expect("static regex compiles")
});

/// End of a standard block: a blank line, the next comment line or a NUL.
static STANDARD_BLOCK_END: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n[ \t]*\r?\n|\n#|\x00").expect("static regex compiles")
});

static DELIMITED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)-----BEGIN SECURITY\.TXT-----(.*?)-----END SECURITY\.TXT-----")
        .expect("static regex compiles")
});

// Values stop at control characters and U+FFFD, which is what undecodable
// program bytes around an embedded string turn into.
static CONTACT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\n\x00])[ \t]*contact[ \t]*:[ \t]*([^\p{Cc}\x{FFFD}]+)")
        .expect("static regex compiles")
});

static SECURITY_CONTACT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[\n\x00])[ \t]*security-contact[ \t]*:[ \t]*([^\p{Cc}\x{FFFD}]+)")
        .expect("static regex compiles")
});

pub(super) static MAILTO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)mailto:[^\s\p{Cc}\x{FFFD}"'<>()\[\]{},;]+@[^\s\p{Cc}\x{FFFD}"'<>()\[\]{},;]+"#,
    )
    .expect("static regex compiles")
});

type Matcher = fn(&str) -> Option<SecurityInfo>;

/// Structured matchers, most specific first.
const MATCHERS: [(MatchSource, Matcher); 4] = [
    (MatchSource::EmbeddedStandard, match_embedded),
    (MatchSource::StandardBlock, match_standard_block),
    (MatchSource::DelimitedBlock, match_delimited_block),
    (MatchSource::SingleField, match_single_field),
];

/// Run the cascade over decoded program text.
///
/// The first matcher yielding a non-empty mapping wins; results are never
/// merged across matchers. When none hits, the heuristic scan decides, and an
/// empty [`Extraction`] means no metadata was found.
pub fn run(text: &str) -> Extraction {
    let structured = MATCHERS.iter().find_map(|(source, matcher)| {
        let info = matcher(text).filter(|info| !info.is_empty())?;
        debug!("{:?} matcher produced {} field(s)", source, info.len());
        Some(Extraction::new(info, *source))
    });
    if let Some(extraction) = structured {
        return extraction;
    }

    let info = heuristics::scan(text);
    if info.is_empty() {
        debug!("No security metadata found in {} bytes of program text", text.len());
        Extraction::empty()
    } else {
        Extraction::new(info, MatchSource::Heuristic)
    }
}

/// `# security.txt` comment header followed by `field: value` lines.
///
/// Headers are tried in order; the first whose block yields fields wins.
pub fn match_standard_block(text: &str) -> Option<SecurityInfo> {
    let mut pos = 0;
    while let Some(header) = STANDARD_HEADER.find_at(text, pos) {
        let body = &text[header.end()..];
        let end = STANDARD_BLOCK_END.find(body).map_or(body.len(), |m| m.start());

        let info = normalize_block(&body[..end]);
        if !info.is_empty() {
            return Some(info);
        }
        // Back up onto the header's newline so an adjacent header still matches.
        pos = header.end() - 1;
    }
    None
}

/// Interior of a `-----BEGIN SECURITY.TXT-----` / `-----END SECURITY.TXT-----` pair
pub fn match_delimited_block(text: &str) -> Option<SecurityInfo> {
    DELIMITED_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|block| normalize_block(block.as_str()))
        .find(|info| !info.is_empty())
}

/// A lone `Contact:` line, then `Security-Contact:`, then any `mailto:` URI
pub fn match_single_field(text: &str) -> Option<SecurityInfo> {
    let contact = [&*CONTACT_LINE, &*SECURITY_CONTACT_LINE]
        .iter()
        .find_map(|re| {
            let value = re.captures(text)?.get(1)?.as_str().trim();
            (!value.is_empty()).then_some(value)
        })
        .or_else(|| MAILTO.find(text).map(|m| m.as_str().trim()))?;

    let mut info = SecurityInfo::new();
    info.insert(fields::CONTACT, contact);
    Some(info)
}
