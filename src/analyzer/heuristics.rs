//! Last-resort free-text scan for contact-shaped substrings

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::security_txt::{
    fields, DISCLOSURE_URL_SUFFIXES, PGP_BEGIN_MARKER, PGP_END_MARKER, PGP_KEY_FOUND,
};
use crate::models::SecurityInfo;
use super::cascade::MAILTO;

static SECURITY_EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bsecurity@[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+")
        .expect("static regex compiles")
});

static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)https?://[^\s\p{Cc}\x{FFFD}"'<>`]+"#).expect("static regex compiles")
});

/// Scan text that carried no structured block.
///
/// Contact categories are tried in priority order (security@ email, `mailto:`
/// URI, disclosure URL); the first category with any hit wins even when a
/// later category matches earlier in the text. A PGP public key block sets
/// `encryption` independently.
pub fn scan(text: &str) -> SecurityInfo {
    let mut info = SecurityInfo::new();

    let contact = first_security_email(text)
        .or_else(|| first_mailto(text))
        .or_else(|| first_disclosure_url(text));
    if let Some(contact) = contact {
        debug!("Heuristic scan found contact {}", contact);
        info.insert(fields::CONTACT, contact);
    }

    if has_pgp_key(text) {
        debug!("Heuristic scan found a PGP public key block");
        info.insert(fields::ENCRYPTION, PGP_KEY_FOUND);
    }

    info
}

fn first_security_email(text: &str) -> Option<String> {
    SECURITY_EMAIL.find(text).map(|m| m.as_str().to_string())
}

fn first_mailto(text: &str) -> Option<String> {
    MAILTO.find(text).map(|m| m.as_str().to_string())
}

fn first_disclosure_url(text: &str) -> Option<String> {
    URL.find_iter(text)
        .map(|m| trim_url(m.as_str()))
        .find(|url| {
            let lower = url.to_lowercase();
            DISCLOSURE_URL_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
        })
        .map(str::to_string)
}

/// Drop sentence punctuation and a trailing slash picked up by the URL pattern.
fn trim_url(url: &str) -> &str {
    url.trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | ')' | ']' | '}' | '/'))
}

fn has_pgp_key(text: &str) -> bool {
    text.find(PGP_BEGIN_MARKER)
        .is_some_and(|start| text[start..].contains(PGP_END_MARKER))
}
