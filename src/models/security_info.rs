//! Extracted security contact metadata

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::security_txt::fields;

/// Normalized field name → value.
///
/// An empty mapping is a valid result meaning "no metadata found".
/// Keys are kept sorted so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecurityInfo(BTreeMap<String, String>);

impl SecurityInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any earlier value under the same key.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contact(&self) -> Option<&str> {
        self.get(fields::CONTACT)
    }

    pub fn encryption(&self) -> Option<&str> {
        self.get(fields::ENCRYPTION)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields whose names are not among the well-known security.txt keys.
    pub fn custom_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| !fields::WELL_KNOWN.contains(k))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SecurityInfo {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Which cascade stage produced an extraction result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchSource {
    /// NUL-delimited block written by the `security_txt!` macro
    EmbeddedStandard,
    /// `# security.txt` comment-headed block
    StandardBlock,
    /// `-----BEGIN SECURITY.TXT-----` armored block
    DelimitedBlock,
    /// A lone `Contact:`, `Security-Contact:` or `mailto:` hit
    SingleField,
    /// Free-text scan for contact-shaped substrings
    Heuristic,
    /// Nothing recognizable
    None,
}

/// Result of running the extraction cascade over a program image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub info: SecurityInfo,
    pub source: MatchSource,
}

impl Extraction {
    pub fn new(info: SecurityInfo, source: MatchSource) -> Self {
        Self { info, source }
    }

    pub fn empty() -> Self {
        Self::new(SecurityInfo::new(), MatchSource::None)
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }
}
