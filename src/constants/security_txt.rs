//! Markers and field names of embedded security.txt metadata

/// Opening marker of the NUL-delimited block written by the `security_txt!` macro.
pub const EMBEDDED_BEGIN_MARKER: &str = "=======BEGIN SECURITY.TXT V1=======\0";

/// Closing marker of the NUL-delimited block.
pub const EMBEDDED_END_MARKER: &str = "=======END SECURITY.TXT V1=======\0";

/// Opening marker of the dashed, armor-style block.
pub const DELIMITED_BEGIN_MARKER: &str = "-----BEGIN SECURITY.TXT-----";

/// Closing marker of the dashed, armor-style block.
pub const DELIMITED_END_MARKER: &str = "-----END SECURITY.TXT-----";

pub const PGP_BEGIN_MARKER: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";
pub const PGP_END_MARKER: &str = "-----END PGP PUBLIC KEY BLOCK-----";

/// Value stored under `encryption` when the heuristic scan sees a PGP key.
/// The key material itself is never copied out.
pub const PGP_KEY_FOUND: &str = "PGP public key found in program data";

/// URL path suffixes that mark a disclosure page.
pub const DISCLOSURE_URL_SUFFIXES: [&str; 3] = ["/security", "/responsible-disclosure", "/vulnerability"];

pub mod fields {
    //! Well-known, already-normalized field names

    pub const CONTACT: &str = "contact";
    pub const EXPIRES: &str = "expires";
    pub const ENCRYPTION: &str = "encryption";
    pub const ACKNOWLEDGMENTS: &str = "acknowledgments";
    pub const PREFERRED_LANGUAGES: &str = "preferredLanguages";
    pub const CANONICAL: &str = "canonical";
    pub const POLICY: &str = "policy";
    pub const HIRING: &str = "hiring";

    /// All well-known field names.
    pub const WELL_KNOWN: [&str; 8] = [
        CONTACT,
        EXPIRES,
        ENCRYPTION,
        ACKNOWLEDGMENTS,
        PREFERRED_LANGUAGES,
        CANONICAL,
        POLICY,
        HIRING,
    ];
}
