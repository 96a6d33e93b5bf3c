//! Error handling for the security.txt extractor.
//!
//! Only failures that stop us from reading the program surface here. A program
//! that simply carries no security metadata is not an error: extraction then
//! returns an empty [`SecurityInfo`](crate::models::SecurityInfo).

use solana_pubkey::Pubkey;
use thiserror::Error;
use std::fmt;

/// Main error type for the extractor.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The program identity could not be decoded into a 32-byte public key.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The program account, or the program-data account it points to, does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// The account claims upgradeable-loader ownership but its bytes do not
    /// have the expected shape (wrong type tag, truncated header).
    #[error("Invalid account layout: {0}")]
    InvalidAccountLayout(String),

    /// Transport failures while talking to the RPC node.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Errors related to file I/O, such as reading a local program dump.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors from external libraries, such as serialization failures.
    #[error("External error: {0}")]
    External(String),
}

impl ExtractorError {
    /// Short, stable name of the error class, used at the action boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractorError::InvalidInput(_) => "InvalidInput",
            ExtractorError::AccountNotFound(_) => "AccountNotFound",
            ExtractorError::InvalidAccountLayout(_) => "InvalidAccountLayout",
            ExtractorError::Rpc(_) => "Rpc",
            ExtractorError::Io(_) => "Io",
            ExtractorError::External(_) => "External",
        }
    }
}

/// Result type alias for the extractor.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Context information for errors.
///
/// Describes where a foreign error was raised so the message that reaches the
/// caller names the component, the operation and, when known, the account.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Account being read, if applicable.
    pub account: Option<Pubkey>,

    /// Component where the error occurred (e.g., "monitor").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "fetch_account").
    pub operation: String,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(account) = &self.account {
            write!(f, " for account {}", account)?;
        }
        Ok(())
    }
}

/// Extension trait for turning foreign errors into [`ExtractorError`]s with context.
pub trait ErrorExt<T> {
    /// Add context to an error and classify it.
    ///
    /// Messages mentioning the transport (rpc, connection, timeout, http) become
    /// [`ExtractorError::Rpc`]; everything else becomes [`ExtractorError::External`].
    fn with_context(self, context: ErrorContext) -> ExtractorResult<T>;

    /// Add component/operation context without an account.
    fn with_simple_context(self, component: &str, operation: &str) -> ExtractorResult<T>;
}

impl<T, E: std::error::Error> ErrorExt<T> for Result<T, E> {
    fn with_context(self, context: ErrorContext) -> ExtractorResult<T> {
        self.map_err(|e| {
            let error_msg = format!("{}: {}", context, e);
            match e.to_string().to_lowercase() {
                s if s.contains("rpc")
                    || s.contains("connection")
                    || s.contains("timeout")
                    || s.contains("timed out")
                    || s.contains("http") =>
                    ExtractorError::Rpc(error_msg),
                _ => ExtractorError::External(error_msg),
            }
        })
    }

    fn with_simple_context(self, component: &str, operation: &str) -> ExtractorResult<T> {
        self.with_context(ErrorContext {
            account: None,
            component: component.to_string(),
            operation: operation.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FakeError(&'static str);

    impl fmt::Display for FakeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for FakeError {}

    #[test]
    fn test_transport_errors_become_rpc() {
        let result: Result<(), FakeError> = Err(FakeError("error sending request: connection refused"));
        let err = result.with_simple_context("monitor", "fetch_account").unwrap_err();

        assert!(matches!(err, ExtractorError::Rpc(_)));
        assert!(err.to_string().contains("In monitor while fetch_account"));
    }

    #[test]
    fn test_other_errors_become_external() {
        let result: Result<(), FakeError> = Err(FakeError("key must be a string"));
        let err = result.with_simple_context("tool", "serialize").unwrap_err();

        assert!(matches!(err, ExtractorError::External(_)));
        assert_eq!(err.kind(), "External");
    }

    #[test]
    fn test_context_names_account() {
        let account = Pubkey::new_from_array([7u8; 32]);
        let context = ErrorContext {
            account: Some(account),
            component: "monitor".to_string(),
            operation: "fetch_account".to_string(),
        };

        assert_eq!(
            context.to_string(),
            format!("In monitor while fetch_account for account {}", account)
        );
    }
}
