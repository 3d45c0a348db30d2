//! Error types for probdist

use thiserror::Error;

/// probdist error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed constructor/factory argument or out-of-domain evaluation point
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation with no mathematical meaning for the operands involved
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Operation needs state the model does not have (e.g. a loaded dataset)
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    /// Numerical failure
    #[error("Computation error: {0}")]
    Computation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset line (1-based line number)
    #[error("Parse error at line {line}: cannot read {content:?} as a number")]
    Parse {
        /// Line number, starting at 1
        line: usize,
        /// Offending line, trimmed
        content: String,
    },
}

impl Error {
    /// `true` for [`Error::InvalidParameter`].
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::InvalidParameter(_))
    }

    /// `true` for [`Error::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation(_))
    }

    /// `true` for [`Error::PreconditionNotMet`].
    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::PreconditionNotMet(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinguishable() {
        let invalid = Error::InvalidParameter("p".into());
        let unsupported = Error::UnsupportedOperation("sum".into());
        let missing = Error::PreconditionNotMet("data".into());
        assert!(invalid.is_invalid_parameter() && !invalid.is_unsupported());
        assert!(unsupported.is_unsupported() && !unsupported.is_precondition());
        assert!(missing.is_precondition() && !missing.is_invalid_parameter());
    }

    #[test]
    fn test_parse_message_names_line() {
        let e = Error::Parse { line: 3, content: "abc".into() };
        assert_eq!(e.to_string(), "Parse error at line 3: cannot read \"abc\" as a number");
    }

    #[test]
    fn test_io_from() {
        let e: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, Error::Io(_)));
    }
}
