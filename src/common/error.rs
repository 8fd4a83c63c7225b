//! Error types for pagesim.
//!
//! The simulation itself never fails: degenerate configurations travel as
//! [`Outcome::NotApplicable`](crate::cache::Outcome). Errors only come from
//! the edges, when parameters or reference strings are built from outside
//! input, or when a report is written out.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A reference string contained a page ID outside the valid range.
    ///
    /// Page IDs start at 1; 0 is reserved.
    #[error("Invalid page ID: {0}")]
    InvalidPageId(u32),

    /// A top-level parameter is out of range.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A strategy name did not match any known eviction policy.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPageId(0);
        assert_eq!(format!("{}", err), "Invalid page ID: 0");

        let err = Error::invalid_parameter("process_count", "must be at least 1");
        assert_eq!(
            format!("{}", err),
            "Invalid parameter `process_count`: must be at least 1"
        );

        let err = Error::UnknownStrategy("CLOCK".into());
        assert_eq!(format!("{}", err), "Unknown strategy: CLOCK");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }
}
