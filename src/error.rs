//! Error types for set construction and traversal.
//!
//! Only a handful of operations can reject their input: reserving a
//! capacity that cannot be allocated, growing a set past the addressable
//! size, and chunking with a chunk size of zero. Each of these has a
//! `try_` form returning [`InvalidArgumentError`]; the plain form panics
//! with the error's message.

/// Represents a violated precondition on an argument.
///
/// Passing an invalid argument is a programming error. The panicking
/// operations format this error into their panic message, so the message
/// always names the operation and the offending argument.
///
/// # Examples
///
/// ```rust
/// use setops::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     operation: "chunk",
///     argument: "size",
///     reason: "cannot be less than 1",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "chunk: invalid argument `size`: cannot be less than 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the operation that rejected the argument.
    pub operation: &'static str,
    /// The name of the rejected argument.
    pub argument: &'static str,
    /// A short human-readable cause.
    pub reason: &'static str,
}

impl InvalidArgumentError {
    pub(crate) const fn capacity_overflow(operation: &'static str, argument: &'static str) -> Self {
        Self {
            operation,
            argument,
            reason: "capacity overflow",
        }
    }
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: invalid argument `{}`: {}",
            self.operation, self.argument, self.reason
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_error_display() {
        let error = InvalidArgumentError {
            operation: "grow",
            argument: "additional",
            reason: "capacity overflow",
        };
        assert_eq!(
            format!("{error}"),
            "grow: invalid argument `additional`: capacity overflow"
        );
    }

    #[rstest]
    fn test_capacity_overflow_constructor() {
        let error = InvalidArgumentError::capacity_overflow("with_capacity", "capacity");
        assert_eq!(error.operation, "with_capacity");
        assert_eq!(error.argument, "capacity");
        assert_eq!(error.reason, "capacity overflow");
    }

    #[rstest]
    fn test_invalid_argument_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(InvalidArgumentError {
            operation: "chunk",
            argument: "size",
            reason: "cannot be less than 1",
        });
        assert!(error.source().is_none());
    }
}
