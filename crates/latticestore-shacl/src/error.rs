use thiserror::Error;

/// Contract violations raised by the shape registry. Never raised by
/// [`crate::Validator::validate`] — validation itself cannot fail, it only
/// produces [`crate::ValidationOutcome::Ok`] or `Violation`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShaclError {
    #[error("shape id {0} is already defined")]
    DuplicateId(u32),

    #[error("shape id {0} is not defined")]
    UnknownShape(u32),

    #[error("shape {0}'s constraint list is at capacity")]
    OutOfCapacity(u32),
}
