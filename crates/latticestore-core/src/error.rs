use thiserror::Error;

/// Contract violations: programmer errors that never mutate state. Capacity
/// exhaustion and logical negatives (duplicate, not-found, full) are first
/// class results, not errors — see [`crate::InsertOutcome`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("wildcard sentinel 0x{:08X} may not be stored as a triple ID", crate::triple::WILDCARD)]
    WildcardAsId,
}
