//! Cross-crate integration tests only; see `tests/`. No public API.
