use thiserror::Error;

/// Convenience result type for fallible helper operations.
pub type HelperResult<T> = Result<T, HelperError>;

/// Error type for contract violations.
///
/// Ordinary invalid input never produces an error; helpers return sentinel values instead
/// (`0`, `None`, an empty `Vec`, or [`crate::validation::ValidationResult::Invalid`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelperError {
    /// A role string outside the closed set `admin` / `editor` / `viewer`.
    #[error("unknown role '{role}' (expected one of: admin, editor, viewer)")]
    UnknownRole { role: String },
}
