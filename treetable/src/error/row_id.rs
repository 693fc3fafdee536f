//! Row id parse errors

/// Error returned when a dot-delimited row id string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRowIdError {
    /// The input was empty.
    #[error("Row id is empty")]
    Empty,

    /// A segment was not a non-negative integer.
    #[error("Row id '{input}' has an invalid segment '{segment}'")]
    InvalidSegment { input: String, segment: String },
}
