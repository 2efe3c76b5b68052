/// Errors produced by the `vend-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A denomination key was not a finite, non-negative number.
    #[error("invalid denomination '{key}': {reason}")]
    InvalidDenomination { key: String, reason: String },
}
