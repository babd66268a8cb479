use thiserror::Error;

/// Rejected configuration values.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("item height must be finite and greater than zero, got {0}")]
    InvalidItemHeight(f64),

    #[error("container buffer size must be finite, got {0}")]
    InvalidBufferSize(f64),
}
