use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while fitting or evaluating a model
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// `XᵀX` could not be inverted, the design matrix is not of full column rank
    #[error("the normal matrix XᵀX is singular and can not be inverted")]
    SingularMatrix,

    /// Two operands do not have compatible shapes
    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// What was being checked
        context: &'static str,
        /// The size that was required
        expected: usize,
        /// The size that was given
        found: usize,
    },

    /// The coefficients were read before any fit succeeded
    #[error("the model has not been fitted yet")]
    NotFitted,

    /// No observations were given
    #[error("at least one observation is required")]
    EmptyInput,

    /// Mini-batches must hold at least one row
    #[error("batch size must be positive, got {0}")]
    InvalidBatchSize(usize),

    /// The singular value decomposition did not yield its orthogonal factors.
    /// nalgebra always returns them when both are requested, as the pseudoinverse does.
    #[error("singular value decomposition did not produce {0}")]
    Decomposition(&'static str),
}
