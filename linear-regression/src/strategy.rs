use std::fmt;

/// The closed set of fitting strategies a [`RegressionModel`](crate::RegressionModel)
/// can be trained with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Closed form `(XᵀX)⁻¹ Xᵀ y`
    NormalEquation,
    /// Pseudoinverse through singular value decomposition
    Pseudoinverse,
    /// Gradient descent over the whole dataset
    BatchGradientDescent,
    /// Gradient descent on single, randomly drawn examples
    StochasticGradientDescent,
    /// Gradient descent on shuffled chunks of `batch_size` rows
    MiniBatchGradientDescent {
        /// Number of rows per update
        batch_size: usize,
    },
}

impl Strategy {
    /// Whether the result depends on the Rng
    pub fn is_randomized(&self) -> bool {
        matches!(
            self,
            Strategy::StochasticGradientDescent | Strategy::MiniBatchGradientDescent { .. }
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::NormalEquation => write!(f, "normal equation"),
            Strategy::Pseudoinverse => write!(f, "SVD pseudoinverse"),
            Strategy::BatchGradientDescent => write!(f, "batch gradient descent"),
            Strategy::StochasticGradientDescent => write!(f, "stochastic gradient descent"),
            Strategy::MiniBatchGradientDescent { batch_size } => {
                write!(f, "mini-batch gradient descent (batch size {})", batch_size)
            }
        }
    }
}
