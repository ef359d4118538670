/// The configuration of a [`RegressionModel`](crate::RegressionModel).
///
/// Only the gradient descent strategies read these values, the closed form
/// strategies ignore them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Step size of every gradient descent update
    pub learning_rate: f64,
    /// Number of epochs to run. Every epoch is executed, there is no early
    /// exit unless `tolerance` is set.
    pub iterations: usize,
    /// Optional seed for the Rng used by the stochastic and mini-batch
    /// variants. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Stop batch gradient descent once the norm of the gradient falls below
    /// this value
    pub tolerance: Option<f64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
            seed: None,
            tolerance: None,
        }
    }
}
