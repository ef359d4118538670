use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};

use crate::{
    gradient::{check_finite, check_shapes, mse_gradient},
    FitStrategy, Result,
};

/// Gradient descent on one randomly drawn example at a time.
///
/// Every epoch performs `m` updates, each on a row drawn uniformly with
/// replacement, so a row may be visited several times or not at all within
/// one epoch. The single example gradient `2 x_iᵀ (x_i theta - y_i)` is applied
/// immediately.
#[derive(Debug, Clone)]
pub struct StochasticGradientDescent {
    learning_rate: f64,
    iterations: usize,
    rng: WyRand,
}

impl StochasticGradientDescent {
    /// Create a new stochastic gradient descent strategy
    ///
    /// # Arguments:
    /// learning_rate: Step size of each update
    /// iterations: Number of epochs, each consisting of `m` updates
    /// seed: Optional seed for the Rng drawing the examples
    pub fn new(learning_rate: f64, iterations: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        Self {
            learning_rate,
            iterations,
            rng,
        }
    }
}

impl FitStrategy for StochasticGradientDescent {
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_shapes(design, targets)?;

        let m = design.nrows();
        let mut theta = DVector::zeros(design.ncols());

        for epoch in 0..self.iterations {
            for _ in 0..m {
                let i = self.rng.generate_range(0..m);
                let gradient = mse_gradient(&design.rows(i, 1), &targets.rows(i, 1), &theta);
                theta -= gradient * self.learning_rate;
            }
            trace!("epoch {}: theta: {}", epoch, theta);
        }
        check_finite("stochastic gradient descent", &theta);

        Ok(theta)
    }
}
