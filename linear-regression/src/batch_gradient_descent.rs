use nalgebra::{DMatrix, DVector};

use crate::{
    gradient::{check_finite, check_shapes, mse_gradient},
    FitStrategy, Result,
};

/// Gradient descent over the full dataset.
///
/// Starting from `theta = 0`, every iteration steps against the gradient of
/// the mean squared error computed over all rows:
/// `theta -= learning_rate * (2 / m) * Xᵀ (X theta - y)`
#[derive(Debug, Clone)]
pub struct BatchGradientDescent {
    learning_rate: f64,
    iterations: usize,
    tolerance: Option<f64>,
}

impl BatchGradientDescent {
    /// Create a new batch gradient descent strategy
    ///
    /// # Arguments:
    /// learning_rate: Step size of each update
    /// iterations: The exact number of updates to perform
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            tolerance: None,
        }
    }

    /// Stop early once the euclidean norm of the gradient drops below
    /// `tolerance`. Without it all iterations are executed.
    pub fn with_tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl FitStrategy for BatchGradientDescent {
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_shapes(design, targets)?;

        let mut theta = DVector::zeros(design.ncols());

        for iteration in 0..self.iterations {
            let gradient = mse_gradient(design, targets, &theta);
            if let Some(tolerance) = self.tolerance {
                if gradient.norm() < tolerance {
                    debug!("converged after {} of {} iterations", iteration, self.iterations);
                    break;
                }
            }
            theta -= gradient * self.learning_rate;
            trace!("iteration {}: theta: {}", iteration, theta);
        }
        check_finite("batch gradient descent", &theta);

        Ok(theta)
    }
}
