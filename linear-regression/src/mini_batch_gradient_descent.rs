use nalgebra::{DMatrix, DVector};
use nanorand::{Rng, WyRand};

use crate::{
    gradient::{check_finite, check_shapes, mse_gradient},
    Error, FitStrategy, Result,
};

/// Gradient descent on shuffled, contiguous chunks of the dataset.
///
/// Each epoch draws a fresh permutation of the rows, reorders design and
/// targets accordingly and walks over them in chunks of `batch_size` rows.
/// The last chunk is shorter when `m` is not a multiple of `batch_size`.
/// Theta is updated after every chunk with the gradient averaged over that
/// chunk.
#[derive(Debug, Clone)]
pub struct MiniBatchGradientDescent {
    learning_rate: f64,
    iterations: usize,
    batch_size: usize,
    rng: WyRand,
}

impl MiniBatchGradientDescent {
    /// Create a new mini-batch gradient descent strategy
    ///
    /// # Arguments:
    /// learning_rate: Step size of each update
    /// iterations: Number of epochs, each a full pass over a fresh permutation
    /// batch_size: Number of rows per update
    /// seed: Optional seed for the Rng generating the permutations
    pub fn new(learning_rate: f64, iterations: usize, batch_size: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        Self {
            learning_rate,
            iterations,
            batch_size,
            rng,
        }
    }
}

impl FitStrategy for MiniBatchGradientDescent {
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        if self.batch_size == 0 {
            return Err(Error::InvalidBatchSize(self.batch_size));
        }
        check_shapes(design, targets)?;
        let m = design.nrows();
        let mut theta = DVector::zeros(design.ncols());
        let mut indices: Vec<usize> = (0..m).collect();

        for epoch in 0..self.iterations {
            self.rng.shuffle(&mut indices);
            let shuffled_design = design.select_rows(indices.iter());
            let shuffled_targets = targets.select_rows(indices.iter());

            for start in (0..m).step_by(self.batch_size) {
                let len = self.batch_size.min(m - start);
                let gradient = mse_gradient(
                    &shuffled_design.rows(start, len),
                    &shuffled_targets.rows(start, len),
                    &theta,
                );
                theta -= gradient * self.learning_rate;
            }
            trace!("epoch {}: theta: {}", epoch, theta);
        }
        check_finite("mini-batch gradient descent", &theta);

        Ok(theta)
    }
}
