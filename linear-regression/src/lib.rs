//! Ordinary least squares linear regression with interchangeable fitting
//! strategies: closed form, SVD based pseudoinverse and three flavours of
//! gradient descent.

#![warn(unused_imports, unused_crate_dependencies)]
#![warn(missing_docs)]

#[macro_use]
extern crate log;

use nalgebra::{DMatrix, DVector};

mod batch_gradient_descent;
mod design;
mod error;
mod gradient;
mod metrics;
mod mini_batch_gradient_descent;
mod model;
mod normal_equation;
mod params;
mod pseudoinverse;
mod stochastic_gradient_descent;
mod strategy;

pub use batch_gradient_descent::BatchGradientDescent;
pub use design::design_matrix;
pub use error::{Error, Result};
pub use metrics::{mean_squared_error, root_mean_squared_error};
pub use mini_batch_gradient_descent::MiniBatchGradientDescent;
pub use model::RegressionModel;
pub use normal_equation::NormalEquation;
pub use params::Params;
pub use pseudoinverse::Pseudoinverse;
pub use stochastic_gradient_descent::StochasticGradientDescent;
pub use strategy::Strategy;

/// Generic way of estimating the coefficient vector of a linear model
pub trait FitStrategy {
    /// Fit the coefficients `theta`, mapping the design matrix onto the targets
    ///
    /// # Parameters
    /// design: Observations with a leading column of 1s, see [`design_matrix`]
    /// targets: One target value per row of `design`
    ///
    /// # Returns
    /// The coefficient vector, one entry per column of `design`
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>>;
}
