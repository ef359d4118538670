use nalgebra::{DMatrix, DVector, DVectorView};

use crate::{
    design_matrix, gradient::check_shapes, BatchGradientDescent, Error, FitStrategy,
    MiniBatchGradientDescent, NormalEquation, Params, Pseudoinverse, Result,
    StochasticGradientDescent, Strategy,
};

/// A linear model `y = theta_0 + theta_1 x_1 + ... + theta_n x_n`.
///
/// The model holds its [`Params`] and, once a fit succeeded, the coefficient
/// vector `theta`. Every successful fit replaces the previous coefficients,
/// a failed fit leaves them untouched.
#[derive(Debug, Clone, Default)]
pub struct RegressionModel {
    params: Params,
    theta: Option<DVector<f64>>,
}

impl RegressionModel {
    /// Create a new, unfitted model. The parameters are not validated, a
    /// non-positive learning rate simply won't converge.
    pub fn new(params: Params) -> Self {
        Self {
            params,
            theta: None,
        }
    }

    /// The parameters the model was created with
    #[inline(always)]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The fitted coefficients, intercept first
    #[inline(always)]
    pub fn theta(&self) -> Option<&DVector<f64>> {
        self.theta.as_ref()
    }

    /// The fitted intercept `theta_0`
    pub fn intercept(&self) -> Option<f64> {
        self.theta.as_ref().map(|theta| theta[0])
    }

    /// The fitted per feature weights `theta_1..theta_n`
    pub fn weights(&self) -> Option<DVectorView<'_, f64>> {
        self.theta.as_ref().map(|theta| theta.rows(1, theta.len() - 1))
    }

    /// Fit the coefficients with one of the built in strategies, configured
    /// from the models [`Params`]
    ///
    /// # Arguments:
    /// strategy: Which estimator to use
    /// observations: One row per datapoint, one column per feature
    /// targets: One value per row of `observations`
    pub fn fit(
        &mut self,
        strategy: Strategy,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        let Params {
            learning_rate,
            iterations,
            seed,
            tolerance,
        } = self.params;

        match strategy {
            Strategy::NormalEquation => self.fit_with(&mut NormalEquation, observations, targets),
            Strategy::Pseudoinverse => {
                self.fit_with(&mut Pseudoinverse::default(), observations, targets)
            }
            Strategy::BatchGradientDescent => self.fit_with(
                &mut BatchGradientDescent::new(learning_rate, iterations).with_tolerance(tolerance),
                observations,
                targets,
            ),
            Strategy::StochasticGradientDescent => self.fit_with(
                &mut StochasticGradientDescent::new(learning_rate, iterations, seed),
                observations,
                targets,
            ),
            Strategy::MiniBatchGradientDescent { batch_size } => self.fit_with(
                &mut MiniBatchGradientDescent::new(learning_rate, iterations, batch_size, seed),
                observations,
                targets,
            ),
        }
    }

    /// Fit the coefficients with any [`FitStrategy`], for example a
    /// [`Pseudoinverse`] with a custom cutoff
    pub fn fit_with<S: FitStrategy>(
        &mut self,
        strategy: &mut S,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        check_shapes(observations, targets)?;
        debug!(
            "fitting {} observations with {} features",
            observations.nrows(),
            observations.ncols()
        );

        let design = design_matrix(observations);
        let theta = strategy.fit_theta(&design, targets)?;
        debug!("fitted theta: {}", theta);
        self.theta = Some(theta);

        Ok(())
    }

    /// Fit using the closed form normal equation
    pub fn fit_normal_equation(
        &mut self,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        self.fit(Strategy::NormalEquation, observations, targets)
    }

    /// Fit using the pseudoinverse obtained from the singular value decomposition
    pub fn fit_svd_pseudoinverse(
        &mut self,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        self.fit(Strategy::Pseudoinverse, observations, targets)
    }

    /// Fit using gradient descent over the whole dataset
    pub fn fit_batch_gradient_descent(
        &mut self,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        self.fit(Strategy::BatchGradientDescent, observations, targets)
    }

    /// Fit using gradient descent on randomly drawn single examples
    pub fn fit_stochastic_gradient_descent(
        &mut self,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
    ) -> Result<()> {
        self.fit(Strategy::StochasticGradientDescent, observations, targets)
    }

    /// Fit using gradient descent on shuffled chunks of `batch_size` rows
    pub fn fit_mini_batch_gradient_descent(
        &mut self,
        observations: &DMatrix<f64>,
        targets: &DVector<f64>,
        batch_size: usize,
    ) -> Result<()> {
        self.fit(Strategy::MiniBatchGradientDescent { batch_size }, observations, targets)
    }

    /// Predict one target value per row of `observations`
    pub fn predict(&self, observations: &DMatrix<f64>) -> Result<DVector<f64>> {
        let theta = self.theta.as_ref().ok_or(Error::NotFitted)?;
        if observations.ncols() + 1 != theta.len() {
            return Err(Error::DimensionMismatch {
                context: "features",
                expected: theta.len() - 1,
                found: observations.ncols(),
            });
        }

        Ok(design_matrix(observations) * theta)
    }

    /// Render the fitted model as `y = c0 + c1 * x_1 + c2 * x_2 ...`, with two
    /// decimals per coefficient
    pub fn equation(&self) -> Result<String> {
        let theta = self.theta.as_ref().ok_or(Error::NotFitted)?;

        let mut equation = format!("y = {:.2}", theta[0]);
        for (i, c) in theta.iter().enumerate().skip(1) {
            equation.push_str(&format!(" + {:.2} * x_{}", c, i));
        }

        Ok(equation)
    }
}
