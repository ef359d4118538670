use nalgebra::{storage::Storage, Const, DMatrix, DVector, Dyn, Matrix};

use crate::{Error, Result};

/// Reject empty inputs and targets that do not line up with the rows of
/// `design`, before nalgebra gets to panic on them
pub(crate) fn check_shapes(design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<()> {
    if design.nrows() == 0 {
        return Err(Error::EmptyInput);
    }
    if targets.len() != design.nrows() {
        return Err(Error::DimensionMismatch {
            context: "targets",
            expected: design.nrows(),
            found: targets.len(),
        });
    }

    Ok(())
}

/// Gradient of the mean squared error over the given rows:
/// `(2 / k) * Xᵀ (X theta - y)` where `k` is the number of rows.
///
/// Works on whole matrices as well as on row views, so batch, mini-batch
/// and single example updates all share it.
pub(crate) fn mse_gradient<SX, SY>(
    design: &Matrix<f64, Dyn, Dyn, SX>,
    targets: &Matrix<f64, Dyn, Const<1>, SY>,
    theta: &DVector<f64>,
) -> DVector<f64>
where
    SX: Storage<f64, Dyn, Dyn>,
    SY: Storage<f64, Dyn, Const<1>>,
{
    let residuals = design * theta - targets;
    design.tr_mul(&residuals) * (2.0 / design.nrows() as f64)
}

/// Warn about coefficients that ran off to infinity, which happens when the
/// learning rate is too large for the data
pub(crate) fn check_finite(strategy: &str, theta: &DVector<f64>) {
    if theta.iter().any(|v| !v.is_finite()) {
        warn!("{} diverged, theta contains non-finite values: {}", strategy, theta);
    }
}
