use nalgebra::{DMatrix, DVector};

use crate::{gradient::check_shapes, Error, FitStrategy, Result};

/// Closed form least squares: `theta = (XᵀX)⁻¹ Xᵀ y`.
///
/// Exact for well conditioned data, but requires the design matrix to have
/// full column rank. Near singular matrices are inverted anyway and the
/// resulting numerical error is passed on to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalEquation;

impl FitStrategy for NormalEquation {
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_shapes(design, targets)?;

        let p0 = design.transpose() * design;
        let p1 = p0.try_inverse().ok_or(Error::SingularMatrix)?;
        let p2 = design.transpose() * targets;

        Ok(p1 * p2)
    }
}
