use nalgebra::{DMatrix, DVector};

use crate::{gradient::check_shapes, Error, FitStrategy, Result};

/// Least squares through the Moore-Penrose pseudoinverse of the design
/// matrix, computed from its reduced singular value decomposition
/// `X = U diag(S) Vᵀ`:
///
/// `theta = V diag(1 / S) Uᵀ y`
///
/// Slower than the [`NormalEquation`](crate::NormalEquation), but it copes
/// with rank deficient and ill conditioned designs, where it returns the
/// minimum norm solution.
#[derive(Debug, Clone, Copy)]
pub struct Pseudoinverse {
    /// Relative cutoff for small singular values. Any `s <= rcond * max(S)`
    /// is treated as zero and contributes nothing to theta instead of `1 / s`.
    pub rcond: f64,
}

impl Pseudoinverse {
    /// Create a pseudoinverse solver with a custom singular value cutoff.
    /// A cutoff of 0 only drops singular values that are exactly zero.
    pub fn new(rcond: f64) -> Self {
        Self { rcond }
    }
}

impl Default for Pseudoinverse {
    fn default() -> Self {
        Self { rcond: 1e-10 }
    }
}

impl FitStrategy for Pseudoinverse {
    fn fit_theta(&mut self, design: &DMatrix<f64>, targets: &DVector<f64>) -> Result<DVector<f64>> {
        check_shapes(design, targets)?;

        let svd = design.clone().svd(true, true);
        let u = svd.u.ok_or(Error::Decomposition("U"))?;
        let v_t = svd.v_t.ok_or(Error::Decomposition("Vᵀ"))?;

        let s_max = svd.singular_values.iter().cloned().fold(0.0, f64::max);
        let cutoff = self.rcond * s_max;

        let mut projected = u.tr_mul(targets);
        let mut dropped: usize = 0;
        for (p, s) in projected.iter_mut().zip(svd.singular_values.iter()) {
            if *s <= cutoff {
                *p = 0.0;
                dropped += 1;
            } else {
                *p /= *s;
            }
        }
        if dropped > 0 {
            warn!(
                "design matrix is rank deficient, dropped {} of {} singular values below {:e}",
                dropped,
                svd.singular_values.len(),
                cutoff
            );
        }

        Ok(v_t.tr_mul(&projected))
    }
}
