use nalgebra::{DMatrix, Dim, Matrix};

/// Build the design matrix `X_b` by prepending a column of 1s to the
/// observations, so that `theta[0]` acts as the intercept.
///
/// # Arguments
/// observations: One row per datapoint and one column per feature
pub fn design_matrix(observations: &DMatrix<f64>) -> DMatrix<f64> {
    Matrix::from_fn_generic(
        Dim::from_usize(observations.nrows()),
        Dim::from_usize(observations.ncols() + 1),
        |i, j| {
            if j == 0 {
                1.0
            } else {
                observations[(i, j - 1)]
            }
        },
    )
}
