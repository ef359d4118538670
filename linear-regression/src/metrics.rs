use nalgebra::DVector;

use crate::{Error, Result};

/// Mean of the squared differences between true and predicted values
pub fn mean_squared_error(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch {
            context: "predicted values",
            expected: y_true.len(),
            found: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok((y_pred - y_true).norm_squared() / y_true.len() as f64)
}

/// Square root of the [`mean_squared_error`], in the units of the targets
pub fn root_mean_squared_error(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<f64> {
    Ok(mean_squared_error(y_true, y_pred)?.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_prediction() {
        let y = DVector::from_vec(vec![3.0, 5.0, 7.0, 9.0]);

        assert_eq!(mean_squared_error(&y, &y), Ok(0.0));
        assert_eq!(root_mean_squared_error(&y, &y), Ok(0.0));
    }

    #[test]
    fn known_errors() {
        let y_true = DVector::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let y_pred = DVector::from_vec(vec![2.0, 2.0, 1.0, 4.0]);

        // (1 + 0 + 4 + 0) / 4
        assert_eq!(mean_squared_error(&y_true, &y_pred), Ok(1.25));
        assert_eq!(root_mean_squared_error(&y_true, &y_pred), Ok(1.25_f64.sqrt()));
    }

    #[test]
    fn rmse_is_sqrt_of_mse() {
        let y_true = DVector::from_vec(vec![0.3, -1.2, 8.5, 2.0, 0.0]);
        let y_pred = DVector::from_vec(vec![0.1, -0.2, 7.0, 2.5, -3.0]);

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        let rmse = root_mean_squared_error(&y_true, &y_pred).unwrap();
        assert!(rmse >= 0.0);
        assert_eq!(rmse, mse.sqrt());
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = DVector::from_vec(vec![1.0, 4.0]);
        let b = DVector::from_vec(vec![3.0, 1.0]);

        assert_eq!(mean_squared_error(&a, &b), mean_squared_error(&b, &a));
    }

    #[test]
    fn length_mismatch() {
        let y_true = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let y_pred = DVector::from_vec(vec![1.0, 2.0]);

        assert_eq!(
            mean_squared_error(&y_true, &y_pred),
            Err(Error::DimensionMismatch {
                context: "predicted values",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn empty_input() {
        let empty: DVector<f64> = DVector::zeros(0);

        assert_eq!(root_mean_squared_error(&empty, &empty), Err(Error::EmptyInput));
    }
}
