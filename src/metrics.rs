//! Fit metrics between observed and simulated dynamic levels.
//!
//! All metrics take index-aligned observed and simulated slices and return a
//! scalar score. Empty input scores 0 — an unconstrained field is not an
//! error, it is simply unfitted.

/// Mean Squared Error [m²]. Range: [0, inf), 0 = perfect.
pub fn mse(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len();
    if n == 0 {
        return 0.0;
    }
    observed
        .iter()
        .zip(simulated)
        .map(|(o, s)| (o - s).powi(2))
        .sum::<f64>()
        / n as f64
}

/// Root Mean Square Error [m]. Range: [0, inf), 0 = perfect.
pub fn rmse(observed: &[f64], simulated: &[f64]) -> f64 {
    mse(observed, simulated).sqrt()
}

/// RMSE normalized by the mean observed value [-].
///
/// Returns 0 when the mean observation is 0 (guards the division).
pub fn nrmse(observed: &[f64], simulated: &[f64]) -> f64 {
    let n = observed.len();
    if n == 0 {
        return 0.0;
    }
    let mean_obs = observed.iter().sum::<f64>() / n as f64;
    if mean_obs == 0.0 {
        return 0.0;
    }
    rmse(observed, simulated) / mean_obs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -- MSE --

    #[test]
    fn mse_perfect_match() {
        let obs = [10.0, 12.0, 15.0];
        assert_relative_eq!(mse(&obs, &obs), 0.0);
    }

    #[test]
    fn mse_known_value() {
        // errors = [0, 0, 1] → mse = 1/3
        let obs = [10.0, 12.0, 15.0];
        let sim = [10.0, 12.0, 16.0];
        assert_relative_eq!(mse(&obs, &sim), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mse_empty_is_zero() {
        assert_eq!(mse(&[], &[]), 0.0);
    }

    // -- RMSE --

    #[test]
    fn rmse_constant_error() {
        let obs = [10.0, 12.0, 15.0];
        let sim = [11.0, 13.0, 16.0];
        assert_relative_eq!(rmse(&obs, &sim), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rmse_always_nonnegative() {
        let obs = [1.0, 2.0, 3.0];
        let sim = [5.0, 1.0, 2.0];
        assert!(rmse(&obs, &sim) >= 0.0);
    }

    // -- NRMSE --

    #[test]
    fn nrmse_known_value() {
        // rmse = 1, mean_obs = 10 → nrmse = 0.1
        let obs = [10.0, 10.0];
        let sim = [11.0, 9.0];
        assert_relative_eq!(nrmse(&obs, &sim), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn nrmse_zero_mean_guard() {
        let obs = [1.0, -1.0];
        let sim = [2.0, 0.0];
        assert_eq!(nrmse(&obs, &sim), 0.0);
    }

    #[test]
    fn nrmse_empty_is_zero() {
        assert_eq!(nrmse(&[], &[]), 0.0);
    }
}
