//! Automatic conductivity calibration.
//!
//! Damped, gradient-free relaxation: each iteration simulates total drawdown
//! at every observation well with a recorded level, distributes the relative
//! level error to nearby pumping wells by inverse-square-distance weight,
//! and nudges their conductivity by a bounded multiplicative step. A
//! heuristic local search, not a least-squares optimizer — the strategy
//! trait leaves room to swap one in.

use serde::Serialize;

use crate::constants::{LITERS_PER_CUBIC_METER, SECONDS_PER_DAY};
use crate::thiem::constants::WELL_RADIUS_THEORETICAL;
use crate::thiem::state::radius_of_influence;
use crate::well::{Well, WellKind};

// -- Loop contract --

/// Convergence target on NRMSE (2%).
pub const DEFAULT_TARGET_NRMSE: f64 = 0.02;

/// Iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 10;

/// Relaxation gain applied to the weighted error ratio.
pub const DEFAULT_GAIN: f64 = 0.1;

/// Bounds on the per-iteration multiplicative conductivity step (±10%).
pub const STEP_FACTOR_MIN: f64 = 0.9;
pub const STEP_FACTOR_MAX: f64 = 1.1;

/// Hard bounds on conductivity [m/day].
pub const CONDUCTIVITY_MIN: f64 = 0.01;
pub const CONDUCTIVITY_MAX: f64 = 10_000.0;

/// A pumping well stays reachable for error attribution within this distance
/// even while its current radius of influence is zero [m]. Keeps
/// cold-started wells adjustable.
pub const CATCH_DISTANCE: f64 = 2_000.0;

/// Smallest conductivity change that still counts as progress [m/day].
pub const STABILITY_THRESHOLD: f64 = 1e-4;

/// How a calibration run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CalibrationStatus {
    /// NRMSE fell below the target.
    ConvergedByError,
    /// No conductivity moved by more than [`STABILITY_THRESHOLD`].
    ConvergedByStability,
    /// Budget exhausted; the reached state was accepted.
    IterationLimit,
}

/// Outcome of a calibration run.
#[derive(Debug, Clone)]
pub struct CalibrationResult {
    /// Input wells with updated conductivities; every other field unchanged.
    pub wells: Vec<Well>,
    /// NRMSE at the last residual evaluation (0 with no observation wells).
    pub final_nrmse: f64,
    /// Iterations executed.
    pub iterations: usize,
    pub status: CalibrationStatus,
}

/// A conductivity calibration algorithm.
pub trait CalibrationStrategy {
    fn calibrate(&self, wells: &[Well]) -> CalibrationResult;
}

/// The distance-weighted relaxation described above.
#[derive(Debug, Clone, Copy)]
pub struct DistanceWeightedRelaxation {
    pub target_nrmse: f64,
    pub max_iterations: usize,
    pub gain: f64,
}

impl Default for DistanceWeightedRelaxation {
    fn default() -> Self {
        Self {
            target_nrmse: DEFAULT_TARGET_NRMSE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            gain: DEFAULT_GAIN,
        }
    }
}

/// Per-well working values recomputed each iteration from the current
/// conductivity. R uses the observed drawdown directly as a fast proxy —
/// the full implicit solve is not needed inside the loop.
#[derive(Debug, Clone, Copy, Default)]
struct Working {
    transmissivity_m2s: f64,
    radius: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Attribution {
    weighted_error: f64,
    total_weight: f64,
}

impl DistanceWeightedRelaxation {
    fn working_values(wells: &[Well]) -> Vec<Working> {
        wells
            .iter()
            .map(|w| {
                let h_static = (w.depth - w.static_level).max(0.0);
                let t_m2s = w.conductivity * h_static / SECONDS_PER_DAY;
                let k_ms = w.conductivity / SECONDS_PER_DAY;
                let s_obs = w.dynamic_level - w.static_level;
                Working {
                    transmissivity_m2s: t_m2s,
                    radius: radius_of_influence(s_obs, k_ms),
                }
            })
            .collect()
    }

    /// Simulated total drawdown at `target` from all pumping sources [m].
    fn simulated_drawdown(target: &Well, wells: &[Well], working: &[Working]) -> f64 {
        let mut total = 0.0;
        for (source, wk) in wells.iter().zip(working) {
            if source.kind == WellKind::Observation {
                continue;
            }
            let q_m3s = source.flow / LITERS_PER_CUBIC_METER;
            if q_m3s <= 0.0 || wk.transmissivity_m2s <= 0.0 {
                continue;
            }
            let r = source.distance_to(target).max(WELL_RADIUS_THEORETICAL);
            if r <= wk.radius {
                total += q_m3s / (2.0 * std::f64::consts::PI * wk.transmissivity_m2s)
                    * (wk.radius / r).ln();
            }
        }
        total
    }
}

impl CalibrationStrategy for DistanceWeightedRelaxation {
    fn calibrate(&self, wells: &[Well]) -> CalibrationResult {
        let mut wells = wells.to_vec();
        let n = wells.len();
        let mut final_nrmse = 0.0;
        let mut iterations = 0;
        let mut status = CalibrationStatus::IterationLimit;

        for _ in 0..self.max_iterations {
            iterations += 1;
            let working = Self::working_values(&wells);

            let mut attributions = vec![Attribution::default(); n];
            let mut sum_sq_residual = 0.0;
            let mut sum_observed = 0.0;
            let mut count = 0usize;

            for target in &wells {
                if target.kind != WellKind::Observation || target.dynamic_level <= 0.0 {
                    continue;
                }

                let s_total = Self::simulated_drawdown(target, &wells, &working);
                let simulated_depth = target.static_level + s_total;
                let observed_depth = target.dynamic_level;

                let residual = observed_depth - simulated_depth;
                let divisor = if observed_depth != 0.0 { observed_depth } else { 1.0 };
                let error_ratio = residual / divisor;

                sum_sq_residual += residual * residual;
                sum_observed += observed_depth;
                count += 1;

                for (i, (source, wk)) in wells.iter().zip(&working).enumerate() {
                    if source.kind == WellKind::Observation {
                        continue;
                    }
                    let r = source.distance_to(target);
                    if r <= wk.radius || r < CATCH_DISTANCE {
                        let weight = 1.0 / (r * r + 1.0);
                        attributions[i].weighted_error += error_ratio * weight;
                        attributions[i].total_weight += weight;
                    }
                }
            }

            if count > 0 {
                let rmse = (sum_sq_residual / count as f64).sqrt();
                let mean_observed = sum_observed / count as f64;
                final_nrmse = if mean_observed != 0.0 {
                    rmse / mean_observed
                } else {
                    0.0
                };
                if final_nrmse < self.target_nrmse {
                    status = CalibrationStatus::ConvergedByError;
                    break;
                }
            }

            let mut any_change = false;
            for (well, attribution) in wells.iter_mut().zip(&attributions) {
                if well.kind != WellKind::Pumping || attribution.total_weight <= 0.0 {
                    continue;
                }
                let avg_error = attribution.weighted_error / attribution.total_weight;
                // Positive error means observed > simulated drawdown: the
                // aquifer transmits less than modeled, so lower K.
                let factor = (1.0 - avg_error * self.gain).clamp(STEP_FACTOR_MIN, STEP_FACTOR_MAX);
                let old = well.conductivity;
                well.conductivity = (old * factor).clamp(CONDUCTIVITY_MIN, CONDUCTIVITY_MAX);
                if (old - well.conductivity).abs() > STABILITY_THRESHOLD {
                    any_change = true;
                }
            }

            if !any_change {
                status = CalibrationStatus::ConvergedByStability;
                break;
            }
        }

        CalibrationResult {
            wells,
            final_nrmse,
            iterations,
            status,
        }
    }
}

/// Calibrate with the default relaxation strategy.
pub fn calibrate(wells: &[Well]) -> CalibrationResult {
    DistanceWeightedRelaxation::default().calibrate(wells)
}
