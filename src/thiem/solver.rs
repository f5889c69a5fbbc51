//! Implicit simulated-level solver.
//!
//! A pumping well without a usable observed dynamic level couples drawdown
//! and radius of influence: R = 3000·s·√K while s = Q/(2πT)·ln(R/r_w).
//! The pair is resolved by fixed-point iteration with a bounded budget.

use serde::Serialize;

use super::constants::{
    SICHARDT_COEFFICIENT, SOLVER_FLOOR, SOLVER_MAX_ITERATIONS, SOLVER_SEED, SOLVER_TOLERANCE,
    WELL_RADIUS_THEORETICAL,
};

/// Termination state of the fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolverStatus {
    /// Successive iterates fell within [`SOLVER_TOLERANCE`].
    Converged { iterations: usize },
    /// Budget exhausted; the last iterate was accepted as-is.
    IterationLimit,
    /// R(s) collapsed to the bore radius or below: the aquifer cannot
    /// sustain drawdown at this rate. Drawdown is forced to 0.
    NoSolution,
}

/// Solver output: the accepted drawdown and how it terminated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSolution {
    /// Solved drawdown [m], ≥ 0.
    pub drawdown: f64,
    pub status: SolverStatus,
}

/// Solve the self-referential drawdown equation for one pumping well.
///
/// `flow_m3s` in m³/s, `transmissivity_m2s` in m²/s, `conductivity_ms` in m/s.
/// Never fails: numerically undefined states terminate as `NoSolution` with
/// zero drawdown.
pub fn solve(flow_m3s: f64, transmissivity_m2s: f64, conductivity_ms: f64) -> SolverSolution {
    let factor = flow_m3s / (2.0 * std::f64::consts::PI * transmissivity_m2s);
    let sqrt_k = conductivity_ms.max(0.0).sqrt();

    let mut s = SOLVER_SEED;
    for iteration in 0..SOLVER_MAX_ITERATIONS {
        if s <= 0.0 {
            s = SOLVER_FLOOR;
        }
        let r_guess = SICHARDT_COEFFICIENT * s * sqrt_k;
        if r_guess <= WELL_RADIUS_THEORETICAL {
            return SolverSolution {
                drawdown: 0.0,
                status: SolverStatus::NoSolution,
            };
        }
        let s_next = factor * (r_guess / WELL_RADIUS_THEORETICAL).ln();
        if !s_next.is_finite() {
            // Degenerate transmissivity; fail soft rather than propagate.
            return SolverSolution {
                drawdown: 0.0,
                status: SolverStatus::NoSolution,
            };
        }
        if (s_next - s).abs() < SOLVER_TOLERANCE {
            return SolverSolution {
                drawdown: s_next.max(0.0),
                status: SolverStatus::Converged {
                    iterations: iteration + 1,
                },
            };
        }
        s = s_next;
    }

    SolverSolution {
        drawdown: s.max(0.0),
        status: SolverStatus::IterationLimit,
    }
}
