//! Thiem model numerical constants and the implicit-solver contract.

// -- Physical constants --

/// Theoretical well-bore radius r_w [m]. Reference radius for the Thiem
/// logarithm; also the minimum pair separation, which removes the log
/// singularity at zero distance.
pub const WELL_RADIUS_THEORETICAL: f64 = 0.15;

/// Sichardt coefficient: R = 3000 · s · √K, with s in meters and K in m/s.
pub const SICHARDT_COEFFICIENT: f64 = 3_000.0;

// -- Implicit solver contract --

/// Fixed-point iteration budget.
pub const SOLVER_MAX_ITERATIONS: usize = 10;

/// Convergence tolerance on successive drawdown iterates [m].
pub const SOLVER_TOLERANCE: f64 = 0.01;

/// Initial drawdown guess [m].
pub const SOLVER_SEED: f64 = 1.0;

/// Reset value when an iterate dips to zero or below [m].
pub const SOLVER_FLOOR: f64 = 0.1;
