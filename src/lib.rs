//! wellfield — steady-state well drawdown interference engine.
//!
//! Models drawdown interference among wells pumping from a shared confined
//! or semi-confined aquifer using the Thiem equation with superposition:
//! per-well hydraulic state, an implicit solver for unobserved dynamic
//! levels, the all-pairs interference matrix, automatic conductivity
//! calibration against observation wells, IDW interpolation of the level
//! field, and fit metrics.
//!
//! The whole core is synchronous and side-effect-free; numerically undefined
//! results clamp to zero instead of propagating NaN.

pub mod calibration;
pub mod constants;
pub mod evaluate;
pub mod interpolation;
pub mod metrics;
pub mod numeric;
pub mod thiem;
pub mod well;
