//! Thiem steady-state well hydraulics.
//!
//! Single-conductivity confined/semi-confined aquifer model: per-well derived
//! state, Sichardt radius of influence, an implicit solver for unobserved
//! dynamic levels, and logarithmic drawdown superposition between wells.

pub mod constants;
pub mod interference;
pub mod solver;
pub mod state;
