//! Per-well derived hydraulic state.
//!
//! Everything here is recomputed from the raw record on every evaluation
//! pass; nothing is persisted or patched incrementally. The derivation is a
//! total function: invalid input degrades to zeros, never to NaN.

use serde::Serialize;

use super::constants::SICHARDT_COEFFICIENT;
use super::solver::{self, SolverStatus};
use crate::constants::{LITERS_PER_CUBIC_METER, SECONDS_PER_DAY};
use crate::numeric::{sanitize, sanitize_nonneg};
use crate::well::{Well, WellKind};

/// Derived hydraulic quantities for one well.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedState {
    /// Transmissivity T = K · (depth − static level) [m²/day].
    pub transmissivity_m2d: f64,
    /// Transmissivity [m²/s].
    pub transmissivity_m2s: f64,
    /// Conductivity [m/s].
    pub conductivity_ms: f64,
    /// Saturated thickness above the aquifer base [m].
    pub saturated_thickness: f64,
    /// Drawdown s [m]; solved implicitly when the observed level is unknown.
    pub drawdown: f64,
    /// Dynamic level depth [m]; equals `static_level + drawdown` when solved.
    pub dynamic_level: f64,
    /// Sichardt radius of influence R [m].
    pub radius_of_influence: f64,
    /// Q / s for pumping wells [L/s per m].
    pub specific_capacity: f64,
    /// Static water level as an elevation [masl].
    pub static_elevation: f64,
    /// Depth to bedrock below the ground surface [m].
    pub rock_depth: f64,
    /// `true` when the dynamic level came from the implicit solver.
    pub simulated: bool,
    /// Solver termination state; `None` when the observed level was used.
    pub solver_status: Option<SolverStatus>,
}

/// Sichardt radius of influence: R = 3000 · s · √K [m].
///
/// Zero whenever drawdown or conductivity is non-positive; non-finite
/// results clamp to zero.
#[inline]
pub fn radius_of_influence(drawdown: f64, conductivity_ms: f64) -> f64 {
    if drawdown > 0.0 && conductivity_ms > 0.0 {
        sanitize_nonneg(SICHARDT_COEFFICIENT * drawdown * conductivity_ms.sqrt())
    } else {
        0.0
    }
}

/// Derive the full hydraulic state for one well.
///
/// Pure and infallible. Triggers the implicit solver for a pumping well whose
/// dynamic level is zero or not below its static level.
pub fn derive(well: &Well) -> DerivedState {
    let conductivity = sanitize_nonneg(well.conductivity);
    let flow = sanitize_nonneg(well.effective_flow());
    let flow_m3s = flow / LITERS_PER_CUBIC_METER;

    let h_static = (well.depth - well.static_level).max(0.0);
    let transmissivity_m2d = sanitize_nonneg(conductivity * h_static);
    let transmissivity_m2s = transmissivity_m2d / SECONDS_PER_DAY;
    let conductivity_ms = conductivity / SECONDS_PER_DAY;

    let saturated_thickness =
        ((well.ground_elevation - well.static_level) - well.bedrock_elevation).max(0.0);

    let mut dynamic_level = sanitize(well.dynamic_level);
    let simulated =
        flow > 0.0 && (dynamic_level == 0.0 || dynamic_level <= well.static_level);

    let (drawdown, solver_status) = if simulated {
        let solution = solver::solve(flow_m3s, transmissivity_m2s, conductivity_ms);
        dynamic_level = well.static_level + solution.drawdown;
        (solution.drawdown, Some(solution.status))
    } else {
        ((dynamic_level - well.static_level).max(0.0), None)
    };

    let specific_capacity = if well.kind == WellKind::Pumping && drawdown > 0.0 {
        flow / drawdown
    } else {
        0.0
    };

    DerivedState {
        transmissivity_m2d,
        transmissivity_m2s,
        conductivity_ms,
        saturated_thickness,
        drawdown,
        dynamic_level,
        radius_of_influence: radius_of_influence(drawdown, conductivity_ms),
        specific_capacity,
        static_elevation: well.ground_elevation - well.static_level,
        rock_depth: well.ground_elevation - well.bedrock_elevation,
        simulated,
        solver_status,
    }
}
