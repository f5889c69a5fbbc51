//! Full-field evaluation pipeline.
//!
//! `wells → derived states → interference matrix → simulated levels → fit`.
//! Each stage is a total function; every pass recomputes from scratch, so
//! there is no cached state to go stale. O(n²) in the well count.

use serde::Serialize;

use crate::metrics;
use crate::thiem::interference::InterferenceMatrix;
use crate::thiem::state::{self, DerivedState};
use crate::well::Well;

/// Simulated maximum dynamic level at one well under full superposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WellLevel {
    pub well_id: u32,
    /// Total induced drawdown, self-effect included [m].
    pub total_drawdown: f64,
    /// Maximum dynamic level as an elevation [masl].
    pub max_dynamic_level_elevation: f64,
    /// Maximum dynamic level as a depth below ground [m].
    pub max_dynamic_level_depth: f64,
}

/// Result of one evaluation pass over a well collection.
#[derive(Debug, Clone)]
pub struct FieldEvaluation {
    /// Per-well derived state, index-aligned with the input.
    pub states: Vec<DerivedState>,
    /// All-pairs interference with row totals.
    pub matrix: InterferenceMatrix,
    /// Simulated levels, index-aligned with the input.
    pub levels: Vec<WellLevel>,
    /// Mean squared error over observation wells with a positive observed
    /// level [m²]; wells without one are excluded, not zero-error.
    pub mse: f64,
    /// √MSE [m].
    pub rmse: f64,
}

/// Evaluate the whole field: derive, superpose, and score.
pub fn evaluate(wells: &[Well]) -> FieldEvaluation {
    let states: Vec<DerivedState> = wells.iter().map(state::derive).collect();
    let matrix = InterferenceMatrix::assemble(wells, &states);

    let levels: Vec<WellLevel> = wells
        .iter()
        .zip(&states)
        .zip(&matrix.rows)
        .map(|((well, st), row)| {
            let elevation = st.static_elevation - row.total;
            WellLevel {
                well_id: well.id,
                total_drawdown: row.total,
                max_dynamic_level_elevation: elevation,
                max_dynamic_level_depth: well.ground_elevation - elevation,
            }
        })
        .collect();

    let mut observed = Vec::new();
    let mut simulated = Vec::new();
    for (well, level) in wells.iter().zip(&levels) {
        if well.is_observation() && well.dynamic_level > 0.0 {
            observed.push(well.dynamic_level);
            simulated.push(level.max_dynamic_level_depth);
        }
    }
    let mse = metrics::mse(&observed, &simulated);

    FieldEvaluation {
        states,
        matrix,
        levels,
        mse,
        rmse: mse.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well::WellKind;
    use approx::assert_relative_eq;

    fn field() -> Vec<Well> {
        let mut p = Well::new(1, "P-1", WellKind::Pumping);
        p.depth = 60.0;
        p.ground_elevation = 100.0;
        p.bedrock_elevation = 30.0;
        p.conductivity = 15.0;
        p.flow = 10.0;
        p.static_level = 5.0;
        p.dynamic_level = 12.0;

        let mut o = Well::new(2, "O-1", WellKind::Observation);
        o.easting = 200.0;
        o.depth = 40.0;
        o.ground_elevation = 100.0;
        o.bedrock_elevation = 30.0;
        o.static_level = 5.0;
        o.dynamic_level = 5.1;

        vec![p, o]
    }

    #[test]
    fn levels_follow_superposition() {
        let eval = evaluate(&field());
        // Observation well: static elevation 95, induced drawdown ≈ 0.0541 m
        // → elevation ≈ 94.9459 masl, depth ≈ 5.0541 m.
        let level = &eval.levels[1];
        assert_relative_eq!(level.total_drawdown, 0.0541, epsilon = 5e-4);
        assert_relative_eq!(level.max_dynamic_level_elevation, 94.9459, epsilon = 5e-4);
        assert_relative_eq!(
            level.max_dynamic_level_depth,
            100.0 - level.max_dynamic_level_elevation
        );
    }

    #[test]
    fn mse_uses_observation_wells_only() {
        let eval = evaluate(&field());
        // Single scored well: observed 5.1 m vs simulated ≈ 5.0541 m.
        let err: f64 = 5.1 - 5.054;
        assert_relative_eq!(eval.mse, err * err, epsilon = 1e-4);
        assert_relative_eq!(eval.rmse, eval.mse.sqrt());
    }

    #[test]
    fn unobserved_wells_are_excluded_from_mse() {
        // Scenario D: an observation well with dynamic level 0 contributes
        // nothing to the score rather than a zero-error sample.
        let mut wells = field();
        wells[1].dynamic_level = 0.0;
        let eval = evaluate(&wells);
        assert_eq!(eval.mse, 0.0);
        assert_eq!(eval.rmse, 0.0);
    }

    #[test]
    fn outputs_are_index_aligned() {
        let wells = field();
        let eval = evaluate(&wells);
        assert_eq!(eval.states.len(), wells.len());
        assert_eq!(eval.levels.len(), wells.len());
        assert_eq!(eval.matrix.len(), wells.len());
        assert_eq!(eval.levels[0].well_id, wells[0].id);
        assert_eq!(eval.levels[1].well_id, wells[1].id);
    }

    #[test]
    fn empty_field_evaluates_cleanly() {
        let eval = evaluate(&[]);
        assert!(eval.states.is_empty());
        assert!(eval.levels.is_empty());
        assert_eq!(eval.mse, 0.0);
    }
}
