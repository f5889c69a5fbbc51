//! Pairwise drawdown interference and matrix assembly.
//!
//! Superposition of Thiem solutions: the drawdown one pumping well induces
//! at another location is Q/(2πT)·ln(R/r), cut off outside the source's
//! radius of influence. Observation wells never contribute as sources.

use smallvec::SmallVec;

use super::constants::WELL_RADIUS_THEORETICAL;
use super::state::DerivedState;
use crate::well::{Well, WellKind};

/// Drawdown induced at `target`'s location by `source`'s pumping [m].
///
/// `source_state` must be the derived state of `source`. Returns 0 for
/// observation sources, non-pumping or degenerate sources, targets outside
/// the zone of influence, and any non-finite or negative result.
pub fn interference(target: &Well, source: &Well, source_state: &DerivedState) -> f64 {
    if source.kind == WellKind::Observation {
        return 0.0;
    }
    let q_m3s = source.flow_m3s();
    let t_m2s = source_state.transmissivity_m2s;
    if q_m3s <= 0.0 || t_m2s <= 0.0 {
        return 0.0;
    }

    // Clamp to the bore radius; covers self-interference at zero distance.
    let r = source.distance_to(target).max(WELL_RADIUS_THEORETICAL);
    let radius = source_state.radius_of_influence;
    if r > radius && radius > 0.0 {
        return 0.0;
    }

    let s = q_m3s / (2.0 * std::f64::consts::PI * t_m2s) * (radius / r).ln();
    if s.is_finite() && s > 0.0 {
        s
    } else {
        0.0
    }
}

/// One row of the interference matrix: drawdowns induced at a single well.
#[derive(Debug, Clone)]
pub struct MatrixRow {
    /// Target well id.
    pub well_id: u32,
    /// Contribution of each source, in input well order (self included).
    pub influences: SmallVec<[f64; 8]>,
    /// Total induced drawdown at the target [m].
    pub total: f64,
}

/// Square interference table over a well collection, with row totals.
#[derive(Debug, Clone)]
pub struct InterferenceMatrix {
    pub rows: Vec<MatrixRow>,
}

impl InterferenceMatrix {
    /// Assemble the all-pairs matrix. Rows follow the input well order;
    /// column `j` of every row is the contribution of `wells[j]`.
    ///
    /// `states` must be the derived states of `wells`, index-aligned.
    pub fn assemble(wells: &[Well], states: &[DerivedState]) -> Self {
        debug_assert_eq!(wells.len(), states.len());
        let rows = wells
            .iter()
            .map(|target| {
                let influences: SmallVec<[f64; 8]> = wells
                    .iter()
                    .zip(states)
                    .map(|(source, st)| interference(target, source, st))
                    .collect();
                let total = influences.iter().sum();
                MatrixRow {
                    well_id: target.id,
                    influences,
                    total,
                }
            })
            .collect();
        Self { rows }
    }

    /// Number of wells the matrix covers.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` for an empty well collection.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
