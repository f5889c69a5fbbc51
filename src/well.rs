//! Well data model.
//!
//! A `Well` is the raw input record: field-measured attributes only, no
//! derived quantities. The engine treats wells as immutable per evaluation
//! pass; only the calibration loop produces records with a new conductivity.

use serde::{Deserialize, Serialize};

use crate::constants::LITERS_PER_CUBIC_METER;

/// Role of a well in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WellKind {
    /// Extracts water; acts as an interference source.
    Pumping,
    /// Piezometer; never pumps, only supplies observed levels.
    Observation,
}

/// A single well record.
///
/// Units: coordinates, depths, and elevations in meters; `conductivity` in
/// m/day; `flow` in L/s; levels are depths below ground surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub id: u32,
    /// Display label; not used in any computation.
    pub name: String,
    pub kind: WellKind,
    pub easting: f64,
    pub northing: f64,
    /// Total well depth [m], ≥ 0.
    pub depth: f64,
    /// Ground surface elevation [masl].
    pub ground_elevation: f64,
    /// Aquifer base (bedrock) elevation [masl].
    pub bedrock_elevation: f64,
    /// Hydraulic conductivity K attributed to this well's zone [m/day].
    /// The calibration target.
    pub conductivity: f64,
    /// Pumping rate Q [L/s]; ignored for observation wells.
    pub flow: f64,
    /// Recorded daily pumping hours. Part of the field schema but consumed
    /// by no formula in this engine.
    pub pumping_hours: f64,
    /// Pre-pumping water depth below ground [m].
    pub static_level: f64,
    /// Water depth below ground under pumping [m]. A value of 0, or one not
    /// below the static level, on a pumping well with positive flow marks
    /// the level as unknown and triggers the implicit solver.
    pub dynamic_level: f64,
}

impl Well {
    /// Create a well with the given identity and all numeric fields zeroed.
    pub fn new(id: u32, name: impl Into<String>, kind: WellKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            easting: 0.0,
            northing: 0.0,
            depth: 0.0,
            ground_elevation: 0.0,
            bedrock_elevation: 0.0,
            conductivity: 0.0,
            flow: 0.0,
            pumping_hours: 0.0,
            static_level: 0.0,
            dynamic_level: 0.0,
        }
    }

    /// `true` for observation wells.
    pub fn is_observation(&self) -> bool {
        self.kind == WellKind::Observation
    }

    /// Pumping rate with the observation-well rule applied [L/s].
    ///
    /// Observation wells never pump, whatever their recorded flow.
    pub fn effective_flow(&self) -> f64 {
        match self.kind {
            WellKind::Pumping => self.flow,
            WellKind::Observation => 0.0,
        }
    }

    /// Effective pumping rate in m³/s.
    pub fn flow_m3s(&self) -> f64 {
        self.effective_flow() / LITERS_PER_CUBIC_METER
    }

    /// Planar Euclidean distance to another well [m].
    pub fn distance_to(&self, other: &Well) -> f64 {
        let dx = self.easting - other.easting;
        let dy = self.northing - other.northing;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observation_wells_never_pump() {
        let mut w = Well::new(1, "P-1", WellKind::Observation);
        w.flow = 25.0;
        assert_eq!(w.effective_flow(), 0.0);
        assert_eq!(w.flow_m3s(), 0.0);
    }

    #[test]
    fn flow_unit_conversion() {
        let mut w = Well::new(1, "P-1", WellKind::Pumping);
        w.flow = 10.0; // L/s
        assert_eq!(w.flow_m3s(), 0.01); // m³/s
    }

    #[test]
    fn distance_is_euclidean() {
        let mut a = Well::new(1, "A", WellKind::Pumping);
        let mut b = Well::new(2, "B", WellKind::Pumping);
        a.easting = 0.0;
        a.northing = 0.0;
        b.easting = 3.0;
        b.northing = 4.0;
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn serde_roundtrip() {
        let mut w = Well::new(7, "S-7", WellKind::Pumping);
        w.conductivity = 15.0;
        w.flow = 10.0;
        let json = serde_json::to_string(&w).unwrap();
        let back: Well = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
