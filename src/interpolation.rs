//! Inverse-distance-weighted spatial interpolation.
//!
//! Renders the discrete well point set as a continuous level field. Pure
//! functions of their inputs: the visualization layer may call them per
//! heatmap cell or for ad-hoc point queries without any shared state.

use serde::{Deserialize, Serialize};

/// Default IDW power exponent.
pub const DEFAULT_POWER: f64 = 2.0;

/// A sample location with its measured or simulated value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// IDW estimate at `(x, y)` over the sample set, weight 1/dᵖ.
///
/// Exact at sample locations: a zero-distance hit returns that sample's
/// value directly, which also removes the division singularity. An empty
/// sample set estimates 0.
pub fn estimate(x: f64, y: f64, points: &[SamplePoint], power: f64) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for p in points {
        let d = ((x - p.x).powi(2) + (y - p.y).powi(2)).sqrt();
        if d == 0.0 {
            return p.value;
        }
        let w = 1.0 / d.powf(power);
        numerator += w * p.value;
        denominator += w;
    }
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Polyline approximating the circle of radius `radius` around `(cx, cy)`,
/// as (easting, northing) pairs. Used to draw radius-of-influence rings.
///
/// Returns `steps + 1` points (closed ring), or nothing for a degenerate
/// radius.
pub fn circle_points(cx: f64, cy: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
    if radius <= 0.0 || steps == 0 {
        return Vec::new();
    }
    (0..=steps)
        .map(|i| {
            let theta = i as f64 / steps as f64 * 2.0 * std::f64::consts::PI;
            (cx + radius * theta.cos(), cy + radius * theta.sin())
        })
        .collect()
}
