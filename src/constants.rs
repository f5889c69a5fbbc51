//! Crate-wide unit conversion constants.
//!
//! The units contract: conductivity in m/day, flow in L/s, distances and
//! elevations in meters, transmissivity in m²/day and m²/s.

/// Seconds per day, for m/day → m/s and m²/day → m²/s conversions.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Liters per cubic meter, for L/s → m³/s conversion.
pub const LITERS_PER_CUBIC_METER: f64 = 1_000.0;
