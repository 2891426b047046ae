//! Temperature scale conversions.
//!
//! Everything stays in `f64`; rounding happens only when a report is built.

const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin_to_celsius(kelvin) * 9.0 / 5.0 + 32.0
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
