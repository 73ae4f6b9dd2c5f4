// ABOUTME: Formula coefficients for the workout calorie and distance calculations
// ABOUTME: Per-kind constant sets mirroring the sensor vendor's reference formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formula constants used by the workout calculations
//!
//! Values come from the sensor vendor's reference formulas and are fixed
//! at compile time; no kind reads another kind's coefficient set.

/// Unit lengths and conversion factors for distance computation
pub mod distance {
    /// Distance covered per step in meters (running and sports walking)
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Distance covered per stroke in meters (swimming)
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Meters per kilometer
    pub const M_IN_KM: f64 = 1000.0;
}

/// Time unit conversions
pub mod time {
    /// Minutes per hour; calorie formulas work in minutes
    pub const MIN_IN_H: f64 = 60.0;
}

/// Calorie coefficients for running
pub mod running {
    /// Multiplier applied to mean speed in km/h
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Additive shift applied after the speed multiplier
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Calorie coefficients and unit conversions for sports walking
pub mod walking {
    /// Multiplier applied to body weight in kg
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the speed-squared-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// km/h to m/s conversion factor used by the walking formula
    pub const KMH_IN_MSEC: f64 = 0.278;

    /// Centimeters per meter; athlete height arrives in cm
    pub const CM_IN_M: f64 = 100.0;
}

/// Calorie coefficients for swimming
pub mod swimming {
    /// Additive shift applied to mean speed in km/h
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight in kg
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
