// ABOUTME: Workout domain models including WorkoutKind, SensorPacket, and TrainingSummary
// ABOUTME: Wire codes, display labels, and the fixed-template report rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Models
//!
//! Common data structures shared by dispatch and the formula layer:
//! the closed set of workout kinds with their wire codes, the raw sensor
//! packet shape, and the immutable training summary with its rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of supported workout kinds
///
/// Each kind carries its own formula set for distance, mean speed, and
/// calorie computation. Unknown wire codes never map to a default kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Pool swimming, measured in strokes and pool lengths
    Swimming,
    /// Running, measured in steps
    Running,
    /// Sports (race) walking, measured in steps
    SportsWalking,
}

impl WorkoutKind {
    /// Resolve a sensor wire code to a workout kind
    ///
    /// Returns `None` for any code outside the closed set; callers must
    /// treat that as a fatal lookup failure, not fall back to a default.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(Self::Swimming),
            "RUN" => Some(Self::Running),
            "WLK" => Some(Self::SportsWalking),
            _ => None,
        }
    }

    /// The kind's sensor wire code, inverse of [`Self::from_code`]
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Display label interpolated into the report template
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional fields this kind's constructor consumes
    #[must_use]
    pub const fn expected_field_count(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }
}

/// One raw tuple from the sensor feed
///
/// `data` is positional per kind:
/// - RUN: `[action, duration_h, weight_kg]`
/// - WLK: `[action, duration_h, weight_kg, height_cm]`
/// - SWM: `[action, duration_h, weight_kg, pool_length_m, pool_count]`
///
/// Duration is assumed positive; the feed is trusted and values are not
/// range-checked here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorPacket {
    /// Workout type wire code ("SWM", "RUN", "WLK")
    pub workout_type: String,
    /// Flat numeric field list, positional per kind
    pub data: Vec<f64>,
}

impl SensorPacket {
    /// Build a packet from a type code and its flat field list
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Computed results for one workout, immutable after construction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingSummary {
    /// Display label of the workout kind
    pub workout_type: String,
    /// Workout duration in hours
    pub duration_h: f64,
    /// Covered distance in kilometers
    pub distance_km: f64,
    /// Mean speed in kilometers per hour
    pub mean_speed_kmh: f64,
    /// Energy spent in kilocalories
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    /// Render the fixed report template
    ///
    /// Every numeric field prints with exactly three decimal digits
    /// regardless of magnitude.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {kind}; \
             Длительность: {duration:.3} ч.; \
             Дистанция: {distance:.3} км; \
             Ср. скорость: {speed:.3} км/ч; \
             Потрачено ккал: {calories:.3}.",
            kind = self.workout_type,
            duration = self.duration_h,
            distance = self.distance_km,
            speed = self.mean_speed_kmh,
            calories = self.calories_kcal,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_code_round_trip() {
        for kind in [
            WorkoutKind::Swimming,
            WorkoutKind::Running,
            WorkoutKind::SportsWalking,
        ] {
            assert_eq!(WorkoutKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(WorkoutKind::from_code("BIK"), None);
        assert_eq!(WorkoutKind::from_code(""), None);
        // Wire codes are case-sensitive
        assert_eq!(WorkoutKind::from_code("run"), None);
    }

    #[test]
    fn test_summary_renders_fixed_template() {
        let summary = TrainingSummary {
            workout_type: "Swimming".into(),
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };
        assert_eq!(
            summary.to_string(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_summary_keeps_three_decimals_across_magnitudes() {
        let summary = TrainingSummary {
            workout_type: "Running".into(),
            duration_h: 0.0001,
            distance_km: 12345.6789,
            mean_speed_kmh: 0.5,
            calories_kcal: 1_000_000.0,
        };
        let line = summary.to_string();
        assert!(line.contains("Длительность: 0.000 ч."));
        assert!(line.contains("Дистанция: 12345.679 км"));
        assert!(line.contains("Ср. скорость: 0.500 км/ч"));
        assert!(line.contains("Потрачено ккал: 1000000.000."));
    }
}
