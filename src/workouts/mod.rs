// ABOUTME: Workout sum type with per-kind distance, mean speed, and calorie formulas
// ABOUTME: Pure calculations threading into an immutable TrainingSummary per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Calculations
//!
//! The [`Workout`] sum type carries the raw sensor readings for one
//! completed workout and computes its statistics on demand. All three
//! kinds share the report shape; they differ in which quantity is
//! measured directly (step/stroke count vs. pool laps) and in their
//! calorie coefficient sets.
//!
//! Calculations are pure functions over the raw readings; nothing is
//! cached between calls and a workout is dropped after its summary is
//! taken.

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::models::{TrainingSummary, WorkoutKind};
use constants::{distance, running, swimming, time, walking};

/// Raw readings for one completed workout, tagged by kind
///
/// `action` is the raw motion-sensor unit count: steps for
/// [`Running`](Self::Running) and [`SportsWalking`](Self::SportsWalking),
/// strokes for [`Swimming`](Self::Swimming).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Workout {
    /// Pool swimming session
    Swimming {
        /// Stroke count from the motion sensor
        action: u32,
        /// Session duration in hours
        duration_h: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of pool lengths completed
        pool_count: u32,
    },
    /// Running session
    Running {
        /// Step count from the motion sensor
        action: u32,
        /// Session duration in hours
        duration_h: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
    },
    /// Sports walking session
    SportsWalking {
        /// Step count from the motion sensor
        action: u32,
        /// Session duration in hours
        duration_h: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Athlete height in centimeters
        height_cm: f64,
    },
}

impl Workout {
    /// The workout's kind, which drives the report label
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Swimming { .. } => WorkoutKind::Swimming,
            Self::Running { .. } => WorkoutKind::Running,
            Self::SportsWalking { .. } => WorkoutKind::SportsWalking,
        }
    }

    /// Session duration in hours
    #[must_use]
    pub const fn duration_h(&self) -> f64 {
        match self {
            Self::Swimming { duration_h, .. }
            | Self::Running { duration_h, .. }
            | Self::SportsWalking { duration_h, .. } => *duration_h,
        }
    }

    /// Covered distance in kilometers
    ///
    /// Formula: `action x unit_length / M_IN_KM`, where the unit length
    /// is one step for running and walking and one stroke for swimming.
    /// Swim distance stays stroke-based even though swim speed is
    /// lap-based.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        let (action, unit_length_m) = match self {
            Self::Swimming { action, .. } => (*action, distance::STROKE_LENGTH_M),
            Self::Running { action, .. } | Self::SportsWalking { action, .. } => {
                (*action, distance::STEP_LENGTH_M)
            }
        };
        f64::from(action) * unit_length_m / distance::M_IN_KM
    }

    /// Mean speed in km/h
    ///
    /// Running and walking derive speed from the step-based distance.
    /// Swimming measures it from pool laps instead:
    /// `pool_length_m x pool_count / M_IN_KM / duration_h`, independent
    /// of the stroke count.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_h,
                pool_length_m,
                pool_count,
                ..
            } => pool_length_m * f64::from(*pool_count) / distance::M_IN_KM / duration_h,
            Self::Running { duration_h, .. } | Self::SportsWalking { duration_h, .. } => {
                self.distance_km() / duration_h
            }
        }
    }

    /// Energy spent in kilocalories
    ///
    /// Every kind carries its own coefficient set from
    /// [`constants`]; the match is exhaustive, so a kind without a
    /// calorie formula cannot exist.
    #[must_use]
    pub fn spent_calories(&self) -> f64 {
        match self {
            Self::Swimming {
                duration_h,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + swimming::MEAN_SPEED_SHIFT)
                    * swimming::WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_h
            }
            Self::Running {
                duration_h,
                weight_kg,
                ..
            } => {
                let duration_min = duration_h * time::MIN_IN_H;
                (running::MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
                    + running::MEAN_SPEED_SHIFT)
                    * weight_kg
                    / distance::M_IN_KM
                    * duration_min
            }
            Self::SportsWalking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                let duration_min = duration_h * time::MIN_IN_H;
                let speed_ms = self.mean_speed_kmh() * walking::KMH_IN_MSEC;
                let height_m = height_cm / walking::CM_IN_M;
                (walking::WEIGHT_MULTIPLIER * weight_kg
                    + speed_ms.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg)
                    * duration_min
            }
        }
    }

    /// Compute all statistics and package them into a summary
    ///
    /// Distance is computed first, then speed, then calories, since the
    /// later quantities build on the earlier ones.
    #[must_use]
    pub fn summary(&self) -> TrainingSummary {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories_kcal = self.spent_calories();
        TrainingSummary {
            workout_type: self.kind().display_name().to_owned(),
            duration_h: self.duration_h(),
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_running_fixture() {
        let workout = Workout::Running {
            action: 15000,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        assert_close(workout.distance_km(), 9.75);
        assert_close(workout.mean_speed_kmh(), 9.75);
        // (18 * 9.75 + 1.79) * 75 / 1000 * 60
        assert_close(workout.spent_calories(), 797.805);
    }

    #[test]
    fn test_walking_fixture() {
        let workout = Workout::SportsWalking {
            action: 9000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        assert_close(workout.distance_km(), 5.85);
        assert_close(workout.mean_speed_kmh(), 5.85);

        // Direct formula evaluation rather than a hand-rounded literal
        let speed_ms = 5.85 * walking::KMH_IN_MSEC;
        let expected = (walking::WEIGHT_MULTIPLIER * 75.0
            + speed_ms * speed_ms / 1.8 * walking::SPEED_HEIGHT_MULTIPLIER * 75.0)
            * 60.0;
        assert_close(workout.spent_calories(), expected);
    }

    #[test]
    fn test_swimming_fixture() {
        let workout = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_count: 40,
        };
        assert_close(workout.distance_km(), 0.9936);
        assert_close(workout.mean_speed_kmh(), 1.0);
        // (1.0 + 1.1) * 2 * 80 * 1
        assert_close(workout.spent_calories(), 336.0);
    }

    #[test]
    fn test_distance_monotonic_in_action_for_step_kinds() {
        let mut previous = -1.0;
        for action in [0_u32, 1, 500, 9000, 15000, 1_000_000] {
            let run = Workout::Running {
                action,
                duration_h: 1.0,
                weight_kg: 75.0,
            };
            let walk = Workout::SportsWalking {
                action,
                duration_h: 1.0,
                weight_kg: 75.0,
                height_cm: 180.0,
            };
            assert_close(run.distance_km(), walk.distance_km());
            assert!(run.distance_km() > previous);
            previous = run.distance_km();
        }
    }

    #[test]
    fn test_swim_speed_ignores_stroke_count() {
        let speeds: Vec<f64> = [0_u32, 720, 10_000]
            .into_iter()
            .map(|action| {
                Workout::Swimming {
                    action,
                    duration_h: 1.0,
                    weight_kg: 80.0,
                    pool_length_m: 25.0,
                    pool_count: 40,
                }
                .mean_speed_kmh()
            })
            .collect();
        assert_close(speeds[0], 1.0);
        assert_close(speeds[1], 1.0);
        assert_close(speeds[2], 1.0);
    }

    #[test]
    fn test_summary_uses_kind_label() {
        let workout = Workout::Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_count: 40,
        };
        let summary = workout.summary();
        assert_eq!(summary.workout_type, "Swimming");
        assert_close(summary.duration_h, 1.0);
        assert_close(summary.distance_km, 0.9936);
        assert_close(summary.mean_speed_kmh, 1.0);
        assert_close(summary.calories_kcal, 336.0);
    }
}
