// ABOUTME: Main library entry point for the workout-metrics sensor report tool
// ABOUTME: Computes distance, mean speed, and calories from raw workout sensor packets
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Workout Metrics
//!
//! Computes workout statistics from raw sensor packets for three workout
//! kinds (swimming, running, sports walking) and renders each result as a
//! fixed-template summary line.
//!
//! ## Architecture
//!
//! - **Models**: workout kinds, sensor packets, and the training summary
//! - **Workouts**: the `Workout` sum type with per-kind formula sets
//! - **Dispatch**: sensor packet decoding into a concrete workout
//! - **Logging**: tracing setup for the report binary
//!
//! ## Example
//!
//! ```rust
//! use workout_metrics::dispatch::read_packet;
//! use workout_metrics::models::SensorPacket;
//!
//! let packet = SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]);
//! let workout = read_packet(&packet)?;
//! println!("{}", workout.summary());
//! # Ok::<(), workout_metrics::errors::AppError>(())
//! ```

pub mod dispatch;
pub mod errors;
pub mod logging;
pub mod models;
pub mod workouts;

pub use errors::{AppError, AppResult};
pub use models::{SensorPacket, TrainingSummary, WorkoutKind};
pub use workouts::Workout;
