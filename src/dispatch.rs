// ABOUTME: Sensor packet decoding into concrete Workout values
// ABOUTME: Closed-enum tag lookup plus positional field unpacking with arity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Packet Dispatch
//!
//! Decodes one [`SensorPacket`] into the matching [`Workout`] variant.
//! The workout type code resolves through the closed [`WorkoutKind`]
//! enum, so an unknown code is a typed failure rather than a silent
//! default, and the field list must match the kind's arity exactly.

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{SensorPacket, WorkoutKind};
use crate::workouts::Workout;

/// Decode a sensor packet into a workout
///
/// Counts (`action`, `pool_count`) arrive on the wire as floats in the
/// flat field list and truncate to whole units on unpack.
///
/// # Errors
///
/// Returns [`AppError::UnknownWorkoutType`] when the packet's type code
/// matches no known kind, and [`AppError::MalformedPacket`] when the
/// field list's arity does not match the resolved kind.
pub fn read_packet(packet: &SensorPacket) -> AppResult<Workout> {
    let kind = WorkoutKind::from_code(&packet.workout_type)
        .ok_or_else(|| AppError::unknown_workout_type(&packet.workout_type))?;

    let expected = kind.expected_field_count();
    if packet.data.len() != expected {
        return Err(AppError::malformed_packet(kind, expected, packet.data.len()));
    }

    let workout = match kind {
        WorkoutKind::Swimming => Workout::Swimming {
            action: packet.data[0] as u32,
            duration_h: packet.data[1],
            weight_kg: packet.data[2],
            pool_length_m: packet.data[3],
            pool_count: packet.data[4] as u32,
        },
        WorkoutKind::Running => Workout::Running {
            action: packet.data[0] as u32,
            duration_h: packet.data[1],
            weight_kg: packet.data[2],
        },
        WorkoutKind::SportsWalking => Workout::SportsWalking {
            action: packet.data[0] as u32,
            duration_h: packet.data[1],
            weight_kg: packet.data[2],
            height_cm: packet.data[3],
        },
    };

    debug!(
        code = %packet.workout_type,
        kind = kind.display_name(),
        fields = expected,
        "decoded sensor packet"
    );
    Ok(workout)
}
