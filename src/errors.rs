// ABOUTME: Structured error types for sensor packet decoding
// ABOUTME: Every dispatch failure is fatal to the run; errors carry the offending context
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Types
//!
//! Failures are limited to packet decoding: an unrecognized workout type
//! code, or a field list whose arity does not match the resolved kind.
//! Both abort the whole run; there is no per-packet recovery.

use thiserror::Error;

use crate::models::WorkoutKind;

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while decoding sensor packets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The packet's workout type code matched none of the known kinds
    #[error("unknown workout type code: {code}")]
    UnknownWorkoutType {
        /// The unrecognized code as it appeared on the wire
        code: String,
    },

    /// The packet's field list does not match the kind's expected arity
    #[error("malformed {kind:?} packet: expected {expected} fields, got {actual}")]
    MalformedPacket {
        /// Kind resolved from the packet's type code
        kind: WorkoutKind,
        /// Field count the kind's constructor requires
        expected: usize,
        /// Field count actually present in the packet
        actual: usize,
    },
}

impl AppError {
    /// Build an unknown-workout-type error from the wire code
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Build a malformed-packet error for a kind whose arity check failed
    #[must_use]
    pub const fn malformed_packet(kind: WorkoutKind, expected: usize, actual: usize) -> Self {
        Self::MalformedPacket {
            kind,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_workout_type_message_includes_code() {
        let err = AppError::unknown_workout_type("BIK");
        assert_eq!(err.to_string(), "unknown workout type code: BIK");
    }

    #[test]
    fn test_malformed_packet_message_includes_arity() {
        let err = AppError::malformed_packet(WorkoutKind::Running, 3, 5);
        assert!(err.to_string().contains("expected 3 fields, got 5"));
    }
}
