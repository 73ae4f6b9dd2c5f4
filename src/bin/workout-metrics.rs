// ABOUTME: Report binary iterating the fixed demo sensor feed
// ABOUTME: Dispatches each packet and prints one summary line per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Workout Metrics Binary
//!
//! Runs the fixed demo sensor feed through dispatch and prints one
//! rendered summary line per packet to stdout. The first dispatch
//! failure aborts the whole run; there is no per-packet recovery.
//!
//! Usage:
//! ```bash
//! cargo run --bin workout-metrics
//!
//! # With dispatch tracing
//! RUST_LOG=debug cargo run --bin workout-metrics
//! ```

use anyhow::{Context, Result};
use tracing::info;

use workout_metrics::dispatch::read_packet;
use workout_metrics::logging;
use workout_metrics::models::SensorPacket;

/// The demo sensor feed: one raw tuple per completed workout
fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> Result<()> {
    logging::init_from_env()?;

    let packets = demo_packets();
    info!(count = packets.len(), "processing sensor feed");

    for packet in &packets {
        let workout = read_packet(packet)
            .with_context(|| format!("failed to decode {} packet", packet.workout_type))?;
        println!("{}", workout.summary());
    }

    Ok(())
}
