// src/interpolate.rs

//! Closed-loop linear interpolation of position tables.
//!
//! The source points are treated as the vertices of a closed polygon: the
//! last point connects back to the first. Each segment is subdivided into
//! `output_count / source_len` evenly spaced steps, and every output
//! coordinate is rounded to the nearest integer with ties going to the
//! even neighbour.

use crate::geom::Position;
use crate::utils::error::{Result, TableError};
use crate::utils::log::debug;

/// Number of positions produced per table for the paddle control loop.
pub const OUTPUT_POSITION_COUNT: usize = 128;

/// Rounds to the nearest integer, resolving exact `.5` ties to the even
/// neighbour (`2.5 -> 2`, `3.5 -> 4`, `-0.5 -> 0`).
///
/// `f64::round` rounds ties away from zero, which would shift every `.5`
/// boundary case by one.
#[inline]
pub fn round_half_even(value: f64) -> i32 {
    value.round_ties_even() as i32
}

#[inline]
fn lerp(start: i32, end: i32, t: f64) -> i32 {
    let start = start as f64;
    let end = end as f64;
    round_half_even(start + (end - start) * t)
}

/// Interpolates a closed loop of positions up to `output_count` points.
///
/// Output index `i` lies in segment `(i / step) % len` at fraction
/// `(i % step) / step`, where `step = output_count / len`. Output `k * step`
/// is always exactly `positions[k]`.
///
/// # Errors
/// * [`TableError::EmptySource`] if `positions` is empty.
/// * [`TableError::UnevenSegments`] if `output_count` is not a multiple of
///   `positions.len()`.
pub fn interpolate(positions: &[Position], output_count: usize) -> Result<Vec<Position>> {
    let len = positions.len();
    if len == 0 {
        return Err(TableError::EmptySource);
    }
    if output_count % len != 0 {
        return Err(TableError::UnevenSegments {
            input: len,
            output: output_count,
        });
    }

    let step = output_count / len;
    let mut out = Vec::with_capacity(output_count);

    for i in 0..output_count {
        let segment = (i / step) % len;
        let next = (segment + 1) % len;
        let t = (i % step) as f64 / step as f64;

        let a = positions[segment];
        let b = positions[next];
        out.push(Position::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)));
    }

    debug!(
        "Interpolated {} source positions into {} ({} steps per segment)",
        len, output_count, step
    );
    Ok(out)
}

/// Interpolates to [`OUTPUT_POSITION_COUNT`] positions.
pub fn interpolate_default(positions: &[Position]) -> Result<Vec<Position>> {
    interpolate(positions, OUTPUT_POSITION_COUNT)
}
