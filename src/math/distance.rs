//! Perceptual color distance
//!
//! Weighted squared RGB difference following the "redmean" approximation of
//! human color perception. Values are only meaningful relative to each other.

use crate::math::color::Color;

/// Weighted distance between two colors
///
/// Only red, green and blue take part; alpha and any further channels are
/// ignored. The result is used purely for ordering and can dip below zero
/// for some pathological inputs.
pub fn color_distance(first: &Color, second: &Color) -> f64 {
    let dr = first.red() - second.red();
    let dg = first.green() - second.green();
    let db = first.blue() - second.blue();
    let avg_r = (first.red() + second.red()) / 2.0;

    let dr2 = dr * dr;
    let dg2 = dg * dg;
    let db2 = db * db;

    (2.0 * dr2) + (4.0 * dg2) + (3.0 * db2) + (avg_r * (dr2 - db2) / 256.0)
}
