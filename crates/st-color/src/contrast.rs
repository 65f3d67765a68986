// SPDX-License-Identifier: MIT
//
// WCAG 2.1 luminance and contrast.
//
//   channel ──► linear light ──► luminance (0.2126 R + 0.7152 G + 0.0722 B)
//   (Y_hi + 0.05) / (Y_lo + 0.05) ──► floor to 0.01
//
// Flooring keeps thresholds honest: a pair reported at 6.00 never falls
// short of 6 by a rounding hair.

use crate::color::Color;

/// Rec. 709 weights applied to linear red, green and blue.
const WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Linear-light value of one 0–255 sRGB channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(channel: f64) -> f64 {
    let v = channel / 255.0;
    if v < 0.040_45 { v / 12.92 } else { ((v + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance in [0, 1].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    [color.r, color.g, color.b]
        .into_iter()
        .zip(WEIGHTS)
        .map(|(channel, weight)| weight * srgb_to_linear(channel))
        .sum()
}

/// Contrast ratio in [1, 21], floored to two decimals. Symmetric.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (ya, yb) = (relative_luminance(a), relative_luminance(b));
    let ratio = (ya.max(yb) + 0.05) / (ya.min(yb) + 0.05);
    (ratio * 100.0).floor() / 100.0
}
