// SPDX-License-Identifier: MIT
//
// Hue harmonies: fixed rotation sets around a base color.
//
// Each harmony is a constant array of hue shifts, and the member colors are
// the base rotated by each shift in order. Because the arrays are fixed
// size, callers destructure the members directly; there is no "missing
// member" case to handle.

use crate::color::Color;

/// Base and its opposite.
pub const COMPLEMENTARY: [f64; 2] = [0.0, 180.0];

/// Three hues evenly spaced around the wheel.
pub const TRIADIC: [f64; 3] = [0.0, 120.0, 240.0];

/// The base with its two 30° neighbours, counter-clockwise first.
pub const ANALOGOUS: [f64; 3] = [-30.0, 0.0, 30.0];

/// `[base, base + 180°]`.
#[must_use]
pub fn complementary(base: Color) -> [Color; 2] {
    base.harmony(COMPLEMENTARY)
}

/// `[base, base + 120°, base + 240°]`.
#[must_use]
pub fn triadic(base: Color) -> [Color; 3] {
    base.harmony(TRIADIC)
}

/// `[base − 30°, base, base + 30°]`.
#[must_use]
pub fn analogous(base: Color) -> [Color; 3] {
    base.harmony(ANALOGOUS)
}
