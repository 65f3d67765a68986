//! Contrast-seeking foreground derivation.
//!
//! Every `*Foreground` role is found the same way: start from the base
//! color and step its lightness away from it until the pair reaches a 6:1
//! contrast ratio. Light bases are darkened, dark bases lightened, 0.2
//! (twenty lightness points) per step, at most [`MAX_STEPS`] steps.
//!
//! The search is best-effort. A mid-gray base can't reach 6:1 against
//! either black or white, so it stops at the cap and the result is used
//! as is.

use st_color::{Color, Hsl};
use tracing::trace;

/// Contrast ratio the search aims for.
pub const TARGET_CONTRAST: f64 = 6.0;

/// Normalized lightness change per step.
pub const STEP: f64 = 0.2;

/// Upper bound on the number of steps.
pub const MAX_STEPS: u32 = 11;

/// Outcome of a contrast search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastSearch {
    /// The foreground color found.
    pub color: Color,
    /// How many darken/lighten steps were applied.
    pub steps: u32,
    /// Contrast of `color` against the base.
    pub contrast: f64,
}

impl ContrastSearch {
    #[must_use]
    pub fn reached_target(&self) -> bool {
        self.contrast >= TARGET_CONTRAST
    }

    /// The search stopped because it ran out of steps.
    #[must_use]
    pub fn hit_cap(&self) -> bool {
        !self.reached_target() && self.steps == MAX_STEPS
    }
}

/// Step a copy of `base` away from it until contrast reaches
/// [`TARGET_CONTRAST`] or [`MAX_STEPS`] steps have been taken.
#[must_use]
pub fn seek_contrast(base: Color) -> ContrastSearch {
    let darken = base.is_light();

    let mut color = base;
    let mut steps = 0;
    let mut contrast = color.contrast(base);

    while contrast < TARGET_CONTRAST && steps < MAX_STEPS {
        color = if darken { color.darken(STEP) } else { color.lighten(STEP) };
        steps += 1;
        contrast = color.contrast(base);
    }

    trace!(base = %base, result = %color, steps, contrast, "contrast search");
    ContrastSearch { color, steps, contrast }
}

/// Foreground for `base`, as a rounded HSL token.
#[must_use]
pub fn contrasting_foreground(base: Color) -> Hsl {
    seek_contrast(base).color.to_hsl()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
