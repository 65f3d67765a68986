//! Harmony modes: how secondary and accent are picked from the primary.
//!
//! The three wheel harmonies are pure rotations of the primary. Slick
//! ignores the wheel and draws a near-monochrome pair at the primary's
//! hue, light or dark depending on the scheme, so it is the only mode that
//! consumes sampler draws here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use st_color::{Color, Hsl, harmony};
use tracing::trace;

use crate::error::PaletteError;
use crate::sampler::Sampler;
use crate::scheme::Scheme;

/// Range of the slick accent nudges (normalized, `[min, max)`).
const NUDGE: (f64, f64) = (0.05, 0.1);

/// Saturation range of the slick pair.
const SLICK_SATURATION: (i32, i32) = (0, 20);

// ---------------------------------------------------------------------------
// HarmonyMode
// ---------------------------------------------------------------------------

/// How secondary and accent relate to the primary. Chosen once per
/// generation and shared by both schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Secondary is the primary's opposite; accent repeats it.
    Complementary,
    /// Secondary and accent are the other two triad vertices.
    Triadic,
    /// Secondary and accent are the 30° neighbours.
    Analogous,
    /// Low-saturation pair at the primary's hue.
    Slick,
}

impl HarmonyMode {
    /// Every mode, in the order the random draw indexes into.
    pub const ALL: [Self; 4] = [Self::Complementary, Self::Triadic, Self::Analogous, Self::Slick];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Slick => "slick",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|m| m.name() == lower)
    }

    /// Draw a mode uniformly.
    pub fn sample<S: Sampler + ?Sized>(sampler: &mut S) -> Self {
        Self::ALL[sampler.index(Self::ALL.len())]
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownHarmony(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Secondary and accent for one scheme, still un-rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyPair {
    pub secondary: Color,
    pub accent: Color,
}

/// Derive secondary and accent from `primary`.
///
/// `should_match` only matters for [`HarmonyMode::Slick`]: when set the
/// accent repeats the secondary, otherwise the accent is nudged away from
/// it and two extra floats are drawn.
pub fn derive_harmony<S: Sampler + ?Sized>(
    primary: Color,
    mode: HarmonyMode,
    should_match: bool,
    scheme: Scheme,
    sampler: &mut S,
) -> HarmonyPair {
    let pair = match mode {
        HarmonyMode::Complementary => {
            let [_, secondary] = harmony::complementary(primary);
            HarmonyPair { secondary, accent: secondary }
        }
        HarmonyMode::Triadic => {
            let [_, secondary, accent] = harmony::triadic(primary);
            HarmonyPair { secondary, accent }
        }
        HarmonyMode::Analogous => {
            let [secondary, _, accent] = harmony::analogous(primary);
            HarmonyPair { secondary, accent }
        }
        HarmonyMode::Slick => slick(primary, should_match, scheme, sampler),
    };

    trace!(%mode, %scheme, secondary = %pair.secondary, accent = %pair.accent, "harmony");
    pair
}

fn slick<S: Sampler + ?Sized>(
    primary: Color,
    should_match: bool,
    scheme: Scheme,
    sampler: &mut S,
) -> HarmonyPair {
    let (lo, hi) = match scheme {
        Scheme::Light => (80, 92),
        Scheme::Dark => (8, 20),
    };
    let s = sampler.int(SLICK_SATURATION.0, SLICK_SATURATION.1);
    let l = sampler.int(lo, hi);
    let secondary = Color::from_hsl(Hsl::new(primary.hue(), f64::from(s), f64::from(l)));

    if should_match {
        return HarmonyPair { secondary, accent: secondary };
    }

    // Light accents sink and gain color; dark accents gain color and rise.
    let accent = match scheme {
        Scheme::Light => {
            let darker = secondary.darken(sampler.float(NUDGE.0, NUDGE.1));
            darker.saturate(sampler.float(NUDGE.0, NUDGE.1))
        }
        Scheme::Dark => {
            let richer = secondary.saturate(sampler.float(NUDGE.0, NUDGE.1));
            richer.lighten(sampler.float(NUDGE.0, NUDGE.1))
        }
    };
    HarmonyPair { secondary, accent }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
