// SPDX-License-Identifier: MIT
//
// Hsl: the value type every theme token is stored as.
//
// Components use CSS units: hue in degrees [0, 360), saturation and
// lightness in percent [0, 100]. Values are plain f64 so that hand-edited
// or restored tokens survive untouched; the generator itself only ever
// produces whole numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL coordinates, as written into a CSS custom property.
///
/// `Display` renders shadcn's variable format (`"210 80% 45%"`), which is
/// what goes between `hsl(var(--primary))` parentheses in the stylesheet.
///
/// ```
/// use st_color::Hsl;
///
/// let primary: Hsl = "hsl(210 80% 45%)".parse().unwrap();
/// assert_eq!(primary, Hsl::new(210.0, 80.0, 45.0));
/// assert_eq!(primary.to_string(), "210 80% 45%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue angle in degrees, 0.0 to 360.0 (exclusive).
    pub h: f64,
    /// Saturation percentage, 0.0 to 100.0.
    pub s: f64,
    /// Lightness percentage, 0.0 to 100.0.
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Wrap the hue into [0, 360) and clamp saturation and lightness
    /// into [0, 100].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: clamp_percent(self.s),
            l: clamp_percent(self.l),
        }
    }

    /// Whether every component already lies in its canonical range.
    #[must_use]
    pub fn in_range(self) -> bool {
        (0.0..360.0).contains(&self.h)
            && (0.0..=100.0).contains(&self.s)
            && (0.0..=100.0).contains(&self.l)
    }

    /// Round every component to a whole number (hue 360 wraps to 0).
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            h: normalize_hue(self.h.round()),
            s: self.s.round(),
            l: self.l.round(),
        }
    }

    /// Convert to an sRGB working color.
    #[inline]
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsl(self)
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        color.to_hsl()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Why a color string could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("invalid hex color `{0}`")]
    Hex(String),

    #[error("expected three HSL components in `{0}`")]
    Arity(String),

    #[error("invalid HSL component `{0}`")]
    Component(String),

    #[error("HSL component `{0}` is outside 0..=100")]
    OutOfRange(String),
}

impl FromStr for Hsl {
    type Err = ParseColorError;

    /// Accepts `#rrggbb`-style hex, shadcn's `210 80% 45%`, the comma form
    /// `210, 80%, 45%`, and either of those wrapped in `hsl(...)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return Color::hex(trimmed)
                .map(Color::to_hsl)
                .ok_or_else(|| ParseColorError::Hex(trimmed.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        let body = lower
            .strip_prefix("hsla(")
            .or_else(|| lower.strip_prefix("hsl("))
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(&lower);

        // Anything after a `/` is alpha, which theme tokens don't carry.
        let body = body.split('/').next().unwrap_or_default();
        let parts: Vec<&str> = body
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [h, sat, light] = parts.as_slice() else {
            return Err(ParseColorError::Arity(trimmed.to_string()));
        };

        let h = parse_component(h.strip_suffix("deg").unwrap_or(h))?;
        let sat = parse_percent(sat)?;
        let light = parse_percent(light)?;

        Ok(Self::new(normalize_hue(h), sat, light))
    }
}

fn parse_component(text: &str) -> Result<f64, ParseColorError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::Component(text.to_string()))
}

fn parse_percent(text: &str) -> Result<f64, ParseColorError> {
    let value = parse_component(text.strip_suffix('%').unwrap_or(text))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ParseColorError::OutOfRange(text.to_string()))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360). Non-finite input maps to 0.
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

#[inline]
fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
