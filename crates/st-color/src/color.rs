// SPDX-License-Identifier: MIT
//
// st-color working color: sRGB storage with HSL-space adjustments.
//
// A Color keeps its channels as un-rounded floats in 0–255. Every
// adjustment (lighten, darken, saturate, rotate) converts to HSL, moves one
// coordinate and converts back, so chains of adjustments never accumulate
// rounding error. Rounding happens exactly once, in `to_hsl`.
//
// Conversion pipeline:
//
//   HSL ↔ HSV ↔ sRGB (0–255) ──► brightness, luminance, contrast

use std::fmt::{self, Write as _};

use crate::contrast;
use crate::hsl::{Hsl, normalize_hue};

// ─── Working color ───────────────────────────────────────────────────────────

/// An sRGB color with alpha, the working representation for theme math.
///
/// # Examples
///
/// ```
/// use st_color::{Color, Hsl};
///
/// let primary = Color::from_hsl(Hsl::new(210.0, 80.0, 45.0));
///
/// // Adjustment amounts are normalized: 0.1 is ten lightness points.
/// assert_eq!(primary.lighten(0.1).to_hsl(), Hsl::new(210.0, 80.0, 55.0));
/// assert_eq!(primary.rotate(180.0).hue(), 30.0);
///
/// // Contrast is the WCAG ratio, floored to two decimals.
/// assert!(Color::BLACK.contrast(Color::WHITE) >= 21.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel, 0.0 to 255.0.
    pub r: f64,
    /// Green channel, 0.0 to 255.0.
    pub g: f64,
    /// Blue channel, 0.0 to 255.0.
    pub b: f64,
    /// Opacity, 0.0 to 1.0. Carried through adjustments untouched.
    pub alpha: f64,
}

impl Color {
    // ─── Construction ────────────────────────────────────────────────────

    /// Create an opaque color from sRGB channels (0.0 to 255.0, clamped).
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color from sRGB channels with alpha.
    #[must_use]
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            alpha: if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 },
        }
    }

    /// Opaque color from byte channels.
    #[must_use]
    pub fn from_rgb8((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create a color from HSL coordinates.
    ///
    /// The hue is wrapped into [0, 360) and saturation/lightness are clamped
    /// to [0, 100] before conversion.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl.normalized();
        let (h, s, v) = hsl_to_hsv(h, s, l);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        Self { r, g, b, alpha: 1.0 }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is
    /// optional). `None` for anything else.
    #[must_use]
    pub fn hex(text: &str) -> Option<Self> {
        parse_hex(text)
    }

    /// Pure black.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, alpha: 1.0 };

    /// Pure white.
    pub const WHITE: Self = Self { r: 255.0, g: 255.0, b: 255.0, alpha: 1.0 };

    // ─── HSL View ────────────────────────────────────────────────────────

    /// Exact HSL coordinates, without rounding.
    #[must_use]
    pub fn to_hsl_exact(self) -> Hsl {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        let (h, s, l) = hsv_to_hsl(h, s, v);
        Hsl::new(h, s, l)
    }

    /// HSL coordinates rounded to whole numbers, hue wrapped into [0, 360).
    ///
    /// This is the precision theme tokens are stored and displayed at.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        self.to_hsl_exact().round()
    }

    /// Rounded hue angle in degrees.
    #[inline]
    #[must_use]
    pub fn hue(self) -> f64 {
        self.to_hsl().h
    }

    // ─── Adjustments ─────────────────────────────────────────────────────
    //
    // Amounts are normalized: 1.0 spans the full 0–100% range. Results are
    // clamped, never wrapped.

    /// Increase HSL lightness by `amount`.
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.adjust(|hsl| Hsl { l: (hsl.l + amount * 100.0).clamp(0.0, 100.0), ..hsl })
    }

    /// Decrease HSL lightness by `amount`.
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.lighten(-amount)
    }

    /// Increase HSL saturation by `amount`.
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.adjust(|hsl| Hsl { s: (hsl.s + amount * 100.0).clamp(0.0, 100.0), ..hsl })
    }

    /// Decrease HSL saturation by `amount`.
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.saturate(-amount)
    }

    /// Rotate the hue by `degrees` (wraps around 360°).
    ///
    /// Rotation starts from the rounded hue, so a harmony of a whole-number
    /// hue lands on whole-number hues.
    #[must_use]
    pub fn rotate(self, degrees: f64) -> Self {
        let h = normalize_hue(self.hue() + degrees);
        self.adjust(|hsl| Hsl { h, ..hsl })
    }

    /// Rotate this color by each shift in turn.
    ///
    /// The output has the same length as `shifts`, so a harmony can never
    /// come back with fewer members than asked for.
    #[must_use]
    pub fn harmony<const N: usize>(self, shifts: [f64; N]) -> [Self; N] {
        shifts.map(|shift| self.rotate(shift))
    }

    fn adjust(self, f: impl FnOnce(Hsl) -> Hsl) -> Self {
        Self {
            alpha: self.alpha,
            ..Self::from_hsl(f(self.to_hsl_exact()))
        }
    }

    // ─── Perception ──────────────────────────────────────────────────────

    /// Perceived brightness (YIQ weighting), 0.0 (black) to 1.0 (white).
    #[must_use]
    pub fn brightness(self) -> f64 {
        (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0 / 255.0
    }

    /// Whether the color reads as light (brightness at least one half).
    #[inline]
    #[must_use]
    pub fn is_light(self) -> bool {
        self.brightness() >= 0.5
    }

    /// Whether the color reads as dark.
    #[inline]
    #[must_use]
    pub fn is_dark(self) -> bool {
        !self.is_light()
    }

    /// WCAG 2.1 relative luminance, 0.0 to 1.0.
    #[inline]
    #[must_use]
    pub fn luminance(self) -> f64 {
        contrast::relative_luminance(self)
    }

    /// WCAG contrast ratio against `other`, floored to two decimals.
    ///
    /// `other` is measured at its byte-rounded channels, `self` as is.
    #[inline]
    #[must_use]
    pub fn contrast(self, other: Self) -> f64 {
        contrast::contrast_ratio(self, Self::from_rgb8(other.to_rgb8()))
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Channels rounded to bytes.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Lowercase `#rrggbb`, with an alpha byte appended when translucent.
    #[must_use]
    pub fn to_hex(self) -> String {
        let mut hex = String::with_capacity(9);
        hex.push('#');
        for byte in <[u8; 3]>::from(self.to_rgb8()) {
            let _ = write!(hex, "{byte:02x}");
        }
        if self.alpha < 1.0 {
            let _ = write!(hex, "{:02x}", to_u8(self.alpha * 255.0));
        }
        hex
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        out.write_str(&self.to_hex())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── HSL / HSV / sRGB ────────────────────────────────────────────────────────
//
// HSL and sRGB meet through HSV, which keeps both directions branch-light.
// Hue is in degrees, S/L/V in percent, RGB channels in 0–255.

/// Convert sRGB channels to HSV.
fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    let h = 60.0 * if sector < 0.0 { sector + 6.0 } else { sector };
    let s = if max > 0.0 { delta / max * 100.0 } else { 0.0 };
    let v = max / 255.0 * 100.0;
    (h, s, v)
}

/// Convert HSV to HSL.
fn hsv_to_hsl(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let hh = (200.0 - s) * v / 100.0;
    let sat = if hh > 0.0 && hh < 200.0 {
        s * v / 100.0 / if hh <= 100.0 { hh } else { 200.0 - hh } * 100.0
    } else {
        0.0
    };
    (h, sat, hh / 2.0)
}

/// Convert HSL to HSV.
fn hsl_to_hsv(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s * if l < 50.0 { l } else { 100.0 - l } / 100.0;
    let sat = if s > 0.0 { 2.0 * s / (l + s) * 100.0 } else { 0.0 };
    (h, sat, l + s)
}

/// Convert HSV to sRGB channels.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let h = h / 360.0 * 6.0;
    let s = s / 100.0;
    let v = v / 100.0;

    let sector = h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - (h - sector) * s);
    let t = v * (1.0 - (1.0 - h + sector) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (r * 255.0, g * 255.0, b * 255.0)
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(text: &str) -> Option<Color> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    // Short forms repeat each nibble: `f` reads as `ff`.
    let (width, scale) = match digits.len() {
        3 | 4 => (1, 17),
        6 | 8 => (2, 1),
        _ => return None,
    };
    let channel = |index: usize| -> Option<u8> {
        let slice = digits.get(index * width..(index + 1) * width)?;
        u8::from_str_radix(slice, 16).ok().map(|v| v * scale)
    };

    let alpha = if digits.len() == 4 * width { channel(3)? } else { u8::MAX };
    Some(Color::rgba(
        f64::from(channel(0)?),
        f64::from(channel(1)?),
        f64::from(channel(2)?),
        f64::from(alpha) / 255.0,
    ))
}

#[inline]
fn clamp_channel(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 255.0) } else { 0.0 }
}

/// Round a 0–255 channel to a byte.
#[inline]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn hsl(h: f64, s: f64, l: f64) -> Color {
        Color::from_hsl(Hsl::new(h, s, l))
    }

    // ── Conversions ──────────────────────────────────────────────────────

    #[test]
    fn primaries_from_hsl() {
        assert_eq!(hsl(0.0, 100.0, 50.0).to_rgb8(), (255, 0, 0));
        assert_eq!(hsl(120.0, 100.0, 50.0).to_rgb8(), (0, 255, 0));
        assert_eq!(hsl(240.0, 100.0, 50.0).to_rgb8(), (0, 0, 255));
        assert_eq!(hsl(0.0, 0.0, 100.0).to_rgb8(), (255, 255, 255));
        assert_eq!(hsl(0.0, 0.0, 0.0).to_rgb8(), (0, 0, 0));
    }

    #[test]
    fn mid_gray_is_exact() {
        let gray = hsl(0.0, 0.0, 50.0);
        assert_eq!(gray.r, 127.5);
        assert_eq!(gray.g, 127.5);
        assert_eq!(gray.b, 127.5);
    }

    #[test]
    fn hue_360_matches_hue_0() {
        assert_eq!(hsl(360.0, 60.0, 40.0), hsl(0.0, 60.0, 40.0));
    }

    // ── Roundtrip ────────────────────────────────────────────────────────

    #[test]
    fn whole_number_hsl_roundtrips() {
        for &(h, s, l) in &[
            (210.0, 80.0, 45.0),
            (0.0, 50.0, 50.0),
            (17.0, 93.0, 31.0),
            (300.0, 12.0, 88.0),
            (359.0, 100.0, 10.0),
        ] {
            let back = hsl(h, s, l).to_hsl();
            assert_eq!(back, Hsl::new(h, s, l), "roundtrip of ({h}, {s}, {l})");
        }
    }

    #[test]
    fn extremes_lose_hue_and_saturation() {
        // Pure white and black carry no hue: the HSL view collapses to zero.
        assert_eq!(hsl(210.0, 50.0, 100.0).to_hsl(), Hsl::new(0.0, 0.0, 100.0));
        assert_eq!(hsl(210.0, 50.0, 0.0).to_hsl(), Hsl::new(0.0, 0.0, 0.0));
    }

    // ── Adjustments ──────────────────────────────────────────────────────

    #[test]
    fn lighten_and_darken_move_lightness_points() {
        let c = hsl(210.0, 80.0, 45.0);
        assert_eq!(c.lighten(0.1).to_hsl(), Hsl::new(210.0, 80.0, 55.0));
        assert_eq!(c.darken(0.4).to_hsl(), Hsl::new(210.0, 80.0, 5.0));
    }

    #[test]
    fn lightness_clamps() {
        let c = hsl(30.0, 40.0, 90.0);
        assert_eq!(c.lighten(0.5).to_hsl().l, 100.0);
        assert_eq!(c.darken(2.0).to_hsl().l, 0.0);
    }

    #[test]
    fn saturate_clamps() {
        let c = hsl(30.0, 95.0, 50.0);
        assert_eq!(c.saturate(0.1).to_hsl().s, 100.0);
        assert_eq!(c.desaturate(1.5).to_hsl().s, 0.0);
    }

    #[test]
    fn rotate_wraps() {
        let c = hsl(300.0, 60.0, 50.0);
        assert_eq!(c.rotate(90.0).hue(), 30.0);
        assert_eq!(c.rotate(-330.0).hue(), 330.0);
    }

    #[test]
    fn harmony_keeps_length() {
        let [a, b, c] = hsl(0.0, 50.0, 50.0).harmony([0.0, 120.0, 240.0]);
        assert_eq!((a.hue(), b.hue(), c.hue()), (0.0, 120.0, 240.0));
    }

    #[test]
    fn adjustments_preserve_alpha() {
        let c = Color::hex("#3366cc80").unwrap();
        assert!(approx_eq(c.lighten(0.1).alpha, 128.0 / 255.0, 1e-9));
    }

    // ── Perception ───────────────────────────────────────────────────────

    #[test]
    fn brightness_bounds() {
        assert_eq!(Color::BLACK.brightness(), 0.0);
        assert!(approx_eq(Color::WHITE.brightness(), 1.0, 1e-12));
    }

    #[test]
    fn mid_gray_counts_as_light() {
        assert!(hsl(0.0, 0.0, 50.0).is_light());
        assert!(hsl(0.0, 0.0, 49.0).is_dark());
    }

    #[test]
    fn yellow_is_light_blue_is_dark() {
        assert!(hsl(60.0, 100.0, 50.0).is_light());
        assert!(hsl(240.0, 100.0, 50.0).is_dark());
    }

    #[test]
    fn contrast_rounds_only_the_argument() {
        let gray = Color::rgb(127.5, 127.5, 127.5);
        assert_eq!(gray.contrast(Color::BLACK), 5.28);
        assert_eq!(Color::BLACK.contrast(gray), 5.31);
        assert_eq!(Color::BLACK.contrast(gray), Color::BLACK.contrast(Color::rgb(128.0, 128.0, 128.0)));
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_long_form() {
        let orange = Color::hex("#ff8000").unwrap();
        assert_eq!(orange.to_rgb8(), (255, 128, 0));
        assert_eq!(orange.alpha, 1.0);
        assert_eq!(Color::hex("C86432").unwrap(), Color::from_rgb8((200, 100, 50)));
    }

    #[test]
    fn hex_short_form_repeats_nibbles() {
        assert_eq!(Color::hex("#f80").unwrap().to_rgb8(), (255, 136, 0));
        let translucent = Color::hex("#0008").unwrap();
        assert!(approx_eq(translucent.alpha, 136.0 / 255.0, 1e-9));
    }

    #[test]
    fn hex_alpha_survives_output() {
        let red = Color::hex("#ff000080").unwrap();
        assert!(approx_eq(red.alpha, 128.0 / 255.0, 1e-9));
        assert_eq!(red.to_hex(), "#ff000080");
        assert_eq!(red.to_string(), "#ff000080");
    }

    #[test]
    fn hex_rejects_junk() {
        for text in ["", "#", "xyz", "#12345", "#+f0", "#ff00zz", "#ff8000ff00"] {
            assert!(Color::hex(text).is_none(), "accepted {text:?}");
        }
    }

    #[test]
    fn to_hex_is_lowercase_and_opaque_by_default() {
        assert_eq!(Color::hex("#C86432").unwrap().to_hex(), "#c86432");
        assert_eq!(hsl(0.0, 100.0, 50.0).to_hex(), "#ff0000");
    }
}
