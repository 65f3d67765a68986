//! Palette generation: one seed primary in, a light and a dark palette out.
//!
//! Generation runs in two phases. First every random draw is made, in a
//! fixed order, through the caller's [`Sampler`]: the order is part of the
//! contract, since it is what makes a seeded sampler reproduce a theme.
//! Then each scheme's palette is assembled from those draws without
//! touching the sampler again.
//!
//! ```text
//!   primary ─┬─► contrast seek ──────────────► primaryForeground
//!            ├─► hue ─► background/foreground ─► card, popover, border
//!            └─► harmony ─► secondary/accent ─► muted, mutedForeground
//!   destructive (own draw) ─► destructiveForeground
//!   base roles ─► aliases (input, ring, long, short, tp, sl, chartBg, …)
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use st_color::{Color, Hsl};
use tracing::debug;

use crate::contrast::contrasting_foreground;
use crate::harmony::{HarmonyMode, HarmonyPair, derive_harmony};
use crate::role::Role;
use crate::sampler::Sampler;
use crate::scheme::Scheme;

/// Lightness shift applied to card surfaces when cards are offset.
pub const CARD_STEP: f64 = 0.01;

/// How far the `*Inside` roles are darkened from their base.
pub const INSIDE_STEP: f64 = 0.4;

/// How far `tpLight` is lightened from the primary.
pub const TP_LIGHT_STEP: f64 = 0.1;

// ---------------------------------------------------------------------------
// ModePalette
// ---------------------------------------------------------------------------

/// Every role's color for one scheme.
///
/// One field per [`Role`], so a palette can't be missing a role or carry
/// one twice.
#[derive(Debug, Clone, PartialEq)]
pub struct ModePalette {
    pub primary: Hsl,
    pub primary_foreground: Hsl,
    pub secondary: Hsl,
    pub secondary_foreground: Hsl,
    pub background: Hsl,
    pub foreground: Hsl,
    pub card: Hsl,
    pub card_foreground: Hsl,
    pub popover: Hsl,
    pub popover_foreground: Hsl,
    pub muted: Hsl,
    pub muted_foreground: Hsl,
    pub accent: Hsl,
    pub accent_foreground: Hsl,
    pub destructive: Hsl,
    pub destructive_foreground: Hsl,
    pub border: Hsl,
    pub input: Hsl,
    pub ring: Hsl,
    pub unlocked: Hsl,
    pub long: Hsl,
    pub long_foreground: Hsl,
    pub long_inside: Hsl,
    pub short: Hsl,
    pub short_foreground: Hsl,
    pub short_inside: Hsl,
    pub tp: Hsl,
    pub tp_foreground: Hsl,
    pub tp_inside: Hsl,
    pub tp_light: Hsl,
    pub sl: Hsl,
    pub sl_foreground: Hsl,
    pub sl_inside: Hsl,
    pub chart_bg: Hsl,
}

impl ModePalette {
    /// The color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> Hsl {
        match role {
            Role::Primary => self.primary,
            Role::PrimaryForeground => self.primary_foreground,
            Role::Secondary => self.secondary,
            Role::SecondaryForeground => self.secondary_foreground,
            Role::Background => self.background,
            Role::Foreground => self.foreground,
            Role::Card => self.card,
            Role::CardForeground => self.card_foreground,
            Role::Popover => self.popover,
            Role::PopoverForeground => self.popover_foreground,
            Role::Muted => self.muted,
            Role::MutedForeground => self.muted_foreground,
            Role::Accent => self.accent,
            Role::AccentForeground => self.accent_foreground,
            Role::Destructive => self.destructive,
            Role::DestructiveForeground => self.destructive_foreground,
            Role::Border => self.border,
            Role::Input => self.input,
            Role::Ring => self.ring,
            Role::Unlocked => self.unlocked,
            Role::Long => self.long,
            Role::LongForeground => self.long_foreground,
            Role::LongInside => self.long_inside,
            Role::Short => self.short,
            Role::ShortForeground => self.short_foreground,
            Role::ShortInside => self.short_inside,
            Role::Tp => self.tp,
            Role::TpForeground => self.tp_foreground,
            Role::TpInside => self.tp_inside,
            Role::TpLight => self.tp_light,
            Role::Sl => self.sl,
            Role::SlForeground => self.sl_foreground,
            Role::SlInside => self.sl_inside,
            Role::ChartBg => self.chart_bg,
        }
    }

    /// `(role, color)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Hsl)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}

/// Serializes as a `{ "primaryForeground": {h, s, l}, … }` map in display
/// order.
impl Serialize for ModePalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.name(), &color)?;
        }
        map.end()
    }
}

/// The light and dark palettes of one generated theme.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ThemePair {
    pub light: ModePalette,
    pub dark: ModePalette,
}

impl ThemePair {
    #[must_use]
    pub const fn get(&self, scheme: Scheme) -> &ModePalette {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Knobs for [`generate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerateOptions {
    /// Seed primary. Drawn at random when `None`.
    pub primary: Option<Hsl>,
    /// Pin the harmony mode. The harmony draw is still made (and
    /// discarded) so every later draw lines up with an unpinned run.
    pub harmony: Option<HarmonyMode>,
}

/// Generate a light/dark theme around `primary`, or around a random
/// primary when `None`.
pub fn generate<S: Sampler + ?Sized>(primary: Option<Hsl>, sampler: &mut S) -> ThemePair {
    generate_with(GenerateOptions { primary, harmony: None }, sampler)
}

/// [`generate`] with extra options.
pub fn generate_with<S: Sampler + ?Sized>(options: GenerateOptions, sampler: &mut S) -> ThemePair {
    let seed = options.primary.unwrap_or_else(|| sample_primary(sampler));
    let primary = Color::from_hsl(seed);
    let hue = primary.hue();

    let background_dark = draw_hsl(sampler, hue, (30, 60), (0, 4));
    let background_light = draw_hsl(sampler, hue, (30, 70), (98, 100));
    let foreground_dark = draw_hsl(sampler, hue, (10, 40), (97, 100));
    let foreground_light = draw_hsl(sampler, hue, (50, 80), (0, 5));

    let offset_cards = sampler.coin();
    let popover_is_card = sampler.coin();
    let drawn = HarmonyMode::sample(sampler);
    let harmony = options.harmony.unwrap_or(drawn);
    let should_match = sampler.coin();

    debug!(
        primary = %seed,
        %harmony,
        offset_cards,
        popover_is_card,
        should_match,
        "generating theme"
    );

    let harmony_light = derive_harmony(primary, harmony, should_match, Scheme::Light, sampler);
    let harmony_dark = derive_harmony(primary, harmony, should_match, Scheme::Dark, sampler);

    let destructive_h = sampler.int(0, 22);
    let destructive_base =
        Color::from_hsl(draw_hsl(sampler, f64::from(destructive_h), (80, 100), (20, 45)));
    let destructive_light = destructive_base.to_hsl();
    let destructive_dark = Hsl {
        l: f64::from(sampler.int(45, 60)),
        ..destructive_light
    };

    let muted = Deviation::draw(sampler, (5, 40), (0, 10));
    let muted_foreground = Deviation::draw(sampler, (0, 15), (0, 15));
    let border = Deviation::draw(sampler, (2, 15), (5, 10));
    let border_dark_l = f64::from(sampler.int(10, 15));

    let shared = Shared {
        primary,
        offset_cards,
        popover_is_card,
        muted,
        muted_foreground,
        border_saturation: border.s,
    };

    let light = shared.assemble(
        Scheme::Light,
        SchemeInputs {
            background: background_light,
            foreground: foreground_light,
            harmony: harmony_light,
            destructive: destructive_light,
            destructive_color: destructive_base,
            border_l: background_light.l - border.l,
        },
    );
    let dark = shared.assemble(
        Scheme::Dark,
        SchemeInputs {
            background: background_dark,
            foreground: foreground_dark,
            harmony: harmony_dark,
            destructive: destructive_dark,
            destructive_color: Color::from_hsl(destructive_dark),
            border_l: border_dark_l,
        },
    );

    ThemePair { light, dark }
}

/// Random primary: any hue and saturation, lightness kept off the
/// extremes.
fn sample_primary<S: Sampler + ?Sized>(sampler: &mut S) -> Hsl {
    let h = sampler.int(0, 360);
    let s = sampler.int(0, 100);
    let l = sampler.int(10, 90);
    Hsl::new(f64::from(h), f64::from(s), f64::from(l))
}

/// Draw saturation then lightness at a fixed hue.
fn draw_hsl<S: Sampler + ?Sized>(sampler: &mut S, h: f64, s: (i32, i32), l: (i32, i32)) -> Hsl {
    let s = sampler.int(s.0, s.1);
    let l = sampler.int(l.0, l.1);
    Hsl::new(h, f64::from(s), f64::from(l))
}

/// Lighten (positive) or darken (negative) a stored token, rounding the
/// result back to a token.
fn shade(hsl: Hsl, amount: f64) -> Hsl {
    Color::from_hsl(hsl).lighten(amount).to_hsl()
}

/// A saturation and a lightness offset shared by both schemes.
#[derive(Debug, Clone, Copy)]
struct Deviation {
    s: f64,
    l: f64,
}

impl Deviation {
    fn draw<S: Sampler + ?Sized>(sampler: &mut S, s: (i32, i32), l: (i32, i32)) -> Self {
        let s = sampler.int(s.0, s.1);
        let l = sampler.int(l.0, l.1);
        Self { s: f64::from(s), l: f64::from(l) }
    }
}

/// Draws both schemes share.
struct Shared {
    primary: Color,
    offset_cards: bool,
    popover_is_card: bool,
    muted: Deviation,
    muted_foreground: Deviation,
    border_saturation: f64,
}

/// Draws specific to one scheme.
struct SchemeInputs {
    background: Hsl,
    foreground: Hsl,
    harmony: HarmonyPair,
    destructive: Hsl,
    destructive_color: Color,
    border_l: f64,
}

impl Shared {
    fn assemble(&self, scheme: Scheme, inputs: SchemeInputs) -> ModePalette {
        let SchemeInputs { background, foreground, harmony, destructive, destructive_color, border_l } = inputs;

        let primary = self.primary.to_hsl();
        let primary_foreground = contrasting_foreground(self.primary);

        let (card, card_foreground) = if self.offset_cards {
            // Cards sit slightly toward the middle: darker in light mode,
            // lighter in dark mode.
            let step = if scheme.is_dark() { CARD_STEP } else { -CARD_STEP };
            (shade(background, step), shade(foreground, step))
        } else {
            (background, foreground)
        };
        let (popover, popover_foreground) =
            if self.popover_is_card { (card, card_foreground) } else { (background, foreground) };

        let secondary = harmony.secondary.to_hsl();
        let secondary_foreground = contrasting_foreground(harmony.secondary);
        let accent = harmony.accent.to_hsl();
        let accent_foreground = contrasting_foreground(harmony.accent);

        let destructive_foreground = contrasting_foreground(destructive_color);

        let (muted_l, muted_foreground_l) = match scheme {
            Scheme::Light => (85.0 + self.muted.l, 25.0 + self.muted_foreground.l),
            Scheme::Dark => (15.0 - self.muted.l, 75.0 - self.muted_foreground.l),
        };
        let muted = Hsl::new(secondary.h, self.muted.s, muted_l);
        let muted_foreground = Hsl::new(muted.h, self.muted_foreground.s, muted_foreground_l);

        let border = Hsl::new(background.h, self.border_saturation, border_l);

        ModePalette {
            primary,
            primary_foreground,
            secondary,
            secondary_foreground,
            background,
            foreground,
            card,
            card_foreground,
            popover,
            popover_foreground,
            muted,
            muted_foreground,
            accent,
            accent_foreground,
            destructive,
            destructive_foreground,
            border,
            input: border,
            ring: primary,
            unlocked: background,
            long: accent,
            long_foreground: accent_foreground,
            long_inside: shade(accent, -INSIDE_STEP),
            short: destructive,
            short_foreground: destructive_foreground,
            short_inside: shade(destructive, -INSIDE_STEP),
            tp: primary,
            tp_foreground: primary_foreground,
            tp_inside: shade(primary, -INSIDE_STEP),
            tp_light: shade(primary, TP_LIGHT_STEP),
            sl: secondary,
            sl_foreground: secondary_foreground,
            sl_inside: shade(secondary, -INSIDE_STEP),
            chart_bg: background,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
