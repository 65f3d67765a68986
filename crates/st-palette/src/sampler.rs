//! Random draws, behind an injectable trait.
//!
//! The generator never touches ambient random state. Every draw goes
//! through a [`Sampler`], so a seeded [`RngSampler`] reproduces a theme
//! exactly and a [`ScriptedSampler`] can pin individual draws.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform draws the generator makes.
pub trait Sampler {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    fn int(&mut self, min: i32, max: i32) -> i32;

    /// Uniform float in `[min, max)`.
    fn float(&mut self, min: f64, max: f64) -> f64;

    /// Fair coin flip.
    fn coin(&mut self) -> bool;

    /// Uniform index into a collection of `len` items.
    fn index(&mut self, len: usize) -> usize;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn int(&mut self, min: i32, max: i32) -> i32 {
        (**self).int(min, max)
    }

    fn float(&mut self, min: f64, max: f64) -> f64 {
        (**self).float(min, max)
    }

    fn coin(&mut self) -> bool {
        (**self).coin()
    }

    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

// ---------------------------------------------------------------------------
// RngSampler
// ---------------------------------------------------------------------------

/// A [`Sampler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<StdRng> {
    /// Deterministic sampler: the same seed always yields the same theme.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn float(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

// ---------------------------------------------------------------------------
// ScriptedSampler
// ---------------------------------------------------------------------------

/// A [`Sampler`] that replays a fixed list of values, one per draw.
///
/// Each queued value is interpreted by the draw that consumes it: integers
/// are rounded and clamped into range, floats clamped, coins are `true` for
/// any non-zero value, indices are truncated and clamped. Once the script
/// runs out every draw returns its lower bound (`false` for coins).
///
/// ```
/// use st_palette::sampler::{Sampler, ScriptedSampler};
///
/// let mut draws = ScriptedSampler::new([7.0, 1.0]);
/// assert_eq!(draws.int(0, 5), 5);
/// assert!(draws.coin());
/// assert_eq!(draws.int(10, 20), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    script: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedSampler {
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws made so far, scripted or not.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    fn next(&mut self) -> Option<f64> {
        self.consumed += 1;
        self.script.pop_front().filter(|v| v.is_finite())
    }
}

impl Sampler for ScriptedSampler {
    #[allow(clippy::cast_possible_truncation)]
    fn int(&mut self, min: i32, max: i32) -> i32 {
        self.next()
            .map_or(min, |v| (v.round().clamp(f64::from(min), f64::from(max.max(min)))) as i32)
    }

    fn float(&mut self, min: f64, max: f64) -> f64 {
        self.next().map_or(min, |v| v.clamp(min, max.max(min)))
    }

    fn coin(&mut self) -> bool {
        self.next().is_some_and(|v| v != 0.0)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        self.next().map_or(0, |v| (v.max(0.0) as usize).min(last))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
