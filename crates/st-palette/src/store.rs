//! Persisted themes: storage keys, validation, and regenerate-on-failure.
//!
//! The editor keeps one JSON array of [`ThemeEntry`] records per scheme,
//! under `"{base}:{scheme}"`. Anything read back is untrusted: if it
//! doesn't have the entry shape it is dropped and a fresh palette takes
//! its place.

use st_color::Hsl;
use tracing::{debug, warn};

use crate::entry::{ThemeEntry, generate_entries};
use crate::error::PaletteError;
use crate::sampler::Sampler;
use crate::scheme::Scheme;

/// Base storage key the editor uses when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "shadcn-theme-editor";

/// Key the entries for `scheme` are stored under.
#[must_use]
pub fn storage_key(base: &str, scheme: Scheme) -> String {
    format!("{base}:{scheme}")
}

/// Parse a stored JSON array of entries.
///
/// Every element must carry a string `title`, a string `variable` and a
/// `color` object with numeric `h`, `s` and `l`. Extra fields are ignored.
///
/// # Errors
///
/// [`PaletteError::MalformedTheme`] when the text isn't JSON or doesn't
/// have the entry shape.
pub fn parse_entries(json: &str) -> Result<Vec<ThemeEntry>, PaletteError> {
    serde_json::from_str(json).map_err(PaletteError::MalformedTheme)
}

/// Encode entries as the JSON array [`parse_entries`] reads.
///
/// # Errors
///
/// [`PaletteError::NonFinite`] for an entry with a NaN or infinite
/// component, which JSON would write as `null` and [`parse_entries`]
/// would then reject. [`PaletteError::Encode`] if serialization fails.
pub fn to_json(entries: &[ThemeEntry]) -> Result<String, PaletteError> {
    let non_finite = |entry: &&ThemeEntry| {
        let Hsl { h, s, l } = entry.color;
        !(h.is_finite() && s.is_finite() && l.is_finite())
    };
    if let Some(entry) = entries.iter().find(non_finite) {
        return Err(PaletteError::NonFinite(entry.variable.clone()));
    }
    serde_json::to_string(entries).map_err(PaletteError::Encode)
}

/// Where restored entries came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stored,
    Generated,
}

/// Result of [`restore_or_generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Restored {
    pub entries: Vec<ThemeEntry>,
    pub source: Source,
}

/// Use the stored entries for `scheme` if they validate, otherwise
/// generate a fresh theme from `primary` (random when `None`) and take
/// that scheme's half.
pub fn restore_or_generate<S: Sampler + ?Sized>(
    stored: Option<&str>,
    scheme: Scheme,
    primary: Option<Hsl>,
    sampler: &mut S,
) -> Restored {
    if let Some(json) = stored {
        match parse_entries(json) {
            Ok(entries) => {
                debug!(%scheme, count = entries.len(), "restored stored theme");
                return Restored { entries, source: Source::Stored };
            }
            Err(err) => warn!(%scheme, error = %err, "discarding stored theme"),
        }
    }

    let entries = generate_entries(primary, sampler);
    let entries = match scheme {
        Scheme::Light => entries.light,
        Scheme::Dark => entries.dark,
    };
    Restored { entries, source: Source::Generated }
}
