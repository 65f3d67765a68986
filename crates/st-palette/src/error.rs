//! Errors surfaced by the palette crate.
//!
//! Generation itself is infallible; these only come from parsing user
//! input and from reading persisted themes back in.

use st_color::ParseColorError;

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error(transparent)]
    Color(#[from] ParseColorError),

    #[error("unknown color scheme `{0}` (expected `light` or `dark`)")]
    UnknownScheme(String),

    #[error("unknown harmony mode `{0}` (expected complementary, triadic, analogous or slick)")]
    UnknownHarmony(String),

    #[error("stored theme is malformed: {0}")]
    MalformedTheme(#[source] serde_json::Error),

    #[error("`{0}` has a non-finite component")]
    NonFinite(String),

    #[error("failed to encode theme: {0}")]
    Encode(#[source] serde_json::Error),
}
