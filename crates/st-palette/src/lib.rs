//! # st-palette: random shadcn theme generation
//!
//! Produces a complete light and dark palette from one primary color: 19
//! shadcn roles plus 15 trading-UI feature roles per scheme, every
//! foreground searched for a 6:1 contrast against its surface.
//!
//! # Architecture
//!
//! ```text
//! seed primary (or random) + Sampler
//!     │
//!     ▼
//! palette.rs:  all random draws, in a fixed order
//!     │
//!     ├──► harmony.rs:  secondary/accent (complementary, triadic, analogous, slick)
//!     ├──► contrast.rs: foregrounds (step lightness until 6:1, at most 11 steps)
//!     ▼
//! ThemePair { light, dark }: one Hsl per Role
//!     │
//!     ▼
//! entry.rs:    (title, variable, color) records in table order
//!     │
//!     ├──► store.rs: JSON persistence, validate or regenerate
//!     └──► css.rs:   `:root` / `.dark` custom properties
//! ```
//!
//! # Randomness
//!
//! Nothing here reads ambient random state. Pass an
//! [`RngSampler`](sampler::RngSampler) seeded with a fixed value to get
//! the same theme back, or a [`ScriptedSampler`](sampler::ScriptedSampler)
//! to pin individual draws.
//!
//! ```
//! use st_palette::{Hsl, RngSampler, generate};
//!
//! let theme = generate(Some(Hsl::new(210.0, 80.0, 45.0)), &mut RngSampler::seeded(7));
//! assert_eq!(theme.light.primary, theme.dark.primary);
//! assert_eq!(theme.dark.ring, theme.dark.primary);
//! ```

// Lightness offsets are small integers drawn as i32 and used as f64.
#![allow(clippy::cast_precision_loss)]
// One field per role.
#![allow(clippy::struct_field_names)]

pub mod contrast;
pub mod css;
pub mod entry;
pub mod error;
pub mod harmony;
pub mod palette;
pub mod role;
pub mod sampler;
pub mod scheme;
pub mod store;

pub use entry::{ThemeEntries, ThemeEntry, generate_entries};
pub use error::PaletteError;
pub use harmony::HarmonyMode;
pub use palette::{GenerateOptions, ModePalette, ThemePair, generate, generate_with};
pub use role::{Role, title_for_variable};
pub use sampler::{RngSampler, Sampler, ScriptedSampler};
pub use scheme::Scheme;
pub use st_color::{Color, Hsl};
