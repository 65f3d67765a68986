// SPDX-License-Identifier: MIT
//
// st-color: color math for the shadcn theme generator.
//
// Theme tokens are authored in HSL (the format shadcn stores in its CSS
// custom properties), but every adjustment the generator makes goes
// through an sRGB working color first:
//
//   Hsl ──► Color (sRGB, un-rounded) ──► lighten / darken / rotate ──► Hsl
//
// Working in sRGB is what gives brightness and WCAG contrast a concrete
// meaning, and converting back to Hsl rounds every component to whole
// numbers, which is the precision the editor shows and persists.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue sector indices come from floored floats.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
pub mod harmony;
pub mod hsl;

pub use color::Color;
pub use hsl::{Hsl, ParseColorError};
