//! CSS custom-property output.
//!
//! shadcn stylesheets keep bare HSL triples in their variables and wrap
//! them at the use site (`hsl(var(--primary))`), so each line is just the
//! token's `Display` form: `--primary: 210 80% 45%;`. The trading-UI
//! feature roles follow the shadcn ones under a `/* Trading UI */` comment.

use std::fmt::Write;

use crate::entry::{ThemeEntries, ThemeEntry};
use crate::role::Role;
use crate::scheme::Scheme;

/// Selector that carries each scheme's variables.
#[must_use]
pub const fn selector(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Light => ":root",
        Scheme::Dark => ".dark",
    }
}

/// One rule block declaring every entry as a custom property.
#[must_use]
pub fn render_block(selector: &str, entries: &[ThemeEntry]) -> String {
    let mut out = String::with_capacity(entries.len() * 32 + selector.len() + 4);
    let _ = writeln!(out, "{selector} {{");
    let mut in_features = false;
    for entry in entries {
        let feature = Role::from_variable(&entry.variable).is_some_and(Role::is_feature);
        if feature && !in_features {
            out.push_str("\n  /* Trading UI */\n");
        }
        in_features = feature;
        let _ = writeln!(out, "  {}: {};", entry.variable, entry.color);
    }
    out.push_str("}\n");
    out
}

/// Both schemes: `:root` for light, `.dark` for dark.
#[must_use]
pub fn render_stylesheet(entries: &ThemeEntries) -> String {
    Scheme::ALL
        .iter()
        .map(|&scheme| render_block(selector(scheme), entries.get(scheme)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::generate_entries;
    use crate::sampler::RngSampler;
    use pretty_assertions::assert_eq;
    use st_color::Hsl;

    fn entry(variable: &str, color: Hsl) -> ThemeEntry {
        ThemeEntry { title: String::new(), variable: variable.into(), color }
    }

    #[test]
    fn block_layout() {
        let css = render_block(
            ":root",
            &[
                entry("--primary", Hsl::new(210.0, 80.0, 45.0)),
                entry("--ring", Hsl::new(0.0, 0.0, 100.0)),
            ],
        );
        assert_eq!(css, ":root {\n  --primary: 210 80% 45%;\n  --ring: 0 0% 100%;\n}\n");
    }

    #[test]
    fn stylesheet_has_both_selectors() {
        let entries = generate_entries(None, &mut RngSampler::seeded(6));
        let css = render_stylesheet(&entries);
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("\n.dark {\n"));
        assert_eq!(css.matches("--chart-bg:").count(), 2);
        assert_eq!(css.lines().filter(|l| l.starts_with("  --")).count(), 2 * Role::COUNT);
    }

    #[test]
    fn feature_roles_get_their_own_section() {
        let css = render_block(
            ".dark",
            &[
                entry("--ring", Hsl::new(0.0, 0.0, 100.0)),
                entry("--unlocked", Hsl::new(10.0, 20.0, 3.0)),
                entry("--long", Hsl::new(150.0, 60.0, 40.0)),
            ],
        );
        assert_eq!(
            css,
            ".dark {\n  --ring: 0 0% 100%;\n\n  /* Trading UI */\n  --unlocked: 10 20% 3%;\n  --long: 150 60% 40%;\n}\n"
        );
    }

    #[test]
    fn generated_block_has_one_feature_section() {
        let entries = generate_entries(None, &mut RngSampler::seeded(6));
        let css = render_block(":root", &entries.light);
        assert_eq!(css.matches("/* Trading UI */").count(), 1);
    }
}
