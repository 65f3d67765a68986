//! Flattening palettes into the `(title, variable, color)` records the
//! editor lists and persists.

use serde::{Deserialize, Serialize};
use st_color::Hsl;

use crate::palette::{ModePalette, ThemePair, generate};
use crate::sampler::Sampler;
use crate::scheme::Scheme;

/// One editable color variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Human-readable label, e.g. `"Primary Foreground"`.
    pub title: String,
    /// CSS custom property, e.g. `"--primary-foreground"`.
    pub variable: String,
    pub color: Hsl,
}

/// Entries for both schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeEntries {
    pub light: Vec<ThemeEntry>,
    pub dark: Vec<ThemeEntry>,
}

impl ThemeEntries {
    #[must_use]
    pub fn get(&self, scheme: Scheme) -> &[ThemeEntry] {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }
}

impl ModePalette {
    /// One entry per role, in display order.
    #[must_use]
    pub fn to_entries(&self) -> Vec<ThemeEntry> {
        self.iter()
            .map(|(role, color)| ThemeEntry {
                title: role.title().to_string(),
                variable: role.variable().to_string(),
                color,
            })
            .collect()
    }
}

impl ThemePair {
    #[must_use]
    pub fn to_entries(&self) -> ThemeEntries {
        ThemeEntries {
            light: self.light.to_entries(),
            dark: self.dark.to_entries(),
        }
    }
}

/// [`generate`] and flatten in one step.
pub fn generate_entries<S: Sampler + ?Sized>(primary: Option<Hsl>, sampler: &mut S) -> ThemeEntries {
    generate(primary, sampler).to_entries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::sampler::RngSampler;
    use pretty_assertions::assert_eq;

    #[test]
    fn entries_follow_table_order() {
        let entries = generate_entries(Some(Hsl::new(210.0, 80.0, 45.0)), &mut RngSampler::seeded(4));
        for scheme in Scheme::ALL {
            let list = entries.get(scheme);
            assert_eq!(list.len(), Role::COUNT);
            for (entry, role) in list.iter().zip(Role::ALL) {
                assert_eq!(entry.variable, role.variable());
                assert_eq!(entry.title, role.title());
            }
        }
    }

    #[test]
    fn first_entry_is_primary() {
        let entries = generate_entries(Some(Hsl::new(210.0, 80.0, 45.0)), &mut RngSampler::seeded(4));
        let first = &entries.light[0];
        assert_eq!(first.title, "Primary");
        assert_eq!(first.variable, "--primary");
        assert_eq!(first.color, Hsl::new(210.0, 80.0, 45.0));
    }

    #[test]
    fn flattening_twice_is_identical() {
        let theme = generate(None, &mut RngSampler::seeded(8));
        assert_eq!(theme.to_entries(), theme.to_entries());
    }

    #[test]
    fn entry_json_shape() {
        let entry = ThemeEntry {
            title: "Ring".into(),
            variable: "--ring".into(),
            color: Hsl::new(1.0, 2.0, 3.0),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "title": "Ring",
                "variable": "--ring",
                "color": { "h": 1.0, "s": 2.0, "l": 3.0 }
            })
        );
    }
}
