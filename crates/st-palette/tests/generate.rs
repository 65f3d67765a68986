//! End-to-end properties of theme generation.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use st_palette::contrast::contrasting_foreground;
use st_palette::css::render_stylesheet;
use st_palette::store::{parse_entries, to_json};
use st_palette::{
    Color, GenerateOptions, HarmonyMode, Hsl, ModePalette, Role, RngSampler, Scheme, generate,
    generate_entries, generate_with, title_for_variable,
};

fn seed_strategy() -> impl Strategy<Value = Hsl> {
    (0u16..360, 0u8..=100, 0u8..=100)
        .prop_map(|(h, s, l)| Hsl::new(f64::from(h), f64::from(s), f64::from(l)))
}

fn assert_in_range(palette: &ModePalette) -> Result<(), TestCaseError> {
    for (role, color) in palette.iter() {
        prop_assert!(color.in_range(), "{role} out of range: {color:?}");
    }
    Ok(())
}

proptest! {
    #[test]
    fn every_role_is_present_and_in_range(seed in seed_strategy(), rng in any::<u64>()) {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        for scheme in Scheme::ALL {
            let palette = theme.get(scheme);
            prop_assert_eq!(palette.iter().count(), Role::COUNT);
            assert_in_range(palette)?;
        }
    }

    #[test]
    fn random_primaries_are_in_range(rng in any::<u64>()) {
        let theme = generate(None, &mut RngSampler::seeded(rng));
        assert_in_range(&theme.light)?;
        assert_in_range(&theme.dark)?;
        prop_assert!((10.0..=90.0).contains(&theme.light.primary.l));
    }

    #[test]
    fn aliases_hold_in_both_schemes(seed in seed_strategy(), rng in any::<u64>()) {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        for p in [&theme.light, &theme.dark] {
            prop_assert_eq!(p.ring, p.primary);
            prop_assert_eq!(p.unlocked, p.background);
            prop_assert_eq!(p.chart_bg, p.background);
            prop_assert_eq!(p.input, p.border);
            prop_assert_eq!(p.muted_foreground.h, p.muted.h);
        }
        prop_assert_eq!(theme.light.primary, theme.dark.primary);
    }

    #[test]
    fn primary_foreground_comes_from_the_contrast_search(seed in seed_strategy(), rng in any::<u64>()) {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        let expected = contrasting_foreground(Color::from_hsl(seed));
        prop_assert_eq!(theme.light.primary_foreground, expected);
        prop_assert_eq!(theme.dark.primary_foreground, expected);
    }

    #[test]
    fn backgrounds_sit_at_the_extremes(seed in seed_strategy(), rng in any::<u64>()) {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        prop_assert!(theme.light.background.l >= 98.0);
        prop_assert!(theme.dark.background.l <= 4.0);
        prop_assert!(theme.light.border.l < theme.light.background.l);
        prop_assert!((10.0..=15.0).contains(&theme.dark.border.l));
    }

    #[test]
    fn drawn_roles_stay_in_their_bands(seed in seed_strategy(), rng in any::<u64>()) {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        let (light, dark) = (&theme.light, &theme.dark);

        for p in [light, dark] {
            prop_assert!((0.0..=22.0).contains(&p.destructive.h), "{:?}", p.destructive);
            prop_assert!((80.0..=100.0).contains(&p.destructive.s), "{:?}", p.destructive);
            prop_assert!((5.0..=40.0).contains(&p.muted.s), "{:?}", p.muted);
            prop_assert!((0.0..=15.0).contains(&p.muted_foreground.s), "{:?}", p.muted_foreground);
            prop_assert!((2.0..=15.0).contains(&p.border.s), "{:?}", p.border);
        }
        prop_assert!((20.0..=45.0).contains(&light.destructive.l));
        prop_assert!((45.0..=60.0).contains(&dark.destructive.l));
        prop_assert_eq!((dark.destructive.h, dark.destructive.s), (light.destructive.h, light.destructive.s));

        // Light adds the muted deviations, dark subtracts them.
        prop_assert!((85.0..=95.0).contains(&light.muted.l));
        prop_assert!((5.0..=15.0).contains(&dark.muted.l));
        prop_assert!((25.0..=40.0).contains(&light.muted_foreground.l));
        prop_assert!((60.0..=75.0).contains(&dark.muted_foreground.l));
        prop_assert_eq!(light.muted.l - 85.0, 15.0 - dark.muted.l);
        prop_assert_eq!(light.muted_foreground.l - 25.0, 75.0 - dark.muted_foreground.l);
    }

    #[test]
    fn serialization_is_stable(rng in any::<u64>()) {
        let theme = generate(None, &mut RngSampler::seeded(rng));
        let first = theme.to_entries();
        prop_assert_eq!(&first, &theme.to_entries());

        let json = to_json(&first.light).unwrap();
        prop_assert_eq!(parse_entries(&json).unwrap(), first.light);
    }
}

#[test]
fn seeded_blue_theme() {
    let seed = Hsl::new(210.0, 80.0, 45.0);
    for rng in 0..16 {
        let theme = generate(Some(seed), &mut RngSampler::seeded(rng));
        assert_eq!(theme.light.primary, seed);
        assert_eq!(theme.dark.primary, seed);
        assert_eq!(theme.light.background.h, 210.0);
        assert_eq!(theme.dark.background.h, 210.0);
    }
}

#[test]
fn every_harmony_mode_generates() {
    let seed = Hsl::new(330.0, 65.0, 55.0);
    for mode in HarmonyMode::ALL {
        let options = GenerateOptions { primary: Some(seed), harmony: Some(mode) };
        let theme = generate_with(options, &mut RngSampler::seeded(21));
        for scheme in Scheme::ALL {
            assert!(theme.get(scheme).iter().all(|(_, c)| c.in_range()), "{mode} {scheme}");
        }
    }
}

#[test]
fn entries_carry_registered_titles() {
    let entries = generate_entries(None, &mut RngSampler::seeded(99));
    for entry in entries.light.iter().chain(&entries.dark) {
        assert_eq!(title_for_variable(&entry.variable), Some(entry.title.as_str()));
    }
    assert_eq!(title_for_variable("--primary-foreground"), Some("Primary Foreground"));
    assert_eq!(title_for_variable("--not-a-role"), None);
}

#[test]
fn stylesheet_lists_every_variable() {
    let entries = generate_entries(Some(Hsl::new(20.0, 90.0, 50.0)), &mut RngSampler::seeded(1));
    let css = render_stylesheet(&entries);
    for role in Role::ALL {
        assert_eq!(css.matches(&format!("  {}:", role.variable())).count(), 2, "{role}");
    }
}
