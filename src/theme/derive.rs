//! Light → dark derivation rules and random theme generation.

use rand::Rng;

use crate::color::{brighten_flat, contrast_text_color, darken, lighten, HexColor};

use super::presets::DEFAULT_LIGHT;
use super::tokens::{ColorToken, ThemeMapping, TokenKey};

/// Flat per-channel boost applied to random base colors to get their containers.
const RANDOM_CONTAINER_BOOST: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DarkRule {
    Lighten(f64),
    Darken(f64),
    Fixed(HexColor),
}

impl DarkRule {
    pub fn apply(self, light: HexColor) -> HexColor {
        match self {
            Self::Lighten(percent) => lighten(light, percent),
            Self::Darken(percent) => darken(light, percent),
            Self::Fixed(color) => color,
        }
    }
}

pub const fn dark_rule(token: ColorToken) -> DarkRule {
    use ColorToken::*;
    use DarkRule::*;

    match token {
        Primary => Lighten(60.0),
        OnPrimary => Darken(40.0),
        PrimaryContainer => Darken(20.0),
        OnPrimaryContainer => Lighten(80.0),
        Secondary => Lighten(40.0),
        OnSecondary => Darken(50.0),
        SecondaryContainer => Darken(30.0),
        OnSecondaryContainer => Lighten(70.0),
        Tertiary => Lighten(50.0),
        OnTertiary => Darken(40.0),
        TertiaryContainer => Darken(20.0),
        OnTertiaryContainer => Lighten(80.0),
        Error => Fixed(HexColor::from_u32(0xFFB4AB)),
        OnError => Fixed(HexColor::from_u32(0x690005)),
        ErrorContainer => Fixed(HexColor::from_u32(0x93000A)),
        OnErrorContainer => Fixed(HexColor::from_u32(0xFFDAD6)),
        Surface => Fixed(HexColor::from_u32(0x000000)),
        OnSurface => Fixed(HexColor::from_u32(0xE6E1E5)),
        SurfaceVariant => Fixed(HexColor::from_u32(0x1A1A1A)),
        OnSurfaceVariant => Fixed(HexColor::from_u32(0xCAC4D0)),
        Background => Fixed(HexColor::from_u32(0x000000)),
        OnBackground => Fixed(HexColor::from_u32(0xE6E1E5)),
        Outline => Fixed(HexColor::from_u32(0x938F99)),
        OutlineVariant => Fixed(HexColor::from_u32(0x49454F)),
    }
}

/// Dark counterpart of a light color. Tokens without a rule pass through unchanged.
pub fn derive_dark(key: &TokenKey, light: HexColor) -> HexColor {
    match key.known() {
        Some(token) => dark_rule(token).apply(light),
        None => light,
    }
}

pub fn derive_dark_mapping(light: &ThemeMapping) -> ThemeMapping {
    light
        .iter()
        .map(|(key, color)| (key.clone(), derive_dark(key, color)))
        .collect()
}

/// Random primary/secondary/tertiary families over the default preset's
/// error, surface, background and outline colors.
pub fn random_theme<R: Rng + ?Sized>(rng: &mut R) -> ThemeMapping {
    let mut mapping = ThemeMapping::from_table(&DEFAULT_LIGHT);

    let families = [
        [
            ColorToken::Primary,
            ColorToken::OnPrimary,
            ColorToken::PrimaryContainer,
            ColorToken::OnPrimaryContainer,
        ],
        [
            ColorToken::Secondary,
            ColorToken::OnSecondary,
            ColorToken::SecondaryContainer,
            ColorToken::OnSecondaryContainer,
        ],
        [
            ColorToken::Tertiary,
            ColorToken::OnTertiary,
            ColorToken::TertiaryContainer,
            ColorToken::OnTertiaryContainer,
        ],
    ];

    for [base, on_base, container, on_container] in families {
        let color = HexColor::from_u32(rng.random_range(0..=0xFF_FFFF));
        let container_color = brighten_flat(color, RANDOM_CONTAINER_BOOST);

        mapping.set(base.into(), color);
        mapping.set(on_base.into(), contrast_text_color(color));
        mapping.set(container.into(), container_color);
        mapping.set(on_container.into(), contrast_text_color(container_color));
    }

    mapping
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::theme::presets::Preset;

    fn hex(value: &str) -> HexColor {
        HexColor::parse(value).expect("test color should parse")
    }

    #[test]
    fn accent_tokens_follow_lighten_and_darken_rules() {
        let light = hex("#6750A4");
        assert_eq!(
            derive_dark(&ColorToken::Primary.into(), light),
            lighten(light, 60.0)
        );
        assert_eq!(
            derive_dark(&ColorToken::OnSecondary.into(), light),
            darken(light, 50.0)
        );
        assert_eq!(
            derive_dark(&ColorToken::OnTertiaryContainer.into(), light),
            lighten(light, 80.0)
        );
    }

    #[test]
    fn neutral_tokens_use_fixed_dark_constants() {
        for light in [hex("#FFFFFF"), hex("#123456")] {
            assert_eq!(
                derive_dark(&ColorToken::Surface.into(), light),
                hex("#000000")
            );
            assert_eq!(
                derive_dark(&ColorToken::Error.into(), light),
                hex("#FFB4AB")
            );
            assert_eq!(
                derive_dark(&ColorToken::Outline.into(), light),
                hex("#938F99")
            );
        }
    }

    #[test]
    fn custom_tokens_pass_through() {
        let key = TokenKey::from_name("inverse-primary");
        assert_eq!(derive_dark(&key, hex("#ABCDEF")), hex("#ABCDEF"));
    }

    #[test]
    fn derived_mapping_covers_every_light_token() {
        let light = Preset::Green.mapping();
        let dark = derive_dark_mapping(&light);
        assert!(dark.covers_all_tokens());
        assert_eq!(dark.iter().count(), light.iter().count());
    }

    #[test]
    fn random_theme_uses_black_or_white_on_colors_and_default_neutrals() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let mapping = random_theme(&mut rng);
            assert!(mapping.covers_all_tokens());

            for on_token in [
                ColorToken::OnPrimary,
                ColorToken::OnPrimaryContainer,
                ColorToken::OnSecondary,
                ColorToken::OnSecondaryContainer,
                ColorToken::OnTertiary,
                ColorToken::OnTertiaryContainer,
            ] {
                let color = mapping.token(on_token).unwrap();
                assert!(color == HexColor::BLACK || color == HexColor::WHITE);
            }

            let defaults = Preset::Default.mapping();
            for neutral in [
                ColorToken::Error,
                ColorToken::Surface,
                ColorToken::Background,
                ColorToken::OutlineVariant,
            ] {
                assert_eq!(mapping.token(neutral), defaults.token(neutral));
            }
        }
    }

    #[test]
    fn random_containers_are_flat_boosts_of_their_base() {
        let mut rng = StdRng::seed_from_u64(42);
        let mapping = random_theme(&mut rng);
        let primary = mapping.token(ColorToken::Primary).unwrap();
        assert_eq!(
            mapping.token(ColorToken::PrimaryContainer),
            Some(brighten_flat(primary, 40))
        );
    }
}
