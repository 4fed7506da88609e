// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_mosaic::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use iced_mosaic::ui::styles::{button, container};
    use iced_mosaic::ui::theming::{AppTheme, ColorScheme, ThemeMode};
    use iced_mosaic::ui::typography::{TextRole, Typography};

    #[test]
    fn all_container_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all container styles compile and are callable
        let _ = container::pane(palette::BOX_RED)(&theme);
        let _ = container::styled_box(&theme);
        let _ = container::card(&theme);
        let _ = container::hero(&theme);
        let _ = container::emblem_ring(&theme);
        let _ = container::chrome(palette::GRAY_900, palette::WHITE)(&theme);
        let _ = button::rail(true)(&theme, iced::widget::button::Status::Active);
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::BOX_RED;
        let _ = palette::HERO_BLUE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::TINT;

        // Sizing
        let _ = sizing::STYLED_BOX;

        // Typography scale
        let _ = typography::TITLE;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }

    #[test]
    fn typography_matches_the_token_scale() {
        let table = Typography::default();

        assert_eq!(table.spec(TextRole::Title).size, typography::TITLE);
        assert_eq!(table.spec(TextRole::Subtitle).size, typography::SUBTITLE);
        assert_eq!(table.spec(TextRole::Caption).size, typography::CAPTION);

        for role in [TextRole::Title, TextRole::Subtitle, TextRole::Caption] {
            assert_eq!(table.spec(role).line_height, typography::LINE_HEIGHT);
            assert_eq!(table.spec(role).letter_spacing, typography::LETTER_SPACING);
        }
    }

    #[test]
    fn chrome_scheme_keeps_text_readable() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let contrast =
                (scheme.surface_primary.r - scheme.text_primary.r).abs();
            assert!(contrast > 0.5, "text blends into the surface");
        }
    }
}
