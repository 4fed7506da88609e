// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors, including the fixed demo-box fills
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale for the text roles
//! - **Border**: border width scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Fixed demo-box fills. These stay the same in light and dark mode; the
    // screens are about proportions, not theming.
    pub const BOX_RED: Color = Color::from_rgb(1.0, 0.0, 0.0);
    pub const BOX_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.0);
    pub const BOX_BLUE: Color = Color::from_rgb(0.0, 0.0, 1.0);
    pub const BOX_CYAN: Color = Color::from_rgb(0.0, 1.0, 1.0);
    pub const BOX_DARK: Color = Color::from_rgb(0.27, 0.27, 0.27);

    // Gradient stops for the hero card (blue to cyan).
    pub const HERO_BLUE: Color = Color::from_rgb(0.129, 0.588, 0.953);
    pub const HERO_CYAN: Color = Color::from_rgb(0.0, 0.737, 0.831);

    // Brand colors (blue scale) for interactive chrome
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Washed-out tint used by the fraction-layout demo fills.
    pub const TINT: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Emblem size in the list-item row.
    pub const EMBLEM_SM: f32 = 50.0;
    /// Emblem size in the hero card.
    pub const EMBLEM_LG: f32 = 80.0;

    /// Side length of the square styled boxes.
    pub const STYLED_BOX: f32 = 150.0;
    /// Height of the full-width hero card.
    pub const HERO_HEIGHT: f32 = 200.0;

    /// Fixed width of the list-item demo row.
    pub const LIST_ITEM_WIDTH: f32 = 200.0;
    /// Column width reserved for list-item text.
    pub const LIST_TEXT_WIDTH: f32 = 100.0;

    /// Width of the navigation rail.
    pub const RAIL_WIDTH: f32 = 168.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the three text roles plus the box labels.
    //!
    //! Title/subtitle/caption mirror the demo's type ramp; both share a
    //! single absolute line height and letter spacing.

    /// Title role - list-item headings, screen titles.
    pub const TITLE: f32 = 22.0;

    /// Subtitle role - emphasized body text.
    pub const SUBTITLE: f32 = 18.0;

    /// Caption role - descriptions, trailing links.
    pub const CAPTION: f32 = 16.0;

    /// Labels painted inside large demo boxes.
    pub const BOX_LABEL: f32 = 20.0;

    /// Labels painted inside nested dashboard panes.
    pub const PANE_LABEL: f32 = 18.0;

    /// Absolute line height shared by all roles.
    pub const LINE_HEIGHT: f32 = 26.0;

    /// Letter spacing shared by all roles.
    pub const LETTER_SPACING: f32 = 2.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - subtle separators.
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - styled-box outline.
    pub const WIDTH_MD: f32 = 2.0;

    /// Heavy border - emblem ring in the hero card.
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT > 0.0 && opacity::TINT < opacity::OVERLAY_MEDIUM);

    // Sizing validation
    assert!(sizing::EMBLEM_LG > sizing::EMBLEM_SM);
    assert!(sizing::LIST_ITEM_WIDTH > sizing::LIST_TEXT_WIDTH);

    // Typography validation
    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::SUBTITLE > typography::CAPTION);
    assert!(typography::LINE_HEIGHT >= typography::TITLE);

    // Border validation
    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn demo_fills_are_fully_saturated() {
        assert_eq!(palette::BOX_RED.r, 1.0);
        assert_eq!(palette::BOX_GREEN.g, 1.0);
        assert_eq!(palette::BOX_BLUE.b, 1.0);
    }
}
