// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::gradient;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};

/// Flat fill for a demo pane, no border or radius.
pub fn pane(fill: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        ..Default::default()
    }
}

/// The square styled box: light fill, dark outline, rounded corners,
/// soft shadow.
pub fn styled_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            color: palette::BOX_DARK,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Card variant of the styled box: no outline, heavier elevation.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(palette::GRAY_900),
        ..Default::default()
    }
}

/// Full-width hero surface with a blue-to-cyan linear gradient.
pub fn hero(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, palette::HERO_BLUE)
        .add_stop(1.0, palette::HERO_CYAN);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Circular white ring framing the hero emblem.
pub fn emblem_ring(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Chrome surface behind every screen, colored by the resolved scheme.
pub fn chrome(surface: Color, text: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        ..Default::default()
    }
}
