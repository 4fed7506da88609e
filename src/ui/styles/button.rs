// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the navigation rail entries; the active screen gets the brand
/// fill.
pub fn rail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();

        if selected {
            return button::Style {
                background: Some(Background::Color(palette::PRIMARY_500)),
                text_color: palette::WHITE,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::SM,
                snap: true,
            };
        }

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette_ext.background.weak.color)),
                text_color: palette_ext.background.base.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            },
            _ => button::Style {
                background: None,
                text_color: palette_ext.background.base.text,
                border: Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_rail_entry_uses_brand_fill() {
        let style = rail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn idle_rail_entry_is_transparent() {
        let style = rail(false)(&Theme::Dark, button::Status::Active);
        assert!(style.background.is_none());
    }
}
