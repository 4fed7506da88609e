// SPDX-License-Identifier: MPL-2.0
//! Text roles and their font specs.
//!
//! Maps each role to a bundled font family, size, line height, and letter
//! spacing. The [`Typography`] value is built once at startup and passed by
//! reference into every view context; Iced applies family, size, and line
//! height, while letter spacing stays part of the spec for renderers that
//! support it.

use crate::ui::design_tokens::typography as scale;
use iced::widget::text::{self, IntoFragment};
use iced::widget::Text;
use iced::{Font, Pixels};

/// Family name of the bundled serif face (title role).
pub const TITLE_FAMILY: Font = Font::with_name("DejaVu Serif");
/// Family name of the bundled sans face (subtitle role).
pub const SUBTITLE_FAMILY: Font = Font::with_name("DejaVu Sans");
/// Family name of the bundled mono face (caption role).
pub const CAPTION_FAMILY: Font = Font::with_name("DejaVu Sans Mono");

/// Style role for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
    Caption,
}

/// Font family, size, line height, and letter spacing for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSpec {
    pub font: Font,
    pub size: f32,
    pub line_height: f32,
    pub letter_spacing: f32,
}

/// The role-to-spec mapping. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    title: TextSpec,
    subtitle: TextSpec,
    caption: TextSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: TextSpec {
                font: TITLE_FAMILY,
                size: scale::TITLE,
                line_height: scale::LINE_HEIGHT,
                letter_spacing: scale::LETTER_SPACING,
            },
            subtitle: TextSpec {
                font: SUBTITLE_FAMILY,
                size: scale::SUBTITLE,
                line_height: scale::LINE_HEIGHT,
                letter_spacing: scale::LETTER_SPACING,
            },
            caption: TextSpec {
                font: CAPTION_FAMILY,
                size: scale::CAPTION,
                line_height: scale::LINE_HEIGHT,
                letter_spacing: scale::LETTER_SPACING,
            },
        }
    }
}

impl Typography {
    /// The spec for a role.
    pub fn spec(&self, role: TextRole) -> &TextSpec {
        match role {
            TextRole::Title => &self.title,
            TextRole::Subtitle => &self.subtitle,
            TextRole::Caption => &self.caption,
        }
    }

    /// Builds a text widget styled for the given role.
    pub fn text<'a>(&self, content: impl IntoFragment<'a>, role: TextRole) -> Text<'a> {
        let spec = self.spec(role);
        iced::widget::text(content)
            .font(spec.font)
            .size(spec.size)
            .line_height(text::LineHeight::Absolute(Pixels(spec.line_height)))
    }
}
