// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Displays a severity-colored title and a detail message inside a bordered
//! panel. The gallery has no recoverable failures, so the component is
//! purely informational.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents display (red)
    #[default]
    Error,
    /// Warning - display degraded but possible (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

/// Renders a centered error panel.
pub fn view<'a, Message: 'a>(
    severity: ErrorSeverity,
    title: impl Into<String>,
    message: impl Into<String>,
) -> Element<'a, Message> {
    let accent_color = severity.color();

    let heading = Text::new(title.into())
        .size(typography::SUBTITLE)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent_color),
        });

    let body = Text::new(message.into()).size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(body);

    let panel = Container::new(content)
        .padding(spacing::LG)
        .style(move |theme: &Theme| {
            let bg_color = theme.extended_palette().background.weak.color;
            container::Style {
                background: Some(iced::Background::Color(bg_color)),
                border: iced::Border {
                    color: accent_color,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                text_color: Some(theme.palette().text),
                ..Default::default()
            }
        });

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
