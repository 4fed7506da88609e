// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen.
//!
//! The nested split: header over a sidebar/content pair over a footer,
//! weighted 15 / 75 / 10 vertically and 25 / 75 across the middle band.
//! Nesting is one level deeper than the engine's single-axis model, so
//! this screen uses the toolkit's own weighted flex slots.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::typography::{TextRole, Typography};
use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Length};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub typography: &'a Typography,
}

/// A filled pane with a centered white label.
fn pane<'a, Message: 'a>(label: &'a str, fill: Color, size: f32) -> Container<'a, Message> {
    let style = move |theme: &iced::Theme| {
        let mut style = styles::container::pane(fill)(theme);
        style.text_color = Some(palette::WHITE);
        style
    };

    Container::new(Text::new(label).size(size))
        .style(style)
        .center(Length::Fill)
}

/// Render the dashboard screen.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx.typography.text("Dashboard split", TextRole::Title);

    let header = pane("Header", palette::BOX_DARK, typography::BOX_LABEL)
        .width(Length::Fill)
        .height(Length::FillPortion(15));

    let sidebar = pane("Sidebar", palette::BOX_BLUE, typography::PANE_LABEL)
        .width(Length::FillPortion(25))
        .height(Length::Fill);

    let content = pane("Content", palette::BOX_GREEN, typography::PANE_LABEL)
        .width(Length::FillPortion(75))
        .height(Length::Fill);

    let middle = Row::new()
        .push(sidebar)
        .push(content)
        .width(Length::Fill)
        .height(Length::FillPortion(75));

    let footer = pane("Footer", palette::BOX_RED, typography::PANE_LABEL)
        .width(Length::Fill)
        .height(Length::FillPortion(10));

    let split = Column::new().push(header).push(middle).push(footer);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title)
        .push(split)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_view_renders() {
        let typography = Typography::default();
        let _element: Element<'_, ()> = view(ViewContext {
            typography: &typography,
        });
    }
}
