// SPDX-License-Identifier: MPL-2.0
//! List item screen.
//!
//! A single fixed-width list row: the emblem, then a column of title,
//! description, and a trailing "View more" caption.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::typography::{TextRole, Typography};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Image, Row};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub typography: &'a Typography,
    pub emblem: &'a Handle,
}

/// Render the list item screen.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let emblem = Image::new(ctx.emblem.clone())
        .width(Length::Fixed(sizing::EMBLEM_SM))
        .height(Length::Fixed(sizing::EMBLEM_SM));

    let text_column = Column::new()
        .width(Length::Fill)
        .push(
            ctx.typography
                .text("Title", TextRole::Title)
                .width(Length::Fixed(sizing::LIST_TEXT_WIDTH)),
        )
        .push(
            ctx.typography
                .text("Description", TextRole::Caption)
                .width(Length::Fixed(sizing::LIST_TEXT_WIDTH)),
        )
        .push(
            Container::new(ctx.typography.text("View more", TextRole::Caption))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let item = Row::new()
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::LIST_ITEM_WIDTH))
        .align_y(alignment::Vertical::Center)
        .push(emblem)
        .push(text_column);

    Container::new(item)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_list_view_renders() {
        let typography = Typography::default();
        let emblem = Handle::from_bytes(Vec::new());
        let _element: Element<'_, ()> = view(ViewContext {
            typography: &typography,
            emblem: &emblem,
        });
    }
}
