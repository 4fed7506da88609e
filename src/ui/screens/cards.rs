// SPDX-License-Identifier: MPL-2.0
//! Styled boxes screen.
//!
//! A square outlined box, its card variant, and the full-width gradient
//! hero with the ringed emblem.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::typography::{TextRole, Typography};
use iced::widget::image::Handle;
use iced::widget::{Column, Container, Image, Row, Space};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub typography: &'a Typography,
    pub emblem: &'a Handle,
}

/// Render the styled boxes screen.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx.typography.text("Styled boxes", TextRole::Title);

    let simple_box = Container::new(ctx.typography.text("Simple box", TextRole::Caption))
        .width(Length::Fixed(sizing::STYLED_BOX))
        .height(Length::Fixed(sizing::STYLED_BOX))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::styled_box);

    let card_box = Container::new(ctx.typography.text("Card box", TextRole::Caption))
        .width(Length::Fixed(sizing::STYLED_BOX))
        .height(Length::Fixed(sizing::STYLED_BOX))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card);

    let boxes = Row::new().spacing(spacing::LG).push(simple_box).push(card_box);

    let emblem = Container::new(
        Image::new(ctx.emblem.clone())
            .width(Length::Fixed(sizing::EMBLEM_LG))
            .height(Length::Fixed(sizing::EMBLEM_LG)),
    )
    .padding(spacing::XXS)
    .style(styles::container::emblem_ring);

    let hero_content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(emblem)
        .push(Space::new().height(spacing::XS))
        .push(ctx.typography.text("Hello, Iced!", TextRole::Subtitle));

    let hero = Container::new(hero_content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::MD)
        .style(styles::container::hero);

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title)
        .push(boxes)
        .push(hero)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_view_renders() {
        let typography = Typography::default();
        let emblem = Handle::from_bytes(Vec::new());
        let _element: Element<'_, ()> = view(ViewContext {
            typography: &typography,
            emblem: &emblem,
        });
    }
}
