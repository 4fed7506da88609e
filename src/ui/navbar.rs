// SPDX-License-Identifier: MPL-2.0
//! Navigation rail for the demo gallery.
//!
//! A fixed-width column of entries, one per demo screen. Selecting an entry
//! is the only navigation the application has.

use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::typography::{TextRole, Typography};
use iced::widget::{button, container, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Contextual data needed to render the rail.
pub struct ViewContext<'a> {
    pub active: Screen,
    pub scheme: &'a ColorScheme,
    pub typography: &'a Typography,
}

/// Messages emitted by the rail.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Selected(Screen),
}

/// Process a rail message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Select(screen) => Event::Selected(screen),
    }
}

/// Render the navigation rail.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = ctx.typography.text("Mosaic", TextRole::Title);

    let mut entries = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Container::new(heading).padding(spacing::SM));

    for screen in Screen::ALL {
        let selected = screen == ctx.active;
        let entry = button(Text::new(screen.label()).size(14))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::rail(selected))
            .on_press(Message::Select(screen));
        entries = entries.push(entry);
    }

    let surface = ctx.scheme.surface_secondary;
    let text_color = ctx.scheme.text_primary;

    Container::new(entries)
        .width(Length::Fixed(sizing::RAIL_WIDTH))
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            text_color: Some(text_color),
            ..Default::default()
        })
        .into()
}
