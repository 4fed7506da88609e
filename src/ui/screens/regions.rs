// SPDX-License-Identifier: MPL-2.0
//! Fractional regions screen.
//!
//! A 0.2 / 0.6 / 0.2 vertical split, once with washed-out tints and once
//! with labeled opaque regions, both resolved by the layout engine.

use crate::layout::{Alignment, Band, Slot};
use crate::ui::components::band_canvas;
use crate::ui::design_tokens::{opacity, palette, spacing};
use crate::ui::typography::{TextRole, Typography};
use iced::widget::{Column, Container, Row};
use iced::{Color, Element, Length};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub typography: &'a Typography,
}

fn tint(color: Color) -> Color {
    Color {
        a: opacity::TINT,
        ..color
    }
}

/// Header/body/footer split with washed-out fills.
fn tinted_regions() -> Band {
    Band::column()
        .push(Slot::new(0.2, tint(palette::BOX_BLUE)))
        .push(Slot::new(0.6, tint(palette::BOX_GREEN)))
        .push(Slot::new(0.2, tint(palette::BOX_RED)))
}

/// The same split with opaque fills and centered labels.
fn labeled_regions() -> Band {
    Band::column()
        .push(
            Slot::new(0.2, palette::BOX_BLUE)
                .label("Header")
                .align(Alignment::Center),
        )
        .push(
            Slot::new(0.6, palette::BOX_GREEN)
                .label("Body")
                .align(Alignment::Center),
        )
        .push(
            Slot::new(0.2, palette::BOX_RED)
                .label("Footer")
                .align(Alignment::Center),
        )
}

/// Render the fractional regions screen.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx.typography.text("Fractional regions", TextRole::Title);

    let tinted_demo = Column::new()
        .spacing(spacing::XS)
        .push(ctx.typography.text("Tinted, weights 0.2:0.6:0.2", TextRole::Caption))
        .push(band_canvas::view(tinted_regions()));

    let labeled_demo = Column::new()
        .spacing(spacing::XS)
        .push(ctx.typography.text("Labeled, weights 0.2:0.6:0.2", TextRole::Caption))
        .push(band_canvas::view(labeled_regions()));

    let demos = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(tinted_demo).width(Length::FillPortion(1)))
        .push(Container::new(labeled_demo).width(Length::FillPortion(1)));

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title)
        .push(demos)
        .into()
}
