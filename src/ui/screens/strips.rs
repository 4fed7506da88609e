// SPDX-License-Identifier: MPL-2.0
//! Proportional strips screen.
//!
//! Equal-weight thirds, once as a column and once as a row, drawn through
//! the layout engine's canvas adapter.

use crate::layout::{Band, Slot};
use crate::ui::components::band_canvas;
use crate::ui::design_tokens::{palette, spacing};
use crate::ui::typography::{TextRole, Typography};
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub typography: &'a Typography,
}

/// A column of three equal red/green/blue strips.
fn thirds_column() -> Band {
    Band::column()
        .push(Slot::new(1.0, palette::BOX_RED))
        .push(Slot::new(1.0, palette::BOX_GREEN))
        .push(Slot::new(1.0, palette::BOX_BLUE))
}

/// The same three strips laid out horizontally.
fn thirds_row() -> Band {
    Band::row()
        .push(Slot::new(1.0, palette::BOX_RED))
        .push(Slot::new(1.0, palette::BOX_GREEN))
        .push(Slot::new(1.0, palette::BOX_BLUE))
}

/// Render the proportional strips screen.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = ctx.typography.text("Proportional strips", TextRole::Title);

    let column_demo = Column::new()
        .spacing(spacing::XS)
        .push(ctx.typography.text("Column, weights 1:1:1", TextRole::Caption))
        .push(band_canvas::view(thirds_column()));

    let row_demo = Column::new()
        .spacing(spacing::XS)
        .push(ctx.typography.text("Row, weights 1:1:1", TextRole::Caption))
        .push(band_canvas::view(thirds_row()));

    let demos = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(column_demo).width(Length::FillPortion(1)))
        .push(Container::new(row_demo).width(Length::FillPortion(1)));

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(title)
        .push(demos)
        .into()
}
