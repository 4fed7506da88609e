// SPDX-License-Identifier: MPL-2.0
//! Canvas adapter for weighted bands.
//!
//! Implements the layout engine's `Surface` seam on top of an Iced canvas
//! frame, so a [`Band`] can be painted without the engine knowing anything
//! about Iced. Bands are validated up front; a degenerate band never
//! reaches the draw path and is routed to the error display instead.

use crate::layout::{Alignment, Band, InvalidLayoutError, ResolvedLabel, Surface};
use crate::ui::components::error_display::{self, ErrorSeverity};
use crate::ui::design_tokens::{palette, typography};
use iced::widget::text as text_widget;
use iced::widget::{canvas, Canvas};
use iced::{alignment, mouse, Color, Element, Font, Length, Point, Rectangle, Size, Theme};

/// A validated band ready to draw on a canvas.
#[derive(Debug, Clone)]
pub struct BandCanvas {
    band: Band,
    label_font: Font,
    label_size: f32,
    label_color: Color,
}

impl BandCanvas {
    /// Wraps a band, rejecting degenerate weight sequences up front.
    pub fn new(band: Band) -> Result<Self, InvalidLayoutError> {
        band.validate()?;
        Ok(Self {
            band,
            label_font: Font::DEFAULT,
            label_size: typography::BOX_LABEL,
            label_color: palette::WHITE,
        })
    }

    /// Overrides the font used for slot labels.
    #[must_use]
    pub fn label_font(mut self, font: Font) -> Self {
        self.label_font = font;
        self
    }
}

struct FrameSurface<'a> {
    frame: &'a mut canvas::Frame,
    font: Font,
    size: f32,
    color: Color,
}

impl Surface for FrameSurface<'_> {
    fn fill_rect(&mut self, bounds: Rectangle, fill: Color) {
        let path = canvas::Path::rectangle(
            Point::new(bounds.x, bounds.y),
            Size::new(bounds.width, bounds.height),
        );
        self.frame.fill(&path, fill);
    }

    fn place_label(&mut self, label: &ResolvedLabel) {
        let (align_x, align_y) = match label.alignment {
            Alignment::Start => (text_widget::Alignment::Left, alignment::Vertical::Top),
            Alignment::Center => (text_widget::Alignment::Center, alignment::Vertical::Center),
            Alignment::End => (text_widget::Alignment::Right, alignment::Vertical::Bottom),
            Alignment::CenterVertically => {
                (text_widget::Alignment::Left, alignment::Vertical::Center)
            }
        };

        self.frame.fill_text(canvas::Text {
            content: label.content.clone(),
            position: label.anchor,
            color: self.color,
            size: self.size.into(),
            font: self.font,
            align_x,
            align_y,
            ..canvas::Text::default()
        });
    }
}

impl<Message> canvas::Program<Message> for BandCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let mut surface = FrameSurface {
            frame: &mut frame,
            font: self.label_font,
            size: self.label_size,
            color: self.label_color,
        };

        // Weights were validated in `new`, so rendering cannot fail.
        let _ = self.band.render(Rectangle::with_size(bounds.size()), &mut surface);

        vec![frame.into_geometry()]
    }
}

/// Wraps a band in a fill-sized canvas, or an error panel if the band's
/// weights are degenerate.
pub fn view<'a, Message: 'a>(band: Band) -> Element<'a, Message> {
    match BandCanvas::new(band) {
        Ok(program) => Canvas::new(program.label_font(crate::ui::typography::SUBTITLE_FAMILY))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Err(err) => error_display::view(
            ErrorSeverity::Error,
            "Degenerate layout",
            err.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Slot;

    #[test]
    fn valid_band_is_accepted() {
        let band = Band::row()
            .push(Slot::new(1.0, palette::BOX_RED))
            .push(Slot::new(1.0, palette::BOX_GREEN));
        assert!(BandCanvas::new(band).is_ok());
    }

    #[test]
    fn degenerate_band_is_rejected() {
        let band = Band::row().push(Slot::new(0.0, palette::BOX_RED));
        assert_eq!(
            BandCanvas::new(band).err(),
            Some(InvalidLayoutError::ZeroTotalWeight)
        );
    }
}
