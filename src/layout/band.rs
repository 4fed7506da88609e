// SPDX-License-Identifier: MPL-2.0
//! Band and slot descriptors plus the renderer seam.
//!
//! A [`Band`] is a one-level container: an axis and an ordered slot
//! sequence. [`Band::resolve`] turns it into absolutely positioned
//! rectangles for a given bounding box; [`Band::render`] feeds those to a
//! [`Surface`], the interface a host renderer implements to actually paint.

use iced::{Color, Point, Rectangle};

use super::partition::{partition, weight_total, InvalidLayoutError};

/// Direction along which a band lays out its slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Slots advance horizontally; the cross axis is vertical.
    Row,
    /// Slots advance vertically; the cross axis is horizontal.
    Column,
}

/// Placement of a slot's label within the slot's resolved bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Top-leading corner.
    #[default]
    Start,
    /// Both axes centered.
    Center,
    /// Bottom-trailing corner.
    End,
    /// Vertically centered, horizontally leading.
    CenterVertically,
}

impl Alignment {
    /// Anchor point for this alignment inside `bounds`.
    pub fn anchor(self, bounds: Rectangle) -> Point {
        match self {
            Alignment::Start => Point::new(bounds.x, bounds.y),
            Alignment::Center => bounds.center(),
            Alignment::End => {
                Point::new(bounds.x + bounds.width, bounds.y + bounds.height)
            }
            Alignment::CenterVertically => {
                Point::new(bounds.x, bounds.y + bounds.height / 2.0)
            }
        }
    }
}

/// A weighted, filled box inside a band.
///
/// Slots are per-render-pass values with no identity of their own; screens
/// rebuild them on every view call.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    weight: f32,
    fill: Color,
    label: Option<String>,
    alignment: Alignment,
}

impl Slot {
    /// Creates a slot with the given weight and fill color.
    pub fn new(weight: f32, fill: Color) -> Self {
        Self {
            weight,
            fill,
            label: None,
            alignment: Alignment::default(),
        }
    }

    /// Attaches a label rendered inside the slot.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the label placement.
    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The slot's weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// The slot's fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }
}

/// A slot resolved to absolute bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlot {
    pub bounds: Rectangle,
    pub fill: Color,
    pub label: Option<ResolvedLabel>,
}

/// A label with its computed anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLabel {
    pub content: String,
    pub anchor: Point,
    pub alignment: Alignment,
}

/// Host renderer interface consumed by [`Band::render`].
pub trait Surface {
    /// Paints a filled rectangle.
    fn fill_rect(&mut self, bounds: Rectangle, fill: Color);

    /// Places a label at its resolved anchor.
    fn place_label(&mut self, label: &ResolvedLabel);
}

/// An axis plus an ordered sequence of weighted slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    axis: Axis,
    slots: Vec<Slot>,
}

impl Band {
    /// Creates an empty horizontal band.
    pub fn row() -> Self {
        Self {
            axis: Axis::Row,
            slots: Vec::new(),
        }
    }

    /// Creates an empty vertical band.
    pub fn column() -> Self {
        Self {
            axis: Axis::Column,
            slots: Vec::new(),
        }
    }

    /// Appends a slot; order determines main-axis placement.
    #[must_use]
    pub fn push(mut self, slot: Slot) -> Self {
        self.slots.push(slot);
        self
    }

    /// The band's main axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The band's slots in layout order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Checks the weight sequence without resolving against bounds.
    pub fn validate(&self) -> Result<(), InvalidLayoutError> {
        let weights: Vec<f32> = self.slots.iter().map(Slot::weight).collect();
        weight_total(&weights).map(|_| ())
    }

    /// Resolves the band against `bounds`.
    ///
    /// Slots are placed in sequence order along the main axis with no gaps
    /// or overlaps and fill the full cross-axis extent. The main-axis
    /// extents sum to the container extent exactly.
    pub fn resolve(&self, bounds: Rectangle) -> Result<Vec<ResolvedSlot>, InvalidLayoutError> {
        let weights: Vec<f32> = self.slots.iter().map(Slot::weight).collect();
        let main_extent = match self.axis {
            Axis::Row => bounds.width,
            Axis::Column => bounds.height,
        };
        let extents = partition(main_extent.round().max(0.0) as u32, &weights)?;

        let mut offset = match self.axis {
            Axis::Row => bounds.x,
            Axis::Column => bounds.y,
        };

        let mut resolved = Vec::with_capacity(self.slots.len());
        for (slot, extent) in self.slots.iter().zip(extents) {
            let extent = extent as f32;
            let slot_bounds = match self.axis {
                Axis::Row => Rectangle {
                    x: offset,
                    y: bounds.y,
                    width: extent,
                    height: bounds.height,
                },
                Axis::Column => Rectangle {
                    x: bounds.x,
                    y: offset,
                    width: bounds.width,
                    height: extent,
                },
            };
            offset += extent;

            let label = slot.label.as_ref().map(|content| ResolvedLabel {
                content: content.clone(),
                anchor: slot.alignment.anchor(slot_bounds),
                alignment: slot.alignment,
            });

            resolved.push(ResolvedSlot {
                bounds: slot_bounds,
                fill: slot.fill,
                label,
            });
        }

        Ok(resolved)
    }

    /// Resolves the band and paints it onto `surface`.
    ///
    /// Pure function of (bounds, band); the only effects are the calls made
    /// on the surface.
    pub fn render<S: Surface>(
        &self,
        bounds: Rectangle,
        surface: &mut S,
    ) -> Result<(), InvalidLayoutError> {
        for slot in self.resolve(bounds)? {
            surface.fill_rect(slot.bounds, slot.fill);
            if let Some(label) = &slot.label {
                surface.place_label(label);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn bounds(width: f32, height: f32) -> Rectangle {
        Rectangle::with_size(Size::new(width, height))
    }

    #[test]
    fn column_fills_cross_axis() {
        let band = Band::column()
            .push(Slot::new(1.0, Color::WHITE))
            .push(Slot::new(1.0, Color::BLACK));
        assert_eq!(band.axis(), Axis::Column);
        let resolved = band.resolve(bounds(120.0, 300.0)).unwrap();

        for slot in &resolved {
            assert_eq!(slot.bounds.x, 0.0);
            assert_eq!(slot.bounds.width, 120.0);
        }
        assert_eq!(resolved[0].bounds.height, 150.0);
        assert_eq!(resolved[1].bounds.height, 150.0);
    }

    #[test]
    fn row_places_slots_in_sequence_without_gaps() {
        let band = Band::row()
            .push(Slot::new(0.2, Color::WHITE))
            .push(Slot::new(0.6, Color::BLACK))
            .push(Slot::new(0.2, Color::WHITE));
        let resolved = band.resolve(bounds(300.0, 50.0)).unwrap();

        assert_eq!(resolved[0].bounds.x, 0.0);
        assert_eq!(resolved[0].bounds.width, 60.0);
        assert_eq!(resolved[1].bounds.x, 60.0);
        assert_eq!(resolved[1].bounds.width, 180.0);
        assert_eq!(resolved[2].bounds.x, 240.0);
        assert_eq!(resolved[2].bounds.width, 60.0);
    }

    #[test]
    fn zero_weight_slot_occupies_no_main_extent() {
        let band = Band::row()
            .push(Slot::new(1.0, Color::WHITE))
            .push(Slot::new(0.0, Color::BLACK))
            .push(Slot::new(1.0, Color::WHITE));
        let resolved = band.resolve(bounds(301.0, 50.0)).unwrap();

        assert_eq!(resolved[1].bounds.width, 0.0);
        assert_eq!(resolved[1].bounds.height, 50.0);
        let total: f32 = resolved.iter().map(|s| s.bounds.width).sum();
        assert_eq!(total, 301.0);
    }

    #[test]
    fn all_zero_weights_error() {
        let band = Band::column()
            .push(Slot::new(0.0, Color::WHITE))
            .push(Slot::new(0.0, Color::BLACK));
        assert_eq!(
            band.resolve(bounds(100.0, 100.0)),
            Err(InvalidLayoutError::ZeroTotalWeight)
        );
        assert_eq!(band.validate(), Err(InvalidLayoutError::ZeroTotalWeight));
    }

    #[test]
    fn validate_accepts_positive_weights() {
        let band = Band::row().push(Slot::new(1.0, Color::WHITE));
        assert!(band.validate().is_ok());
    }

    #[test]
    fn labels_anchor_per_alignment() {
        let band = Band::column().push(
            Slot::new(1.0, Color::BLACK)
                .label("Header")
                .align(Alignment::Center),
        );
        let resolved = band.resolve(bounds(200.0, 100.0)).unwrap();
        let label = resolved[0].label.as_ref().unwrap();

        assert_eq!(label.content, "Header");
        assert_eq!(label.anchor, Point::new(100.0, 50.0));
    }

    #[test]
    fn alignment_anchors() {
        let rect = Rectangle {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert_eq!(Alignment::Start.anchor(rect), Point::new(10.0, 20.0));
        assert_eq!(Alignment::Center.anchor(rect), Point::new(60.0, 45.0));
        assert_eq!(Alignment::End.anchor(rect), Point::new(110.0, 70.0));
        assert_eq!(
            Alignment::CenterVertically.anchor(rect),
            Point::new(10.0, 45.0)
        );
    }

    #[test]
    fn render_emits_fills_then_labels() {
        #[derive(Default)]
        struct Recorder {
            fills: Vec<(Rectangle, Color)>,
            labels: Vec<String>,
        }

        impl Surface for Recorder {
            fn fill_rect(&mut self, bounds: Rectangle, fill: Color) {
                self.fills.push((bounds, fill));
            }

            fn place_label(&mut self, label: &ResolvedLabel) {
                self.labels.push(label.content.clone());
            }
        }

        let band = Band::column()
            .push(Slot::new(0.2, Color::BLACK).label("Header").align(Alignment::Center))
            .push(Slot::new(0.6, Color::WHITE))
            .push(Slot::new(0.2, Color::BLACK).label("Footer").align(Alignment::Center));

        let mut recorder = Recorder::default();
        band.render(bounds(200.0, 300.0), &mut recorder).unwrap();

        assert_eq!(recorder.fills.len(), 3);
        assert_eq!(recorder.labels, vec!["Header", "Footer"]);
        assert_eq!(recorder.fills[1].0.height, 180.0);
    }
}
