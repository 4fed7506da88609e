// SPDX-License-Identifier: MPL-2.0
//! Weighted box layout.
//!
//! A container ([`Band`]) lays out an ordered sequence of weighted slots
//! along its main axis: each slot receives `weight / total_weight` of the
//! container's main-axis extent and fills the full cross-axis extent. The
//! arithmetic lives in [`partition`]; [`Band::render`] walks the resolved
//! slots and emits fill/label calls on a host-supplied [`Surface`], so the
//! module stays independent of any particular renderer.

mod band;
mod partition;

pub use band::{Alignment, Axis, Band, ResolvedLabel, ResolvedSlot, Slot, Surface};
pub use partition::{partition, InvalidLayoutError};
