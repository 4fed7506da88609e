// SPDX-License-Identifier: MPL-2.0
//! `iced_mosaic` is a small layout demo gallery built with the Iced GUI
//! framework.
//!
//! It renders a handful of sample screens (proportional strips, fractional
//! regions, a nested dashboard split, styled boxes, a list item) on top of
//! a tiny weighted-box layout engine with a host-renderer seam.

pub mod app;
pub mod assets;
pub mod error;
pub mod layout;
pub mod ui;
