// SPDX-License-Identifier: MPL-2.0
//! UI modules: tokens, theming, typography, shared components, and the
//! demo screens.

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod screens;
pub mod styles;
pub mod theming;
pub mod typography;
