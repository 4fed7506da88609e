// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    Navbar(navbar::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    CloseRequested,
}
