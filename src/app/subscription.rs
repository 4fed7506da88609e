// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The gallery reacts to exactly one native event: the window close
//! request, which terminates the process.

use super::Message;
use iced::{event, window, Subscription};

/// Maps window close requests to the application message.
pub fn close_requests() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = event {
            Some(Message::CloseRequested)
        } else {
            None
        }
    })
}
