// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::Task;

/// Processes a top-level message against the application state.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => {
            let NavbarEvent::Selected(screen) = navbar::update(message);
            app.screen = screen;
            Task::none()
        }
        Message::CloseRequested => iced::exit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Screen;

    #[test]
    fn navbar_selection_switches_screen() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::ItemList);

        let _task = update(
            &mut app,
            Message::Navbar(navbar::Message::Select(Screen::Dashboard)),
        );
        assert_eq!(app.screen, Screen::Dashboard);
    }
}
