// SPDX-License-Identifier: MPL-2.0
//! Application root state and launch plumbing.
//!
//! The `App` struct holds the only mutable state the gallery has (the
//! active screen) plus the values resolved once at startup: the color
//! scheme, the typography table, and the validated asset handles. This file
//! keeps the user-facing launch policy (window size, title, fatal startup
//! errors) next to the run loop so it is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::Message;
pub use screen::Screen;

use crate::assets;
use crate::error::Error;
use crate::ui::theming::{AppTheme, ThemeMode};
use crate::ui::typography::Typography;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 600.0;
pub const WINDOW_TITLE: &str = "Mosaic";

/// Root application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    theme: AppTheme,
    typography: Typography,
    emblem: Handle,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            theme: AppTheme::new(ThemeMode::System),
            typography: Typography::default(),
            emblem: Handle::from_bytes(Vec::new()),
        }
    }
}

impl App {
    /// Initializes application state from the values resolved by [`run`].
    fn new(theme: AppTheme, typography: Typography, emblem: Handle) -> (Self, Task<Message>) {
        (
            Self {
                screen: Screen::default(),
                theme,
                typography,
                emblem,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_owned()
    }

    fn theme(&self) -> Theme {
        self.theme.iced.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            scheme: &self.theme.colors,
            typography: &self.typography,
            emblem: &self.emblem,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::close_requests()
    }
}

/// Builds the window settings: one fixed-size, non-resizable window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        resizable: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the application loop.
///
/// Resolves every bundled asset and the system theme before the event loop
/// starts; any asset failure aborts the launch.
pub fn run() -> Result<(), Error> {
    let loaded = assets::load()?;
    let theme = AppTheme::new(ThemeMode::System);
    let typography = Typography::default();
    let emblem = loaded.emblem.clone();

    let boot = move || App::new(theme.clone(), typography.clone(), emblem.clone());

    let mut application = iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription);

    for font in loaded.fonts {
        application = application.font(font);
    }

    application
        .run()
        .map_err(|err| Error::Runtime(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_fixed_size() {
        let settings = window_settings();
        assert!(!settings.resizable);
        assert_eq!(settings.size, iced::Size::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    }

    #[test]
    fn default_app_starts_on_the_list_item_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::ItemList);
        assert_eq!(app.title(), WINDOW_TITLE);
    }
}
