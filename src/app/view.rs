// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the navigation rail next to the active demo screen.

use super::{Message, Screen};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::screens::{cards, dashboard, item_list, regions, strips};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::typography::Typography;
use iced::widget::image::Handle;
use iced::widget::{Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub scheme: &'a ColorScheme,
    pub typography: &'a Typography,
    pub emblem: &'a Handle,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let rail = navbar::view(NavbarViewContext {
        active: ctx.screen,
        scheme: ctx.scheme,
        typography: ctx.typography,
    })
    .map(Message::Navbar);

    let screen: Element<'_, Message> = match ctx.screen {
        Screen::ItemList => item_list::view(item_list::ViewContext {
            typography: ctx.typography,
            emblem: ctx.emblem,
        }),
        Screen::Strips => strips::view(strips::ViewContext {
            typography: ctx.typography,
        }),
        Screen::Regions => regions::view(regions::ViewContext {
            typography: ctx.typography,
        }),
        Screen::Dashboard => dashboard::view(dashboard::ViewContext {
            typography: ctx.typography,
        }),
        Screen::Cards => cards::view(cards::ViewContext {
            typography: ctx.typography,
            emblem: ctx.emblem,
        }),
    };

    let surface = Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::chrome(
            ctx.scheme.surface_primary,
            ctx.scheme.text_primary,
        ));

    Row::new()
        .push(rail)
        .push(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_renders() {
        let scheme = ColorScheme::dark();
        let typography = Typography::default();
        let emblem = Handle::from_bytes(Vec::new());

        for screen in Screen::ALL {
            let _element = view(ViewContext {
                screen,
                scheme: &scheme,
                typography: &typography,
                emblem: &emblem,
            });
        }
    }
}
