// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::theming::AppTheme;
use iced::widget::{center, text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub gallery: Option<&'a gallery::State>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.gallery {
        Some(state) => state
            .view(gallery::ViewContext {
                i18n: ctx.i18n,
                colors: &ctx.theme.colors,
            })
            .map(Message::Gallery),
        // Only visible for the frame between a close request and exit.
        None => center(text(ctx.i18n.tr("window-title")))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    }
}
