// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering: header, thumbnail grid, spinner and viewer overlay.

use super::{modal, Message, ScrollMetrics, State};
use crate::i18n::fluent::I18n;
use crate::source::RemoteImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::Horizontal;
use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, scrollable, stack, text,
    text_input, Column, Row,
};
use iced::{mouse, Alignment, ContentFit, Element, Length};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let page = scrollable(self.view_page(&ctx))
            .on_scroll(|viewport| Message::Scrolled(ScrollMetrics::from_viewport(&viewport)))
            .width(Length::Fill)
            .height(Length::Fill);

        match self.selected_image() {
            Some(selected) => stack![page, view_modal(selected, ctx.i18n)].into(),
            None => page.into(),
        }
    }

    fn view_page<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title = text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

        let search = text_input(&ctx.i18n.tr("search-placeholder"), &self.search_criteria)
            .on_input(Message::SearchChanged)
            .padding(spacing::SM)
            .size(typography::BODY_LG)
            .width(Length::Fixed(sizing::SEARCH_WIDTH));

        let mut page = Column::new()
            .push(title)
            .push(search)
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        if self.no_results_found {
            page = page.push(
                container(text(ctx.i18n.tr("no-results-found")).size(typography::BODY_LG))
                    .padding(spacing::SM)
                    .style(styles::container::notice),
            );
        }

        if let Some(key) = self.fetch_error {
            page = page.push(
                container(text(ctx.i18n.tr(key)).size(typography::BODY))
                    .padding(spacing::SM)
                    .style(styles::container::error_notice),
            );
        }

        page = page.push(self.view_grid());

        if self.is_loading() {
            let spinner =
                AnimatedSpinner::new(ctx.colors.brand_primary, self.spinner_rotation())
                    .into_element();
            page = page.push(
                column![
                    spinner,
                    text(ctx.i18n.tr("loading-label")).size(typography::CAPTION)
                ]
                .spacing(spacing::XS)
                .align_x(Alignment::Center),
            );
        }

        page.into()
    }

    fn view_grid(&self) -> Element<'_, Message> {
        let columns = self.columns.max(1);

        let rows = self
            .images
            .chunks(columns)
            .enumerate()
            .map(|(row_index, chunk)| {
                let cells = chunk
                    .iter()
                    .enumerate()
                    .map(|(offset, picture)| thumbnail(picture, row_index * columns + offset));
                let row: Element<'_, Message> = Row::with_children(cells).spacing(spacing::XS).into();
                row
            });

        Column::with_children(rows)
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .into()
    }
}

fn thumbnail(picture: &RemoteImage, index: usize) -> Element<'_, Message> {
    let preview = image(picture.handle.clone())
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

    mouse_area(container(preview).style(styles::container::thumbnail))
        .on_press(Message::ThumbnailPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn view_modal<'a>(selected: &'a RemoteImage, i18n: &I18n) -> Element<'a, Message> {
    let close = button(text(i18n.tr("modal-close")).size(typography::TITLE_SM))
        .on_press(Message::Modal(modal::Message::Close))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay_close);

    let picture = mouse_area(image(selected.handle.clone()).content_fit(ContentFit::ScaleDown))
        .on_press(Message::Modal(modal::Message::ImagePressed(
            selected.url.clone(),
        )))
        .interaction(mouse::Interaction::Pointer);

    let layout = column![
        container(close)
            .width(Length::Fill)
            .align_x(Horizontal::Right),
        center(picture),
    ]
    .padding(spacing::LG);

    // Clicks that miss the picture and the button land on the backdrop.
    let backdrop = mouse_area(
        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Modal(modal::Message::Close));

    opaque(backdrop)
}
