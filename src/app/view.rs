// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a search bar above a scrollable area holding the grid, the
//! loader and the load-more button. The image overlay and the toasts are
//! stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::search::SearchState;
use crate::ui::gallery::{self, ThumbnailCache};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::{load_more, loader, modal, searchbar};
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search: &'a SearchState,
    pub searchbar: &'a searchbar::State,
    pub thumbnails: &'a ThumbnailCache,
    /// Full-size image for the open overlay, if the download was requested.
    pub overlay_image: Option<&'a RemoteImage>,
    pub spinner: loader::State,
    pub tile_width: f32,
    pub spinner_color: Color,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let searchbar = searchbar::view(searchbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.searchbar,
    })
    .map(Message::SearchBar);

    let mut body = Column::new().width(Length::Fill).push(
        gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            items: ctx.search.results(),
            total_matches: ctx.search.total_matches(),
            thumbnails: ctx.thumbnails,
            tile_width: ctx.tile_width,
            is_loading: ctx.search.is_loading(),
        })
        .map(Message::Gallery),
    );

    if ctx.search.is_loading() {
        body = body.push(loader::view(loader::ViewContext {
            i18n: ctx.i18n,
            state: ctx.spinner,
            color: ctx.spinner_color,
        }));
    }

    if ctx.search.load_more_visible() {
        body = body.push(load_more::view(ctx.i18n).map(Message::LoadMore));
    }

    let scrollable = Scrollable::new(body)
        .id(Id::new(gallery::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(searchbar)
        .push(scrollable);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(payload) = ctx.search.overlay() {
        layers = layers.push(
            modal::view(modal::ViewContext {
                i18n: ctx.i18n,
                payload,
                image: ctx.overlay_image,
                spinner: ctx.spinner,
            })
            .map(Message::Modal),
        );
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
