// SPDX-License-Identifier: MPL-2.0
//! Result grid.
//!
//! Renders the current result set as wrapping rows of fixed-width tiles.
//! Clicking a tile emits the [`OverlayPayload`] of that item.

use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::search::{ImageItem, OverlayPayload};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};
use std::collections::HashMap;

/// Identifier of the scrollable wrapping the grid.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

/// Decoded thumbnails keyed by URL.
pub type ThumbnailCache = HashMap<String, RemoteImage>;

#[derive(Debug, Clone)]
pub enum Message {
    TileClicked(OverlayPayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenOverlay(OverlayPayload),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::TileClicked(payload) => Event::OpenOverlay(payload),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [ImageItem],
    pub total_matches: u64,
    pub thumbnails: &'a ThumbnailCache,
    pub tile_width: f32,
    /// Suppresses the empty-state hint while the first page loads.
    pub is_loading: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.items.is_empty() {
        let hint: Element<'a, Message> = if ctx.is_loading {
            Text::new("").into()
        } else {
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY_LG)
                .into()
        };
        return Container::new(hint)
            .center_x(Length::Fill)
            .padding(spacing::XL)
            .into();
    }

    let shown = ctx.items.len().to_string();
    let total = ctx.total_matches.to_string();
    let count = Text::new(ctx.i18n.tr_with_args(
        "gallery-results-count",
        &[("shown", shown.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    let tiles = ctx
        .items
        .iter()
        .map(|item| tile(item, ctx.thumbnails.get(&item.thumbnail_url), &ctx));
    let grid = Row::with_children(tiles)
        .spacing(spacing::SM)
        .wrap()
        .vertical_spacing(spacing::SM);

    Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(count)
        .push(grid)
        .into()
}

fn tile<'a>(
    item: &'a ImageItem,
    thumbnail: Option<&'a RemoteImage>,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let width = ctx.tile_width;
    let height = tile_height(width);

    let picture: Element<'a, Message> = match thumbnail {
        Some(RemoteImage::Ready(data)) => image(data.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(RemoteImage::Failed(_)) => placeholder(
            Text::new(ctx.i18n.tr("gallery-thumbnail-failed")).size(typography::CAPTION),
            width,
            height,
        ),
        Some(RemoteImage::Loading) | None => placeholder(Text::new(""), width, height),
    };

    let caption = Text::new(item.tags.as_str())
        .size(typography::CAPTION)
        .width(Length::Fixed(width))
        .wrapping(iced::widget::text::Wrapping::None);

    button(Column::new().spacing(spacing::XXS).push(picture).push(caption))
        .on_press(Message::TileClicked(item.overlay_payload()))
        .padding(spacing::XXS)
        .style(styles::button::tile)
        .into()
}

fn placeholder<'a>(
    content: impl Into<Element<'a, Message>>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    Container::new(content)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(styles::container::placeholder)
        .into()
}

/// Tile height for a given width.
#[must_use]
pub fn tile_height(width: f32) -> f32 {
    (width * sizing::TILE_ASPECT).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_click_opens_overlay_with_payload() {
        let payload = OverlayPayload {
            full_url: "https://cdn.test/1_1280.jpg".into(),
            tags: "sea, boat".into(),
        };

        let event = update(Message::TileClicked(payload.clone()));

        assert_eq!(event, Event::OpenOverlay(payload));
    }

    #[test]
    fn tiles_keep_photo_aspect() {
        assert_eq!(tile_height(240.0), 160.0);
        assert_eq!(tile_height(300.0), 200.0);
    }
}
