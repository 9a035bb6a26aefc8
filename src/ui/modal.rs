// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay.
//!
//! Drawn above the gallery on a dimmed backdrop. Clicking the backdrop, the
//! close button, or pressing Escape (handled by the app subscription) closes it.

use crate::i18n::fluent::I18n;
use crate::media::RemoteImage;
use crate::search::OverlayPayload;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::loader;
use crate::ui::styles;
use iced::widget::{button, image, mouse_area, responsive, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{alignment::Horizontal, Element, Length, Size};

/// Vertical room reserved for the close button and the caption.
const CHROME_HEIGHT: f32 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    /// Click on the image card; swallowed so it does not reach the backdrop.
    CardPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::CardPressed => Event::None,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub payload: &'a OverlayPayload,
    /// `None` until the download has been requested.
    pub image: Option<&'a RemoteImage>,
    pub spinner: loader::State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Close);

    let card = responsive(move |available: Size| card(&ctx, available));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(card)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.image {
        Some(RemoteImage::Ready(data)) => {
            let size = fit_size(available, data.width, data.height);
            image(data.handle.clone())
                .width(Length::Fixed(size.width))
                .height(Length::Fixed(size.height))
                .into()
        }
        Some(RemoteImage::Failed(error)) => Text::new(
            ctx.i18n
                .tr_with_args("modal-load-failed", &[("error", error.as_str())]),
        )
        .size(typography::BODY)
        .color(palette::WHITE)
        .into(),
        Some(RemoteImage::Loading) | None => loader::view(loader::ViewContext {
            i18n: ctx.i18n,
            state: ctx.spinner,
            color: palette::WHITE,
        }),
    };

    let close = tooltip(
        button(Text::new("×").size(typography::TITLE_MD))
            .on_press(Message::Close)
            .padding([0.0, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            )),
        Text::new(ctx.i18n.tr("modal-close")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let caption = Container::new(
        Text::new(ctx.payload.tags.as_str())
            .size(typography::BODY)
            .align_x(Horizontal::Center),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::SM));

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close)
                .width(Length::Fill),
        )
        .push(picture)
        .push(caption)
        .max_width(available.width * sizing::MODAL_MAX_FRACTION);

    Container::new(mouse_area(content).on_press(Message::CardPressed))
        .center(Length::Fill)
        .into()
}

/// Largest size that keeps the image aspect ratio, never upscales, and fits
/// within the overlay area of a window of size `available`.
#[must_use]
pub fn fit_size(available: Size, width: u32, height: u32) -> Size {
    if width == 0 || height == 0 {
        return Size::ZERO;
    }
    let max_width = (available.width * sizing::MODAL_MAX_FRACTION).max(0.0);
    let max_height = (available.height * sizing::MODAL_MAX_FRACTION - CHROME_HEIGHT).max(0.0);
    let (width, height) = (width as f32, height as f32);
    let scale = (max_width / width).min(max_height / height).min(1.0);
    Size::new((width * scale).floor(), (height * scale).floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_and_card_clicks() {
        assert_eq!(update(Message::Close), Event::Close);
        assert_eq!(update(Message::CardPressed), Event::None);
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let size = fit_size(Size::new(2000.0, 2000.0), 640, 427);
        assert_eq!(size, Size::new(640.0, 427.0));
    }

    #[test]
    fn large_images_shrink_keeping_aspect() {
        let size = fit_size(Size::new(1000.0, 1000.0), 1920, 1280);
        assert!(size.width <= 900.0);
        assert!(size.height <= 900.0 - CHROME_HEIGHT);
        let ratio = size.width / size.height;
        assert!((ratio - 1.5).abs() < 0.01);
    }

    #[test]
    fn degenerate_image_has_zero_size() {
        assert_eq!(fit_size(Size::new(800.0, 600.0), 0, 10), Size::ZERO);
    }
}
