// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while a search request is in flight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Color, Element, Length};

/// Spinner rotation, advanced by the app's tick subscription.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    rotation: f32,
}

impl State {
    pub fn tick(&mut self) {
        self.rotation = animated_spinner::advance(self.rotation);
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: State,
    pub color: Color,
}

pub fn view<'a, Message: 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(ctx.color, ctx.state.rotation())
        .with_size(sizing::ICON_LG)
        .into_element();

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(spinner)
        .push(Text::new(ctx.i18n.tr("loader-label")).size(typography::CAPTION));

    Container::new(content)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_rotates_spinner() {
        let mut state = State::default();
        state.tick();
        assert!(state.rotation() > 0.0);
    }
}
