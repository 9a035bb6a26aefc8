// SPDX-License-Identifier: MPL-2.0
//! Search input shown at the top of the window.
//!
//! The text value is owned locally; the parent only hears about it when the
//! user submits with Enter or the search button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Id, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Identifier of the text input, used to focus it at startup.
pub const INPUT_ID: &str = "search-input";

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

impl State {
    /// Creates the state with a pre-filled value (e.g. a query from the CLI).
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            input: initial.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.input
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user submitted; carries the trimmed text, possibly empty.
    Submitted(String),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::InputChanged(value) => {
            state.input = value;
            Event::None
        }
        Message::Submit => Event::Submitted(state.input.trim().to_string()),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let input = text_input(&ctx.i18n.tr("search-placeholder"), ctx.state.value())
        .id(Id::new(INPUT_ID))
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let submit = button(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit);

    Container::new(Container::new(row).max_width(sizing::SEARCHBAR_MAX_WIDTH))
        .center_x(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::panel)
        .into()
}
