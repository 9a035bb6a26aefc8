// SPDX-License-Identifier: MPL-2.0
//! "Load more" button under the grid.
//!
//! Always enabled when rendered; whether it is rendered at all is decided by
//! the search state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LoadMoreRequested,
}

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let label = Text::new(i18n.tr("load-more-button")).size(typography::BODY_LG);

    Container::new(
        button(label)
            .on_press(Message::LoadMoreRequested)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
    )
    .center_x(Length::Fill)
    .padding(spacing::MD)
    .into()
}
