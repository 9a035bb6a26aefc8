// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::search::{FetchOutcome, FetchTicket};
use crate::ui::{gallery, load_more, modal, notifications, searchbar};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(searchbar::Message),
    Gallery(gallery::Message),
    LoadMore(load_more::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    /// A search request finished; `ticket` identifies which one.
    SearchCompleted {
        ticket: FetchTicket,
        outcome: FetchOutcome,
    },
    ThumbnailLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    FullImageLoaded {
        url: String,
        result: Result<ImageData, Error>,
    },
    /// Periodic tick for the spinner and toast timers.
    Tick(Instant),
    EscapePressed,
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Search to run right after startup.
    pub query: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// API key taking priority over the environment and the config file.
    pub api_key: Option<String>,
}
