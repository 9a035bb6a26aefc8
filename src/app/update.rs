// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch and returns the follow-up [`Task`].

use super::Message;
use crate::api::{FetchError, ImageClient};
use crate::error::Error;
use crate::media::{self, ImageData, RemoteImage};
use crate::search::{ApplyResult, FetchOutcome, FetchRequest, FetchTicket, ImageItem, SearchState};
use crate::ui::gallery::{self, ThumbnailCache};
use crate::ui::{load_more, loader, modal, notifications, searchbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use lru::LruCache;

/// Mutable view over the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub search: &'a mut SearchState,
    /// `None` when the HTTP client could not be built at startup.
    pub client: Option<&'a ImageClient>,
    pub searchbar: &'a mut searchbar::State,
    pub thumbnails: &'a mut ThumbnailCache,
    pub full_images: &'a mut LruCache<String, RemoteImage>,
    pub spinner: &'a mut loader::State,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_searchbar_message(
    ctx: &mut UpdateContext<'_>,
    message: searchbar::Message,
) -> Task<Message> {
    match searchbar::update(message, ctx.searchbar) {
        searchbar::Event::None => Task::none(),
        searchbar::Event::Submitted(query) => start_search(ctx, &query),
    }
}

/// Submits `query` to the search state and spawns the request if one is issued.
pub fn start_search(ctx: &mut UpdateContext<'_>, query: &str) -> Task<Message> {
    match ctx.search.submit(query, &mut *ctx.notifications) {
        Some(request) => search_task(ctx.client, request),
        None => Task::none(),
    }
}

pub fn handle_load_more_message(
    ctx: &mut UpdateContext<'_>,
    message: load_more::Message,
) -> Task<Message> {
    match message {
        load_more::Message::LoadMoreRequested => match ctx.search.load_more() {
            Some(request) => search_task(ctx.client, request),
            None => Task::none(),
        },
    }
}

pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    ticket: &FetchTicket,
    outcome: FetchOutcome,
) -> Task<Message> {
    match ctx.search.apply(ticket, outcome, &mut *ctx.notifications) {
        ApplyResult::Stale | ApplyResult::Failed => Task::none(),
        ApplyResult::NoResults => {
            ctx.thumbnails.clear();
            scroll_to_top()
        }
        ApplyResult::Replaced => {
            ctx.thumbnails.clear();
            let thumbnails = request_thumbnails(ctx, 0);
            Task::batch([scroll_to_top(), thumbnails])
        }
        ApplyResult::Appended { from } => request_thumbnails(ctx, from),
    }
}

pub fn handle_thumbnail_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    // Entries are dropped when a new search replaces the grid; late
    // downloads for those URLs are ignored.
    if let Some(entry) = ctx.thumbnails.get_mut(url) {
        if let Err(err) = &result {
            log::warn!("thumbnail {url} failed: {err}");
        }
        *entry = RemoteImage::from_result(result);
    }
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(message) {
        gallery::Event::OpenOverlay(payload) => {
            let url = payload.full_url.clone();
            ctx.search.open_overlay(payload);
            request_full_image(ctx, url)
        }
    }
}

pub fn handle_full_image_loaded(
    ctx: &mut UpdateContext<'_>,
    url: &str,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if let Err(err) = &result {
        log::warn!("full image {url} failed: {err}");
    }
    if let Some(entry) = ctx.full_images.get_mut(url) {
        *entry = RemoteImage::from_result(result);
    } else if ctx
        .search
        .overlay()
        .is_some_and(|payload| payload.full_url == url)
    {
        // Evicted while downloading; the open overlay still waits for it.
        ctx.full_images
            .put(url.to_string(), RemoteImage::from_result(result));
    }
    Task::none()
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    match modal::update(message) {
        modal::Event::None => {}
        modal::Event::Close => ctx.search.close_overlay(),
    }
    Task::none()
}

pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.search.overlay().is_some() {
        ctx.search.close_overlay();
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick();
    ctx.spinner.tick();
    Task::none()
}

/// Runs `request` on the client, or fails it right away when there is none.
fn search_task(client: Option<&ImageClient>, request: FetchRequest) -> Task<Message> {
    let ticket = request.ticket;
    let Some(client) = client.cloned() else {
        return Task::done(Message::SearchCompleted {
            ticket,
            outcome: Err(FetchError::Network("HTTP client unavailable".into())),
        });
    };

    let query = ticket.query().to_string();
    let page = ticket.page();
    Task::perform(
        async move { client.search(&query, page).await },
        move |outcome| Message::SearchCompleted { ticket, outcome },
    )
}

/// Starts downloads for the thumbnails of `results[from..]` not yet cached.
fn request_thumbnails(ctx: &mut UpdateContext<'_>, from: usize) -> Task<Message> {
    let Some(client) = ctx.client else {
        return Task::none();
    };
    let items: &[ImageItem] = ctx.search.results().get(from..).unwrap_or_default();

    let mut tasks = Vec::new();
    for item in items {
        let url = item.thumbnail_url.clone();
        if ctx.thumbnails.contains_key(&url) {
            continue;
        }
        ctx.thumbnails.insert(url.clone(), RemoteImage::Loading);
        let http = client.http().clone();
        tasks.push(Task::perform(
            media::fetch_image(http, url.clone()),
            move |result| Message::ThumbnailLoaded { url, result },
        ));
    }
    Task::batch(tasks)
}

/// Starts downloading `url` unless it is cached or already on its way.
/// Failed entries are retried.
fn request_full_image(ctx: &mut UpdateContext<'_>, url: String) -> Task<Message> {
    if matches!(
        ctx.full_images.get(&url),
        Some(RemoteImage::Ready(_) | RemoteImage::Loading)
    ) {
        return Task::none();
    }
    let Some(client) = ctx.client else {
        ctx.full_images.put(
            url,
            RemoteImage::Failed("HTTP client unavailable".into()),
        );
        return Task::none();
    };

    ctx.full_images.put(url.clone(), RemoteImage::Loading);
    let http = client.http().clone();
    Task::perform(media::fetch_image(http, url.clone()), move |result| {
        Message::FullImageLoaded { url, result }
    })
}

fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(gallery::SCROLLABLE_ID), RelativeOffset::START)
}
