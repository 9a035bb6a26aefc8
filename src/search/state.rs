// SPDX-License-Identifier: MPL-2.0
//! Fetch and pagination state machine.

use crate::api::{FetchError, RawHit, SearchPage};

/// Notification key sent when a blank query is submitted.
pub const KEY_EMPTY_QUERY: &str = "search-empty-query";
/// Notification key sent when a fresh search matches nothing.
pub const KEY_NO_RESULTS: &str = "search-no-results";
/// Notification key sent when a fetch fails.
pub const KEY_FETCH_FAILED: &str = "search-fetch-failed";

/// Receives user-facing warnings emitted by the state machine.
///
/// `key` is an i18n message key and `args` its interpolation arguments.
pub trait NotificationSink {
    fn warn(&mut self, key: &str, args: &[(&str, &str)]);
}

/// One displayable search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub id: u64,
    pub thumbnail_url: String,
    pub full_url: String,
    /// Comma separated keywords, used as caption and alt text.
    pub tags: String,
}

impl ImageItem {
    /// Data handed to the overlay when this item is clicked.
    #[must_use]
    pub fn overlay_payload(&self) -> OverlayPayload {
        OverlayPayload {
            full_url: self.full_url.clone(),
            tags: self.tags.clone(),
        }
    }
}

impl From<RawHit> for ImageItem {
    fn from(hit: RawHit) -> Self {
        Self {
            id: hit.id,
            thumbnail_url: hit.webformat_url,
            full_url: hit.large_image_url,
            tags: hit.tags,
        }
    }
}

/// The image currently shown full-size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPayload {
    pub full_url: String,
    pub tags: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
}

/// Identifies one issued request.
///
/// Only the completion carrying the ticket of the request currently in
/// flight is applied; every other completion is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: String,
    page: u32,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
}

impl FetchRequest {
    #[must_use]
    pub fn query(&self) -> &str {
        self.ticket.query()
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.ticket.page()
    }
}

pub type FetchOutcome = Result<SearchPage, FetchError>;

/// What [`SearchState::apply`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// The ticket did not match the request in flight.
    Stale,
    /// Page 1 replaced the result set.
    Replaced,
    /// A later page was appended; new items start at `from`.
    Appended { from: usize },
    /// Page 1 matched nothing and the result set was cleared.
    NoResults,
    /// The fetch failed; results are unchanged.
    Failed,
}

/// Search session: query, pagination, results and overlay.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    page: u32,
    results: Vec<ImageItem>,
    total_matches: u64,
    status: FetchStatus,
    overlay: Option<OverlayPayload>,
    generation: u64,
    in_flight: Option<FetchTicket>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            results: Vec::new(),
            total_matches: 0,
            status: FetchStatus::Idle,
            overlay: None,
            generation: 0,
            in_flight: None,
        }
    }
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh search for `query`.
    ///
    /// Blank input sends [`KEY_EMPTY_QUERY`] to `sink` and changes nothing.
    /// Resubmitting the query that is shown or already being fetched is a
    /// no-op. The active query and page only change once page 1 arrives, so
    /// a failed search leaves the previous result set fully usable.
    pub fn submit(&mut self, query: &str, sink: &mut dyn NotificationSink) -> Option<FetchRequest> {
        let query = query.trim();
        if query.is_empty() {
            sink.warn(KEY_EMPTY_QUERY, &[]);
            return None;
        }
        if query == self.pending_query() {
            log::debug!("query unchanged, ignoring submit");
            return None;
        }

        log::debug!("new search for {query:?}");
        Some(self.issue(query.to_string(), 1))
    }

    /// Requests the next page of the active query.
    ///
    /// Returns `None` unless the load-more control is currently visible.
    /// The page counter advances when the page arrives.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.load_more_visible() {
            return None;
        }
        let next = self.page + 1;
        log::debug!("loading page {next} of {:?}", self.query);
        Some(self.issue(self.query.clone(), next))
    }

    /// Applies the completion of a request previously returned by
    /// [`submit`](Self::submit) or [`load_more`](Self::load_more).
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        outcome: FetchOutcome,
        sink: &mut dyn NotificationSink,
    ) -> ApplyResult {
        if self.in_flight.as_ref() != Some(ticket) {
            log::debug!(
                "discarding stale response for {:?} page {}",
                ticket.query,
                ticket.page
            );
            return ApplyResult::Stale;
        }
        self.in_flight = None;
        self.status = FetchStatus::Idle;

        let page = match outcome {
            Ok(page) => page,
            Err(err) => {
                log::warn!(
                    "fetch of {:?} page {} failed: {err}",
                    ticket.query,
                    ticket.page
                );
                let message = err.to_string();
                sink.warn(KEY_FETCH_FAILED, &[("error", message.as_str())]);
                return ApplyResult::Failed;
            }
        };

        if ticket.page == 1 {
            self.query.clone_from(&ticket.query);
            self.page = 1;
            if page.hits.is_empty() {
                self.results.clear();
                self.total_matches = 0;
                log::debug!("no results for {:?}", ticket.query);
                sink.warn(KEY_NO_RESULTS, &[("query", ticket.query.as_str())]);
                return ApplyResult::NoResults;
            }
            self.results = page.hits.into_iter().map(ImageItem::from).collect();
            self.total_matches = page.total_hits;
            log::debug!(
                "page 1 of {:?}: {} of {} results",
                ticket.query,
                self.results.len(),
                self.total_matches
            );
            return ApplyResult::Replaced;
        }

        self.page = ticket.page;
        let from = self.results.len();
        if page.hits.is_empty() {
            // The endpoint has nothing past this point.
            self.total_matches = from as u64;
        }
        self.results.extend(page.hits.into_iter().map(ImageItem::from));
        log::debug!(
            "page {} of {:?}: {} results loaded",
            ticket.page,
            ticket.query,
            self.results.len()
        );
        ApplyResult::Appended { from }
    }

    pub fn open_overlay(&mut self, payload: OverlayPayload) {
        self.overlay = Some(payload);
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn results(&self) -> &[ImageItem] {
        &self.results
    }

    #[must_use]
    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }

    #[must_use]
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Ticket of the request whose response is currently awaited.
    #[must_use]
    pub fn in_flight(&self) -> Option<&FetchTicket> {
        self.in_flight.as_ref()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayPayload> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Whether more pages exist and none is being fetched.
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        self.has_results()
            && (self.results.len() as u64) < self.total_matches
            && !self.is_loading()
    }

    /// Query of the page-1 request in flight, else the active query.
    fn pending_query(&self) -> &str {
        match &self.in_flight {
            Some(ticket) if ticket.page == 1 => &ticket.query,
            _ => &self.query,
        }
    }

    fn issue(&mut self, query: String, page: u32) -> FetchRequest {
        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            query,
            page,
        };
        self.status = FetchStatus::Loading;
        self.in_flight = Some(ticket.clone());
        FetchRequest { ticket }
    }
}
