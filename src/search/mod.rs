// SPDX-License-Identifier: MPL-2.0
//! Search session state.
//!
//! [`SearchState`] owns the query, the page counter and the accumulated
//! results. It never performs I/O: callers turn the [`FetchRequest`]s it
//! returns into network calls and feed the outcome back through
//! [`SearchState::apply`].

pub mod state;

pub use state::{
    ApplyResult, FetchOutcome, FetchRequest, FetchStatus, FetchTicket, ImageItem,
    NotificationSink, OverlayPayload, SearchState,
};
