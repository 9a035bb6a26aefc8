// SPDX-License-Identifier: MPL-2.0
//! Remote image search API.
//!
//! The client talks to a Pixabay-compatible endpoint: one `GET` per page with
//! the query, the page number and a fixed page size. Decoding is kept separate
//! from transport so both can be tested without a live server.

pub mod client;
pub mod types;

pub use client::{parse_search_page, ClientSettings, ImageClient};
pub use types::{FetchError, RawHit, SearchPage};
