// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an image search gallery built with the Iced GUI framework.
//!
//! It queries a Pixabay-compatible search endpoint, shows the results as a
//! paginated grid of thumbnails and opens any of them full size in an
//! overlay. Strings are localized with Fluent.

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod search;
pub mod ui;
