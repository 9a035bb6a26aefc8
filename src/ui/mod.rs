// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the parent when
//! it has one, and a `view` taking a `ViewContext`.
//!
//! # Components
//!
//! - [`searchbar`] - Query input and submit button
//! - [`gallery`] - Result grid of clickable thumbnails
//! - [`load_more`] - Button fetching the next page
//! - [`loader`] - Spinner shown while a request is in flight
//! - [`modal`] - Full-size image overlay
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod load_more;
pub mod loader;
pub mod modal;
pub mod notifications;
pub mod searchbar;
pub mod styles;
pub mod theming;
pub mod widgets;
