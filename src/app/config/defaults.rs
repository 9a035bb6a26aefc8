// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: endpoint, page size, request timeout
//! - **Gallery**: tile geometry and image caching
//! - **Notifications**: toast lifetimes

// ==========================================================================
// API Defaults
// ==========================================================================

/// Default search endpoint (Pixabay-compatible).
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Environment variable consulted for the API key.
pub const ENV_API_KEY: &str = "PIXABAY_API_KEY";

/// Number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Smallest page size the endpoint accepts.
pub const MIN_PER_PAGE: u32 = 3;

/// Largest page size the endpoint accepts.
pub const MAX_PER_PAGE: u32 = 200;

/// Whether results are restricted to content suitable for all ages.
pub const DEFAULT_SAFESEARCH: bool = true;

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default tile width in logical pixels.
pub const DEFAULT_TILE_WIDTH: f32 = 240.0;

/// Minimum tile width in logical pixels.
pub const MIN_TILE_WIDTH: f32 = 120.0;

/// Maximum tile width in logical pixels.
pub const MAX_TILE_WIDTH: f32 = 480.0;

/// Number of decoded full-size images kept in memory.
pub const FULL_IMAGE_CACHE_CAPACITY: usize = 16;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for warning toasts, in milliseconds.
pub const WARNING_TOAST_MS: u64 = 5_000;

/// Auto-dismiss delay for success and info toasts, in milliseconds.
pub const INFO_TOAST_MS: u64 = 3_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PER_PAGE <= DEFAULT_PER_PAGE);
    assert!(DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    assert!(MIN_TIMEOUT_SECS <= DEFAULT_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);
    assert!(MIN_TILE_WIDTH <= DEFAULT_TILE_WIDTH);
    assert!(DEFAULT_TILE_WIDTH <= MAX_TILE_WIDTH);
    assert!(FULL_IMAGE_CACHE_CAPACITY > 0);
};
