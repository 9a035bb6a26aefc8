// SPDX-License-Identifier: MPL-2.0
//! Remote image loading for the gallery grid and the overlay.
//!
//! Search results only carry URLs; this module downloads the bytes and
//! decodes them into Iced image handles.

pub mod image;
pub mod remote;

pub use image::{decode, ImageData};
pub use remote::{fetch_image, RemoteImage};
