// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The project SVG is embedded and rasterized at runtime into the RGBA buffer
//! the window title bar expects.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_gallery.svg");

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterizes the embedded SVG to a square RGBA buffer of `size` pixels.
///
/// Returns `None` if parsing or rendering fails.
pub fn rasterize(size: u32) -> Option<Vec<u8>> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            log::warn!("window icon SVG is invalid: {err}");
            return None;
        }
    };

    let original = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / original.width(),
        size as f32 / original.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap.take())
}

/// Builds the window icon. Falls back to `None` if rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_size() {
        let rgba = rasterize(64).expect("embedded SVG renders");
        assert_eq!(rgba.len(), 64 * 64 * 4);
        assert!(rgba.chunks_exact(4).any(|px| px[3] > 0));
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
