//! Utility functions

use crate::constants::{API_URL_ENV, DEFAULT_API_URL};
use std::path::PathBuf;

// Leaf in a basket, for the header logo and window icon
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="14" fill="#16a34a"/><path d="M12 26h40l-5 24a4 4 0 0 1-4 3H21a4 4 0 0 1-4-3z" fill="#fff"/><path d="M20 26l8-12M44 26l-8-12" stroke="#fff" stroke-width="4" stroke-linecap="round"/><path d="M32 46c-6-3-8-9-5-15 6 0 10 4 10 10 0 2-2 4-5 5z" fill="#16a34a"/></svg>"##;

/// Rasterize the logo SVG to a square RGBA image.
pub fn rasterize_logo(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Varsha Stores")
}

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("cache")
}

/// Format a whole-rupee amount, e.g. "Rs. 180"
pub fn format_price(amount: u64) -> String {
    format!("Rs. {}", amount)
}

/// "1 item" / "3 items"
pub fn pluralize_items(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

/// Public API base URL from the environment, falling back to the default.
pub fn api_base_url() -> String {
    resolve_api_url(std::env::var(API_URL_ENV).ok())
}

fn resolve_api_url(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_format() {
        assert_eq!(format_price(0), "Rs. 0");
        assert_eq!(format_price(1250), "Rs. 1250");
    }

    #[test]
    fn item_plural() {
        assert_eq!(pluralize_items(0), "0 items");
        assert_eq!(pluralize_items(1), "1 item");
        assert_eq!(pluralize_items(2), "2 items");
    }

    #[test]
    fn api_url_falls_back_when_unset_or_blank() {
        assert_eq!(resolve_api_url(None), DEFAULT_API_URL);
        assert_eq!(resolve_api_url(Some("  ".into())), DEFAULT_API_URL);
        assert_eq!(
            resolve_api_url(Some("https://shop.example.com/api".into())),
            "https://shop.example.com/api"
        );
    }

    #[test]
    fn logo_rasterizes() {
        let (pixels, w, h) = rasterize_logo(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        // Center of the badge is opaque
        let center = ((16 * 32 + 16) * 4 + 3) as usize;
        assert_eq!(pixels[center], 255);
    }
}
