//! App module - contains the main application state and logic

mod cart_panel;
mod filters;
mod images;
mod views;

use crate::cart::Cart;
use crate::catalog::{self, PRODUCTS};
use crate::constants::ALL_CATEGORIES;
use crate::settings::Settings;
use crate::theme;
use crate::types::Product;
use crate::utils::get_cache_dir;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Browsing
    pub(crate) filtered: Vec<&'static Product>,
    pub(crate) search_query: String,
    pub(crate) focus_search: bool,
    pub(crate) selected_category: &'static str,
    // Cart
    pub(crate) cart: Cart,
    pub(crate) cart_open: bool,
    // Header logo
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Product images. `load_images` is the saved preference; downloads
    // also need `runtime`, cached files are shown without it.
    pub(crate) load_images: bool,
    pub(crate) image_cache: HashMap<&'static str, egui::TextureHandle>,
    pub(crate) prefetch_started: bool,
    pub(crate) cache_dir: PathBuf,
    pub(crate) runtime: Option<tokio::runtime::Runtime>,
    pub(crate) cancel_token: CancellationToken,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(&cache_dir).ok();

        Self::with_settings(settings, data_dir, cache_dir)
    }

    /// State setup shared by the window and tests; needs no egui context.
    pub(crate) fn with_settings(settings: Settings, data_dir: PathBuf, cache_dir: PathBuf) -> Self {
        let runtime = if settings.load_images {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => Some(rt),
                Err(e) => {
                    warn!(error = %e, "Failed to start runtime, product images disabled");
                    None
                }
            }
        } else {
            None
        };

        let selected_category = match catalog::category_by_id(&settings.last_category) {
            Some(c) => c.id,
            None => ALL_CATEGORIES,
        };

        let mut app = Self {
            filtered: Vec::new(),
            search_query: String::new(),
            focus_search: false,
            selected_category,
            cart: Cart::new(),
            cart_open: false,
            logo_texture: None,
            load_images: settings.load_images,
            image_cache: HashMap::new(),
            prefetch_started: false,
            cache_dir,
            runtime,
            cancel_token: CancellationToken::new(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };
        app.apply_filters();
        info!(
            products = PRODUCTS.len(),
            category = app.selected_category,
            images = app.load_images,
            downloads = app.runtime.is_some(),
            "Storefront ready"
        );
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_category: self.selected_category.to_string(),
            load_images: self.load_images,
        };
        settings.save(&self.data_dir);
    }

    pub fn add_to_cart(&mut self, product: &'static Product) {
        self.cart.add_one(product);
        info!(
            product = product.id,
            items = self.cart.item_count(),
            total = self.cart.total(),
            "Added to cart"
        );
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
        info!(
            product = product_id,
            items = self.cart.item_count(),
            total = self.cart.total(),
            "Removed from cart"
        );
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Stop background work before the window goes away
    pub fn shutdown(&mut self) {
        self.cancel_token.cancel();
        if let Some(rt) = self.runtime.take() {
            rt.shutdown_background();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;

    /// App with images disabled so no runtime or network is involved
    pub fn test_app() -> App {
        test_app_with(Settings { load_images: false, ..Settings::default() })
    }

    pub fn test_app_with(settings: Settings) -> App {
        let dir = std::env::temp_dir().join(format!("varsha-stores-app-{}", std::process::id()));
        App::with_settings(settings, dir.clone(), dir.join("cache"))
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn starts_with_full_catalog_and_empty_cart() {
        let app = test_app();
        assert_eq!(app.filtered.len(), PRODUCTS.len());
        assert_eq!(app.selected_category, ALL_CATEGORIES);
        assert!(app.cart.is_empty());
        assert!(!app.cart_open);
        assert!(!app.load_images);
    }

    #[test]
    fn restores_last_category() {
        let app = test_app_with(Settings {
            last_category: "grains".into(),
            load_images: false,
            ..Settings::default()
        });
        assert_eq!(app.selected_category, "grains");
        assert_eq!(app.filtered.len(), 2);
    }

    #[test]
    fn unknown_saved_category_falls_back_to_all() {
        let app = test_app_with(Settings {
            last_category: "toys".into(),
            load_images: false,
            ..Settings::default()
        });
        assert_eq!(app.selected_category, ALL_CATEGORIES);
    }

    #[test]
    fn add_and_remove_through_app() {
        let mut app = test_app();
        let milk = catalog::product_by_id("dairy_001").unwrap();
        app.add_to_cart(milk);
        app.add_to_cart(milk);
        assert_eq!(app.cart.item_count(), 2);
        assert_eq!(app.cart.total(), 110);

        app.remove_from_cart("dairy_001");
        assert!(app.cart.is_empty());
    }

    #[test]
    fn image_preference_survives_missing_runtime() {
        let dir = std::env::temp_dir().join(format!("varsha-stores-pref-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut app = App::with_settings(
            Settings { load_images: true, ..Settings::default() },
            dir.clone(),
            dir.join("cache"),
        );
        app.shutdown();
        assert!(app.runtime.is_none());
        assert!(app.load_images);

        app.save_settings();
        assert!(Settings::load(&dir).load_images);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn cart_toggle() {
        let mut app = test_app();
        app.open_cart();
        assert!(app.cart_open);
        app.close_cart();
        assert!(!app.cart_open);
    }
}
