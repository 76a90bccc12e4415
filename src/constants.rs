//! Application constants and configuration

pub const APP_NAME: &str = "Varsha Stores";
pub const APP_SUBTITLE: &str = "Gali Mart";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hosts product images may be fetched from
pub const IMAGE_HOSTS: &[&str] = &["images.unsplash.com", "via.placeholder.com", "cdn.example.com"];

/// Public API base URL. Logged at startup, never called.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Max concurrent image downloads
pub const IMAGE_FETCH_CONCURRENCY: usize = 8;

/// Category id that disables category filtering
pub const ALL_CATEGORIES: &str = "all";
