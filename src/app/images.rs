//! Product image fetching and caching
//!
//! Images are downloaded in the background into `<cache>/images/<id>.jpg`
//! and decoded lazily on the UI thread the first time a card is drawn.
//! Downloads land in `<id>.jpg.part` first and are renamed into place, so
//! the UI thread never sees a partially written file.

use super::App;
use crate::catalog::PRODUCTS;
use crate::constants::{IMAGE_FETCH_CONCURRENCY, IMAGE_HOSTS};
use crate::types::Product;
use eframe::egui;
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("invalid image url: {0}")]
    InvalidUrl(String),
    #[error("image host not allowed: {0}")]
    HostNotAllowed(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("cache write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Parse `url` and check its host against the allowlist.
pub fn check_image_url(url: &str) -> Result<Url, ImageError> {
    let parsed = Url::parse(url).map_err(|_| ImageError::InvalidUrl(url.to_string()))?;
    match parsed.host_str() {
        Some(host) if IMAGE_HOSTS.contains(&host) => Ok(parsed),
        Some(host) => Err(ImageError::HostNotAllowed(host.to_string())),
        None => Err(ImageError::InvalidUrl(url.to_string())),
    }
}

pub fn image_cache_path(cache_dir: &Path, product_id: &str) -> PathBuf {
    cache_dir.join("images").join(format!("{}.jpg", product_id))
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Write `bytes` next to `path` and rename over it once complete.
async fn write_cache_file(path: &Path, bytes: &[u8]) -> Result<(), ImageError> {
    let part = part_path(path);
    if let Err(e) = tokio::fs::write(&part, bytes).await {
        tokio::fs::remove_file(&part).await.ok();
        return Err(e.into());
    }
    tokio::fs::rename(&part, path).await?;
    Ok(())
}

async fn fetch_image(client: &reqwest::Client, url: Url, path: &Path) -> Result<(), ImageError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ImageError::Status(response.status()));
    }
    let bytes = response.bytes().await?;
    write_cache_file(path, &bytes).await
}

fn decode_image(path: &Path) -> Result<egui::ColorImage, ImageError> {
    let bytes = std::fs::read(path)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

impl App {
    pub fn start_image_prefetch(&mut self, ctx: &egui::Context) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };

        let images_dir = self.cache_dir.join("images");
        if let Err(e) = std::fs::create_dir_all(&images_dir) {
            warn!(error = %e, "Failed to create image cache dir");
            return;
        }

        let pending: Vec<(&'static str, Url, PathBuf)> = PRODUCTS
            .iter()
            .filter_map(|p| {
                let path = image_cache_path(&self.cache_dir, p.id);
                if path.exists() {
                    return None;
                }
                match check_image_url(p.image) {
                    Ok(url) => Some((p.id, url, path)),
                    Err(e) => {
                        warn!(product = p.id, error = %e, "Skipping product image");
                        None
                    }
                }
            })
            .collect();

        debug!(count = pending.len(), "Starting image prefetch");
        if pending.is_empty() {
            return;
        }

        let ctx = ctx.clone();
        let token = self.cancel_token.clone();
        runtime.spawn(async move {
            let client = reqwest::Client::new();
            let semaphore = Arc::new(tokio::sync::Semaphore::new(IMAGE_FETCH_CONCURRENCY));

            let tasks = pending.into_iter().map(|(id, url, path)| {
                let client = client.clone();
                let semaphore = semaphore.clone();
                let ctx = ctx.clone();
                let token = token.clone();
                async move {
                    let _permit = semaphore.acquire().await.ok();
                    let result = tokio::select! {
                        _ = token.cancelled() => return,
                        r = fetch_image(&client, url, &path) => r,
                    };
                    match result {
                        Ok(()) => {
                            debug!(product = id, "Image cached");
                            ctx.request_repaint();
                        }
                        Err(e) => warn!(product = id, error = %e, "Image fetch failed"),
                    }
                }
            });
            futures::future::join_all(tasks).await;
        });
    }

    /// Texture for `product`, or `None` while it is not cached yet.
    pub fn load_image(&mut self, ctx: &egui::Context, product: &Product) -> Option<egui::TextureHandle> {
        if !self.load_images {
            return None;
        }
        if let Some(texture) = self.image_cache.get(product.id) {
            return Some(texture.clone());
        }

        let path = image_cache_path(&self.cache_dir, product.id);
        if !path.exists() {
            return None;
        }

        match decode_image(&path) {
            Ok(img) => {
                let texture = ctx.load_texture(product.id, img, egui::TextureOptions::LINEAR);
                self.image_cache.insert(product.id, texture.clone());
                Some(texture)
            }
            Err(e) => {
                warn!(product = product.id, error = %e, "Failed to decode cached image");
                // Not remembered: a replacement file written later is picked up
                std::fs::remove_file(&path).ok();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_app;
    use super::*;

    #[test]
    fn allowlisted_hosts_pass() {
        let url = check_image_url("https://images.unsplash.com/photo-1?w=400").unwrap();
        assert_eq!(url.host_str(), Some("images.unsplash.com"));
        assert!(check_image_url("https://cdn.example.com/a.png").is_ok());
    }

    #[test]
    fn foreign_host_is_rejected() {
        let err = check_image_url("https://evil.example.org/a.png").unwrap_err();
        assert!(matches!(err, ImageError::HostNotAllowed(h) if h == "evil.example.org"));
    }

    #[test]
    fn garbage_url_is_rejected() {
        assert!(matches!(
            check_image_url("not a url"),
            Err(ImageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn every_catalog_image_is_fetchable() {
        for p in &PRODUCTS {
            assert!(check_image_url(p.image).is_ok(), "{} has a blocked image", p.id);
        }
    }

    #[test]
    fn cache_path_is_per_product() {
        let path = image_cache_path(Path::new("/tmp/cache"), "veg_001");
        assert_eq!(path, Path::new("/tmp/cache/images/veg_001.jpg"));
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("varsha-stores-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("images")).unwrap();
        dir
    }

    #[test]
    fn part_file_sits_next_to_target() {
        let path = image_cache_path(Path::new("/tmp/cache"), "veg_001");
        assert_eq!(part_path(&path), Path::new("/tmp/cache/images/veg_001.jpg.part"));
    }

    #[tokio::test]
    async fn cache_write_leaves_no_part_file() {
        let dir = temp_dir("write");
        let path = image_cache_path(&dir, "oil_001");
        write_cache_file(&path, b"bytes").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
        assert!(!part_path(&path).exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn truncated_file_does_not_block_a_later_good_one() {
        let dir = temp_dir("truncated");
        let mut app = test_app();
        app.load_images = true;
        app.cache_dir = dir.clone();
        let ctx = egui::Context::default();
        let milk = crate::catalog::product_by_id("dairy_001").unwrap();
        let path = image_cache_path(&dir, milk.id);

        std::fs::write(&path, b"").unwrap();
        assert!(app.load_image(&ctx, milk).is_none());
        assert!(!path.exists());

        image::RgbImage::new(4, 4)
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        let texture = app.load_image(&ctx, milk).expect("valid image should load");
        assert_eq!(texture.size(), [4, 4]);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn decoding_garbage_fails() {
        let dir = std::env::temp_dir().join(format!("varsha-stores-img-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.jpg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(decode_image(&path), Err(ImageError::Decode(_))));
        std::fs::remove_dir_all(&dir).ok();
    }
}
