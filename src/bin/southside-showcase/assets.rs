//! Asset embedding and loading: the content document plus the media
//! library that decodes images on background threads and turns them into
//! egui textures as they become ready.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use rust_embed::RustEmbed;
use southside_showcase::SiteContent;
use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use thiserror::Error;

/// Embeds everything under `assets/` into the binary. In debug mode the
/// files are read from disk for faster iteration; in release mode they
/// are compressed into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const CONTENT_PATH: &str = "content.ron";

/// Errors that can occur when loading the content document.
#[derive(Error, Debug)]
pub enum ContentLoadError {
    #[error("content.ron not found in embedded assets")]
    NotFound,
    #[error("invalid UTF-8 in content.ron: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("failed to parse content.ron: {0}")]
    Parse(#[from] ron::de::SpannedError),
}

/// Errors that can occur when loading and decoding media.
#[derive(Error, Debug)]
pub enum ImageLoadError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("failed to decode image '{path}': {source}")]
    DecodeError {
        path: String,
        source: image::ImageError,
    },
}

/// Decoded RGBA pixels ready for texture creation.
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// State of one media asset.
enum AssetLoadState {
    /// Decoding on a background thread.
    Loading(mpsc::Receiver<Result<DecodedImage, ImageLoadError>>),
    /// Decoded, texture not created yet.
    Ready(DecodedImage),
    /// Load or decode failed; the section paints a placeholder instead.
    Failed,
}

/// Loads the content document from embedded assets.
pub fn load_content() -> Result<SiteContent, ContentLoadError> {
    let file = Assets::get(CONTENT_PATH).ok_or(ContentLoadError::NotFound)?;
    let text = std::str::from_utf8(&file.data)?;
    parse_content(text)
}

/// Parses a content document; also used by the content watcher, which
/// reads the file straight from disk.
pub fn parse_content(text: &str) -> Result<SiteContent, ContentLoadError> {
    Ok(ron::from_str(text)?)
}

/// Loads and decodes an image from embedded assets.
fn load_and_decode_image(path: &str) -> Result<DecodedImage, ImageLoadError> {
    let file = Assets::get(path).ok_or_else(|| ImageLoadError::AssetNotFound(path.to_string()))?;

    let img =
        image::load_from_memory(&file.data).map_err(|source| ImageLoadError::DecodeError {
            path: path.to_string(),
            source,
        })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// All media the page references, keyed by asset path. Missing or broken
/// media never raises UI errors; the owning section falls back to a
/// placeholder fill.
#[derive(Default)]
pub struct MediaLibrary {
    states: HashMap<String, AssetLoadState>,
    textures: HashMap<String, TextureHandle>,
}

impl MediaLibrary {
    /// Starts background decodes for every media asset in `content`.
    pub fn preload(content: &SiteContent, ctx: &egui::Context) -> Self {
        let mut library = Self::default();
        library.queue_missing(content, ctx);
        library
    }

    /// Queues decodes for assets not already known; used on first load
    /// and again after a content reload introduces new references.
    pub fn queue_missing(&mut self, content: &SiteContent, ctx: &egui::Context) {
        for media in content.media() {
            if self.states.contains_key(&media.path) {
                continue;
            }

            let (tx, rx) = mpsc::channel();
            let path = media.path.clone();
            let ctx = ctx.clone();

            thread::spawn(move || {
                let result = load_and_decode_image(&path);
                let _ = tx.send(result);
                ctx.request_repaint();
            });

            self.states
                .insert(media.path.clone(), AssetLoadState::Loading(rx));
        }
    }

    /// Polls loading assets and creates textures for ready ones. Called
    /// once per frame before the sections draw.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut updates: Vec<(String, AssetLoadState)> = Vec::new();

        for (path, state) in &mut self.states {
            if let AssetLoadState::Loading(rx) = state {
                match rx.try_recv() {
                    Ok(Ok(decoded)) => {
                        updates.push((path.clone(), AssetLoadState::Ready(decoded)));
                    }
                    Ok(Err(err)) => {
                        log::warn!("media unavailable, using placeholder: {err}");
                        updates.push((path.clone(), AssetLoadState::Failed));
                    }
                    Err(mpsc::TryRecvError::Disconnected) => {
                        log::warn!("media decode thread vanished for {path}");
                        updates.push((path.clone(), AssetLoadState::Failed));
                    }
                    Err(mpsc::TryRecvError::Empty) => {}
                }
            }
        }

        for (path, state) in updates {
            self.states.insert(path, state);
        }

        let ready_paths: Vec<String> = self
            .states
            .iter()
            .filter(|(path, state)| {
                matches!(state, AssetLoadState::Ready(_)) && !self.textures.contains_key(*path)
            })
            .map(|(path, _)| path.clone())
            .collect();

        for path in ready_paths {
            if let Some(AssetLoadState::Ready(decoded)) = self.states.get(&path) {
                let image = ColorImage::from_rgba_unmultiplied(
                    [decoded.width as usize, decoded.height as usize],
                    &decoded.pixels,
                );
                let texture = ctx.load_texture(&path, image, TextureOptions::LINEAR);
                self.textures.insert(path, texture);
            }
        }
    }

    pub fn texture(&self, path: &str) -> Option<&TextureHandle> {
        self.textures.get(path)
    }

    /// True while any asset is still decoding; drives repaint requests.
    pub fn loading(&self) -> bool {
        self.states
            .values()
            .any(|state| matches!(state, AssetLoadState::Loading(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = load_content().expect("embedded content.ron must parse");
        assert!(!content.nav.is_empty());
        assert_eq!(content.floor_plan.stages.len(), 3);
        assert!(content.floor_plan.stage("stage-02").is_some());
    }

    #[test]
    fn embedded_content_is_consistent() {
        let content = load_content().unwrap();

        // Stage boxes sit inside the plan bounds
        let plan = content.floor_plan.bounds;
        for stage in &content.floor_plan.stages {
            let [x, y, w, h] = stage.bounds;
            assert!(x >= plan[0] && y >= plan[1], "{} outside plan", stage.id);
            assert!(
                x + w <= plan[0] + plan[2] && y + h <= plan[1] + plan[3],
                "{} outside plan",
                stage.id
            );
        }

        // Media paths are unique so the texture cache cannot collide
        let media = content.media();
        let mut paths: Vec<&str> = media.iter().map(|m| m.path.as_str()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), media.len(), "duplicate media path");
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(matches!(
            parse_content("SiteContent(nope"),
            Err(ContentLoadError::Parse(_))
        ));
    }
}
