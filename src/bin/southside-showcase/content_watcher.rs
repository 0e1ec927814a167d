//! Live-reload watcher for the content document. Opt-in via
//! `--watch-content`: edits to `assets/content.ron` are parsed off the UI
//! thread and handed to the app on the next frame.

use crate::assets;
use eframe::egui;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use southside_showcase::SiteContent;
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

pub struct ContentWatcher {
    content_rx: Receiver<SiteContent>,
    /// The watcher must be kept alive for events to fire
    _watcher: RecommendedWatcher,
}

impl ContentWatcher {
    /// Returns `None` if the on-disk content document cannot be found or
    /// watching fails (e.g. running from an installed binary).
    pub fn new(ctx: egui::Context) -> Option<Self> {
        let content_path = Self::content_path();

        if !content_path.exists() {
            log::warn!(
                "content document not on disk, live reload disabled: {}",
                content_path.display()
            );
            return None;
        }

        let (content_tx, content_rx) = mpsc::channel();

        let watched = content_path.clone();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            // Editors save as modify or as remove+create
            if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                return;
            }

            let text = match fs::read_to_string(&watched) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("failed to re-read content document: {err}");
                    return;
                }
            };

            match assets::parse_content(&text) {
                Ok(content) => {
                    log::info!("content document reloaded");
                    let _ = content_tx.send(content);
                    ctx.request_repaint();
                }
                // Mid-save states are expected while editing; keep the
                // last good revision
                Err(err) => log::warn!("content document not reloaded: {err}"),
            }
        })
        .ok()?;

        watcher
            .watch(&content_path, RecursiveMode::NonRecursive)
            .ok()?;

        log::info!("watching content document: {}", content_path.display());

        Some(Self {
            content_rx,
            _watcher: watcher,
        })
    }

    fn content_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("content.ron")
    }

    /// Newest parsed revision since the last poll, if any.
    pub fn poll(&mut self) -> Option<SiteContent> {
        let mut latest = None;
        loop {
            match self.content_rx.try_recv() {
                Ok(content) => latest = Some(content),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("content watcher channel disconnected");
                    break;
                }
            }
        }
        latest
    }
}
