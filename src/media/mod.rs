// SPDX-License-Identifier: MPL-2.0
//! Image loading for the lightbox and thumbnail grid.
//!
//! Decoding runs off the UI thread via `spawn_blocking`; remote targets are
//! fetched with reqwest. Load failure and success are equivalent for the
//! purpose of clearing the lightbox loading state, so callers treat the
//! returned `Result` as a completion signal either way.

pub mod preload;

pub use preload::PreloadCache;

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl ImageData {
    /// Wraps raw RGBA pixels in a display handle.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        }
    }

    /// Size of the decoded pixels in bytes (RGBA).
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Where a gallery link target points after resolution against the site
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    File(PathBuf),
    Url(String),
}

/// Resolves a gallery link target.
///
/// Absolute `http(s)` targets pass through. Relative targets resolve under
/// the content directory (plus the configured base path) when one is set,
/// otherwise against the site URL. Returns `None` when a relative target
/// has nothing to resolve against.
pub fn resolve_target(
    target: &str,
    content_dir: Option<&Path>,
    base_path: Option<&str>,
    site_url: Option<&str>,
) -> Option<ResolvedTarget> {
    if target.starts_with("http://") || target.starts_with("https://") {
        return Some(ResolvedTarget::Url(target.to_string()));
    }

    let relative = target.trim_start_matches('/');
    let prefix = base_path.map(|p| p.trim_matches('/')).unwrap_or("");

    if let Some(dir) = content_dir {
        let mut path = dir.to_path_buf();
        if !prefix.is_empty() {
            path.push(prefix);
        }
        path.push(relative);
        return Some(ResolvedTarget::File(path));
    }

    site_url.map(|url| {
        let mut url = url.trim_end_matches('/').to_string();
        if !prefix.is_empty() {
            url.push('/');
            url.push_str(prefix);
        }
        url.push('/');
        url.push_str(relative);
        ResolvedTarget::Url(url)
    })
}

/// Loads and decodes the image behind a resolved target.
pub async fn load_target(target: ResolvedTarget) -> Result<ImageData> {
    let bytes = match target {
        ResolvedTarget::File(path) => {
            tokio::task::spawn_blocking(move || std::fs::read(&path))
                .await
                .map_err(|e| Error::Io(format!("load task failed: {e}")))??
        }
        ResolvedTarget::Url(url) => reqwest::get(&url)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec(),
    };

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Image(format!("decode task failed: {e}")))?
}

fn decode(bytes: &[u8]) -> Result<ImageData> {
    let image = image_rs::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    Ok(ImageData::from_rgba(width, height, image.into_raw()))
}
