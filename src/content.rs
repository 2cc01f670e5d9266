// SPDX-License-Identifier: MPL-2.0
//! Access to the portfolio page markup and its assets.
//!
//! A default site is embedded in the binary; passing a content directory on
//! the command line overrides it. The page markup is the document the
//! gallery scanner and the panel controls are wired against, following the
//! site's selector conventions (`#main .thumb > a.image`, `.panel`,
//! `#footer .copyright`).

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use scraper::{Html, Selector};
use std::fs;
use std::path::{Path, PathBuf};

const PAGE_FILE: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "assets/site"]
struct SiteAssets;

/// The portfolio page plus the directory its relative asset targets resolve
/// against (`None` when running from the embedded site).
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub page: String,
    pub content_dir: Option<PathBuf>,
}

/// Loads the page markup from `content_dir`, or the embedded default site
/// when no directory is given.
pub fn load(content_dir: Option<&Path>) -> Result<SiteContent> {
    match content_dir {
        Some(dir) => {
            let page = fs::read_to_string(dir.join(PAGE_FILE))?;
            Ok(SiteContent {
                page,
                content_dir: Some(dir.to_path_buf()),
            })
        }
        None => {
            let file = SiteAssets::get(PAGE_FILE)
                .ok_or_else(|| Error::Content(format!("embedded {PAGE_FILE} missing")))?;
            let page = String::from_utf8(file.data.into_owned())
                .map_err(|e| Error::Content(e.to_string()))?;
            Ok(SiteContent {
                page,
                content_dir: None,
            })
        }
    }
}

/// Extracts the plain text of the panel with the given element id, or
/// `None` when the page has no such panel (that feature is then skipped).
pub fn panel_text(page: &str, slug: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let selector = Selector::parse(&format!("#main .panel#{slug} p")).ok()?;
    let text = document
        .select(&selector)
        .flat_map(|p| p.text())
        .collect::<Vec<_>>()
        .join("\n");
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
