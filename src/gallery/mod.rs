// SPDX-License-Identifier: MPL-2.0
//! Gallery item extraction from the portfolio page markup.
//!
//! On startup the page is scanned once for thumbnail anchors following the
//! site convention `#main .thumb > a.image`. The resulting list is fixed
//! for the lifetime of the run; it is not recomputed reactively.

pub mod navigator;

pub use navigator::GalleryNavigator;

use scraper::{ElementRef, Html, Selector};

/// One enlargeable gallery entry: the anchor's link target plus the
/// concatenated outer markup of its sibling nodes as an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Link target of the thumbnail anchor (image URL or relative path).
    pub target: String,
    /// Caption markup, or `None` when the anchor has no sibling elements.
    pub caption: Option<String>,
}

/// Scans the page for thumbnail anchors in document order.
///
/// Anchors without an `href` are skipped. A page without a gallery yields
/// an empty list, which downstream treats as "no lightbox"; it is not an
/// error.
pub fn scan_document(page: &str) -> Vec<GalleryItem> {
    let document = Html::parse_document(page);
    let anchors =
        Selector::parse("#main .thumb > a.image").expect("thumbnail selector must parse");

    document
        .select(&anchors)
        .filter_map(|anchor| {
            let target = anchor.value().attr("href")?;
            Some(GalleryItem {
                target: target.to_string(),
                caption: caption_markup(anchor),
            })
        })
        .collect()
}

/// Extracts the plain text of a caption markup fragment for display.
pub fn caption_text(caption: &str) -> String {
    let fragment = Html::parse_fragment(caption);
    fragment
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Concatenates the outer markup of the anchor's sibling element nodes,
/// excluding the anchor itself.
fn caption_markup(anchor: ElementRef<'_>) -> Option<String> {
    let parent = ElementRef::wrap(anchor.parent()?)?;
    let mut markup = String::new();
    for child in parent.children() {
        if child.id() == anchor.id() {
            continue;
        }
        if let Some(element) = ElementRef::wrap(child) {
            markup.push_str(&element.html());
        }
    }
    if markup.is_empty() {
        None
    } else {
        Some(markup)
    }
}
