// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::lightbox;
use crate::ui::panels;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Panels(panels::Message),
    Lightbox(lightbox::Message),
    /// Result of loading the image shown in the lightbox.
    ImageLoaded {
        index: usize,
        target: String,
        result: Result<ImageData, Error>,
    },
    /// Result of a background preload (thumbnails and lightbox neighbors).
    Preloaded {
        target: String,
        result: Result<ImageData, Error>,
    },
    /// A key press not captured by any widget.
    KeyPressed(iced::keyboard::Key),
    /// The window was resized; drives the responsive layout.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional content directory overriding the embedded site.
    pub content_dir: Option<String>,
    /// Primary input is touch.
    pub touch: bool,
    /// Prefer reduced motion.
    pub reduced_motion: bool,
}
