// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the scanned gallery, the lightbox and
//! panel sub-components, the preload cache, and the responsive layout, and
//! translates their effects into side effects like image loading. Policy
//! decisions (window sizing, font fallback, key routing) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::{self, SiteContent};
use crate::gallery::{self, GalleryNavigator};
use crate::media::{self, ImageData, PreloadCache};
use crate::ui::capabilities::Capabilities;
use crate::ui::footer;
use crate::ui::lightbox;
use crate::ui::panels;
use iced::{Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Name shown in the window title and the copyright line.
const SITE_TITLE: &str = "Folio";

/// Root Iced application state bridging the page content and the UI
/// sub-components.
pub struct App {
    config: config::Config,
    capabilities: Capabilities,
    content_dir: Option<PathBuf>,
    navigator: GalleryNavigator,
    panels: panels::State,
    panel_texts: HashMap<panels::PanelId, String>,
    lightbox: lightbox::State,
    preload: PreloadCache,
    /// Image shown in the open lightbox, keyed by the index it was loaded
    /// for so stale results cannot overwrite a newer selection.
    current_image: Option<(usize, ImageData)>,
    copyright: String,
    window_width: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_len", &self.navigator.len())
            .field("lightbox", &self.lightbox.phase())
            .field("active_panel", &self.panels.active())
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &config::Config) -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(config.window_width(), config.window_height()),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The configuration is loaded once here; it drives the font choice and
/// window geometry and is then handed to `App::new`.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config = config::load(flags.config_dir.as_deref().map(Path::new)).unwrap_or_default();
    let default_font = if config.font_fallback.unwrap_or(true) {
        iced::Font::DEFAULT
    } else {
        iced::Font::with_name("Source Sans Pro")
    };
    let window = window_settings(&config);

    // Wrap the boot data in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming it once (iced 0.14 requires Fn,
    // not FnOnce)
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .default_font(default_font)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: loads the site content, scans the
    /// gallery, and kicks off background preloads for every thumbnail.
    fn new(flags: Flags, config: config::Config) -> (Self, Task<Message>) {
        let capabilities = Capabilities::from_flags(flags.touch, flags.reduced_motion);

        let site = match content::load(flags.content_dir.as_deref().map(Path::new)) {
            Ok(site) => site,
            Err(err) => {
                eprintln!("Failed to load site content: {err}");
                SiteContent {
                    page: String::new(),
                    content_dir: None,
                }
            }
        };

        let items = gallery::scan_document(&site.page);
        let panel_texts: HashMap<_, _> = panels::PanelId::ALL
            .into_iter()
            .filter_map(|id| content::panel_text(&site.page, id.slug()).map(|text| (id, text)))
            .collect();
        let navigator = GalleryNavigator::new(items);
        let mut lightbox = lightbox::State::new(navigator.len());
        if navigator.is_empty() {
            lightbox.reset();
        }

        let window_width = config.window_width();
        let app = App {
            config,
            capabilities,
            content_dir: site.content_dir,
            navigator,
            panels: panels::State::default(),
            panel_texts,
            lightbox,
            preload: PreloadCache::with_defaults(),
            current_image: None,
            copyright: footer::copyright_line(SITE_TITLE),
            window_width,
        };

        let warmup = app.preload_all_targets();
        (app, warmup)
    }

    fn title(&self) -> String {
        format!("{SITE_TITLE} \u{2014} Folio Lens")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    /// Resolves a gallery link target against the content directory and the
    /// configured site URL / base path.
    fn resolve(&self, target: &str) -> Option<media::ResolvedTarget> {
        media::resolve_target(
            target,
            self.content_dir.as_deref(),
            self.config.base_path.as_deref(),
            self.config.site_url.as_deref(),
        )
    }

    /// Issues preloads for every gallery target so the thumbnail grid and
    /// the first lightbox open hit warm cache entries.
    fn preload_all_targets(&self) -> Task<Message> {
        let tasks: Vec<_> = self
            .navigator
            .items()
            .iter()
            .filter_map(|item| {
                let target = item.target.clone();
                let resolved = self.resolve(&target)?;
                Some(Task::perform(
                    media::load_target(resolved),
                    move |result| Message::Preloaded {
                        target: target.clone(),
                        result,
                    },
                ))
            })
            .collect();
        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_settings_follow_configured_geometry() {
        let config = config::Config {
            window_width: Some(1600),
            window_height: Some(900),
            ..Default::default()
        };
        let settings = window_settings(&config);
        assert_eq!(settings.size, iced::Size::new(1600.0, 900.0));
    }

    #[test]
    fn window_settings_clamp_persisted_geometry() {
        let config = config::Config {
            window_width: Some(10),
            window_height: Some(50_000),
            ..Default::default()
        };
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, config::MIN_WINDOW_WIDTH as f32);
        assert_eq!(settings.size.height, config::MAX_WINDOW_HEIGHT as f32);
    }
}
