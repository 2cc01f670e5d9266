// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Sub-component reducers run first; the effects they return are translated
//! here into side effects (image loads, neighbor preloads). Keyboard
//! routing lives here too: Escape goes to the lightbox while it is open and
//! to the panels otherwise, so closing the overlay never also closes a
//! panel.

use super::{App, Message};
use crate::media;
use crate::ui::lightbox;
use crate::ui::panels;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Panels(msg) => {
            // ContentActive is fully reflected by the panel state itself;
            // the view derives the body marker from `any_active`.
            let _ = app.panels.handle(msg);
            Task::none()
        }
        Message::Lightbox(msg) => {
            let effect = app.lightbox.handle(msg);
            apply_lightbox_effect(app, msg, effect)
        }
        Message::ImageLoaded {
            index,
            target,
            result,
        } => handle_image_loaded(app, index, target, result),
        Message::Preloaded { target, result } => {
            match result {
                Ok(image) => {
                    app.preload.insert(target, image);
                }
                Err(err) => eprintln!("Failed to preload {target}: {err}"),
            }
            Task::none()
        }
        Message::KeyPressed(key) => handle_key(app, key),
        Message::WindowResized(size) => {
            app.window_width = size.width;
            Task::none()
        }
    }
}

/// Translates lightbox effects into image loads and preloads.
///
/// The navigator steps alongside the overlay: wraparound navigation goes
/// through `next`/`previous`, opening a thumbnail through `set_current`, so
/// both always report the same selection.
fn apply_lightbox_effect(
    app: &mut App,
    msg: lightbox::Message,
    effect: lightbox::Effect,
) -> Task<Message> {
    match effect {
        lightbox::Effect::Opened { index } | lightbox::Effect::Navigated { index } => {
            match msg {
                lightbox::Message::Next => app.navigator.next(),
                lightbox::Message::Previous => app.navigator.previous(),
                _ => app.navigator.set_current(index),
            };
            app.current_image = None;
            load_active_item(app, index)
        }
        lightbox::Effect::Closed => {
            app.current_image = None;
            Task::none()
        }
        lightbox::Effect::None => Task::none(),
    }
}

/// Loads the target of the newly active item and preloads its neighbors.
///
/// The neighbor preloads are issued independently of the visible image so
/// that navigating to an adjacent item finds a warm cache entry instead of
/// flashing an empty frame.
fn load_active_item(app: &mut App, index: usize) -> Task<Message> {
    let mut tasks = Vec::new();

    if let Some(item) = app.navigator.item(index) {
        let target = item.target.clone();
        if let Some(image) = app.preload.get(&target) {
            app.current_image = Some((index, image));
            let _ = app.lightbox.handle(lightbox::Message::LoadFinished);
        } else if let Some(resolved) = app.resolve(&target) {
            tasks.push(Task::perform(
                media::load_target(resolved),
                move |result| Message::ImageLoaded {
                    index,
                    target: target.clone(),
                    result,
                },
            ));
        } else {
            // Nothing to resolve the target against; show the broken state
            // rather than spinning forever.
            let _ = app.lightbox.handle(lightbox::Message::LoadFinished);
        }
    }

    let count = app.navigator.len();
    if count > 1 {
        let neighbors = [(index + 1) % count, (index + count - 1) % count];
        for neighbor in neighbors {
            if neighbor == index {
                continue;
            }
            let Some(item) = app.navigator.item(neighbor) else {
                continue;
            };
            let target = item.target.clone();
            if app.preload.contains(&target) {
                continue;
            }
            if let Some(resolved) = app.resolve(&target) {
                tasks.push(Task::perform(
                    media::load_target(resolved),
                    move |result| Message::Preloaded {
                        target: target.clone(),
                        result,
                    },
                ));
            }
        }
    }

    Task::batch(tasks)
}

fn handle_image_loaded(
    app: &mut App,
    index: usize,
    target: String,
    result: Result<media::ImageData, crate::error::Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            app.preload.insert(target, image.clone());
            if app.lightbox.current_index() == Some(index) {
                app.current_image = Some((index, image));
            }
        }
        Err(err) => eprintln!("Failed to load {target}: {err}"),
    }

    // Load and error are the same completion signal: both clear the
    // loading indicator. A result arriving after the selection moved on
    // (or the overlay closed) only warms the cache.
    if app.lightbox.current_index() == Some(index) {
        let _ = app.lightbox.handle(lightbox::Message::LoadFinished);
    }
    Task::none()
}

fn handle_key(app: &mut App, key: Key) -> Task<Message> {
    match key {
        Key::Named(Named::Escape) => {
            if app.lightbox.is_open() {
                let effect = app.lightbox.handle(lightbox::Message::Close);
                apply_lightbox_effect(app, lightbox::Message::Close, effect)
            } else {
                let _ = app.panels.handle(panels::Message::Escape);
                Task::none()
            }
        }
        Key::Named(Named::ArrowRight) if app.lightbox.is_open() => {
            let effect = app.lightbox.handle(lightbox::Message::Next);
            apply_lightbox_effect(app, lightbox::Message::Next, effect)
        }
        Key::Named(Named::ArrowLeft) if app.lightbox.is_open() => {
            let effect = app.lightbox.handle(lightbox::Message::Previous);
            apply_lightbox_effect(app, lightbox::Message::Previous, effect)
        }
        _ => Task::none(),
    }
}
