// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window resize events into the responsive layout and
//! keyboard events into the key routing of the update loop. Key presses
//! already captured by a focused widget are not forwarded.

use super::Message;
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match &event {
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::KeyPressed(key.clone())),
            event::Status::Captured => None,
        },
        _ => None,
    })
}
