// SPDX-License-Identifier: MPL-2.0
//! Page footer and the copyright block it normally hosts.

use crate::ui::design_tokens::{spacing, typography};
use chrono::Datelike;
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Builds the copyright line with the current year.
pub fn copyright_line(holder: &str) -> String {
    format!(
        "\u{a9} {} {holder}. All rights reserved.",
        chrono::Local::now().year()
    )
}

/// Render the footer with the copyright block in its original location.
pub fn view<M: 'static>(copyright: &str) -> Element<'_, M> {
    Container::new(Text::new(copyright.to_string()).size(typography::SMALL))
        .padding(spacing::LG)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

/// Render the footer without the copyright block (narrow layout).
pub fn view_empty<M: 'static>() -> Element<'static, M> {
    Container::new(iced::widget::Space::new())
        .padding(spacing::XS)
        .width(Length::Fill)
        .into()
}
