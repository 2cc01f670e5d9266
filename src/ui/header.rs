// SPDX-License-Identifier: MPL-2.0
//! Page header: site title and the panel toggle controls.
//!
//! The header's nav links are the toggle controls of the panel sub-component,
//! so the view emits `panels::Message` directly and the root maps it. In the
//! narrow layout the copyright block is rendered here instead of the footer.

use crate::ui::capabilities::Capabilities;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::panels::{self, PanelId};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub title: &'a str,
    pub active_panel: Option<PanelId>,
    pub capabilities: Capabilities,
    /// Copyright line, present only in the narrow layout.
    pub copyright: Option<&'a str>,
}

/// Render the header.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, panels::Message> {
    let title = Text::new(ctx.title.to_string()).size(typography::TITLE);

    let mut nav = Row::new().spacing(spacing::XS);
    for id in PanelId::ALL {
        nav = nav.push(
            button(Text::new(id.label()).size(typography::BODY))
                .style(styles::button::toggle(ctx.active_panel == Some(id)))
                .padding(ctx.capabilities.control_padding())
                .on_press(panels::Message::Toggle(id)),
        );
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(nav);

    if let Some(line) = ctx.copyright {
        content = content.push(Text::new(line.to_string()).size(typography::SMALL));
    }

    content.into()
}
