// SPDX-License-Identifier: MPL-2.0
//! Root view: page layout, panel overlay, and lightbox overlay.
//!
//! The page body is wrapped in a `mouse_area` so clicks that no control
//! claims become outside clicks for the panel state. The panel surface and
//! the lightbox region wrap themselves the same way and report inside
//! clicks, which the reducers swallow; only clicks that actually fall
//! through reach the backdrop or the page.

use super::{App, Message};
use crate::gallery::{self, GalleryItem};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer;
use crate::ui::header;
use crate::ui::layout::{self, CopyrightPlacement};
use crate::ui::lightbox;
use crate::ui::panels::{self, PanelId};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, mouse_area, scrollable, Column, Container, Row, Stack, Text};
use iced::{ContentFit, Element, Length};

const GALLERY_COLUMNS: usize = 3;

pub fn view(app: &App) -> Element<'_, Message> {
    let placement = layout::copyright_placement(app.window_width, app.config.breakpoint());

    let header = header::view(header::ViewContext {
        title: super::SITE_TITLE,
        active_panel: app.panels.active(),
        capabilities: app.capabilities,
        copyright: match placement {
            CopyrightPlacement::Header => Some(app.copyright.as_str()),
            CopyrightPlacement::Footer => None,
        },
    })
    .map(Message::Panels);

    let footer: Element<'_, Message> = match placement {
        CopyrightPlacement::Footer => footer::view(&app.copyright),
        CopyrightPlacement::Header => footer::view_empty(),
    };

    let page = Column::new()
        .push(header)
        .push(scrollable(view_gallery(app)).height(Length::Fill))
        .push(footer)
        .width(Length::Fill)
        .height(Length::Fill);

    // Clicks that reach the page background count as outside clicks for
    // the panel state.
    let page = mouse_area(page).on_press(Message::Panels(panels::Message::OutsideClick));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(active) = app.panels.active() {
        layers = layers.push(view_panel(app, active));
    }

    if app.lightbox.is_open() {
        layers = layers.push(view_lightbox(app));
    }

    layers.into()
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    if app.navigator.is_empty() {
        return Container::new(Text::new("No gallery items found").size(typography::BODY))
            .padding(spacing::XL)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into();
    }

    let mut grid = Column::new().spacing(spacing::MD).padding(spacing::LG);
    let mut row = Row::new().spacing(spacing::MD);
    let mut filled = 0;

    for (index, item) in app.navigator.items().iter().enumerate() {
        row = row.push(view_thumb(app, index, item));
        filled += 1;
        if filled == GALLERY_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
            filled = 0;
        }
    }
    if filled > 0 {
        grid = grid.push(row);
    }

    Container::new(grid).width(Length::Fill).center_x(Length::Fill).into()
}

fn view_thumb<'a>(app: &'a App, index: usize, item: &'a GalleryItem) -> Element<'a, Message> {
    let content: Element<'_, Message> = match app.preload.peek(&item.target) {
        Some(cached) => image(cached.handle.clone())
            .width(sizing::THUMB)
            .height(sizing::THUMB)
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            let label = item
                .caption
                .as_deref()
                .map(gallery::caption_text)
                .unwrap_or_else(|| item.target.clone());
            Container::new(Text::new(label).size(typography::SMALL))
                .style(styles::container::thumb_placeholder)
                .width(sizing::THUMB)
                .height(sizing::THUMB)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .padding(spacing::SM)
                .into()
        }
    };

    button(content)
        .style(styles::button::thumb)
        .padding(spacing::XXS)
        .on_press(Message::Lightbox(lightbox::Message::Open(index)))
        .into()
}

/// Overlay layer for the active panel, anchored to the top-right corner
/// under its toggle controls.
fn view_panel(app: &App, active: PanelId) -> Element<'_, Message> {
    let body = app
        .panel_texts
        .get(&active)
        .map(String::as_str)
        .unwrap_or("Nothing here yet.");

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new(active.label()).size(typography::HEADING))
        .push(Text::new(body.to_string()).size(typography::BODY))
        .push(
            button(Text::new("Close").size(typography::SMALL))
                .style(styles::button::overlay)
                .padding(app.capabilities.control_padding())
                .on_press(Message::Panels(panels::Message::Close(active))),
        );

    let surface = Container::new(content)
        .style(styles::container::panel)
        .width(sizing::PANEL_WIDTH);

    // Clicks on the panel surface must not bubble into outside-click
    // handling.
    let surface = mouse_area(surface).on_press(Message::Panels(panels::Message::InsideClick));

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

/// Overlay layer for the open lightbox: dimmed backdrop, the current item's
/// media and caption, and the navigation controls.
fn view_lightbox(app: &App) -> Element<'_, Message> {
    let Some(index) = app.lightbox.current_index() else {
        return iced::widget::Space::new().into();
    };

    let media_view: Element<'_, Message> = match &app.current_image {
        Some((loaded_index, data)) if *loaded_index == index && !app.lightbox.is_loading() => {
            image(data.handle.clone())
                .width(Length::Shrink)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into()
        }
        _ => {
            let label = if app.lightbox.is_loading() {
                "Loading\u{2026}"
            } else {
                "Image unavailable"
            };
            Container::new(Text::new(label).size(typography::BODY))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .into()
        }
    };

    let pad = app.capabilities.control_padding();
    let prev = button(Text::new("\u{25c0}").size(typography::BODY))
        .style(styles::button::overlay)
        .padding(pad)
        .on_press(Message::Lightbox(lightbox::Message::Previous));
    let next = button(Text::new("\u{25b6}").size(typography::BODY))
        .style(styles::button::overlay)
        .padding(pad)
        .on_press(Message::Lightbox(lightbox::Message::Next));
    let close = button(Text::new("\u{2715}").size(typography::BODY))
        .style(styles::button::overlay)
        .padding(pad)
        .on_press(Message::Lightbox(lightbox::Message::Close));

    let caption = app
        .navigator
        .item(index)
        .and_then(|item| item.caption.as_deref())
        .map(gallery::caption_text)
        .unwrap_or_default();

    let mut meta = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill);
    if !caption.is_empty() {
        meta = meta.push(Text::new(caption).size(typography::BODY));
    }
    meta = meta.push(
        Text::new(format!("{} / {}", index + 1, app.navigator.len())).size(typography::SMALL),
    );

    let controls = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(prev)
        .push(meta)
        .push(next)
        .push(close);

    let region = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(media_view)
            .push(controls),
    )
    .style(styles::container::panel)
    .padding(spacing::LG)
    .max_width(sizing::LIGHTBOX_MAX_WIDTH)
    .height(Length::Fill);

    // The interactive region claims its clicks so only true backdrop
    // clicks close the overlay.
    let region = mouse_area(region).on_press(Message::Lightbox(lightbox::Message::InsideClick));

    let backdrop_style = if app.capabilities.reduced_motion {
        styles::container::backdrop_solid
    } else {
        styles::container::backdrop
    };

    mouse_area(
        Container::new(region)
            .style(backdrop_style)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(Message::Lightbox(lightbox::Message::Close))
    .into()
}
