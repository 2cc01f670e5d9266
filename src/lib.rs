// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a desktop viewer for a portfolio site built with the
//! Iced GUI framework.
//!
//! It scans the site's page markup for gallery thumbnails, presents them in
//! a grid with a lightbox overlay for full-size viewing, and mirrors the
//! site's collapsible content panels and responsive copyright placement.

#![doc(html_root_url = "https://docs.rs/folio_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
