// SPDX-License-Identifier: MPL-2.0
//! UI components: sub-component state machines, views, and styling.

pub mod capabilities;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod layout;
pub mod lightbox;
pub mod panels;
pub mod styles;
