// SPDX-License-Identifier: MPL-2.0
//! Responsive placement of the footer copyright block.
//!
//! The original site moves `#footer .copyright` into the header column when
//! a `max-width` media query matches, and back when it stops matching. Here
//! the equivalent signal is the window width, re-evaluated on every resize
//! event.

use crate::config::DEFAULT_BREAKPOINT;

/// Where the copyright block is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyrightPlacement {
    /// Original location at the bottom of the page.
    Footer,
    /// Narrow-layout location inside the header column.
    Header,
}

/// Computes the copyright placement for a window width.
///
/// Widths at or below the breakpoint use the narrow layout.
pub fn copyright_placement(width: f32, breakpoint: f32) -> CopyrightPlacement {
    if width <= breakpoint {
        CopyrightPlacement::Header
    } else {
        CopyrightPlacement::Footer
    }
}

/// Placement under the default breakpoint.
pub fn default_copyright_placement(width: f32) -> CopyrightPlacement {
    copyright_placement(width, DEFAULT_BREAKPOINT)
}
