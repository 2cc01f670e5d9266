// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width at or below which the narrow layout is used (logical pixels).
///
/// Matches the `max-width: 980px` media query of the original site styles.
pub const DEFAULT_BREAKPOINT: f32 = 980.0;

/// Minimum allowed layout breakpoint.
pub const MIN_BREAKPOINT: f32 = 320.0;

/// Maximum allowed layout breakpoint.
pub const MAX_BREAKPOINT: f32 = 1920.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width on startup.
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;

/// Default window height on startup.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Maximum window width (8K display).
pub const MAX_WINDOW_WIDTH: u32 = 7680;

/// Maximum window height (8K display).
pub const MAX_WINDOW_HEIGHT: u32 = 4320;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_BREAKPOINT > 0.0);
    assert!(MAX_BREAKPOINT > MIN_BREAKPOINT);
    assert!(DEFAULT_BREAKPOINT >= MIN_BREAKPOINT);
    assert!(DEFAULT_BREAKPOINT <= MAX_BREAKPOINT);

    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(MAX_WINDOW_WIDTH > MIN_WINDOW_WIDTH);
    assert!(MAX_WINDOW_HEIGHT > MIN_WINDOW_HEIGHT);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(WINDOW_DEFAULT_WIDTH <= MAX_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT <= MAX_WINDOW_HEIGHT);
};
