// SPDX-License-Identifier: MPL-2.0
//! Input capability detection, passed explicitly into the UI.
//!
//! The legacy site sniffed features through an ambient global at page load.
//! Here the equivalent facts are gathered once at startup into a value that
//! components receive through their view contexts, so nothing reads
//! environment state behind the UI's back.

/// Input-related capabilities of the current session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// Primary input is touch; controls get larger hit targets.
    pub touch: bool,
    /// The user asked for reduced motion; decorative transitions are
    /// replaced with immediate state changes.
    pub reduced_motion: bool,
}

impl Capabilities {
    /// Builds capabilities from launcher flags.
    pub fn from_flags(touch: bool, reduced_motion: bool) -> Self {
        Self {
            touch,
            reduced_motion,
        }
    }

    /// Padding for tappable controls, widened on touch sessions.
    pub fn control_padding(&self) -> f32 {
        if self.touch {
            16.0
        } else {
            8.0
        }
    }
}
