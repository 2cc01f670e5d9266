// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay sub-component.
//!
//! The overlay moves between three phases: closed, open and loading, open
//! and loaded. Opening a thumbnail records the clicked index and starts
//! loading; the load completing (successfully or not) clears the loading
//! flag; navigating while open re-enters the loading phase at the
//! wrapped-around index. Escape, the closer control, and backdrop clicks
//! all close the overlay from any phase.
//!
//! Index arithmetic wraps modulo the item count, so the selected index is
//! always within bounds of the fixed gallery list.

/// Phase of the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Open { index: usize, loading: bool },
}

/// Lightbox overlay state over a gallery of `item_count` entries.
#[derive(Debug, Clone)]
pub struct State {
    item_count: usize,
    phase: Phase,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A gallery thumbnail was activated.
    Open(usize),
    /// Navigate to the next item while open.
    Next,
    /// Navigate to the previous item while open.
    Previous,
    /// The target image signalled load or error; both clear the loading flag.
    LoadFinished,
    /// A click landed inside the interactive region; swallowed so it never
    /// reaches the backdrop close handling.
    InsideClick,
    /// Escape, the closer control, or a backdrop click.
    Close,
}

/// Effects produced by lightbox transitions, consumed by the root update
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Overlay opened at `index`: set the modal marker and load the target.
    Opened { index: usize },
    /// Active item changed while open: load the new target.
    Navigated { index: usize },
    /// Overlay closed: clear the modal marker.
    Closed,
}

impl State {
    /// Creates a closed lightbox over a gallery of `item_count` entries.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            phase: Phase::Closed,
        }
    }

    /// Handle a lightbox message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open(index) => {
                if self.item_count == 0 {
                    return Effect::None;
                }
                let index = index % self.item_count;
                self.phase = Phase::Open {
                    index,
                    loading: true,
                };
                Effect::Opened { index }
            }
            Message::Next => self.navigate(1),
            Message::Previous => self.navigate(self.item_count.saturating_sub(1)),
            Message::LoadFinished => {
                if let Phase::Open { index, loading: true } = self.phase {
                    self.phase = Phase::Open {
                        index,
                        loading: false,
                    };
                }
                Effect::None
            }
            Message::InsideClick => Effect::None,
            Message::Close => {
                if matches!(self.phase, Phase::Open { .. }) {
                    self.phase = Phase::Closed;
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
        }
    }

    fn navigate(&mut self, step: usize) -> Effect {
        match self.phase {
            Phase::Open { index, .. } if self.item_count > 0 => {
                let index = (index + step) % self.item_count;
                self.phase = Phase::Open {
                    index,
                    loading: true,
                };
                Effect::Navigated { index }
            }
            _ => Effect::None,
        }
    }

    /// Resets to closed. Used when the gallery list is empty or the page is
    /// torn down, so no stale load result can mutate the overlay afterwards.
    pub fn reset(&mut self) {
        self.phase = Phase::Closed;
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the overlay is open in either loading or loaded phase.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Whether the overlay is open and still waiting on the target image.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Open { loading: true, .. })
    }

    /// The selected index while open.
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Open { index, .. } => Some(index),
            Phase::Closed => None,
        }
    }
}
