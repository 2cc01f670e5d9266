// SPDX-License-Identifier: MPL-2.0
//! Exclusive panel toggler sub-component.
//!
//! Each panel is identified by a `PanelId`; toggle controls reference a
//! panel by that identifier. At most one panel is active at a time, which
//! this module enforces by construction: the shared state is a single
//! `Option<PanelId>` rather than per-panel flags. Activating a panel marks
//! the page body "content active"; outside clicks and Escape deactivate
//! whatever is open.

/// Identifier of a collapsible panel on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Intro,
    Work,
    About,
    Contact,
}

impl PanelId {
    /// All panels, in page order.
    pub const ALL: [PanelId; 4] = [
        PanelId::Intro,
        PanelId::Work,
        PanelId::About,
        PanelId::Contact,
    ];

    /// Label shown on the panel's toggle control.
    pub fn label(self) -> &'static str {
        match self {
            PanelId::Intro => "Intro",
            PanelId::Work => "Work",
            PanelId::About => "About",
            PanelId::Contact => "Contact",
        }
    }

    /// Element id of the panel in the page markup.
    pub fn slug(self) -> &'static str {
        match self {
            PanelId::Intro => "intro",
            PanelId::Work => "work",
            PanelId::About => "about",
            PanelId::Contact => "contact",
        }
    }
}

/// Panel toggler state.
#[derive(Debug, Clone, Default)]
pub struct State {
    active: Option<PanelId>,
}

/// Messages for the panel sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A toggle control referencing this panel was clicked.
    Toggle(PanelId),
    /// A panel's close control was clicked.
    Close(PanelId),
    /// A click landed outside every panel.
    OutsideClick,
    /// A click landed inside a panel; swallowed so it never reaches the
    /// outside-click handling.
    InsideClick,
    /// Escape was pressed with no overlay open.
    Escape,
}

/// Effects produced by panel changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect: no state changed, nothing to mark on the body.
    None,
    /// The body's "content active" marker changed.
    ContentActive(bool),
}

impl State {
    /// Handle a panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle(id) => {
                if self.active == Some(id) {
                    self.active = None;
                    Effect::ContentActive(false)
                } else {
                    // Any other active panel is deactivated first.
                    self.active = Some(id);
                    Effect::ContentActive(true)
                }
            }
            Message::Close(id) => {
                if self.active == Some(id) {
                    self.active = None;
                    Effect::ContentActive(false)
                } else {
                    Effect::None
                }
            }
            Message::OutsideClick | Message::Escape => {
                if self.active.is_some() {
                    self.active = None;
                    Effect::ContentActive(false)
                } else {
                    Effect::None
                }
            }
            Message::InsideClick => Effect::None,
        }
    }

    /// The active panel, if any.
    pub fn active(&self) -> Option<PanelId> {
        self.active
    }

    /// Whether `id` is the active panel.
    pub fn is_active(&self, id: PanelId) -> bool {
        self.active == Some(id)
    }

    /// Whether any panel is active (the body carries the "content active"
    /// marker exactly then).
    pub fn any_active(&self) -> bool {
        self.active.is_some()
    }
}
