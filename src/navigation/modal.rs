// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs layered above the active page.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalId {
    /// Allocation of an inventory item to a facility (NGO dashboard).
    Allocate,
}

impl ModalId {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ModalId::Allocate => "allocate-modal",
        }
    }
}

impl fmt::Display for ModalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a dialog identifier does not name a known modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModal(pub String);

impl fmt::Display for UnknownModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown modal: {}", self.0)
    }
}

impl std::error::Error for UnknownModal {}

impl FromStr for ModalId {
    type Err = UnknownModal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allocate-modal" => Ok(ModalId::Allocate),
            other => Err(UnknownModal(other.to_string())),
        }
    }
}

/// Open/closed state of the modal dialogs. At most one is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modals {
    open: Option<ModalId>,
}

impl Modals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: ModalId) {
        self.open = Some(id);
    }

    /// Closes `id` if it is the open dialog.
    pub fn close(&mut self, id: ModalId) {
        if self.open == Some(id) {
            self.open = None;
        }
    }

    /// Closes the dialog named `name`; unknown identifiers are ignored.
    pub fn close_by_name(&mut self, name: &str) {
        if let Ok(id) = name.parse() {
            self.close(id);
        }
    }

    #[must_use]
    pub fn is_open(&self, id: ModalId) -> bool {
        self.open == Some(id)
    }

    #[must_use]
    pub fn current(&self) -> Option<ModalId> {
        self.open
    }
}
