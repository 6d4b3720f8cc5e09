// SPDX-License-Identifier: MPL-2.0
//! Signed-in user, selected role and navigation bookkeeping.
//!
//! The session is an explicit context object handed to the navigator and
//! the form handlers instead of living in process-wide globals, so every
//! navigation rule can be exercised from a plain unit test.

use crate::navigation::ViewId;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Participant category that governs default navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Donor,
    Ngo,
    Facility,
}

impl Role {
    /// All roles, in the order the landing page presents them.
    pub const ALL: [Role; 3] = [Role::Donor, Role::Ngo, Role::Facility];

    /// Dashboard view owned by this role.
    #[must_use]
    pub fn dashboard(self) -> ViewId {
        match self {
            Role::Donor => ViewId::DonorDashboard,
            Role::Ngo => ViewId::NgoDashboard,
            Role::Facility => ViewId::FacilityDashboard,
        }
    }

    /// Stable identifier used in view names and config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Ngo => "ngo",
            Role::Facility => "facility",
        }
    }

    /// Fluent key of the human readable role label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Role::Donor => "role-donor",
            Role::Ngo => "role-ngo",
            Role::Facility => "role-facility",
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role name does not match any known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Role::Donor),
            "ngo" => Ok(Role::Ngo),
            "facility" => Ok(Role::Facility),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The (simulated) authenticated user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Mutable per-process session record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Currently signed-in user, if any.
    pub user: Option<User>,
    /// Role chosen on the landing page, at login or at registration.
    pub role: Option<Role>,
    /// View that was active immediately before the last switch.
    pub last_view: Option<ViewId>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful login or registration.
    pub fn sign_in(&mut self, user: User, role: Role) {
        self.user = Some(user);
        self.role = Some(role);
    }

    /// Resets the session to its empty state (logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
