// SPDX-License-Identifier: MPL-2.0
//! Enumeration of the mutually exclusive pages of the interface.

use crate::session::Role;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Pages the user can navigate between. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Landing,
    Login,
    Register,
    DonorDashboard,
    NgoDashboard,
    FacilityDashboard,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Landing,
        ViewId::Login,
        ViewId::Register,
        ViewId::DonorDashboard,
        ViewId::NgoDashboard,
        ViewId::FacilityDashboard,
    ];

    /// Page shown at startup and after logout.
    pub const LANDING: ViewId = ViewId::Landing;

    /// Element identifier of the page.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewId::Landing => "landing-page",
            ViewId::Login => "login-page",
            ViewId::Register => "register-page",
            ViewId::DonorDashboard => "donor-dashboard",
            ViewId::NgoDashboard => "ngo-dashboard",
            ViewId::FacilityDashboard => "facility-dashboard",
        }
    }

    #[must_use]
    pub fn is_dashboard(self) -> bool {
        self.dashboard_role().is_some()
    }

    /// Role whose dashboard this page is.
    #[must_use]
    pub fn dashboard_role(self) -> Option<Role> {
        match self {
            ViewId::DonorDashboard => Some(Role::Donor),
            ViewId::NgoDashboard => Some(Role::Ngo),
            ViewId::FacilityDashboard => Some(Role::Facility),
            ViewId::Landing | ViewId::Login | ViewId::Register => None,
        }
    }
}

impl Serialize for ViewId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a page name does not resolve to a known view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.name() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_parse_back() {
        for view in ViewId::ALL {
            assert_eq!(view.name().parse::<ViewId>(), Ok(view));
        }
        let mut names: Vec<_> = ViewId::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ViewId::ALL.len());
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "settings-page".parse::<ViewId>(),
            Err(UnknownView("settings-page".to_string()))
        );
    }

    #[test]
    fn only_role_pages_are_dashboards() {
        let dashboards: Vec<_> = ViewId::ALL.into_iter().filter(|v| v.is_dashboard()).collect();
        assert_eq!(
            dashboards,
            vec![
                ViewId::DonorDashboard,
                ViewId::NgoDashboard,
                ViewId::FacilityDashboard
            ]
        );
    }

    #[test]
    fn dashboard_role_inverts_role_dashboard() {
        for role in Role::ALL {
            assert_eq!(role.dashboard().dashboard_role(), Some(role));
        }
        assert_eq!(ViewId::Register.dashboard_role(), None);
    }
}
