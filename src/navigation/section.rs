// SPDX-License-Identifier: MPL-2.0
//! Sub-sections of the role dashboards.
//!
//! Each dashboard shows one section at a time, selected from its sidebar.

use crate::session::Role;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Overview,
    AddDonation,
    MyDonations,
    Inventory,
    Requests,
    Allocations,
    RequestSupplies,
    MyRequests,
}

impl Section {
    /// Fluent key of the sidebar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Overview => "section-overview",
            Section::AddDonation => "section-add-donation",
            Section::MyDonations => "section-my-donations",
            Section::Inventory => "section-inventory",
            Section::Requests => "section-requests",
            Section::Allocations => "section-allocations",
            Section::RequestSupplies => "section-request-supplies",
            Section::MyRequests => "section-my-requests",
        }
    }
}

/// Sections available on a role's dashboard, in sidebar order.
#[must_use]
pub fn sections_for(role: Role) -> &'static [Section] {
    match role {
        Role::Donor => &[Section::Overview, Section::AddDonation, Section::MyDonations],
        Role::Ngo => &[
            Section::Overview,
            Section::Inventory,
            Section::Requests,
            Section::Allocations,
        ],
        Role::Facility => &[
            Section::Overview,
            Section::RequestSupplies,
            Section::MyRequests,
        ],
    }
}

/// Active section of every dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSections {
    donor: Section,
    ngo: Section,
    facility: Section,
}

impl Default for DashboardSections {
    fn default() -> Self {
        Self {
            donor: Section::Overview,
            ngo: Section::Overview,
            facility: Section::Overview,
        }
    }
}

impl DashboardSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self, role: Role) -> Section {
        match role {
            Role::Donor => self.donor,
            Role::Ngo => self.ngo,
            Role::Facility => self.facility,
        }
    }

    /// Shows `section` on the dashboard of `role`.
    ///
    /// Returns `false` without changing anything if the section does not
    /// belong to that dashboard.
    pub fn show(&mut self, role: Role, section: Section) -> bool {
        if !sections_for(role).contains(&section) {
            return false;
        }
        let slot = match role {
            Role::Donor => &mut self.donor,
            Role::Ngo => &mut self.ngo,
            Role::Facility => &mut self.facility,
        };
        *slot = section;
        true
    }
}
