// SPDX-License-Identifier: MPL-2.0
//! Page, dashboard section and modal navigation.
//!
//! # Components
//!
//! - [`ViewId`] - the closed set of pages
//! - [`Navigator`] - single active page, "back" resolution, role selection
//! - [`DashboardSections`] - active sidebar section per dashboard
//! - [`Modals`] - dialogs layered over the active page

mod controller;
mod modal;
mod section;
mod view_id;

pub use controller::Navigator;
pub use modal::{ModalId, Modals, UnknownModal};
pub use section::{sections_for, DashboardSections, Section};
pub use view_id::{UnknownView, ViewId};
