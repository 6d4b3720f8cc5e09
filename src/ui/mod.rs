// SPDX-License-Identifier: MPL-2.0
//! User interface pages and shared styling.
//!
//! Pages follow the Elm-style "state down, messages up" pattern: each takes
//! a borrowed `ViewContext` and emits its own `Message`, which the
//! application routes into the portal.
//!
//! # Pages
//!
//! - [`landing`] - Brand header, hero, role cards, language switch
//! - [`auth`] - Login and registration forms
//! - [`dashboard`] - Donor, NGO and facility dashboards
//! - [`modal`] - Allocate dialog
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Labeled inputs and translated choice lists
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod auth;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod landing;
pub mod modal;
pub mod styles;
pub mod theming;
