// SPDX-License-Identifier: MPL-2.0
//! `medsync` is a desktop front-end for coordinating medical supply
//! donations between donors, NGOs and healthcare facilities, built with the
//! Iced GUI framework.
//!
//! The [`portal`] module holds every user action and can be driven without
//! a window; [`app`] wires it to Iced with localization and persisted
//! preferences.

#![doc(html_root_url = "https://docs.rs/medsync/0.1.0")]

pub mod app;
pub mod branding;
pub mod diagnostics;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod notifications;
pub mod portal;
pub mod session;
pub mod ui;
