// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! # Components
//!
//! - [`field`] - Labeled text inputs and choice lists used by every form
//! - [`choice`] - Translated wrapper that lets enums feed a `pick_list`

pub mod choice;
pub mod field;

pub use choice::Choice;
