// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent (`.ftl`) files embedded at compile time from
//! `assets/i18n/`. The locale is picked from the CLI, then the config file,
//! then the operating system, and falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
