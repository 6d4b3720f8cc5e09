// SPDX-License-Identifier: MPL-2.0
//! Transient status messages.
//!
//! Every action that reports an outcome goes through the [`Presenter`],
//! which shows one notification at a time and hides it again after
//! [`NOTIFICATION_DISMISS_DELAY`](crate::app::config::NOTIFICATION_DISMISS_DELAY).
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and generation ids
//! - [`presenter`] - single-slot presenter with supersedable auto-dismiss
//! - [`clock`] - injectable time source (`SystemClock`, `ManualClock`)
//! - [`toast`] - Iced widget for the visible notification
//!
//! # State machine
//!
//! `hidden -> visible` on notify, `visible -> visible` on a repeated notify
//! (content replaced, timer restarted), `visible -> hidden` on dismiss or
//! when the pending deadline passes.

mod clock;
mod notification;
mod presenter;
mod toast;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notification::{Notification, NotificationId, Severity};
pub use presenter::{Message as NotificationMessage, Presenter};
pub use toast::Toast;
