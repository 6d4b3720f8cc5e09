// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::NOTIFICATION_TICK_INTERVAL;
use super::Message;
use iced::{time, Subscription};

/// Ticks only while a notification is waiting to be dismissed, so an idle
/// window does not wake up.
pub fn create_tick_subscription(dismissal_pending: bool) -> Subscription<Message> {
    if dismissal_pending {
        time::every(NOTIFICATION_TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
