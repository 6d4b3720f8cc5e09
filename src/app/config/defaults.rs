// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Auto-dismiss delay
//! - **Diagnostics**: Activity log buffer bounds
//! - **Branding**: Default labels of the configurable text surface

use std::time::Duration;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a notification stays on screen before it hides itself.
pub const NOTIFICATION_DISMISS_DELAY: Duration = Duration::from_millis(4000);

/// Interval of the tick that drives auto-dismissal while one is pending.
pub const NOTIFICATION_TICK_INTERVAL: Duration = Duration::from_millis(100);

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the activity log.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum activity log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum activity log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Branding Defaults
// ==========================================================================

pub const DEFAULT_PLATFORM_TITLE: &str = "MedSync";

pub const DEFAULT_TAGLINE: &str = "Connecting Medical Supplies Where They're Needed Most";

/// Hero heading on the landing page (two lines).
pub const DEFAULT_HERO_TITLE: &str = "Connecting Medical Supplies\nWhere They're Needed Most";

pub const DEFAULT_DONOR_CARD_TITLE: &str = "Donor";

pub const DEFAULT_NGO_CARD_TITLE: &str = "NGO / Coordinator";

pub const DEFAULT_FACILITY_CARD_TITLE: &str = "Healthcare Facility";
