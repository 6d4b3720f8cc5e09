// SPDX-License-Identifier: MPL-2.0
//! Configurable landing page text.
//!
//! Six labels can be overridden from the `[branding]` config section. An
//! override that is absent, empty or only whitespace falls back to the
//! built-in text.

use crate::app::config::{
    BrandingConfig, DEFAULT_DONOR_CARD_TITLE, DEFAULT_FACILITY_CARD_TITLE, DEFAULT_HERO_TITLE,
    DEFAULT_NGO_CARD_TITLE, DEFAULT_PLATFORM_TITLE, DEFAULT_TAGLINE,
};
use crate::session::Role;

/// Resolved labels, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub platform_title: String,
    pub tagline: String,
    /// May contain `\n`; each line is rendered on its own row.
    pub hero_title: String,
    pub donor_card_title: String,
    pub ngo_card_title: String,
    pub facility_card_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Branding::resolve(&BrandingConfig::default())
    }
}

impl Labels {
    /// Title of the landing page card for `role`.
    #[must_use]
    pub fn card_title(&self, role: Role) -> &str {
        match role {
            Role::Donor => &self.donor_card_title,
            Role::Ngo => &self.ngo_card_title,
            Role::Facility => &self.facility_card_title,
        }
    }

    /// Lines of the hero heading.
    pub fn hero_lines(&self) -> impl Iterator<Item = &str> {
        self.hero_title.lines()
    }

    /// The six `(config key, current value)` pairs, in config file order.
    #[must_use]
    pub fn edit_panel_values(&self) -> [(&'static str, &str); 6] {
        [
            ("platform_title", self.platform_title.as_str()),
            ("tagline", self.tagline.as_str()),
            ("hero_title", self.hero_title.as_str()),
            ("donor_card_title", self.donor_card_title.as_str()),
            ("ngo_card_title", self.ngo_card_title.as_str()),
            ("facility_card_title", self.facility_card_title.as_str()),
        ]
    }
}

pub struct Branding;

impl Branding {
    #[must_use]
    pub fn resolve(config: &BrandingConfig) -> Labels {
        Labels {
            platform_title: pick(&config.platform_title, DEFAULT_PLATFORM_TITLE),
            tagline: pick(&config.tagline, DEFAULT_TAGLINE),
            hero_title: pick(&config.hero_title, DEFAULT_HERO_TITLE),
            donor_card_title: pick(&config.donor_card_title, DEFAULT_DONOR_CARD_TITLE),
            ngo_card_title: pick(&config.ngo_card_title, DEFAULT_NGO_CARD_TITLE),
            facility_card_title: pick(&config.facility_card_title, DEFAULT_FACILITY_CARD_TITLE),
        }
    }
}

fn pick(value: &Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => default.to_string(),
    }
}
