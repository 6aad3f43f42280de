//! Shared data-table entry types.
//!
//! Both tables are ordered: fragments render entries in declaration order,
//! whether the table came from the compiled-in defaults or a `site.toml`.

use serde::{Deserialize, Serialize};

/// One entry in the site navigation.
///
/// `href` doubles as the active-page key: a nav link is marked active when
/// its `href` equals the current page's file name exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Link target, normally a relative page file name (`about.html`)
    pub href: String,
    /// Display text
    pub label: String,
}

/// One entry in the footer's social-link row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// External profile URL
    pub href: String,
    /// Icon class names from the site's icon library (`fab fa-youtube`)
    pub icon: String,
    /// Accessible name — the link has no visible text, only the icon
    pub label: String,
}

impl NavItem {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}

impl SocialLink {
    pub fn new(href: &str, icon: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
        }
    }
}
