//! Site configuration module.
//!
//! Handles loading and validating the optional `site.toml` at the source
//! root. The stock defaults replicate the site fragmount was extracted
//! from, so a site that matches them needs no config file at all.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [branding]
//! title = "Edinburgh University Kendo Club"
//! short_name = "EUKC"          # Tagline and copyright holder
//! logo = "images/logo.png"     # Relative to the published site root
//!
//! # Navigation, in display order. Declaring any [[nav]] entry replaces
//! # the entire default list.
//! [[nav]]
//! href = "index.html"
//! label = "Home"
//!
//! # Footer social links, in display order.
//! [[social]]
//! href = "https://youtube.com/..."
//! icon = "fab fa-youtube"
//! label = "YouTube"
//!
//! [processing]
//! max_processes = 4            # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse at the section level — override just the
//! sections you want. Unknown keys are rejected to catch typos early.

use crate::types::{NavItem, SocialLink};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the source root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have defaults. User config files need only specify the
/// sections they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Logo, site title, and tagline shown in the header branding block.
    pub branding: BrandingConfig,
    /// Navigation items, in display order.
    pub nav: Vec<NavItem>,
    /// Footer social links, in display order.
    pub social: Vec<SocialLink>,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            branding: BrandingConfig::default(),
            nav: default_nav(),
            social: default_social(),
            processing: ProcessingConfig::default(),
        }
    }
}

/// Header branding block settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    /// Full site title shown next to the logo.
    pub title: String,
    /// Short name used as the tagline and the copyright holder.
    pub short_name: String,
    /// Logo image path, relative to the published site root.
    pub logo: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "Edinburgh University Kendo Club".to_string(),
            short_name: "EUKC".to_string(),
            logo: "images/logo.png".to_string(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page-injection workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// The navigation table of the shipped site.
fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("index.html", "Home"),
        NavItem::new("about.html", "About"),
        NavItem::new("contact.html", "Contact"),
        NavItem::new("meet-the-committee.html", "Meet the Committee"),
        NavItem::new("gallery.html", "Gallery"),
        NavItem::new("events-and-information.html", "Events & Info"),
    ]
}

/// The social-link table of the shipped site.
fn default_social() -> Vec<SocialLink> {
    vec![
        SocialLink::new(
            "https://youtube.com/@edinburghuniversitykendoclub?si=kBFyVivSa1io82l0",
            "fab fa-youtube",
            "YouTube",
        ),
        SocialLink::new(
            "https://www.instagram.com/eukendo?igsh=MW1ibTFiNndjamR0bQ==",
            "fab fa-instagram",
            "Instagram",
        ),
        SocialLink::new(
            "https://www.facebook.com/EdinburghUniKendo",
            "fab fa-facebook-f",
            "Facebook",
        ),
    ]
}

impl SiteConfig {
    /// Validate config values.
    ///
    /// Nav hrefs must be unique: active-page detection marks every item
    /// whose href equals the current page, and duplicates would mark two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nav.is_empty() {
            return Err(ConfigError::Validation(
                "nav must have at least one entry".into(),
            ));
        }
        let mut seen = HashSet::new();
        for item in &self.nav {
            if item.href.is_empty() || item.label.is_empty() {
                return Err(ConfigError::Validation(
                    "nav entries need a non-empty href and label".into(),
                ));
            }
            if !seen.insert(item.href.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate nav href: {}",
                    item.href
                )));
            }
        }
        for link in &self.social {
            if link.href.is_empty() || link.label.is_empty() {
                return Err(ConfigError::Validation(
                    "social entries need a non-empty href and label".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Load config from `site.toml` in the given directory.
///
/// Falls back to stock defaults when no config file exists. Rejects
/// unknown keys and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    load_config_file(&path)
}

/// Load and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# fragmount configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as site.toml in the source directory. Unknown keys
# will cause an error.

# ---------------------------------------------------------------------------
# Header branding
# ---------------------------------------------------------------------------
[branding]
# Full site title shown next to the logo.
title = "Edinburgh University Kendo Club"

# Short name, used as the tagline and as the copyright holder.
short_name = "EUKC"

# Logo image path, relative to the published site root.
logo = "images/logo.png"

# ---------------------------------------------------------------------------
# Navigation, in display order.
# Declaring any [[nav]] entry replaces the entire default list. The href
# must equal the page's file name for active-page highlighting to work.
# ---------------------------------------------------------------------------
[[nav]]
href = "index.html"
label = "Home"

[[nav]]
href = "about.html"
label = "About"

[[nav]]
href = "contact.html"
label = "Contact"

[[nav]]
href = "meet-the-committee.html"
label = "Meet the Committee"

[[nav]]
href = "gallery.html"
label = "Gallery"

[[nav]]
href = "events-and-information.html"
label = "Events & Info"

# ---------------------------------------------------------------------------
# Footer social links, in display order. Icons are class names from the
# site's icon library; the label is the link's accessible name.
# ---------------------------------------------------------------------------
[[social]]
href = "https://youtube.com/@edinburghuniversitykendoclub?si=kBFyVivSa1io82l0"
icon = "fab fa-youtube"
label = "YouTube"

[[social]]
href = "https://www.instagram.com/eukendo?igsh=MW1ibTFiNndjamR0bQ=="
icon = "fab fa-instagram"
label = "Instagram"

[[social]]
href = "https://www.facebook.com/EdinburghUniKendo"
icon = "fab fa-facebook-f"
label = "Facebook"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-injection workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
