//! Current-page identity derivation.
//!
//! Active-state detection compares a page's file name against nav item
//! hrefs, so every page needs a single canonical identity string. This
//! module owns that derivation: take the last path segment, and fall back
//! to the home page when the path doesn't name a file.
//!
//! ## Fallback
//!
//! Empty, root, and directory-like paths all resolve to `index.html`:
//! - `""` → `index.html`
//! - `"/"` → `index.html`
//! - `"events/"` → `index.html`
//! - `"/about.html"` → `about.html`
//! - `"events/info.html"` → `info.html`
//!
//! A resolvable name that matches no nav item is kept as-is; it simply
//! marks nothing active.

/// Canonical file name the site treats as the home page.
pub const HOME_PAGE: &str = "index.html";

/// The current page's identity, as matched against nav item hrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdentity(String);

impl PageIdentity {
    /// Derive an identity from a path string (a URL path or a relative
    /// file path — only the last segment matters).
    pub fn from_path(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path);
        if name.is_empty() {
            Self(HOME_PAGE.to_string())
        } else {
            Self(name.to_string())
        }
    }

    /// The home page identity.
    pub fn home() -> Self {
        Self(HOME_PAGE.to_string())
    }

    /// Exact, case-sensitive comparison against a nav href.
    pub fn matches(&self, href: &str) -> bool {
        self.0 == href
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
