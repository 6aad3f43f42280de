//! Shared fragment composition.
//!
//! The two fragments every page shares: the site header (branding block +
//! navigation) and the footer (copyright line + social links). Both are
//! pure functions from explicit inputs to markup — the current page
//! identity and the calendar year are parameters, never read from the
//! environment — so tests can pin them.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, which
//! keeps config-supplied labels and titles inert.

use crate::config::SiteConfig;
use crate::identity::PageIdentity;
use maud::{Markup, html};

/// Renders the site header: branding block plus navigation list.
///
/// Exactly the nav item whose href equals `current` gets the `active`
/// class; when nothing matches, no item is marked.
pub fn header_fragment(site: &SiteConfig, current: &PageIdentity) -> Markup {
    html! {
        header.site-header {
            div.container {
                div.header-container {
                    div.header-branding {
                        div.brand-logo-wrapper {
                            img.site-logo src=(site.branding.logo) alt={ (site.branding.short_name) " Logo" };
                        }
                        div.brand-text {
                            h1.site-title { (site.branding.title) }
                            span.site-tagline { (site.branding.short_name) }
                        }
                    }
                    nav.main-nav aria-label="Main navigation" {
                        ul.nav-list {
                            @for item in &site.nav {
                                li {
                                    a.nav-link.active[current.matches(&item.href)] href=(item.href) {
                                        (item.label)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the site footer: copyright line plus social links.
///
/// Social links open in a new browsing context and carry their name as an
/// `aria-label`; the icon glyph is decorative and hidden from assistive
/// tech since the link itself is labelled.
pub fn footer_fragment(site: &SiteConfig, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-content {
                    p.footer-text {
                        "Copyright © " (year) " " (site.branding.short_name)
                    }
                    div.social-links {
                        @for link in &site.social {
                            a.social-link href=(link.href) target="_blank" rel="noopener noreferrer" aria-label=(link.label) {
                                i class=(link.icon) aria-hidden="true" {}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Both fragments for one page, computed eagerly at construction.
///
/// The footer doesn't depend on the page identity, but the pair is built
/// per page anyway: construction is cheap and keeping one constructor
/// means a page can never mix fragments from different configs.
#[derive(Debug, Clone)]
pub struct PageComponents {
    header: String,
    footer: String,
}

impl PageComponents {
    pub fn new(site: &SiteConfig, current: &PageIdentity, year: i32) -> Self {
        Self {
            header: header_fragment(site, current).into_string(),
            footer: footer_fragment(site, year).into_string(),
        }
    }

    /// The cached header markup.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The cached footer markup.
    pub fn footer(&self) -> &str {
        &self.footer
    }
}
