//! # fragmount
//!
//! Shared header/footer injection for hand-written static sites. Pages stay
//! plain HTML files you edit directly; the parts every page repeats — the
//! site header with navigation and the footer with social links — are
//! composed once per page and injected into placeholder elements at build
//! time.
//!
//! # Architecture: Compose, Then Mount
//!
//! The library splits into a pure half and a side-effecting half:
//!
//! ```text
//! 1. Compose   config + page identity + year  →  fragment strings
//! 2. Mount     page HTML + fragments          →  rewritten page
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Testability**: composition is a pure function of explicit inputs
//!   (the current page's file name, the calendar year) — nothing reads the
//!   clock or the filesystem, so tests pin any page and any year.
//! - **Safety**: mounting never fails. A page without a placeholder simply
//!   doesn't receive that fragment, which is how pages opt out.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Data-table entry types (`NavItem`, `SocialLink`) |
//! | [`identity`] | Current-page identity derivation and the `index.html` fallback |
//! | [`config`] | `site.toml` loading and validation; compiled-in default tables |
//! | [`fragments`] | Pure fragment composition with Maud; `PageComponents` cache |
//! | [`mount`] | Mount-point lookup and children-replacing injection |
//! | [`inject`] | The site pipeline — walk, inject pages in parallel, copy assets |
//! | [`output`] | CLI output formatting — per-page display of run results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Fragments are generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system, rather than Handlebars or Tera.
//! Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, so labels
//!   and titles from `site.toml` are inert markup.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Replacement, Not Append
//!
//! Mounting replaces a placeholder's children wholesale. Injecting an
//! already-injected page is therefore a fixed point, which makes rebuilds
//! safe to point at a previously built tree and makes partial rebuilds
//! boring. A page that never had a placeholder passes through
//! byte-for-byte — it doesn't even take a parse/serialize round trip.
//!
//! ## Identity Is the File Name
//!
//! Active-nav detection is exact string comparison between a page's file
//! name and each nav href. No slug rules, no normalization beyond mapping
//! directory-like paths to `index.html`. The file names in the source tree
//! are the single source of truth, and the nav hrefs in config must match
//! them — the same convention the hand-written pages already follow in
//! their own cross-links.
//!
//! ## Compiled-In Defaults
//!
//! The default data tables (six nav items, three social links, branding)
//! are constants. A site whose tables match them needs no configuration at
//! all; any other site overrides them in one `site.toml` that stays fixed
//! for the whole build.

pub mod config;
pub mod fragments;
pub mod identity;
pub mod inject;
pub mod mount;
pub mod output;
pub mod types;
