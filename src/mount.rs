//! Mount-point lookup and fragment injection.
//!
//! Pages opt into shared fragments by carrying placeholder elements with
//! well-known ids:
//!
//! ```html
//! <div id="header-placeholder"></div>
//! ...
//! <div id="footer-placeholder"></div>
//! ```
//!
//! Injection replaces the placeholder's children with the fragment —
//! replacement, not append, so re-injecting an already-built page is a
//! fixed point. A missing placeholder is a valid configuration (a page
//! may omit the footer) and is silently skipped.
//!
//! Documents are parsed with `scraper` and the fragment subtree is
//! grafted node-by-node into the placeholder via the underlying
//! `ego-tree`. When neither placeholder exists the input string is
//! returned untouched, so fragment-free pages never go through a
//! parse/serialize round trip.

use crate::fragments::PageComponents;
use ego_tree::NodeId;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Element id the header fragment is mounted into.
pub const HEADER_MOUNT_ID: &str = "header-placeholder";
/// Element id the footer fragment is mounted into.
pub const FOOTER_MOUNT_ID: &str = "footer-placeholder";

static HEADER_MOUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#header-placeholder").expect("static selector"));
static FOOTER_MOUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#footer-placeholder").expect("static selector"));

/// Result of injecting one page.
#[derive(Debug, Clone)]
pub struct InjectedPage {
    /// The page markup after injection. Identical to the input when no
    /// mount point was found.
    pub html: String,
    pub header_mounted: bool,
    pub footer_mounted: bool,
}

/// Which mount points a page carries, without modifying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountProbe {
    pub header: bool,
    pub footer: bool,
}

/// Inject both fragments into a page: header first, then footer.
///
/// Each mount is independently tolerant of a missing placeholder. The two
/// targets are disjoint elements, so mount order is only observable in
/// the (unsupported) case of nested placeholders.
pub fn inject_page(html: &str, components: &PageComponents) -> InjectedPage {
    let mut document = Html::parse_document(html);
    let header_mounted = mount(&mut document, &HEADER_MOUNT, components.header());
    let footer_mounted = mount(&mut document, &FOOTER_MOUNT, components.footer());

    if !header_mounted && !footer_mounted {
        // Leave the page byte-for-byte alone rather than returning the
        // serializer's normalized form of it.
        return InjectedPage {
            html: html.to_owned(),
            header_mounted,
            footer_mounted,
        };
    }

    InjectedPage {
        html: document.html(),
        header_mounted,
        footer_mounted,
    }
}

/// Report which mount points are present in a page.
pub fn probe_page(html: &str) -> MountProbe {
    let document = Html::parse_document(html);
    MountProbe {
        header: document.select(&HEADER_MOUNT).next().is_some(),
        footer: document.select(&FOOTER_MOUNT).next().is_some(),
    }
}

/// Replace the children of the first element matching `mount_point` with
/// the parsed `fragment`. Returns false (document untouched) when no
/// element matches.
fn mount(document: &mut Html, mount_point: &Selector, fragment: &str) -> bool {
    let Some(target) = document.select(mount_point).next().map(|el| el.id()) else {
        return false;
    };

    clear_children(document, target);

    // parse_fragment wraps its content in a synthetic <html> element; the
    // nodes to graft are that wrapper's children.
    let parsed = Html::parse_fragment(fragment);
    let wrapper = parsed.root_element().id();
    let top_level: Vec<NodeId> = match parsed.tree.get(wrapper) {
        Some(node) => node.children().map(|c| c.id()).collect(),
        None => Vec::new(),
    };
    for id in top_level {
        copy_subtree(document, target, &parsed, id);
    }
    true
}

/// Detach all children of `parent`. Detached nodes stay in the tree arena
/// but are unreachable from the root, so they never serialize.
fn clear_children(document: &mut Html, parent: NodeId) {
    let children: Vec<NodeId> = match document.tree.get(parent) {
        Some(node) => node.children().map(|c| c.id()).collect(),
        None => return,
    };
    for id in children {
        if let Some(mut child) = document.tree.get_mut(id) {
            child.detach();
        }
    }
}

/// Deep-copy a node from `source` under `parent` in `document`.
///
/// ego-tree node ids are tree-local, so grafting across trees means
/// cloning each node value and rebuilding the child edges.
fn copy_subtree(document: &mut Html, parent: NodeId, source: &Html, node: NodeId) {
    let Some(src) = source.tree.get(node) else {
        return;
    };
    let new_id = {
        let Some(mut parent_mut) = document.tree.get_mut(parent) else {
            return;
        };
        parent_mut.append(src.value().clone()).id()
    };
    let child_ids: Vec<NodeId> = src.children().map(|c| c.id()).collect();
    for child in child_ids {
        copy_subtree(document, new_id, source, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::identity::PageIdentity;

    fn components_for(page: &str) -> PageComponents {
        let site = SiteConfig::default();
        PageComponents::new(&site, &PageIdentity::from_path(page), 2026)
    }

    fn page_with_both() -> &'static str {
        r#"<!DOCTYPE html>
<html lang="en">
<head><title>About</title></head>
<body>
<div id="header-placeholder"></div>
<main><p>Body content</p></main>
<div id="footer-placeholder"></div>
</body>
</html>"#
    }

    fn sel(css: &str) -> Selector {
        Selector::parse(css).unwrap()
    }

    #[test]
    fn mounts_both_fragments() {
        let result = inject_page(page_with_both(), &components_for("about.html"));
        assert!(result.header_mounted);
        assert!(result.footer_mounted);

        let document = Html::parse_document(&result.html);
        let header = document
            .select(&sel("#header-placeholder header.site-header"))
            .next();
        assert!(header.is_some(), "header fragment not inside placeholder");
        let footer = document
            .select(&sel("#footer-placeholder footer.site-footer"))
            .next();
        assert!(footer.is_some(), "footer fragment not inside placeholder");
    }

    #[test]
    fn mounted_nav_structure_survives_grafting() {
        let result = inject_page(page_with_both(), &components_for("about.html"));
        let document = Html::parse_document(&result.html);

        let links: Vec<_> = document.select(&sel("a.nav-link")).collect();
        assert_eq!(links.len(), 6);

        let active: Vec<_> = document
            .select(&sel("a.nav-link.active"))
            .map(|a| a.value().attr("href").unwrap())
            .collect();
        assert_eq!(active, vec!["about.html"]);

        let socials: Vec<_> = document.select(&sel("a.social-link")).collect();
        assert_eq!(socials.len(), 3);
        assert_eq!(socials[0].value().attr("target"), Some("_blank"));
    }

    #[test]
    fn replaces_placeholder_content_instead_of_appending() {
        let page = r#"<html><head><title>t</title></head><body>
<div id="header-placeholder"><p class="stale">old header</p></div>
</body></html>"#;
        let result = inject_page(page, &components_for("index.html"));
        let document = Html::parse_document(&result.html);
        assert!(document.select(&sel("p.stale")).next().is_none());
        assert_eq!(document.select(&sel("header.site-header")).count(), 1);
    }

    #[test]
    fn missing_both_mount_points_returns_input_unchanged() {
        let page = "<html><head><title>Bare</title></head><body><p>no placeholders here</p></body></html>";
        let result = inject_page(page, &components_for("index.html"));
        assert!(!result.header_mounted);
        assert!(!result.footer_mounted);
        assert_eq!(result.html, page);
    }

    #[test]
    fn missing_header_mount_still_mounts_footer() {
        let page = r#"<html><head><title>Footer only</title></head><body>
<main>content</main>
<div id="footer-placeholder"></div>
</body></html>"#;
        let result = inject_page(page, &components_for("index.html"));
        assert!(!result.header_mounted);
        assert!(result.footer_mounted);

        let document = Html::parse_document(&result.html);
        assert!(document.select(&sel("footer.site-footer")).next().is_some());
        assert!(document.select(&sel("header.site-header")).next().is_none());
        // Surrounding content is untouched
        let title = document.select(&sel("title")).next().unwrap();
        assert_eq!(title.text().collect::<String>(), "Footer only");
    }

    #[test]
    fn injection_is_idempotent() {
        let components = components_for("about.html");
        let once = inject_page(page_with_both(), &components);
        let twice = inject_page(&once.html, &components);
        assert!(twice.header_mounted);
        assert!(twice.footer_mounted);
        assert_eq!(once.html, twice.html);
    }

    #[test]
    fn surrounding_document_is_preserved() {
        let result = inject_page(page_with_both(), &components_for("about.html"));
        let document = Html::parse_document(&result.html);
        let body_text = document
            .select(&sel("main p"))
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(body_text, "Body content");
        assert!(result.html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn probe_reports_mount_points() {
        assert_eq!(
            probe_page(page_with_both()),
            MountProbe {
                header: true,
                footer: true
            }
        );
        assert_eq!(
            probe_page("<html><body></body></html>"),
            MountProbe {
                header: false,
                footer: false
            }
        );
        assert_eq!(
            probe_page(r#"<html><body><div id="footer-placeholder"></div></body></html>"#),
            MountProbe {
                header: false,
                footer: true
            }
        );
    }
}
