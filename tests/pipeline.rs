//! End-to-end tests of the inject pipeline against a realistic site tree.

use fragmount::config::{self, SiteConfig};
use fragmount::inject::{check_site, inject_site};
use scraper::{Html, Selector};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{title}</title></head>
<body>
<div id="header-placeholder"></div>
{body}
<div id="footer-placeholder"></div>
</body>
</html>"#
    )
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Source tree mirroring the shipped site's layout.
fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "index.html", &page("Home", "<main>welcome</main>"));
    write(root, "about.html", &page("About", "<main>about us</main>"));
    write(root, "gallery.html", &page("Gallery", "<main>photos</main>"));
    write(
        root,
        "bare.html",
        "<html><head><title>Bare</title></head><body>no placeholders</body></html>",
    );
    write(root, "style.css", "body { margin: 0 }");
    write(root, "images/logo.png", "not really a png");
    tmp
}

fn active_hrefs(html: &str) -> Vec<String> {
    Html::parse_document(html)
        .select(&sel("a.nav-link.active"))
        .map(|a| a.value().attr("href").unwrap().to_string())
        .collect()
}

#[test]
fn full_run_injects_pages_and_copies_assets() {
    let src = setup_site();
    let out = TempDir::new().unwrap();

    let summary = inject_site(src.path(), out.path(), &SiteConfig::default(), 2026).unwrap();

    assert_eq!(summary.pages.len(), 4);
    assert_eq!(summary.assets_copied, 2);

    // Each page with placeholders got both fragments, with its own nav
    // item marked active.
    for (file, href) in [
        ("index.html", "index.html"),
        ("about.html", "about.html"),
        ("gallery.html", "gallery.html"),
    ] {
        let html = fs::read_to_string(out.path().join(file)).unwrap();
        assert_eq!(active_hrefs(&html), vec![href.to_string()], "for {file}");
        assert!(html.contains("Copyright © 2026 EUKC"), "for {file}");
    }

    // Assets mirrored byte-for-byte
    assert_eq!(
        fs::read_to_string(out.path().join("style.css")).unwrap(),
        "body { margin: 0 }"
    );
    assert!(out.path().join("images/logo.png").exists());
}

#[test]
fn bare_page_passes_through_untouched() {
    let src = setup_site();
    let out = TempDir::new().unwrap();

    let summary = inject_site(src.path(), out.path(), &SiteConfig::default(), 2026).unwrap();

    let bare = summary
        .pages
        .iter()
        .find(|p| p.path == "bare.html")
        .unwrap();
    assert!(!bare.header_mounted && !bare.footer_mounted);

    let original = fs::read_to_string(src.path().join("bare.html")).unwrap();
    let copied = fs::read_to_string(out.path().join("bare.html")).unwrap();
    assert_eq!(original, copied);
}

#[test]
fn rebuilding_from_built_output_is_a_fixed_point() {
    let src = setup_site();
    let once = TempDir::new().unwrap();
    let twice = TempDir::new().unwrap();

    inject_site(src.path(), once.path(), &SiteConfig::default(), 2026).unwrap();
    inject_site(once.path(), twice.path(), &SiteConfig::default(), 2026).unwrap();

    for file in ["index.html", "about.html", "gallery.html", "bare.html"] {
        let a = fs::read_to_string(once.path().join(file)).unwrap();
        let b = fs::read_to_string(twice.path().join(file)).unwrap();
        assert_eq!(a, b, "second injection changed {file}");
    }
}

#[test]
fn site_toml_overrides_flow_into_fragments() {
    let src = setup_site();
    let out = TempDir::new().unwrap();
    write(
        src.path(),
        "site.toml",
        r#"
[branding]
title = "Another Club"
short_name = "AC"
logo = "img/mark.svg"
"#,
    );

    let config = config::load_config(src.path()).unwrap();
    inject_site(src.path(), out.path(), &config, 2026).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    let document = Html::parse_document(&html);
    let title = document.select(&sel("h1.site-title")).next().unwrap();
    assert_eq!(title.text().collect::<String>(), "Another Club");
    assert!(html.contains("Copyright © 2026 AC"));

    // site.toml itself is not copied into the output
    assert!(!out.path().join("site.toml").exists());
}

#[test]
fn check_matches_what_inject_would_do() {
    let src = setup_site();
    let probes = check_site(src.path()).unwrap();

    let out = TempDir::new().unwrap();
    let summary = inject_site(src.path(), out.path(), &SiteConfig::default(), 2026).unwrap();

    assert_eq!(probes.len(), summary.pages.len());
    for (probe, report) in probes.iter().zip(&summary.pages) {
        assert_eq!(probe.path, report.path);
        assert_eq!(probe.header, report.header_mounted, "for {}", probe.path);
        assert_eq!(probe.footer, report.footer_mounted, "for {}", probe.path);
    }
}
