//! Site injection pipeline.
//!
//! Walks a source directory of hand-written pages, injects the shared
//! fragments into every `.html` file, and mirrors everything else into
//! the output directory unchanged:
//!
//! ```text
//! pages/                       dist/
//! ├── site.toml                ├── index.html   (header+footer injected)
//! ├── index.html          →    ├── about.html   (header+footer injected)
//! ├── about.html               ├── style.css    (copied)
//! ├── style.css                └── images/logo.png
//! └── images/logo.png
//! ```
//!
//! Pages are independent, so injection runs in parallel. Each page's
//! identity comes from its file name, which is what nav hrefs point at;
//! pages in subdirectories still use only the last segment.
//!
//! The wall clock is read once per run, not per page: every page of one
//! build carries the same copyright year.

use crate::config::{self, SiteConfig};
use crate::fragments::PageComponents;
use crate::identity::PageIdentity;
use crate::mount;
use chrono::Datelike;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum InjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Classified contents of a source tree, as sorted relative paths.
#[derive(Debug)]
pub struct SiteTree {
    /// `.html` files — injection targets.
    pub pages: Vec<PathBuf>,
    /// Everything else — copied through unchanged. Excludes `site.toml`.
    pub assets: Vec<PathBuf>,
}

/// Outcome of injecting one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    /// Path relative to the source root, forward slashes.
    pub path: String,
    /// Identity used for active-nav detection.
    pub identity: String,
    pub header_mounted: bool,
    pub footer_mounted: bool,
}

/// Outcome of a full `inject` run. Serialized as JSON for `--report`.
#[derive(Debug, Serialize)]
pub struct InjectSummary {
    pub pages: Vec<PageReport>,
    pub assets_copied: usize,
}

/// Mount points present in one page, from a read-only `check` run.
#[derive(Debug, Clone, Serialize)]
pub struct PageProbe {
    pub path: String,
    pub header: bool,
    pub footer: bool,
}

/// The calendar year to stamp into footers, read from the system clock.
///
/// Kept at the pipeline boundary so fragment composition itself stays
/// clock-free and tests can pin any year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Walk the source tree and classify its files.
///
/// Paths come back sorted (walkdir's file-name order) so runs and reports
/// are deterministic. The root `site.toml` is configuration, not content,
/// and belongs to neither list.
pub fn scan_site(source: &Path) -> Result<SiteTree, InjectError> {
    let mut pages = Vec::new();
    let mut assets = Vec::new();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(source) else {
            continue;
        };
        if rel == Path::new(config::CONFIG_FILE) {
            continue;
        }
        if rel.extension().is_some_and(|ext| ext == "html") {
            pages.push(rel.to_path_buf());
        } else {
            assets.push(rel.to_path_buf());
        }
    }

    Ok(SiteTree { pages, assets })
}

/// Run the full pipeline: scan, inject every page, copy every asset.
///
/// The output directory must not live inside the source tree.
pub fn inject_site(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    year: i32,
) -> Result<InjectSummary, InjectError> {
    let tree = scan_site(source)?;
    fs::create_dir_all(output)?;

    let pages: Vec<PageReport> = tree
        .pages
        .par_iter()
        .map(|rel| inject_one(source, output, config, year, rel))
        .collect::<Result<_, _>>()?;

    for rel in &tree.assets {
        let dst = output.join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source.join(rel), &dst)?;
    }

    Ok(InjectSummary {
        pages,
        assets_copied: tree.assets.len(),
    })
}

/// Probe every page for mount points without writing anything.
pub fn check_site(source: &Path) -> Result<Vec<PageProbe>, InjectError> {
    let tree = scan_site(source)?;
    tree.pages
        .iter()
        .map(|rel| {
            let html = fs::read_to_string(source.join(rel))?;
            let probe = mount::probe_page(&html);
            Ok(PageProbe {
                path: rel_string(rel),
                header: probe.header,
                footer: probe.footer,
            })
        })
        .collect()
}

fn inject_one(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    year: i32,
    rel: &Path,
) -> Result<PageReport, InjectError> {
    let path = rel_string(rel);
    let identity = PageIdentity::from_path(&path);
    let html = fs::read_to_string(source.join(rel))?;

    let components = PageComponents::new(config, &identity, year);
    let injected = mount::inject_page(&html, &components);

    let dst = output.join(rel);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dst, injected.html.as_bytes())?;

    Ok(PageReport {
        identity: identity.to_string(),
        path,
        header_mounted: injected.header_mounted,
        footer_mounted: injected.footer_mounted,
    })
}

/// Relative path as a forward-slash string, regardless of platform.
fn rel_string(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
