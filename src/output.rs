//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is page-centric: the primary display line for every page is its
//! positional index plus its site-relative path, with mount outcomes shown
//! as indented context lines underneath. A trailing totals line summarizes
//! the run.
//!
//! # Output Format
//!
//! ## Inject
//!
//! ```text
//! Pages
//! 001 about.html
//!     header: mounted
//!     footer: mounted
//! 002 index.html
//!     header: mounted
//!     footer: missing
//!
//! Injected 2 pages (headers: 2, footers: 1), copied 3 assets
//! ```
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 about.html
//!     mounts: header, footer
//! 002 bare.html
//!     mounts: none
//!
//! 2 pages, 1 without mount points
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::inject::{InjectSummary, PageProbe};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn mount_status(mounted: bool) -> &'static str {
    if mounted { "mounted" } else { "missing" }
}

// ============================================================================
// Inject output
// ============================================================================

/// Format inject-run output: one entry per page plus a totals line.
pub fn format_inject_summary(summary: &InjectSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Pages".to_string());

    for (i, page) in summary.pages.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.path));
        lines.push(format!("    header: {}", mount_status(page.header_mounted)));
        lines.push(format!("    footer: {}", mount_status(page.footer_mounted)));
    }

    let headers = summary.pages.iter().filter(|p| p.header_mounted).count();
    let footers = summary.pages.iter().filter(|p| p.footer_mounted).count();
    lines.push(String::new());
    lines.push(format!(
        "Injected {} pages (headers: {}, footers: {}), copied {} assets",
        summary.pages.len(),
        headers,
        footers,
        summary.assets_copied
    ));

    lines
}

/// Print inject output to stdout.
pub fn print_inject_summary(summary: &InjectSummary) {
    for line in format_inject_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check-run output: which mount points each page carries.
pub fn format_check_output(probes: &[PageProbe]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Pages".to_string());

    for (i, probe) in probes.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), probe.path));
        let mounts = match (probe.header, probe.footer) {
            (true, true) => "header, footer",
            (true, false) => "header",
            (false, true) => "footer",
            (false, false) => "none",
        };
        lines.push(format!("    mounts: {}", mounts));
    }

    let bare = probes.iter().filter(|p| !p.header && !p.footer).count();
    lines.push(String::new());
    lines.push(format!(
        "{} pages, {} without mount points",
        probes.len(),
        bare
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(probes: &[PageProbe]) {
    for line in format_check_output(probes) {
        println!("{}", line);
    }
}
