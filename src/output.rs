//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every item is its semantic identity — positional index, title, and
//! language — with filesystem paths shown as secondary context via indented
//! `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 About
//!     Source: about.md
//! 002 À propos [fr, from filename]
//!     Source: about.fr.md
//!
//! Posts
//! 001 Hello World
//!     Source: posts/hello-world.md
//!
//! Config
//!     languages: en, fr
//!     paginate: 10
//! ```
//!
//! ## Build
//!
//! ```text
//! Expansion
//! 001 about  en → fr
//! 001 hello-world  en → fr
//!
//! Pagination
//!     en: 2 pages
//!     fr: 2 pages
//!
//! Pages
//! 001 About [en] → /en/about.html
//! 002 About [fr] → /fr/about.html
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::expand::Expansion;
use crate::pipeline::Report;
use crate::types::{ContentItem, Site};

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Language tag shown after an item title, e.g. `[fr]` or
/// `[fr, from filename]`.
fn language_tag(item: &ContentItem) -> String {
    match (&item.language, item.multilingual) {
        (Some(lang), Some(true)) => format!(" [{lang}, from filename]"),
        (Some(lang), _) => format!(" [{lang}]"),
        (None, _) => String::new(),
    }
}

/// Item header line: positional index + title + language tag.
fn item_header(index: usize, item: &ContentItem) -> String {
    format!("{} {}{}", format_index(index), item.title, language_tag(item))
}

fn push_section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan output showing discovered content.
pub fn format_scan_output(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();

    if !site.pages.is_empty() {
        push_section(&mut lines, "Pages");
        for (i, page) in site.pages.iter().enumerate() {
            lines.push(item_header(i + 1, page));
            lines.push(format!("    Source: {}", page.source_path));
        }
    }

    if !site.posts.is_empty() {
        push_section(&mut lines, "Posts");
        for (i, post) in site.posts.iter().enumerate() {
            let hidden = if post.hidden { " (hidden)" } else { "" };
            lines.push(format!("{}{}", item_header(i + 1, post), hidden));
            lines.push(format!("    Source: {}", post.source_path));
        }
    }

    push_section(&mut lines, "Config");
    lines.push(format!("    languages: {}", site.config.languages.join(", ")));
    match site.config.paginate {
        Some(per_page) => lines.push(format!("    paginate: {per_page}")),
        None => lines.push("    paginate: off".to_string()),
    }

    lines
}

pub fn print_scan_output(site: &Site) {
    for line in format_scan_output(site) {
        println!("{line}");
    }
}

// ============================================================================
// Stage 2: Build output
// ============================================================================

/// Format the localize report plus the final item inventory with URLs.
pub fn format_build_output(site: &Site, report: &Report) -> Vec<String> {
    let mut lines = Vec::new();

    let expansions: Vec<&Expansion> = report
        .page_expansions
        .iter()
        .chain(report.post_expansions.iter())
        .collect();
    if !expansions.is_empty() {
        push_section(&mut lines, "Expansion");
        for (i, expansion) in expansions.iter().enumerate() {
            let created = if expansion.created.is_empty() {
                "no duplicates".to_string()
            } else {
                format!("→ {}", expansion.created.join(", "))
            };
            lines.push(format!(
                "{} {}  {} {}",
                format_index(i + 1),
                expansion.slug,
                expansion.main_language,
                created
            ));
        }
    }

    if !report.paginated.is_empty() {
        push_section(&mut lines, "Pagination");
        for (language, total_pages) in &report.paginated {
            let plural = if *total_pages == 1 { "page" } else { "pages" };
            lines.push(format!("    {language}: {total_pages} {plural}"));
        }
    }

    if !site.pages.is_empty() {
        push_section(&mut lines, "Pages");
        lines.extend(inventory_lines(&site.pages));
    }
    if !site.posts.is_empty() {
        push_section(&mut lines, "Posts");
        lines.extend(inventory_lines(&site.posts));
    }

    for warning in &report.warnings {
        lines.push(String::new());
        lines.push(format!("Warning: {warning}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "Localized {} pages, {} posts across {} languages",
        site.pages.len(),
        site.posts.len(),
        site.config.languages.len()
    ));

    lines
}

fn inventory_lines(items: &[ContentItem]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let url = item.url.as_deref().unwrap_or("?");
            format!("{} → {}", item_header(i + 1, item), url)
        })
        .collect()
}

pub fn print_build_output(site: &Site, report: &Report) {
    for line in format_build_output(site, report) {
        println!("{line}");
    }
}

// ============================================================================
// Warnings
// ============================================================================

pub fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("Warning: {warning}");
    }
}
