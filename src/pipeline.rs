//! The localize stage: a fixed, documented sequence of passes.
//!
//! Replaces plugin-style generator discovery with an explicit pipeline.
//! Stages always run in this order:
//!
//! ```text
//! 1. expand-posts    duplicate every post across the configured languages
//! 2. expand-pages    duplicate every page across the configured languages
//! 3. resolve-posts   compute localized post URLs
//! 4. paginate        one paginated sequence per (index page, language)
//! 5. resolve-pages   compute localized page URLs and output directories
//! ```
//!
//! Language detection is not a stage here — it runs during scan, when
//! filenames are in hand. Posts resolve before pagination so the post
//! copies embedded in each pager carry final URLs; pages resolve last so
//! the listing duplicates created by pagination are covered.
//!
//! Pagination discovers its templates (pages with slug `index`) from a
//! snapshot taken after expansion and before any pager duplicates are
//! appended. Because expansion has already produced one index page per
//! language, every language gets its own paginated sequence without any
//! propagation hook between the stages.

use crate::expand::{self, Expansion};
use crate::paginate;
use crate::resolve;
use crate::types::{ContentItem, Site};

/// What the localize stage did, for CLI display.
#[derive(Debug, Default)]
pub struct Report {
    pub post_expansions: Vec<Expansion>,
    pub page_expansions: Vec<Expansion>,
    /// (language, total pages) per paginated listing
    pub paginated: Vec<(String, usize)>,
    pub warnings: Vec<String>,
}

/// Run the full localize stage over a scanned site.
pub fn run(site: &mut Site) -> Report {
    let mut report = Report::default();

    report.post_expansions = expand::expand(&mut site.posts, &site.config.languages);
    report.page_expansions = expand::expand(&mut site.pages, &site.config.languages);

    resolve_posts(&mut site.posts);

    if paginate::pagination_enabled(&site.config) {
        run_pagination(site, &mut report);
    }

    resolve_pages(&mut site.pages);

    report
}

fn run_pagination(site: &mut Site, report: &mut Report) {
    // Snapshot before pagination appends page-N duplicates.
    let templates: Vec<usize> = site
        .pages
        .iter()
        .enumerate()
        .filter(|(_, p)| p.slug == "index")
        .map(|(i, _)| i)
        .collect();

    if templates.is_empty() {
        report.warnings.push(
            "Pagination is enabled, but no index page was found to use as the \
             pagination template. Skipping pagination."
                .to_string(),
        );
        return;
    }

    for template in templates {
        paginate::paginate(&mut site.pages, template, &site.posts, &site.config);
        if let Some(pager) = &site.pages[template].pager {
            report
                .paginated
                .push((pager.language.clone(), pager.total_pages));
        }
    }
}

fn resolve_posts(posts: &mut [ContentItem]) {
    for post in posts {
        let base = base_post_url(post);
        post.url = Some(resolve::post_url(&base, post));
    }
}

fn resolve_pages(pages: &mut [ContentItem]) {
    for page in pages {
        let base = base_page_url(page);
        page.url = Some(resolve::page_url(&base, page));
        page.dir = resolve::page_dir(&page.dir, page.language.as_deref());
    }
}

/// Un-localized base URL for a page, in lieu of the external permalink
/// engine: `<dir><slug>.html`.
fn base_page_url(page: &ContentItem) -> String {
    format!("{}{}.html", page.dir, page.slug)
}

/// Un-localized base URL for a post: `/<slug>/`.
fn base_post_url(post: &ContentItem) -> String {
    format!("/{}/", post.slug)
}

/// Convenience for `main`: scan-time warnings plus pagination setup checks,
/// before the pipeline runs.
pub fn preflight_warnings(site: &Site) -> Vec<String> {
    let mut warnings = Vec::new();
    if paginate::pagination_enabled(&site.config) && !site.pages.iter().any(|p| p.slug == "index")
    {
        warnings.push("Pagination is enabled but the content root has no index page.".to_string());
    }
    warnings
}
