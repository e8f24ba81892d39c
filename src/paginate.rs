//! Language-partitioned pagination of post listings.
//!
//! A listing page (slug `index`) owns one paginated sequence per language.
//! The paginate stage filters the post collection down to the listing's
//! language, chunks it into fixed-size pages, attaches page 1 to the
//! listing item itself, and appends one duplicate listing item per further
//! page with a page-specific output directory.
//!
//! Duplicates are tagged `multilingual = true` so a later expansion pass
//! can never re-expand them.

use crate::config::SiteConfig;
use crate::types::{ContentItem, Pager};

/// Whether pagination is configured at all.
pub fn pagination_enabled(config: &SiteConfig) -> bool {
    config.paginate.is_some()
}

/// Number of pages needed for `total_posts` at `per_page` posts each.
pub fn calculate_pages(total_posts: usize, per_page: usize) -> usize {
    total_posts.div_ceil(per_page)
}

/// Directory name for page `num_page`, from the configured pattern.
///
/// `page:num` → `page2`, `page3`, ...
pub fn paginate_path(config: &SiteConfig, num_page: usize) -> String {
    config.paginate_path.replace(":num", &num_page.to_string())
}

/// Paginate the listing page at `pages[template]` against `posts`.
///
/// Filters out hidden posts and posts in a different language than the
/// listing's own (falling back to the default configured language), then
/// partitions the remainder in collection order. With zero matching posts
/// no pager is attached at all.
pub fn paginate(
    pages: &mut Vec<ContentItem>,
    template: usize,
    posts: &[ContentItem],
    config: &SiteConfig,
) {
    let per_page = match config.paginate {
        Some(n) => n,
        None => return,
    };

    let defined_language = pages[template]
        .language
        .clone()
        .unwrap_or_else(|| config.default_language().to_string());

    let listing: Vec<ContentItem> = posts
        .iter()
        .filter(|p| !p.hidden)
        .filter(|p| p.language.as_deref() == Some(&defined_language))
        .cloned()
        .collect();

    let total_pages = calculate_pages(listing.len(), per_page);
    for num_page in 1..=total_pages {
        let pager = build_pager(num_page, &listing, per_page, total_pages, &defined_language);
        if num_page > 1 {
            let mut duplicate = pages[template].clone();
            duplicate.language = Some(defined_language.clone());
            duplicate.multilingual = Some(true);
            duplicate.dir = format!(
                "{}{}/",
                pages[template].dir,
                paginate_path(config, num_page)
            );
            duplicate.pager = Some(pager);
            pages.push(duplicate);
        } else {
            pages[template].pager = Some(pager);
        }
    }
}

fn build_pager(
    page: usize,
    listing: &[ContentItem],
    per_page: usize,
    total_pages: usize,
    language: &str,
) -> Pager {
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(listing.len());
    Pager {
        page,
        per_page,
        posts: listing[start..end].to_vec(),
        total_posts: listing.len(),
        total_pages,
        language: language.to_string(),
        previous_page: (page > 1).then(|| page - 1),
        next_page: (page < total_pages).then(|| page + 1),
    }
}
