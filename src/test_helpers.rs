//! Shared test utilities for the polysite test suite.
//!
//! Provides in-memory item builders and lookup helpers for localize-stage
//! data structures (`Site`, `ContentItem`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut site = site_with(config, vec![item("about")], vec![item("post")]);
//! pipeline::run(&mut site);
//!
//! let about_fr = find_page(&site, "about", Some("fr"));
//! assert_eq!(about_fr.main_language.as_deref(), Some("en"));
//! ```

use crate::config::SiteConfig;
use crate::types::{ContentItem, Site};
use std::collections::BTreeMap;

// =========================================================================
// Builders
// =========================================================================

/// A bare unprocessed item rooted at `/`, titled after its slug.
pub fn item(slug: &str) -> ContentItem {
    ContentItem {
        slug: slug.to_string(),
        source_path: format!("{slug}.md"),
        dir: "/".to_string(),
        title: slug.to_string(),
        language: None,
        multilingual: None,
        main_language: None,
        hidden: false,
        body: String::new(),
        extra: BTreeMap::new(),
        url: None,
        pager: None,
    }
}

/// An item already carrying a language, as posts do after scan or expansion.
pub fn post_in(slug: &str, language: &str) -> ContentItem {
    let mut post = item(slug);
    post.language = Some(language.to_string());
    post
}

/// Owned language list from literals.
pub fn languages(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// Assemble a `Site` from parts.
pub fn site_with(config: SiteConfig, pages: Vec<ContentItem>, posts: Vec<ContentItem>) -> Site {
    Site {
        config,
        pages,
        posts,
    }
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find a page by slug and language. Panics if not found.
pub fn find_page<'a>(site: &'a Site, slug: &str, language: Option<&str>) -> &'a ContentItem {
    site.pages
        .iter()
        .find(|p| p.slug == slug && p.language.as_deref() == language)
        .unwrap_or_else(|| {
            let available: Vec<String> = site
                .pages
                .iter()
                .map(|p| format!("{}[{}]", p.slug, p.language.as_deref().unwrap_or("-")))
                .collect();
            panic!("page '{slug}' [{language:?}] not found. Available: {available:?}")
        })
}

/// Find a post by slug and language. Panics if not found.
pub fn find_post<'a>(site: &'a Site, slug: &str, language: Option<&str>) -> &'a ContentItem {
    site.posts
        .iter()
        .find(|p| p.slug == slug && p.language.as_deref() == language)
        .unwrap_or_else(|| {
            let available: Vec<String> = site
                .posts
                .iter()
                .map(|p| format!("{}[{}]", p.slug, p.language.as_deref().unwrap_or("-")))
                .collect();
            panic!("post '{slug}' [{language:?}] not found. Available: {available:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All item languages in collection order; `-` for unset.
pub fn languages_of(items: &[ContentItem]) -> Vec<&str> {
    items
        .iter()
        .map(|i| i.language.as_deref().unwrap_or("-"))
        .collect()
}
