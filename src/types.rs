//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON in the site manifest that the
//! downstream renderer consumes, and must stay stable across the scan and
//! localize stages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::SiteConfig;

/// Sentinel language code marking an item as exempt from language URL
/// prefixing and from expansion.
pub const LANG_NONE: &str = "none";

/// A single content item — a page or a post.
///
/// The `multilingual` field is a tri-state marker:
/// - `None`: not yet processed
/// - `Some(true)`: language detected from the filename (or a pagination
///   duplicate) — exempt from expansion
/// - `Some(false)`: processed by expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// URL slug (filename stem; an embedded `.xx` suffix is preserved here
    /// and stripped at URL resolution time)
    pub slug: String,
    /// Source file path relative to the content root
    pub source_path: String,
    /// Output subdirectory, `/`-rooted with a trailing slash (`/`, `/notes/`).
    /// Pagination rewrites this on page-N duplicates.
    pub dir: String,
    /// Title from front matter, first `# heading`, or the slug as fallback
    pub title: String,
    /// ISO-like 2-letter code, or the sentinel `"none"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Tri-state processing marker, see type docs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multilingual: Option<bool>,
    /// Language of the originating item; set only on expansion duplicates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_language: Option<String>,
    /// Hidden items are excluded from paginated listings
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    /// Raw markdown body — carried as an opaque payload for the renderer
    pub body: String,
    /// Remaining front-matter keys, untouched by language processing
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_yaml::Value>,
    /// Public URL, derived by the resolve stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Pagination state, present only on listing pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pager: Option<Pager>,
}

impl ContentItem {
    /// True when the item's language is the `"none"` sentinel.
    pub fn language_is_none_sentinel(&self) -> bool {
        self.language.as_deref() == Some(LANG_NONE)
    }
}

/// One page of a language-partitioned post listing.
///
/// One `Pager` exists per (template page, language, page number) triple
/// after the paginate stage runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pager {
    /// 1-based page number
    pub page: usize,
    /// Configured page size
    pub per_page: usize,
    /// The posts on this page, in listing order
    pub posts: Vec<ContentItem>,
    /// Total posts across all pages of this listing
    pub total_posts: usize,
    /// Total page count
    pub total_pages: usize,
    /// Language this listing was partitioned for
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
}

/// The full in-memory site: configuration plus both item collections.
///
/// Serialized as-is to `manifest.json` after the localize stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Site {
    pub config: SiteConfig,
    pub pages: Vec<ContentItem>,
    pub posts: Vec<ContentItem>,
}
