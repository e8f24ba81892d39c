//! Template-facing helpers: collection filtering and language indicators.
//!
//! The renderer is external; these are the narrow hooks it calls. The
//! collection filter is the counterpart of a template tag — parsed once at
//! template-parse time (malformed syntax is fatal there, not at render
//! time) and applied per render with the target language resolved from the
//! render context.

use crate::types::ContentItem;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error(
        "Syntax error in 'language_array' - valid syntax: source target_var target_language, got '{0}'"
    )]
    Syntax(String),
}

/// A parsed `language_array` tag: filters a named collection down to one
/// language and writes the result into a template variable.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFilterTag {
    /// Name of the collection to filter
    pub source: String,
    /// Template variable receiving the filtered collection
    pub target: String,
    /// Context variable naming the language to filter for
    pub language_var: String,
}

impl CollectionFilterTag {
    /// Parse the `source target_var target_language` triplet.
    ///
    /// Anything other than exactly three whitespace-separated words is a
    /// fatal configuration error.
    pub fn parse(markup: &str) -> Result<Self, TagError> {
        let words: Vec<&str> = markup.split_whitespace().collect();
        match words.as_slice() {
            [source, target, language_var] => Ok(Self {
                source: source.to_string(),
                target: target.to_string(),
                language_var: language_var.to_string(),
            }),
            _ => Err(TagError::Syntax(markup.to_string())),
        }
    }

    /// Filter `items` to those matching `target_language` or carrying no
    /// language at all.
    pub fn apply(&self, items: &[ContentItem], target_language: &str) -> Vec<ContentItem> {
        items
            .iter()
            .filter(|item| {
                item.language.is_none() || item.language.as_deref() == Some(target_language)
            })
            .cloned()
            .collect()
    }
}

/// True for a post that is shown under a language other than its own:
/// either an expansion duplicate, or an original whose language differs
/// from the current page's.
pub fn is_foreign_language_post(post: &ContentItem, current_language: Option<&str>) -> bool {
    post.multilingual != Some(true)
        && (post.language.as_deref() != current_language || post.main_language.is_some())
}

/// Textual language indicator, e.g. `" (en)"`, for post listings.
///
/// Empty for posts in the current page's language.
pub fn language_text(post: &ContentItem, current_language: Option<&str>) -> String {
    if !is_foreign_language_post(post, current_language) {
        return String::new();
    }
    match indicator_language(post) {
        Some(language) => format!(" ({language})"),
        None => String::new(),
    }
}

/// Flag-image indicator markup for post listings.
pub fn language_flag(base_url: &str, post: &ContentItem, current_language: Option<&str>) -> String {
    if !is_foreign_language_post(post, current_language) {
        return String::new();
    }
    match indicator_language(post) {
        Some(language) => format!(
            "<img src='{base_url}/images/{language}.png' alt='{language}' class='flag'/>"
        ),
        None => String::new(),
    }
}

/// The language an indicator should show: the originating language for
/// duplicates, the post's own language otherwise.
fn indicator_language(post: &ContentItem) -> Option<&str> {
    post.main_language.as_deref().or(post.language.as_deref())
}
