//! Localized URL and output-directory derivation.
//!
//! The permalink engine that builds base URLs is an external collaborator;
//! these functions take its raw output string and apply the language
//! transformation on top. No inherited behavior is overridden — resolution
//! is plain composition: `localized = page_url(engine_url, item)`.
//!
//! ## Idempotence
//!
//! Every function here removes an existing `/<language>/` segment before
//! prepending, so feeding a resolved URL back in yields the same string.
//! The only metadata side effect is folding a filename-detected language
//! into the item on first sight; after that, resolution is a pure function
//! of (base URL, metadata).

use crate::detect;
use crate::types::{ContentItem, LANG_NONE};

/// Compute the localized URL of a page.
///
/// When the base URL itself embeds a language suffix (`/about.fr.html`),
/// the detected code is folded into the item (`language`, `multilingual =
/// true`) and the suffix is stripped; the suffix-derived form is
/// authoritative, so no `/<language>` prefix is added. Otherwise the item's
/// `language` metadata drives prefixing, with the `"none"` sentinel
/// suppressing it.
pub fn page_url(base_url: &str, page: &mut ContentItem) -> String {
    if let Some(code) = detect::language_from_name(base_url) {
        let code = code.to_string();
        let url = base_url.replace(&format!(".{code}"), "");
        page.language = Some(code);
        page.multilingual = Some(true);
        return url;
    }

    let Some(language) = page.language.clone() else {
        return base_url.to_string();
    };
    let mut url = remove_language_segment(base_url, &language);
    if language != LANG_NONE {
        url = format!("/{language}{url}");
    }
    url
}

/// Compute the localized URL of a post.
///
/// Posts always carry a language after expansion, and their URLs never use
/// the `"none"` sentinel — the dot-suffix strip is therefore unconditional,
/// while the prefix is still sentinel-gated to keep the page rule as the
/// authoritative one.
pub fn post_url(base_url: &str, post: &ContentItem) -> String {
    let Some(language) = post.language.as_deref() else {
        return base_url.to_string();
    };
    let mut url = base_url.replace(&format!(".{language}"), "");
    url = remove_language_segment(&url, language);
    if language != LANG_NONE {
        url = format!("/{language}{url}");
    }
    url
}

/// Derive a page's output directory: the base directory with a
/// `/<language>` segment stripped. Pages only.
pub fn page_dir(base_dir: &str, language: Option<&str>) -> String {
    match language {
        Some(lang) => remove_language_segment(base_dir, lang),
        None => base_dir.to_string(),
    }
}

/// Remove the first `/<language>/` path segment, collapsing it to `/`.
fn remove_language_segment(path: &str, language: &str) -> String {
    let segment = format!("/{language}/");
    match path.find(&segment) {
        Some(pos) => {
            let mut out = path.to_string();
            out.replace_range(pos..pos + segment.len() - 1, "");
            out
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::item;

    fn with_language(slug: &str, language: &str) -> ContentItem {
        let mut it = item(slug);
        it.language = Some(language.to_string());
        it.multilingual = Some(false);
        it
    }

    // =========================================================================
    // page_url
    // =========================================================================

    #[test]
    fn page_without_language_keeps_base_url() {
        let mut page = item("about");
        assert_eq!(page_url("/about.html", &mut page), "/about.html");
    }

    #[test]
    fn page_with_language_gets_prefix() {
        let mut page = with_language("about", "fr");
        assert_eq!(page_url("/about.html", &mut page), "/fr/about.html");
    }

    #[test]
    fn page_prefix_is_idempotent() {
        let mut page = with_language("about", "b");
        let once = page_url("/about.html", &mut page);
        let twice = page_url(&once, &mut page);
        assert_eq!(once, "/b/about.html");
        assert_eq!(twice, once);
        assert!(!twice.contains("/b/b/"));
    }

    #[test]
    fn none_sentinel_suppresses_prefix() {
        let mut page = with_language("404", "none");
        assert_eq!(page_url("/404.html", &mut page), "/404.html");
    }

    #[test]
    fn embedded_suffix_folded_and_stripped() {
        let mut page = item("about.fr");
        let url = page_url("/about.fr.html", &mut page);

        assert_eq!(url, "/about.html");
        assert_eq!(page.language.as_deref(), Some("fr"));
        assert_eq!(page.multilingual, Some(true));
    }

    #[test]
    fn embedded_suffix_resolution_is_deterministic() {
        let mut page = item("about.fr");
        let first = page_url("/about.fr.html", &mut page);
        let second = page_url("/about.fr.html", &mut page);
        assert_eq!(first, second);
    }

    #[test]
    fn nested_page_prefix() {
        let mut page = with_language("setup", "de");
        assert_eq!(
            page_url("/guides/setup.html", &mut page),
            "/de/guides/setup.html"
        );
    }

    // =========================================================================
    // post_url
    // =========================================================================

    #[test]
    fn post_gets_language_prefix() {
        let post = with_language("post", "en");
        assert_eq!(post_url("/post/", &post), "/en/post/");
    }

    #[test]
    fn post_duplicate_gets_own_prefix() {
        let post = with_language("post", "fr");
        assert_eq!(post_url("/post/", &post), "/fr/post/");
    }

    #[test]
    fn post_dot_suffix_stripped() {
        let post = with_language("hello.fr", "fr");
        assert_eq!(post_url("/hello.fr/", &post), "/fr/hello/");
    }

    #[test]
    fn post_prefix_is_idempotent() {
        let post = with_language("post", "b");
        let once = post_url("/post/", &post);
        let twice = post_url(&once, &post);
        assert_eq!(twice, once);
        assert!(!twice.contains("/b/b/"));
    }

    #[test]
    fn post_without_language_keeps_base_url() {
        let post = item("post");
        assert_eq!(post_url("/post/", &post), "/post/");
    }

    // =========================================================================
    // page_dir
    // =========================================================================

    #[test]
    fn dir_language_segment_stripped() {
        assert_eq!(page_dir("/fr/", Some("fr")), "/");
        assert_eq!(page_dir("/fr/guides/", Some("fr")), "/guides/");
    }

    #[test]
    fn dir_without_segment_unchanged() {
        assert_eq!(page_dir("/guides/", Some("fr")), "/guides/");
    }

    #[test]
    fn dir_without_language_unchanged() {
        assert_eq!(page_dir("/fr/", None), "/fr/");
    }

    #[test]
    fn dir_strip_is_idempotent() {
        let once = page_dir("/fr/guides/", Some("fr"));
        assert_eq!(page_dir(&once, Some("fr")), once);
    }
}
