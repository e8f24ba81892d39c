//! Per-language translation lookup for templates.
//!
//! A [`TranslationStore`] owns the translation dictionaries directory and
//! loads `<language>.yml` lazily, the first time that language is
//! referenced. There is no process-wide cache: the store is created by the
//! caller and passed wherever translations are needed, so its lifecycle is
//! explicit.
//!
//! ## Missing keys
//!
//! A missing key is never fatal. The lookup returns a visibly-marked
//! placeholder of the form `*<lang>:<key>*` and records a warning, so a
//! build completes and untranslated strings are easy to spot in the
//! output.
//!
//! ## Localized includes
//!
//! Include files live under `<translations_dir>/<language>/`. Lookup
//! failures — a symlinked include directory, traversal sequences in the
//! requested name, a file that is not there — come back as inline error
//! strings rather than errors, matching the template-facing contract.

use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("cannot read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse translation file {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Lazily-loaded per-language translation dictionaries.
pub struct TranslationStore {
    dir: PathBuf,
    default_language: String,
    tables: BTreeMap<String, Value>,
    warnings: Vec<String>,
}

impl TranslationStore {
    pub fn new(dir: &Path, default_language: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            default_language: default_language.to_string(),
            tables: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Resolve a dot-path key for the given page language.
    ///
    /// Pages without a language fall back to the default configured
    /// language. Missing keys yield the `*<lang>:<key>*` placeholder and a
    /// recorded warning; only dictionary load failures are errors.
    pub fn translate(
        &mut self,
        page_language: Option<&str>,
        key: &str,
    ) -> Result<String, TranslateError> {
        let language = page_language
            .unwrap_or(&self.default_language)
            .to_string();
        self.ensure_loaded(&language)?;

        let table = &self.tables[&language];
        match lookup(table, key).and_then(display_value) {
            Some(text) => Ok(text),
            None => {
                self.warnings
                    .push(format!("Missing translation key: {language}:{key}"));
                Ok(format!("*{language}:{key}*"))
            }
        }
    }

    /// Load the dictionaries for every given language up front.
    ///
    /// Used by `check` to surface broken or missing dictionary files
    /// before a build.
    pub fn preload(&mut self, languages: &[String]) -> Result<(), TranslateError> {
        for language in languages {
            self.ensure_loaded(language)?;
        }
        Ok(())
    }

    /// Warnings recorded by missed lookups, in occurrence order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn ensure_loaded(&mut self, language: &str) -> Result<(), TranslateError> {
        if self.tables.contains_key(language) {
            return Ok(());
        }
        let path = self.dir.join(format!("{language}.yml"));
        let raw = fs::read_to_string(&path).map_err(|source| TranslateError::Io {
            path: path.clone(),
            source,
        })?;
        let table: Value =
            serde_yaml::from_str(&raw).map_err(|source| TranslateError::Yaml { path, source })?;
        self.tables.insert(language.to_string(), table);
        Ok(())
    }

    /// Read a localized include file for a language.
    ///
    /// Returns the raw file contents; any conversion of the contents is
    /// the renderer's business. Failures come back as inline error
    /// strings.
    pub fn include(&self, language: &str, file: &str) -> String {
        let includes_dir = self.dir.join(language);

        if includes_dir.is_symlink() {
            return format!(
                "Includes directory '{}' cannot be a symlink",
                includes_dir.display()
            );
        }
        if !valid_include_name(file) {
            return format!("Include file '{file}' contains invalid characters or sequences");
        }

        let found = WalkDir::new(&includes_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && !e.path_is_symlink())
            .find(|e| {
                e.path()
                    .strip_prefix(&includes_dir)
                    .map(|rel| rel == Path::new(file))
                    .unwrap_or(false)
            });

        match found.and_then(|e| fs::read_to_string(e.path()).ok()) {
            Some(contents) => contents,
            None => format!(
                "Included file '{file}' not found in '{}' directory",
                includes_dir.display()
            ),
        }
    }
}

/// Allowed: alphanumerics, `_`, `/`, `.`, `-`; rejected: traversal
/// sequences and dot-prefixed path components.
fn valid_include_name(file: &str) -> bool {
    if file.is_empty() {
        return false;
    }
    if !file
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '.' | '-'))
    {
        return false;
    }
    !file.contains("./") && !file.contains("/.")
}

/// Resolve a dotted path against a YAML value.
///
/// Each path segment indexes a mapping by key, or a sequence by position
/// when the segment is numeric. Returns `None` as soon as a segment does
/// not resolve.
pub fn lookup<'a>(value: &'a Value, dotted_path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in dotted_path.split('.') {
        current = match segment.parse::<usize>() {
            Ok(index) => current.as_sequence()?.get(index)?,
            Err(_) => current.as_mapping()?.get(segment)?,
        };
    }
    Some(current)
}

/// Strip a leading `/xx/` language segment and a trailing `index.html`
/// from a URL, for language-switcher links in templates.
pub fn remove_language(input: &str) -> String {
    let stripped = strip_language_prefix(input);
    match stripped.find("index.html") {
        Some(pos) => {
            let mut out = stripped.to_string();
            out.replace_range(pos..pos + "index.html".len(), "");
            out
        }
        None => stripped.to_string(),
    }
}

fn strip_language_prefix(input: &str) -> &str {
    let bare = input.strip_prefix('/').unwrap_or(input);
    match bare.split_once('/') {
        Some((first, rest))
            if first.len() == 2 && first.bytes().all(|b| b.is_ascii_lowercase()) =>
        {
            rest
        }
        _ => input,
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(dictionaries: &[(&str, &str)]) -> (TempDir, TranslationStore) {
        let tmp = TempDir::new().unwrap();
        for (language, yaml) in dictionaries {
            fs::write(tmp.path().join(format!("{language}.yml")), yaml).unwrap();
        }
        let store = TranslationStore::new(tmp.path(), "en");
        (tmp, store)
    }

    // =========================================================================
    // translate()
    // =========================================================================

    #[test]
    fn flat_key_resolves() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: hello\n")]);
        assert_eq!(store.translate(Some("en"), "greeting").unwrap(), "hello");
    }

    #[test]
    fn nested_key_resolves() {
        let (_tmp, mut store) =
            store_with(&[("fr", "nav:\n  home: Accueil\n  about: À propos\n")]);
        assert_eq!(store.translate(Some("fr"), "nav.home").unwrap(), "Accueil");
    }

    #[test]
    fn missing_language_falls_back_to_default() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: hello\n")]);
        assert_eq!(store.translate(None, "greeting").unwrap(), "hello");
    }

    #[test]
    fn missing_key_yields_placeholder_and_warning() {
        let (_tmp, mut store) = store_with(&[("fr", "greeting: bonjour\n")]);
        assert_eq!(
            store.translate(Some("fr"), "nav.home").unwrap(),
            "*fr:nav.home*"
        );
        assert_eq!(
            store.warnings(),
            &["Missing translation key: fr:nav.home".to_string()]
        );
    }

    #[test]
    fn empty_string_value_counts_as_missing() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: \"\"\n")]);
        assert_eq!(store.translate(Some("en"), "greeting").unwrap(), "*en:greeting*");
    }

    #[test]
    fn missing_dictionary_file_is_an_error() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: hello\n")]);
        assert!(matches!(
            store.translate(Some("de"), "greeting"),
            Err(TranslateError::Io { .. })
        ));
    }

    #[test]
    fn malformed_dictionary_is_an_error() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: [unclosed\n")]);
        assert!(matches!(
            store.translate(Some("en"), "greeting"),
            Err(TranslateError::Yaml { .. })
        ));
    }

    #[test]
    fn preload_surfaces_missing_dictionaries() {
        let (_tmp, mut store) = store_with(&[("en", "greeting: hello\n")]);
        let languages = vec!["en".to_string(), "fr".to_string()];
        assert!(store.preload(&languages).is_err());
    }

    #[test]
    fn dictionary_loaded_once_per_language() {
        let (tmp, mut store) = store_with(&[("en", "greeting: hello\n")]);
        store.translate(Some("en"), "greeting").unwrap();

        // Rewriting the file has no effect: the table is already cached.
        fs::write(tmp.path().join("en.yml"), "greeting: changed\n").unwrap();
        assert_eq!(store.translate(Some("en"), "greeting").unwrap(), "hello");
    }

    // =========================================================================
    // lookup()
    // =========================================================================

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn lookup_walks_nested_mappings() {
        let value = yaml("a:\n  b:\n    c: deep\n");
        assert_eq!(
            lookup(&value, "a.b.c"),
            Some(&Value::String("deep".to_string()))
        );
    }

    #[test]
    fn lookup_numeric_segment_indexes_sequences() {
        let value = yaml("items:\n  - first\n  - second\n");
        assert_eq!(
            lookup(&value, "items.1"),
            Some(&Value::String("second".to_string()))
        );
    }

    #[test]
    fn lookup_missing_segment_is_none() {
        let value = yaml("a:\n  b: 1\n");
        assert_eq!(lookup(&value, "a.c"), None);
        assert_eq!(lookup(&value, "a.b.c"), None);
    }

    // =========================================================================
    // include()
    // =========================================================================

    #[test]
    fn include_reads_file_contents() {
        let (tmp, store) = store_with(&[]);
        fs::create_dir_all(tmp.path().join("en/snippets")).unwrap();
        fs::write(tmp.path().join("en/snippets/footer.html"), "<p>bye</p>").unwrap();

        assert_eq!(store.include("en", "snippets/footer.html"), "<p>bye</p>");
    }

    #[test]
    fn include_rejects_traversal_sequences() {
        let (_tmp, store) = store_with(&[]);
        for name in ["../secret", "a/../b", "en/./x", "a/.hidden"] {
            let result = store.include("en", name);
            assert!(
                result.contains("invalid characters or sequences"),
                "'{name}' should be rejected, got: {result}"
            );
        }
    }

    #[test]
    fn include_rejects_bad_characters() {
        let (_tmp, store) = store_with(&[]);
        let result = store.include("en", "sni ppet.html");
        assert!(result.contains("invalid characters or sequences"));
    }

    #[test]
    fn include_missing_file_reports_inline() {
        let (tmp, store) = store_with(&[]);
        fs::create_dir_all(tmp.path().join("en")).unwrap();

        let result = store.include("en", "nope.html");
        assert!(result.contains("not found"));
    }

    #[cfg(unix)]
    #[test]
    fn include_rejects_symlinked_directory() {
        let (tmp, store) = store_with(&[]);
        fs::create_dir_all(tmp.path().join("real")).unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real"), tmp.path().join("en")).unwrap();

        let result = store.include("en", "anything.html");
        assert!(result.contains("cannot be a symlink"));
    }

    #[cfg(unix)]
    #[test]
    fn include_skips_symlinked_files() {
        let (tmp, store) = store_with(&[]);
        fs::create_dir_all(tmp.path().join("en")).unwrap();
        fs::write(tmp.path().join("target.html"), "outside").unwrap();
        std::os::unix::fs::symlink(
            tmp.path().join("target.html"),
            tmp.path().join("en/link.html"),
        )
        .unwrap();

        let result = store.include("en", "link.html");
        assert!(result.contains("not found"));
    }

    // =========================================================================
    // remove_language()
    // =========================================================================

    #[test]
    fn remove_language_strips_prefix_and_index() {
        assert_eq!(remove_language("/fr/about.html"), "about.html");
        assert_eq!(remove_language("/en/index.html"), "");
        assert_eq!(remove_language("/en/guides/index.html"), "guides/");
    }

    #[test]
    fn remove_language_leaves_other_paths_alone() {
        assert_eq!(remove_language("/about.html"), "/about.html");
        assert_eq!(remove_language("/guides/setup.html"), "/guides/setup.html");
    }
}
