//! Centralized language detection for the `<base>.<xx>` filename convention.
//!
//! Content files can embed their language as a two-letter suffix before the
//! content extension: `about.fr.md`, `setup.de.html`, `welcome.pt`. This
//! module provides the single parsing function used everywhere a filename or
//! URL needs to be checked for an embedded language.
//!
//! ## Matching Rules
//!
//! A name matches when it ends in `.<xx>`, optionally followed by a known
//! content extension (`.markdown`, `.md`, `.html`) and an optional trailing
//! slash, where `<xx>` is exactly two lowercase ASCII letters. The literal
//! `md` is never a match — otherwise `notes.md.md` would "detect" the
//! extension of its own stem as a language.

/// Known content extensions a language suffix may precede.
///
/// `.markdown` is checked before `.md` so the longer extension wins.
const CONTENT_EXTENSIONS: &[&str] = &[".markdown", ".md", ".html"];

/// Extract the embedded language code from a filename or URL.
///
/// Pure function, no I/O. Returns the two-letter code as a slice of the
/// input, or `None` when the name embeds no language.
///
/// Handles these patterns:
/// - `"about.fr.md"` → `Some("fr")`
/// - `"about.fr.html"` → `Some("fr")`
/// - `"about.fr"` → `Some("fr")`
/// - `"/de/setup.pt/"` → `Some("pt")` (trailing slash ignored)
/// - `"about.md"` → `None` (no suffix before the extension)
/// - `"notes.md.md"` → `None` (`md` is excluded)
/// - `"archive.tar"` → `None` (three letters)
pub fn language_from_name(name: &str) -> Option<&str> {
    let name = name.strip_suffix('/').unwrap_or(name);
    let stem = CONTENT_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name);

    let (_, code) = stem.rsplit_once('.')?;
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_lowercase()) && code != "md" {
        Some(code)
    } else {
        None
    }
}
