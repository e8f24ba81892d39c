//! Filesystem scanning and site loading.
//!
//! Stage 1 of the build pipeline. Walks the content directory to discover
//! pages and posts, parses front matter, and runs language detection on
//! every filename, producing the in-memory [`Site`] the localize stage
//! consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md                     # Listing page (pagination template)
//! ├── about.md                     # Page, default language
//! ├── about.fr.md                  # Page with embedded language suffix
//! ├── guides/
//! │   └── setup.md                 # Nested page
//! ├── posts/                       # Posts, walked recursively
//! │   ├── hello-world.md
//! │   └── bonjour.fr.md
//! └── i18n/                        # Translation dictionaries + includes
//!     ├── en.yml
//!     └── fr.yml
//! ```
//!
//! ## Front Matter
//!
//! Files may start with a `---`-delimited YAML block. The keys `title`,
//! `language`, and `hidden` map to typed fields; everything else is carried
//! in `extra` untouched. A filename-embedded language suffix (see
//! [`crate::detect`]) wins over a front-matter `language` and marks the
//! item `multilingual = true`, exempting it from expansion.
//!
//! ## Validation
//!
//! The scanner enforces one rule: no two files in the same directory may
//! resolve to the same slug (`about.md` next to `about.html`).

use crate::config;
use crate::detect;
use crate::types::{ContentItem, Site};
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Duplicate slug '{0}' in {1}")]
    DuplicateSlug(String, String),
}

/// Name of the posts directory under the content root.
const POSTS_DIR: &str = "posts";

/// Extensions treated as content files.
const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown", "html"];

/// Scan a content root into a [`Site`].
///
/// Pages are content files anywhere under the root except the posts and
/// translations directories; posts live under `posts/`. Both collections
/// are sorted by source path so builds are deterministic.
pub fn scan(root: &Path) -> Result<Site, ScanError> {
    let config = config::load_config(root)?;

    let pages = collect_items(root, root, &[POSTS_DIR, &config.translations_dir])?;
    let posts_root = root.join(POSTS_DIR);
    let posts = if posts_root.is_dir() {
        collect_items(&posts_root, root, &[])?
    } else {
        Vec::new()
    };

    Ok(Site {
        config,
        pages,
        posts,
    })
}

/// Walk `dir` for content files, skipping the named top-level subtrees.
fn collect_items(
    dir: &Path,
    root: &Path,
    skip_dirs: &[&str],
) -> Result<Vec<ContentItem>, ScanError> {
    let mut items = Vec::new();
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            if name.starts_with('.') {
                return false;
            }
            if e.file_type().is_dir() && e.depth() == 1 && skip_dirs.contains(&name.as_ref()) {
                return false;
            }
            true
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_content_file(entry.path()) {
            continue;
        }
        let item = load_item(entry.path(), root)?;
        let key = (item.dir.clone(), item.slug.clone());
        if !seen.insert(key) {
            return Err(ScanError::DuplicateSlug(item.slug, item.dir));
        }
        items.push(item);
    }

    items.sort_by(|a, b| a.source_path.cmp(&b.source_path));
    Ok(items)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .map(|e| CONTENT_EXTENSIONS.contains(&e.as_str()))
        .unwrap_or(false)
}

/// Load one content file into a [`ContentItem`].
fn load_item(path: &Path, root: &Path) -> Result<ContentItem, ScanError> {
    let raw = fs::read_to_string(path)?;
    let (front, body) = split_front_matter(&raw);

    let mut extra: BTreeMap<String, Value> = match front {
        Some(block) if !block.trim().is_empty() => {
            serde_yaml::from_str(block).map_err(|source| ScanError::FrontMatter {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => BTreeMap::new(),
    };

    let title = take_string(&mut extra, "title");
    let mut language = take_string(&mut extra, "language");
    let hidden = matches!(extra.remove("hidden"), Some(Value::Bool(true)));

    let rel = path.strip_prefix(root).unwrap_or(path);
    let source_path = rel.to_string_lossy().to_string();
    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let dir = match rel.parent() {
        Some(parent) if parent != Path::new("") => {
            format!("/{}/", parent.to_string_lossy())
        }
        _ => "/".to_string(),
    };

    // A filename-embedded suffix wins over front matter and marks the item
    // as already carrying its language.
    let filename = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let mut multilingual = None;
    if let Some(code) = detect::language_from_name(&filename) {
        language = Some(code.to_string());
        multilingual = Some(true);
    }

    let title = title
        .or_else(|| heading_title(body))
        .unwrap_or_else(|| slug.clone());

    Ok(ContentItem {
        slug,
        source_path,
        dir,
        title,
        language,
        multilingual,
        main_language: None,
        hidden,
        body: body.to_string(),
        extra,
        url: None,
        pager: None,
    })
}

fn take_string(extra: &mut BTreeMap<String, Value>, key: &str) -> Option<String> {
    match extra.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            extra.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

/// Title from the first `# heading` in the body.
fn heading_title(body: &str) -> Option<String> {
    body.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
}

/// Split an optional `---`-delimited YAML front matter block off the body.
fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(rest) = raw.strip_prefix("---\n") else {
        return (None, raw);
    };
    if let Some(body) = rest.strip_prefix("---\n") {
        return (Some(""), body);
    }
    if rest == "---" {
        return (Some(""), "");
    }
    if let Some(pos) = rest.find("\n---\n") {
        (Some(&rest[..pos]), &rest[pos + 5..])
    } else if let Some(block) = rest.strip_suffix("\n---") {
        (Some(block), "")
    } else {
        (None, raw)
    }
}
