//! # Polysite
//!
//! A minimal multilingual content pipeline for static sites. Your
//! filesystem is the data source: markdown files become pages, files under
//! `posts/` become posts, and every item is expanded into one variant per
//! configured language with a localized URL.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Polysite processes content through two stages and hands the result to
//! an external renderer as a JSON manifest:
//!
//! ```text
//! 1. Scan      content/  →  Site             (filesystem → items, language detection)
//! 2. Localize  Site      →  manifest.json    (expansion + pagination + URL resolution)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Renderer independence**: templating, Markdown conversion, and file
//!   writing are someone else's job; the manifest is the whole interface.
//! - **Testability**: the localize stage is a function from `Site` to
//!   `Site`, so unit tests exercise the pipeline without touching the
//!   filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory, parses front matter, produces the `Site` |
//! | [`pipeline`] | Stage 2 — runs the localize passes in their fixed order |
//! | [`detect`] | `<base>.<xx>` filename-convention parser used by scan and resolve |
//! | [`expand`] | Duplicates items across the configured languages |
//! | [`resolve`] | Localized URL and output-directory derivation |
//! | [`paginate`] | Language-partitioned pagination of post listings |
//! | [`translate`] | Per-language translation dictionaries and localized includes |
//! | [`tags`] | Renderer-facing hooks: collection filter tag, language indicators |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`types`] | Shared types serialized in the manifest (`ContentItem`, `Pager`, `Site`) |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## A Fixed Stage Sequence, Not Plugins
//!
//! Every pass runs in one documented order (see [`pipeline`]). There is no
//! plugin discovery, no priority sorting, no method overriding: URL
//! localization is a plain function applied to the base URL, and the
//! translation cache is an object you construct. What runs, and when, is
//! visible in one screen of code.
//!
//! ## Expansion Over Negotiation
//!
//! Rather than resolving the "right" language at request time, the
//! pipeline materializes every page and post in every configured language
//! up front. The output is plain static files per language; nothing on the
//! serving side needs to know the site is multilingual.
//!
//! ## Manifest-Out
//!
//! The pipeline ends at `manifest.json`. Rendering is deliberately out of
//! scope: any templating system that can read JSON can consume the
//! localized site, and the pipeline stays testable as pure data
//! transformation.
//!
//! ## Single-Threaded By Design
//!
//! Expansion appends to the collection it iterates (over a fixed snapshot
//! of the pre-existing items). Keeping the pipeline single-threaded and
//! sequential makes that the only ordering hazard in the codebase.

pub mod config;
pub mod detect;
pub mod expand;
pub mod output;
pub mod paginate;
pub mod pipeline;
pub mod resolve;
pub mod scan;
pub mod tags;
pub mod translate;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
