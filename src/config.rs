//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Configuration is sparse: stock defaults are overridden by whatever keys
//! the user's file provides, and unknown keys are rejected to catch typos
//! early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # Ordered list of supported language codes. The first entry is the
//! # default language, assigned to items that declare none.
//! languages = ["en"]
//!
//! # Posts per listing page. Omit to disable pagination.
//! # paginate = 10
//!
//! # Directory name (relative to the listing page) for pages 2..N.
//! # ":num" is replaced with the page number.
//! paginate_path = "page:num"
//!
//! # Directory holding per-language translation dictionaries (en.yml, fr.yml)
//! # and localized include files (en/..., fr/...).
//! translations_dir = "i18n"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Ordered list of supported language codes. Order matters: the first
    /// entry is the default language.
    pub languages: Vec<String>,
    /// Posts per listing page. `None` disables pagination.
    pub paginate: Option<usize>,
    /// Directory name pattern for listing pages 2..N; `:num` is replaced
    /// with the page number.
    pub paginate_path: String,
    /// Directory holding translation dictionaries and localized includes,
    /// relative to the content root.
    pub translations_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            languages: vec!["en".to_string()],
            paginate: None,
            paginate_path: "page:num".to_string(),
            translations_dir: "i18n".to_string(),
        }
    }
}

impl SiteConfig {
    /// The default language: the first configured entry.
    ///
    /// Valid after [`SiteConfig::validate`] — the language list is never
    /// empty.
    pub fn default_language(&self) -> &str {
        &self.languages[0]
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "languages must not be empty".into(),
            ));
        }
        for code in &self.languages {
            if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "language '{code}' is not a 2-letter lowercase code"
                )));
            }
        }
        if self.paginate == Some(0) {
            return Err(ConfigError::Validation(
                "paginate must be greater than zero".into(),
            ));
        }
        if !self.paginate_path.contains(":num") {
            return Err(ConfigError::Validation(
                "paginate_path must contain ':num'".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Polysite Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the content root:
#   content/config.toml
#
# Unknown keys will cause an error.

# Ordered list of supported language codes. Every page and post is expanded
# into one variant per language. The first entry is the default language,
# assigned to content that declares none.
languages = ["en"]

# ---------------------------------------------------------------------------
# Pagination
# ---------------------------------------------------------------------------
# Posts per listing page. When set, every index page gets one paginated
# sequence per language. Omit or comment out to disable pagination.
# paginate = 10

# Directory name for listing pages 2..N, relative to the listing page.
# ":num" is replaced with the page number (page2, page3, ...).
paginate_path = "page:num"

# ---------------------------------------------------------------------------
# Translations
# ---------------------------------------------------------------------------
# Directory (relative to the content root) holding per-language translation
# dictionaries (en.yml, fr.yml, ...) and localized include files (en/, fr/).
translations_dir = "i18n"
"##
}
