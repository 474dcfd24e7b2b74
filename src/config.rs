//! Site configuration module.
//!
//! Handles loading and validating `site.toml`. The file lives in the content
//! directory next to `features.toml` and `faq.toml`; stock defaults are
//! overridden by whatever keys it sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [search]
//! empty_query_limit = 10    # Items shown before the user types anything
//! max_results = 15          # Cap on matches for a non-empty query
//! faq_excerpt_chars = 100   # FAQ answer characters kept in the index
//!
//! [related]
//! limit = 3                 # Related mods shown on a detail page
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [search]
//! max_results = 25
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name of the site config inside the content directory.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Command palette search limits.
    pub search: SearchConfig,
    /// Related-mods strip on detail pages.
    pub related: RelatedConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.empty_query_limit == 0 {
            return Err(ConfigError::Validation(
                "search.empty_query_limit must be at least 1".into(),
            ));
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::Validation(
                "search.max_results must be at least 1".into(),
            ));
        }
        if self.search.faq_excerpt_chars == 0 {
            return Err(ConfigError::Validation(
                "search.faq_excerpt_chars must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Search index and command palette settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Items returned for an empty or whitespace-only query.
    pub empty_query_limit: usize,
    /// Maximum matches returned for a real query.
    pub max_results: usize,
    /// Characters of a FAQ answer kept before the `...` suffix.
    pub faq_excerpt_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query_limit: 10,
            max_results: 15,
            faq_excerpt_chars: 100,
        }
    }
}

/// Related-mods settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelatedConfig {
    /// How many related mods a detail page lists.
    pub limit: usize,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            limit: crate::mods::DEFAULT_RELATED_LIMIT,
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `site.toml` in the given directory.
///
/// A missing file yields the defaults. Keys the file leaves out keep their
/// default values through `#[serde(default)]`; unknown keys are rejected and
/// the result is validated.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let text = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&text)?;
    tracing::debug!(dir = %dir.display(), "loaded {CONFIG_FILE}");
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# modsite configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as site.toml in the content directory, next to
# features.toml, faq.toml and mods.toml.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Command palette search
# ---------------------------------------------------------------------------
[search]
# Items listed before the user types anything (empty or blank query).
empty_query_limit = 10

# Maximum matches returned for a non-empty query. Matches are never ranked;
# the first ones in index order win.
max_results = 15

# Characters of each FAQ answer kept in the index. "..." is always appended.
faq_excerpt_chars = 100

# ---------------------------------------------------------------------------
# Mod detail pages
# ---------------------------------------------------------------------------
[related]
# Related mods (by shared tags) listed under each mod.
limit = 3
"##
}
