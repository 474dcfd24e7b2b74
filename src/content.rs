//! Content directory loading.
//!
//! The feature list and the FAQ are authored outside this crate. They arrive
//! as TOML files in a content directory, together with the optional site
//! config and any extra mods:
//!
//! ```text
//! content/
//! ├── site.toml       # Site config (optional, see crate::config)
//! ├── features.toml   # [[feature]] tables → FeatureEntry
//! ├── faq.toml        # [[faq]] tables     → FaqEntry
//! └── mods.toml       # [[mod]] tables     → appended after the built-in mods
//! ```
//!
//! Every file is optional. A missing file contributes nothing, so an empty
//! (or absent) content directory yields the built-in registry and an index of
//! pages and quick actions only.
//!
//! ## Validation
//!
//! Loading runs [`validate`], which rejects the authoring mistakes the
//! queries silently tolerate: duplicate slugs, duplicate feature or FAQ ids,
//! and blank identifiers.

use crate::catalog;
use crate::config::{self, SiteConfig};
use crate::mods::{Mod, Registry};
use crate::search::{FaqEntry, FeatureEntry, SearchIndex};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FEATURES_FILE: &str = "features.toml";
pub const FAQ_FILE: &str = "faq.toml";
pub const MODS_FILE: &str = "mods.toml";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Duplicate mod slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("Empty {field} in {kind} entry #{index}")]
    EmptyField {
        kind: &'static str,
        field: &'static str,
        index: usize,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeaturesFile {
    #[serde(default)]
    feature: Vec<FeatureEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FaqFile {
    #[serde(default)]
    faq: Vec<FaqEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModsFile {
    #[serde(default, rename = "mod")]
    mods: Vec<Mod>,
}

/// Everything loaded from a content directory.
#[derive(Debug, Clone)]
pub struct Content {
    pub registry: Registry,
    pub features: Vec<FeatureEntry>,
    pub faq: Vec<FaqEntry>,
    pub config: SiteConfig,
}

impl Content {
    /// Build the search index from this content's collaborators and limits.
    pub fn search_index(&self) -> SearchIndex {
        SearchIndex::build_with(&self.features, &self.faq, self.config.search.clone())
    }
}

/// Read and parse a TOML file. Returns `Ok(None)` if it does not exist.
fn read_toml_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ContentError> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)?;
    let parsed = toml::from_str(&text).map_err(|source| ContentError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "read content file");
    Ok(Some(parsed))
}

pub fn load_features(root: &Path) -> Result<Vec<FeatureEntry>, ContentError> {
    let file: Option<FeaturesFile> = read_toml_file(&root.join(FEATURES_FILE))?;
    Ok(file.unwrap_or_default().feature)
}

pub fn load_faq(root: &Path) -> Result<Vec<FaqEntry>, ContentError> {
    let file: Option<FaqFile> = read_toml_file(&root.join(FAQ_FILE))?;
    Ok(file.unwrap_or_default().faq)
}

/// Extra mods from `mods.toml`, in file order.
pub fn load_extra_mods(root: &Path) -> Result<Vec<Mod>, ContentError> {
    let file: Option<ModsFile> = read_toml_file(&root.join(MODS_FILE))?;
    Ok(file.unwrap_or_default().mods)
}

/// Load and validate a whole content directory.
pub fn load_content(root: &Path) -> Result<Content, ContentError> {
    let config = config::load_config(root)?;

    let mut mods = catalog::builtin_mods();
    mods.extend(load_extra_mods(root)?);

    let content = Content {
        registry: Registry::new(mods),
        features: load_features(root)?,
        faq: load_faq(root)?,
        config,
    };
    validate(&content)?;

    tracing::debug!(
        mods = content.registry.len(),
        features = content.features.len(),
        faq = content.faq.len(),
        "loaded content from {}",
        root.display()
    );
    Ok(content)
}

/// Check identifier integrity across mods, features and FAQ entries.
pub fn validate(content: &Content) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for (index, m) in content.registry.mods().iter().enumerate() {
        require_non_empty(&m.slug, "mod", "slug", index)?;
        require_non_empty(&m.name, "mod", "name", index)?;
        if !seen.insert(m.slug.as_str()) {
            return Err(ContentError::DuplicateSlug(m.slug.clone()));
        }
    }

    unique_ids("feature", content.features.iter().map(|f| f.id.as_str()))?;
    unique_ids("faq", content.faq.iter().map(|f| f.id.as_str()))?;
    Ok(())
}

fn require_non_empty(
    value: &str,
    kind: &'static str,
    field: &'static str,
    index: usize,
) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::EmptyField { kind, field, index });
    }
    Ok(())
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for (index, id) in ids.enumerate() {
        require_non_empty(id, kind, "id", index)?;
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
