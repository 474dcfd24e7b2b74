//! Shared test utilities for the modsite test suite.
//!
//! Provides synthetic mod builders, a small sample registry, collaborator
//! fixtures for the search index, and helpers for writing content directories.
//!
//! # Sample Registry
//!
//! ```text
//! slug   status  tags                        featured  updatedAt   game
//! alpha  stable  QoL, UI, Utility            yes       2025-01-01  Upload Labs
//! beta   beta    Debug                       no        2024-06-01  Upload Labs
//! gamma  wip     UI, Graphics                no        2025-03-10  Other Game
//! delta  stable  QoL, Utility, Gameplay      yes       -           -
//! ```

use std::fs;
use std::path::Path;

use crate::mods::{Mod, ModStatus, Registry};
use crate::search::{FaqEntry, FeatureEntry, SearchItem};

// =========================================================================
// Mod fixtures
// =========================================================================

/// A minimal mod whose short description is `"<name> mod"`.
pub fn mod_fixture(slug: &str, name: &str, status: ModStatus, tags: &[&str]) -> Mod {
    let mut m = Mod::new(slug, name, format!("{name} mod"), status);
    m.tags = tags.iter().map(|t| t.to_string()).collect();
    m
}

/// The four-mod registry described in the module docs.
pub fn sample_registry() -> Registry {
    let mut alpha = mod_fixture("alpha", "Alpha", ModStatus::Stable, &["QoL", "UI", "Utility"]);
    alpha.featured = true;
    alpha.updated_at = Some("2025-01-01".into());
    alpha.game = Some("Upload Labs".into());

    let mut beta = mod_fixture("beta", "Beta", ModStatus::Beta, &["Debug"]);
    beta.updated_at = Some("2024-06-01".into());
    beta.game = Some("Upload Labs".into());

    let mut gamma = mod_fixture("gamma", "Gamma", ModStatus::Wip, &["UI", "Graphics"]);
    gamma.short_description = "Custom shaders for the canvas".into();
    gamma.updated_at = Some("2025-03-10".into());
    gamma.game = Some("Other Game".into());

    let mut delta = mod_fixture(
        "delta",
        "Delta",
        ModStatus::Stable,
        &["QoL", "Utility", "Gameplay"],
    );
    delta.featured = true;

    Registry::new(vec![alpha, beta, gamma, delta])
}

/// Slugs in sequence order.
pub fn slugs<'a>(mods: &[&'a Mod]) -> Vec<&'a str> {
    mods.iter().map(|m| m.slug.as_str()).collect()
}

// =========================================================================
// Search collaborator fixtures
// =========================================================================

pub fn feature_fixture(id: &str, title: &str, tags: &[&str]) -> FeatureEntry {
    FeatureEntry {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} feature"),
        icon: None,
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.iter().map(|t| t.to_string()).collect())
        },
    }
}

pub fn faq_fixture(id: &str, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Item ids in sequence order.
pub fn item_ids<'a>(items: impl IntoIterator<Item = &'a SearchItem>) -> Vec<&'a str> {
    items.into_iter().map(|i| i.id.as_str()).collect()
}

/// Find a search item by id. Panics if not found.
pub fn find_item<'a>(items: &'a [SearchItem], id: &str) -> &'a SearchItem {
    items.iter().find(|i| i.id == id).unwrap_or_else(|| {
        let ids = item_ids(items);
        panic!("search item '{id}' not found. Available: {ids:?}")
    })
}

// =========================================================================
// Content directories
// =========================================================================

/// Write `body` to `dir/name`, creating `dir` if needed.
pub fn write_content_file(dir: &Path, name: &str, body: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}
