//! Build-time search index for the command palette and global search.
//!
//! The index is a flat list of [`SearchItem`]s merged from four sources, in
//! this fixed order:
//!
//! ```text
//! 1. pages     static site pages           page-home, page-faq, ...
//! 2. actions   quick external links        action-steam, ...
//! 3. features  feature collaborator        feature-<id>   → /features/#<id>
//! 4. faq       FAQ collaborator            faq-<id>       → /faq/#<id>
//! ```
//!
//! Pages and actions are fixed. Features and FAQ entries come from outside
//! (see [`crate::content`]) through the [`FeatureEntry`] and [`FaqEntry`]
//! contracts, so the builder can be tested with synthetic data.
//!
//! Search is plain case-insensitive substring matching with no ranking: the
//! first matches in index order are returned.

use crate::config::SearchConfig;
use serde::{Deserialize, Serialize};

/// Icon used for every FAQ-derived item.
const FAQ_ICON: &str = "❓";

/// Which source an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Feature,
    Faq,
    Action,
}

/// One searchable entry surfaced by the command palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Unique, namespaced by source: `page-*`, `action-*`, `feature-*`, `faq-*`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// In-site path or absolute external URL.
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Only present on feature-derived items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SearchItem {
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .flatten()
                .any(|t| t.to_lowercase().contains(needle))
    }
}

/// A record supplied by the feature collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A record supplied by the FAQ collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A fixed index entry known at compile time.
struct StaticEntry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    href: &'static str,
    icon: &'static str,
}

const PAGES: &[StaticEntry] = &[
    StaticEntry {
        id: "page-home",
        title: "Home",
        description: "Homepage with overview and quick links",
        href: "/",
        icon: "🏠",
    },
    StaticEntry {
        id: "page-features",
        title: "Features",
        description: "Browse all mod features",
        href: "/features/",
        icon: "✨",
    },
    StaticEntry {
        id: "page-faq",
        title: "FAQ",
        description: "Frequently asked questions",
        href: "/faq/",
        icon: "❓",
    },
    StaticEntry {
        id: "page-roadmap",
        title: "Roadmap",
        description: "Planned features and improvements",
        href: "/roadmap/",
        icon: "🗺️",
    },
    StaticEntry {
        id: "page-support",
        title: "Support",
        description: "Get help and support the project",
        href: "/support/",
        icon: "💙",
    },
    StaticEntry {
        id: "page-docs",
        title: "Documentation",
        description: "Technical documentation and guides",
        href: "/docs/",
        icon: "📚",
    },
    StaticEntry {
        id: "page-troubleshooting",
        title: "Troubleshooting",
        description: "Diagnostic checklist and common fixes",
        href: "/troubleshooting/",
        icon: "🔧",
    },
    StaticEntry {
        id: "page-screenshots",
        title: "Screenshots",
        description: "Gallery of mod screenshots",
        href: "/screenshots/",
        icon: "📸",
    },
    StaticEntry {
        id: "page-credits",
        title: "Credits & License",
        description: "Acknowledgments and licensing info",
        href: "/credits/",
        icon: "📜",
    },
];

const ACTIONS: &[StaticEntry] = &[
    StaticEntry {
        id: "action-steam",
        title: "Subscribe on Steam",
        description: "Open Steam Workshop page",
        href: "https://steamcommunity.com/sharedfiles/filedetails/?id=3628222709",
        icon: "🎮",
    },
    StaticEntry {
        id: "action-github",
        title: "Open GitHub",
        description: "View source code and issues",
        href: "https://github.com/TajemnikTV/TajsMod",
        icon: "💻",
    },
    StaticEntry {
        id: "action-discord",
        title: "Join Discord",
        description: "EnigmaDev community server",
        href: "https://discord.gg/enigmadev",
        icon: "💬",
    },
    StaticEntry {
        id: "action-report",
        title: "Report Issue",
        description: "Report a bug on GitHub",
        href: "https://github.com/TajemnikTV/TajsMod/issues/new",
        icon: "🐛",
    },
];

fn static_item(entry: &StaticEntry, category: Category) -> SearchItem {
    SearchItem {
        id: entry.id.to_string(),
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        category,
        href: entry.href.to_string(),
        icon: Some(entry.icon.to_string()),
        tags: None,
    }
}

/// The first `max_chars` characters of `text` followed by `...`.
///
/// The suffix is appended even when nothing was cut.
fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Map a feature record into the unified item shape.
pub fn feature_item(feature: &FeatureEntry) -> SearchItem {
    SearchItem {
        id: format!("feature-{}", feature.id),
        title: feature.title.clone(),
        description: feature.description.clone(),
        category: Category::Feature,
        href: format!("/features/#{}", feature.id),
        icon: feature.icon.clone(),
        tags: feature.tags.clone(),
    }
}

/// Map a FAQ record into the unified item shape, keeping an answer excerpt.
pub fn faq_item(entry: &FaqEntry, excerpt_chars: usize) -> SearchItem {
    SearchItem {
        id: format!("faq-{}", entry.id),
        title: entry.question.clone(),
        description: excerpt(&entry.answer, excerpt_chars),
        category: Category::Faq,
        href: format!("/faq/#{}", entry.id),
        icon: Some(FAQ_ICON.to_string()),
        tags: None,
    }
}

/// Build the full index with the default excerpt length.
pub fn generate_search_index(features: &[FeatureEntry], faq: &[FaqEntry]) -> Vec<SearchItem> {
    generate_search_index_with(features, faq, &SearchConfig::default())
}

/// Build the full index: pages, actions, features, then FAQ, each in source order.
pub fn generate_search_index_with(
    features: &[FeatureEntry],
    faq: &[FaqEntry],
    config: &SearchConfig,
) -> Vec<SearchItem> {
    let mut items = Vec::with_capacity(PAGES.len() + ACTIONS.len() + features.len() + faq.len());
    items.extend(PAGES.iter().map(|p| static_item(p, Category::Page)));
    items.extend(ACTIONS.iter().map(|a| static_item(a, Category::Action)));
    items.extend(features.iter().map(feature_item));
    items.extend(faq.iter().map(|f| faq_item(f, config.faq_excerpt_chars)));
    items
}

/// Search with the default limits (10 for an empty query, 15 matches).
pub fn search_items<'a>(query: &str, items: &'a [SearchItem]) -> Vec<&'a SearchItem> {
    search_items_with(query, items, &SearchConfig::default())
}

/// Substring search over title, description and tags.
///
/// A blank query returns the first `empty_query_limit` items untouched.
/// Otherwise the first `max_results` matches are returned in input order.
pub fn search_items_with<'a>(
    query: &str,
    items: &'a [SearchItem],
    config: &SearchConfig,
) -> Vec<&'a SearchItem> {
    if query.trim().is_empty() {
        return items.iter().take(config.empty_query_limit).collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .take(config.max_results)
        .collect()
}

/// The search index, computed once and passed to whoever needs it.
///
/// Nothing invalidates it; build a new one if the collaborator data changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    #[serde(skip)]
    config: SearchConfig,
}

impl SearchIndex {
    pub fn build(features: &[FeatureEntry], faq: &[FaqEntry]) -> Self {
        Self::build_with(features, faq, SearchConfig::default())
    }

    pub fn build_with(features: &[FeatureEntry], faq: &[FaqEntry], config: SearchConfig) -> Self {
        let items = generate_search_index_with(features, faq, &config);
        tracing::debug!(
            items = items.len(),
            features = features.len(),
            faq = faq.len(),
            "built search index"
        );
        Self { items, config }
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Search using the limits the index was built with.
    pub fn search(&self, query: &str) -> Vec<&SearchItem> {
        search_items_with(query, &self.items, &self.config)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
