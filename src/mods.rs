//! Mod records and the read-only registry.
//!
//! The registry is the system of record for mod metadata. It powers the
//! homepage featured list, the `/mods` directory, the `/mods/<slug>` detail
//! pages, and the related-mods strip at the bottom of each detail page.
//!
//! ## Slugs
//!
//! A slug is the primary key and the URL segment of a mod. Uniqueness is an
//! authoring contract checked by [`crate::content::validate`]; the registry
//! itself tolerates duplicates and resolves lookups to the first match.
//!
//! ## Ordering
//!
//! All queries preserve registry order unless they explicitly sort. Sorting is
//! always stable, so ties keep their input order.

use feruca::Collator;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Number of related mods shown when the caller does not pick a limit.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Release maturity of a mod.
///
/// Declaration order is the sort order: stable, then beta, then wip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModStatus {
    Stable,
    Beta,
    Wip,
}

impl ModStatus {
    /// Fixed rank used by [`SortBy::Status`].
    pub fn rank(self) -> u8 {
        match self {
            ModStatus::Stable => 0,
            ModStatus::Beta => 1,
            ModStatus::Wip => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModStatus::Stable => "stable",
            ModStatus::Beta => "beta",
            ModStatus::Wip => "wip",
        }
    }
}

/// Where a [`ModLink`] points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Steam,
    Github,
    Docs,
    Issues,
    Discord,
    Modio,
    Website,
}

/// An outbound link on a mod page. Several links may share a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModLink {
    #[serde(rename = "type")]
    pub kind: LinkType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One distributed modification package.
///
/// Optional scalars are `None` when absent; optional lists are empty. Neither
/// is serialized when absent, so the JSON matches the hand-authored shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Mod {
    pub slug: String,
    pub name: String,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub status: ModStatus,
    /// Free-text labels. Order is preserved; matching is exact and case-sensitive.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ModLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// ISO-8601 date. Only ever compared lexicographically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshots: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compatibility: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_issues: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
}

impl Mod {
    /// A mod with only the required fields set.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        short_description: impl Into<String>,
        status: ModStatus,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            short_description: short_description.into(),
            long_description: None,
            status,
            tags: Vec::new(),
            links: Vec::new(),
            version: None,
            updated_at: None,
            hero_image: None,
            logo: None,
            screenshots: Vec::new(),
            features: Vec::new(),
            install_instructions: None,
            compatibility: Vec::new(),
            known_issues: Vec::new(),
            featured: false,
            game: None,
        }
    }

    /// Case-insensitive substring match over name, short description and tags.
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.short_description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

/// Sort key accepted by [`sort_mods`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Name ascending, case-insensitive first.
    Name,
    /// `updatedAt` descending; mods without a date sink to the end.
    Updated,
    /// Stable, then beta, then wip.
    Status,
    /// Anything unrecognized. Keeps input order.
    Unsorted,
}

impl From<&str> for SortBy {
    fn from(value: &str) -> Self {
        match value {
            "name" => SortBy::Name,
            "updated" => SortBy::Updated,
            "status" => SortBy::Status,
            _ => SortBy::Unsorted,
        }
    }
}

/// Return a newly ordered copy of `mods`. The input is never touched.
pub fn sort_mods<'a, I>(mods: I, sort_by: SortBy) -> Vec<&'a Mod>
where
    I: IntoIterator<Item = &'a Mod>,
{
    let mut sorted: Vec<&Mod> = mods.into_iter().collect();
    match sort_by {
        SortBy::Name => {
            // Unicode Collation Algorithm, root tailoring: accents and case only
            // break ties, lowercase before uppercase.
            let mut collator = Collator::default();
            sorted.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortBy::Updated => sorted.sort_by(|a, b| {
            let a = a.updated_at.as_deref().unwrap_or("");
            let b = b.updated_at.as_deref().unwrap_or("");
            b.cmp(a)
        }),
        SortBy::Status => sorted.sort_by_key(|m| m.status.rank()),
        SortBy::Unsorted => {}
    }
    sorted
}

/// The canonical, read-only list of mods.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    mods: Vec<Mod>,
    /// Slug → index of the first mod carrying it.
    by_slug: HashMap<String, usize>,
}

impl Registry {
    pub fn new(mods: Vec<Mod>) -> Self {
        let mut by_slug = HashMap::with_capacity(mods.len());
        for (i, m) in mods.iter().enumerate() {
            by_slug.entry(m.slug.clone()).or_insert(i);
        }
        Self { mods, by_slug }
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(crate::catalog::builtin_mods())
    }

    /// All mods in registry order.
    pub fn mods(&self) -> &[Mod] {
        &self.mods
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }

    pub fn get_featured_mods(&self) -> Vec<&Mod> {
        self.mods.iter().filter(|m| m.featured).collect()
    }

    /// Exact, case-sensitive slug lookup. First match wins on duplicates.
    pub fn get_mod_by_slug(&self, slug: &str) -> Option<&Mod> {
        self.by_slug.get(slug).map(|&i| &self.mods[i])
    }

    pub fn get_mods_by_tag(&self, tag: &str) -> Vec<&Mod> {
        self.mods
            .iter()
            .filter(|m| m.tags.iter().any(|t| t == tag))
            .collect()
    }

    /// Every tag used by any mod, deduplicated and sorted ascending.
    pub fn get_all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .mods
            .iter()
            .flat_map(|m| m.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(str::to_string).collect()
    }

    /// Every game named by any mod, deduplicated and sorted ascending.
    pub fn get_all_games(&self) -> Vec<String> {
        let games: BTreeSet<&str> = self
            .mods
            .iter()
            .filter_map(|m| m.game.as_deref())
            .collect();
        games.into_iter().map(str::to_string).collect()
    }

    /// Case-insensitive substring search over name, short description and tags.
    ///
    /// The empty query is a substring of everything and returns every mod.
    pub fn search_mods(&self, query: &str) -> Vec<&Mod> {
        let needle = query.to_lowercase();
        self.mods
            .iter()
            .filter(|m| m.matches_lowercase(&needle))
            .collect()
    }

    /// Mods sharing tags with `target`, best match first, at most `limit`.
    ///
    /// The score of a candidate is the number of its tags that also appear on
    /// `target`, counted per occurrence: a tag listed twice on the candidate
    /// counts twice. Candidates with no shared tag are dropped. `target` is
    /// excluded by slug, so it never shows up next to itself.
    pub fn get_related_mods(&self, target: &Mod, limit: usize) -> Vec<&Mod> {
        let mut scored: Vec<(&Mod, usize)> = self
            .mods
            .iter()
            .filter(|m| m.slug != target.slug)
            .map(|m| {
                let score = m.tags.iter().filter(|t| target.tags.contains(t)).count();
                (m, score)
            })
            .filter(|&(_, score)| score > 0)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().take(limit).map(|(m, _)| m).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn status_rank_orders_stable_beta_wip() {
        assert!(ModStatus::Stable.rank() < ModStatus::Beta.rank());
        assert!(ModStatus::Beta.rank() < ModStatus::Wip.rank());
    }

    #[test]
    fn sort_by_parses_known_keys() {
        assert_eq!(SortBy::from("name"), SortBy::Name);
        assert_eq!(SortBy::from("updated"), SortBy::Updated);
        assert_eq!(SortBy::from("status"), SortBy::Status);
    }

    #[test]
    fn sort_by_unknown_key_is_unsorted() {
        assert_eq!(SortBy::from("downloads"), SortBy::Unsorted);
        assert_eq!(SortBy::from("Name"), SortBy::Unsorted);
        assert_eq!(SortBy::from(""), SortBy::Unsorted);
    }

    // =========================================================================
    // Lookup and filters
    // =========================================================================

    #[test]
    fn featured_mods_keep_registry_order() {
        let registry = sample_registry();
        assert_eq!(
            slugs(&registry.get_featured_mods()),
            vec!["alpha", "delta"]
        );
    }

    #[test]
    fn featured_mods_empty_when_none_flagged() {
        let registry = Registry::new(vec![
            mod_fixture("a", "A", ModStatus::Stable, &["QoL"]),
            mod_fixture("b", "B", ModStatus::Beta, &["UI"]),
        ]);
        assert!(registry.get_featured_mods().is_empty());
    }

    #[test]
    fn every_mod_resolves_to_itself_by_slug() {
        let registry = sample_registry();
        for m in registry.mods() {
            let found = registry.get_mod_by_slug(&m.slug).unwrap();
            assert!(std::ptr::eq(found, m), "slug {} resolved elsewhere", m.slug);
        }
    }

    #[test]
    fn slug_lookup_is_case_sensitive() {
        let registry = sample_registry();
        assert!(registry.get_mod_by_slug("ALPHA").is_none());
        assert!(registry.get_mod_by_slug("missing").is_none());
    }

    #[test]
    fn duplicate_slug_resolves_to_first() {
        let registry = Registry::new(vec![
            mod_fixture("dup", "First", ModStatus::Stable, &[]),
            mod_fixture("dup", "Second", ModStatus::Stable, &[]),
        ]);
        assert_eq!(registry.get_mod_by_slug("dup").unwrap().name, "First");
    }

    #[test]
    fn mods_by_tag_is_exact_match() {
        let registry = sample_registry();
        assert_eq!(slugs(&registry.get_mods_by_tag("UI")), vec!["alpha", "gamma"]);
        assert!(registry.get_mods_by_tag("ui").is_empty());
        assert!(registry.get_mods_by_tag("U").is_empty());
    }

    #[test]
    fn all_tags_sorted_and_deduplicated() {
        let registry = sample_registry();
        assert_eq!(
            registry.get_all_tags(),
            vec!["Debug", "Gameplay", "Graphics", "QoL", "UI", "Utility"]
        );
    }

    #[test]
    fn all_tags_empty_registry() {
        assert!(Registry::default().get_all_tags().is_empty());
    }

    #[test]
    fn all_games_skips_absent() {
        let registry = sample_registry();
        assert_eq!(registry.get_all_games(), vec!["Other Game", "Upload Labs"]);
    }

    // =========================================================================
    // searchMods
    // =========================================================================

    #[test]
    fn search_matches_name_case_insensitively() {
        let registry = sample_registry();
        assert_eq!(slugs(&registry.search_mods("ALPHA")), vec!["alpha"]);
    }

    #[test]
    fn search_matches_description() {
        let registry = sample_registry();
        assert_eq!(slugs(&registry.search_mods("shaders")), vec!["gamma"]);
    }

    #[test]
    fn search_matches_tag_substring() {
        let registry = sample_registry();
        assert_eq!(slugs(&registry.search_mods("debu")), vec!["beta"]);
    }

    #[test]
    fn search_empty_query_returns_everything() {
        let registry = sample_registry();
        assert_eq!(
            slugs(&registry.search_mods("")),
            vec!["alpha", "beta", "gamma", "delta"]
        );
    }

    #[test]
    fn search_no_match_is_empty() {
        let registry = sample_registry();
        assert!(registry.search_mods("zzz").is_empty());
    }

    // =========================================================================
    // sortMods
    // =========================================================================

    #[test]
    fn sort_by_name_ascending() {
        let registry = sample_registry();
        let sorted = sort_mods(registry.mods(), SortBy::Name);
        assert_eq!(slugs(&sorted), vec!["alpha", "beta", "delta", "gamma"]);
    }

    #[test]
    fn sort_by_name_ignores_case() {
        let mods = vec![
            mod_fixture("z", "zeta", ModStatus::Stable, &[]),
            mod_fixture("a", "Alpha", ModStatus::Stable, &[]),
            mod_fixture("b", "beta", ModStatus::Stable, &[]),
        ];
        let sorted = sort_mods(&mods, SortBy::Name);
        assert_eq!(slugs(&sorted), vec!["a", "b", "z"]);
    }

    #[test]
    fn sort_by_name_places_accented_letters_in_alphabet() {
        let mods = vec![
            mod_fixture("z", "Zephyr", ModStatus::Stable, &[]),
            mod_fixture("e", "Éclair", ModStatus::Stable, &[]),
            mod_fixture("f", "Foundry", ModStatus::Stable, &[]),
        ];
        let sorted = sort_mods(&mods, SortBy::Name);
        assert_eq!(slugs(&sorted), vec!["e", "f", "z"]);
    }

    #[test]
    fn sort_by_name_case_only_difference_puts_lowercase_first() {
        let mods = vec![
            mod_fixture("upper", "Relay", ModStatus::Stable, &[]),
            mod_fixture("lower", "relay", ModStatus::Stable, &[]),
        ];
        let sorted = sort_mods(&mods, SortBy::Name);
        assert_eq!(slugs(&sorted), vec!["lower", "upper"]);
    }

    #[test]
    fn sort_by_name_is_idempotent() {
        let registry = sample_registry();
        let once = sort_mods(registry.mods(), SortBy::Name);
        let twice = sort_mods(once.clone(), SortBy::Name);
        assert_eq!(slugs(&once), slugs(&twice));
    }

    #[test]
    fn sort_by_updated_newest_first_missing_last() {
        let registry = sample_registry();
        let sorted = sort_mods(registry.mods(), SortBy::Updated);
        assert_eq!(slugs(&sorted), vec!["gamma", "alpha", "beta", "delta"]);
    }

    #[test]
    fn sort_by_updated_missing_dates_keep_input_order() {
        let mods = vec![
            mod_fixture("x", "X", ModStatus::Stable, &[]),
            mod_fixture("y", "Y", ModStatus::Stable, &[]),
        ];
        let sorted = sort_mods(&mods, SortBy::Updated);
        assert_eq!(slugs(&sorted), vec!["x", "y"]);
    }

    #[test]
    fn sort_by_status_groups_and_is_stable() {
        let mods = vec![
            mod_fixture("w1", "W1", ModStatus::Wip, &[]),
            mod_fixture("s1", "S1", ModStatus::Stable, &[]),
            mod_fixture("b1", "B1", ModStatus::Beta, &[]),
            mod_fixture("s2", "S2", ModStatus::Stable, &[]),
            mod_fixture("w2", "W2", ModStatus::Wip, &[]),
            mod_fixture("b2", "B2", ModStatus::Beta, &[]),
        ];
        let sorted = sort_mods(&mods, SortBy::Status);
        assert_eq!(slugs(&sorted), vec!["s1", "s2", "b1", "b2", "w1", "w2"]);
    }

    #[test]
    fn sort_unsorted_keeps_input_order() {
        let registry = sample_registry();
        let sorted = sort_mods(registry.mods(), SortBy::from("popularity"));
        assert_eq!(slugs(&sorted), vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let mods = vec![
            mod_fixture("b", "B", ModStatus::Wip, &[]),
            mod_fixture("a", "A", ModStatus::Stable, &[]),
        ];
        let snapshot = mods.clone();
        let sorted = sort_mods(&mods, SortBy::Name);
        assert_eq!(slugs(&sorted), vec!["a", "b"]);
        assert_eq!(mods, snapshot);
    }

    // =========================================================================
    // getRelatedMods
    // =========================================================================

    #[test]
    fn related_excludes_self_and_orders_by_score() {
        let registry = sample_registry();
        let alpha = registry.get_mod_by_slug("alpha").unwrap();
        let related = registry.get_related_mods(alpha, DEFAULT_RELATED_LIMIT);
        // delta shares QoL and Utility, gamma only UI, beta nothing.
        assert_eq!(slugs(&related), vec!["delta", "gamma"]);
    }

    #[test]
    fn related_respects_limit() {
        let registry = sample_registry();
        let alpha = registry.get_mod_by_slug("alpha").unwrap();
        let related = registry.get_related_mods(alpha, 1);
        assert_eq!(slugs(&related), vec!["delta"]);
        assert!(registry.get_related_mods(alpha, 0).is_empty());
    }

    #[test]
    fn related_empty_when_no_shared_tags() {
        let registry = Registry::new(vec![
            mod_fixture("a", "A", ModStatus::Stable, &["QoL"]),
            mod_fixture("b", "B", ModStatus::Stable, &["UI"]),
        ]);
        let a = registry.get_mod_by_slug("a").unwrap();
        assert!(registry.get_related_mods(a, 3).is_empty());
    }

    #[test]
    fn related_ties_keep_registry_order() {
        let registry = Registry::new(vec![
            mod_fixture("target", "T", ModStatus::Stable, &["QoL", "UI"]),
            mod_fixture("one", "One", ModStatus::Stable, &["UI"]),
            mod_fixture("two", "Two", ModStatus::Stable, &["QoL"]),
            mod_fixture("three", "Three", ModStatus::Stable, &["QoL", "UI"]),
        ]);
        let target = registry.get_mod_by_slug("target").unwrap();
        let related = registry.get_related_mods(target, 3);
        assert_eq!(slugs(&related), vec!["three", "one", "two"]);
    }

    #[test]
    fn related_default_limit_keeps_highest_scores() {
        let registry = Registry::new(vec![
            mod_fixture("target", "T", ModStatus::Stable, &["QoL", "UI", "Debug"]),
            mod_fixture("one", "One", ModStatus::Stable, &["UI"]),
            mod_fixture("none", "None", ModStatus::Stable, &["Graphics"]),
            mod_fixture("two", "Two", ModStatus::Stable, &["QoL", "Debug"]),
            mod_fixture("three", "Three", ModStatus::Stable, &["Debug", "UI", "QoL"]),
            mod_fixture("also-one", "Also One", ModStatus::Stable, &["QoL"]),
            mod_fixture("also-two", "Also Two", ModStatus::Stable, &["UI", "QoL"]),
        ]);
        let target = registry.get_mod_by_slug("target").unwrap();
        let related = registry.get_related_mods(target, DEFAULT_RELATED_LIMIT);

        assert_eq!(related.len(), DEFAULT_RELATED_LIMIT);
        assert_eq!(slugs(&related), vec!["three", "two", "also-two"]);

        let score = |m: &Mod| m.tags.iter().filter(|t| target.tags.contains(t)).count();
        let scores: Vec<usize> = related.iter().map(|m| score(*m)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
    }

    #[test]
    fn related_counts_duplicate_tags_per_occurrence() {
        let registry = Registry::new(vec![
            mod_fixture("target", "T", ModStatus::Stable, &["QoL", "UI"]),
            mod_fixture("pair", "Pair", ModStatus::Stable, &["QoL", "UI"]),
            mod_fixture("echo", "Echo", ModStatus::Stable, &["QoL", "QoL", "QoL"]),
        ]);
        let target = registry.get_mod_by_slug("target").unwrap();
        let related = registry.get_related_mods(target, 3);
        assert_eq!(slugs(&related), vec!["echo", "pair"]);
    }

    #[test]
    fn related_target_outside_registry() {
        let registry = sample_registry();
        let outsider = mod_fixture("outsider", "Outsider", ModStatus::Wip, &["Debug"]);
        let related = registry.get_related_mods(&outsider, 3);
        assert_eq!(slugs(&related), vec!["beta"]);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn mod_json_uses_camel_case_and_omits_absent() {
        let mut m = mod_fixture("alpha", "Alpha", ModStatus::Beta, &["QoL"]);
        m.updated_at = Some("2025-01-01".into());
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["shortDescription"], "Alpha mod");
        assert_eq!(json["updatedAt"], "2025-01-01");
        assert_eq!(json["status"], "beta");
        assert!(json.get("game").is_none());
        assert!(json.get("featured").is_none());
        assert!(json.get("screenshots").is_none());
    }

    #[test]
    fn mod_link_type_serializes_as_type() {
        let link = ModLink {
            kind: LinkType::Modio,
            url: "https://mod.io/x".into(),
            label: None,
        };
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "modio");
        assert!(json.get("label").is_none());
    }
}
