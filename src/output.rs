//! CLI output formatting.
//!
//! # Entity Display Contract
//!
//! Every listed entity leads with a positional index and its title; details
//! follow as indented context lines. Mods show their status badge label, search
//! results show their category and destination.
//!
//! ## Mods
//!
//! ```text
//! 001 Taj's Mod [Stable] v0.1.0
//!     Slug: tajs-mod
//!     Tags: ✨ QoL, 🎨 UI, 🔧 Utility, 🎮 Gameplay
//!     A growing collection of Utility / QoL + Visual Tweaks for Upl...
//! ```
//!
//! ## Search
//!
//! ```text
//! 001 [page] 🏠 Home → /
//! 002 [action] 🎮 Subscribe on Steam → https://steamcommunity.com/...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::content::Content;
use crate::mods::Mod;
use crate::search::{Category, SearchItem};
use crate::styles::{status_style, tag_label};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Page => "page",
        Category::Feature => "feature",
        Category::Faq => "faq",
        Category::Action => "action",
    }
}

/// `001 Taj's Mod [Stable] v0.1.0`
fn mod_header(index: usize, m: &Mod) -> String {
    let status = status_style(m.status).label;
    match &m.version {
        Some(v) => format!("{} {} [{}] v{}", format_index(index), m.name, status, v),
        None => format!("{} {} [{}]", format_index(index), m.name, status),
    }
}

fn tag_line(tags: &[String]) -> String {
    let labels: Vec<String> = tags.iter().map(|t| tag_label(t)).collect();
    labels.join(", ")
}

// ============================================================================
// Mods
// ============================================================================

/// Format a mod listing in the given order.
pub fn format_mod_list(mods: &[&Mod]) -> Vec<String> {
    if mods.is_empty() {
        return vec!["No mods found".to_string()];
    }

    let mut lines = Vec::new();
    for (i, m) in mods.iter().enumerate() {
        lines.push(mod_header(i + 1, m));
        lines.push(format!("{}Slug: {}", indent(1), m.slug));
        if !m.tags.is_empty() {
            lines.push(format!("{}Tags: {}", indent(1), tag_line(&m.tags)));
        }
        lines.push(format!(
            "{}{}",
            indent(1),
            truncate_desc(&m.short_description, 60)
        ));
    }
    lines
}

pub fn print_mod_list(mods: &[&Mod]) {
    for line in format_mod_list(mods) {
        println!("{}", line);
    }
}

/// Format a mod detail view followed by its related mods.
pub fn format_mod_detail(m: &Mod, related: &[&Mod]) -> Vec<String> {
    let status = status_style(m.status);
    let mut lines = vec![m.name.clone()];
    lines.push(format!("{}Slug: {}", indent(1), m.slug));
    lines.push(format!("{}Status: {}", indent(1), status.label));
    if let Some(version) = &m.version {
        lines.push(format!("{}Version: {}", indent(1), version));
    }
    if let Some(updated) = &m.updated_at {
        lines.push(format!("{}Updated: {}", indent(1), updated));
    }
    if let Some(game) = &m.game {
        lines.push(format!("{}Game: {}", indent(1), game));
    }
    if !m.tags.is_empty() {
        lines.push(format!("{}Tags: {}", indent(1), tag_line(&m.tags)));
    }
    lines.push(format!("{}{}", indent(1), m.short_description));

    if !m.features.is_empty() {
        lines.push(String::new());
        lines.push("Features".to_string());
        for feature in &m.features {
            lines.push(format!("{}- {}", indent(1), feature));
        }
    }

    if !m.links.is_empty() {
        lines.push(String::new());
        lines.push("Links".to_string());
        for link in &m.links {
            let label = link.label.as_deref().unwrap_or(&link.url);
            lines.push(format!("{}{} → {}", indent(1), label, link.url));
        }
    }

    if !m.known_issues.is_empty() {
        lines.push(String::new());
        lines.push("Known issues".to_string());
        for issue in &m.known_issues {
            lines.push(format!("{}- {}", indent(1), issue));
        }
    }

    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related".to_string());
        for (i, r) in related.iter().enumerate() {
            lines.push(format!("{}{} ({})", indent(1), mod_header(i + 1, r), r.slug));
        }
    }
    lines
}

pub fn print_mod_detail(m: &Mod, related: &[&Mod]) {
    for line in format_mod_detail(m, related) {
        println!("{}", line);
    }
}

/// One tag per line, with its icon when the tag has a style.
pub fn format_tags(tags: &[String]) -> Vec<String> {
    tags.iter().map(|t| tag_label(t)).collect()
}

// ============================================================================
// Search
// ============================================================================

/// Format search results as `NNN [category] icon title → href`.
pub fn format_search_results(results: &[&SearchItem]) -> Vec<String> {
    if results.is_empty() {
        return vec!["No results".to_string()];
    }

    results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let icon = item
                .icon
                .as_deref()
                .map(|icon| format!("{icon} "))
                .unwrap_or_default();
            format!(
                "{} [{}] {}{} → {}",
                format_index(i + 1),
                category_label(item.category),
                icon,
                item.title,
                item.href
            )
        })
        .collect()
}

pub fn print_search_results(results: &[&SearchItem]) {
    for line in format_search_results(results) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Summarize loaded content: counts per source plus the index size.
pub fn format_check_output(content: &Content, index_len: usize) -> Vec<String> {
    let featured = content.registry.get_featured_mods().len();
    vec![
        format!("Mods: {} ({} featured)", content.registry.len(), featured),
        format!("Tags: {}", content.registry.get_all_tags().len()),
        format!("Games: {}", content.registry.get_all_games().len()),
        format!("Features: {}", content.features.len()),
        format!("FAQ: {}", content.faq.len()),
        format!("Search index: {} items", index_len),
    ]
}

pub fn print_check_output(content: &Content, index_len: usize) {
    for line in format_check_output(content, index_len) {
        println!("{}", line);
    }
}
