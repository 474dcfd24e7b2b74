//! Display styling for statuses and tags.
//!
//! The site renders a colored badge for every status and an icon chip for
//! well-known tags. Styles live here so listings, detail pages and the CLI
//! agree on labels.

use crate::mods::ModStatus;
use serde::Serialize;

/// Badge shown next to a mod's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub label: &'static str,
    pub color: &'static str,
    /// Utility classes for the badge background and text, light and dark.
    pub bg_class: &'static str,
}

/// Icon and accent color for a known tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn status_style(status: ModStatus) -> StatusStyle {
    match status {
        ModStatus::Stable => StatusStyle {
            label: "Stable",
            color: "green",
            bg_class: "bg-green-500/10 text-green-600 dark:text-green-400",
        },
        ModStatus::Beta => StatusStyle {
            label: "Beta",
            color: "yellow",
            bg_class: "bg-yellow-500/10 text-yellow-600 dark:text-yellow-400",
        },
        ModStatus::Wip => StatusStyle {
            label: "Work in Progress",
            color: "orange",
            bg_class: "bg-orange-500/10 text-orange-600 dark:text-orange-400",
        },
    }
}

const TAG_STYLES: &[(&str, TagStyle)] = &[
    ("QoL", TagStyle { icon: "✨", color: "blue" }),
    ("UI", TagStyle { icon: "🎨", color: "purple" }),
    ("Utility", TagStyle { icon: "🔧", color: "green" }),
    ("Graphics", TagStyle { icon: "🖼️", color: "pink" }),
    ("Gameplay", TagStyle { icon: "🎮", color: "orange" }),
    ("Debug", TagStyle { icon: "🐛", color: "gray" }),
    ("Tools", TagStyle { icon: "⚙️", color: "slate" }),
];

/// Style for a tag, matched exactly. Unknown tags render as plain chips.
pub fn tag_style(tag: &str) -> Option<TagStyle> {
    TAG_STYLES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, style)| *style)
}

/// Tag text prefixed with its icon when it has one: `"✨ QoL"`, `"Modding"`.
pub fn tag_label(tag: &str) -> String {
    match tag_style(tag) {
        Some(style) => format!("{} {}", style.icon, tag),
        None => tag.to_string(),
    }
}
