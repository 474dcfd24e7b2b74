//! The hand-authored mod payload.
//!
//! Add new mods to [`builtin_mods`]; they appear on the homepage, the mods
//! directory and their own detail page without further wiring. Extra mods can
//! also be appended per site from `mods.toml` (see [`crate::content`]).

use crate::mods::{LinkType, Mod, ModLink, ModStatus};

fn link(kind: LinkType, url: &str, label: &str) -> ModLink {
    ModLink {
        kind,
        url: url.to_string(),
        label: Some(label.to_string()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tajs_mod() -> Mod {
    Mod {
        slug: "tajs-mod".into(),
        name: "Taj's Mod".into(),
        short_description: "A growing collection of Utility / QoL + Visual Tweaks for Upload Labs, without overhauling the core gameplay loop.".into(),
        long_description: Some(
            "Taj's Mod is a comprehensive quality-of-life enhancement mod for Upload Labs. \
It provides a wide range of features designed to improve your gameplay experience without \
fundamentally changing the game's core mechanics.

From the Command Palette for quick access to any feature, to customizable group patterns \
and wire colors, Taj's Mod focuses on making your experience smoother and more enjoyable."
                .into(),
        ),
        status: ModStatus::Stable,
        tags: strings(&["QoL", "UI", "Utility", "Gameplay"]),
        links: vec![
            link(
                LinkType::Steam,
                "https://steamcommunity.com/sharedfiles/filedetails/?id=3628222709",
                "Steam Workshop",
            ),
            link(LinkType::Github, "https://github.com/TajemnikTV/TajsMod", "GitHub"),
            link(LinkType::Docs, "/docs/", "Documentation"),
            link(
                LinkType::Issues,
                "https://github.com/TajemnikTV/TajsMod/issues",
                "Report Issues",
            ),
            link(LinkType::Discord, "https://discord.gg/enigmadev", "Discord"),
        ],
        version: Some("0.1.0".into()),
        updated_at: Some("2025-01-01".into()),
        hero_image: Some("/brand/TajsModHeader.png".into()),
        logo: Some("/brand/TajsModLogo.png".into()),
        screenshots: strings(&[
            "/screenshots/command-palette.png",
            "/screenshots/settings-panel.png",
        ]),
        features: strings(&[
            "Command Palette - Quick access to commands with fuzzy search",
            "Mod Settings Panel - Comprehensive configuration UI",
            "Toast History - Never miss notifications",
            "Mute on Focus Loss - Auto-mute when tabbed out",
            "Smart Screenshots - High-quality capture with options",
            "Group Node Patterns - Custom visual patterns",
            "Wire Colors - Customize wire appearance",
            "Disconnected Node Highlighter - Find unconnected nodes",
            "Wire Drop Menu - Quick node spawning",
            "Sticky Notes - Canvas organization tools",
            "Buy Max Button - Smart upgrade purchases",
            "Node Limit Control - Increase or remove limits",
        ]),
        install_instructions: Some(
            "Subscribe on the Steam Workshop for automatic installation and updates. \
The mod will be enabled automatically when you launch Upload Labs."
                .into(),
        ),
        compatibility: strings(&[
            "Compatible with the latest version of Upload Labs",
            "Works with most other mods",
            "Some features may conflict with mods that modify the same systems",
        ]),
        known_issues: strings(&["Some features require a game restart to take effect"]),
        featured: true,
        game: Some("Upload Labs".into()),
    }
}

/// Every mod shipped with the site, in display order.
pub fn builtin_mods() -> Vec<Mod> {
    vec![tajs_mod()]
}
