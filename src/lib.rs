//! # modsite
//!
//! The data layer behind a static mod showcase site: a hand-authored registry
//! of mods with read-only queries, and the build-time search index that powers
//! the site's command palette.
//!
//! # Architecture: Two Leaf Components
//!
//! There is no pipeline and no shared runtime state. Both halves are plain
//! in-memory values with synchronous, side-effect-free queries:
//!
//! ```text
//! Registry     Vec<Mod>                            →  filter / lookup / sort / related
//! SearchIndex  pages + actions + features + faq    →  Vec<SearchItem>  →  substring search
//! ```
//!
//! The registry is authored in Rust ([`catalog`]). The feature and FAQ lists
//! are external collaborators, read from TOML files in a content directory by
//! [`content`]. The search index is built once during start-up and handed to
//! whoever needs it; nothing is cached behind a global.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`mods`] | `Mod` record, `Registry` and its queries, `sort_mods` |
//! | [`catalog`] | The built-in mod payload |
//! | [`styles`] | Status badges and tag category styling |
//! | [`search`] | `SearchItem`, collaborator contracts, index generation and search |
//! | [`content`] | Content directory loading (`features.toml`, `faq.toml`, `mods.toml`) and integrity checks |
//! | [`config`] | `site.toml` loading over stock defaults and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Queries Never Fail
//!
//! Every registry and search query is total. A missing slug is `None`, an
//! unknown sort key keeps input order, a missing `updatedAt` compares as the
//! empty string. Errors only exist at the edges where files are read
//! ([`content::ContentError`], [`config::ConfigError`]).
//!
//! ## Explicit Index Value
//!
//! [`search::SearchIndex`] is computed once from its collaborator inputs and
//! passed by reference. Rebuilding is just calling
//! [`search::SearchIndex::build`] again; identical inputs yield identical
//! output.
//!
//! ## JSON Shape Is the Contract
//!
//! `Mod` and `SearchItem` serialize to the camelCase JSON that the rendering
//! layer reads (`shortDescription`, `updatedAt`, ...). Absent optionals are
//! omitted rather than written as `null`.

pub mod catalog;
pub mod config;
pub mod content;
pub mod mods;
pub mod output;
pub mod search;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_helpers;
