use clap::{Parser, Subcommand};
use modsite::mods::{SortBy, sort_mods};
use modsite::{config, content, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "modsite")]
#[command(about = "Mod registry and search index for a mod showcase site")]
#[command(long_about = "\
Mod registry and search index for a mod showcase site

The mod registry is built in. Feature and FAQ entries for the command palette
search index are read from a content directory:

  content/
  ├── site.toml        # Search limits, related-mods count (optional)
  ├── features.toml    # [[feature]] id, title, description, icon?, tags?
  ├── faq.toml         # [[faq]] id, question, answer
  └── mods.toml        # [[mod]] extra mods appended after the built-in ones

Run 'modsite gen-config' to print a documented site.toml.
Set RUST_LOG=debug to see which content files were read.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    content: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List mods, optionally filtered and sorted
    Mods {
        /// Sort key: name, updated or status (anything else keeps registry order)
        #[arg(long)]
        sort: Option<String>,
        /// Only mods carrying this exact tag
        #[arg(long)]
        tag: Option<String>,
        /// Case-insensitive search over name, description and tags
        #[arg(long)]
        search: Option<String>,
        /// Only featured mods
        #[arg(long)]
        featured: bool,
    },
    /// Show one mod and its related mods
    Show {
        /// Mod slug
        slug: String,
    },
    /// List every tag used by any mod
    Tags,
    /// List every game the mods target
    Games,
    /// Search the command palette index
    Search {
        /// Query text (empty lists the first entries)
        #[arg(default_value = "")]
        query: String,
    },
    /// Write the search index as JSON
    Index {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Load and validate the content directory
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let load = || content::load_content(&cli.content);

    match cli.command {
        Command::Mods {
            sort,
            tag,
            search,
            featured,
        } => {
            let content = load()?;
            let registry = &content.registry;
            let mut mods = match &search {
                Some(query) => registry.search_mods(query),
                None => registry.mods().iter().collect(),
            };
            if let Some(tag) = &tag {
                mods.retain(|m| m.tags.contains(tag));
            }
            if featured {
                mods.retain(|m| m.featured);
            }
            let sort_by = sort.as_deref().map(SortBy::from).unwrap_or(SortBy::Unsorted);
            if sort_by == SortBy::Unsorted && sort.is_some() {
                tracing::warn!(?sort, "unknown sort key, keeping registry order");
            }
            output::print_mod_list(&sort_mods(mods, sort_by));
        }
        Command::Show { slug } => {
            let content = load()?;
            let registry = &content.registry;
            let Some(m) = registry.get_mod_by_slug(&slug) else {
                return Err(format!("no mod with slug '{slug}'").into());
            };
            let related = registry.get_related_mods(m, content.config.related.limit);
            output::print_mod_detail(m, &related);
        }
        Command::Tags => {
            let content = load()?;
            for line in output::format_tags(&content.registry.get_all_tags()) {
                println!("{}", line);
            }
        }
        Command::Games => {
            let content = load()?;
            for game in content.registry.get_all_games() {
                println!("{}", game);
            }
        }
        Command::Search { query } => {
            let content = load()?;
            let index = content.search_index();
            output::print_search_results(&index.search(&query));
        }
        Command::Index { output: path } => {
            let content = load()?;
            let index = content.search_index();
            let json = index.to_json_pretty()?;
            match path {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, json)?;
                    println!("==> Wrote {} items to {}", index.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.content.display());
            let content = load()?;
            let index = content.search_index();
            output::print_check_output(&content, index.len());
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
