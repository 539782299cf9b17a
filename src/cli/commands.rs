use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use crate::indexer::{SearchIndex, load_index};
use crate::models::SearchableItem;
use crate::overlay::GlobalSearch;
use crate::search::config::{
    DEFAULT_DEBOUNCE_MS, DEFAULT_ITEM_COUNT, DEFAULT_MAX_RECENT, DEFAULT_MAX_RESULTS,
};
use crate::search::{JsonlSink, RecentSearches, SearchAnalytics, SearchConfig};
use crate::storage::JsonFileStore;
use crate::utils::environment::DATA_DIR_ENV;
use crate::utils::{LogTarget, format_path_with_tilde, get_data_dir, init_logging};

#[derive(Parser)]
#[command(name = "trudy-search")]
#[command(version = "0.1.0")]
#[command(about = "Global search palette for the Trudy voice-agent dashboard", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// Directory holding recent searches and the TUI log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// JSON array of searchable items (defaults to the built-in catalogue).
    /// Items are regrouped by category, first appearance first.
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    /// Quiescence window before a typed term is applied
    #[arg(long, global = true, env = "TRUDY_SEARCH_DEBOUNCE_MS", default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Number of recent searches kept
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RECENT)]
    pub max_recent: usize,

    /// Items shown while the term is empty
    #[arg(long, global = true, default_value_t = DEFAULT_ITEM_COUNT)]
    pub default_items: usize,

    /// Cap on results returned for a term
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Append analytics events as JSON lines to this file
    #[arg(long, global = true)]
    pub analytics_log: Option<PathBuf>,

    /// Keep recent searches in memory only
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            debounce_ms: self.debounce_ms,
            max_recent: self.max_recent,
            default_items: self.default_items,
            max_results: self.max_results,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the dashboard with the interactive search overlay
    Browse,
    /// Run a single search and print grouped results
    Search {
        /// Term matched against titles, descriptions and categories
        term: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or manage recent searches
    Recent {
        #[command(subcommand)]
        action: Option<RecentAction>,
    },
    /// Show statistics about the search index
    Stats,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RecentAction {
    /// List recent searches, most recent first
    List,
    /// Remove all recent searches
    Clear,
    /// Remove a single recent search
    Remove {
        term: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = &cli.options;

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let data_dir = get_data_dir(options.data_dir.clone())?;
    match command {
        Commands::Browse => {
            init_logging(&LogTarget::File(data_dir.clone()), options.verbose)?;
            let search = build_search(options, &data_dir)?;
            crate::tui::run_interactive(search)?;
        }
        Commands::Search { term, json } => {
            init_logging(&LogTarget::Stderr, options.verbose)?;
            let mut search = build_search(options, &data_dir)?;
            run_search(&mut search, term, *json)?;
        }
        Commands::Recent { action } => {
            init_logging(&LogTarget::Stderr, options.verbose)?;
            let mut search = build_search(options, &data_dir)?;
            manage_recent(&mut search, action.clone().unwrap_or(RecentAction::List))?;
        }
        Commands::Stats => {
            init_logging(&LogTarget::Stderr, options.verbose)?;
            let search = build_search(options, &data_dir)?;
            show_stats(&search, options, &data_dir);
        }
    }

    Ok(())
}

/// Assemble the palette from the configured index, store and analytics sink
pub fn build_search(options: &GlobalOptions, data_dir: &Path) -> Result<GlobalSearch> {
    let index = match &options.index {
        Some(path) => load_index(path)?,
        None => SearchIndex::builtin(),
    };
    let config = options.search_config();

    let recent = if options.no_persist {
        RecentSearches::new(config.max_recent)
    } else {
        RecentSearches::with_store(config.max_recent, Box::new(JsonFileStore::new(data_dir)))
    };

    let analytics = match &options.analytics_log {
        Some(path) => SearchAnalytics::new(Box::new(JsonlSink::open(path)?)),
        None => SearchAnalytics::default(),
    };

    tracing::debug!(items = index.len(), persistent = recent.is_persistent(), "search assembled");
    Ok(GlobalSearch::new(index, config, recent, analytics))
}

fn run_search(search: &mut GlobalSearch, term: &str, json: bool) -> Result<()> {
    let now = Instant::now();
    search.open();
    search.set_term(term, now);
    search.tick(now + search.config().debounce());

    if json {
        let items: Vec<&SearchableItem> = search.result_items().collect();
        let out = serde_json::to_string_pretty(&items).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    let trimmed = term.trim();
    if search.results().is_no_match() {
        println!("No results found for \"{}\"", trimmed);
        return Ok(());
    }

    if trimmed.is_empty() {
        println!("Popular Items");
    } else {
        println!("Results for \"{}\" ({})", trimmed, search.results().len());
    }
    for group in search.groups() {
        println!();
        println!("{} ({})", group.category.label(), group.entries.len());
        for (position, item) in group.entries {
            println!("  {:>2}. {} - {}  [{}]", position + 1, item.title, item.description, item.href);
        }
    }

    Ok(())
}

fn manage_recent(search: &mut GlobalSearch, action: RecentAction) -> Result<()> {
    match action {
        RecentAction::List => {
            let terms = search.recent().terms();
            if terms.is_empty() {
                println!("No recent searches");
            }
            for (i, term) in terms.iter().enumerate() {
                println!("{:>2}. {}", i + 1, term);
            }
        }
        RecentAction::Clear => {
            let count = search.recent().len();
            search.clear_recent();
            println!("Cleared {} recent searches", count);
        }
        RecentAction::Remove { term } => {
            if !search.remove_recent(&term) {
                bail!("No recent search matching \"{}\"", term);
            }
            println!("Removed \"{}\"", term);
        }
    }
    Ok(())
}

fn show_stats(search: &GlobalSearch, options: &GlobalOptions, data_dir: &Path) {
    let index = search.index();

    println!("Search Index Statistics");
    println!("=======================");
    println!("Total items: {}", index.len());
    for (category, count) in index.category_counts() {
        println!("  {}: {}", category.label(), count);
    }
    println!();
    match &options.index {
        Some(path) => println!("Index file: {}", format_path_with_tilde(path)),
        None => println!("Index file: built-in catalogue"),
    }
    println!("Recent searches: {}", search.recent().len());
    println!("Data directory: {}", format_path_with_tilde(data_dir));
}
