use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use newsglide::{
    canonicalize, personalize, resolve_topics, Clock, FixedClock, JsonFileTopics, MonthYear,
    RecentTopics, StaticTopics, SuggestConfig, SuggestionBuilder, SystemClock,
};

mod cli;
use cli::{display, Cli, Commands};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Payload {
    search_terms: Vec<String>,
    explore_topics: Vec<String>,
    trending_topics: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    let outcome = match cli.command {
        Commands::Suggest {
            input,
            trending,
            explored_store,
            config,
            limit,
            month,
            year,
            json,
        } => run_suggest(SuggestArgs {
            input,
            trending,
            explored_store,
            config,
            limit,
            month,
            year,
            json,
        }),
        Commands::Tokenize { text } => {
            display::print_canonical(&text, canonicalize(&text).as_ref());
            Ok(())
        }
        Commands::Track {
            store,
            capacity,
            topic,
        } => run_track(&store, capacity, &topic),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("NEWSGLIDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let subscriber = Registry::default().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")
}

struct SuggestArgs {
    input: Option<PathBuf>,
    trending: Option<PathBuf>,
    explored_store: Option<PathBuf>,
    config: Option<PathBuf>,
    limit: Option<usize>,
    month: Option<u32>,
    year: Option<i32>,
    json: bool,
}

fn read_payload(input: Option<&Path>) -> Result<Payload> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read payload from stdin")?;
            raw
        }
    };
    if raw.trim().is_empty() {
        return Ok(Payload::default());
    }
    serde_json::from_str(&raw).context("Invalid payload JSON")
}

fn resolve_period(month: Option<u32>, year: Option<i32>) -> Result<MonthYear> {
    match (month, year) {
        (Some(month), Some(year)) => MonthYear::new(month, year)
            .with_context(|| format!("Month must be 1-12, got {}", month)),
        (None, None) => Ok(SystemClock.month_year()),
        _ => bail!("--month and --year must be given together"),
    }
}

fn run_suggest(args: SuggestArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SuggestConfig::from_json_file(path)?,
        None => SuggestConfig::default(),
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    let payload = read_payload(args.input.as_deref())?;
    let mut explore_topics = payload.explore_topics;
    if let Some(path) = &args.explored_store {
        let store = RecentTopics::load(path)?;
        explore_topics.extend(store.topics().iter().cloned());
    }

    // A bad trending file only loses its own headlines
    let mut file_degraded = false;
    let mut trending_topics = payload.trending_topics;
    if let Some(path) = args.trending {
        let file = JsonFileTopics::new("trending-file", path);
        trending_topics.extend(resolve_topics(&file, &mut file_degraded));
    }

    let history = StaticTopics::new("search-history", payload.search_terms);
    let explored = StaticTopics::new("explored-topics", explore_topics);
    let trending = StaticTopics::new("trending", trending_topics);

    let period = resolve_period(args.month, args.year)?;
    let builder = SuggestionBuilder::new()
        .with_config(config)
        .with_clock(FixedClock(period));
    let mut result = personalize(&history, &explored, &trending, &builder);
    result.degraded |= file_degraded;
    info!(
        count = result.suggestions.len(),
        degraded = result.degraded,
        "built suggestions"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::print_suggestions(&result);
    }
    Ok(())
}

fn run_track(store_path: &Path, capacity: Option<usize>, topic: &str) -> Result<()> {
    let mut store = RecentTopics::load(store_path)?;
    if let Some(capacity) = capacity {
        store.set_capacity(capacity);
    }
    if !store.record(topic) {
        eprintln!("⚠️  '{}' has no meaningful tokens; not recorded", topic);
        return Ok(());
    }
    store.save(store_path)?;
    eprintln!(
        "✓ Recorded '{}' ({} of {} topics)",
        topic,
        store.len(),
        store.capacity()
    );
    Ok(())
}
