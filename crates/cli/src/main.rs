use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use directory::{DirectoryConfig, DirectoryView, ListingPage};
use directory_core::{Catalog, DirectoryKind, FilterState, ServiceTypeFilter, SortBy};
use filter_state::{FileStorage, FilterPersistence};
use pipeline::{rank, RankOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Directory filters - inspect and drive a directory page from the terminal
#[derive(Parser)]
#[command(name = "directory-cli")]
#[command(about = "Filter, rank and page marketplace directory listings", long_about = None)]
struct Cli {
    /// Directory holding persisted filter state
    #[arg(short, long, default_value = ".directory")]
    state_dir: PathBuf,

    /// Which directory page to operate on (escorts, creators, livecams)
    #[arg(short, long, default_value = "escorts")]
    directory: DirectoryKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or change the persisted filters
    Filters {
        #[command(subcommand)]
        action: FilterAction,
    },

    /// Show one page of a catalog with the persisted filters applied
    Browse {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Listings per page
        #[arg(long, default_value = "24")]
        page_size: usize,
    },

    /// Print the ranking adapter's order for a whole catalog
    Rank {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Number of ids to print
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum FilterAction {
    /// Print the current state and active filter chips
    Show,
    /// Set one or more dimensions
    Set(SetArgs),
    /// Add a value to a multi-select, or remove it if already selected
    Toggle {
        dimension: Dimension,
        value: String,
    },
    /// Reset every dimension to its default
    Clear,
}

#[derive(Args)]
struct SetArgs {
    #[arg(long)]
    search: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Price range; out-of-range values are clamped
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    price: Option<Vec<i64>>,

    /// Age range; out-of-range values are clamped
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], allow_negative_numbers = true)]
    age: Option<Vec<i64>>,

    /// Minimum star rating (0-5)
    #[arg(long)]
    rating: Option<f32>,

    #[arg(long)]
    verified: Option<bool>,

    #[arg(long)]
    available: Option<bool>,

    /// any, in-person, virtual or both; choosing the active one resets to any
    #[arg(long)]
    service_type: Option<ServiceTypeFilter>,

    /// newest, price-asc, price-desc, rating or featured
    #[arg(long)]
    sort_by: Option<SortBy>,

    #[arg(long, allow_negative_numbers = true)]
    page: Option<i64>,
}

#[derive(Args)]
struct CatalogArgs {
    /// Directory containing listings.json and optionally signals.json
    #[arg(long)]
    catalog: PathBuf,

    /// Viewer region, preferred by the featured order
    #[arg(long)]
    region: Option<String>,

    /// Viewer interest tags (repeatable)
    #[arg(long = "tag")]
    tags: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Dimension {
    Gender,
    Orientation,
    Service,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let persistence = FilterPersistence::for_directory(
        Arc::new(FileStorage::new(&cli.state_dir)),
        cli.directory,
    );
    info!(
        "Using filter state {} in {}",
        persistence.key(),
        cli.state_dir.display()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filters { action } => {
            let view = DirectoryView::new(DirectoryConfig::new(cli.directory), persistence);
            handle_filters(view, action)
        }
        Commands::Browse { catalog, page_size } => {
            let config = directory_config(cli.directory, &catalog).with_page_size(page_size);
            handle_browse(DirectoryView::new(config, persistence), &catalog.catalog)
        }
        Commands::Rank { catalog, limit } => handle_rank(&catalog, limit),
    }
}

fn directory_config(kind: DirectoryKind, args: &CatalogArgs) -> DirectoryConfig {
    let config = DirectoryConfig::new(kind).with_tags(args.tags.iter().cloned());
    match &args.region {
        Some(region) => config.with_region(region.clone()),
        None => config,
    }
}

fn load_catalog(dir: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = Catalog::load_from_files(dir)
        .with_context(|| format!("Failed to load catalog from {}", dir.display()))?;
    info!("Loaded {} listings in {:?}", catalog.len(), start.elapsed());
    Ok(catalog)
}

/// Handle the 'filters' subcommands
fn handle_filters(mut view: DirectoryView, action: FilterAction) -> Result<()> {
    match action {
        FilterAction::Show => {}
        FilterAction::Set(args) => apply_set(&mut view, args),
        FilterAction::Toggle { dimension, value } => {
            let store = view.store_mut();
            match dimension {
                Dimension::Gender => store.toggle_gender(value),
                Dimension::Orientation => store.toggle_orientation(value),
                Dimension::Service => store.toggle_service(value),
            }
        }
        FilterAction::Clear => view.reset(),
    }
    print_filters(&view);
    Ok(())
}

fn apply_set(view: &mut DirectoryView, args: SetArgs) {
    let store = view.store_mut();
    if let Some(search) = args.search {
        store.set_search_query(search);
    }
    if let Some(location) = args.location {
        store.set_location(location);
    }
    if let Some([lo, hi]) = args.price.as_deref().and_then(|v| <[i64; 2]>::try_from(v).ok()) {
        store.set_price_range((lo, hi));
    }
    if let Some([lo, hi]) = args.age.as_deref().and_then(|v| <[i64; 2]>::try_from(v).ok()) {
        store.set_age_range((lo, hi));
    }
    if let Some(rating) = args.rating {
        store.set_rating_min(rating);
    }
    if let Some(verified) = args.verified {
        store.set_verified_only(verified);
    }
    if let Some(available) = args.available {
        store.set_available_now(available);
    }
    if let Some(service_type) = args.service_type {
        store.set_service_type_filter(service_type);
    }
    if let Some(sort_by) = args.sort_by {
        store.set_sort_by(sort_by);
    }
    // Last, so filter changes above don't send it back to page 1
    if let Some(page) = args.page {
        store.set_current_page(page);
    }
}

/// Handle the 'browse' command
fn handle_browse(view: DirectoryView, catalog_dir: &Path) -> Result<()> {
    let catalog = load_catalog(catalog_dir)?;
    let page = view.listing(&catalog.listings, &catalog.signals)?;

    print_chips(&view);
    print_page(&catalog, &page, view.store().sort_by());
    Ok(())
}

/// Handle the 'rank' command
fn handle_rank(args: &CatalogArgs, limit: Option<usize>) -> Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let mut opts = RankOptions::new().with_tags(args.tags.iter().cloned());
    if let Some(region) = &args.region {
        opts = opts.with_region(region.clone());
    }
    if let Some(limit) = limit {
        opts = opts.with_limit(limit);
    }

    let ranked = rank(&catalog.listings, &catalog.signals, &opts);
    println!("{}", "Ranked listings:".bold().blue());
    for (i, id) in ranked.iter().enumerate() {
        let has_signal = catalog.signals.contains_key(id);
        println!(
            "{}. {}{}",
            (i + 1).to_string().green(),
            id,
            if has_signal { "" } else { " (no signal)" }
        );
    }
    Ok(())
}

fn print_filters(view: &DirectoryView) {
    let state: &FilterState = view.store().state();
    println!("{}", format!("Filters ({})", view.config().kind.as_str()).bold().blue());
    println!("{}Search: {:?}", "• ".green(), state.search_query);
    println!("{}Location: {:?}", "• ".green(), state.location);
    println!("{}Price: ${}-${}", "• ".green(), state.price_range.0, state.price_range.1);
    println!("{}Age: {}-{}", "• ".green(), state.age_range.0, state.age_range.1);
    println!("{}Minimum rating: {}", "• ".green(), state.rating_min);
    println!("{}Verified only: {}", "• ".green(), state.verified_only);
    println!("{}Available now: {}", "• ".green(), state.available_now);
    println!("{}Service type: {}", "• ".green(), state.service_type_filter.as_str());
    println!("{}Genders: {}", "• ".green(), join(&state.selected_genders));
    println!("{}Orientations: {}", "• ".green(), join(&state.selected_orientations));
    println!("{}Services: {}", "• ".green(), join(&state.selected_services));
    println!("{}Sort by: {}", "• ".cyan(), state.sort_by.as_str());
    println!("{}Page: {}", "• ".cyan(), state.current_page);
    print_chips(view);
}

fn print_chips(view: &DirectoryView) {
    let chips = view.active_filters();
    if chips.is_empty() {
        println!("{}", "No active filters".dimmed());
        return;
    }
    println!("{}", format!("Active filters ({}):", chips.len()).bold());
    for chip in &chips {
        println!("  [{}]", chip.to_string().yellow());
    }
}

fn print_page(catalog: &Catalog, page: &ListingPage, sort_by: SortBy) {
    println!(
        "{}",
        format!(
            "Page {}/{} - {} listings, sorted by {}",
            page.page,
            page.total_pages,
            page.total,
            sort_by.as_str()
        )
        .bold()
        .blue()
    );
    for id in &page.ids {
        let Some(listing) = catalog.get(id) else {
            continue;
        };
        let badge = match (listing.verified, listing.premium) {
            (true, true) => " ✓★",
            (true, false) => " ✓",
            (false, true) => " ★",
            (false, false) => "",
        };
        println!(
            "{}{} - {} - ${} - {:.1}★",
            listing.name,
            badge.green(),
            listing.region,
            listing.price,
            listing.rating
        );
    }
}

fn join(values: &std::collections::BTreeSet<String>) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
