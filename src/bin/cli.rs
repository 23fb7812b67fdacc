//! eventmap CLI - Debug tool for clustering and location filtering
//!
//! Usage:
//!   eventmap-cli cluster <events.json> [--registry <file>] [--radius <m>] [--area <code>]...
//!   eventmap-cli filter <events.json> [--registry <file>] [--area <code>]... [--center <lat,lng>]
//!   eventmap-cli synth [--hotspots <n>] [--per-hotspot <n>] [--seed <n>]
//!
//! Loads events and an optional area registry from JSON and shows
//! verbose output of the clustering and filter decisions, helping to
//! understand how events are being grouped and matched.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use eventmap::synthetic::SyntheticScenario;
use eventmap::{
    build_markers, filter_events, AreaRegistry, Bounds, ClusterConfig, CoordinateResolver,
    Coordinates, Event, LocationFilter, Result, SelectionStateManager,
};

#[derive(Parser)]
#[command(name = "eventmap-cli")]
#[command(about = "Debug tool for event clustering and location filtering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster events into map markers
    Cluster {
        /// JSON file containing an array of events
        events: PathBuf,

        /// JSON file containing the area registry
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Cluster radius in meters
        #[arg(long, default_value = "100")]
        radius: f64,

        /// Area codes to mark as selected (repeatable)
        #[arg(short, long)]
        area: Vec<String>,
    },

    /// Evaluate the location filter over events
    Filter {
        /// JSON file containing an array of events
        events: PathBuf,

        /// JSON file containing the area registry
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Area codes to filter by (repeatable)
        #[arg(short, long)]
        area: Vec<String>,

        /// Filter center as "lat,lng"
        #[arg(long)]
        center: Option<String>,

        /// Filter radius in kilometers
        #[arg(long, default_value = "1.0")]
        radius_km: f64,

        /// Exclude approximately-located events
        #[arg(long)]
        exact_only: bool,
    },

    /// Generate a synthetic event set and print it as JSON
    Synth {
        /// Number of hotspots
        #[arg(long, default_value = "10")]
        hotspots: usize,

        /// Events per hotspot
        #[arg(long, default_value = "20")]
        per_hotspot: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cluster {
            events,
            registry,
            radius,
            area,
        } => run_cluster(&events, registry.as_ref(), radius, &area, cli.verbose),
        Commands::Filter {
            events,
            registry,
            area,
            center,
            radius_km,
            exact_only,
        } => run_filter(
            &events,
            registry.as_ref(),
            &area,
            center.as_deref(),
            radius_km,
            exact_only,
            cli.verbose,
        ),
        Commands::Synth {
            hotspots,
            per_hotspot,
            seed,
        } => run_synth(hotspots, per_hotspot, seed),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_cluster(
    events_path: &PathBuf,
    registry_path: Option<&PathBuf>,
    radius: f64,
    selected_areas: &[String],
    verbose: bool,
) -> Result<()> {
    let events = load_events(events_path)?;
    let registry = load_registry(registry_path)?;

    let mut selection = SelectionStateManager::new();
    for code in selected_areas {
        selection.toggle_area(code.clone());
    }

    let config = ClusterConfig {
        cluster_radius_meters: radius,
        ..ClusterConfig::default()
    };
    let resolver = CoordinateResolver::new(&registry);
    let markers = build_markers(&events, &resolver, selection.selection(), &config);

    println!("\n{}", "=".repeat(60));
    println!(
        "Clustered {} events into {} markers (radius {radius}m)",
        events.len(),
        markers.len()
    );
    println!("{}", "=".repeat(60));

    for marker in &markers {
        println!(
            "  [{}] ({:.5}, {:.5}) - {} member(s), category: {}{}",
            marker.id,
            marker.coordinates.latitude,
            marker.coordinates.longitude,
            marker.members.len(),
            marker.primary_category,
            if marker.is_selected { " [selected]" } else { "" }
        );
        if verbose {
            for member in &marker.members {
                println!("      - {} ({})", member.id, member.category);
            }
        }
    }

    if let Some(bounds) = Bounds::from_markers(&markers) {
        let center = bounds.center();
        println!(
            "\nMap center: ({:.5}, {:.5})",
            center.latitude, center.longitude
        );
    }

    Ok(())
}

fn run_filter(
    events_path: &PathBuf,
    registry_path: Option<&PathBuf>,
    areas: &[String],
    center: Option<&str>,
    radius_km: f64,
    exact_only: bool,
    verbose: bool,
) -> Result<()> {
    let events = load_events(events_path)?;
    // Loaded for alias-aware display names in verbose output.
    let registry = load_registry(registry_path)?;

    let mut filter = LocationFilter::with_areas(areas.to_vec());
    filter.include_approximate = !exact_only;
    if let Some(raw) = center {
        filter.set_radius(parse_center(raw), Some(radius_km));
    }

    let passing = filter_events(&events, &filter);

    println!("\n{}", "=".repeat(60));
    println!("{} of {} events pass the filter", passing.len(), events.len());
    println!("{}", "=".repeat(60));

    for event in &events {
        let passes = filter.passes(event);
        if !passes && !verbose {
            continue;
        }
        let area_label = event
            .area
            .as_deref()
            .map(|a| registry.display_name_of(a).unwrap_or(a).to_string());
        println!(
            "  [{}] {} ({}){}",
            if passes { "OK" } else { "--" },
            event.id,
            event.category,
            area_label.map(|a| format!(" @ {a}")).unwrap_or_default()
        );
    }

    Ok(())
}

fn run_synth(hotspots: usize, per_hotspot: usize, seed: u64) -> Result<()> {
    let scenario = SyntheticScenario {
        hotspot_count: hotspots,
        events_per_hotspot: per_hotspot,
        seed,
        ..SyntheticScenario::default()
    };

    let events = scenario.generate();
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

/// Load an event array from a JSON file.
fn load_events(path: &PathBuf) -> Result<Vec<Event>> {
    let file = File::open(path)?;
    let events: Vec<Event> = serde_json::from_reader(BufReader::new(file))?;
    Ok(events)
}

/// Load an area registry from a JSON file, or an empty one.
fn load_registry(path: Option<&PathBuf>) -> Result<AreaRegistry> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            let registry: AreaRegistry = serde_json::from_reader(BufReader::new(file))?;
            Ok(registry)
        }
        None => Ok(AreaRegistry::new()),
    }
}

/// Parse a "lat,lng" pair.
fn parse_center(raw: &str) -> Option<Coordinates> {
    let (lat, lng) = raw.split_once(',')?;
    let latitude: f64 = lat.trim().parse().ok()?;
    let longitude: f64 = lng.trim().parse().ok()?;
    Some(Coordinates::new(latitude, longitude))
}
