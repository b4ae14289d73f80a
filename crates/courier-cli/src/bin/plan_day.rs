//! Plan one day's delivery flight from a JSON manifest.
//!
//! Usage:
//!   cargo run -p courier-cli --bin plan_day -- --manifest day.json --date 2026-08-07
//!   cargo run -p courier-cli --bin plan_day -- --random 10

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use courier_cli::geojson;
use courier_cli::manifest::DayManifest;
use courier_core::{
    generate_random_stops, FlightLimits, FlightPlanner, MemoryRecorder, NoFlyZone, Stop, HOME,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a closed-loop delivery flight for one day")]
struct Args {
    /// Path to the day manifest (stops and no-fly zones)
    #[arg(long, conflicts_with = "random")]
    manifest: Option<PathBuf>,

    /// Generate this many random stops instead of reading a manifest
    #[arg(long)]
    random: Option<usize>,

    /// Service date the manifest must cover, e.g. 2026-08-07
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Where to write the GeoJSON flightpath
    #[arg(long, default_value = "flightpath.geojson")]
    geojson_out: PathBuf,

    /// Where to write the per-edge and per-delivery records
    #[arg(long, default_value = "flight_records.json")]
    records_out: PathBuf,

    /// Override the move budget
    #[arg(long)]
    max_moves: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("courier_core=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let (stops, zones): (Vec<Stop>, Vec<NoFlyZone>) = match (&args.manifest, args.random) {
        (Some(path), None) => {
            let manifest = DayManifest::load(path)?;
            if let Some(date) = args.date {
                if manifest.date != date {
                    bail!(
                        "manifest covers {} but {} was requested",
                        manifest.date,
                        date
                    );
                }
            }
            let problems = manifest.validate();
            if !problems.is_empty() {
                bail!("manifest is not usable:\n  {}", problems.join("\n  "));
            }
            (manifest.stops, manifest.no_fly_zones)
        }
        (None, Some(count)) => (generate_random_stops(count), Vec::new()),
        _ => bail!("pass exactly one of --manifest or --random"),
    };

    tracing::info!(stops = stops.len(), zones = zones.len(), "planning run");

    let mut limits = FlightLimits::default();
    if let Some(max_moves) = args.max_moves {
        limits.max_moves = max_moves;
    }

    let planner = FlightPlanner::new(HOME, &zones, limits);
    let mut recorder = MemoryRecorder::default();
    let plan = planner
        .plan(&stops, &mut recorder)
        .context("route planning failed")?;

    let collection = geojson::route_to_feature_collection(&plan);
    fs::write(&args.geojson_out, serde_json::to_string_pretty(&collection)?)
        .with_context(|| format!("writing {}", args.geojson_out.display()))?;

    let records = json!({
        "deliveries": recorder.deliveries,
        "flightpath": recorder.edges,
    });
    fs::write(&args.records_out, serde_json::to_string_pretty(&records)?)
        .with_context(|| format!("writing {}", args.records_out.display()))?;

    println!(
        "planned {} moves, delivered {}p of {}p requested{}",
        plan.total_moves,
        plan.delivered_value,
        plan.requested_value,
        if plan.completed {
            ""
        } else {
            " (budget forced an early return)"
        }
    );
    Ok(())
}
