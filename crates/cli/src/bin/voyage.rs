use std::path::PathBuf;

use clap::Parser;
use stellar_travel_simulator::config::{find_destination, load_destinations};
use stellar_travel_simulator::export::{json, summary};
use stellar_travel_simulator::mission::{MissionConfig, simulate};
use stellar_travel_simulator::profile::RandomPermutation;

#[derive(Parser)]
#[command(author, version, about = "Interstellar journey simulator")]
struct Cli {
    /// Destination star or galaxy name
    #[arg(long)]
    destination: Option<String>,

    /// Distance to the destination in light-years
    #[arg(long)]
    distance_ly: Option<f64>,

    /// Mission identifier printed on the report
    #[arg(long)]
    mission_id: String,

    /// Number of cruise stages
    #[arg(long, default_value_t = 5)]
    stages: usize,

    /// Minimum cruise speed (% of light speed)
    #[arg(long, default_value_t = 1.0)]
    min_speed: f64,

    /// Maximum cruise speed (% of light speed)
    #[arg(long, default_value_t = 5.0)]
    max_speed: f64,

    /// Seed for the stage shuffle (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the report as pretty JSON to this path ('-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Destination catalog (YAML file, TOML file, or directory of TOML files)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Destination name to resolve from the catalog
    #[arg(long)]
    to: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (destination, distance_ly) = resolve_target(&cli)?;

    let mut strategy = match cli.seed {
        Some(seed) => RandomPermutation::seeded(seed),
        None => RandomPermutation::from_entropy(),
    };

    let config = MissionConfig {
        destination,
        distance_ly,
        mission_id: cli.mission_id.clone(),
        num_stages: cli.stages,
        min_speed_pct: cli.min_speed,
        max_speed_pct: cli.max_speed,
    };

    let report = simulate(&config, &mut strategy)?;

    print!("{}", summary::render(&report));

    if let Some(path) = &cli.json {
        let mut writer = json::writer_for_path(path)?;
        json::write_report(&mut writer, &report)?;
    }

    Ok(())
}

/// Resolve the destination name and distance, preferring an explicit
/// `--destination`/`--distance-ly` pair over a catalog lookup.
fn resolve_target(cli: &Cli) -> anyhow::Result<(String, f64)> {
    if let (Some(name), Some(distance)) = (&cli.destination, cli.distance_ly) {
        return Ok((name.clone(), distance));
    }

    let Some(catalog_path) = &cli.catalog else {
        anyhow::bail!(
            "supply either --destination with --distance-ly, or --catalog with a destination name"
        );
    };

    let catalog = load_destinations(catalog_path)?;
    let requested = cli
        .to
        .as_deref()
        .or(cli.destination.as_deref())
        .ok_or_else(|| anyhow::anyhow!("--catalog needs --to (or --destination) to pick a destination"))?;
    let dest = find_destination(&catalog, requested)?;
    Ok((dest.name, dest.distance_ly))
}
