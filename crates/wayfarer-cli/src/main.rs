use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfarer_lib::{
    load_map_file, shortest_paths, Cost, Graph, PathReport, Result as LibResult, TokenReader,
};

/// Per-road data carried in the map database: the distance in miles.
#[derive(Debug, Clone, Copy)]
struct RoadData {
    distance: u64,
}

/// Consume one road's payload tokens (a single distance value).
fn read_road_data<R: BufRead>(tokens: &mut TokenReader<R>) -> LibResult<RoadData> {
    Ok(RoadData {
        distance: tokens.next_u64()?,
    })
}

/// Distance-based travel criteria: use each road's mileage as its weight.
fn minimum_distance(road: &RoadData) -> Cost {
    road.distance
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest-route reports over a place map database")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the cheapest route from a start place to every other place.
    Route {
        /// Path to the map database file.
        #[arg(long)]
        map: PathBuf,
        /// Start place name; repeat to report from several starts.
        #[arg(long = "from", required = true)]
        from: Vec<String>,
        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the places and roads stored in a map database.
    Inspect {
        /// Path to the map database file.
        #[arg(long)]
        map: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { map, from, format } => handle_route(&map, &from, format),
        Command::Inspect { map } => handle_inspect(&map),
    }
}

fn load_map(path: &Path) -> Result<Graph<RoadData>> {
    load_map_file(path, read_road_data)
        .with_context(|| format!("failed to load map database from {}", path.display()))
}

fn handle_route(map: &Path, from: &[String], format: OutputFormat) -> Result<()> {
    let graph = load_map(map)?;

    let mut reports = Vec::with_capacity(from.len());
    for start in from {
        let tree = shortest_paths(&graph, start, minimum_distance)
            .with_context(|| format!("failed to compute routes from {start}"))?;
        reports.push(PathReport::new(&graph, &tree));
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{report}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}

fn handle_inspect(map: &Path) -> Result<()> {
    let graph = load_map(map)?;

    println!("{} places:", graph.len());
    for vertex in graph.vertices() {
        println!("  {}", vertex.name());
        for edge in vertex.edges() {
            println!(
                "    -> {} ({} miles)",
                graph.name(edge.target),
                edge.payload.distance
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
