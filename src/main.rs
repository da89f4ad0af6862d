use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};
use transit_records::{
    DatasetPaths, RouteCollection, ShortestRouteCollection, StationCollection, TransitDataset,
};

#[derive(Debug, Parser)]
#[command(name = "transit-records", about = "Load transit station, route and shortest-path tables.")]
struct Opt {
    /// Directory holding station.csv, transit_edge.csv and shortest_path.csv.
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: PathBuf,

    /// Station table, overriding the one in the data directory.
    #[arg(long)]
    stations: Option<PathBuf>,

    /// Route (edge) table, overriding the one in the data directory.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Shortest-path table, overriding the one in the data directory.
    #[arg(long)]
    shortest_routes: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load every table and report record counts.
    Summary,
    /// Split the shortest routes into batches and report batch sizes.
    Batches {
        #[arg(short = 'n', long)]
        chunk_size: usize,

        #[arg(long)]
        json: bool,
    },
    /// Print records of one table as JSON lines.
    Show {
        #[arg(value_enum)]
        table: Table,

        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Table {
    Stations,
    Routes,
    ShortestRoutes,
}

impl Opt {
    fn paths(&self) -> DatasetPaths {
        let mut paths = DatasetPaths::in_dir(&self.data_dir);
        if let Some(p) = &self.stations {
            paths.stations = p.clone();
        }
        if let Some(p) = &self.routes {
            paths.routes = p.clone();
        }
        if let Some(p) = &self.shortest_routes {
            paths.shortest_routes = p.clone();
        }
        paths
    }
}

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|e| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            e,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn print_json_lines<T: Serialize>(records: &[T], limit: Option<usize>) -> Result<()> {
    for record in records.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}

fn run(opt: Opt) -> Result<()> {
    let paths = opt.paths();

    match opt.command {
        Command::Summary => {
            let now = std::time::Instant::now();
            let dataset = TransitDataset::load(&paths)
                .with_context(|| format!("loading dataset from {paths:?}"))?;
            info!("Done in {:?}", now.elapsed());

            println!("stations: {}", dataset.stations.len());
            println!("routes: {}", dataset.routes.len());
            println!("shortest routes: {}", dataset.shortest_routes.len());
        }
        Command::Batches { chunk_size, json } => {
            let routes = ShortestRouteCollection::load(&paths.shortest_routes)
                .with_context(|| format!("loading {:?}", paths.shortest_routes))?;
            let sizes: Vec<usize> = routes
                .split(chunk_size)?
                .iter()
                .map(|chunk| chunk.len())
                .collect();
            info!("{} routes in {} batches", routes.len(), sizes.len());

            if json {
                println!("{}", serde_json::to_string(&sizes)?);
            } else {
                println!("{}", sizes.iter().join(" "));
            }
        }
        Command::Show { table, limit } => match table {
            Table::Stations => {
                let stations = StationCollection::load(&paths.stations)
                    .with_context(|| format!("loading {:?}", paths.stations))?;
                print_json_lines(stations.as_slice(), limit)?;
            }
            Table::Routes => {
                let routes = RouteCollection::load(&paths.routes)
                    .with_context(|| format!("loading {:?}", paths.routes))?;
                print_json_lines(routes.as_slice(), limit)?;
            }
            Table::ShortestRoutes => {
                let routes = ShortestRouteCollection::load(&paths.shortest_routes)
                    .with_context(|| format!("loading {:?}", paths.shortest_routes))?;
                print_json_lines(routes.as_slice(), limit)?;
            }
        },
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logger();
    run(Opt::parse())
}
