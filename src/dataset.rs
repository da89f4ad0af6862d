use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    error::Result,
    records::{
        route::RouteCollection, shortest_route::ShortestRouteCollection,
        station::StationCollection,
    },
};

pub const STATIONS_FILE: &str = "station.csv";
pub const ROUTES_FILE: &str = "transit_edge.csv";
pub const SHORTEST_ROUTES_FILE: &str = "shortest_path.csv";

/// Where each table lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatasetPaths {
    pub stations: PathBuf,
    pub routes: PathBuf,
    pub shortest_routes: PathBuf,
}

impl DatasetPaths {
    /// The conventional file names inside a data directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            stations: dir.join(STATIONS_FILE),
            routes: dir.join(ROUTES_FILE),
            shortest_routes: dir.join(SHORTEST_ROUTES_FILE),
        }
    }
}

#[derive(Debug)]
pub struct TransitDataset {
    pub stations: StationCollection,
    pub routes: RouteCollection,
    pub shortest_routes: ShortestRouteCollection,
}

impl TransitDataset {
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        let stations = StationCollection::load(&paths.stations)?;
        let routes = RouteCollection::load(&paths.routes)?;
        let shortest_routes = ShortestRouteCollection::load(&paths.shortest_routes)?;

        info!(
            stations = stations.len(),
            routes = routes.len(),
            shortest_routes = shortest_routes.len(),
            "loaded transit dataset"
        );

        Ok(Self {
            stations,
            routes,
            shortest_routes,
        })
    }
}
