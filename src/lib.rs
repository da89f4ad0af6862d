pub mod dataset;
pub mod error;
pub mod records;

pub use dataset::{DatasetPaths, TransitDataset};
pub use error::{Error, Result, RowError};
pub use records::{
    collection::Collection,
    route::{Route, RouteCollection},
    shortest_route::{ShortestRoute, ShortestRouteCollection},
    station::{Station, StationCollection},
};
