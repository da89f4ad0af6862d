use serde::{Deserialize, Serialize};

use crate::records::{collection::Collection, trimmed};

/// A directed edge between two stations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Origin station of the edge. Stored in the `from` column; not a unique edge id.
    #[serde(rename(deserialize = "from"), deserialize_with = "trimmed")]
    pub from_station: i64,
    #[serde(rename(deserialize = "to"), deserialize_with = "trimmed")]
    pub to_station: i64,
    #[serde(deserialize_with = "trimmed")]
    pub distance: f64,
    #[serde(deserialize_with = "trimmed")]
    pub time: f64,
}

impl Route {
    pub fn new(from_station: i64, to_station: i64, distance: f64, time: f64) -> Self {
        Self {
            from_station,
            to_station,
            distance,
            time,
        }
    }
}

pub type RouteCollection = Collection<Route>;
