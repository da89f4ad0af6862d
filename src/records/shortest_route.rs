use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    records::{collection::Collection, trimmed},
};

/// Precomputed best route between an ordered pair of stations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestRoute {
    #[serde(rename(deserialize = "start_id"), deserialize_with = "trimmed")]
    pub from_station: i64,
    #[serde(rename(deserialize = "end_id"), deserialize_with = "trimmed")]
    pub to_station: i64,
    #[serde(deserialize_with = "trimmed")]
    pub hops: i64,
    #[serde(deserialize_with = "trimmed")]
    pub distance: f64,
    #[serde(deserialize_with = "trimmed")]
    pub time: f64,
}

impl ShortestRoute {
    pub fn new(from_station: i64, to_station: i64, hops: i64, distance: f64, time: f64) -> Self {
        Self {
            from_station,
            to_station,
            hops,
            distance,
            time,
        }
    }
}

pub type ShortestRouteCollection = Collection<ShortestRoute>;

impl Collection<ShortestRoute> {
    /// A collection that reads nothing, for callers that fill it by other means.
    pub fn empty() -> Self {
        Vec::new().into()
    }

    /// Consecutive chunks of at most `chunk_size` routes, in order. Only the last may be short.
    pub fn split(&self, chunk_size: usize) -> Result<Vec<&[ShortestRoute]>> {
        if chunk_size == 0 {
            return Err(Error::InvalidArgument(
                "chunk size must be positive".to_owned(),
            ));
        }

        Ok(self.as_slice().chunks(chunk_size).collect())
    }
}
