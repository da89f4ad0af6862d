use serde::{Deserialize, Serialize};

use crate::records::{collection::Collection, trimmed};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(deserialize_with = "trimmed")]
    pub id: i64,
    #[serde(rename(deserialize = "station"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub latitude: f64,
    #[serde(deserialize_with = "trimmed")]
    pub longitude: f64,
}

impl Station {
    pub fn new(id: i64, name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name,
            latitude,
            longitude,
        }
    }
}

pub type StationCollection = Collection<Station>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RowError};

    const STATIONS: &str = "\
id,station,latitude,longitude
1,A,1.0,2.0
2,B,3.0,4.0
";

    #[test]
    fn loads_rows_in_order() {
        let stations = StationCollection::from_reader(STATIONS.as_bytes()).unwrap();
        assert_eq!(
            stations.as_slice(),
            &[
                Station::new(1, "A".into(), 1.0, 2.0),
                Station::new(2, "B".into(), 3.0, 4.0),
            ]
        );
    }

    #[test]
    fn name_is_kept_verbatim() {
        let data = "id,station,latitude,longitude\n 7 ,\" Central, North \", 51.5 ,-0.1\n";
        let stations = StationCollection::from_reader(data.as_bytes()).unwrap();
        assert_eq!(stations[0], Station::new(7, " Central, North ".into(), 51.5, -0.1));
    }

    #[test]
    fn non_numeric_latitude_fails_the_load() {
        let data = "id,station,latitude,longitude\n1,A,1.0,2.0\n2,B,north,4.0\n";
        let err = StationCollection::from_reader(data.as_bytes()).unwrap_err();
        match err {
            Error::MalformedRow {
                line,
                source: RowError::InvalidValue(msg),
            } => {
                assert_eq!(line, 3);
                assert!(msg.contains("\"north\""), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_station_column_fails() {
        let data = "id,latitude,longitude\n1,1.0,2.0\n";
        let err = StationCollection::from_reader(data.as_bytes()).unwrap_err();
        match err {
            Error::MalformedRow { source, .. } => {
                assert_eq!(source, RowError::MissingColumn("station".into()))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serializes_with_field_names() {
        let station = Station::new(1, "A".into(), 1.0, 2.0);
        assert_eq!(
            serde_json::to_string(&station).unwrap(),
            r#"{"id":1,"name":"A","latitude":1.0,"longitude":2.0}"#
        );
    }
}
