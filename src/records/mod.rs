use std::{
    any::type_name,
    fmt::Display,
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
    str::FromStr,
};

use csv::{DeserializeErrorKind, ReaderBuilder, StringRecord};
use flate2::read::GzDecoder;
use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _, Unexpected},
};
use tracing::debug;

use crate::error::{Error, Result, RowError};

pub mod collection;
pub mod route;
pub mod shortest_route;
pub mod station;

/// Reads every row of a header-labelled table from any reader, failing on the first bad row.
pub fn read_records<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    // short rows surface as a missing trailing column rather than a length mismatch
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for rec in reader.deserialize() {
        let rec: T = rec.map_err(|err| row_error(err, &headers))?;
        records.push(rec);
    }

    Ok(records)
}

/// Opens `path` and reads all of its rows. The file is closed before returning.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let records = read_records(open_source(path)?)?;
    debug!(path = %path.display(), records = records.len(), "loaded table");
    Ok(records)
}

/// Numeric column, ignoring surrounding whitespace.
pub(crate) fn trimmed<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = String::deserialize(deserializer)?;
    value
        .trim()
        .parse()
        .map_err(|_| D::Error::invalid_value(Unexpected::Str(&value), &type_name::<T>()))
}

fn row_error(err: csv::Error, headers: &StringRecord) -> Error {
    let line = err.position().map_or(0, |p| p.line());
    let source = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => Some(match err.kind() {
            DeserializeErrorKind::UnexpectedEndOfRow => RowError::TooFewFields,
            DeserializeErrorKind::Message(msg) => match missing_field(msg) {
                Some(column) => RowError::MissingColumn(column.to_owned()),
                None => RowError::InvalidValue(msg.clone()),
            },
            kind => RowError::InvalidValue(match err.field() {
                Some(i) => with_column(headers, i as usize, kind),
                None => kind.to_string(),
            }),
        }),
        csv::ErrorKind::Utf8 { err, .. } => Some(RowError::InvalidUtf8(
            headers.get(err.field()).unwrap_or_default().to_owned(),
        )),
        _ => None,
    };

    match source {
        Some(source) => Error::MalformedRow { line, source },
        None => Error::Csv(err),
    }
}

fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.strip_suffix('`')
}

fn with_column(headers: &StringRecord, field: usize, detail: impl Display) -> String {
    match headers.get(field) {
        Some(column) => format!("column `{column}`: {detail}"),
        None => detail.to_string(),
    }
}

fn open_source(path: &Path) -> Result<Box<dyn Read>> {
    let not_found = |source| Error::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(not_found)?;
    // opening a directory succeeds on unix; reject it before the first read
    if file.metadata().map_err(not_found)?.is_dir() {
        return Err(not_found(io::Error::new(
            io::ErrorKind::IsADirectory,
            "is a directory",
        )));
    }

    Ok(if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(file)
    })
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Pair {
        #[serde(deserialize_with = "trimmed")]
        a: i64,
        #[serde(deserialize_with = "trimmed")]
        b: f64,
    }

    #[test]
    fn columns_are_matched_by_name() {
        let pairs: Vec<Pair> = read_records("b,a\n2.5,1\n-1e3, 7 \n".as_bytes()).unwrap();
        assert_eq!(pairs, vec![Pair { a: 1, b: 2.5 }, Pair { a: 7, b: -1000.0 }]);
    }

    #[test]
    fn header_only_table_is_empty() {
        let pairs: Vec<Pair> = read_records("a,b\n".as_bytes()).unwrap();
        assert!(pairs.is_empty());

        let pairs: Vec<Pair> = read_records("".as_bytes()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn short_row_is_malformed() {
        let err = read_records::<Pair, _>("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedRow { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, RowError::TooFewFields);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absent_header_is_missing_column() {
        let err = read_records::<Pair, _>("a\n1\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedRow { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, RowError::MissingColumn("b".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn integer_column_rejects_float_text() {
        let err = read_records::<Pair, _>("a,b\n1.5,2\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedRow {
                source: RowError::InvalidValue(msg),
                ..
            } => assert!(msg.contains("\"1.5\""), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let data: &[u8] = b"a,b\n1,2\n3,\xff\xfe\n";
        let err = read_records::<Pair, _>(data).unwrap_err();
        match err {
            Error::MalformedRow { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, RowError::InvalidUtf8("b".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gzip_detection_uses_extension() {
        assert!(is_gzip(Path::new("data/station.csv.gz")));
        assert!(is_gzip(Path::new("STATION.CSV.GZ")));
        assert!(!is_gzip(Path::new("data/station.csv")));
    }
}
