//! Tests for the degrees error handling system.

use degrees_core::errors::error_code::DegreesErrorCode;
use degrees_core::errors::{ConfigError, LoadError, QueryError, SearchError};
use degrees_core::GraphStoreBuilder;

fn csv_error() -> csv::Error {
    csv::ReaderBuilder::new()
        .from_reader("a,b\n1\n".as_bytes())
        .records()
        .find_map(|r| r.err())
        .expect("unequal row lengths produce an error")
}

#[test]
fn every_error_has_a_stable_code() {
    let config = ConfigError::Parse {
        path: "degrees.toml".into(),
        message: "bad".into(),
    };
    assert!(!config.error_code().is_empty());

    let load = LoadError::MissingFile {
        path: "large/people.csv".into(),
    };
    assert_eq!(load.error_code(), "DEG_LOAD_MISSING_FILE");

    let malformed = LoadError::Malformed {
        path: "large/stars.csv".into(),
        source: csv_error(),
    };
    assert_eq!(malformed.error_code(), "DEG_LOAD_MALFORMED");

    let search = SearchError::EmptyFrontier;
    assert_eq!(search.error_code(), "DEG_SEARCH_EMPTY_FRONTIER");

    let mut builder = GraphStoreBuilder::new();
    let someone = builder.add_person("1", "A", None);
    let chain = SearchError::BrokenParentChain { state: someone };
    assert_eq!(chain.error_code(), "DEG_SEARCH_BROKEN_PARENT_CHAIN");
}

#[test]
fn subsystem_errors_convert_into_query_errors() {
    let config = ConfigError::InvalidValue {
        key: "DEGREES_MAX_DEPTH".into(),
        message: "not a number".into(),
    };
    let query: QueryError = config.into();
    assert!(matches!(query, QueryError::Config(_)));
    assert_eq!(query.error_code(), "DEG_CONFIG_INVALID_VALUE");

    let load = LoadError::MissingFile {
        path: "large/movies.csv".into(),
    };
    let query: QueryError = load.into();
    assert!(matches!(query, QueryError::Load(_)));

    let search = SearchError::EmptyFrontier;
    let query: QueryError = search.into();
    assert!(matches!(query, QueryError::Search(_)));

    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed");
    let query: QueryError = io.into();
    assert_eq!(query.error_code(), "DEG_IO");
}

#[test]
fn error_messages_carry_their_context() {
    let load = LoadError::MissingFile {
        path: "large/people.csv".into(),
    };
    assert_eq!(load.to_string(), "dataset file not found: large/people.csv");

    let config = ConfigError::InvalidValue {
        key: "DEGREES_MAX_DEPTH".into(),
        message: "expected a non-negative integer, got `abc`".into(),
    };
    assert!(config.to_string().contains("DEGREES_MAX_DEPTH"));
}
