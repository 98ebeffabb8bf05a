//! Loading a dataset directory into a graph store.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::errors::LoadError;
use crate::graph::{GraphStore, GraphStoreBuilder};

use super::records::{MovieRecord, PersonRecord, StarRecord};

/// Statistics from one dataset load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub people: usize,
    pub movies: usize,
    pub credits: usize,
    /// Credits skipped because they referenced an unknown person or movie.
    pub skipped_credits: usize,
    pub duration_ms: u64,
}

/// Load `people.csv`, `movies.csv` and `stars.csv` from `dir` and build the
/// co-star graph.
///
/// Credits referencing unknown ids are skipped and counted in the report;
/// malformed rows and missing files are errors.
pub fn load_dataset(dir: &Path) -> Result<(GraphStore, LoadReport), LoadError> {
    let started = Instant::now();
    let mut builder = GraphStoreBuilder::new();
    let mut report = LoadReport::default();

    for record in read_rows::<PersonRecord>(&dir.join("people.csv"))? {
        let record = record?;
        builder.add_person(&record.id, &record.name, parse_year(&record.birth));
        report.people += 1;
    }

    for record in read_rows::<MovieRecord>(&dir.join("movies.csv"))? {
        let record = record?;
        builder.add_movie(&record.id, &record.title, parse_year(&record.year));
        report.movies += 1;
    }

    for record in read_rows::<StarRecord>(&dir.join("stars.csv"))? {
        let record = record?;
        if builder.add_credit(&record.person_id, &record.movie_id) {
            report.credits += 1;
        }
    }
    report.skipped_credits = builder.skipped_credits();

    let store = builder.finish();
    report.duration_ms = started.elapsed().as_millis() as u64;

    if report.skipped_credits > 0 {
        tracing::warn!(
            skipped = report.skipped_credits,
            "credits referenced unknown people or movies and were ignored"
        );
    }
    tracing::info!(
        people = report.people,
        movies = report.movies,
        credits = report.credits,
        duration_ms = report.duration_ms,
        "dataset loaded"
    );

    Ok((store, report))
}

/// Open a CSV file and iterate its typed rows, mapping failures onto
/// [`LoadError`] with the file path attached.
fn read_rows<T>(path: &Path) -> Result<impl Iterator<Item = Result<T, LoadError>>, LoadError>
where
    T: serde::de::DeserializeOwned + 'static,
{
    let shown_path = path.display().to_string();
    if !path.exists() {
        return Err(LoadError::MissingFile { path: shown_path });
    }
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Malformed {
        path: shown_path.clone(),
        source,
    })?;
    Ok(reader.into_deserialize::<T>().map(move |row| {
        row.map_err(|source| LoadError::Malformed {
            path: shown_path.clone(),
            source,
        })
    }))
}

/// Lenient year parsing: empty or non-numeric values become `None`.
fn parse_year(raw: &str) -> Option<u16> {
    raw.trim().parse::<u16>().ok()
}
