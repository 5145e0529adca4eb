use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use super::error::SchemaError;
use super::model::{GameDataset, GameRecord, RawTable, decade_of};
use super::source;

/// Columns every input must carry, by exact header name.
pub const REQUIRED_COLUMNS: [&str; 5] = ["Name", "Launch_date", "Metascore", "Rating", "Details"];

/// Typed datasets already built, keyed by a hash of the raw table content.
/// Written on the first load of a given content, read-only after that.
static DATASET_CACHE: Lazy<Mutex<HashMap<u64, Arc<GameDataset>>>> = Lazy::new(Default::default);

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a file from disk and type it. See [`source::read_table`] for formats.
pub fn load_file(path: &Path) -> Result<Arc<GameDataset>> {
    let raw = source::read_table(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset = load(&raw).with_context(|| format!("typing {}", path.display()))?;
    Ok(dataset)
}

/// Type a raw table into a [`GameDataset`].
///
/// * `Launch_date` is parsed leniently; anything unparseable becomes null.
/// * `Year` is the calendar year of the parsed date.
/// * `Metascore` is coerced to a finite number or null.
/// * Rows with a null `Year` or `Metascore` are dropped.
/// * `Decade` is derived for every surviving row.
///
/// Identical input returns the same `Arc` without recomputation. Only a
/// missing required column (or a row wider than the header) fails the load.
pub fn load(raw: &RawTable) -> Result<Arc<GameDataset>, SchemaError> {
    let key = content_key(raw);

    if let Some(hit) = cache().get(&key) {
        log::info!("Dataset cache hit ({} games)", hit.len());
        return Ok(Arc::clone(hit));
    }

    let dataset = Arc::new(build_dataset(raw)?);
    cache().insert(key, Arc::clone(&dataset));
    Ok(dataset)
}

fn cache() -> std::sync::MutexGuard<'static, HashMap<u64, Arc<GameDataset>>> {
    // The map is only ever inserted into, so a poisoned lock still holds valid data.
    DATASET_CACHE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn content_key(raw: &RawTable) -> u64 {
    let mut hasher = DefaultHasher::new();
    raw.hash(&mut hasher);
    hasher.finish()
}

// ---------------------------------------------------------------------------
// Typing
// ---------------------------------------------------------------------------

/// Resolved positions of the required columns.
struct ColumnIndex {
    name: usize,
    launch_date: usize,
    metascore: usize,
    rating: usize,
    details: usize,
}

impl ColumnIndex {
    fn resolve(raw: &RawTable) -> Result<Self, SchemaError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| raw.column_index(col).is_none())
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::MissingColumns(missing));
        }

        let idx = |col: &str| raw.column_index(col).unwrap_or_default();
        Ok(ColumnIndex {
            name: idx("Name"),
            launch_date: idx("Launch_date"),
            metascore: idx("Metascore"),
            rating: idx("Rating"),
            details: idx("Details"),
        })
    }
}

fn build_dataset(raw: &RawTable) -> Result<GameDataset, SchemaError> {
    let cols = ColumnIndex::resolve(raw)?;
    let expected = raw.columns.len();

    let mut records = Vec::with_capacity(raw.len());
    for (row_no, row) in raw.rows.iter().enumerate() {
        if row.len() > expected {
            return Err(SchemaError::RaggedRow {
                row: row_no,
                expected,
                found: row.len(),
            });
        }
        // Short rows are padded with missing cells.
        let cell = |i: usize| {
            row.get(i)
                .and_then(|c| c.as_deref())
                .map(str::trim)
                .filter(|c| !c.is_empty())
        };

        let Some(launch_date) = cell(cols.launch_date).and_then(parse_launch_date) else {
            continue;
        };
        let Some(metascore) = cell(cols.metascore).and_then(parse_metascore) else {
            continue;
        };
        let year = launch_date.year();

        records.push(GameRecord {
            name: cell(cols.name).unwrap_or_default().to_string(),
            launch_date,
            year,
            metascore,
            rating: cell(cols.rating).map(String::from),
            details: cell(cols.details).map(String::from),
            decade: decade_of(year),
        });
    }

    let dropped = raw.len() - records.len();
    log::info!("Loaded {} games ({dropped} rows dropped)", records.len());

    Ok(GameDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cell parsers
// ---------------------------------------------------------------------------

/// Parse a launch date in any of the layouts seen in game listings.
/// Returns `None` rather than failing so a bad cell only nulls its row.
pub fn parse_launch_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%b %d, %Y",
        "%B %d, %Y",
        "%d %b %Y",
        "%d %B %Y",
    ];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // A bare year stands for January 1st.
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse::<i32>()
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}

/// Coerce a score cell to a finite number.
pub fn parse_metascore(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
