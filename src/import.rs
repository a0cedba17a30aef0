//! One-shot loader for the agency's delimited catalog export.
//!
//! Expected header: `tgl,ot,lat,lon,depth,mag,remark`, with dates written as
//! `M/D/YYYY` and origin times as `H.M.S`. Every row is inserted inside its
//! own savepoint of a single transaction, so a bad row is logged and skipped
//! without losing the rows around it. The transaction commits once, at the
//! end of the file.

use crate::routes::earthquakes::db::ActiveModel;
use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DbErr, Set, TransactionTrait,
};
use std::{io::Read, path::Path};
use thiserror::Error;
use tracing::{error, info, warn};

const REQUIRED_COLUMNS: [&str; 7] = ["tgl", "ot", "lat", "lon", "depth", "mag", "remark"];
const PROGRESS_EVERY: usize = 100;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Cannot open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot read CSV header: {0}")]
    Header(#[from] csv::Error),

    #[error("CSV header is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("Database error, import rolled back: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line in the input file
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: Vec<SkippedRow>,
}

/// A source row after conversion, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub latitude: f64,
    pub longitude: f64,
    pub depth: i32,
    pub magnitude: f64,
    pub remark: String,
}

impl ParsedRow {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            date: Set(self.date),
            time: Set(self.time),
            latitude: Set(self.latitude),
            longitude: Set(self.longitude),
            depth: Set(self.depth),
            magnitude: Set(self.magnitude),
            remark: Set(self.remark),
        }
    }
}

/// `1/21/2018` -> 2018-01-21
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(format!("date '{raw}' is not M/D/YYYY"));
    };
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("date '{raw}': {e}"))
    };
    let (month, day) = (parse(*month)?, parse(*day)?);
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("date '{raw}': {e}"))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| format!("date '{raw}' does not exist"))
}

/// `22.48.13` -> 22:48:13
pub fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    let normalized = raw.trim().replace('.', ":");
    NaiveTime::parse_from_str(&normalized, "%H:%M:%S").map_err(|e| format!("time '{raw}': {e}"))
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| format!("{name} '{raw}': {e}"))
}

struct ColumnIndex([usize; 7]);

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ImportError> {
        let mut indices = [0usize; 7];
        for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(ImportError::MissingColumn(name))?;
        }
        Ok(Self(indices))
    }

    fn parse(&self, record: &csv::StringRecord) -> Result<ParsedRow, String> {
        let field = |i: usize| {
            record
                .get(self.0[i])
                .ok_or_else(|| format!("missing field '{}'", REQUIRED_COLUMNS[i]))
        };
        Ok(ParsedRow {
            date: parse_date(field(0)?)?,
            time: parse_time(field(1)?)?,
            latitude: parse_number("lat", field(2)?)?,
            longitude: parse_number("lon", field(3)?)?,
            depth: parse_number("depth", field(4)?)?,
            magnitude: parse_number("mag", field(5)?)?,
            remark: field(6)?.to_string(),
        })
    }
}

pub async fn import_csv_file(
    db: &DatabaseConnection,
    path: &Path,
) -> Result<ImportReport, ImportError> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|source| ImportError::Open {
            path: path.display().to_string(),
            source,
        })?;
    import_csv(db, contents.as_slice()).await
}

/// Reads `input` synchronously between inserts, so pass an in-memory
/// buffer rather than a file or socket. [`import_csv_file`] loads the file
/// with `tokio::fs` first.
pub async fn import_csv<R: Read + Send>(
    db: &DatabaseConnection,
    input: R,
) -> Result<ImportReport, ImportError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let txn = db.begin().await?;
    let mut report = ImportReport::default();

    for (index, result) in reader.records().enumerate() {
        let fallback_line = index as u64 + 2; // line 1 is the header
        let parsed = match result {
            Ok(record) => {
                let line = record.position().map_or(fallback_line, |p| p.line());
                columns.parse(&record).map(|row| (line, row)).map_err(|e| (line, e))
            }
            Err(e) => Err((fallback_line, e.to_string())),
        };

        let (line, row) = match parsed {
            Ok(ok) => ok,
            Err((line, reason)) => {
                warn!(line, reason = %reason, "Skipping unparseable row");
                report.skipped.push(SkippedRow { line, reason });
                continue;
            }
        };

        let savepoint = txn.begin().await?;
        match row.into_active_model().insert(&savepoint).await {
            Ok(_) => {
                savepoint.commit().await?;
                report.imported += 1;
                if report.imported % PROGRESS_EVERY == 0 {
                    info!(imported = report.imported, "Import progress");
                }
            }
            Err(e) => {
                savepoint.rollback().await?;
                warn!(line, error = %e, "Skipping row rejected by the database");
                report.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }

    txn.commit().await.inspect_err(|e| {
        error!(error = %e, "Final commit failed, nothing was imported");
    })?;

    info!(
        imported = report.imported,
        skipped = report.skipped.len(),
        "Import finished"
    );
    Ok(report)
}
