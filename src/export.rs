//! CSV download of the currently filtered, column-selected table.

use crate::routes::earthquakes::models::Earthquake;
use chrono::NaiveDate;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    #[error("At least one column must be selected")]
    NoColumns,

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ExportColumn {
    Id,
    Date,
    Time,
    Latitude,
    Longitude,
    Depth,
    Magnitude,
    Remark,
}

/// Column selection used when the caller does not choose one.
pub const DEFAULT_COLUMNS: [ExportColumn; 7] = [
    ExportColumn::Date,
    ExportColumn::Time,
    ExportColumn::Magnitude,
    ExportColumn::Depth,
    ExportColumn::Remark,
    ExportColumn::Latitude,
    ExportColumn::Longitude,
];

impl ExportColumn {
    fn render(self, record: &Earthquake) -> String {
        match self {
            ExportColumn::Id => record.id.to_string(),
            ExportColumn::Date => record.date.format("%Y-%m-%d").to_string(),
            ExportColumn::Time => record.time.format("%H:%M:%S").to_string(),
            ExportColumn::Latitude => record.latitude.to_string(),
            ExportColumn::Longitude => record.longitude.to_string(),
            ExportColumn::Depth => record.depth.to_string(),
            ExportColumn::Magnitude => record.magnitude.to_string(),
            ExportColumn::Remark => record.remark.clone(),
        }
    }

    /// Parses a comma separated selection such as `date,magnitude,remark`.
    /// Order is kept and repeated names are dropped. `None` or a blank value
    /// selects [`DEFAULT_COLUMNS`].
    pub fn parse_selection(raw: Option<&str>) -> Result<Vec<ExportColumn>, ExportError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(DEFAULT_COLUMNS.to_vec());
        };

        let mut columns = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let column = ExportColumn::from_str(&name.to_ascii_lowercase())
                .map_err(|_| ExportError::UnknownColumn(name.to_string()))?;
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        if columns.is_empty() {
            return Err(ExportError::NoColumns);
        }
        Ok(columns)
    }
}

/// Encodes `records` as CSV with a header row naming `columns`.
pub fn to_csv(records: &[Earthquake], columns: &[ExportColumn]) -> Result<Vec<u8>, ExportError> {
    if columns.is_empty() {
        return Err(ExportError::NoColumns);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns.iter().map(|c| c.to_string()))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| c.render(record)))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.error().to_string()))
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("earthquake_catalog_{}.csv", today.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::quake;
    use strum::IntoEnumIterator;

    #[test]
    fn default_selection_matches_the_table_view() {
        let columns = ExportColumn::parse_selection(None).unwrap();
        assert_eq!(columns, DEFAULT_COLUMNS.to_vec());
        assert_eq!(ExportColumn::parse_selection(Some("  ")).unwrap(), DEFAULT_COLUMNS.to_vec());
    }

    #[test]
    fn selection_keeps_order_and_drops_repeats() {
        let columns = ExportColumn::parse_selection(Some("remark, Magnitude,remark,date")).unwrap();
        assert_eq!(
            columns,
            vec![ExportColumn::Remark, ExportColumn::Magnitude, ExportColumn::Date]
        );
    }

    #[test]
    fn unknown_columns_are_rejected() {
        let err = ExportColumn::parse_selection(Some("date,colour")).unwrap_err();
        assert!(matches!(err, ExportError::UnknownColumn(name) if name == "colour"));
        assert!(matches!(
            ExportColumn::parse_selection(Some(",,")),
            Err(ExportError::NoColumns)
        ));
    }

    #[test]
    fn export_reads_back_to_the_same_rows() {
        let mut records = vec![
            quake(7, "2023-12-31", "22:48:13", 2.9, 10, "Laut Banda"),
            quake(8, "2024-01-01", "00:00:01", 5.0, 650, "Jawa Timur, Indonesia"),
        ];
        records[1].latitude = -8.123_456_789;
        let columns: Vec<ExportColumn> = ExportColumn::iter().collect();

        let bytes = to_csv(&records, &columns).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());

        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(
            headers,
            vec!["id", "date", "time", "latitude", "longitude", "depth", "magnitude", "remark"]
        );

        let rows: Vec<Earthquake> = reader
            .records()
            .map(|row| {
                let row = row.unwrap();
                Earthquake {
                    id: row[0].parse().unwrap(),
                    date: row[1].parse().unwrap(),
                    time: row[2].parse().unwrap(),
                    latitude: row[3].parse().unwrap(),
                    longitude: row[4].parse().unwrap(),
                    depth: row[5].parse().unwrap(),
                    magnitude: row[6].parse().unwrap(),
                    remark: row[7].to_string(),
                }
            })
            .collect();
        assert_eq!(rows, records);
    }

    #[test]
    fn export_of_selected_columns_and_empty_set() {
        let records = vec![quake(1, "2024-05-02", "01:02:03", 4.4, 12, "Maluku")];
        let bytes = to_csv(&records, &[ExportColumn::Magnitude, ExportColumn::Remark]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "magnitude,remark\n4.4,Maluku\n");

        let empty = to_csv(&[], &DEFAULT_COLUMNS).unwrap();
        assert_eq!(
            String::from_utf8(empty).unwrap(),
            "date,time,magnitude,depth,remark,latitude,longitude\n"
        );
    }

    #[test]
    fn filename_carries_the_date() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(export_filename(day), "earthquake_catalog_20261018.csv");
    }
}
