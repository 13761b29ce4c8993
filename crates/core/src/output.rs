//! CSV output for per-year and combined result sets.
//!
//! Column order is fixed by [`CsvRow`]: `year,title,player,grade,card_no,item_url,image`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::record::{CsvRow, NormalizedRecord};

/// File name of the combined output.
pub const COMBINED_FILE_NAME: &str = "cards_all.csv";

pub fn year_file_name(year: i32) -> String {
    format!("cards_{year}.csv")
}

/// Write `records` with a header row to `path`, creating parent directories.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::Csv` if the file cannot be written.
pub fn write_records(path: &Path, records: &[NormalizedRecord]) -> Result<(), Error> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write one year's records to `cards_{year}.csv` under `dir`.
///
/// Nothing is written for an empty slice; returns the path when a file was written.
pub fn write_year(dir: &Path, year: i32, records: &[NormalizedRecord]) -> Result<Option<PathBuf>, Error> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = dir.join(year_file_name(year));
    write_records(&path, records)?;
    tracing::info!(year, rows = records.len(), path = %path.display(), "wrote year CSV");
    Ok(Some(path))
}

/// Write all records to `cards_all.csv` under `dir`. Nothing is written for an empty slice.
pub fn write_combined(dir: &Path, records: &[NormalizedRecord]) -> Result<Option<PathBuf>, Error> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = dir.join(COMBINED_FILE_NAME);
    write_records(&path, records)?;
    tracing::info!(rows = records.len(), path = %path.display(), "wrote combined CSV");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawItem, assemble};
    use crate::title::ExtractedAttributes;

    fn record(year: i32, title: &str, grade: Option<&str>) -> NormalizedRecord {
        let item = RawItem {
            item_id: "1".into(),
            title: title.into(),
            item_url: "https://www.ebay.com/itm/1".into(),
            gallery_url: "https://i.ebayimg.com/1.jpg".into(),
        };
        let attrs = ExtractedAttributes {
            player: "Mike Trout".into(),
            grade: grade.map(str::to_string),
            card_number: Some("27".into()),
        };
        assemble(year, &item, attrs)
    }

    #[test]
    fn test_year_file_name() {
        assert_eq!(year_file_name(1986), "cards_1986.csv");
    }

    #[test]
    fn test_write_year_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let records = vec![record(2020, "Trout, Mike \"PSA\"", Some("PSA 10")), record(2020, "Trout raw", None)];

        let path = write_year(&out, 2020, &records).unwrap().unwrap();
        assert_eq!(path, out.join("cards_2020.csv"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), ["year", "title", "player", "grade", "card_no", "item_url", "image"]);

        let rows: Vec<CsvRow> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Trout, Mike \"PSA\"");
        assert_eq!(rows[0].grade, "PSA 10");
        assert_eq!(rows[1].grade, "N/A");
        assert_eq!(rows[1].card_no, "27");
    }

    #[test]
    fn test_write_year_skips_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(write_year(dir.path(), 1999, &[]).unwrap().is_none());
        assert!(!dir.path().join("cards_1999.csv").exists());
    }

    #[test]
    fn test_write_combined() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![record(1980, "a", None), record(1981, "b", None)];

        let path = write_combined(dir.path(), &records).unwrap().unwrap();
        assert!(path.ends_with(COMBINED_FILE_NAME));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let years: Vec<i32> = reader.deserialize::<CsvRow>().map(|r| r.unwrap().year).collect();
        assert_eq!(years, [1980, 1981]);
        assert!(write_combined(dir.path(), &[]).unwrap().is_none());
    }
}
