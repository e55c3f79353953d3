//! Row decoding for NCR export files.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecord};
use pos_model::NcrRow;

use crate::error::{IngestError, Result};

use super::header::NcrHeaders;

/// An open NCR export whose header has been checked.
#[derive(Debug)]
pub struct NcrReader {
    path: PathBuf,
    reader: Reader<File>,
}

/// Opens an NCR export and validates its header row.
///
/// A file with no header line at all yields no rows. Any other header must
/// carry every column in [`NcrRow::REQUIRED_COLUMNS`].
pub fn open_ncr_csv(path: &Path) -> Result<NcrReader> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let raw = reader
        .headers()
        .map_err(|e| IngestError::from_csv(path, e))?
        .clone();
    let headers = NcrHeaders::new(raw.iter());

    if !headers.is_empty() {
        if let Some(column) = headers.missing_required().first() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    // Decode against the cleaned titles so a BOM never hides the first column.
    let columns = headers.columns.len();
    reader.set_headers(StringRecord::from(headers.columns));

    tracing::debug!(
        path = %path.display(),
        columns,
        "opened ncr export"
    );

    Ok(NcrReader {
        path: path.to_path_buf(),
        reader,
    })
}

impl NcrReader {
    /// Decodes the remaining rows in file order.
    ///
    /// Ragged rows and undecodable records are reported with their position.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<NcrRow>> + '_ {
        let path = &self.path;
        self.reader
            .deserialize::<NcrRow>()
            .map(move |result| result.map_err(|e| IngestError::from_csv(path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Item Name,Barcode,Vendor,Unit Cost,Unit Price,Qty On Hand (Units),Category";

    fn export(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn read_rows(path: &Path) -> Result<Vec<NcrRow>> {
        let mut reader = open_ncr_csv(path)?;
        reader.rows().collect()
    }

    #[test]
    fn test_reads_rows_in_order() {
        let file = export(&format!(
            "{HEADER}\nMerlot,123,Acme,5,10,3,California\nLager,456,Brew,1,2,48,Beer\n"
        ));
        let rows = read_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item_name, "Merlot");
        assert_eq!(rows[0].category, "California");
        assert_eq!(rows[1].barcode, "456");
        assert_eq!(rows[1].qty_on_hand, "48");
    }

    #[test]
    fn test_bom_before_first_column() {
        let file = export(&format!("\u{feff}{HEADER}\nMerlot,123,Acme,5,10,3,Chile\n"));
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].item_name, "Merlot");
    }

    #[test]
    fn test_quoted_values_keep_commas() {
        let file = export(&format!(
            "{HEADER}\n\"Wine, Red\",123,\"Acme, Inc\",5,10,3,Spain\n"
        ));
        let rows = read_rows(file.path()).unwrap();
        assert_eq!(rows[0].item_name, "Wine, Red");
        assert_eq!(rows[0].vendor, "Acme, Inc");
    }

    #[test]
    fn test_empty_file_has_no_rows() {
        let file = export("");
        let rows = read_rows(file.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_only_file_has_no_rows() {
        let file = export(&format!("{HEADER}\n"));
        let mut reader = open_ncr_csv(file.path()).unwrap();
        assert_eq!(reader.rows().count(), 0);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let file = export("Item Name,Barcode,Vendor,Unit Cost,Unit Price,Category\nA,1,V,1,2,Beer\n");
        let err = open_ncr_csv(file.path()).unwrap_err();
        match err {
            IngestError::MissingColumn { column, .. } => assert_eq!(column, "Qty On Hand (Units)"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_row_is_a_parse_error() {
        let file = export(&format!("{HEADER}\nMerlot,123,Acme\n"));
        let err = read_rows(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_ncr_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
