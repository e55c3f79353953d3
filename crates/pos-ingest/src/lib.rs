//! NCR inventory export ingestion.
//!
//! This crate finds NCR inventory snapshot CSV files in a directory and
//! decodes their rows into [`NcrRow`](pos_model::NcrRow) records.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pos_ingest::{list_csv_files, open_ncr_csv};
//!
//! for path in list_csv_files(Path::new("exports"))? {
//!     let mut reader = open_ncr_csv(&path)?;
//!     for row in reader.rows() {
//!         let row = row?;
//!         println!("{} ({})", row.item_name, row.category);
//!     }
//! }
//! ```

mod csv_table;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{NcrHeaders, NcrReader, open_ncr_csv};

// === File Discovery ===
pub use discovery::list_csv_files;
