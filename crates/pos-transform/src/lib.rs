//! Row-level transforms from NCR exports to ShopKeep imports.
//!
//! Both core transforms are pure functions of their input:
//!
//! - [`normalize_barcode`]: pads short barcodes to UPC-E / UPC-A lengths
//! - [`CategoryTable::classify`]: maps an NCR category to a ShopKeep
//!   category and department
//!
//! [`convert_row`] combines them with the field renames.

pub mod barcode;
pub mod classify;
pub mod convert;

pub use barcode::{barcode_target_len, normalize_barcode};
pub use classify::{CategoryRule, CategoryTable, classify_category};
pub use convert::convert_row;
