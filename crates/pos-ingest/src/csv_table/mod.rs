//! CSV reading utilities.

mod header;
mod reader;

pub use header::NcrHeaders;
pub use reader::{NcrReader, open_ncr_csv};
