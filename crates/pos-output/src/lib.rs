//! ShopKeep import generation.
//!
//! Writes [`ShopkeepRow`](pos_model::ShopkeepRow) records as a headered CSV
//! in the fixed ShopKeep column order.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::ShopkeepWriter;
