//! Inventory record types for the NCR to ShopKeep conversion.
//!
//! - [`NcrRow`]: one decoded row of an NCR inventory export
//! - [`ShopkeepRow`] / [`ShopkeepField`]: the fixed 20-field ShopKeep import layout
//! - [`Department`] / [`Classification`]: the two-level ShopKeep product classification

pub mod department;
pub mod shopkeep;
pub mod source;

pub use department::{Classification, Department};
pub use shopkeep::{SHOPKEEP_FIELD_COUNT, ShopkeepField, ShopkeepRow};
pub use source::NcrRow;
