//! NCR inventory export rows.

use serde::Deserialize;

/// One row of an NCR inventory snapshot, decoded by column title.
///
/// Values are kept exactly as they appear in the export. Columns not listed
/// here are ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NcrRow {
    #[serde(rename = "Item Name")]
    pub item_name: String,
    #[serde(rename = "Barcode")]
    pub barcode: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Unit Cost")]
    pub unit_cost: String,
    #[serde(rename = "Unit Price")]
    pub unit_price: String,
    #[serde(rename = "Qty On Hand (Units)")]
    pub qty_on_hand: String,
    #[serde(rename = "Category")]
    pub category: String,
}

impl NcrRow {
    pub const ITEM_NAME: &'static str = "Item Name";
    pub const BARCODE: &'static str = "Barcode";
    pub const VENDOR: &'static str = "Vendor";
    pub const UNIT_COST: &'static str = "Unit Cost";
    pub const UNIT_PRICE: &'static str = "Unit Price";
    pub const QTY_ON_HAND: &'static str = "Qty On Hand (Units)";
    pub const CATEGORY: &'static str = "Category";

    /// Column titles an export must carry to be converted.
    pub const REQUIRED_COLUMNS: [&'static str; 7] = [
        Self::ITEM_NAME,
        Self::BARCODE,
        Self::VENDOR,
        Self::UNIT_COST,
        Self::UNIT_PRICE,
        Self::QTY_ON_HAND,
        Self::CATEGORY,
    ];
}
