//! NCR row to ShopKeep row conversion.

use pos_model::{NcrRow, ShopkeepRow};

use crate::barcode::normalize_barcode;
use crate::classify::CategoryTable;

/// Converts one NCR export row into a ShopKeep import row.
///
/// | ShopKeep     | NCR                         |
/// |--------------|-----------------------------|
/// | `Name`       | `Item Name`                 |
/// | `UPC`        | `Barcode`, normalized       |
/// | `Supplier`   | `Vendor`                    |
/// | `Cost`       | `Unit Cost`                 |
/// | `Price`      | `Unit Price`                |
/// | `Quantity`   | `Qty On Hand (Units)`       |
/// | `Category`   | `Category`, classified      |
/// | `Department` | derived from `Category`     |
pub fn convert_row(row: &NcrRow, table: &CategoryTable) -> ShopkeepRow {
    let classification = table.classify(&row.category);
    let upc = normalize_barcode(&row.barcode);
    tracing::trace!(
        barcode = %row.barcode,
        upc = %upc,
        label = %row.category,
        category = %classification.category,
        department = classification.department_label(),
        "converted row"
    );
    ShopkeepRow {
        name: row.item_name.clone(),
        department: classification.department_label().to_string(),
        category: classification.category,
        upc,
        price: row.unit_price.clone(),
        cost: row.unit_cost.clone(),
        quantity: row.qty_on_hand.clone(),
        supplier: row.vendor.clone(),
    }
}
