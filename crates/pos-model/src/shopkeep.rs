//! ShopKeep inventory import layout.

use std::fmt;

/// Number of columns in a ShopKeep inventory import.
pub const SHOPKEEP_FIELD_COUNT: usize = 20;

/// A column of the ShopKeep inventory import, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShopkeepField {
    ItemUuid,
    Name,
    Department,
    Category,
    Upc,
    StoreCode,
    Price,
    Discountable,
    Taxable,
    TrackingInventory,
    Cost,
    AssignedCost,
    Quantity,
    ReorderTrigger,
    RecommendedOrder,
    LastSoldDate,
    Supplier,
    LiabilityItem,
    LiabilityRedemptionTender,
    TaxRate,
}

impl ShopkeepField {
    /// Every field, in the order the import expects its columns.
    pub const ALL: [ShopkeepField; SHOPKEEP_FIELD_COUNT] = [
        ShopkeepField::ItemUuid,
        ShopkeepField::Name,
        ShopkeepField::Department,
        ShopkeepField::Category,
        ShopkeepField::Upc,
        ShopkeepField::StoreCode,
        ShopkeepField::Price,
        ShopkeepField::Discountable,
        ShopkeepField::Taxable,
        ShopkeepField::TrackingInventory,
        ShopkeepField::Cost,
        ShopkeepField::AssignedCost,
        ShopkeepField::Quantity,
        ShopkeepField::ReorderTrigger,
        ShopkeepField::RecommendedOrder,
        ShopkeepField::LastSoldDate,
        ShopkeepField::Supplier,
        ShopkeepField::LiabilityItem,
        ShopkeepField::LiabilityRedemptionTender,
        ShopkeepField::TaxRate,
    ];

    /// Returns the column title as it appears in the import header.
    pub fn title(&self) -> &'static str {
        match self {
            ShopkeepField::ItemUuid => "Item UUID",
            ShopkeepField::Name => "Name",
            ShopkeepField::Department => "Department",
            ShopkeepField::Category => "Category",
            ShopkeepField::Upc => "UPC",
            ShopkeepField::StoreCode => "Store Code (SKU)",
            ShopkeepField::Price => "Price",
            ShopkeepField::Discountable => "Discountable",
            ShopkeepField::Taxable => "Taxable",
            ShopkeepField::TrackingInventory => "Tracking Inventory",
            ShopkeepField::Cost => "Cost",
            ShopkeepField::AssignedCost => "Assigned Cost",
            ShopkeepField::Quantity => "Quantity",
            ShopkeepField::ReorderTrigger => "Reorder Trigger",
            ShopkeepField::RecommendedOrder => "Recommended Order",
            ShopkeepField::LastSoldDate => "Last Sold Date",
            ShopkeepField::Supplier => "Supplier",
            ShopkeepField::LiabilityItem => "Liability Item",
            ShopkeepField::LiabilityRedemptionTender => "Liability Redemption Tender",
            ShopkeepField::TaxRate => "Tax Rate",
        }
    }

    /// Header titles for every field, in import order.
    pub fn header() -> [&'static str; SHOPKEEP_FIELD_COUNT] {
        Self::ALL.map(|field| field.title())
    }
}

impl fmt::Display for ShopkeepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One row of a ShopKeep inventory import.
///
/// Only the columns the NCR export can fill carry data; every other column
/// is written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopkeepRow {
    pub name: String,
    pub department: String,
    pub category: String,
    pub upc: String,
    pub price: String,
    pub cost: String,
    pub quantity: String,
    pub supplier: String,
}

impl ShopkeepRow {
    /// Returns the value written under `field`.
    pub fn get(&self, field: ShopkeepField) -> &str {
        match field {
            ShopkeepField::Name => &self.name,
            ShopkeepField::Department => &self.department,
            ShopkeepField::Category => &self.category,
            ShopkeepField::Upc => &self.upc,
            ShopkeepField::Price => &self.price,
            ShopkeepField::Cost => &self.cost,
            ShopkeepField::Quantity => &self.quantity,
            ShopkeepField::Supplier => &self.supplier,
            ShopkeepField::ItemUuid
            | ShopkeepField::StoreCode
            | ShopkeepField::Discountable
            | ShopkeepField::Taxable
            | ShopkeepField::TrackingInventory
            | ShopkeepField::AssignedCost
            | ShopkeepField::ReorderTrigger
            | ShopkeepField::RecommendedOrder
            | ShopkeepField::LastSoldDate
            | ShopkeepField::LiabilityItem
            | ShopkeepField::LiabilityRedemptionTender
            | ShopkeepField::TaxRate => "",
        }
    }

    /// Returns the row's values in import column order.
    pub fn values(&self) -> [&str; SHOPKEEP_FIELD_COUNT] {
        ShopkeepField::ALL.map(|field| self.get(field))
    }
}
