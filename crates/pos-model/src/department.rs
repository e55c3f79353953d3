//! ShopKeep departments and category classifications.

use std::fmt;

/// A ShopKeep department.
///
/// The NCR export only carries a category; departments are derived from it
/// during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Wine,
    Liquor,
    Sake,
    Beer,
    Cider,
    Bubbles,
    HardSeltzer,
    Rtd,
    BarAccessories,
    HardKombucha,
    Tobacco,
    NonAlcoholicBeverages,
    Grocery,
}

impl Department {
    /// Returns the department label exactly as the import expects it.
    ///
    /// `Wine` is lower case in the existing ShopKeep store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Wine => "wine",
            Department::Liquor => "Liquor",
            Department::Sake => "Sake",
            Department::Beer => "Beer",
            Department::Cider => "Cider",
            Department::Bubbles => "Bubbles",
            Department::HardSeltzer => "Hard Seltzer",
            Department::Rtd => "RTD",
            Department::BarAccessories => "Bar Accessories",
            Department::HardKombucha => "Hard Kombucha",
            Department::Tobacco => "Tobacco",
            Department::NonAlcoholicBeverages => "Non Alcoholic Beverages",
            Department::Grocery => "Grocery",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Destination category and department for one source label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: String,
    pub department: Option<Department>,
}

impl Classification {
    /// A label no rule recognised: category kept, no department.
    pub fn unmatched(label: &str) -> Self {
        Self {
            category: label.to_string(),
            department: None,
        }
    }

    /// Department label, or the empty string when unclassified.
    pub fn department_label(&self) -> &'static str {
        self.department.map(|d| d.as_str()).unwrap_or_default()
    }
}
