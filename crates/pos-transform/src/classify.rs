//! NCR category to ShopKeep category/department classification.
//!
//! NCR only has a category, truncated to ten characters. ShopKeep has both a
//! category and a department. The mapping is a fixed, hand-curated table for
//! the inventory being moved.
//!
//! Rules are evaluated in order and every rule is checked. A matching rule
//! sets the department and, if it has a rename for the label, the category.
//! When a label appears in more than one rule the last match wins.

use std::collections::BTreeMap;

use pos_model::{Classification, Department};

/// One classification rule: a set of NCR labels sharing a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Short name used in diagnostics.
    pub name: &'static str,
    /// Exact NCR labels this rule matches.
    pub labels: &'static [&'static str],
    /// Department assigned on match.
    pub department: Department,
    /// `(NCR label, ShopKeep category)` expansions of truncated labels.
    pub renames: &'static [(&'static str, &'static str)],
}

impl CategoryRule {
    /// Returns true if `label` is one of this rule's labels (exact match).
    pub fn matches(&self, label: &str) -> bool {
        self.labels.iter().any(|candidate| *candidate == label)
    }

    /// Returns the ShopKeep category for `label` if this rule renames it.
    pub fn rename(&self, label: &str) -> Option<&'static str> {
        self.renames
            .iter()
            .find(|(from, _)| *from == label)
            .map(|(_, to)| *to)
    }
}

const fn single(
    name: &'static str,
    labels: &'static [&'static str],
    department: Department,
) -> CategoryRule {
    CategoryRule {
        name,
        labels,
        department,
        renames: &[],
    }
}

static BUILTIN_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "wine",
        labels: &[
            "Argentina",
            "Australia",
            "California",
            "Chile",
            "France",
            "Germany",
            "Glogg",
            "Mexico",
            "Italy",
            "New York",
            "NewZealand",
            "Oregon",
            "Portugal",
            "South Afri",
            "Spain",
            "Texas",
            "Washington",
            "Mead",
            "Marsala",
            "Sherry",
        ],
        department: Department::Wine,
        renames: &[("NewZealand", "New Zealand"), ("South Afri", "South Africa")],
    },
    CategoryRule {
        name: "liquor",
        labels: &[
            "Am Whiskey",
            "Bourbon",
            "Brandy",
            "CAN Whisky",
            "Cognac",
            "Everclear",
            "Gin",
            "IrishCream",
            "IrishWhisk",
            "JapanWhisk",
            "Liqueur",
            "Mezcal",
            "Moonshine",
            "Pisco",
            "Rum",
            "Rye",
            "Schnapps",
            "Scotch",
            "Sotol",
            "Tequila",
            "Vodka",
            "Vermouth",
            "Apertif",
        ],
        department: Department::Liquor,
        renames: &[
            ("Am Whiskey", "American Whiskey"),
            ("CAN Whisky", "Canadian Whiskey"),
            ("IrishCream", "Irish Cream"),
            ("IrishWhisk", "Irish Whiskey"),
            ("JapanWhisk", "Japanese Whiskey"),
        ],
    },
    single("sake", &["Sake"], Department::Sake),
    single("beer", &["Beer"], Department::Beer),
    single("cider", &["Cider"], Department::Cider),
    single("bubbles", &["Bubbles"], Department::Bubbles),
    CategoryRule {
        name: "hard seltzer",
        labels: &["HardSeltzr"],
        department: Department::HardSeltzer,
        renames: &[("HardSeltzr", "Hard Seltzer")],
    },
    single("rtd", &["RTD"], Department::Rtd),
    single("bar accessories", &["Bar Stuff"], Department::BarAccessories),
    single("kombucha", &["Kombucha"], Department::HardKombucha),
    single("tobacco", &["Cigar", "Cigarettes"], Department::Tobacco),
    single(
        "non-alcoholic",
        &["Nonalcohol", "Mixer"],
        Department::NonAlcoholicBeverages,
    ),
    single(
        "grocery",
        &["Gift Bag", "Grocery", "J/SpiceOil", "Lighter"],
        Department::Grocery,
    ),
];

/// An ordered list of classification rules.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    rules: &'static [CategoryRule],
}

impl CategoryTable {
    /// Builds a table from rules in priority order.
    pub const fn new(rules: &'static [CategoryRule]) -> Self {
        Self { rules }
    }

    /// The built-in table for the NCR inventory.
    pub const fn builtin() -> Self {
        Self::new(BUILTIN_RULES)
    }

    pub fn rules(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// Classifies an NCR category label.
    ///
    /// Matching is exact: no trimming or case folding. A label no rule
    /// recognises keeps its text and gets no department.
    pub fn classify(&self, label: &str) -> Classification {
        let mut classification = Classification::unmatched(label);
        for rule in self.rules.iter().filter(|rule| rule.matches(label)) {
            classification.department = Some(rule.department);
            if let Some(category) = rule.rename(label) {
                classification.category = category.to_string();
            }
        }
        if classification.department.is_none() {
            tracing::debug!(label, "no category rule matched");
        }
        classification
    }

    /// Labels listed by more than one rule, with the names of those rules.
    ///
    /// Such labels resolve to the last matching rule.
    pub fn overlapping_labels(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut owners: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
        for rule in self.rules {
            for &label in rule.labels {
                owners.entry(label).or_default().push(rule.name);
            }
        }
        owners.retain(|_, rules| rules.len() > 1);
        owners
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classifies `label` against the built-in table.
pub fn classify_category(label: &str) -> Classification {
    CategoryTable::builtin().classify(label)
}
