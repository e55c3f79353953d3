//! Tests for the built-in category table.

use pos_model::Department;
use pos_transform::{CategoryTable, classify_category};

#[test]
fn classification_table() {
    let cases = [
        ("NewZealand", "New Zealand", "wine"),
        ("South Afri", "South Africa", "wine"),
        ("Am Whiskey", "American Whiskey", "Liquor"),
        ("HardSeltzr", "Hard Seltzer", "Hard Seltzer"),
        ("Beer", "Beer", "Beer"),
        ("Unknown123", "Unknown123", ""),
    ];
    for (label, category, department) in cases {
        let classification = classify_category(label);
        assert_eq!(classification.category, category, "category for {label:?}");
        assert_eq!(
            classification.department_label(),
            department,
            "department for {label:?}"
        );
    }
}

#[test]
fn grocery_labels_keep_their_category() {
    let table = CategoryTable::builtin();
    let grocery = table
        .rules()
        .iter()
        .find(|rule| rule.department == Department::Grocery)
        .expect("grocery rule");

    assert_eq!(grocery.labels.len(), 4);
    for label in grocery.labels {
        let classification = table.classify(label);
        assert_eq!(classification.department, Some(Department::Grocery));
        assert_eq!(classification.category, *label);
    }
}

#[test]
fn every_label_gets_its_rules_department() {
    let table = CategoryTable::builtin();
    for rule in table.rules() {
        for label in rule.labels {
            let classification = table.classify(label);
            assert_eq!(
                classification.department,
                Some(rule.department),
                "{label:?} in rule {}",
                rule.name
            );
            let expected = rule.rename(label).unwrap_or(*label);
            assert_eq!(classification.category, expected);
        }
    }
}

#[test]
fn wine_and_liquor_rename_counts() {
    let table = CategoryTable::builtin();
    let renamed = |department: Department| {
        table
            .rules()
            .iter()
            .filter(|rule| rule.department == department)
            .map(|rule| rule.renames.len())
            .sum::<usize>()
    };
    assert_eq!(renamed(Department::Wine), 2);
    assert_eq!(renamed(Department::Liquor), 5);
    assert_eq!(renamed(Department::HardSeltzer), 1);
}
