//! Header handling for NCR exports.

use pos_model::NcrRow;

/// Column titles from the header row of an NCR export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NcrHeaders {
    pub columns: Vec<String>,
}

impl NcrHeaders {
    /// Builds headers from raw titles, dropping a UTF-8 byte-order mark
    /// before the first title.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = titles
            .into_iter()
            .enumerate()
            .map(|(idx, title)| {
                let title = title.as_ref();
                if idx == 0 {
                    title.trim_start_matches('\u{feff}').to_string()
                } else {
                    title.to_string()
                }
            })
            .collect();
        Self { columns }
    }

    /// True when the file had no header line at all.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Required NCR columns absent from this header, in declared order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        NcrRow::REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| !self.contains(column))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_from_first_title_only() {
        let headers = NcrHeaders::new(["\u{feff}Item Name", "Barcode"]);
        assert_eq!(headers.columns, vec!["Item Name", "Barcode"]);
    }

    #[test]
    fn titles_are_not_trimmed() {
        let headers = NcrHeaders::new(["Item Name ", "Barcode"]);
        assert!(!headers.contains("Item Name"));
    }

    #[test]
    fn reports_missing_required_columns() {
        let headers = NcrHeaders::new(["Item Name", "Barcode", "Vendor", "Category"]);
        assert_eq!(
            headers.missing_required(),
            vec!["Unit Cost", "Unit Price", "Qty On Hand (Units)"]
        );
    }

    #[test]
    fn full_header_has_nothing_missing() {
        let headers = NcrHeaders::new(NcrRow::REQUIRED_COLUMNS);
        assert!(headers.missing_required().is_empty());
        assert!(!headers.is_empty());
    }
}
