//! Barcode normalization.
//!
//! ShopKeep accepts UPC/EAN barcodes of 8, 12 or 13 characters. NCR drops
//! leading zeros, so short codes are left-padded back to the next valid
//! length. Padding is purely length based; characters are never inspected.

/// Returns the length a barcode of `len` characters is padded to, or `None`
/// when it is kept as is.
///
/// - 0: kept (an empty barcode stays empty)
/// - 1..=7: padded to 8
/// - 8: kept
/// - 9..=11: padded to 12
/// - 12 and longer: kept
pub fn barcode_target_len(len: usize) -> Option<usize> {
    match len {
        1..=7 => Some(8),
        9..=11 => Some(12),
        _ => None,
    }
}

/// Left-pads a barcode with `'0'` to a length ShopKeep accepts.
///
/// Length is counted in characters, not bytes.
pub fn normalize_barcode(barcode: &str) -> String {
    let len = barcode.chars().count();
    match barcode_target_len(len) {
        Some(target) => {
            let mut padded = "0".repeat(target - len);
            padded.push_str(barcode);
            padded
        }
        None => barcode.to_string(),
    }
}
