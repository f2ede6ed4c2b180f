//! Price text normalization.

/// Converts a free-form price string into an integer amount.
///
/// Digits are collected left to right and every other character is skipped,
/// wherever it occurs. The first `.` seen after at least one digit ends the
/// scan, so the fractional part is truncated rather than rounded. Text without
/// any digit normalizes to `0`.
///
/// ```
/// use price_scout::normalize_price;
///
/// assert_eq!(normalize_price("Rs. 1,234"), 1234);
/// assert_eq!(normalize_price("$99.99"), 99);
/// assert_eq!(normalize_price("No price"), 0);
/// ```
pub fn normalize_price(text: &str) -> u64 {
    let mut value: u64 = 0;
    let mut seen_digit = false;

    for ch in text.chars() {
        if ch == '.' && seen_digit {
            break;
        }

        if let Some(digit) = ch.to_digit(10) {
            seen_digit = true;
            // Saturate instead of wrapping on absurdly long digit runs.
            value = value.saturating_mul(10).saturating_add(u64::from(digit));
        }
    }

    value
}
