//! Hex color strings as stored in plan records.

/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` (case-insensitive).
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
