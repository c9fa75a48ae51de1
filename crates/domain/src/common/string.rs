//! String helpers.

/// Returns the trimmed value, or `None` when nothing but whitespace is left.
///
/// Upstream payloads and query strings both use blank strings to mean
/// "absent", so every optional text input goes through this.
///
/// # Examples
///
/// ```
/// use pokedex_domain::common::non_blank;
///
/// assert_eq!(non_blank(" Pikachu "), Some("Pikachu"));
/// assert_eq!(non_blank(""), None);
/// assert_eq!(non_blank("   "), None);
/// ```
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Owned variant of [`non_blank`] for optional fields.
///
/// # Examples
///
/// ```
/// use pokedex_domain::common::non_blank_owned;
///
/// assert_eq!(non_blank_owned(Some("day".to_string())), Some("day".to_string()));
/// assert_eq!(non_blank_owned(Some(String::new())), None);
/// assert_eq!(non_blank_owned(None), None);
/// ```
pub fn non_blank_owned(value: Option<String>) -> Option<String> {
    value.and_then(|v| non_blank(&v).map(str::to_string))
}
