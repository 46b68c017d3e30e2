//! TypeScript identifier rules for property keys.

/// Whether `name` can be written as a bare property key.
///
/// Only ASCII identifiers qualify; everything else (including numeric keys)
/// is printed as a quoted string. Reserved words are valid property names.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("name"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$ref"));
        assert!(is_identifier("camelCase2"));
        assert!(is_identifier("class"));
    }

    #[test]
    fn test_non_identifiers() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("200"));
        assert!(!is_identifier("2xx"));
        assert!(!is_identifier("content-type"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("ünïcode"));
    }
}
