//! Validation of collection names and normalization of query terms.

use crate::error::{PocketdexErrorKind, PocketdexResult};

/// True if `name` may be used as a collection name: it starts with an ASCII
/// letter and contains only ASCII letters, digits and underscores.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
        }
        _ => false,
    }
}

/// Fail with `InvalidIdentifier` unless `name` is a valid collection name.
pub fn check_identifier(name: &str) -> PocketdexResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(PocketdexErrorKind::InvalidIdentifier(name.to_string()).into())
    }
}

/// Turn a raw query term into the form words are stored under in the index.
///
/// Surrounding whitespace is trimmed, then one pair of enclosing double
/// quotes is removed if present, then the term is lowercased. Single quotes
/// are left alone, as they are in the statement grammar. The result may be
/// empty, which matches nothing.
pub fn normalize_term(raw: &str) -> String {
    let term = raw.trim();
    let term = term
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(term);
    term.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_valid_identifier("docs"));
        assert!(is_valid_identifier("D_2024"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_docs"));
        assert!(!is_valid_identifier("2docs"));
        assert!(!is_valid_identifier("my-docs"));
        assert!(!is_valid_identifier("my docs"));
        assert!(!is_valid_identifier("dokumenté"));
    }

    #[test]
    fn check_identifier_reports_the_name() {
        let err = check_identifier("9lives").unwrap_err();
        assert!(matches!(
            err.into_inner(),
            PocketdexErrorKind::InvalidIdentifier(name) if name == "9lives"
        ));
    }

    #[test]
    fn terms() {
        assert_eq!(normalize_term("  Quick "), "quick");
        assert_eq!(normalize_term("\"Fox\""), "fox");
        assert_eq!(normalize_term(" \"\"Fox\"\" "), "\"fox\"");
        assert_eq!(normalize_term("\""), "\"");
        assert_eq!(normalize_term("\"\""), "");
        assert_eq!(normalize_term("   "), "");
        assert_eq!(normalize_term("'Fox'"), "'fox'");
    }
}
