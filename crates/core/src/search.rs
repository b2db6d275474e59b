//! Pattern helpers for `LIKE` queries.

use crate::error::CoreError;

/// Escape character used in every `LIKE` pattern we build (PostgreSQL default).
pub const LIKE_ESCAPE: char = '\\';

/// Build a `LIKE` pattern matching any string that starts with `prefix`.
///
/// Wildcards (`%`, `_`) and the escape character inside `prefix` are
/// escaped so the prefix matches literally. The prefix may be any length.
///
/// An empty prefix is rejected because it would match every row. The HTTP
/// router never routes an empty path segment here, so this guards direct
/// library callers only.
pub fn like_prefix_pattern(prefix: &str) -> Result<String, CoreError> {
    if prefix.is_empty() {
        return Err(CoreError::Validation("prefix must not be empty".into()));
    }

    let mut pattern = String::with_capacity(prefix.len() + 1);
    for ch in prefix.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_gets_trailing_wildcard() {
        assert_eq!(like_prefix_pattern("G").unwrap(), "G%");
    }

    #[test]
    fn multi_character_prefix_is_kept_whole() {
        assert_eq!(like_prefix_pattern("CHA").unwrap(), "CHA%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(like_prefix_pattern("A%").unwrap(), "A\\%%");
        assert_eq!(like_prefix_pattern("_B").unwrap(), "\\_B%");
    }

    #[test]
    fn escape_character_is_escaped() {
        assert_eq!(like_prefix_pattern("a\\b").unwrap(), "a\\\\b%");
    }

    #[test]
    fn non_ascii_prefix_passes_through() {
        assert_eq!(like_prefix_pattern("Ö").unwrap(), "Ö%");
    }

    #[test]
    fn empty_prefix_is_rejected() {
        assert!(matches!(
            like_prefix_pattern(""),
            Err(CoreError::Validation(_))
        ));
    }
}
