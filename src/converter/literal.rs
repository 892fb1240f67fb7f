//! Literal operand classification

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Quote characters that may delimit a string literal
const QUOTES: [char; 3] = ['\'', '"', '`'];

/// Numeric, boolean, nullish and constant-name patterns
static LITERAL_PATTERNS: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        // Decimal, optionally negative, optionally fractional
        r"^-?[0-9]+(\.[0-9]+)?$",
        r"^0x[0-9a-fA-F]+$",
        r"^0b[01]+$",
        r"^0o[0-7]+$",
        r"^(true|false)$",
        r"^(null|undefined)$",
        // SCREAMING_SNAKE_CASE constants
        r"^[A-Z][A-Z0-9_]*$",
    ])
    .expect("literal patterns are valid")
});

/// Check whether operand text denotes a literal value.
///
/// Strings in any of the three quote styles, numbers in decimal, hex, binary
/// or octal, `true`/`false`, `null`/`undefined` and all-caps constant names
/// count as literals. Anything else is treated as a variable or expression.
pub fn is_literal(value: &str) -> bool {
    let trimmed = value.trim();
    is_quoted(trimmed) || LITERAL_PATTERNS.is_match(trimmed)
}

/// Opening and closing quote must be the same character
fn is_quoted(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => QUOTES.contains(&first) && first == last,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literals() {
        assert!(is_literal("\"Yoda\""));
        assert!(is_literal("'single'"));
        assert!(is_literal("`template`"));
        assert!(is_literal("\"\""));
        assert!(!is_literal("\"mismatched'"));
        assert!(!is_literal("\""));
    }

    #[test]
    fn test_numeric_literals() {
        assert!(is_literal("42"));
        assert!(is_literal("-7"));
        assert!(is_literal("3.14"));
        assert!(is_literal("0xFF"));
        assert!(is_literal("0b1010"));
        assert!(is_literal("0o755"));
        assert!(!is_literal("3."));
        assert!(!is_literal("0b102"));
        assert!(!is_literal("0o9"));
    }

    #[test]
    fn test_keyword_literals() {
        assert!(is_literal("true"));
        assert!(is_literal("false"));
        assert!(is_literal("null"));
        assert!(is_literal("undefined"));
        assert!(!is_literal("True"));
    }

    #[test]
    fn test_constants() {
        assert!(is_literal("ERROR_CODE"));
        assert!(is_literal("MAX_SIZE_2"));
        assert!(is_literal("A"));
        assert!(!is_literal("Error_Code"));
        assert!(!is_literal("_PRIVATE"));
    }

    #[test]
    fn test_non_literals() {
        for value in ["value", "status", "camelCase", "obj.prop", "getValue()", "a[0]"] {
            assert!(!is_literal(value), "{value} should not be a literal");
        }
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert!(is_literal("  42 "));
        assert!(!is_literal(""));
        assert!(!is_literal("   "));
    }
}
