//! Comparison operand reordering

use std::borrow::Cow;
use std::fmt;

use super::literal::is_literal;

/// Comparison operators recognised in a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    StrictEq,
    StrictNotEq,
    Eq,
    NotEq,
    Lte,
    Gte,
    Lt,
    Gt,
}

impl ComparisonOp {
    /// Search order. Longer operators come before their prefixes so that
    /// `<=` is never mistaken for `<` and `===` never for `==`.
    pub const SEARCH_ORDER: [ComparisonOp; 8] = [
        ComparisonOp::StrictEq,
        ComparisonOp::StrictNotEq,
        ComparisonOp::Eq,
        ComparisonOp::NotEq,
        ComparisonOp::Lte,
        ComparisonOp::Gte,
        ComparisonOp::Lt,
        ComparisonOp::Gt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOp::StrictEq => "===",
            ComparisonOp::StrictNotEq => "!==",
            ComparisonOp::Eq => "==",
            ComparisonOp::NotEq => "!=",
            ComparisonOp::Lte => "<=",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Gt => ">",
        }
    }

    /// The operator that keeps the comparison's meaning once operands swap
    /// sides. Equality checks are symmetric.
    pub fn mirrored(self) -> Self {
        match self {
            ComparisonOp::Lt => ComparisonOp::Gt,
            ComparisonOp::Gt => ComparisonOp::Lt,
            ComparisonOp::Lte => ComparisonOp::Gte,
            ComparisonOp::Gte => ComparisonOp::Lte,
            other => other,
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locate the comparison operator of a condition.
///
/// The first operator in [`ComparisonOp::SEARCH_ORDER`] that occurs anywhere
/// in the text wins, even when another operator appears further left. For
/// `a < b === c` this picks `===`.
pub fn find_operator(condition: &str) -> Option<(ComparisonOp, usize)> {
    ComparisonOp::SEARCH_ORDER
        .into_iter()
        .find_map(|op| condition.find(op.as_str()).map(|index| (op, index)))
}

/// Rewrite a single comparison so that its literal operand comes first.
///
/// Operands are swapped only when the right side is a literal and the left
/// side is not. Otherwise the condition is returned untouched, spacing
/// included.
pub fn rewrite(condition: &str) -> Cow<'_, str> {
    let Some((op, index)) = find_operator(condition) else {
        return Cow::Borrowed(condition);
    };

    let left = condition[..index].trim();
    let right = condition[index + op.as_str().len()..].trim();

    if is_literal(right) && !is_literal(left) {
        Cow::Owned(format!("{} {} {}", right, op.mirrored(), left))
    } else {
        Cow::Borrowed(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_operator_prefers_list_order() {
        assert_eq!(find_operator("a === b"), Some((ComparisonOp::StrictEq, 2)));
        assert_eq!(find_operator("a !== b"), Some((ComparisonOp::StrictNotEq, 2)));
        assert_eq!(find_operator("a <= b"), Some((ComparisonOp::Lte, 2)));
        assert_eq!(find_operator("a<b===c"), Some((ComparisonOp::StrictEq, 3)));
        assert_eq!(find_operator("flag"), None);
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(ComparisonOp::Lt.mirrored(), ComparisonOp::Gt);
        assert_eq!(ComparisonOp::Gte.mirrored(), ComparisonOp::Lte);
        assert_eq!(ComparisonOp::StrictNotEq.mirrored(), ComparisonOp::StrictNotEq);
    }

    #[test]
    fn test_swaps_when_literal_on_right() {
        assert_eq!(rewrite("value === 42"), "42 === value");
        assert_eq!(rewrite("name == \"Yoda\""), "\"Yoda\" == name");
        assert_eq!(rewrite("type !== null"), "null !== type");
    }

    #[test]
    fn test_flips_direction() {
        assert_eq!(rewrite("age >= 18"), "18 <= age");
        assert_eq!(rewrite("age < 18"), "18 > age");
        assert_eq!(rewrite("count > 0"), "0 < count");
        assert_eq!(rewrite("size <= MAX"), "MAX >= size");
    }

    #[test]
    fn test_normalizes_spacing_on_swap() {
        assert_eq!(rewrite("x==1"), "1 == x");
    }

    #[test]
    fn test_no_swap_keeps_text_verbatim() {
        assert!(matches!(rewrite("a  ===  b"), Cow::Borrowed("a  ===  b")));
        assert_eq!(rewrite("1 === 2"), "1 === 2");
        assert_eq!(rewrite("ERROR_CODE === code"), "ERROR_CODE === code");
        assert_eq!(rewrite("isReady"), "isReady");
    }
}
