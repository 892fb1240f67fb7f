//! Splitting conditions at top-level logical operators

use std::fmt;

/// Logical operators that separate individual comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub const ALL: [LogicalOp; 2] = [LogicalOp::And, LogicalOp::Or];

    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece of a condition line: either comparison text or a logical operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Trimmed, non-empty condition text
    Condition(&'a str),
    Operator(LogicalOp),
}

/// Split condition text at logical operators outside any parentheses.
///
/// Parenthesis depth is tracked but never validated: an unmatched `)` drives
/// the depth negative, which suppresses splitting for the rest of the text
/// just like an unmatched `(` does.
pub fn split(condition: &str) -> Vec<Fragment<'_>> {
    let mut parts = Vec::new();
    let mut depth: isize = 0;
    let mut start = 0;
    let mut chars = condition.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }

        if depth != 0 {
            continue;
        }

        let rest = &condition[i..];
        if let Some(op) = LogicalOp::ALL
            .into_iter()
            .find(|op| rest.starts_with(op.as_str()))
        {
            push_condition(&mut parts, &condition[start..i]);
            parts.push(Fragment::Operator(op));

            // Both operators are two ASCII characters; skip the second one
            chars.next();
            start = i + op.as_str().len();
        }
    }

    push_condition(&mut parts, &condition[start..]);
    parts
}

fn push_condition<'a>(parts: &mut Vec<Fragment<'a>>, text: &'a str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        parts.push(Fragment::Condition(trimmed));
    }
}
