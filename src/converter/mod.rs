//! Yoda condition conversion
//!
//! Text is rewritten line by line. Each line is split at top-level `&&`/`||`,
//! parenthesized groups are converted recursively and every remaining
//! comparison gets its literal operand moved to the left.

mod comparison;
mod line;
mod literal;
mod source;
mod splitter;

pub use comparison::{find_operator, rewrite, ComparisonOp};
pub use line::ControlLine;
pub use literal::is_literal;
pub use source::{convert_source, Scope};
pub use splitter::{split, Fragment, LogicalOp};

/// Convert every recognized comparison in `input` to Yoda order.
///
/// Empty or whitespace-only input yields an empty string. Lines are handled
/// independently and rejoined with `\n`, so the line count never changes.
pub fn convert_to_yoda(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    input
        .split('\n')
        .map(convert_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a single line, keeping indentation, keyword and brace of
/// `if (...) {` style lines
pub fn convert_line(line: &str) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }

    match ControlLine::parse(line) {
        Some(control) => control.render(&convert_condition(control.condition)),
        None => convert_condition(line),
    }
}

/// Convert condition text without any surrounding keyword or parentheses.
///
/// Nested groups are handled with an explicit work stack, so arbitrarily deep
/// nesting cannot exhaust the call stack.
pub fn convert_condition(content: &str) -> String {
    let parens = ParenMatcher::new(content);
    let mut out = String::with_capacity(content.len());
    let mut stack = vec![Task::Convert(content)];

    while let Some(task) = stack.pop() {
        match task {
            Task::Convert(text) => {
                // Pushed in reverse so fragments come off the stack in order
                for part in split(text).into_iter().rev() {
                    match part {
                        Fragment::Operator(op) => stack.push(Task::Operator(op)),
                        Fragment::Condition(text) => match unwrap_groups(text, &parens) {
                            Some((layers, inner)) => {
                                stack.push(Task::Close(layers));
                                stack.push(Task::Convert(inner));
                                stack.push(Task::Open(layers));
                            }
                            None => stack.push(Task::Rewrite(text)),
                        },
                    }
                }
            }
            Task::Rewrite(text) => out.push_str(&rewrite(text)),
            Task::Operator(op) => {
                out.push(' ');
                out.push_str(op.as_str());
                out.push(' ');
            }
            Task::Open(layers) => out.extend(std::iter::repeat('(').take(layers)),
            Task::Close(layers) => out.extend(std::iter::repeat(')').take(layers)),
        }
    }

    out
}

/// Pending work for [`convert_condition`]
enum Task<'a> {
    Convert(&'a str),
    Rewrite(&'a str),
    Operator(LogicalOp),
    Open(usize),
    Close(usize),
}

/// Strip the outer `(`...`)` of a fragment, plus every further layer that
/// wraps the whole remainder as one matched pair. Such a layer splits into a
/// single wrapped fragment, so peeling it here gives the same text as
/// converting it one level at a time.
fn unwrap_groups<'a>(text: &'a str, parens: &ParenMatcher) -> Option<(usize, &'a str)> {
    let mut inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut layers = 1;

    loop {
        let trimmed = inner.trim();
        if !parens.is_matched_pair(trimmed) {
            return Some((layers, inner));
        }
        inner = &trimmed[1..trimmed.len() - 1];
        layers += 1;
    }
}

/// Matching `)` for every `(` of the text being converted
struct ParenMatcher<'a> {
    base: &'a str,
    closing: Vec<Option<usize>>,
}

impl<'a> ParenMatcher<'a> {
    fn new(base: &'a str) -> Self {
        let mut closing = vec![None; base.len()];
        let mut open = Vec::new();

        for (i, b) in base.bytes().enumerate() {
            match b {
                b'(' => open.push(i),
                b')' => {
                    if let Some(start) = open.pop() {
                        closing[start] = Some(i);
                    }
                }
                _ => {}
            }
        }

        Self { base, closing }
    }

    /// Whether `text`, a slice of the base text, opens with `(` whose
    /// matching `)` is its last character
    fn is_matched_pair(&self, text: &str) -> bool {
        if !text.starts_with('(') || !text.ends_with(')') {
            return false;
        }

        let start = text.as_ptr() as usize - self.base.as_ptr() as usize;
        debug_assert!(start + text.len() <= self.base.len());
        self.closing[start] == Some(start + text.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_equality() {
        assert_eq!(convert_to_yoda("value === 42"), "42 === value");
    }

    #[test]
    fn test_compound_condition() {
        assert_eq!(
            convert_to_yoda("count > 0 && status === true"),
            "0 < count && true === status"
        );
        assert_eq!(
            convert_to_yoda("type !== null && value === undefined"),
            "null !== type && undefined === value"
        );
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(
            convert_to_yoda("(a == 1 || b == 2) && c != \"x\""),
            "(1 == a || 2 == b) && \"x\" != c"
        );
        assert_eq!(
            convert_to_yoda("if ((x > 5) || (y <= 0)) {"),
            "if ((5 < x) || (0 >= y)) {"
        );
    }

    #[test]
    fn test_operator_spacing_normalized() {
        assert_eq!(convert_to_yoda("a==1&&b"), "1 == a && b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_to_yoda(""), "");
        assert_eq!(convert_to_yoda("  \n\t "), "");
    }

    #[test]
    fn test_blank_lines_pass_through() {
        assert_eq!(convert_to_yoda("a == 1\n   \nb < 2"), "1 == a\n   \n2 > b");
    }

    #[test]
    fn test_empty_parens_kept() {
        assert_eq!(convert_condition("()"), "()");
    }

    #[test]
    fn test_unbalanced_groups_convert_per_layer() {
        assert_eq!(convert_condition("((a) == (b))"), "((a) == (b))");
        assert_eq!(convert_condition("((x > 1) && (y))"), "((1 < x) && (y))");
        assert_eq!(convert_condition("( (n < 2) )"), "((2 > n))");
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 100_000;
        let input = format!("{}a == 1{}", "(".repeat(depth), ")".repeat(depth));
        let expected = format!("{}1 == a{}", "(".repeat(depth), ")".repeat(depth));

        assert_eq!(convert_to_yoda(&input), expected);
    }

    #[test]
    fn test_deep_nesting_with_operators() {
        let depth = 5_000;
        let input = format!("{}a == 1{}", "(".repeat(depth), " && b < 2)".repeat(depth));
        let expected = format!("{}1 == a{}", "(".repeat(depth), " && 2 > b)".repeat(depth));

        assert_eq!(convert_condition(&input), expected);
    }

    #[test]
    fn test_known_limitation_list_order() {
        // `===` is found before `<`, so the split happens there
        assert_eq!(convert_to_yoda("a<b===c"), "a<b===c");
        assert_eq!(convert_to_yoda("a<b===1"), "1 === a<b");
    }
}
