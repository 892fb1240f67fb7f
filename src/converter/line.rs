//! Control-structure line recognition

use once_cell::sync::Lazy;
use regex::Regex;

/// A whole line of the form `<indent><keyword> (<condition>) {`
static CONTROL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)(if|while|for|else\s*if)?\s*\((.+)\)\s*(\{?)$")
        .expect("control line pattern is valid")
});

/// A line whose condition is wrapped in parentheses, optionally preceded by
/// a control-flow keyword and followed by an opening brace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLine<'a> {
    pub indent: &'a str,
    /// `if`, `while`, `for` or `else if` (inner spacing kept as written)
    pub keyword: Option<&'a str>,
    /// Everything between the first `(` and the last `)`
    pub condition: &'a str,
    pub brace: bool,
}

impl<'a> ControlLine<'a> {
    /// Match an entire line. Returns `None` for anything that does not have
    /// the parenthesized shape, including lines with trailing statements.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = CONTROL_LINE.captures(line)?;

        Some(Self {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            keyword: caps.get(2).map(|m| m.as_str()),
            condition: caps.get(3)?.as_str(),
            brace: caps.get(4).is_some_and(|m| !m.is_empty()),
        })
    }

    /// Reassemble the line around an already converted condition.
    /// Whitespace around the parentheses is normalized.
    pub fn render(&self, condition: &str) -> String {
        let mut out = String::with_capacity(self.indent.len() + condition.len() + 16);
        out.push_str(self.indent);
        if let Some(keyword) = self.keyword {
            out.push_str(keyword);
            out.push(' ');
        }
        out.push('(');
        out.push_str(condition);
        out.push(')');
        if self.brace {
            out.push_str(" {");
        }
        out
    }
}
