//! Whole-file conversion

use serde::Deserialize;
use std::borrow::Cow;

use super::convert_condition;
use super::line::ControlLine;

/// Which lines of a source file get rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scope {
    /// Only `if`/`while`/`for`/`else if` lines; everything else stays byte-identical
    #[default]
    ControlFlow,
    /// Every non-blank line, like [`convert_to_yoda`](super::convert_to_yoda)
    /// but keeping each line's indentation
    All,
}

/// Convert a complete source file, preserving `\n` and `\r\n` line endings.
pub fn convert_source(source: &str, scope: Scope) -> String {
    let mut out = String::with_capacity(source.len());

    for raw in source.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw);
        match scope {
            Scope::All => out.push_str(&convert_keeping_indent(line)),
            Scope::ControlFlow => match ControlLine::parse(line) {
                Some(control) if control.keyword.is_some() => {
                    out.push_str(&control.render(&convert_condition(control.condition)))
                }
                _ => out.push_str(line),
            },
        }
        out.push_str(ending);
    }

    out
}

/// Line conversion for files: flat-converted lines get their leading
/// whitespace back, and lines without a rewrite stay byte-identical
fn convert_keeping_indent(line: &str) -> Cow<'_, str> {
    let body = line.trim();
    if body.is_empty() {
        return Cow::Borrowed(line);
    }

    if let Some(control) = ControlLine::parse(line) {
        return Cow::Owned(control.render(&convert_condition(control.condition)));
    }

    let converted = convert_condition(line);
    if converted == body {
        return Cow::Borrowed(line);
    }

    let indent = &line[..line.len() - line.trim_start().len()];
    Cow::Owned(format!("{}{}", indent, converted))
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}
