//! Terminal and file output

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::converter::convert_to_yoda;
use crate::demos::Example;
use crate::sources::Report;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Write converted content to a file, creating parent directories if needed
pub fn write_file(output_path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}

/// Render the example list with each input's conversion
pub fn render_examples(examples: &[Example]) -> String {
    let mut output = String::new();

    for (i, example) in examples.iter().enumerate() {
        let is_last = i == examples.len() - 1;
        output.push_str(example.description);
        output.push('\n');
        output.push_str("├── ");
        output.push_str(example.input);
        output.push('\n');
        output.push_str("└── ");
        output.push_str(&convert_to_yoda(example.input));
        output.push('\n');
        if !is_last {
            output.push('\n');
        }
    }

    output
}

/// Summarize a rewrite run, one line per changed file
pub fn render_report(report: &Report, check: bool) -> String {
    let mut output = String::new();
    let verb = if check { "would change" } else { "changed" };

    for change in &report.changes {
        output.push_str(&format!(
            "  -> {} ({} {})\n",
            change.path.display(),
            change.changed_lines,
            if change.changed_lines == 1 { "line" } else { "lines" }
        ));
    }

    for skipped in &report.skipped {
        output.push_str(&format!(
            "  !! {} (skipped: {})\n",
            skipped.path.display(),
            skipped.reason
        ));
    }

    output.push_str(&format!(
        "{} of {} files {}\n",
        report.changes.len(),
        report.files_scanned,
        verb
    ));

    output
}
