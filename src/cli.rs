use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::converter::{convert_to_yoda, Scope};
use crate::demos::EXAMPLES;
use crate::output::{render_examples, render_report};
use crate::quotes::random_quote;
use crate::sources::{collect_sources, rewrite_files};

/// Yoda - Rewrite conditions so the literal comes first
#[derive(Parser)]
#[command(name = "yoda")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert conditions given as an argument or on stdin
    Convert {
        /// Condition text (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Do not print a quote after converting
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rewrite conditions in source files in place
    Fix {
        /// File or directory to process
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Report files that would change without writing them
        #[arg(long)]
        check: bool,

        /// Which lines to rewrite (overrides yoda.toml)
        #[arg(long, value_enum)]
        scope: Option<Scope>,
    },

    /// Show sample conditions and their conversions
    Examples,

    /// Print a random Yoda quote
    Quote,
}

#[derive(thiserror::Error, Debug)]
enum FixError {
    #[error("{0} file(s) contain conditions not in Yoda order")]
    CheckFailed(usize),

    #[error("{0} file(s) could not be processed")]
    FilesSkipped(usize),
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Convert { text, quiet } => convert(text, quiet),
            Commands::Fix { path, check, scope } => fix(&path, check, scope),
            Commands::Examples => {
                print!("{}", render_examples(&EXAMPLES));
                Ok(())
            }
            Commands::Quote => {
                println!("{}", random_quote());
                Ok(())
            }
        }
    }
}

fn convert(text: Option<String>, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let input = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // Drop the newline terminating piped input; it is not part of the condition
            match buf.strip_suffix('\n') {
                Some(stripped) => stripped.strip_suffix('\r').unwrap_or(stripped).to_string(),
                None => buf,
            }
        }
    };

    let converted = convert_to_yoda(&input);
    println!("{}", converted);

    if !quiet && !converted.is_empty() && converted != input {
        eprintln!("\"{}\"", random_quote());
    }

    Ok(())
}

fn fix(
    path: &Path,
    check: bool,
    scope: Option<Scope>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover()?;
    let scope = scope.unwrap_or(config.scope);

    let files = collect_sources(path, &config)?;
    if files.is_empty() {
        println!("No matching source files found in {:?}", path);
        return Ok(());
    }

    log::debug!("Processing {} files with scope {:?}", files.len(), scope);

    let report = rewrite_files(&files, scope, check);
    print!("{}", render_report(&report, check));

    if !report.skipped.is_empty() {
        return Err(FixError::FilesSkipped(report.skipped.len()).into());
    }

    if check && !report.changes.is_empty() {
        return Err(FixError::CheckFailed(report.changes.len()).into());
    }

    Ok(())
}
