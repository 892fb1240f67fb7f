//! Rewrite comparison conditions into Yoda style, literal operand first.
//!
//! ```
//! assert_eq!(yoda::convert_to_yoda("if (age >= 18) {"), "if (18 <= age) {");
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod demos;
pub mod output;
pub mod quotes;
pub mod sources;

pub use converter::convert_to_yoda;
pub use quotes::{random_quote, YODA_QUOTES};
