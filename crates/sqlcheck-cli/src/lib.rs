//! Command-line front end for `sqlcheck-core`.
//!
//! Loads SQL source text from files or standard input, runs the analysis
//! pipeline and renders the result as a text report or as JSON.
//!
//! # CLI Usage
//!
//! ```bash
//! # Check a file in the sources directory
//! sqlcheck analyze queries.sql
//!
//! # Check standard input and print the JSON report
//! echo "SELECT * FROM t;" | sqlcheck analyze --format json
//!
//! # List the available source files
//! sqlcheck --sources-dir scripts files
//! ```

pub mod error;
pub mod render;
pub mod sources;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CliError, Result};
    pub use crate::render::{render, render_json, render_text, Format};
    pub use crate::sources::{list_sql_files, load_source, read_source};
}
