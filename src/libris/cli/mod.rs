//! # CLI Layer
//!
//! One possible client of the catalog, and the only place that:
//! - Parses shell arguments (clap)
//! - Writes to stdout/stderr and installs the tracing subscriber
//! - Decides exit codes
//!
//! Each invocation opens the catalog in the data directory, runs one operation
//! through `LibraryApi` and prints the resulting `CmdResult`. A lookup miss is
//! printed as a warning and still exits 0; real errors exit 1.

mod args;
mod commands;
mod print;

pub use commands::run;
pub use print::print_error;
