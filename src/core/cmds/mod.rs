use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::types::AppResult;

mod batch;
mod label;
mod stats;

pub use batch::execute_batch;
pub use label::execute_label;
pub use stats::execute_stats;

/// Route rendered report text to a file or stdout.
fn write_output(target: Option<&Path>, contents: &str) -> AppResult<()> {
    match target {
        Some(path) => fs::write(path, contents)?,
        None => io::stdout().write_all(contents.as_bytes())?,
    }
    Ok(())
}
