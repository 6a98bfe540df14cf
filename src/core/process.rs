use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use walkdir::WalkDir;

use crate::types::{AppError, AppResult};

/// Capability boundary for spawning the external handler. Runners hold a
/// `&dyn ExternalProcess`, so tests can record command lines instead of
/// forking.
///
/// `invoke` blocks until the child exits and returns its exit code (`None`
/// when the child was killed by a signal). There is deliberately no timeout:
/// a hung handler hangs the batch.
pub trait ExternalProcess {
    fn invoke(&self, argv: &[String]) -> io::Result<Option<i32>>;
}

/// Production implementation backed by `std::process::Command`.
pub struct SystemProcess;

impl ExternalProcess for SystemProcess {
    fn invoke(&self, argv: &[String]) -> io::Result<Option<i32>> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty command line")
        })?;
        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}

/// One-line rendering of a command for the audit log.
pub fn render_argv(argv: &[String]) -> String {
    argv.join(" ")
}

/// Resolve the external handler. A path that exists is used as-is; a bare
/// file name is searched for under the working directory tree. Missing
/// handlers are fatal before any invocation takes place.
pub fn locate_tool(handler: &Path) -> AppResult<PathBuf> {
    locate_tool_from(handler, Path::new("."))
}

fn locate_tool_from(handler: &Path, search_root: &Path) -> AppResult<PathBuf> {
    if handler.exists() {
        return Ok(handler.to_path_buf());
    }
    if handler.components().count() == 1 {
        let found = WalkDir::new(search_root)
            .into_iter()
            .filter_map(Result::ok)
            .find(|entry| {
                entry.file_type().is_file() && entry.file_name() == handler.as_os_str()
            });
        if let Some(entry) = found {
            return Ok(entry.into_path());
        }
    }
    Err(AppError::ToolNotFound(handler.display().to_string()))
}
