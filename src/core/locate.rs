use std::path::{Path, PathBuf};

use crate::core::naming::core_name;
use crate::types::{AppError, AppResult};

/// Lookup of the reference automaton paired with a reduced one. A trait so
/// the error-evaluation runner can be tested against an in-memory listing
/// instead of a real directory.
pub trait ReferenceLocator {
    /// Returns the reference automaton for `reduced`, or `AppError::Lookup`
    /// when none exists. Lookup failures are recoverable; callers skip the
    /// item and continue.
    fn locate(&self, reduced: &Path, reference_dir: &Path) -> AppResult<PathBuf>;
}

/// Production locator: references live under the reference directory named
/// `<prefix>*.fa`, where `<prefix>` is the reduced automaton's base name up
/// to its first `.`. Several files may match (different minimization runs);
/// the first match in lexicographic order wins.
pub struct GlobLocator;

impl ReferenceLocator for GlobLocator {
    fn locate(&self, reduced: &Path, reference_dir: &Path) -> AppResult<PathBuf> {
        let prefix = core_name(reduced);
        let pattern = reference_dir.join(format!("{prefix}*.fa"));
        let pattern_str = pattern.to_string_lossy();

        let mut matches: Vec<PathBuf> = glob::glob(&pattern_str)?
            .filter_map(Result::ok)
            .collect();
        matches.sort();
        matches
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Lookup(pattern_str.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn first_lexicographic_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("web.min2.fa"), b"").unwrap();
        fs::write(dir.path().join("web.min1.fa"), b"").unwrap();
        fs::write(dir.path().join("mail.min.fa"), b"").unwrap();

        let found = GlobLocator
            .locate(Path::new("web.36541.r0.1.fa"), dir.path())
            .unwrap();
        assert_eq!(found.file_name().unwrap(), "web.min1.fa");
    }

    #[test]
    fn missing_reference_is_a_lookup_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GlobLocator
            .locate(Path::new("web.36541.r0.1.fa"), dir.path())
            .unwrap_err();
        assert!(matches!(err, AppError::Lookup(_)));
    }
}
