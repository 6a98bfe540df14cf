use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{AppError, AppResult};

/// Base name of `path` up to its first `.`. This is the "core" name shared
/// by an automaton and every artifact derived from it, which is what ties a
/// reduced automaton back to its reference.
pub fn core_name(path: &Path) -> &str {
    let base = path
        .file_name()
        .map(|n| n.to_str().unwrap_or_default())
        .unwrap_or_default();
    base.split('.').next().unwrap_or(base)
}

/// Digits in the random artifact identifier.
const ID_DIGITS: usize = 5;

/// Attempts before giving up on a core/extension pair. The id space holds
/// 30240 permutations, so hitting this bound means the directory is
/// effectively saturated for that name.
const MAX_ATTEMPTS: usize = 100_000;

/// Generates collision-free artifact paths of the form
/// `<dir>/<core>.<id><extension>`, where `<id>` is five distinct digits.
///
/// The existence check is read-then-decide without locking; uniqueness is
/// best-effort and assumes a single batch instance owns the directory.
/// Does not create the file.
pub struct ArtifactNamer<R: Rng> {
    rng: R,
}

impl ArtifactNamer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ArtifactNamer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, dir: &Path, core: &str, extension: &str) -> AppResult<PathBuf> {
        let digits: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        for _ in 0..MAX_ATTEMPTS {
            let id: String = digits
                .choose_multiple(&mut self.rng, ID_DIGITS)
                .map(|d| d.to_string())
                .collect();
            let candidate = dir.join(format!("{core}.{id}{extension}"));
            if !candidate.exists() {
                return Ok(candidate);
            }
        }
        Err(AppError::NamingExhausted {
            core: core.to_string(),
            attempts: MAX_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn seeded() -> ArtifactNamer<StdRng> {
        ArtifactNamer::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn core_name_stops_at_first_dot() {
        assert_eq!(core_name(Path::new("data/nfa/web.36541.r0.1.fa")), "web");
        assert_eq!(core_name(Path::new("plain")), "plain");
        assert_eq!(core_name(Path::new("dir.with.dots/backdoor.fa")), "backdoor");
    }

    #[test]
    fn name_has_five_distinct_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = seeded().generate(dir.path(), "web", ".r0.1.fa").unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("web."));
        assert!(name.ends_with(".r0.1.fa"));

        let id = &name["web.".len().."web.".len() + ID_DIGITS];
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        let mut seen: Vec<char> = id.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ID_DIGITS, "digits must not repeat: {id}");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let a = seeded().generate(dir.path(), "core", ".fa").unwrap();
        let b = seeded().generate(dir.path(), "core", ".fa").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn exhausted_id_space_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        // occupy every 5-permutation of the digits 0-9
        for a in 0..10u8 {
            for b in (0..10u8).filter(|&b| b != a) {
                for c in (0..10u8).filter(|&c| c != a && c != b) {
                    for d in (0..10u8).filter(|&d| d != a && d != b && d != c) {
                        for e in (0..10u8).filter(|&e| ![a, b, c, d].contains(&e)) {
                            let name = format!("web.{a}{b}{c}{d}{e}.fa");
                            fs::write(dir.path().join(name), b"").unwrap();
                        }
                    }
                }
            }
        }

        let err = seeded().generate(dir.path(), "web", ".fa").unwrap_err();
        match err {
            AppError::NamingExhausted { core, attempts } => {
                assert_eq!(core, "web");
                assert_eq!(attempts, MAX_ATTEMPTS);
            }
            other => panic!("unexpected error: {other}"),
        }

        // a different core name in the same directory is unaffected
        assert!(seeded().generate(dir.path(), "mail", ".fa").is_ok());
    }

    #[test]
    fn existing_path_is_never_returned() {
        let dir = tempfile::tempdir().unwrap();
        let mut namer = seeded();

        let first = namer.generate(dir.path(), "core", ".fa").unwrap();
        fs::write(&first, b"").unwrap();

        // Same seed state would produce the same id next; occupying the
        // path must force a retry onto a different one.
        let mut again = seeded();
        let second = again.generate(dir.path(), "core", ".fa").unwrap();
        assert_ne!(first, second);
        assert!(!second.exists());
    }
}
