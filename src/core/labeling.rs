use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::distribution::FrequencyMap;
use crate::types::{AppError, AppResult};

/// Turn packet frequencies into per-state significance labels: frequency
/// divided by the total processed-sample count, one `<state>:<significance>`
/// line per state in map order. The count is read from the first line of
/// `sample_count_file`.
pub fn export(freq: &FrequencyMap, output: &Path, sample_count_file: &Path) -> AppResult<()> {
    let sample_count = read_sample_count(sample_count_file)?;
    if sample_count == 0 {
        return Err(AppError::ZeroSampleCount(sample_count_file.to_path_buf()));
    }

    let mut buf = String::new();
    for (state, frequency) in freq.iter() {
        let significance = *frequency as f64 / sample_count as f64;
        // keep the decimal point on whole numbers (1.0, not 1), the form
        // the downstream reduction tool has always been fed
        let _ = writeln!(buf, "{state}:{significance:?}");
    }
    fs::write(output, buf)?;
    Ok(())
}

fn read_sample_count(path: &Path) -> AppResult<u64> {
    let contents = fs::read_to_string(path)?;
    let first = contents.lines().next().unwrap_or("").trim();
    first.parse::<u64>().map_err(|e| AppError::MetricParse {
        file: path.to_path_buf(),
        line: 1,
        reason: format!("'{first}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_is_normalized_by_sample_count() {
        let dir = tempfile::tempdir().unwrap();
        let counts = dir.path().join("train.txt");
        let labels = dir.path().join("labels.txt");
        fs::write(&counts, "100\nrest of the file is ignored\n").unwrap();

        let freq: FrequencyMap = [(10, 50)].into_iter().collect();
        export(&freq, &labels, &counts).unwrap();

        assert_eq!(fs::read_to_string(&labels).unwrap(), "10:0.5\n");
    }

    #[test]
    fn lines_follow_map_order() {
        let dir = tempfile::tempdir().unwrap();
        let counts = dir.path().join("train.txt");
        let labels = dir.path().join("labels.txt");
        fs::write(&counts, "4").unwrap();

        let freq: FrequencyMap = [(2, 1), (0, 2), (7, 4)].into_iter().collect();
        export(&freq, &labels, &counts).unwrap();

        assert_eq!(
            fs::read_to_string(&labels).unwrap(),
            "2:0.25\n0:0.5\n7:1.0\n"
        );
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let counts = dir.path().join("train.txt");
        fs::write(&counts, "0\n").unwrap();

        let freq: FrequencyMap = [(1, 1)].into_iter().collect();
        let err = export(&freq, &dir.path().join("labels.txt"), &counts).unwrap_err();
        assert!(matches!(err, AppError::ZeroSampleCount(_)));
    }
}
