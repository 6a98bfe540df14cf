use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::types::{AppError, AppResult};

/// State id → metric value (packet frequency, depth, neighbor count).
/// Entries keep the order in which states were first seen, so reports rank
/// count ties deterministically by discovery order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: Vec<(u64, u64)>,
}

impl FrequencyMap {
    /// Re-inserting a state updates its value but keeps its position.
    pub fn insert(&mut self, state: u64, value: u64) {
        match self.entries.iter_mut().find(|(s, _)| *s == state) {
            Some((_, v)) => *v = value,
            None => self.entries.push((state, value)),
        }
    }

    /// Parse a state-metric file: one `<state> <value> [ignored...]` record
    /// per line, `#` starts a comment anywhere on the line.
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut map = FrequencyMap::default();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("");
            let mut fields = line.split_whitespace();
            let (Some(state), Some(value)) = (fields.next(), fields.next()) else {
                if line.trim().is_empty() {
                    continue;
                }
                return Err(AppError::MetricParse {
                    file: path.to_path_buf(),
                    line: idx + 1,
                    reason: "expected `<state> <value>`".to_string(),
                });
            };
            let parse = |field: &str| {
                field.parse::<u64>().map_err(|e| AppError::MetricParse {
                    file: path.to_path_buf(),
                    line: idx + 1,
                    reason: format!("'{field}': {e}"),
                })
            };
            map.insert(parse(state)?, parse(value)?);
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, u64)> {
        self.entries.iter()
    }

    /// Raw metric values in discovery order, the histogram buffer handed to
    /// external binning.
    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }
}

impl FromIterator<(u64, u64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (u64, u64)>>(iter: I) -> Self {
        let mut map = FrequencyMap::default();
        for (state, value) in iter {
            map.insert(state, value);
        }
        map
    }
}

#[derive(Debug, Serialize)]
pub struct RankedRow {
    /// The metric value shared by a group of states
    pub value: u64,
    /// How many states hold that value
    pub states: u64,
    /// Share of all states, rounded to two decimals
    pub pct: f64,
}

/// Top-N view of a metric distribution. The trailing aggregate covers the
/// displayed rows only, so `shown_pct` can be well below 100.
#[derive(Debug, Serialize)]
pub struct RankedReport {
    pub rows: Vec<RankedRow>,
    pub total_states: usize,
    pub shown_states: u64,
    pub shown_pct: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Count how many states share each metric value, rank the value groups by
/// descending state count (ties keep discovery order), and keep the top
/// `top_n`. Also returns the histogram buffer of raw values.
pub fn aggregate(map: &FrequencyMap, top_n: usize) -> (RankedReport, Vec<u64>) {
    let mut groups: Vec<(u64, u64)> = Vec::new();
    for (_, value) in map.iter() {
        match groups.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => groups.push((*value, 1)),
        }
    }
    // stable sort keeps first-seen order within equal counts
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let total_states = map.len();
    let mut rows = Vec::new();
    let mut shown_states = 0;
    let mut shown_pct = 0.0;
    for (value, states) in groups.into_iter().take(top_n) {
        let pct = round2(100.0 * states as f64 / total_states as f64);
        shown_states += states;
        shown_pct += pct;
        rows.push(RankedRow { value, states, pct });
    }

    let report = RankedReport {
        rows,
        total_states,
        shown_states,
        shown_pct: round2(shown_pct),
    };
    (report, map.values())
}

/// Textual rendering in the classic experiment-log layout. Percentages use
/// the shortest representation that keeps a decimal point (`100.0`, not
/// `100`), the form the reports have always carried.
pub fn render_table(report: &RankedReport, metric: &str, top_n: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{metric} count top {top_n}:");
    let _ = writeln!(out, "{metric}\t\tstates\t\tpct%");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for row in &report.rows {
        let _ = writeln!(out, "{}\t\t{}\t\t{:?}", row.value, row.states, row.pct);
    }
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(
        out,
        "\t\t{}\t\t{:?}",
        report.shown_states, report.shown_pct
    );
    out
}
