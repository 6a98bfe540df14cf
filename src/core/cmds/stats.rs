use std::fmt::Write as _;
use std::fs;

use crate::core::cli::StatsArgs;
use crate::core::distribution::{FrequencyMap, aggregate, render_table};
use crate::types::{AppError, AppResult};

use super::write_output;

pub fn execute_stats(args: StatsArgs) -> AppResult<()> {
    let map = FrequencyMap::load(&args.input)?;
    if map.is_empty() {
        return Err(AppError::Configuration(format!(
            "'{}' holds no state metrics",
            args.input.display()
        )));
    }

    let (report, buffer) = aggregate(&map, args.topn);

    let rendered = match args.format.as_str() {
        "json" => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        _ => render_table(&report, &args.metric, args.topn),
    };
    write_output(args.output.as_deref(), &rendered)?;

    if let Some(hist) = &args.hist {
        let mut buf = String::new();
        for value in buffer {
            let _ = writeln!(buf, "{value}");
        }
        fs::write(hist, buf)?;
    }
    Ok(())
}
