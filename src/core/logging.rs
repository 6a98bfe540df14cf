use log::LevelFilter;

use crate::types::config::Config;

fn level_filter(name: &str) -> LevelFilter {
    match name.to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

/// Wire the `log` facade to stderr. Everything the tool reports, including
/// the audit trail of external command lines, goes to the error stream;
/// stdout is reserved for requested report output.
pub fn init_logging(cfg: &Config) {
    let color = cfg.colors_enabled();
    // Double initialization only happens in tests; keep the first logger.
    let _ = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if color {
                let styled = match record.level() {
                    log::Level::Error => console::style(record.level()).red(),
                    log::Level::Warn => console::style(record.level()).yellow(),
                    log::Level::Info => console::style(record.level()).green(),
                    _ => console::style(record.level()).dim(),
                };
                styled.to_string()
            } else {
                record.level().to_string()
            };
            out.finish(format_args!(
                "{} [{level}] {message}",
                chrono::Local::now().format("%H:%M:%S"),
            ))
        })
        .level(level_filter(cfg.log().level()))
        .chain(std::io::stderr())
        .apply();
}
