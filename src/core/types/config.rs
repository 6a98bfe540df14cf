use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::AppResult;

pub const CONFIG_FILENAME: &str = "rebat.toml";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }
}

/// Effective tool configuration. Fields are optional in the file; the
/// accessors supply the directory layout the experiments have always used.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Directory where reduced automata are written
    pub reduced_dir: Option<PathBuf>,
    /// Directory holding the unreduced reference automata
    pub reference_dir: Option<PathBuf>,
    /// External reduction / error-measurement handler (a path, or a bare
    /// file name to search for under the working directory)
    pub handler: Option<PathBuf>,

    pub log: Option<LogConfig>,
}

impl Config {
    pub fn reduced_dir(&self) -> &Path {
        self.reduced_dir.as_deref().unwrap_or(Path::new("data/nfa"))
    }

    pub fn reference_dir(&self) -> &Path {
        self.reference_dir
            .as_deref()
            .unwrap_or(Path::new("min-snort"))
    }

    pub fn handler(&self) -> &Path {
        self.handler.as_deref().unwrap_or(Path::new("nfa_handler"))
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn colors_enabled(&self) -> bool {
        match self.log().color() {
            Some(force) => force,
            None => console::colors_enabled(),
        }
    }
}

/// CLI flags that override file-level configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

/// Build the effective configuration: nearest config file first, then CLI
/// overrides on top. Returns defaults when no file exists.
pub fn load(overrides: &CliOverrides) -> AppResult<Config> {
    let mut cfg = Config::default();

    let file = match &overrides.config_path {
        Some(explicit) => Some(explicit.clone()),
        None => find_nearest_config_file(),
    };
    if let Some(path) = file {
        let contents = fs::read_to_string(&path)?;
        let file_cfg: Config = toml::from_str(&contents)?;
        apply_file_config(&mut cfg, &file_cfg);
    }

    apply_cli_overrides(&mut cfg, overrides);
    Ok(cfg)
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if file.reduced_dir.is_some() {
        cfg.reduced_dir = file.reduced_dir.clone();
    }
    if file.reference_dir.is_some() {
        cfg.reference_dir = file.reference_dir.clone();
    }
    if file.handler.is_some() {
        cfg.handler = file.handler.clone();
    }
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level {
        if !level.trim().is_empty() {
            log.level = Some(level.trim().to_string());
        }
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}
