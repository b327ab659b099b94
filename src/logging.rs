use std::{
    fs::{create_dir_all, File},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::Local;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

/// Send `log` output of this run to `<log_dir>/<name>_<timestamp>.log`.
pub fn init_logging(log_dir: &Path, name: &str) -> Result<PathBuf> {
    create_dir_all(log_dir).with_context(|| format!("Creating {}", log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("{name}_{ts}.log"));

    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path).with_context(|| format!("Creating {}", log_path.display()))?,
    )?;
    Ok(log_path)
}
