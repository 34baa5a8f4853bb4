//! File logging
//!
//! The terminal belongs to the UI, so log records only go to a file in the
//! config directory.

use crate::config::Config;
use anyhow::Result;
use std::fs::OpenOptions;

const LOG_FILE: &str = "translator.log";

/// Install the global logger.
///
/// Everything is dispatched; the effective level is narrowed afterwards with
/// [`set_level`] once the config has been read.
pub fn init() -> Result<()> {
    let dir = Config::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    std::fs::create_dir_all(&dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Trace)
        .level_for("reqwest", log::LevelFilter::Info)
        .level_for("hyper_util", log::LevelFilter::Info)
        .level_for("rustls", log::LevelFilter::Warn)
        .chain(log_file)
        .apply()?;

    Ok(())
}

pub fn set_level(level: log::LevelFilter) {
    log::set_max_level(level);
}
