//! Platform logging initialization for the sailboat binary.
//!
//! The terminal belongs to the UI, so log records only go to a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Installs a file logger at `log_file`; `LevelFilter::Off` installs nothing.
///
/// Must run before the terminal session starts, since a failure to create the
/// file is reported on stderr.
pub fn initialize(log_file: &Path, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    match File::create(log_file) {
        Ok(file) => {
            let _ = WriteLogger::init(level, build_config(), file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_file, err
            );
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
