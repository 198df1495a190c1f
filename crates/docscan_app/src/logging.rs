//! Logger initialization for the docscan binary.
//!
//! Logs go to the terminal and to a timestamped file under `./logs/`.

use std::fs::{self, File};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_DIR: &str = "logs";

/// Initialize the combined terminal + file logger.
///
/// A file logger that cannot be created is reported on stderr and dropped;
/// the terminal logger keeps working.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(file_logger) = create_file_logger(level, config) {
        loggers.push(file_logger);
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let dir = PathBuf::from(LOG_DIR);
    if let Err(err) = fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, err);
        return None;
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let log_path = dir.join(format!("docscan_{timestamp}.log"));
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
