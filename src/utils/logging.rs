// Wed Aug 26 2026 - Alex

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct LoggingUtils;

impl LoggingUtils {
    pub fn init_logger(level: LevelFilter) {
        let logger = Box::new(ColoredLogger::new(level));
        log::set_boxed_logger(logger).ok();
        log::set_max_level(level);
    }

    pub fn level_from_verbosity(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

struct ColoredLogger {
    level: LevelFilter,
}

impl ColoredLogger {
    fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    fn format_level(&self, level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                format!("[{}]", record.target())
            } else {
                String::new()
            };

            eprintln!(
                "{} {} {}",
                self.format_level(record.level()),
                target.dimmed(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(verbose: bool) {
    LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(verbose));
}

pub fn init_from_env() {
    env_logger::init();
}
