//! Logging utilities for the deployment commands

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Progress lines, always shown
    Normal = 0,
    /// Per-object lines, one verbose flag (-v)
    Info = 1,
    /// Client and command details, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for deployment progress
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    /// Current verbosity level
    verbosity: u8,
}

impl Logger {
    /// Create a new logger with the specified verbosity
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity level is at least the specified level
    pub fn log(&self, msg: &str, level: LogLevel) {
        if self.enabled(level) {
            match level {
                LogLevel::Normal => println!("{msg}"),
                LogLevel::Info => println!("info: {msg}"),
                LogLevel::Debug => println!("dbg: {msg}"),
            }
        }
    }

    /// Whether messages at `level` would be printed
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.verbosity >= level as u8
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }

    /// Warnings go to stderr regardless of verbosity
    pub fn warn(&self, msg: &str) {
        eprintln!("warn: {msg}");
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(0)
    }
}
