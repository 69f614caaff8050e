use std::env;
use std::fs::{File, OpenOptions};
use std::io::{stderr, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<TranslationLogger> = OnceCell::new();
static LOG_FILE: OnceCell<Option<File>> = OnceCell::new();

const LOG_LEVEL_ENV: &str = "DOCKER2RUN_LOG_LEVEL";

/// Installs the process-wide logger. Diagnostics go to `log_file` when given,
/// to stderr otherwise; the level comes from `DOCKER2RUN_LOG_LEVEL` and
/// defaults to warnings.
pub fn init(log_file: Option<PathBuf>) -> Result<()> {
    let level_filter = env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(LevelFilter::Warn);

    LOG_FILE.get_or_try_init(|| -> Result<Option<File>> {
        log_file
            .as_ref()
            .map(|path| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("failed to open log file {:?}", path))
            })
            .transpose()
    })?;

    let logger = LOGGER.get_or_init(|| TranslationLogger {
        level: level_filter.to_level(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level_filter);
    }

    Ok(())
}

struct TranslationLogger {
    level: Option<log::Level>,
}

impl Log for TranslationLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.level {
            Some(level) => metadata.level() <= level,
            None => false,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format!(
            "[{} {}] {}",
            record.level(),
            chrono::Local::now().to_rfc3339(),
            record.args()
        );
        match LOG_FILE.get().and_then(|f| f.as_ref()) {
            Some(mut file) => {
                let _ = writeln!(file, "{}", message);
            }
            None => {
                let _ = writeln!(stderr(), "{}", message);
            }
        }
    }

    fn flush(&self) {
        if let Some(mut file) = LOG_FILE.get().and_then(|f| f.as_ref()) {
            let _ = file.flush();
        } else {
            let _ = stderr().flush();
        }
    }
}
