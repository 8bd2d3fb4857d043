//! Logging setup plus helpers that keep user names and rendered markup on a single log line.

use std::io::Write;

use crate::config::LoggingConfig;

/// Longest preview of a value written into a log record.
pub const MAX_LOG_PREVIEW: usize = 300;

/// Escape a string for single-line logging.
///
/// Newlines, carriage returns, tabs and backslashes become their escape sequences,
/// other control characters are written as `\xNN`. Values longer than
/// [`MAX_LOG_PREVIEW`] characters end with an ellipsis.
pub fn escape_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len().min(MAX_LOG_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_LOG_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Map a config level string to a filter; unknown strings fall back to `Info`.
pub fn parse_level(level: &str) -> log::LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" | "warning" => log::LevelFilter::Warn,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

/// Effective level: `-v` is debug and `-vv` (or more) is trace. Without `-v` the
/// configured level applies, defaulting to `Info`.
pub fn select_level(config: Option<&LoggingConfig>, verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => config
            .map(|c| parse_level(&c.level))
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Open a log file for appending. On failure a warning goes to stderr and `None`
/// is returned so logging stays on the console.
pub fn open_log_file(path: &str) -> Option<std::fs::File> {
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(f) => Some(f),
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {}; logging to console only",
                path, e
            );
            None
        }
    }
}

/// Initialize `env_logger`.
///
/// CLI verbosity (`-v`, `-vv`) overrides the configured level. When a log file is
/// configured, lines are appended there and echoed to the console only if stdout is a TTY.
pub fn init_logging(config: Option<&LoggingConfig>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(select_level(config, verbosity));

    let log_file = config
        .and_then(|c| c.file.as_deref())
        .and_then(open_log_file);

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }

    // Tests and embedding hosts may have installed a logger already
    let _ = builder.try_init();
}
