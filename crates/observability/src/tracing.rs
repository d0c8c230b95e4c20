//! Tracing subscriber initialization.
//!
//! Logs go to stderr so stdout stays free for the receipt JSON.

use tracing_subscriber::EnvFilter;

/// Selects human-readable output instead of JSON.
pub const LOG_FORMAT_ENV: &str = "POSDELIVERY_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `pretty` (any case) selects [`LogFormat::Pretty`]; anything else is JSON.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG` (default `info`). Safe to call multiple times.
pub fn init() {
    let format = LogFormat::from_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
    init_with(format);
}

pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_defaults_to_json() {
        assert_eq!(LogFormat::from_value(None), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("text")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some(" Pretty ")), LogFormat::Pretty);
    }

    #[test]
    fn init_is_idempotent() {
        init_with(LogFormat::Pretty);
        init_with(LogFormat::Json);
    }
}
