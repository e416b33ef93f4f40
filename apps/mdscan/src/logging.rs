//! Logger initialization.
//!
//! Logs go to stderr so that stdout stays clean for `--output json`. The
//! level comes from `MDSCAN_LOG` (e.g. `debug`) and defaults to `warn`.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub const LEVEL_ENV: &str = "MDSCAN_LOG";

/// Parse a level name, falling back to `Warn` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the global terminal logger. Safe to call more than once.
pub fn initialize() {
    let level = parse_level(std::env::var(LEVEL_ENV).ok().as_deref());
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Error)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Warn);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" INFO ")), LevelFilter::Info);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Warn);
    }
}
