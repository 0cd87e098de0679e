// src/log.rs
//
// Short logging macros used across the crate. They forward to the `log`
// facade; the binaries decide where lines end up by calling `init`.

use log::LevelFilter;

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::log::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

/// Map a level name to a filter. Unknown names fall back to `info`.
pub fn level_from_str(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Install `env_logger` at `level`. `RUST_LOG` directives, when set, are
/// applied on top. Calling this twice is harmless.
pub fn init(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_from_str(level))
        .format_timestamp_millis();

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        logd!("Log: initialized at level {}", level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_map_to_filters() {
        assert_eq!(level_from_str("ERROR"), LevelFilter::Error);
        assert_eq!(level_from_str(" debug "), LevelFilter::Debug);
        assert_eq!(level_from_str("warning"), LevelFilter::Warn);
        assert_eq!(level_from_str("chatty"), LevelFilter::Info);
    }
}
