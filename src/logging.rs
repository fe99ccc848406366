use serde::Deserialize;
use tracing::{Dispatch, Level};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub debug: bool,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn max_level(&self) -> Level {
        if self.debug { Level::DEBUG } else { Level::WARN }
    }
}

/// Diagnostic logger writing to stderr; stdout stays reserved for the plugin line.
///
/// The caller scopes it with `tracing::dispatcher::with_default` instead of
/// installing it process-wide.
pub fn dispatch(settings: &LogSettings) -> Dispatch {
    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(settings.max_level())
        .with_writer(std::io::stderr);

    match settings.format {
        LogFormat::Text => Dispatch::new(builder.finish()),
        LogFormat::Json => Dispatch::new(builder.json().finish()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_verbosity() {
        let quiet = LogSettings::default();
        let verbose = LogSettings {
            debug: true,
            ..LogSettings::default()
        };
        assert_eq!(quiet.max_level(), Level::WARN);
        assert_eq!(verbose.max_level(), Level::DEBUG);
    }

    #[test]
    fn scoped_dispatch_enables_debug_only_when_asked() {
        for debug in [false, true] {
            let settings = LogSettings {
                debug,
                format: LogFormat::Json,
            };
            let enabled = tracing::dispatcher::with_default(&dispatch(&settings), || {
                tracing::enabled!(Level::DEBUG)
            });
            assert_eq!(enabled, debug);
        }
    }
}
