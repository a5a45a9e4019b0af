//! Logging setup for the analyzer binary.

use std::io;

use tracing::{Level, Subscriber};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging at the given level for this crate.
///
/// `RUST_LOG` directives are honoured on top of it. Output goes to stderr so
/// it never mixes with the menus on stdout.
pub fn init_logging(level: Level) -> Result<(), String> {
    let filter = EnvFilter::from_default_env().add_directive(
        format!("recursive_sequence_analyzer={}", level)
            .parse()
            .map_err(|e: tracing_subscriber::filter::ParseError| e.to_string())?,
    );

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();

    init_subscriber(subscriber)
}

/// Install an already-built subscriber as the process-wide default.
///
/// [`init_logging`] funnels through here; embedders that drive [`Shell`](crate::Shell)
/// from their own program can pass a subscriber writing wherever they log.
pub fn init_subscriber<S>(subscriber: S) -> Result<(), String>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set global default subscriber: {}", e))
}

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(name: &str) -> Result<Level, String> {
    name.parse::<Level>()
        .map_err(|_| format!("Unknown log level: {}", name))
}
