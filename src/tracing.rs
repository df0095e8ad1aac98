//! Log output for the search harness.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    /// One JSON object per line, for piping into log collectors.
    Json,
}

/// Install the global subscriber once; later calls are ignored.
///
/// The default level is INFO, DEBUG with `verbose` or under a test runner.
/// `RUST_LOG` directives are applied on top.
pub fn init(verbose: bool, format: LogFormat) {
    INIT.call_once(|| {
        let under_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let level = if verbose || under_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true);

        let installed = match (format, under_test) {
            (_, true) => builder.compact().with_test_writer().try_init(),
            (LogFormat::Compact, false) => {
                builder.compact().with_writer(std::io::stderr).try_init()
            }
            (LogFormat::Json, false) => builder.json().with_writer(std::io::stderr).try_init(),
        };

        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
