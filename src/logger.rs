//! Logger

// Imports
use {
	std::io,
	tracing::metadata::LevelFilter,
	tracing_subscriber::{prelude::*, EnvFilter},
};

/// Initializes the logger.
///
/// Diagnostics go to stderr, filtered by `RUST_LOG` and defaulting to
/// warnings only, so they don't mix with echoed commands.
pub fn init() {
	let term_layer = tracing_subscriber::fmt::layer()
		.with_writer(io::stderr)
		.with_filter(
			EnvFilter::builder()
				.with_default_directive(LevelFilter::WARN.into())
				.from_env_lossy(),
		);

	tracing_subscriber::registry().with(term_layer).init();
}
