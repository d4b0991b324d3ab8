//! `Fab` build system

// Imports
use {
	clap::Parser,
	fab::Args,
	std::{env, process},
};

fn main() {
	// Get all args
	let args = Args::parse();

	// Initialize the logger
	fab::logger::init();
	tracing::trace!(?args, "Arguments");

	if let Err(err) = fab::run(args) {
		let program = env::args().next().unwrap_or_else(|| "fab".to_owned());
		eprintln!("{program}: error: {err}");
		process::exit(1);
	}
}
