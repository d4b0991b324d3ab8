//! Cli manager

// Imports
use std::path::PathBuf;

/// Data from the command line
#[derive(PartialEq, Eq, Clone, Debug)]
#[derive(clap::Parser)]
#[clap(author, version, about)]
pub struct Args {
	/// Target to build.
	///
	/// If omitted, builds the first rule in the fabfile.
	pub target: Option<String>,

	/// Path of the fabfile to read
	#[clap(long = "file", short = 'f', default_value = "Fabfile")]
	pub fabfile: PathBuf,
}
