//! `Fab` build system

// Modules
pub mod args;
pub mod ast;
pub mod build;
pub mod error;
pub mod exec;
pub mod lexer;
pub mod logger;
pub mod parser;
pub mod resolve;
pub mod rules;

// Exports
pub use self::{args::Args, error::AppError};

// Imports
use {
	self::{build::Builder, exec::OsExecutor},
	std::fs,
};

/// Runs the build described by `args`.
///
/// Reads and resolves the fabfile, then brings the requested target up
/// to date. With no target given, the first rule in the fabfile is
/// built.
pub fn run(args: Args) -> Result<(), AppError> {
	// Parse the fabfile
	let source = fs::read_to_string(&args.fabfile).map_err(AppError::read_file(&args.fabfile))?;
	let tokens = lexer::lex(&source)?;
	tracing::trace!(?tokens, "Lexed fabfile");
	let ast = parser::parse(tokens)?;
	tracing::trace!(?ast, "Parsed fabfile");
	let env = resolve::resolve(&ast)?;
	tracing::trace!(?env, "Resolved environment");

	// Then bring the requested target up to date
	let target = args.target.as_deref().unwrap_or(&env.head);
	tracing::debug!(%target, "Building target");
	Builder::new(&env, OsExecutor).build(target)
}
