//! Utilities for all integration tests

// Lints
#![allow(
	dead_code,
	reason = "This module is used from many tests, which might not use everything"
)]

// Imports
use {
	anyhow::Context,
	fab::{error::AppError, exec::Executor, lexer, parser, resolve, rules::Environment, Args},
	std::{
		collections::HashMap,
		fs,
		path::Path,
		time::{Duration, SystemTime},
	},
	tempdir::TempDir,
};

/// Runs fab against the fabfile in `dir`
pub fn run_fab(dir: &Path, target: Option<&str>) -> Result<(), anyhow::Error> {
	let args = Args {
		target:  target.map(str::to_owned),
		fabfile: dir.join("Fabfile"),
	};
	fab::run(args).context("Unable to run fab")
}

/// Creates a directory with a fabfile, builds `target` in it, and returns the directory.
///
/// The fabfile is built from the directory's path, so rules can name
/// their files with absolute paths and runs stay parallel-safe.
pub fn with_fabfile<F>(make_fabfile: F, target: Option<&str>) -> Result<TempDir, anyhow::Error>
where
	F: FnOnce(&Path) -> String,
{
	let temp_dir = TempDir::new("fab").context("Unable to create temporary directory")?;
	let fabfile = make_fabfile(temp_dir.path());
	fs::write(temp_dir.path().join("Fabfile"), fabfile).context("Unable to write fabfile")?;

	self::run_fab(temp_dir.path(), target)?;
	Ok(temp_dir)
}

/// Lexes, parses and resolves `src` into an environment
pub fn environment(src: &str) -> Result<Environment, AppError> {
	let ast = parser::parse(lexer::lex(src)?)?;
	resolve::resolve(&ast)
}

/// Executor against a prescribed filesystem, recording every command
#[derive(Clone, Default, Debug)]
pub struct FakeExecutor {
	/// Modification time of each existing file, as seconds past the epoch
	pub files: HashMap<String, u64>,

	/// Commands run so far, in order
	pub cmds: Vec<String>,

	/// Command to fail on, if any
	pub fail_on: Option<String>,
}

impl FakeExecutor {
	/// Creates an executor over the given `path -> mtime` table
	pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, u64)>) -> Self {
		Self {
			files: files
				.into_iter()
				.map(|(path, mtime)| (path.to_owned(), mtime))
				.collect(),
			..Self::default()
		}
	}

	/// Makes `cmd` fail when run
	pub fn fail_on(mut self, cmd: &str) -> Self {
		self.fail_on = Some(cmd.to_owned());
		self
	}
}

impl Executor for FakeExecutor {
	fn exists(&self, path: &str) -> Result<bool, AppError> {
		Ok(self.files.contains_key(path))
	}

	fn mtime(&self, path: &str) -> Result<SystemTime, AppError> {
		let mtime = self
			.files
			.get(path)
			.map_or(SystemTime::UNIX_EPOCH, |&secs| {
				SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
			});
		Ok(mtime)
	}

	fn run(&mut self, cmd: &str) -> Result<(), AppError> {
		if self.fail_on.as_deref() == Some(cmd) {
			return Err(AppError::CommandFailed {
				cmd:  cmd.to_owned(),
				code: 1,
			});
		}

		self.cmds.push(cmd.to_owned());
		Ok(())
	}
}
