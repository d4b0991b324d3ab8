//! Executors

// Imports
use {
	crate::error::AppError,
	std::{fs, io, process::Command, time::SystemTime},
};

/// Interface between the build walk and the outside world.
///
/// `mtime` reports missing paths as [`SystemTime::UNIX_EPOCH`], so
/// callers may treat them as arbitrarily old.
pub trait Executor {
	/// Returns whether `path` exists
	fn exists(&self, path: &str) -> Result<bool, AppError>;

	/// Returns the last modification time of `path`
	fn mtime(&self, path: &str) -> Result<SystemTime, AppError>;

	/// Runs `cmd` through the shell
	fn run(&mut self, cmd: &str) -> Result<(), AppError>;
}

impl<E: Executor + ?Sized> Executor for &mut E {
	fn exists(&self, path: &str) -> Result<bool, AppError> {
		(**self).exists(path)
	}

	fn mtime(&self, path: &str) -> Result<SystemTime, AppError> {
		(**self).mtime(path)
	}

	fn run(&mut self, cmd: &str) -> Result<(), AppError> {
		(**self).run(cmd)
	}
}

/// Executor against the local filesystem and `sh`
#[derive(Clone, Copy, Default, Debug)]
pub struct OsExecutor;

impl Executor for OsExecutor {
	fn exists(&self, path: &str) -> Result<bool, AppError> {
		match fs::metadata(path) {
			Ok(_) => Ok(true),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
			Err(err) => Err(AppError::read_file_metadata(path)(err)),
		}
	}

	fn mtime(&self, path: &str) -> Result<SystemTime, AppError> {
		match fs::metadata(path) {
			Ok(metadata) => metadata.modified().map_err(AppError::read_file_metadata(path)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SystemTime::UNIX_EPOCH),
			Err(err) => Err(AppError::read_file_metadata(path)(err)),
		}
	}

	fn run(&mut self, cmd: &str) -> Result<(), AppError> {
		let status = Command::new("sh")
			.arg("-c")
			.arg(cmd)
			.status()
			.map_err(AppError::spawn_command(cmd))?;

		match status.success() {
			true => Ok(()),
			false => Err(AppError::CommandFailed {
				cmd:  cmd.to_owned(),
				code: status.code().unwrap_or(-1),
			}),
		}
	}
}
