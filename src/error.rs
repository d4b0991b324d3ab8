//! Errors

// Imports
use {
	crate::lexer::TokenKind,
	itertools::Itertools,
	std::{io, path::PathBuf},
};

/// App error
///
/// Error that will be bubbled up to main when a fatal error occurs
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	/// Read file
	#[error("Unable to read file {file_path:?}")]
	ReadFile {
		/// File we failed to read
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Read file metadata
	#[error("Unable to read file metadata {file_path:?}")]
	ReadFileMetadata {
		/// File we failed to read metadata of
		file_path: PathBuf,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Spawn command
	#[error("Unable to spawn {cmd:?}")]
	SpawnCommand {
		/// Command we failed to spawn
		cmd: String,

		/// Underlying error
		#[source]
		err: io::Error,
	},

	/// Command failed
	#[error("could not run command: {cmd} (exit code {code})")]
	CommandFailed {
		/// Command that failed
		cmd: String,

		/// Exit code, `-1` if killed by a signal
		code: i32,
	},

	/// Lexer found the wrong character after a multi-character prefix
	#[error("expected: {expected:?}; got: {actual:?}")]
	UnexpectedCharacter {
		/// Character we expected
		expected: char,

		/// Character we found
		actual: char,
	},

	/// Input ended mid-token
	#[error("unexpected <EOF>")]
	UnexpectedEof,

	/// Parser expected a specific token
	#[error("expected: {expected}; got: {actual}")]
	UnexpectedTokenType {
		/// Token kind we expected
		expected: TokenKind,

		/// Token kind we found
		actual: TokenKind,
	},

	/// Parser expected one of several tokens
	#[error("expected one of: {{{}}}; got: {actual}", .expected.iter().join(", "))]
	TokenNotInExpectedSet {
		/// Token kinds we expected
		expected: Vec<TokenKind>,

		/// Token kind we found
		actual: TokenKind,
	},

	/// Definition with a non-bareword left-hand side
	#[error("expected lvalue but got macro at: {name}")]
	ExpectedLValue {
		/// The offending left-hand side
		name: String,
	},

	/// Macro reference without a definition
	#[error("undefined variable: {var}")]
	UndefinedVariable {
		/// Variable name
		var: String,
	},

	/// No rule with the requested target
	#[error("no rule to make target `{target}'")]
	UnknownTarget {
		/// Target name
		target: String,
	},

	/// Fill without a matching generic rule
	#[error("no generic rule to make [{target}] from [{prereq}]")]
	UndefinedGenericRule {
		/// The fill's target
		target: String,

		/// The fill's prerequisite
		prereq: String,
	},

	/// `$@` or `$<` outside an action body
	#[error("built-in macros `$@' and `$<' are only valid inside an action")]
	BuiltInMacrosRequireActionScope,

	/// Resolution produced an empty rule set
	#[error("no rules to run")]
	NoRulesToRun,

	/// Fill name without an extension
	#[error("fill `{name}' has no `.ext' suffix")]
	UnexpectedFill {
		/// The fill's name
		name: String,
	},
}

/// Error shortcuts
///
/// These are functions that return functions to pass to `.map_err` to
/// specify a certain error.
impl AppError {
	pub fn read_file(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::ReadFile {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn read_file_metadata(file_path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::ReadFileMetadata {
			file_path: file_path.into(),
			err,
		}
	}

	pub fn spawn_command(cmd: impl Into<String>) -> impl FnOnce(io::Error) -> Self {
		move |err| Self::SpawnCommand { cmd: cmd.into(), err }
	}
}
