//! Ast
//!
//! Everything the parser emits, before macro resolution. All strings
//! borrow from the source buffer.

// Imports
use crate::error::AppError;

/// Value yet to be resolved against the macro table
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Value<'s> {
	/// Literal word
	RValue(&'s str),

	/// Macro reference
	LValue(&'s str),

	/// The enclosing rule's target, `$@`
	TargetAlias,

	/// The enclosing rule's prerequisites, `$<`
	PrereqAlias,
}

/// Rule before resolution
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RuleIr<'s> {
	/// Target
	pub target: Value<'s>,

	/// Prerequisites
	pub prereqs: Vec<Value<'s>>,

	/// Actions, one value list per command
	pub actions: Vec<Vec<Value<'s>>>,
}

/// Macro definition before resolution
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Association<'s> {
	/// Macro name
	pub name: &'s str,

	/// Values
	pub values: Vec<Value<'s>>,
}

impl<'s> Association<'s> {
	/// Returns whether the definition consists of literal words only
	#[must_use]
	pub fn is_literal(&self) -> bool {
		self.values.iter().all(|value| matches!(value, Value::RValue(_)))
	}

	/// Returns the definition's value if it consists of literal words only
	pub fn literal_value(&self) -> Option<String> {
		self.values
			.iter()
			.map(|value| match value {
				Value::RValue(iden) => Some(*iden),
				_ => None,
			})
			.collect::<Option<Vec<_>>>()
			.map(|idens| idens.join(" "))
	}
}

/// Rule template over file extensions, `[*.ext] <- [*.ext] { ... }`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct GenericRule<'s> {
	/// Target extension
	pub target_ext: &'s str,

	/// Prerequisite extension
	pub prereq_ext: Option<&'s str>,

	/// Actions
	pub actions: Vec<Vec<Value<'s>>>,
}

/// Instantiation of a generic rule, `[name.ext] <- [name.ext];`
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Fill<'s> {
	/// Target
	pub target: &'s str,

	/// Target extension
	pub target_ext: &'s str,

	/// Prerequisite
	pub prereq: Option<&'s str>,

	/// Prerequisite extension
	pub prereq_ext: Option<&'s str>,
}

/// Parsed program
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Ast<'s> {
	/// Rules
	pub rules: Vec<RuleIr<'s>>,

	/// Macro definitions
	pub associations: Vec<Association<'s>>,
}

/// Returns the extension of a fill name.
///
/// The extension is the part after the last `.`; both it and the part
/// before it must be non-empty.
pub fn fill_ext(name: &str) -> Result<&str, AppError> {
	match name.rsplit_once('.') {
		Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Ok(ext),
		_ => Err(AppError::UnexpectedFill { name: name.to_owned() }),
	}
}
