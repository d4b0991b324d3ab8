//! Rules

// Modules
mod rule;

// Exports
pub use rule::Rule;

// Imports
use {
	crate::error::AppError,
	std::collections::{BTreeMap, HashMap},
};

/// Environment.
///
/// Stores all resolved rules, along with the macro table and the
/// default target. Rules are keyed by target, so targets are unique
/// and iteration order is deterministic.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Environment {
	/// Macros
	pub macros: HashMap<String, String>,

	/// Rules, keyed by target
	pub rules: BTreeMap<String, Rule>,

	/// Target of the first rule in source order
	pub head: String,
}

impl Environment {
	/// Returns the rule for `target`
	pub fn get(&self, target: &str) -> Result<&Rule, AppError> {
		self.rules.get(target).ok_or_else(|| AppError::UnknownTarget {
			target: target.to_owned(),
		})
	}

	/// Returns whether `name` is a leaf, a name no rule builds.
	///
	/// Leaves refer to external inputs, such as source files.
	#[must_use]
	pub fn is_leaf(&self, name: &str) -> bool {
		!self.rules.contains_key(name)
	}
}
