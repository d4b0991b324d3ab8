//! Rule

/// Rule
///
/// Fully resolved: no macro references or built-in aliases remain in
/// any field.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Rule {
	/// Target
	pub target: String,

	/// Prerequisites
	pub prereqs: Vec<String>,

	/// Commands to run when the target is out of date
	pub actions: Vec<String>,
}

impl Rule {
	/// Returns whether this rule is a dependency hub without commands
	#[must_use]
	pub fn is_phony(&self) -> bool {
		self.actions.is_empty()
	}
}
