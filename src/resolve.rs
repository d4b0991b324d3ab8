//! Resolver
//!
//! Turns the ast into an environment in three passes: literal macro
//! definitions first, then mixed definitions against those, then rules.
//! A name is never redefined; its first definition wins.

// Imports
use {
	crate::{
		ast::{Ast, Value},
		error::AppError,
		rules::{Environment, Rule},
	},
	std::collections::{BTreeMap, HashMap},
};

/// Scope a value is resolved in.
///
/// The built-in `$@` and `$<` macros are only available within a
/// rule's actions.
enum Scope<'r> {
	/// Top level of the fabfile
	File,

	/// Action body of one rule
	Action {
		/// The rule's resolved target
		target: &'r str,

		/// The rule's resolved prerequisites
		prereqs: &'r [String],
	},
}

/// Resolves a single value within `scope`
fn resolve_value(macros: &HashMap<String, String>, scope: &Scope<'_>, value: Value<'_>) -> Result<String, AppError> {
	match value {
		Value::RValue(iden) => Ok(iden.to_owned()),
		Value::LValue(name) => macros
			.get(name)
			.cloned()
			.ok_or_else(|| AppError::UndefinedVariable { var: name.to_owned() }),
		Value::TargetAlias => match scope {
			Scope::Action { target, .. } => Ok((*target).to_owned()),
			Scope::File => Err(AppError::BuiltInMacrosRequireActionScope),
		},
		Value::PrereqAlias => match scope {
			Scope::Action { prereqs, .. } => Ok(prereqs.join(" ")),
			Scope::File => Err(AppError::BuiltInMacrosRequireActionScope),
		},
	}
}

/// Resolves all values of a list and joins them with single spaces
fn resolve_joined(
	macros: &HashMap<String, String>,
	scope: &Scope<'_>,
	values: &[Value<'_>],
) -> Result<String, AppError> {
	let values = values
		.iter()
		.map(|&value| self::resolve_value(macros, scope, value))
		.collect::<Result<Vec<_>, _>>()?;
	Ok(values.join(" "))
}

/// Resolves an ast into an environment
pub fn resolve(ast: &Ast<'_>) -> Result<Environment, AppError> {
	// Definitions made of literal words only are taken as-is. They are
	// visible to every definition resolved afterwards.
	let mut macros = HashMap::new();
	for association in &ast.associations {
		if let Some(value) = association.literal_value() {
			macros.entry(association.name.to_owned()).or_insert(value);
		}
	}

	// The remaining definitions may only reference those, not each other.
	let mut mixed = HashMap::new();
	for association in ast.associations.iter().filter(|association| !association.is_literal()) {
		let value = self::resolve_joined(&macros, &Scope::File, &association.values)?;
		mixed.entry(association.name.to_owned()).or_insert(value);
	}
	for (name, value) in mixed {
		macros.entry(name).or_insert(value);
	}
	tracing::trace!(?macros, "Resolved macros");

	// Finally resolve the rules. Targets and prerequisites resolve at
	// file scope; only the actions see the built-in macros.
	let mut rules = BTreeMap::new();
	let mut head = None;
	for rule_ir in &ast.rules {
		let target = self::resolve_value(&macros, &Scope::File, rule_ir.target)?;
		let prereqs = rule_ir
			.prereqs
			.iter()
			.map(|&prereq| self::resolve_value(&macros, &Scope::File, prereq))
			.collect::<Result<Vec<_>, _>>()?;

		let scope = Scope::Action {
			target:  &target,
			prereqs: &prereqs,
		};
		let actions = rule_ir
			.actions
			.iter()
			.map(|action| self::resolve_joined(&macros, &scope, action))
			.collect::<Result<Vec<_>, _>>()?;

		if head.is_none() {
			head = Some(target.clone());
		}
		rules.entry(target.clone()).or_insert(Rule {
			target,
			prereqs,
			actions,
		});
	}

	let head = head.ok_or(AppError::NoRulesToRun)?;
	Ok(Environment { macros, rules, head })
}
