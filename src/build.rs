//! Build

// Imports
use {
	crate::{
		error::AppError,
		exec::Executor,
		rules::{Environment, Rule},
	},
	std::{collections::HashSet, time::SystemTime},
};

/// Builder.
///
/// Walks a target's prerequisites in post-order and runs the actions
/// of every rule whose target is out of date.
#[derive(Debug)]
pub struct Builder<'env, E> {
	/// Environment to build from
	env: &'env Environment,

	/// Executor answering filesystem queries and running commands
	exec: E,

	/// Targets already brought up to date during this walk
	visited: HashSet<&'env str>,
}

impl<'env, E: Executor> Builder<'env, E> {
	/// Creates a new builder
	pub fn new(env: &'env Environment, exec: E) -> Self {
		Self {
			env,
			exec,
			visited: HashSet::new(),
		}
	}

	/// Brings `target` up to date.
	///
	/// Every prerequisite with a rule is evaluated before its dependent;
	/// prerequisites without one are leaves and taken as-is.
	pub fn build(&mut self, target: &str) -> Result<(), AppError> {
		let env = self.env;
		let mut stack = vec![env.get(target)?];

		while let Some(&top) = stack.last() {
			if self.visited.contains(top.target.as_str()) {
				stack.pop();
				continue;
			}

			let unresolved = top
				.prereqs
				.iter()
				.filter(|prereq| !self.visited.contains(prereq.as_str()) && !env.is_leaf(prereq))
				.collect::<Vec<_>>();

			match unresolved.is_empty() {
				true => {
					self.eval(top)?;
					self.visited.insert(top.target.as_str());
					stack.pop();
				},

				// Push in reverse so the first prerequisite ends up on top
				false =>
					for prereq in unresolved.into_iter().rev() {
						stack.push(env.get(prereq)?);
					},
			}
		}

		Ok(())
	}

	/// Runs `rule`'s actions if its target is out of date
	fn eval(&mut self, rule: &Rule) -> Result<(), AppError> {
		// Dependency hubs have no work of their own
		if rule.is_phony() {
			tracing::debug!(target = %rule.target, "Phony rule, nothing to run");
			return Ok(());
		}

		// A missing target is always out of date
		if !self.exec.exists(&rule.target)? {
			tracing::debug!(target = %rule.target, "Target is missing, rebuilding");
			return self.run_all(rule);
		}

		// An existing target without prerequisites is always up to date
		if rule.prereqs.is_empty() {
			tracing::debug!(target = %rule.target, "Target exists and has no prerequisites");
			return Ok(());
		}

		// Otherwise rebuild if any prerequisite is newer than the target.
		// Missing prerequisites count as arbitrarily old, so they never
		// force a rebuild by themselves.
		let newest = rule
			.prereqs
			.iter()
			.map(|prereq| self.exec.mtime(prereq))
			.collect::<Result<Vec<_>, _>>()?
			.into_iter()
			.max()
			.unwrap_or(SystemTime::UNIX_EPOCH);

		match self.exec.mtime(&rule.target)? < newest {
			true => {
				tracing::debug!(target = %rule.target, "Target is older than its prerequisites, rebuilding");
				self.run_all(rule)
			},
			false => {
				tracing::debug!(target = %rule.target, "Target is up to date");
				Ok(())
			},
		}
	}

	/// Runs all of `rule`'s actions in order.
	///
	/// Each command is echoed to stderr before it runs; the first
	/// failure aborts the build.
	fn run_all(&mut self, rule: &Rule) -> Result<(), AppError> {
		for cmd in &rule.actions {
			eprintln!("{cmd}");
			self.exec.run(cmd)?;
		}

		Ok(())
	}
}
