//! Parser and resolver tests

// Modules
mod util;

// Imports
use fab::error::AppError;

#[test]
fn parses_a_rule() -> Result<(), anyhow::Error> {
	let env = util::environment("main <- main.cpp { c++ -o main main.cpp; }")?;

	let rule = env.get("main")?;
	assert_eq!(rule.target, "main");
	assert_eq!(rule.prereqs, ["main.cpp"]);
	assert_eq!(rule.actions, ["c++ -o main main.cpp"]);
	Ok(())
}

#[test]
fn expects_semicolons() {
	let res = util::environment("main <- main.cpp { c++ -o main main.cpp }");
	assert!(matches!(res, Err(AppError::UnexpectedTokenType { .. })));
}

#[test]
fn resolves_pure_definitions() -> Result<(), anyhow::Error> {
	let env = util::environment("CC := cc -Wall ;\nmain { cc; }")?;

	assert_eq!(env.macros["CC"], "cc -Wall");
	Ok(())
}

#[test]
fn resolves_mixed_definitions() -> Result<(), anyhow::Error> {
	let env = util::environment("A := a ; B := $(A) b ;\nmain { $(B); }")?;

	assert_eq!(env.macros["B"], "a b");
	assert_eq!(env.get("main")?.actions, ["a b"]);
	Ok(())
}

#[test]
fn pure_definitions_resolve_before_mixed_ones() -> Result<(), anyhow::Error> {
	// `B` references `A` before it is defined, but literal definitions
	// resolve first regardless of position.
	let env = util::environment("B := $(A) b ; A := a ;\nmain { $(B); }")?;

	assert_eq!(env.macros["B"], "a b");
	Ok(())
}

#[test]
fn mixed_definitions_cannot_see_each_other() {
	let res = util::environment("Z := a ; B := $(Z) ; C := $(B) ;\nmain { x; }");
	assert!(matches!(res, Err(AppError::UndefinedVariable { var }) if var == "B"));
}

#[test]
fn first_definition_wins() -> Result<(), anyhow::Error> {
	let env = util::environment("A := x ; A := y ;\nmain { $(A); }")?;

	assert_eq!(env.macros["A"], "x");
	assert_eq!(env.get("main")?.actions, ["x"]);
	Ok(())
}

#[test]
fn only_knows_defined_variables() {
	let res = util::environment("main <- main.c { $(cmd); }");
	assert!(matches!(res, Err(AppError::UndefinedVariable { var }) if var == "cmd"));
}

#[test]
fn rejects_macro_as_definition_name() {
	let res = util::environment("$(X) := a ;\nmain { x; }");
	assert!(matches!(res, Err(AppError::ExpectedLValue { name }) if name == "X"));
}

#[test]
fn rejects_aliases_in_definitions() {
	let res = util::environment("X := $@ ;\nmain { x; }");
	assert!(matches!(res, Err(AppError::BuiltInMacrosRequireActionScope)));
}

#[test]
fn rejects_aliases_in_prereqs() {
	let res = util::environment("main <- $< { x; }");
	assert!(matches!(res, Err(AppError::BuiltInMacrosRequireActionScope)));
}

#[test]
fn resolves_aliases_in_actions() -> Result<(), anyhow::Error> {
	let env = util::environment("main <- a.c b.c { cc -o $@ $<; }")?;

	assert_eq!(env.get("main")?.actions, ["cc -o main a.c b.c"]);
	Ok(())
}

#[test]
fn actions_contain_no_unexpanded_macros() -> Result<(), anyhow::Error> {
	let env = util::environment(
		"CC := cc ;
		main <- a.c b.c { $(CC) -o $@ $<; $(CC) -strip $@; }",
	)?;

	for rule in env.rules.values() {
		for action in &rule.actions {
			assert!(!action.contains("$("), "unexpanded macro in {action:?}");
			assert!(!action.contains("$@"), "unexpanded alias in {action:?}");
			assert!(!action.contains("$<"), "unexpanded alias in {action:?}");
		}
	}
	Ok(())
}

#[test]
fn parses_multiple_actions() -> Result<(), anyhow::Error> {
	let env = util::environment("main { a; b -c d; }")?;

	assert_eq!(env.get("main")?.actions, ["a", "b -c d"]);
	Ok(())
}

#[test]
fn parses_phony_rules() -> Result<(), anyhow::Error> {
	let env = util::environment("all <- main;\nmain { cc; }")?;

	let all = env.get("all")?;
	assert!(all.is_phony());
	assert_eq!(all.prereqs, ["main"]);
	Ok(())
}

#[test]
fn instantiates_fills_from_generic_rules() -> Result<(), anyhow::Error> {
	let env = util::environment(
		"main <- main.o { cc -o $@ $<; }
		[*.o] <- [*.c] { cc -c $<; }
		[main.o] <- [main.c];",
	)?;

	let rule = env.get("main.o")?;
	assert_eq!(rule.prereqs, ["main.c"]);
	assert_eq!(rule.actions, ["cc -c main.c"]);
	Ok(())
}

#[test]
fn rejects_fills_without_a_generic_rule() {
	let res = util::environment("[main.o] <- [main.c];\nmain { x; }");
	assert!(matches!(res, Err(AppError::UndefinedGenericRule { target, .. }) if target == "main.o"));
}

#[test]
fn rejects_fills_without_an_extension() {
	let res = util::environment("[main] <- [main.c];\nmain { x; }");
	assert!(matches!(res, Err(AppError::UnexpectedFill { name }) if name == "main"));
}

#[test]
fn head_is_the_first_rule() -> Result<(), anyhow::Error> {
	let env = util::environment("b { x; }\na { y; }")?;

	assert_eq!(env.head, "b");
	Ok(())
}

#[test]
fn head_skips_definitions() -> Result<(), anyhow::Error> {
	let env = util::environment("CC := cc ;\nmain <- main.c { $(CC); }\nclean { rm main; }")?;

	assert_eq!(env.head, "main");
	Ok(())
}

#[test]
fn targets_are_unique() -> Result<(), anyhow::Error> {
	// The first rule for a target wins
	let env = util::environment("main { x; }\nmain { y; }")?;

	assert_eq!(env.rules.len(), 1);
	assert_eq!(env.get("main")?.actions, ["x"]);
	Ok(())
}

#[test]
fn rejects_empty_programs() {
	assert!(matches!(util::environment("CC := cc ;"), Err(AppError::NoRulesToRun)));
	assert!(matches!(util::environment(""), Err(AppError::NoRulesToRun)));
}

#[test]
fn rejects_statements_without_a_body() {
	let res = util::environment("main;");
	assert!(matches!(res, Err(AppError::TokenNotInExpectedSet { .. })));
}

#[test]
fn knows_its_leaves() -> Result<(), anyhow::Error> {
	let env = util::environment("main <- main.cpp { c++ -o main main.cpp; }")?;

	assert!(env.is_leaf("main.cpp"));
	assert!(!env.is_leaf("main"));
	Ok(())
}

#[test]
fn unknown_targets_are_errors() -> Result<(), anyhow::Error> {
	let env = util::environment("main { x; }")?;

	assert!(matches!(env.get("nope"), Err(AppError::UnknownTarget { target }) if target == "nope"));
	Ok(())
}
