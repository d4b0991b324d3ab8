//! Parser
//!
//! Predictive recursive descent over the token stream, with a single
//! token of lookahead.

// Imports
use {
	crate::{
		ast::{self, Association, Ast, Fill, GenericRule, RuleIr, Value},
		error::AppError,
		lexer::{Token, TokenKind},
	},
	std::mem,
};

/// Parser state over a token stream
struct Parser<'s> {
	/// Tokens
	tokens: Vec<Token<'s>>,

	/// Offset of the next unread token
	pos: usize,

	/// Parsed rules
	rules: Vec<RuleIr<'s>>,

	/// Parsed macro definitions
	associations: Vec<Association<'s>>,

	/// Parsed generic rules
	generic_rules: Vec<GenericRule<'s>>,

	/// Parsed fills
	fills: Vec<Fill<'s>>,
}

impl<'s> Parser<'s> {
	/// Returns the kind of the next token without consuming it
	fn peek(&self) -> TokenKind {
		self.tokens.get(self.pos).map_or(TokenKind::Eof, |token| token.kind)
	}

	/// Consumes the next token, which must be of kind `expected`
	fn eat(&mut self, expected: TokenKind) -> Result<Token<'s>, AppError> {
		let actual = self.peek();
		match actual == expected {
			true => {
				let token = self.tokens[self.pos];
				self.pos += 1;
				Ok(token)
			},
			false => Err(AppError::UnexpectedTokenType { expected, actual }),
		}
	}

	/// Parses a single value
	fn value(&mut self) -> Result<Value<'s>, AppError> {
		match self.peek() {
			TokenKind::Iden => Ok(Value::RValue(self.eat(TokenKind::Iden)?.lexeme())),
			TokenKind::Macro => Ok(Value::LValue(self.eat(TokenKind::Macro)?.lexeme())),
			TokenKind::TargetAlias => {
				self.eat(TokenKind::TargetAlias)?;
				Ok(Value::TargetAlias)
			},
			TokenKind::PrereqAlias => {
				self.eat(TokenKind::PrereqAlias)?;
				Ok(Value::PrereqAlias)
			},
			actual => Err(AppError::TokenNotInExpectedSet {
				expected: vec![
					TokenKind::Iden,
					TokenKind::Macro,
					TokenKind::TargetAlias,
					TokenKind::PrereqAlias,
				],
				actual,
			}),
		}
	}

	/// Parses a possibly-empty list of values
	fn iden_list(&mut self) -> Result<Vec<Value<'s>>, AppError> {
		let mut values = vec![];
		while matches!(
			self.peek(),
			TokenKind::Iden | TokenKind::Macro | TokenKind::TargetAlias | TokenKind::PrereqAlias
		) {
			values.push(self.value()?);
		}

		Ok(values)
	}

	/// Parses a brace-delimited action block.
	///
	/// Each action is a value list terminated by `;`.
	fn block(&mut self) -> Result<Vec<Vec<Value<'s>>>, AppError> {
		self.eat(TokenKind::LBrace)?;

		let mut actions = vec![];
		while self.peek() != TokenKind::RBrace {
			let action = self.iden_list()?;
			self.eat(TokenKind::SemiColon)?;
			actions.push(action);
		}
		self.eat(TokenKind::RBrace)?;

		Ok(actions)
	}

	/// Parses a macro definition, after its left-hand side
	fn assignment(&mut self, lhs: Value<'s>) -> Result<(), AppError> {
		let name = match lhs {
			Value::RValue(name) => name,
			Value::LValue(name) =>
				return Err(AppError::ExpectedLValue { name: name.to_owned() }),
			Value::TargetAlias => return Err(AppError::ExpectedLValue { name: "$@".to_owned() }),
			Value::PrereqAlias => return Err(AppError::ExpectedLValue { name: "$<".to_owned() }),
		};

		self.eat(TokenKind::Eq)?;
		let values = self.iden_list()?;
		self.eat(TokenKind::SemiColon)?;

		self.associations.push(Association { name, values });
		Ok(())
	}

	/// Parses a rule, after its target
	fn rule(&mut self, target: Value<'s>) -> Result<(), AppError> {
		let prereqs = match self.peek() {
			TokenKind::Arrow => {
				self.eat(TokenKind::Arrow)?;
				self.iden_list()?
			},
			_ => vec![],
		};

		// A `;` instead of an action block makes the rule phony
		let actions = match self.peek() {
			TokenKind::SemiColon => {
				self.eat(TokenKind::SemiColon)?;
				vec![]
			},
			_ => self.block()?,
		};

		self.rules.push(RuleIr {
			target,
			prereqs,
			actions,
		});
		Ok(())
	}

	/// Parses a generic rule
	fn generic_rule(&mut self) -> Result<(), AppError> {
		let target_ext = self.eat(TokenKind::GenericRule)?.lexeme();
		let prereq_ext = match self.peek() {
			TokenKind::Arrow => {
				self.eat(TokenKind::Arrow)?;
				Some(self.eat(TokenKind::GenericRule)?.lexeme())
			},
			_ => None,
		};
		let actions = self.block()?;

		self.generic_rules.push(GenericRule {
			target_ext,
			prereq_ext,
			actions,
		});
		Ok(())
	}

	/// Parses a fill
	fn fill(&mut self) -> Result<(), AppError> {
		let target = self.eat(TokenKind::Fill)?.lexeme();
		let target_ext = ast::fill_ext(target)?;

		let (prereq, prereq_ext) = match self.peek() {
			TokenKind::Arrow => {
				self.eat(TokenKind::Arrow)?;
				let prereq = self.eat(TokenKind::Fill)?.lexeme();
				(Some(prereq), Some(ast::fill_ext(prereq)?))
			},
			_ => (None, None),
		};
		self.eat(TokenKind::SemiColon)?;

		self.fills.push(Fill {
			target,
			target_ext,
			prereq,
			prereq_ext,
		});
		Ok(())
	}

	/// Parses a single statement
	fn stmt(&mut self) -> Result<(), AppError> {
		match self.peek() {
			TokenKind::GenericRule => self.generic_rule(),
			TokenKind::Fill => self.fill(),
			_ => {
				let value = self.value()?;
				match self.peek() {
					TokenKind::Eq => self.assignment(value),
					TokenKind::Arrow | TokenKind::LBrace => self.rule(value),
					actual => Err(AppError::TokenNotInExpectedSet {
						expected: vec![TokenKind::Eq, TokenKind::Arrow, TokenKind::LBrace],
						actual,
					}),
				}
			},
		}
	}

	/// Instantiates all fills against the generic rules and returns the ast.
	///
	/// Synthetic rules are appended after the explicitly written ones, in
	/// fill source order.
	fn finish(mut self) -> Result<Ast<'s>, AppError> {
		for fill in mem::take(&mut self.fills) {
			let generic = self
				.generic_rules
				.iter()
				.find(|generic| generic.target_ext == fill.target_ext && generic.prereq_ext == fill.prereq_ext)
				.ok_or_else(|| AppError::UndefinedGenericRule {
					target: fill.target.to_owned(),
					prereq: fill.prereq.unwrap_or_default().to_owned(),
				})?;

			self.rules.push(RuleIr {
				target:  Value::RValue(fill.target),
				prereqs: fill.prereq.map(Value::RValue).into_iter().collect(),
				actions: generic.actions.clone(),
			});
		}

		Ok(Ast {
			rules:        self.rules,
			associations: self.associations,
		})
	}
}

/// Parses a token stream into an ast
pub fn parse(tokens: Vec<Token<'_>>) -> Result<Ast<'_>, AppError> {
	let mut parser = Parser {
		tokens,
		pos: 0,
		rules: vec![],
		associations: vec![],
		generic_rules: vec![],
		fills: vec![],
	};

	while parser.peek() != TokenKind::Eof {
		parser.stmt()?;
	}

	parser.finish()
}
