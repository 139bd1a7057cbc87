use crate::error::FixError;
use serde::Deserialize;
use std::collections::HashSet;

/// Which namespace a rule rewrites the stale identifier into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
	/// `access_pattern_t` classification.
	Pattern,

	/// `cache_antipattern_t` classification.
	Antipattern,
}

impl RuleKind {
	/// The identifier that rules of this kind produce.
	pub fn identifier(self) -> &'static str {
		match self {
			RuleKind::Pattern => "PATTERN_LOOP_CARRIED_DEP",
			RuleKind::Antipattern => "ANTIPATTERN_LOOP_CARRIED_DEP",
		}
	}
}

/// Top-level rule table, as declared in TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleTable {
	/// Rules in application order.
	#[serde(default)]
	pub rules: Vec<RuleSpec>,
}

/// A single declarative rewrite rule.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleSpec {
	/// Unique rule name, used in reports and errors.
	pub name: String,

	/// Namespace the replacement belongs to.
	pub kind: RuleKind,

	/// Regex matched against the whole text.
	pub pattern: String,

	/// Replacement template. Capture groups are referenced as `${1}`.
	pub replacement: String,

	/// Regex that must match the rest of the line after a match for it to be rewritten.
	#[serde(default)]
	pub line_context: Option<String>,
}

impl RuleSpec {
	/// Check that the replacement actually produces this rule's identifier.
	pub fn validate(&self) -> Result<(), FixError> {
		let expected = self.kind.identifier();
		// PATTERN_LOOP_CARRIED_DEP is a substring of the antipattern identifier
		let crosses_namespace = self.kind == RuleKind::Pattern
			&& self
				.replacement
				.contains(RuleKind::Antipattern.identifier());
		if !self.replacement.contains(expected) || crosses_namespace {
			return Err(FixError::ReplacementMismatch {
				rule: self.name.clone(),
				expected: expected.to_string(),
			});
		}
		Ok(())
	}
}

impl RuleTable {
	/// Validate all rules and the table as a whole.
	pub fn validate(&self, origin: &str) -> Result<(), FixError> {
		if self.rules.is_empty() {
			return Err(FixError::EmptyRuleTable {
				origin: origin.to_string(),
			});
		}

		let mut seen = HashSet::new();
		for rule in &self.rules {
			if !seen.insert(rule.name.as_str()) {
				return Err(FixError::DuplicateRule {
					name: rule.name.clone(),
				});
			}
			rule.validate()?;
		}

		Ok(())
	}
}
