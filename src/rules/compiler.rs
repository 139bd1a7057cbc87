use crate::error::Result;
use crate::rules::parser::builtin_rule_table;
use crate::rules::substitution::Substitution;
use crate::rules::types::RuleTable;

/// Compiled rules, in the order they are applied.
#[derive(Debug)]
pub struct RuleSet {
	substitutions: Vec<Substitution>,
}

impl RuleSet {
	pub fn iter(&self) -> std::slice::Iter<'_, Substitution> {
		self.substitutions.iter()
	}

	pub fn len(&self) -> usize {
		self.substitutions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.substitutions.is_empty()
	}
}

impl<'a> IntoIterator for &'a RuleSet {
	type Item = &'a Substitution;
	type IntoIter = std::slice::Iter<'a, Substitution>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Compile all rules in a table, keeping their order.
pub fn compile_rules(table: &RuleTable) -> Result<RuleSet> {
	let substitutions = table
		.rules
		.iter()
		.map(Substitution::compile)
		.collect::<Result<Vec<_>>>()?;

	Ok(RuleSet { substitutions })
}

/// Parse and compile the built-in rule table.
pub fn builtin_rules() -> Result<RuleSet> {
	compile_rules(&builtin_rule_table()?)
}
