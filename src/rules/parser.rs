use crate::error::{FixError, Result};
use crate::rules::types::RuleTable;

/// Origin label used in errors about the built-in table.
pub const BUILTIN_ORIGIN: &str = "<built-in>";

const BUILTIN_RULES: &str = include_str!("default_rules.toml");

/// Parse and validate a rule table from a TOML string.
pub fn parse_rules_str(content: &str, origin: &str) -> Result<RuleTable> {
	let table: RuleTable = toml::from_str(content).map_err(|source| FixError::RuleTableParse {
		origin: origin.to_string(),
		source,
	})?;

	table.validate(origin)?;

	Ok(table)
}

/// The rule table shipped with the binary.
pub fn builtin_rule_table() -> Result<RuleTable> {
	parse_rules_str(BUILTIN_RULES, BUILTIN_ORIGIN)
}
