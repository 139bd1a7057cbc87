use crate::error::{FixError, Result};
use crate::rules::types::{RuleKind, RuleSpec};
use regex::{Captures, Regex};

/// A compiled rewrite rule.
#[derive(Debug)]
pub struct Substitution {
	/// Rule name from the table.
	pub name: String,

	/// Namespace of the produced identifier.
	pub kind: RuleKind,

	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement template.
	pub replacement: String,

	/// Required match on the rest of the line after each match.
	pub line_context: Option<Regex>,
}

impl Substitution {
	/// Compile a declarative rule.
	pub fn compile(spec: &RuleSpec) -> Result<Self> {
		let pattern = compile_regex(&spec.name, &spec.pattern)?;
		let line_context = spec
			.line_context
			.as_ref()
			.map(|p| compile_regex(&spec.name, p))
			.transpose()?;

		Ok(Substitution {
			name: spec.name.clone(),
			kind: spec.kind,
			pattern,
			replacement: spec.replacement.clone(),
			line_context,
		})
	}

	/// Replace every match in `input`, returning the new text and the number of replacements.
	///
	/// Matches whose line tail fails `line_context` are kept as they are.
	pub fn apply(&self, input: &str) -> (String, usize) {
		let mut count = 0;
		let output = self.pattern.replace_all(input, |caps: &Captures<'_>| {
			let whole = caps.get(0).map_or("", |m| m.as_str());
			let end = caps.get(0).map_or(input.len(), |m| m.end());
			if let Some(ref context) = self.line_context
				&& !context.is_match(line_tail(input, end))
			{
				return whole.to_string();
			}

			count += 1;
			let mut expanded = String::new();
			caps.expand(&self.replacement, &mut expanded);
			expanded
		});
		(output.into_owned(), count)
	}
}

fn compile_regex(rule: &str, pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| FixError::InvalidRegex {
		rule: rule.to_string(),
		pattern: pattern.to_string(),
		source,
	})
}

/// Text from `from` up to, not including, the next newline.
fn line_tail(haystack: &str, from: usize) -> &str {
	let rest = &haystack[from..];
	rest.find('\n').map_or(rest, |end| &rest[..end])
}
