//! In-place rewriting of source files.
//!
//! Every rule scans the text produced by the rules before it. There is no
//! fixed-point iteration: each rule runs exactly once per file.

use crate::error::{FixError, Result};
use crate::rules::{RuleKind, RuleSet};
use std::path::Path;

/// How many replacements one rule made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHits {
	pub rule: String,
	pub kind: RuleKind,
	pub replacements: usize,
}

/// Per-rule replacement counts for one rewritten text.
///
/// The CLI only needs success or failure; library callers use the report to
/// see which rules fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
	/// One entry per rule, in application order.
	pub hits: Vec<RuleHits>,
}

impl RewriteReport {
	/// Total number of replacements across all rules.
	pub fn total(&self) -> usize {
		self.hits.iter().map(|h| h.replacements).sum()
	}

	/// Whether any rule changed the text.
	pub fn changed(&self) -> bool {
		self.total() > 0
	}

	/// Replacements made by the named rule, if it ran.
	pub fn replacements_for(&self, rule: &str) -> Option<usize> {
		self.hits
			.iter()
			.find(|h| h.rule == rule)
			.map(|h| h.replacements)
	}
}

/// Apply every rule in order to `content`.
pub fn rewrite_text(rules: &RuleSet, content: &str) -> (String, RewriteReport) {
	let mut text = content.to_string();
	let mut report = RewriteReport::default();

	for sub in rules {
		let (rewritten, replacements) = sub.apply(&text);
		text = rewritten;
		report.hits.push(RuleHits {
			rule: sub.name.clone(),
			kind: sub.kind,
			replacements,
		});
	}

	(text, report)
}

/// Rewrite the file at `path` in place.
///
/// The file is always written back, even when no rule matched. The write is
/// not atomic: a failure part way through can leave the file truncated.
pub fn rewrite_file(rules: &RuleSet, path: &Path) -> Result<RewriteReport> {
	let content = std::fs::read_to_string(path).map_err(|source| FixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let (rewritten, report) = rewrite_text(rules, &content);
	write_back(path, &rewritten)?;

	Ok(report)
}

fn write_back(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).map_err(|source| FixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})
}
