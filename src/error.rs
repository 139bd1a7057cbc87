use std::path::PathBuf;

/// Library-level structured errors for loopdep-fix.
///
/// The CLI binary wraps these with `anyhow` to add the file being fixed.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rule table: {origin}")]
	RuleTableParse {
		origin: String,
		#[source]
		source: toml::de::Error,
	},

	#[error("Rule table has no rules: {origin}")]
	EmptyRuleTable { origin: String },

	#[error("Duplicate rule name: {name}")]
	DuplicateRule { name: String },

	#[error("Replacement of rule {rule} does not produce {expected}")]
	ReplacementMismatch { rule: String, expected: String },

	#[error("Invalid regex pattern in rule {rule}: {pattern}")]
	InvalidRegex {
		rule: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using FixError.
pub type Result<T> = std::result::Result<T, FixError>;
