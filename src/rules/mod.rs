//! Rewrite rules for loopdep-fix.
//!
//! This module handles:
//! - The built-in TOML rule table and its validation
//! - Compiling rules into ordered regex substitutions

pub mod compiler;
pub mod parser;
pub mod substitution;
pub mod types;

pub use compiler::{RuleSet, builtin_rules, compile_rules};
pub use parser::{BUILTIN_ORIGIN, builtin_rule_table, parse_rules_str};
pub use substitution::Substitution;
pub use types::{RuleKind, RuleSpec, RuleTable};
