//! loopdep-fix - qualify stale `LOOP_CARRIED_DEP` identifiers in source files.
//!
//! `LOOP_CARRIED_DEP` used to live in two enums at once. This library rewrites
//! each occurrence into `PATTERN_LOOP_CARRIED_DEP` or
//! `ANTIPATTERN_LOOP_CARRIED_DEP` depending on the tokens around it:
//! - Rule table declared in TOML and compiled into ordered regex substitutions
//! - Whole-file, in-place rewriting with per-rule replacement counts
//!
//! # Example
//!
//! ```no_run
//! use loopdep_fix::rewriter::rewrite_file;
//! use loopdep_fix::rules::builtin_rules;
//! use std::path::Path;
//!
//! let rules = builtin_rules().unwrap();
//! let report = rewrite_file(&rules, Path::new("src/pattern_classifier.c")).unwrap();
//! println!("{} replacements", report.total());
//! ```

pub mod error;
pub mod rewriter;
pub mod rules;

pub use error::{FixError, Result};
