// File: src/validation/pattern.rs
// Purpose: Compiling field patterns and deciding what a broken one means

use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// What to do with a field whose pattern is not a valid regular expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPolicy {
    /// Skip the pattern check; other checks still apply
    #[default]
    Skip,
    /// Fail every non-empty value with the pattern message
    Reject,
}

/// A field's pattern after compilation.
///
/// Patterns are written in browser regex syntax, so lookaround and
/// backreferences are accepted.
#[derive(Debug, Clone)]
pub(crate) enum CompiledPattern {
    Valid(Regex),
    Invalid,
}

impl CompiledPattern {
    pub(crate) fn is_valid(&self) -> bool {
        matches!(self, CompiledPattern::Valid(_))
    }

    /// Whether `text` passes under `policy`
    pub(crate) fn matches(&self, text: &str, policy: PatternPolicy) -> bool {
        match self {
            CompiledPattern::Valid(regex) => match regex.is_match(text) {
                Ok(matched) => matched,
                Err(e) => {
                    // Backtracking limit hit; same outcome as a broken pattern
                    warn!("Pattern {:?} could not be evaluated: {}", regex.as_str(), e);
                    policy == PatternPolicy::Skip
                }
            },
            CompiledPattern::Invalid => policy == PatternPolicy::Skip,
        }
    }
}

/// Why `source` does not compile, if it doesn't
pub(crate) fn syntax_error(source: &str) -> Option<String> {
    Regex::new(source).err().map(|e| e.to_string())
}

/// Compile a field's pattern, logging a failure
pub(crate) fn compile(field_id: &str, source: &str) -> CompiledPattern {
    match Regex::new(source) {
        Ok(regex) => CompiledPattern::Valid(regex),
        Err(e) => {
            warn!(
                "Invalid validation pattern on field `{}`: {:?} ({})",
                field_id, source, e
            );
            CompiledPattern::Invalid
        }
    }
}
