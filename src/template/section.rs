//! Prompt section data type.

/// One `[prompt ...]` block from a template file: a pool of candidate
/// tokens plus the inclusive pick-count bounds and the delimiter used to
/// join tokens picked from this section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSection {
    /// Candidate tokens in file order. Duplicates are allowed.
    pub tokens: Vec<String>,

    /// Minimum number of tokens drawn per generation.
    pub min_pick: u32,

    /// Maximum number of tokens drawn per generation (inclusive).
    pub max_pick: u32,

    /// Delimiter between tokens picked from this section.
    pub delim: String,
}

impl PromptSection {
    /// Create an empty section with the default 1-1 cardinality.
    pub fn new(delim: impl Into<String>) -> Self {
        Self {
            tokens: Vec::new(),
            min_pick: 1,
            max_pick: 1,
            delim: delim.into(),
        }
    }
}
