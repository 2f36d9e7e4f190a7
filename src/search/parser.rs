//! Query Parser & Preprocessor
//!
//! Trims, lower-cases and splits a free-text query into tokens, and
//! separates the tokens long enough to take part in scoring.

/// Queries shorter than this (after trimming) are not searched at all
pub const MIN_QUERY_CHARS: usize = 2;

/// Tokens shorter than this are dropped from the scoring token list
pub const MIN_TOKEN_CHARS: usize = 2;

/// Parsed and processed search query
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Original unmodified query
    pub original: String,
    /// Trimmed, lower-cased query
    pub normalized: String,
    /// Every whitespace-delimited token, in query order
    pub tokens: Vec<String>,
    /// Tokens of at least [`MIN_TOKEN_CHARS`] characters, in query order
    pub scoring_tokens: Vec<String>,
}

impl ParsedQuery {
    /// Whether the trimmed query is long enough to be searched
    pub fn is_searchable(&self) -> bool {
        self.original.trim().chars().count() >= MIN_QUERY_CHARS
    }

    /// The tokens re-joined with single spaces, for phrase lookups
    pub fn phrase(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Query parser and preprocessor
pub struct QueryParser;

impl QueryParser {
    /// Parse a search query into its components
    pub fn parse(query: &str) -> ParsedQuery {
        let normalized = query.trim().to_lowercase();
        let tokens = Self::tokenize(&normalized);
        let scoring_tokens = tokens
            .iter()
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .cloned()
            .collect();

        ParsedQuery {
            original: query.to_string(),
            normalized,
            tokens,
            scoring_tokens,
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
