//! Client-side site search with fuzzy matching and synonym expansion
//!
//! A query is tokenized, expanded through the synonym table, scored against
//! every catalog entry, filtered by a minimum score and returned best-first.

pub mod engine;
pub mod fuzzy;
pub mod highlight;
pub mod parser;
pub mod ranking;
pub mod synonyms;


pub use engine::{
    group_by_category, SearchEngine, SearchOptions, SearchResult, DEFAULT_MAX_RESULTS,
    DEFAULT_MIN_SCORE,
};
pub use fuzzy::{levenshtein_distance, similarity, FuzzyMatcher};
pub use highlight::{highlight_matches, highlight_with};
pub use parser::{ParsedQuery, QueryParser};
pub use ranking::{Contribution, MatchScore, MatchTier, ScoringWeights};
pub use synonyms::SynonymTable;
