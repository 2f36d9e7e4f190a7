//! Search Engine Integration
//!
//! Ties together query parsing, synonym expansion and scoring to provide
//! the public query API over a catalog.

use super::parser::{ParsedQuery, QueryParser};
use super::ranking::{MatchScore, ScoringWeights};
use super::synonyms::SynonymTable;
use crate::catalog::{Catalog, Category, SearchEntry, DEFAULT_SUGGESTIONS};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Default cap on returned results
pub const DEFAULT_MAX_RESULTS: usize = 15;
/// Default minimum score a result must reach
pub const DEFAULT_MIN_SCORE: f64 = 20.0;

const SUGGESTION_MAX_RESULTS: usize = 5;
const SUGGESTION_MIN_SCORE: f64 = 15.0;

/// Options controlling a single search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Maximum number of results returned
    pub max_results: usize,
    /// Entries scoring strictly below this are dropped
    pub min_score: f64,
    /// Only these categories are considered; empty means no filter
    pub categories: Vec<Category>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
            categories: Vec::new(),
        }
    }
}

impl SearchOptions {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Copy with `min_score` clamped to a finite, non-negative value
    pub fn sanitized(&self) -> Self {
        let min_score = if self.min_score.is_finite() {
            self.min_score.max(0.0)
        } else if self.min_score == f64::INFINITY {
            f64::MAX
        } else {
            0.0
        };

        Self {
            max_results: self.max_results,
            min_score,
            categories: self.categories.clone(),
        }
    }

    fn admits(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Ranked entry returned from a search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// The matched entry
    #[serde(flatten)]
    pub entry: SearchEntry,
    /// Relevance score after the priority multiplier
    pub score: f64,
    /// Query and synonym terms that contributed, for highlighting
    #[serde(rename = "matchedTerms")]
    pub matched_terms: Vec<String>,
}

/// Search engine over a catalog and synonym table
#[derive(Debug, Clone)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    synonyms: &'a SynonymTable,
    scoring_weights: ScoringWeights,
    default_suggestions: Vec<String>,
}

impl SearchEngine<'static> {
    /// Engine over the built-in catalog and synonym table
    pub fn builtin() -> Self {
        SearchEngine::new(Catalog::builtin(), SynonymTable::builtin())
    }
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine with default weights
    pub fn new(catalog: &'a Catalog, synonyms: &'a SynonymTable) -> Self {
        Self {
            catalog,
            synonyms,
            scoring_weights: ScoringWeights::default(),
            default_suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the scoring weights
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.scoring_weights = weights;
        self
    }

    /// Replace the suggestions offered for short input
    pub fn with_default_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.default_suggestions = suggestions;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn synonyms(&self) -> &'a SynonymTable {
        self.synonyms
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.scoring_weights
    }

    /// Search the catalog with a free-text query
    ///
    /// Returns at most `options.max_results` results, highest score first.
    /// Equal scores keep catalog order. Queries shorter than two characters
    /// return nothing.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let parsed = QueryParser::parse(query);
        if !parsed.is_searchable() {
            return Vec::new();
        }

        let options = options.sanitized();
        if options.max_results == 0 {
            return Vec::new();
        }

        let expanded = self.expand(&parsed);
        debug!(
            "Query '{}': {} scoring tokens, {} expanded terms",
            parsed.normalized,
            parsed.scoring_tokens.len(),
            expanded.len()
        );

        let mut candidates = 0usize;
        let mut results: Vec<SearchResult> = self
            .catalog
            .iter()
            .filter(|entry| options.admits(entry.category))
            .filter_map(|entry| {
                candidates += 1;
                let score = MatchScore::calculate(
                    entry,
                    &parsed.scoring_tokens,
                    &expanded,
                    &self.scoring_weights,
                );
                (score.final_score >= options.min_score).then(|| SearchResult {
                    entry: entry.clone(),
                    score: score.final_score,
                    matched_terms: score.matched_terms,
                })
            })
            .collect();

        // Stable: ties keep catalog order
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(options.max_results);

        debug!(
            "Query '{}': scored {} candidates, returning {}",
            parsed.normalized,
            candidates,
            results.len()
        );

        results
    }

    /// Score breakdown for a single entry, for diagnostics
    pub fn explain(&self, query: &str, entry_id: &str) -> Option<MatchScore> {
        let entry = self.catalog.get(entry_id)?;
        let parsed = QueryParser::parse(query);
        if !parsed.is_searchable() {
            return None;
        }
        let expanded = self.expand(&parsed);
        Some(MatchScore::calculate(
            entry,
            &parsed.scoring_tokens,
            &expanded,
            &self.scoring_weights,
        ))
    }

    /// Title suggestions for partially typed input
    ///
    /// Short input gets the curated default list.
    pub fn suggestions(&self, partial_query: &str) -> Vec<String> {
        if partial_query.trim().chars().count() < 2 {
            return self.default_suggestions.clone();
        }

        let options = SearchOptions::default()
            .with_max_results(SUGGESTION_MAX_RESULTS)
            .with_min_score(SUGGESTION_MIN_SCORE);

        self.search(partial_query, &options)
            .into_iter()
            .map(|r| r.entry.title)
            .collect()
    }

    /// Synonym expansion of the scoring tokens, plus the whole phrase for
    /// multi-word queries so variants such as "b ed" are recognized
    fn expand(&self, parsed: &ParsedQuery) -> BTreeSet<String> {
        let mut expanded = self.synonyms.expand(&parsed.scoring_tokens);
        if parsed.tokens.len() > 1 {
            self.synonyms.expand_term_into(&parsed.phrase(), &mut expanded);
        }
        expanded
    }
}

/// Partition results by category, keeping result order within each bucket
pub fn group_by_category(
    results: impl IntoIterator<Item = SearchResult>,
) -> BTreeMap<Category, Vec<SearchResult>> {
    let mut groups: BTreeMap<Category, Vec<SearchResult>> = BTreeMap::new();
    for result in results {
        groups.entry(result.entry.category).or_default().push(result);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(
        id: &str,
        title: &str,
        description: &str,
        keywords: &[&str],
        category: Category,
        priority: u32,
    ) -> SearchEntry {
        SearchEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            path: format!("/{}", id),
            section: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category,
            icon: String::new(),
            priority,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            entry(
                "prog-bed",
                "B.Ed (Bachelor of Education)",
                "Two-year programme for secondary teachers",
                &["bed", "secondary", "teacher", "degree"],
                Category::Program,
                10,
            ),
            entry(
                "adm-process",
                "Admission Process",
                "How to apply",
                &["admission", "apply"],
                Category::Admission,
                10,
            ),
            entry(
                "fac-hostel",
                "Hostel",
                "Residential accommodation",
                &["hostel", "mess"],
                Category::Facility,
                6,
            ),
            entry(
                "faq-hostel",
                "Is a hostel available?",
                "Yes",
                &["hostel"],
                Category::Faq,
                6,
            ),
        ])
        .unwrap()
    }

    fn synonyms() -> SynonymTable {
        SynonymTable::new()
            .with_group("bed", &["b.ed", "b ed", "bachelor of education"])
            .with_group("hostel", &["accommodation", "stay"])
    }

    #[test]
    fn test_search_title_match_scores_with_priority() {
        let catalog = catalog();
        let synonyms = SynonymTable::new();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let results = engine.search("bed", &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, "prog-bed");
        // keyword tier: "bed" is not a substring of "b.ed (bachelor of education)"
        assert!((results[0].score - 80.0 * 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_search_split_abbreviation_via_synonyms() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let results = engine.search("b ed", &SearchOptions::default());
        assert_eq!(results[0].entry.id, "prog-bed");
        assert!(results[0].matched_terms.iter().any(|t| t == "b.ed"));
    }

    #[test]
    fn test_search_typo_hits_keyword() {
        let catalog = catalog();
        let synonyms = SynonymTable::new();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let results = engine.search("admision", &SearchOptions::default());
        assert_eq!(results[0].entry.id, "adm-process");
        assert!(results[0].score > 20.0);
    }

    #[test]
    fn test_search_short_query_is_empty() {
        let engine = SearchEngine::builtin();
        assert!(engine.search("", &SearchOptions::default()).is_empty());
        assert!(engine.search(" a ", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_search_empty_catalog() {
        let catalog = Catalog::empty();
        let synonyms = SynonymTable::new();
        let engine = SearchEngine::new(&catalog, &synonyms);
        assert!(engine.search("anything", &SearchOptions::default()).is_empty());
    }

    #[test]
    fn test_search_category_filter() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let options = SearchOptions::default().with_categories([Category::Faq]);
        let results = engine.search("hostel", &options);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.category, Category::Faq);
    }

    #[test]
    fn test_search_ties_keep_catalog_order() {
        let catalog = catalog();
        let synonyms = SynonymTable::new();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let results = engine.search("hostel", &SearchOptions::default());
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].score, results[1].score);
        assert_eq!(results[0].entry.id, "fac-hostel");
        assert_eq!(results[1].entry.id, "faq-hostel");
    }

    #[test]
    fn test_search_max_results_and_min_score() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let one = SearchOptions::default().with_max_results(1);
        assert_eq!(engine.search("hostel", &one).len(), 1);

        let zero = SearchOptions::default().with_max_results(0);
        assert!(engine.search("hostel", &zero).is_empty());

        let strict = SearchOptions::default().with_min_score(1_000.0);
        assert!(engine.search("hostel", &strict).is_empty());
    }

    #[test]
    fn test_sanitized_options() {
        let negative = SearchOptions::default().with_min_score(-5.0).sanitized();
        assert_eq!(negative.min_score, 0.0);

        let nan = SearchOptions::default().with_min_score(f64::NAN).sanitized();
        assert_eq!(nan.min_score, 0.0);

        let inf = SearchOptions::default().with_min_score(f64::INFINITY).sanitized();
        assert_eq!(inf.min_score, f64::MAX);
    }

    #[test]
    fn test_suggestions_short_input_uses_defaults() {
        let engine = SearchEngine::builtin();
        let expected: Vec<String> = DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        assert_eq!(engine.suggestions(""), expected);
        assert_eq!(engine.suggestions("h"), expected);
    }

    #[test]
    fn test_suggestions_return_titles() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms)
            .with_default_suggestions(vec!["Start here".to_string()]);

        assert_eq!(engine.suggestions(""), vec!["Start here"]);
        let titles = engine.suggestions("hostel");
        assert_eq!(titles, vec!["Hostel", "Is a hostel available?"]);
    }

    #[test]
    fn test_explain_reports_contributions() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let score = engine.explain("hostel", "fac-hostel").unwrap();
        assert!(score.is_match());
        assert!(engine.explain("hostel", "missing").is_none());
        assert!(engine.explain("h", "fac-hostel").is_none());
    }

    #[test]
    fn test_group_by_category_preserves_order() {
        let catalog = catalog();
        let synonyms = synonyms();
        let engine = SearchEngine::new(&catalog, &synonyms);

        let results = engine.search("hostel", &SearchOptions::default().with_min_score(0.0));
        let groups = group_by_category(results.clone());

        let keys: Vec<Category> = groups.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, results.len());

        for bucket in groups.values() {
            let positions: Vec<usize> = bucket
                .iter()
                .map(|r| results.iter().position(|o| o.entry.id == r.entry.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_search_result_serialization() {
        let engine = SearchEngine::builtin();
        let results = engine.search("library", &SearchOptions::default());
        let json = serde_json::to_value(&results[0]).unwrap();
        assert!(json.get("id").is_some());
        assert!(json.get("title").is_some());
        assert!(json.get("score").is_some());
        assert!(json.get("matchedTerms").and_then(|v| v.as_array()).is_some());
    }
}
