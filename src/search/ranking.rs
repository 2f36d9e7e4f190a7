//! Ranking & Scoring System
//!
//! Scores one catalog entry against one query. Each raw token is tried
//! against tiered exact matches (title, keyword, description) and, failing
//! those, against fuzzy title and keyword matches. Synonym-only terms add a
//! flat bonus, and the entry priority scales the total.

use super::fuzzy::{FuzzyMatcher, DEFAULT_THRESHOLD};
use crate::catalog::SearchEntry;
use std::collections::BTreeSet;

/// Scoring weights for the different match tiers
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    /// Token is a substring of the title
    pub title_exact: f64,
    /// Token is a substring or superstring of a keyword
    pub keyword_exact: f64,
    /// Token is a substring of the description
    pub description_exact: f64,
    /// Multiplied by similarity for a fuzzy title-word match
    pub title_fuzzy: f64,
    /// Multiplied by similarity for a fuzzy keyword match
    pub keyword_fuzzy: f64,
    /// Flat bonus per synonym-only term found in the entry text
    pub synonym_bonus: f64,
    /// Minimum similarity for fuzzy tiers
    pub fuzzy_threshold: f64,
    /// Score is multiplied by `1 + priority / priority_divisor`
    pub priority_divisor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_exact: 100.0,
            keyword_exact: 80.0,
            description_exact: 50.0,
            title_fuzzy: 60.0,
            keyword_fuzzy: 40.0,
            synonym_bonus: 30.0,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            priority_divisor: 200.0,
        }
    }
}

/// Which tier produced a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    TitleExact,
    KeywordExact,
    DescriptionExact,
    TitleFuzzy,
    KeywordFuzzy,
    Synonym,
}

/// One scored contribution, kept for explaining a ranking
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub term: String,
    pub tier: MatchTier,
    pub points: f64,
}

/// Complete match score for one entry
#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// Sum of all tier contributions
    pub base_score: f64,
    /// `1 + priority / divisor`
    pub priority_multiplier: f64,
    /// Final weighted score
    pub final_score: f64,
    /// De-duplicated terms that contributed, in first-contribution order
    pub matched_terms: Vec<String>,
    pub contributions: Vec<Contribution>,
}

/// Substring test used by the exact tiers; callers lower-case both sides
fn contains_term(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Lower-cased views of an entry's searchable fields
struct EntryText {
    title: String,
    description: String,
    keywords: Vec<String>,
}

impl EntryText {
    fn new(entry: &SearchEntry) -> Self {
        Self {
            title: entry.title.to_lowercase(),
            description: entry.description.to_lowercase(),
            keywords: entry
                .keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    fn title_words(&self) -> impl Iterator<Item = &str> {
        self.title.split_whitespace()
    }

    fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    fn combined(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.keywords.join(" ")
        )
    }
}

struct Tally {
    base_score: f64,
    matched_terms: Vec<String>,
    contributions: Vec<Contribution>,
}

impl Tally {
    fn new() -> Self {
        Self {
            base_score: 0.0,
            matched_terms: Vec::new(),
            contributions: Vec::new(),
        }
    }

    fn add(&mut self, term: &str, tier: MatchTier, points: f64) {
        self.base_score += points;
        if !self.matched_terms.iter().any(|t| t == term) {
            self.matched_terms.push(term.to_string());
        }
        self.contributions.push(Contribution {
            term: term.to_string(),
            tier,
            points,
        });
    }
}

impl MatchScore {
    /// Score `entry` against the raw query tokens and their synonym expansion
    ///
    /// `tokens` are the lower-cased scoring tokens in query order; `expanded`
    /// is their synonym expansion (a superset of `tokens`).
    pub fn calculate(
        entry: &SearchEntry,
        tokens: &[String],
        expanded: &BTreeSet<String>,
        weights: &ScoringWeights,
    ) -> Self {
        let text = EntryText::new(entry);
        let fuzzy = FuzzyMatcher::with_threshold(weights.fuzzy_threshold);
        let mut tally = Tally::new();

        for token in tokens {
            if contains_term(&text.title, token) {
                tally.add(token, MatchTier::TitleExact, weights.title_exact);
                continue;
            }

            if text
                .keywords()
                .any(|k| k.contains(token.as_str()) || token.contains(k))
            {
                tally.add(token, MatchTier::KeywordExact, weights.keyword_exact);
                continue;
            }

            if contains_term(&text.description, token) {
                tally.add(token, MatchTier::DescriptionExact, weights.description_exact);
                continue;
            }

            // Fuzzy title and fuzzy keyword tiers are tried independently
            if let Some(similarity) = fuzzy.first_match(token, text.title_words()) {
                tally.add(token, MatchTier::TitleFuzzy, weights.title_fuzzy * similarity);
            }
            if let Some(similarity) = fuzzy.first_match(token, text.keywords()) {
                tally.add(token, MatchTier::KeywordFuzzy, weights.keyword_fuzzy * similarity);
            }
        }

        let combined = text.combined();
        for synonym in expanded.iter().filter(|s| !tokens.contains(s)) {
            if contains_term(&combined, synonym) {
                tally.add(synonym, MatchTier::Synonym, weights.synonym_bonus);
            }
        }

        let priority_multiplier = 1.0 + f64::from(entry.priority) / weights.priority_divisor;

        Self {
            base_score: tally.base_score,
            priority_multiplier,
            final_score: tally.base_score * priority_multiplier,
            matched_terms: tally.matched_terms,
            contributions: tally.contributions,
        }
    }

    /// Whether any tier contributed
    pub fn is_match(&self) -> bool {
        !self.matched_terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn bed_entry() -> SearchEntry {
        SearchEntry {
            id: "prog-bed".to_string(),
            title: "B.Ed (Bachelor of Education)".to_string(),
            description: "Two-year programme preparing secondary school teachers".to_string(),
            path: "/programmes".to_string(),
            section: Some("bed".to_string()),
            keywords: vec![
                "bed".to_string(),
                "secondary".to_string(),
                "teacher".to_string(),
                "degree".to_string(),
            ],
            category: Category::Program,
            icon: "graduation-cap".to_string(),
            priority: 10,
        }
    }

    fn plain_entry(title: &str, description: &str, keywords: &[&str]) -> SearchEntry {
        SearchEntry {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            path: "/".to_string(),
            section: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            category: Category::Page,
            icon: String::new(),
            priority: 0,
        }
    }

    fn score(entry: &SearchEntry, words: &[&str]) -> MatchScore {
        let tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let expanded: BTreeSet<String> = tokens.iter().cloned().collect();
        MatchScore::calculate(entry, &tokens, &expanded, &ScoringWeights::default())
    }

    #[test]
    fn test_contains_term() {
        assert!(contains_term("fee structure", "fee"));
        assert!(!contains_term("fee structure", ""));
        assert!(!contains_term("fee structure", "fees"));
    }

    #[test]
    fn test_default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.title_exact, 100.0);
        assert_eq!(weights.keyword_exact, 80.0);
        assert_eq!(weights.description_exact, 50.0);
        assert_eq!(weights.synonym_bonus, 30.0);
        assert_eq!(weights.fuzzy_threshold, 0.70);
    }

    #[test]
    fn test_title_substring_with_priority() {
        let result = score(&bed_entry(), &["ed"]);
        assert_eq!(result.base_score, 100.0);
        assert!((result.final_score - 105.0).abs() < 1e-9);
        assert_eq!(result.matched_terms, vec!["ed"]);
        assert_eq!(result.contributions[0].tier, MatchTier::TitleExact);
    }

    #[test]
    fn test_keyword_tier_substring_and_superstring() {
        let entry = plain_entry("Hostel", "Rooms", &["accommodation"]);
        assert_eq!(score(&entry, &["accommod"]).base_score, 80.0);
        // Token longer than the keyword also counts
        let entry = plain_entry("Fees", "Rooms", &["fee"]);
        assert_eq!(score(&entry, &["feeschedule"]).base_score, 80.0);
    }

    #[test]
    fn test_description_tier() {
        let entry = plain_entry("Hostel", "Separate mess facility", &[]);
        let result = score(&entry, &["mess"]);
        assert_eq!(result.base_score, 50.0);
        assert_eq!(result.contributions[0].tier, MatchTier::DescriptionExact);
    }

    #[test]
    fn test_tiers_are_not_cumulative() {
        // "hostel" is in title, keywords and description; only the title counts
        let entry = plain_entry("Hostel", "The hostel", &["hostel"]);
        assert_eq!(score(&entry, &["hostel"]).base_score, 100.0);
    }

    #[test]
    fn test_fuzzy_title_and_keyword_both_apply() {
        let entry = plain_entry("Library", "Reading", &["library"]);
        let result = score(&entry, &["libary"]);
        let similarity = 1.0 - 1.0 / 7.0;
        let expected = 60.0 * similarity + 40.0 * similarity;
        assert!((result.base_score - expected).abs() < 1e-9);
        assert_eq!(result.matched_terms, vec!["libary"]);
        assert_eq!(result.contributions.len(), 2);
    }

    #[test]
    fn test_fuzzy_keyword_only() {
        let entry = plain_entry("Apply Now", "Steps", &["admission"]);
        let result = score(&entry, &["admision"]);
        let expected = 40.0 * (1.0 - 1.0 / 9.0);
        assert!((result.base_score - expected).abs() < 1e-9);
        assert_eq!(result.contributions[0].tier, MatchTier::KeywordFuzzy);
    }

    #[test]
    fn test_no_match_contributes_nothing() {
        let result = score(&bed_entry(), &["zzzz"]);
        assert_eq!(result.final_score, 0.0);
        assert!(!result.is_match());
    }

    #[test]
    fn test_synonym_bonus_only_for_synonym_terms() {
        let entry = plain_entry("Fee Structure", "Tuition charges", &[]);
        let tokens = vec!["cost".to_string()];
        let expanded: BTreeSet<String> = ["cost", "fee", "tuition", "missing"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result =
            MatchScore::calculate(&entry, &tokens, &expanded, &ScoringWeights::default());
        // "fee" and "tuition" are found, "missing" is not, "cost" is a raw token
        assert_eq!(result.base_score, 60.0);
        assert_eq!(result.matched_terms, vec!["fee", "tuition"]);
    }

    #[test]
    fn test_repeated_tokens_score_each_time_but_record_once() {
        let entry = plain_entry("Hostel", "", &[]);
        let result = score(&entry, &["hostel", "hostel"]);
        assert_eq!(result.base_score, 200.0);
        assert_eq!(result.matched_terms, vec!["hostel"]);
    }

    #[test]
    fn test_title_beats_description_all_else_equal() {
        let in_title = plain_entry("Scholarships", "Support", &[]);
        let in_description = plain_entry("Support", "Scholarships", &[]);
        assert!(
            score(&in_title, &["scholar"]).final_score
                > score(&in_description, &["scholar"]).final_score
        );
    }
}
