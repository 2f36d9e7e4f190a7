//! Fuzzy Matching
//!
//! Edit-distance similarity used to tolerate typos in query tokens.

/// Similarity a candidate must reach to count as a fuzzy match
pub const DEFAULT_THRESHOLD: f64 = 0.70;

/// Levenshtein distance over characters, unit cost for insert, delete and substitute
///
/// Fills the full `(len_a + 1) x (len_b + 1)` table.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a.len()][b.len()]
}

/// Normalized similarity in `[0, 1]`: `1 - distance / max(len_a, len_b)`
///
/// Two empty strings are maximally similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}

/// Threshold-gated fuzzy matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    /// Create a matcher with the default 0.70 threshold
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity of `needle` to `candidate` if it clears the threshold
    pub fn fuzzy_match(&self, needle: &str, candidate: &str) -> Option<f64> {
        let score = similarity(needle, candidate);
        (score >= self.threshold).then_some(score)
    }

    /// Similarity of the first candidate, in order, that clears the threshold
    ///
    /// Scanning stops at the first hit; later, possibly closer, candidates are
    /// not considered.
    pub fn first_match<'a, I>(&self, needle: &str, candidates: I) -> Option<f64>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .find_map(|candidate| self.fuzzy_match(needle, candidate))
    }
}
