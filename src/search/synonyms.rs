//! Synonym expansion
//!
//! Maps a canonical term to its variant spellings. Lookups are symmetric:
//! hitting the canonical term or any one variant pulls in the whole group.

use crate::catalog::CatalogError;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("bed", &["b.ed", "b ed", "bachelor of education", "bachelors in education"]),
    ("deled", &["d.el.ed", "d el ed", "diploma in elementary education", "dled"]),
    ("med", &["m.ed", "m ed", "master of education", "masters in education"]),
    ("admission", &["admissions", "enroll", "enrolment", "enrollment", "apply", "application"]),
    ("fee", &["fees", "cost", "tuition", "charges", "payment"]),
    ("eligibility", &["eligible", "criteria", "qualification", "requirements"]),
    ("hostel", &["accommodation", "dormitory", "residence", "stay"]),
    ("library", &["books", "reading room", "journals"]),
    ("lab", &["laboratory", "labs", "practical"]),
    ("contact", &["address", "phone", "email", "location", "reach"]),
    ("gallery", &["photos", "pictures", "images"]),
    ("scholarship", &["scholarships", "financial aid", "stipend", "concession"]),
    ("syllabus", &["curriculum", "subjects", "course structure"]),
    ("faculty", &["teachers", "staff", "professors", "lecturers"]),
    ("placement", &["jobs", "career", "recruitment"]),
    ("prospectus", &["brochure", "booklet"]),
    ("programme", &["program", "programmes", "programs", "course", "courses"]),
    ("event", &["events", "news", "announcements"]),
];

/// Canonical term → variants, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynonymTable {
    groups: Vec<(String, Vec<String>)>,
}

impl SynonymTable {
    /// An empty table; expansion returns its input unchanged
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in education-site table, materialized once per process
    pub fn builtin() -> &'static SynonymTable {
        static BUILTIN: OnceLock<SynonymTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            BUILTIN_SYNONYMS
                .iter()
                .fold(SynonymTable::new(), |table, (canonical, variants)| {
                    table.with_group(canonical, variants)
                })
        })
    }

    /// Add a group; terms are trimmed and lower-cased, empty and repeated variants dropped
    ///
    /// An empty canonical term is ignored.
    pub fn with_group(mut self, canonical: &str, variants: &[&str]) -> Self {
        self.push_group(canonical, variants.iter().copied());
        self
    }

    fn push_group<'a>(&mut self, canonical: &str, variants: impl Iterator<Item = &'a str>) {
        let canonical = canonical.trim().to_lowercase();
        if canonical.is_empty() {
            return;
        }

        let mut normalized: Vec<String> = Vec::new();
        for variant in variants {
            let variant = variant.trim().to_lowercase();
            if !variant.is_empty() && variant != canonical && !normalized.contains(&variant) {
                normalized.push(variant);
            }
        }
        self.groups.push((canonical, normalized));
    }

    /// Parse a JSON object of canonical term → array of variants
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for (canonical, variants) in &raw {
            if canonical.trim().is_empty() {
                return Err(CatalogError::EmptyCanonical);
            }
            table.push_group(canonical, variants.iter().map(String::as_str));
        }
        Ok(table)
    }

    /// Load a synonym file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&data)?;
        info!(
            "Loaded {} synonym groups from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Variants recorded for a canonical term
    pub fn variants(&self, canonical: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(c, _)| c == canonical)
            .map(|(_, v)| v.as_slice())
    }

    /// Expand tokens into a superset containing every related term
    ///
    /// Matching is exact string equality; the input tokens are always part of
    /// the result.
    pub fn expand(&self, tokens: &[String]) -> BTreeSet<String> {
        let mut expanded: BTreeSet<String> = tokens.iter().cloned().collect();
        for token in tokens {
            self.expand_term_into(token, &mut expanded);
        }
        expanded
    }

    /// Add every group that `term` belongs to into `acc`, without adding `term` itself
    pub fn expand_term_into(&self, term: &str, acc: &mut BTreeSet<String>) {
        for (canonical, variants) in &self.groups {
            if canonical == term || variants.iter().any(|v| v == term) {
                acc.insert(canonical.clone());
                acc.extend(variants.iter().cloned());
            }
        }
    }
}
