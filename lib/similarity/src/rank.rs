//! Blended ranking over the catalog index
//!
//! Combines the lexical edit-distance channel with the vector-space cosine
//! channel into one score per template and selects the top-N matches.

use std::cmp::Reverse;

use errx_core::{CatalogIndex, Error, Result, TemplateEntry};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::lexical::lexical_ratio;

/// Options controlling a ranking call.
///
/// Weights are not required to sum to 1; any non-negative pair is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// Number of matches to return; the catalog size caps the result length.
    pub top_n: usize,
    /// Weight of the lexical edit-distance channel.
    pub lexical_weight: f32,
    /// Weight of the vector-space cosine channel.
    pub vector_weight: f32,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            top_n: 1,
            lexical_weight: 0.8,
            vector_weight: 0.2,
        }
    }
}

impl RankOptions {
    /// Default weights with a custom result count.
    #[must_use]
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Self::default()
        }
    }
}

/// One returned match: a copy of the catalog entry plus its scores.
#[derive(Debug, Clone)]
pub struct RankedMatch {
    /// Copy of the matched catalog entry.
    pub entry: TemplateEntry,
    /// Position of the entry in the catalog.
    pub ordinal: usize,
    /// Combined weighted score.
    pub score: f32,
    /// Unweighted lexical channel score, in [0, 1].
    pub lexical_score: f32,
    /// Unweighted vector channel score, in [0, 1].
    pub vector_score: f32,
}

/// Ranks queries against a catalog index with fixed options.
///
/// Ranking is a pure computation over the immutable index: repeated calls
/// with the same query return the same ordered result, and one ranker may
/// serve concurrent callers.
#[derive(Debug, Clone)]
pub struct Ranker {
    options: RankOptions,
}

impl Ranker {
    /// Create a ranker, validating the options.
    pub fn new(options: RankOptions) -> Result<Self> {
        if options.top_n < 1 {
            return Err(Error::Config("top_n must be at least 1".to_string()));
        }
        if options.lexical_weight < 0.0 || options.vector_weight < 0.0 {
            return Err(Error::Config(format!(
                "similarity weights must be non-negative (lexical {}, vector {})",
                options.lexical_weight, options.vector_weight
            )));
        }
        Ok(Self { options })
    }

    /// Ranker with the default options (top 1, weights 0.8 / 0.2).
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            options: RankOptions::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    /// Score every catalog entry against the query and return the top
    /// matches by descending combined score. Equal scores keep catalog
    /// order.
    ///
    /// Both scoring channels compare the raw query against the raw
    /// templates; the `<*>` wildcard token is matched literally (see
    /// [`crate::lexical::normalize_wildcards`] for the regex-style rewrite
    /// available to callers, which deliberately does not feed scoring).
    pub fn rank(&self, query: &str, index: &CatalogIndex) -> Result<Vec<RankedMatch>> {
        if query.is_empty() {
            return Err(Error::InvalidQuery("query is empty".to_string()));
        }

        let vector_scores = index.vector_scores(query);
        if vector_scores.len() != index.len() {
            return Err(Error::Internal(format!(
                "vector scores length {} does not match catalog size {} for query {:?}",
                vector_scores.len(),
                index.len(),
                query
            )));
        }

        let mut matches: Vec<RankedMatch> = index
            .catalog()
            .entries()
            .iter()
            .zip(vector_scores)
            .enumerate()
            .map(|(ordinal, (entry, vector_score))| {
                let lexical_score = lexical_ratio(query, &entry.event_template);
                let score = self.options.lexical_weight * lexical_score
                    + self.options.vector_weight * vector_score;
                RankedMatch {
                    entry: entry.clone(),
                    ordinal,
                    score,
                    lexical_score,
                    vector_score,
                }
            })
            .collect();

        // Stable sort: ties keep the lower catalog ordinal first
        matches.sort_by_key(|m| Reverse(OrderedFloat(m.score)));
        matches.truncate(self.options.top_n.min(index.len()));

        debug!(
            query_len = query.len(),
            returned = matches.len(),
            "ranked query against catalog"
        );
        Ok(matches)
    }
}
