//! Serialized match output for callers and the downstream analysis service
//!
//! Provides the output structures a surrounding service forwards to its
//! explanation generator, exposing each matched template with its score.

use serde::Serialize;

use crate::rank::RankedMatch;

/// One ranked catalog entry as exposed to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Severity label of the matched template.
    pub level: String,
    /// Subsystem that emits the matched template.
    pub component: String,
    /// The matched message pattern, wildcard token included.
    pub event_template: String,
    /// Originating system tag.
    #[serde(rename = "type")]
    pub category: String,
    /// Combined similarity score.
    pub score: f32,
}

impl MatchRecord {
    /// Create a record from a ranked match.
    #[must_use]
    pub fn from_ranked(ranked: &RankedMatch) -> Self {
        Self {
            level: ranked.entry.level.clone(),
            component: ranked.entry.component.clone(),
            event_template: ranked.entry.event_template.clone(),
            category: ranked.entry.category.clone(),
            score: ranked.score,
        }
    }

    /// Create records from a list of ranked matches, preserving order.
    #[must_use]
    pub fn from_ranked_list(ranked: &[RankedMatch]) -> Vec<Self> {
        ranked.iter().map(Self::from_ranked).collect()
    }
}

/// Full classification payload for one query: the original message plus
/// its ranked matches, in descending score order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// The raw query string as received.
    pub error_message: String,
    /// Ranked matches, best first.
    pub matches: Vec<MatchRecord>,
}

impl MatchReport {
    /// Build a report from the ranker's output.
    #[must_use]
    pub fn new(error_message: impl Into<String>, ranked: &[RankedMatch]) -> Self {
        Self {
            error_message: error_message.into(),
            matches: MatchRecord::from_ranked_list(ranked),
        }
    }
}
