//! # errx
//!
//! An error-template similarity engine.
//!
//! errx ranks a free-text error message against a fixed catalog of known
//! error templates and returns the best-matching entries. Scores blend a
//! character-level lexical ratio with TF-IDF cosine similarity over the
//! catalog's vector space.
//!
//! ## Quick Start
//!
//! ```rust
//! use errx::prelude::*;
//!
//! // Build the index once at startup
//! let catalog = Catalog::new(vec![
//!     TemplateEntry::new(
//!         "Got exception while serving blk_<*> to /<*>:",
//!         "WARN",
//!         "dfs.DataNode",
//!         "HDFS",
//!     ),
//!     TemplateEntry::new(
//!         "PacketResponder <*> for block blk_<*> terminating",
//!         "INFO",
//!         "dfs.DataNode",
//!         "HDFS",
//!     ),
//! ]).unwrap();
//! let index = CatalogIndex::build(catalog).unwrap();
//!
//! // Rank incoming messages against it
//! let ranker = Ranker::new(RankOptions::with_top_n(2)).unwrap();
//! let matches = ranker
//!     .rank("Got exception while serving blk_42 to /10.0.0.1:", &index)
//!     .unwrap();
//! assert_eq!(matches[0].entry.level, "WARN");
//!
//! // Hand the serialized result to the downstream analysis service
//! let report = MatchReport::new("Got exception while serving blk_42 to /10.0.0.1:", &matches);
//! let prompt = analysis_prompt(&report.error_message, &report.matches);
//! assert!(prompt.contains("dfs.DataNode"));
//! ```
//!
//! ## Crate Structure
//!
//! errx is composed of two crates:
//!
//! - `errx-core` - Catalog model, CSV loading, TF-IDF vector space
//! - `errx-similarity` - Blended ranking, match reports, analysis prompt
//!
//! ## Features
//!
//! - **Blended Scoring**: weighted lexical + vector-space similarity
//! - **Build Once, Query Forever**: the index is immutable after startup
//!   and safe to share across threads without locking
//! - **Deterministic Ranking**: stable descending sort, catalog order on ties
//! - **Typed Errors**: configuration, query, and internal failures are
//!   distinct and never silently swallowed

// Re-export core types
pub use errx_core::{Catalog, CatalogIndex, Error, Result, TemplateEntry, TfIdfModel, WILDCARD};

// Re-export ranking
pub use errx_similarity::{
    analysis_prompt, lexical_ratio, normalize_wildcards, MatchRecord, MatchReport, RankOptions,
    RankedMatch, Ranker,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analysis_prompt, lexical_ratio, normalize_wildcards, Catalog, CatalogIndex, Error,
        MatchRecord, MatchReport, RankOptions, RankedMatch, Ranker, Result, TemplateEntry,
        TfIdfModel, WILDCARD,
    };
}
