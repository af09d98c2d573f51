//! # errx Similarity
//!
//! Blended similarity ranking for the errx engine.
//!
//! This crate scores a free-text error message against every entry of a
//! [`CatalogIndex`](errx_core::CatalogIndex) and returns the top-N
//! matches, combining two channels:
//!
//! - **Lexical**: character-level sequence-matcher ratio between the query
//!   and each template
//! - **Vector**: TF-IDF cosine similarity from the catalog index
//!
//! ## Example
//!
//! ```rust
//! use errx_core::{Catalog, CatalogIndex, TemplateEntry};
//! use errx_similarity::{MatchReport, RankOptions, Ranker};
//!
//! let catalog = Catalog::new(vec![
//!     TemplateEntry::new(
//!         "Got exception while serving blk_<*> to /<*>:",
//!         "WARN",
//!         "dfs.DataNode",
//!         "HDFS",
//!     ),
//! ]).unwrap();
//! let index = CatalogIndex::build(catalog).unwrap();
//!
//! let ranker = Ranker::new(RankOptions::default()).unwrap();
//! let matches = ranker
//!     .rank("Got exception while serving blk_42 to /10.0.0.1:", &index)
//!     .unwrap();
//!
//! let report = MatchReport::new("Got exception while serving blk_42 to /10.0.0.1:", &matches);
//! assert_eq!(report.matches.len(), 1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │   Catalog   │────>│ CatalogIndex │  (errx-core)
//! │  (entries)  │     │   (TF-IDF)   │
//! └─────────────┘     └──────────────┘
//!                            │
//!                     ┌──────────────┐     ┌──────────────┐
//!        query ──────>│    Ranker    │────>│ MatchReport  │
//!                     │ (lex + cos)  │     │  / prompt    │
//!                     └──────────────┘     └──────────────┘
//! ```

pub mod lexical;
pub mod prompt;
pub mod rank;
pub mod report;

// Re-export main types for convenience
pub use lexical::{lexical_ratio, normalize_wildcards, MATCH_ANY};
pub use prompt::analysis_prompt;
pub use rank::{RankOptions, RankedMatch, Ranker};
pub use report::{MatchRecord, MatchReport};
