//! # errx Core
//!
//! Core library for the errx error-template similarity engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`TemplateEntry`] - One catalog row: an error-message pattern plus metadata
//! - [`Catalog`] - Immutable ordered catalog, loaded from a delimited file
//! - [`TfIdfModel`] - Fitted TF-IDF vector space with cosine scoring
//! - [`CatalogIndex`] - Catalog plus its vector-space model, built once at startup
//!
//! ## Example
//!
//! ```rust
//! use errx_core::{Catalog, CatalogIndex, TemplateEntry};
//!
//! let catalog = Catalog::new(vec![
//!     TemplateEntry::new(
//!         "Got exception while serving blk_<*> to /<*>:",
//!         "WARN",
//!         "dfs.DataNode",
//!         "HDFS",
//!     ),
//! ]).unwrap();
//!
//! let index = CatalogIndex::build(catalog).unwrap();
//! let scores = index.vector_scores("Got exception while serving blk_42 to /10.0.0.1:");
//! assert_eq!(scores.len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod index;
pub mod template;
pub mod tfidf;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use index::CatalogIndex;
pub use template::{TemplateEntry, WILDCARD};
pub use tfidf::TfIdfModel;
