//! The catalog index: templates plus their fitted vector-space model

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::template::TemplateEntry;
use crate::tfidf::TfIdfModel;

/// The template catalog together with its fitted TF-IDF model.
///
/// Built exactly once at startup and read-only afterwards. Ranking calls
/// may share one instance across threads without coordination; there is no
/// interior mutability anywhere in the index.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    catalog: Catalog,
    model: TfIdfModel,
}

impl CatalogIndex {
    /// Fit the vector-space model over the full catalog.
    ///
    /// Performs no external I/O; loading the catalog from its source is
    /// the caller's job.
    pub fn build(catalog: Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::Config("cannot index an empty catalog".to_string()));
        }

        let templates: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.event_template.as_str())
            .collect();
        let model = TfIdfModel::fit(&templates);

        debug!(
            templates = catalog.len(),
            vocabulary = model.vocabulary_size(),
            "catalog index built"
        );
        Ok(Self { catalog, model })
    }

    /// Vector-space similarity of the query against every catalog entry,
    /// in catalog order. Every value lies in [0, 1].
    #[must_use]
    pub fn vector_scores(&self, query: &str) -> Vec<f32> {
        self.model.cosine_scores(query)
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&TemplateEntry> {
        self.catalog.get(ordinal)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> Catalog {
        Catalog::new(vec![
            TemplateEntry::new("Receiving block blk_<*> src: /<*> dest: /<*>", "INFO", "dfs.DataNode", "HDFS"),
            TemplateEntry::new("Got exception while serving blk_<*> to /<*>:", "WARN", "dfs.DataNode", "HDFS"),
            TemplateEntry::new("PacketResponder <*> for block blk_<*> terminating", "INFO", "dfs.DataNode", "HDFS"),
        ])
        .unwrap()
    }

    #[test]
    fn test_build_and_score_in_catalog_order() {
        let index = CatalogIndex::build(small_catalog()).unwrap();

        let scores = index.vector_scores("Got exception while serving blk_123 to /10.0.0.1:");
        assert_eq!(scores.len(), index.len());

        // The exception template shares the most terms with the query
        assert!(scores[1] > scores[0]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn test_scores_are_pure() {
        let index = CatalogIndex::build(small_catalog()).unwrap();

        let first = index.vector_scores("serving block");
        let second = index.vector_scores("serving block");
        assert_eq!(first, second);
    }

    #[test]
    fn test_entries_reachable_by_ordinal() {
        let index = CatalogIndex::build(small_catalog()).unwrap();
        assert_eq!(index.get(1).unwrap().level, "WARN");
        assert!(index.get(3).is_none());
    }
}
