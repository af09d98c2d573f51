// Term-frequency / inverse-document-frequency vector space over the catalog
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A fitted TF-IDF model: vocabulary, per-term smoothed IDF weights, and
/// one L2-normalized sparse weight vector per fitted document.
///
/// The model is fitted exactly once over the full document set and never
/// updated incrementally; changing the documents means refitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfModel {
    // term -> column in the vector space
    vocabulary: AHashMap<String, usize>,
    // column -> smoothed inverse document frequency
    idf: Vec<f32>,
    // per-document sparse unit vectors, (column, weight) sorted by column
    doc_vectors: Vec<Vec<(usize, f32)>>,
}

impl TfIdfModel {
    /// Tokenize text for vectorization.
    /// Lowercases, splits on word boundaries (anything that is neither
    /// alphanumeric nor `_`), and drops single-character tokens.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() > 1)
            .map(|s| s.to_string())
            .collect()
    }

    /// Fit a model over the given documents, in order.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let total_docs = documents.len();

        // Per-document term counts and corpus document frequencies
        let mut doc_terms: Vec<AHashMap<String, u32>> = Vec::with_capacity(total_docs);
        let mut term_dfs: AHashMap<String, u32> = AHashMap::new();
        for doc in documents {
            let mut counts: AHashMap<String, u32> = AHashMap::new();
            for token in Self::tokenize(doc.as_ref()) {
                *counts.entry(token).or_insert(0) += 1;
            }
            for term in counts.keys() {
                *term_dfs.entry(term.clone()).or_insert(0) += 1;
            }
            doc_terms.push(counts);
        }

        // Sorted terms give a deterministic column order
        let mut terms: Vec<String> = term_dfs.keys().cloned().collect();
        terms.sort();
        let vocabulary: AHashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.clone(), column))
            .collect();

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1
        let n = total_docs as f32;
        let mut idf = vec![0.0f32; terms.len()];
        for (column, term) in terms.iter().enumerate() {
            let df = term_dfs[term] as f32;
            idf[column] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        let doc_vectors = doc_terms
            .into_iter()
            .map(|counts| {
                let mut vector: Vec<(usize, f32)> = counts
                    .into_iter()
                    .map(|(term, tf)| {
                        let column = vocabulary[&term];
                        (column, tf as f32 * idf[column])
                    })
                    .collect();
                vector.sort_unstable_by_key(|&(column, _)| column);
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        Self {
            vocabulary,
            idf,
            doc_vectors,
        }
    }

    /// Map a query into the fitted vector space.
    ///
    /// Out-of-vocabulary terms are ignored; a query with no known terms
    /// yields the zero vector.
    pub fn transform(&self, query: &str) -> Vec<(usize, f32)> {
        let mut counts: AHashMap<usize, u32> = AHashMap::new();
        for token in Self::tokenize(query) {
            if let Some(&column) = self.vocabulary.get(&token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let mut vector: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(column, tf)| (column, tf as f32 * self.idf[column]))
            .collect();
        vector.sort_unstable_by_key(|&(column, _)| column);
        l2_normalize(&mut vector);
        vector
    }

    /// Cosine similarity of the query against every fitted document, in
    /// fit order. Both sides are unit vectors, so each score is the plain
    /// sparse dot product and lies in [0, 1].
    pub fn cosine_scores(&self, query: &str) -> Vec<f32> {
        let query_vector = self.transform(query);
        self.doc_vectors
            .iter()
            .map(|doc| sparse_dot(&query_vector, doc))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc_vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc_vectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Scale a sparse vector to unit L2 norm. The zero vector is left as-is.
fn l2_normalize(vector: &mut [(usize, f32)]) {
    let norm = vector.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sparse vectors sorted by column.
fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let mut sum = 0.0f32;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
