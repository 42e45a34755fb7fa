use std::collections::BTreeMap;

use crate::core::tokenizer::tokenize;

/// Sparse L2-normalised TF-IDF vector, keyed by term in sorted order
pub type TermVector = BTreeMap<String, f64>;

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
#[inline]
pub fn smoothed_idf(num_docs: usize, doc_frequency: usize) -> f64 {
    ((1.0 + num_docs as f64) / (1.0 + doc_frequency as f64)).ln() + 1.0
}

/// TF-IDF vector space fitted over a small corpus
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    idf: BTreeMap<String, f64>,
}

impl TfIdfModel {
    /// Fit IDF weights over the given corpus
    pub fn fit(corpus: &[Vec<String>]) -> Self {
        let mut doc_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in corpus {
            let mut seen: Vec<&str> = tokens.iter().map(String::as_str).collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let num_docs = corpus.len();
        let idf = doc_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), smoothed_idf(num_docs, df)))
            .collect();

        Self { idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Weight a tokenized document; the result is unit length or empty
    pub fn transform(&self, tokens: &[String]) -> TermVector {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut vector: TermVector = counts
            .into_iter()
            .filter_map(|(term, count)| {
                self.idf
                    .get(term)
                    .map(|idf| (term.to_string(), count as f64 * idf))
            })
            .collect();

        let norm = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in vector.values_mut() {
                *weight /= norm;
            }
        }

        vector
    }
}

/// Cosine similarity of two normalised vectors, clamped to [0, 1]
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|v| w * v))
        .sum();
    dot.clamp(0.0, 1.0)
}

/// Score each document against the query.
///
/// The corpus is the query plus every document; `scores[i]` belongs to
/// `documents[i]`. Pure function: same input, same bits out.
pub fn similarity_scores<S: AsRef<str>>(query: &str, documents: &[S]) -> Vec<f64> {
    if documents.is_empty() {
        return Vec::new();
    }

    let corpus: Vec<Vec<String>> = std::iter::once(query)
        .chain(documents.iter().map(|doc| doc.as_ref()))
        .map(tokenize)
        .collect();

    let model = TfIdfModel::fit(&corpus);
    let query_vector = model.transform(&corpus[0]);

    corpus[1..]
        .iter()
        .map(|tokens| cosine_similarity(&query_vector, &model.transform(tokens)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_documents_yields_empty() {
        let docs: [&str; 0] = [];
        assert!(similarity_scores("python backend", &docs).is_empty());
    }

    #[test]
    fn test_scores_align_with_documents() {
        let scores = similarity_scores(
            "Need Python backend engineer",
            &["Experienced Python backend developer", "Frontend designer"],
        );
        assert_eq!(scores.len(), 2);
        assert!(scores[0] > scores[1]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_identical_text_scores_highest() {
        let query = "distributed systems engineer with rust experience";
        let scores = similarity_scores(
            query,
            &[
                "rust engineer",
                query,
                "systems programming in rust and c",
                "marketing lead",
            ],
        );
        assert!((scores[1] - 1.0).abs() < 1e-9);
        for (i, score) in scores.iter().enumerate() {
            if i != 1 {
                assert!(*score < scores[1], "doc {} scored {}", i, score);
            }
        }
    }

    #[test]
    fn test_empty_texts_score_zero() {
        let scores = similarity_scores("rust developer", &["", "rust"]);
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.0);

        let scores = similarity_scores("", &["rust developer", ""]);
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let scores = similarity_scores(
            "data data data engineer",
            &["data", "engineer engineer", "data engineer", "unrelated words"],
        );
        for score in scores {
            assert!((0.0..=1.0).contains(&score));
        }
    }

    #[test]
    fn test_deterministic_bits() {
        let docs = [
            "Experienced Python backend developer",
            "Python data scientist, backend curious",
            "Frontend designer",
        ];
        let first = similarity_scores("Need Python backend engineer", &docs);
        let second = similarity_scores("Need Python backend engineer", &docs);
        let first_bits: Vec<u64> = first.iter().map(|s| s.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|s| s.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_smoothed_idf() {
        // Term in every document keeps weight 1
        assert!((smoothed_idf(3, 3) - 1.0).abs() < 1e-12);
        // Rarer terms weigh more
        assert!(smoothed_idf(3, 1) > smoothed_idf(3, 2));
        assert!((smoothed_idf(3, 1) - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_unit_length() {
        let corpus = vec![tokenize("rust rust go"), tokenize("go python")];
        let model = TfIdfModel::fit(&corpus);
        assert_eq!(model.vocabulary_size(), 3);

        let vector = model.transform(&corpus[0]);
        let norm: f64 = vector.values().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);

        assert!(model.transform(&[]).is_empty());
    }
}
