// Vectorizer - TF-IDF term vectors over item tag text
//
// Tokenizes each item's tag string, removes English stop words, and weights
// terms with smoothed TF-IDF:
//
//   weight(t, d) = tf(t, d) * (ln((1 + N) / (1 + df(t))) + 1)
//
// These are the sklearn smoothing constants, chosen so that scores (not
// just their ranking) are reproducible against the reference behavior.
// Rows are L2-normalized so cosine similarity reduces to a dot product.

use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::config::MIN_DF_CORPUS;

/// Common English function words removed before counting.
const STOP_WORDS: &[&str] = &[
	"a", "about", "above", "after", "again", "all", "am", "an", "and", "any",
	"are", "as", "at", "be", "because", "been", "before", "being", "below",
	"between", "both", "but", "by", "can", "did", "do", "does", "doing",
	"down", "during", "each", "few", "for", "from", "further", "had", "has",
	"have", "having", "he", "her", "here", "hers", "him", "his", "how", "i",
	"if", "in", "into", "is", "it", "its", "just", "me", "more", "most",
	"my", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
	"or", "other", "our", "out", "over", "own", "same", "she", "so", "some",
	"such", "than", "that", "the", "their", "them", "then", "there", "these",
	"they", "this", "those", "through", "to", "too", "under", "until", "up",
	"very", "was", "we", "were", "what", "when", "where", "which", "while",
	"who", "whom", "why", "will", "with", "you", "your", "yours",
];

fn stop_words() -> &'static HashSet<&'static str> {
	static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
	SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// TF-IDF weighted term vectors for one catalog snapshot.
///
/// Every row has the same dimensionality (the shared vocabulary) and is
/// L2-normalized. Items with empty tag text get a zero row, which has zero
/// similarity to everything downstream.
pub struct TfidfMatrix {
	/// Items x vocabulary, L2-normalized rows
	pub weights: Array2<f32>,
	/// Term for each column, in column order
	pub vocabulary: Vec<String>,
}

impl TfidfMatrix {
	pub fn n_items(&self) -> usize {
		self.weights.nrows()
	}

	pub fn n_terms(&self) -> usize {
		self.weights.ncols()
	}
}

/// Lowercases and splits on non-alphanumeric boundaries, dropping stop words.
fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| !c.is_alphanumeric())
		.filter(|t| !t.is_empty())
		.filter(|t| !stop_words().contains(t))
		.map(str::to_string)
		.collect()
}

/// Builds the TF-IDF matrix for a corpus of tag-text documents.
///
/// Pure function of the input: identical documents in identical order
/// produce an identical matrix. The vocabulary is the set of distinct
/// non-stop-word terms, sorted for a deterministic column order. Terms
/// appearing in a single document are dropped once the corpus reaches
/// `MIN_DF_CORPUS` documents; below that every term is kept.
pub fn vectorize(documents: &[&str]) -> TfidfMatrix {
	let n_docs = documents.len();
	let doc_tokens: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

	// Document frequency per term
	let mut doc_freq: HashMap<&str, usize> = HashMap::new();
	for tokens in &doc_tokens {
		let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
		for term in unique {
			*doc_freq.entry(term).or_insert(0) += 1;
		}
	}

	let min_df = if n_docs >= MIN_DF_CORPUS { 2 } else { 1 };
	let mut vocabulary: Vec<String> = doc_freq
		.iter()
		.filter(|(_, &df)| df >= min_df)
		.map(|(&term, _)| term.to_string())
		.collect();
	vocabulary.sort();

	let term_index: HashMap<&str, usize> = vocabulary
		.iter()
		.enumerate()
		.map(|(i, t)| (t.as_str(), i))
		.collect();

	let mut weights = Array2::<f32>::zeros((n_docs, vocabulary.len()));

	for (row, tokens) in doc_tokens.iter().enumerate() {
		let mut counts: HashMap<&str, f32> = HashMap::new();
		for token in tokens {
			*counts.entry(token.as_str()).or_insert(0.0) += 1.0;
		}

		for (term, tf) in counts {
			let Some(&col) = term_index.get(term) else { continue };
			let df = doc_freq[term] as f32;
			let idf = ((1.0 + n_docs as f32) / (1.0 + df)).ln() + 1.0;
			weights[[row, col]] = tf * idf;
		}

		// L2-normalize the row; empty documents stay all-zero
		let norm: f32 = weights.row(row).iter().map(|w| w * w).sum::<f32>().sqrt();
		if norm > 0.0 {
			for w in weights.row_mut(row).iter_mut() {
				*w /= norm;
			}
		}
	}

	TfidfMatrix { weights, vocabulary }
}
