// Similarity - Pairwise cosine similarity over row vectors
//
// Used in two modes: item-item over TF-IDF rows (content) and user-user
// over rating rows (collaborative). The output matrix preserves input row
// order, so callers can index it with the same indices as the input.

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when either vector has zero norm, by convention rather
/// than as a division-by-zero failure.
pub fn cosine(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
	let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

	if norm_a == 0.0 || norm_b == 0.0 {
		0.0
	} else {
		dot / (norm_a * norm_b)
	}
}

/// Full pairwise cosine similarity matrix over the rows of `m`.
///
/// The result is square, symmetric, and deterministic for a given input.
/// Diagonal entries are 1.0: self-similarity is definitional, so it is set
/// directly rather than computed, which also covers zero-norm rows.
/// Rows are computed in parallel.
pub fn pairwise_cosine(m: &Array2<f32>) -> Array2<f32> {
	let n = m.nrows();
	let norms: Vec<f32> = (0..n)
		.map(|i| m.row(i).iter().map(|x| x * x).sum::<f32>().sqrt())
		.collect();

	let rows: Vec<Vec<f32>> = (0..n)
		.into_par_iter()
		.map(|i| {
			(0..n)
				.map(|j| {
					if i == j {
						1.0
					} else if norms[i] == 0.0 || norms[j] == 0.0 {
						0.0
					} else {
						m.row(i).dot(&m.row(j)) / (norms[i] * norms[j])
					}
				})
				.collect()
		})
		.collect();

	let mut sim = Array2::<f32>::zeros((n, n));
	for (i, row) in rows.into_iter().enumerate() {
		for (j, value) in row.into_iter().enumerate() {
			sim[[i, j]] = value;
		}
	}

	sim
}
