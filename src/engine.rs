// Engine - Hybrid recommender over catalog and feedback snapshots
//
// Snapshots are injected at construction (never read from ambient global
// state) and are immutable for the life of the engine, so every request is
// a pure function of them and concurrent requests need no coordination.
// The content similarity matrix is built lazily on first use and shared by
// all subsequent requests; swapping catalogs means constructing a new
// engine, which is the invalidation path.

use ndarray::Array2;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::feedback::UserItemMatrix;
use crate::similarity::pairwise_cosine;
use crate::types::{CatalogSnapshot, FeedbackSnapshot, ItemRecord, Recommendation};
use crate::vectorizer::vectorize;

pub struct Recommender {
	catalog: CatalogSnapshot,
	feedback: FeedbackSnapshot,
	content_similarity: OnceLock<Array2<f32>>,
}

impl Recommender {
	pub fn new(catalog: CatalogSnapshot, feedback: FeedbackSnapshot) -> Self {
		Self {
			catalog,
			feedback,
			content_similarity: OnceLock::new(),
		}
	}

	pub fn catalog(&self) -> &CatalogSnapshot {
		&self.catalog
	}

	/// Content-based recommendations for an exact item title.
	///
	/// The queried item itself is always excluded, even though its
	/// self-similarity of 1.0 would otherwise rank first. Ties are broken
	/// by original catalog order (stable sort). An unknown title yields
	/// `found = false`, never an error; `top_n = 0` yields an empty list
	/// with `found = true`.
	pub fn recommend_by_item(&self, item_name: &str, top_n: usize) -> Recommendation {
		let Some(index) = self.catalog.iter().position(|i| i.name == item_name) else {
			return Recommendation::not_found();
		};

		let similarity = self.content_similarity();
		let row = similarity.row(index);

		let mut ranked: Vec<(usize, f32)> = (0..self.catalog.len())
			.filter(|&j| j != index)
			.map(|j| (j, row[j]))
			.collect();
		ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

		let items = ranked
			.into_iter()
			.take(top_n)
			.map(|(j, _)| ItemRecord::from_item(&self.catalog[j]))
			.collect();

		Recommendation::found(items)
	}

	/// Collaborative-filtering recommendations for a user id.
	///
	/// Neighbors are ranked by user-user cosine similarity descending
	/// (self excluded, ties kept in matrix row order). Ranked neighbors are
	/// walked in order, collecting items the neighbor rated that the target
	/// has not, until `top_n` unique items are found or neighbors run out.
	/// Items contributed by one neighbor keep matrix column order.
	pub fn recommend_by_user(&self, user_id: &str, top_n: usize) -> Recommendation {
		let matrix = UserItemMatrix::from_observations(&self.feedback);
		let Some(target) = matrix.user_index(user_id) else {
			return Recommendation::not_found();
		};

		if top_n == 0 {
			return Recommendation::found(Vec::new());
		}

		let similarity = pairwise_cosine(&matrix.ratings);
		let row = similarity.row(target);

		let mut neighbors: Vec<(usize, f32)> = (0..matrix.n_users())
			.filter(|&u| u != target)
			.map(|u| (u, row[u]))
			.collect();
		neighbors.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

		let mut picked: Vec<usize> = Vec::new();
		let mut items: Vec<ItemRecord> = Vec::new();
		'walk: for (neighbor, _) in neighbors {
			for col in 0..matrix.n_items() {
				if matrix.rated[[neighbor, col]]
					&& !matrix.rated[[target, col]]
					&& !picked.contains(&col)
				{
					// Feedback may reference items no longer in the catalog;
					// those are skipped without consuming a result slot.
					let Some(record) = self.record_for_item_id(&matrix.items[col]) else {
						continue;
					};
					picked.push(col);
					items.push(record);
					if items.len() == top_n {
						break 'walk;
					}
				}
			}
		}

		Recommendation::found(items)
	}

	/// Hybrid merge of the content and collaborative paths.
	///
	/// Both paths run with the same `top_n`; results are concatenated
	/// content-first, de-duplicated by item name preserving first-seen
	/// order, and truncated to `top_n`. If one path finds nothing the
	/// other half is still returned; `found` is false only when both
	/// lookups missed.
	pub fn recommend_hybrid(&self, item_name: &str, user_id: &str, top_n: usize) -> Recommendation {
		let content = self.recommend_by_item(item_name, top_n);
		let collaborative = self.recommend_by_user(user_id, top_n);
		let found = content.found || collaborative.found;

		let mut seen: HashSet<String> = HashSet::new();
		let mut merged: Vec<ItemRecord> = Vec::new();
		for record in content.items.into_iter().chain(collaborative.items) {
			if seen.insert(record.name.clone()) {
				merged.push(record);
			}
		}
		merged.truncate(top_n);

		Recommendation { items: merged, found }
	}

	/// The item-item similarity matrix for the catalog, built once on
	/// first use. The snapshot never changes after construction, so one
	/// build serves every request on this engine.
	fn content_similarity(&self) -> &Array2<f32> {
		self.content_similarity.get_or_init(|| {
			let documents: Vec<&str> = self.catalog.iter().map(|i| i.tags.as_str()).collect();
			let tfidf = vectorize(&documents);
			pairwise_cosine(&tfidf.weights)
		})
	}

	/// Resolves a feedback item id against the catalog. Feedback may
	/// reference items no longer in the catalog; those are skipped since
	/// there is nothing to display for them.
	fn record_for_item_id(&self, item_id: &str) -> Option<ItemRecord> {
		self.catalog
			.iter()
			.find(|i| i.id == item_id)
			.map(ItemRecord::from_item)
	}
}
