// Feedback - User-item rating matrix built from feedback observations
//
// Rows are users and columns are items, both in first-appearance order so
// the matrix is deterministic for a given snapshot. Duplicate (user, item)
// pairs are aggregated by mean. A presence mask records which cells were
// actually observed: "rated" is defined by the mask, never by the cell
// value, so a genuine 0.0 rating is still treated as rated.

use ndarray::Array2;
use std::collections::HashMap;

use crate::types::RatingObservation;

pub struct UserItemMatrix {
	/// Users x items, mean-aggregated ratings, 0.0 where unobserved
	pub ratings: Array2<f32>,
	/// True where a (user, item) pair was observed at least once
	pub rated: Array2<bool>,
	/// Row labels, first-appearance order
	pub users: Vec<String>,
	/// Column labels, first-appearance order
	pub items: Vec<String>,
}

impl UserItemMatrix {
	pub fn from_observations(observations: &[RatingObservation]) -> Self {
		let mut users: Vec<String> = Vec::new();
		let mut items: Vec<String> = Vec::new();
		let mut user_index: HashMap<&str, usize> = HashMap::new();
		let mut item_index: HashMap<&str, usize> = HashMap::new();

		for obs in observations {
			if !user_index.contains_key(obs.user_id.as_str()) {
				user_index.insert(obs.user_id.as_str(), users.len());
				users.push(obs.user_id.clone());
			}
			if !item_index.contains_key(obs.item_id.as_str()) {
				item_index.insert(obs.item_id.as_str(), items.len());
				items.push(obs.item_id.clone());
			}
		}

		// Sum and count per cell, then take the mean
		let mut sums: HashMap<(usize, usize), (f32, u32)> = HashMap::new();
		for obs in observations {
			let row = user_index[obs.user_id.as_str()];
			let col = item_index[obs.item_id.as_str()];
			let entry = sums.entry((row, col)).or_insert((0.0, 0));
			entry.0 += obs.rating;
			entry.1 += 1;
		}

		let mut ratings = Array2::<f32>::zeros((users.len(), items.len()));
		let mut rated = Array2::from_elem((users.len(), items.len()), false);

		for ((row, col), (sum, count)) in sums {
			ratings[[row, col]] = sum / count as f32;
			rated[[row, col]] = true;
		}

		Self { ratings, rated, users, items }
	}

	/// Row index of a user id, if present.
	pub fn user_index(&self, user_id: &str) -> Option<usize> {
		self.users.iter().position(|u| u == user_id)
	}

	pub fn n_users(&self) -> usize {
		self.users.len()
	}

	pub fn n_items(&self) -> usize {
		self.items.len()
	}
}
