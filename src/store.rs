// Store - JSON snapshot loading and feedback persistence
//
// The engine only ever sees immutable snapshots; this module is the thin
// plumbing that produces them. Feedback writes go through the
// FeedbackStore trait so the engine never depends on how ratings are
// persisted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;
use crate::types::{CatalogSnapshot, FeedbackSnapshot, RatingObservation};

/// Loads a catalog snapshot from a JSON array of items.
pub fn load_catalog(path: &Path) -> Result<CatalogSnapshot, EngineError> {
	let content = fs::read_to_string(path).map_err(|source| EngineError::SnapshotRead {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_str(&content).map_err(|source| EngineError::SnapshotParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Loads a feedback snapshot from a JSON array of rating observations.
/// A missing file is an empty snapshot, not an error: a fresh install has
/// no feedback yet.
pub fn load_feedback(path: &Path) -> Result<FeedbackSnapshot, EngineError> {
	if !path.exists() {
		return Ok(Vec::new());
	}
	let content = fs::read_to_string(path).map_err(|source| EngineError::SnapshotRead {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_str(&content).map_err(|source| EngineError::SnapshotParse {
		path: path.to_path_buf(),
		source,
	})
}

/// Persistence interface for feedback ratings.
///
/// Upsert semantics: a rating for an already-observed (user, item) pair
/// replaces the stored value, otherwise a new observation is appended.
pub trait FeedbackStore {
	fn upsert(&mut self, observation: RatingObservation) -> Result<(), EngineError>;
	fn snapshot(&self) -> FeedbackSnapshot;
}

/// File-backed feedback store over the same JSON format the loader reads.
pub struct JsonFeedbackStore {
	path: PathBuf,
	observations: Vec<RatingObservation>,
}

impl JsonFeedbackStore {
	pub fn open(path: &Path) -> Result<Self, EngineError> {
		let observations = load_feedback(path)?;
		Ok(Self {
			path: path.to_path_buf(),
			observations,
		})
	}

	fn persist(&self) -> Result<(), EngineError> {
		let json = serde_json::to_string_pretty(&self.observations).map_err(|source| {
			EngineError::SnapshotParse {
				path: self.path.clone(),
				source,
			}
		})?;
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent).map_err(|source| EngineError::FeedbackWrite {
					path: self.path.clone(),
					source,
				})?;
			}
		}
		fs::write(&self.path, json).map_err(|source| EngineError::FeedbackWrite {
			path: self.path.clone(),
			source,
		})
	}
}

impl FeedbackStore for JsonFeedbackStore {
	fn upsert(&mut self, observation: RatingObservation) -> Result<(), EngineError> {
		if !observation.rating.is_finite() || observation.rating < 0.0 {
			return Err(EngineError::InvalidInput {
				reason: format!("rating must be finite and >= 0, got {}", observation.rating),
			});
		}

		let existing = self.observations.iter_mut().find(|o| {
			o.user_id == observation.user_id && o.item_id == observation.item_id
		});

		match existing {
			Some(stored) => stored.rating = observation.rating,
			None => self.observations.push(observation),
		}

		self.persist()
	}

	fn snapshot(&self) -> FeedbackSnapshot {
		self.observations.clone()
	}
}
