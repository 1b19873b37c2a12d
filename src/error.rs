//! Error types for the recommendation engine
//!
//! Structured errors using thiserror. A missing item title or user id is
//! not an error (see `types::Recommendation`); these variants cover real
//! faults: unreadable or malformed snapshots and rejected input values.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
	#[error("Failed to read snapshot '{path}': {source}")]
	SnapshotRead {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("Failed to parse snapshot '{path}': {source}")]
	SnapshotParse {
		path: PathBuf,
		source: serde_json::Error,
	},

	#[error("Failed to write feedback store '{path}': {source}")]
	FeedbackWrite {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("Invalid input: {reason}")]
	InvalidInput { reason: String },
}
