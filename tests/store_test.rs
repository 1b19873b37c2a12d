// Tests for snapshot loading and feedback persistence

use std::fs;

use curator::error::EngineError;
use curator::store::{load_catalog, load_feedback, FeedbackStore, JsonFeedbackStore};
use curator::types::RatingObservation;

#[test]
fn loads_catalog_from_json() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("catalog.json");
	fs::write(
		&path,
		r#"[
			{"id": "p1", "name": "Wireless Mouse", "tags": "electronics wireless mouse", "rating": 4.5, "review_count": 120},
			{"id": "p2", "name": "Keyboard", "tags": "electronics keyboard"}
		]"#,
	)
	.expect("write catalog");

	let catalog = load_catalog(&path).expect("load catalog");

	assert_eq!(catalog.len(), 2);
	assert_eq!(catalog[0].name, "Wireless Mouse");
	assert_eq!(catalog[0].review_count, 120);
	// Omitted fields default
	assert_eq!(catalog[1].rating, 0.0);
	assert!(catalog[1].brand.is_empty());
}

#[test]
fn malformed_catalog_is_a_parse_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("catalog.json");
	fs::write(&path, r#"{"not": "an array"}"#).expect("write catalog");

	let result = load_catalog(&path);

	assert!(matches!(result, Err(EngineError::SnapshotParse { .. })));
}

#[test]
fn missing_catalog_is_a_read_error() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("nope.json");

	let result = load_catalog(&path);

	assert!(matches!(result, Err(EngineError::SnapshotRead { .. })));
}

#[test]
fn missing_feedback_is_an_empty_snapshot() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("feedback.json");

	let feedback = load_feedback(&path).expect("load feedback");

	assert!(feedback.is_empty());
}

#[test]
fn upsert_inserts_then_updates() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("feedback.json");

	let mut store = JsonFeedbackStore::open(&path).expect("open store");
	store
		.upsert(RatingObservation {
			user_id: "u1".to_string(),
			item_id: "p1".to_string(),
			rating: 3.0,
		})
		.expect("insert");
	store
		.upsert(RatingObservation {
			user_id: "u1".to_string(),
			item_id: "p1".to_string(),
			rating: 5.0,
		})
		.expect("update");
	store
		.upsert(RatingObservation {
			user_id: "u2".to_string(),
			item_id: "p1".to_string(),
			rating: 2.0,
		})
		.expect("insert other user");

	let snapshot = store.snapshot();
	assert_eq!(snapshot.len(), 2);
	assert_eq!(snapshot[0].rating, 5.0);

	// Persisted: a reopened store sees the same observations
	let reopened = JsonFeedbackStore::open(&path).expect("reopen store");
	let snapshot = reopened.snapshot();
	assert_eq!(snapshot.len(), 2);
	assert_eq!(snapshot[0].rating, 5.0);
}

#[test]
fn upsert_rejects_invalid_ratings() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("feedback.json");
	let mut store = JsonFeedbackStore::open(&path).expect("open store");

	let negative = store.upsert(RatingObservation {
		user_id: "u1".to_string(),
		item_id: "p1".to_string(),
		rating: -1.0,
	});
	assert!(matches!(negative, Err(EngineError::InvalidInput { .. })));

	let nan = store.upsert(RatingObservation {
		user_id: "u1".to_string(),
		item_id: "p1".to_string(),
		rating: f32::NAN,
	});
	assert!(matches!(nan, Err(EngineError::InvalidInput { .. })));
}
