//! Core domain types
//!
//! This module defines the fundamental types used throughout Curator:
//! - `Item`: A catalog entry with tag text and quality signals
//! - `RatingObservation`: One (user, item, rating) feedback event
//! - `ItemRecord`: The displayed subset of an item in results
//! - `Recommendation`: An ordered result list with a found/not-found signal

use serde::{Deserialize, Serialize};

/// A catalog item as loaded from the catalog snapshot.
///
/// `name` is unique within the catalog and is the lookup key for
/// content-based recommendations. `tags` is free-form text used for
/// TF-IDF vectorization; everything else is display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub tags: String,
	#[serde(default)]
	pub brand: String,
	#[serde(default)]
	pub image_url: String,
	#[serde(default)]
	pub rating: f32,
	#[serde(default)]
	pub review_count: u32,
}

/// One user-item feedback event from the feedback snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingObservation {
	pub user_id: String,
	pub item_id: String,
	pub rating: f32,
}

/// The fields of an item shown in a recommendation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
	pub name: String,
	pub brand: String,
	pub rating: f32,
	pub review_count: u32,
	pub image_url: String,
}

impl ItemRecord {
	pub fn from_item(item: &Item) -> Self {
		Self {
			name: item.name.clone(),
			brand: item.brand.clone(),
			rating: item.rating,
			review_count: item.review_count,
			image_url: item.image_url.clone(),
		}
	}
}

/// An ordered recommendation list plus an explicit lookup signal.
///
/// A missing item title or user id is an expected client-input condition,
/// not a fault: it is reported as `found = false` with an empty list,
/// never as an error.
#[derive(Debug, Clone)]
pub struct Recommendation {
	pub items: Vec<ItemRecord>,
	pub found: bool,
}

impl Recommendation {
	pub fn found(items: Vec<ItemRecord>) -> Self {
		Self { items, found: true }
	}

	pub fn not_found() -> Self {
		Self { items: Vec::new(), found: false }
	}
}

/// Immutable catalog snapshot, ordered as loaded.
pub type CatalogSnapshot = Vec<Item>;

/// Immutable feedback snapshot, ordered as loaded.
pub type FeedbackSnapshot = Vec<RatingObservation>;
