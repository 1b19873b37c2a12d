// Trending - Top-rated catalog items for the landing view

use crate::types::{Item, ItemRecord};

/// Items ranked by rating descending, then review count descending,
/// ties kept in catalog order.
pub fn top_rated(catalog: &[Item], n: usize) -> Vec<ItemRecord> {
	let mut ranked: Vec<&Item> = catalog.iter().collect();
	ranked.sort_by(|a, b| {
		b.rating
			.partial_cmp(&a.rating)
			.unwrap_or(std::cmp::Ordering::Equal)
			.then(b.review_count.cmp(&a.review_count))
	});
	ranked.into_iter().take(n).map(ItemRecord::from_item).collect()
}
