// Tests for trending ranking

use curator::trending::top_rated;
use curator::types::Item;

fn item(name: &str, rating: f32, review_count: u32) -> Item {
	Item {
		id: name.to_lowercase().replace(' ', "-"),
		name: name.to_string(),
		tags: String::new(),
		brand: String::new(),
		image_url: String::new(),
		rating,
		review_count,
	}
}

#[test]
fn ranks_by_rating_descending() {
	let catalog = vec![
		item("Middling", 3.5, 100),
		item("Best", 4.8, 10),
		item("Worst", 2.0, 9000),
	];

	let top = top_rated(&catalog, 10);

	let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
	assert_eq!(names, vec!["Best", "Middling", "Worst"]);
}

#[test]
fn rating_ties_fall_back_to_review_count() {
	let catalog = vec![
		item("Few Reviews", 4.5, 12),
		item("Many Reviews", 4.5, 3400),
	];

	let top = top_rated(&catalog, 10);

	let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
	assert_eq!(names, vec!["Many Reviews", "Few Reviews"]);
}

#[test]
fn full_ties_keep_catalog_order() {
	let catalog = vec![
		item("First", 4.0, 50),
		item("Second", 4.0, 50),
		item("Third", 4.0, 50),
	];

	let top = top_rated(&catalog, 10);

	let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
	assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn truncates_to_requested_count() {
	let catalog = vec![
		item("A", 4.0, 1),
		item("B", 3.0, 1),
		item("C", 2.0, 1),
	];

	assert_eq!(top_rated(&catalog, 2).len(), 2);
	assert!(top_rated(&catalog, 0).is_empty());
}
