//! Curator - Hybrid catalog recommendations
//!
//! A command-line tool that recommends catalog items by content similarity
//! (TF-IDF over tag text), collaborative filtering (user-user similarity
//! over ratings), or a hybrid merge of both.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use curator::cli::{Cli, Command};
use curator::engine::Recommender;
use curator::logger::{self, log, Level};
use curator::store::{self, FeedbackStore, JsonFeedbackStore};
use curator::trending;
use curator::types::{ItemRecord, RatingObservation, Recommendation};

fn main() -> Result<()> {
	let cli = Cli::parse();

	logger::set_verbose(cli.verbose);

	match cli.command {
		Command::Item { name, count } => {
			let engine = load_engine(&cli.catalog, &cli.feedback)?;
			run_recommendation(&engine, count, &format!("items similar to {}", name.bright_blue()), || {
				engine.recommend_by_item(&name, count)
			})
		}
		Command::User { user_id, count } => {
			let engine = load_engine(&cli.catalog, &cli.feedback)?;
			run_recommendation(&engine, count, &format!("items for user {}", user_id.bright_blue()), || {
				engine.recommend_by_user(&user_id, count)
			})
		}
		Command::Hybrid { name, user_id, count } => {
			let engine = load_engine(&cli.catalog, &cli.feedback)?;
			let description = format!(
				"{} + user {}",
				name.bright_blue(),
				user_id.bright_blue()
			);
			run_recommendation(&engine, count, &description, || {
				engine.recommend_hybrid(&name, &user_id, count)
			})
		}
		Command::Trending { count } => run_trending(&cli.catalog, count),
		Command::Rate { user_id, item_id, rating } => {
			run_rate(&cli.feedback, user_id, item_id, rating)
		}
	}
}

fn load_engine(catalog_path: &Path, feedback_path: &Path) -> Result<Recommender> {
	let catalog = store::load_catalog(catalog_path)?;
	let feedback = store::load_feedback(feedback_path)?;
	log(
		Level::Debug,
		&format!("Loaded {} items, {} ratings", catalog.len(), feedback.len()),
	);
	Ok(Recommender::new(catalog, feedback))
}

fn run_recommendation<F>(
	engine: &Recommender,
	count: usize,
	description: &str,
	recommend: F,
) -> Result<()>
where
	F: FnOnce() -> Recommendation,
{
	print_header();
	log(Level::Info, &format!("Recommending: {}", description));

	let start = Instant::now();
	let result = recommend();
	let duration = start.elapsed().as_secs_f32();

	if !result.found {
		log(Level::Warning, "Not found in catalog or feedback");
		return Ok(());
	}

	if result.items.is_empty() {
		log(Level::Info, "No recommendations available");
		return Ok(());
	}

	log(Level::Success, &format!("Found {} recommendations", result.items.len()));
	println!();

	for (i, record) in result.items.iter().enumerate() {
		print_record(i, record);
	}

	logger::summary(result.items.len(), count, engine.catalog().len(), duration);
	Ok(())
}

fn run_trending(catalog_path: &Path, count: usize) -> Result<()> {
	print_header();

	let catalog = store::load_catalog(catalog_path)?;
	let top = trending::top_rated(&catalog, count);

	if top.is_empty() {
		log(Level::Warning, "Catalog is empty");
		return Ok(());
	}

	log(Level::Success, &format!("Top {} items by rating", top.len()));
	println!();

	for (i, record) in top.iter().enumerate() {
		print_record(i, record);
	}

	println!();
	Ok(())
}

fn run_rate(feedback_path: &Path, user_id: String, item_id: String, rating: f32) -> Result<()> {
	print_header();

	let mut feedback_store = JsonFeedbackStore::open(feedback_path)?;
	feedback_store.upsert(RatingObservation { user_id: user_id.clone(), item_id: item_id.clone(), rating })?;

	log(
		Level::Success,
		&format!("Recorded rating {} for {} by {}", rating, item_id.yellow(), user_id.bright_blue()),
	);
	Ok(())
}

fn print_record(index: usize, record: &ItemRecord) {
	let rank = format!("#{}", index + 1).bright_blue().bold();
	let rating = format!("{:.1}★", record.rating).yellow();
	let reviews = format!("({} reviews)", record.review_count).dimmed();

	if record.brand.is_empty() {
		println!("  {} {} {} {}", rank, record.name, rating, reviews);
	} else {
		println!("  {} {} {} {} {}", rank, record.name, record.brand.dimmed(), rating, reviews);
	}
}

fn print_header() {
	println!();
	println!(
		"{}",
		format!("─── Curator v{} ───", env!("CARGO_PKG_VERSION"))
			.bright_blue()
			.bold()
	);
}
