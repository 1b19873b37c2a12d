use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{DEFAULT_CATALOG, DEFAULT_FEEDBACK, DEFAULT_TOP_N};

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.usage(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "curator",
	author,
	version,
	about = "Hybrid content and collaborative recommendations for product catalogs",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {curator} {item}     {item_args}   {item_desc}
  {curator} {user}     {user_args}               {user_desc}
  {curator} {hybrid}   {hybrid_args}   {hybrid_desc}
  {curator} {trending} {trending_args}                    {trending_desc}
  {curator} {rate}     {rate_args}        {rate_desc}",
		title = "Examples:".bright_blue().bold(),
		curator = "curator".bright_blue(),
		item = "item".yellow(),
		item_args = "\"Wireless Mouse\" -n 5",
		item_desc = "Items similar by tag text".dimmed(),
		user = "user".yellow(),
		user_args = "u42 -n 5",
		user_desc = "Items liked by similar users".dimmed(),
		hybrid = "hybrid".yellow(),
		hybrid_args = "\"Wireless Mouse\" u42",
		hybrid_desc = "Merged content + collaborative".dimmed(),
		trending = "trending".yellow(),
		trending_args = "-n 8",
		trending_desc = "Top-rated catalog items".dimmed(),
		rate = "rate".yellow(),
		rate_args = "u42 p1001 4.5",
		rate_desc = "Record a rating".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Catalog snapshot (JSON array of items)
	#[arg(long = "catalog", global = true, default_value = DEFAULT_CATALOG)]
	pub catalog: PathBuf,

	/// Feedback snapshot (JSON array of ratings)
	#[arg(long = "feedback", global = true, default_value = DEFAULT_FEEDBACK)]
	pub feedback: PathBuf,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Recommend items similar to a catalog item (content-based)
	Item {
		/// Exact item title (case-sensitive)
		#[arg(value_name = "NAME")]
		name: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
		count: usize,
	},

	/// Recommend items liked by similar users (collaborative)
	User {
		/// User identifier
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
		count: usize,
	},

	/// Merged content-based and collaborative recommendations
	Hybrid {
		/// Exact item title (case-sensitive)
		#[arg(value_name = "NAME")]
		name: String,

		/// User identifier
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
		count: usize,
	},

	/// Show top-rated catalog items
	Trending {
		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
		count: usize,
	},

	/// Record a user rating for an item
	Rate {
		/// User identifier
		#[arg(value_name = "USER_ID")]
		user_id: String,

		/// Item identifier
		#[arg(value_name = "ITEM_ID")]
		item_id: String,

		/// Rating value (finite, >= 0)
		#[arg(value_name = "RATING")]
		rating: f32,
	},
}
