// Logger - Colored console output with timestamps

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

#[derive(Clone, Copy)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

/// Prints a timestamped, colored log message to stdout.
pub fn log(level: Level, message: &str) {
	if matches!(level, Level::Debug) && !VERBOSE.load(Ordering::Relaxed) {
		return;
	}
	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	let icon = match level {
		Level::Info =>    "ℹ".blue().bold(),
		Level::Success => "✔".bright_green().bold(),
		Level::Warning => "⚠".yellow().bold(),
		Level::Error =>   "✘".red().bold(),
		Level::Debug =>   "⚙".bright_blue().bold(),
	};
	println!("[{}] {} {}", time, icon, message);
}

/// Prints a section header with visual separation.
pub fn header(title: &str) {
	println!();
	println!("{}", format!("─── {} ───", title).bright_blue().bold());
}

/// Prints a recommendation summary with statistics.
pub fn summary(returned: usize, requested: usize, catalog_size: usize, duration_secs: f32) {
	println!();
	header("Summary");

	println!("  {} {} of {} requested", "Returned:".bright_blue(), returned, requested);
	println!("  {} {} items", "Catalog:".bright_blue(), catalog_size);
	println!("  {} {:.3}s", "Duration:".bright_blue(), duration_secs);
	println!();
}
