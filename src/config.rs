//! Application configuration and constants

// === Snapshot Defaults ===
pub const DEFAULT_CATALOG: &str = "data/catalog.json";
pub const DEFAULT_FEEDBACK: &str = "data/feedback.json";

// === Recommendation Defaults ===
pub const DEFAULT_TOP_N: usize = 10;

// === Vectorizer ===
/// Corpus size from which singleton terms (document frequency 1) are
/// dropped from the vocabulary. Below this, every non-stop-word term is
/// kept so that tiny catalogs still produce useful vectors.
pub const MIN_DF_CORPUS: usize = 100;
