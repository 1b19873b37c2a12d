//! # Curator Library
//!
//! Hybrid recommendation engine for product catalogs.
//! Combines content-based similarity (TF-IDF over item tag text) with
//! collaborative filtering (user-user similarity over feedback ratings).

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod logger;
pub mod similarity;
pub mod store;
pub mod trending;
pub mod types;
pub mod vectorizer;
