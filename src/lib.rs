//! Storefront Chat Assistant
//!
//! A deterministic, rule-based intent classifier for a pizza storefront
//! chat window. Free-form Thai/English text goes in; one of a fixed set of
//! intents and its canned reply come out.
//!
//! PIPELINE:
//! RAW TEXT → NORMALIZE → RESOLVE (priority-ordered catalog) → REPLY

pub mod api;
pub mod catalog;
pub mod chat;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod normalizer;
pub mod replies;
pub mod resolver;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use catalog::{Catalog, KeywordBucket};
pub use classifier::{classify, IntentClassifier};
