//! Intent Classifier
//!
//! Single entry point for chat front ends: raw text in, intent plus canned
//! reply out. Stateless; safe to share across threads and call concurrently.

use crate::catalog::Catalog;
use crate::models::ClassificationResult;
use crate::replies::reply_for;
use crate::resolver::IntentResolver;
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    /// Classifier over the built-in catalog, compiled on first use
    static ref BUILTIN: IntentClassifier = IntentClassifier::builtin();
}

/// Intent classifier
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    resolver: IntentResolver,
    fingerprint: String,
    buckets: usize,
}

impl IntentClassifier {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            resolver: IntentResolver::new(catalog),
            fingerprint: catalog.fingerprint(),
            buckets: catalog.len(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(&Catalog::builtin())
    }

    /// Classify user input and attach the reply for the resolved intent
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let resolution = self.resolver.resolve(message);

        debug!(
            intent = %resolution.intent,
            matched_keyword = ?resolution.matched_keyword,
            "Classified message"
        );

        ClassificationResult {
            intent: resolution.intent,
            reply: reply_for(resolution.intent).to_string(),
            matched_keyword: resolution.matched_keyword,
        }
    }

    /// Fingerprint of the catalog this classifier was built from
    pub fn catalog_fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Classify with the built-in catalog
pub fn classify(message: &str) -> ClassificationResult {
    BUILTIN.classify(message)
}
