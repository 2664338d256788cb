//! Keyword catalog
//!
//! An ordered table of (intent, trigger phrases) buckets. Order across
//! buckets is the resolver's priority order, so the catalog is a `Vec`
//! rather than a map. The catalog is built once at startup (built-in or
//! loaded from a JSON asset) and never mutated afterwards.

mod builtin;

use crate::error::AssistantError;
use crate::models::Intent;
use crate::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// One intent and its literal trigger phrases, in authored order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordBucket {
    pub intent: Intent,
    pub phrases: Vec<String>,
}

impl KeywordBucket {
    pub fn new(intent: Intent, phrases: &[&str]) -> Self {
        Self {
            intent,
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// On-disk representation of a catalog asset.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    buckets: Vec<KeywordBucket>,
}

/// Immutable, priority-ordered keyword catalog.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    buckets: Vec<KeywordBucket>,
}

impl Catalog {
    /// Build a catalog from buckets, validating them.
    pub fn new(buckets: Vec<KeywordBucket>) -> Result<Self> {
        validate(&buckets)?;
        Ok(Self { buckets })
    }

    /// The catalog shipped with the assistant.
    pub fn builtin() -> Self {
        let buckets = builtin::BUILTIN_BUCKETS
            .iter()
            .map(|(intent, phrases)| KeywordBucket::new(*intent, phrases))
            .collect();

        Self { buckets }
    }

    /// Parse a catalog from its JSON asset form.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.buckets)
    }

    /// Load a catalog asset from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            buckets = catalog.len(),
            "Loaded keyword catalog"
        );

        Ok(catalog)
    }

    /// Serialize to the JSON asset form accepted by [`Catalog::from_json`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Buckets in priority order.
    pub fn buckets(&self) -> &[KeywordBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Phrases for an intent, if it owns a bucket.
    pub fn phrases_for(&self, intent: Intent) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.intent == intent)
            .map(|b| b.phrases.as_slice())
    }

    /// SHA256 (hex) over the catalog's JSON form.
    /// Streams the serialization straight into the hasher.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        // String keys and plain data only, and the hasher sink never errors
        serde_json::to_writer(&mut HashWriter(&mut hasher), self)
            .expect("catalog serialization is infallible");

        hex::encode(hasher.finalize())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(buckets: &[KeywordBucket]) -> Result<()> {
    if buckets.is_empty() {
        return Err(AssistantError::CatalogError(
            "catalog has no buckets".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for bucket in buckets {
        if bucket.intent == Intent::Unknown {
            return Err(AssistantError::CatalogError(
                "UNKNOWN is the fallback intent and cannot own a bucket".to_string(),
            ));
        }
        if bucket.phrases.is_empty() {
            return Err(AssistantError::CatalogError(format!(
                "bucket {} has no phrases",
                bucket.intent
            )));
        }
        if !seen.insert(bucket.intent) {
            return Err(AssistantError::CatalogError(format!(
                "intent {} owns more than one bucket",
                bucket.intent
            )));
        }
    }

    Ok(())
}

/// Adapter to allow writing into Sha256 via std::io::Write
struct HashWriter<'a, H: Digest>(&'a mut H);

impl<'a, H: Digest> Write for HashWriter<'a, H> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
