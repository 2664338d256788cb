//! Intent Resolver
//!
//! Walks the catalog in priority order and returns the first bucket with a
//! phrase contained in the message. First bucket wins, and within a bucket
//! the first phrase wins; there is no scoring.
//!
//! A phrase matches when its normalized form is a substring of the
//! normalized message, or when the two match with all whitespace removed
//! ("ซื้อ1แถม1" vs "ซื้อ 1 แถม 1").
//!
//! Containment is plain substring search, so a short phrase can fire inside
//! an unrelated longer word. Once Thai marks are stripped, "สั่ง" (order)
//! and "ส่ง" (deliver) both normalize to "สง", which sends most Thai
//! delivery questions to ORDER. Word-boundary matching would change which
//! intent wins on real traffic, so it is left as is.

use crate::catalog::Catalog;
use crate::models::Intent;
use crate::normalizer::{normalize, remove_spaces};

/// Resolver output: the intent plus the literal phrase that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub intent: Intent,
    pub matched_keyword: Option<String>,
}

impl Resolution {
    fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            matched_keyword: None,
        }
    }
}

/// A catalog phrase with its normalized forms computed up front.
#[derive(Debug, Clone)]
struct CompiledPhrase {
    literal: String,
    normalized: String,
    compact: String,
}

#[derive(Debug, Clone)]
struct CompiledBucket {
    intent: Intent,
    phrases: Vec<CompiledPhrase>,
}

/// Priority-ordered matcher over a [`Catalog`].
#[derive(Debug, Clone)]
pub struct IntentResolver {
    buckets: Vec<CompiledBucket>,
}

impl IntentResolver {
    pub fn new(catalog: &Catalog) -> Self {
        let buckets = catalog
            .buckets()
            .iter()
            .map(|bucket| CompiledBucket {
                intent: bucket.intent,
                phrases: bucket
                    .phrases
                    .iter()
                    .filter_map(|literal| {
                        let normalized = normalize(literal);
                        // Phrases that normalize away (e.g. emoji-only) never match
                        if normalized.is_empty() {
                            return None;
                        }
                        let compact = remove_spaces(&normalized);
                        Some(CompiledPhrase {
                            literal: literal.clone(),
                            normalized,
                            compact,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { buckets }
    }

    /// Resolve a raw message. Total: every input yields a resolution.
    pub fn resolve(&self, message: &str) -> Resolution {
        let m = normalize(message);
        let m_compact = remove_spaces(&m);

        for bucket in &self.buckets {
            let hit = bucket.phrases.iter().find(|p| {
                m.contains(p.normalized.as_str()) || m_compact.contains(p.compact.as_str())
            });

            if let Some(phrase) = hit {
                return Resolution {
                    intent: bucket.intent,
                    matched_keyword: Some(phrase.literal.clone()),
                };
            }
        }

        Resolution::unknown()
    }
}

impl Default for IntentResolver {
    fn default() -> Self {
        Self::new(&Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KeywordBucket;

    fn resolve(message: &str) -> Resolution {
        IntentResolver::default().resolve(message)
    }

    fn hit(intent: Intent, keyword: &str) -> Resolution {
        Resolution {
            intent,
            matched_keyword: Some(keyword.to_string()),
        }
    }

    #[test]
    fn test_specialization_before_generic_promo() {
        assert_eq!(resolve("ซื้อ 1 แถม 1"), hit(Intent::PromoB1g1, "ซื้อ 1 แถม 1"));
        assert_eq!(resolve("โปร 1 แถม 1"), hit(Intent::PromoB1g1, "1แถม1"));
        assert_eq!(resolve("เงื่อนไขโปร"), hit(Intent::PromoTerms, "เงื่อนไขโปร"));
        assert_eq!(resolve("มีโปรอะไรบ้าง"), hit(Intent::Promo, "โปร"));
    }

    #[test]
    fn test_space_insensitive_match_reports_first_phrase() {
        // The compact message matches the spaced phrase first
        assert_eq!(resolve("ซื้อ1แถม1"), hit(Intent::PromoB1g1, "ซื้อ 1 แถม 1"));
        assert_eq!(resolve("truemoney"), hit(Intent::Wallet, "true money"));
    }

    #[test]
    fn test_thai_digits() {
        assert_eq!(resolve("๑แถม๑"), resolve("1แถม1"));
        assert_eq!(resolve("๑แถม๑"), hit(Intent::PromoB1g1, "1แถม1"));
    }

    #[test]
    fn test_case_and_emoji() {
        assert_eq!(resolve("HELLO 👋"), hit(Intent::Greet, "hello"));
        assert_eq!(resolve("B1G1"), hit(Intent::PromoB1g1, "b1g1"));
        assert_eq!(resolve("\u{201C}hello\u{201D}"), hit(Intent::Greet, "hello"));
    }

    #[test]
    fn test_bucket_order_breaks_ties() {
        // "deliver" (DELIVERY_AREA) is probed before "delivery fee"
        assert_eq!(resolve("delivery fee"), hit(Intent::DeliveryArea, "deliver"));
        // "order" (ORDER) is probed before "order status" and "min order"
        assert_eq!(resolve("order status"), hit(Intent::Order, "order"));
        assert_eq!(resolve("min order"), hit(Intent::Order, "order"));
        // "สั่ง" and "ส่ง" share a normalized form
        assert_eq!(resolve("ค่าส่งเท่าไหร่"), hit(Intent::Order, "สั่ง"));
    }

    #[test]
    fn test_thai_phrases() {
        assert_eq!(resolve("สวัสดีครับ"), hit(Intent::Greet, "สวัสดี"));
        assert_eq!(resolve("ยกเลิกออเดอร์"), hit(Intent::CancelOrder, "ยกเลิก"));
        assert_eq!(resolve("เปลี่ยนที่อยู่"), hit(Intent::ModifyOrder, "เปลี่ยนที่อยู่"));
        assert_eq!(resolve("ใบกำกับภาษี"), hit(Intent::TaxInvoice, "ใบกำกับภาษี"));
        assert_eq!(resolve("เปิดกี่โมง"), hit(Intent::Hours, "เปิดกี่โมง"));
        assert_eq!(resolve("กี่นาที"), hit(Intent::DeliveryEta, "กี่นาที"));
        assert_eq!(resolve("แพ้ถั่ว"), hit(Intent::Allergen, "แพ้"));
        assert_eq!(resolve("ขั้นต่ำ"), hit(Intent::MinOrder, "ขั้นต่ำ"));
    }

    #[test]
    fn test_english_phrases() {
        assert_eq!(resolve("Is it spicy"), hit(Intent::Spicy, "spicy"));
        assert_eq!(resolve("stuffed crust"), hit(Intent::Crust, "stuffed crust"));
        assert_eq!(resolve("vat invoice"), hit(Intent::TaxInvoice, "vat"));
        assert_eq!(resolve("e\u{2010}tax"), hit(Intent::TaxInvoice, "e-tax"));
        assert_eq!(resolve("call center"), hit(Intent::Contact, "call"));
        assert_eq!(resolve("thank you"), hit(Intent::Thanks, "thank you"));
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(resolve("asdkjaslkdj"), Resolution::unknown());
        assert_eq!(resolve(""), Resolution::unknown());
        assert_eq!(resolve("   "), Resolution::unknown());
        assert_eq!(resolve("👋🍕"), Resolution::unknown());
        assert_eq!(resolve("๑๑๕๐"), Resolution::unknown());
    }

    #[test]
    fn test_empty_normalized_phrase_is_skipped() {
        let catalog = Catalog::new(vec![
            KeywordBucket::new(Intent::Promo, &["🎉", "  "]),
            KeywordBucket::new(Intent::Greet, &["hello"]),
        ])
        .unwrap();
        let resolver = IntentResolver::new(&catalog);

        // An empty phrase would otherwise match every message
        assert_eq!(resolver.resolve("hello 🎉"), hit(Intent::Greet, "hello"));
        assert_eq!(resolver.resolve("🎉"), Resolution::unknown());
    }

    #[test]
    fn test_custom_order_is_respected() {
        let catalog = Catalog::new(vec![
            KeywordBucket::new(Intent::Promo, &["โปร"]),
            KeywordBucket::new(Intent::PromoB1g1, &["1แถม1"]),
        ])
        .unwrap();
        let resolver = IntentResolver::new(&catalog);

        // With the generic bucket first, the specialization never fires
        assert_eq!(resolver.resolve("โปร 1 แถม 1"), hit(Intent::Promo, "โปร"));
    }
}
