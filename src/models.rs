//! Core data models for the storefront chat assistant

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Intent =================
//

/// Every discrete intent the assistant can resolve.
///
/// `Unknown` is the catch-all; all other variants are only reachable
/// through a keyword hit in the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Greet,
    Promo,
    #[serde(rename = "PROMO_B1G1")]
    PromoB1g1,
    PromoTerms,
    Menu,
    Recommend,
    Size,
    Crust,
    Vegetarian,
    Spicy,
    Allergen,
    Halal,
    Order,
    MinOrder,
    Hours,
    DeliveryArea,
    DeliveryFee,
    DeliveryEta,
    TrackOrder,
    CancelOrder,
    ModifyOrder,
    Payment,
    Wallet,
    TaxInvoice,
    Branch,
    Contact,
    Complaint,
    Thanks,
    Unknown,
}

impl Intent {
    /// All intents, in declaration order.
    pub const ALL: [Intent; 29] = [
        Intent::Greet,
        Intent::Promo,
        Intent::PromoB1g1,
        Intent::PromoTerms,
        Intent::Menu,
        Intent::Recommend,
        Intent::Size,
        Intent::Crust,
        Intent::Vegetarian,
        Intent::Spicy,
        Intent::Allergen,
        Intent::Halal,
        Intent::Order,
        Intent::MinOrder,
        Intent::Hours,
        Intent::DeliveryArea,
        Intent::DeliveryFee,
        Intent::DeliveryEta,
        Intent::TrackOrder,
        Intent::CancelOrder,
        Intent::ModifyOrder,
        Intent::Payment,
        Intent::Wallet,
        Intent::TaxInvoice,
        Intent::Branch,
        Intent::Contact,
        Intent::Complaint,
        Intent::Thanks,
        Intent::Unknown,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greet => "GREET",
            Intent::Promo => "PROMO",
            Intent::PromoB1g1 => "PROMO_B1G1",
            Intent::PromoTerms => "PROMO_TERMS",
            Intent::Menu => "MENU",
            Intent::Recommend => "RECOMMEND",
            Intent::Size => "SIZE",
            Intent::Crust => "CRUST",
            Intent::Vegetarian => "VEGETARIAN",
            Intent::Spicy => "SPICY",
            Intent::Allergen => "ALLERGEN",
            Intent::Halal => "HALAL",
            Intent::Order => "ORDER",
            Intent::MinOrder => "MIN_ORDER",
            Intent::Hours => "HOURS",
            Intent::DeliveryArea => "DELIVERY_AREA",
            Intent::DeliveryFee => "DELIVERY_FEE",
            Intent::DeliveryEta => "DELIVERY_ETA",
            Intent::TrackOrder => "TRACK_ORDER",
            Intent::CancelOrder => "CANCEL_ORDER",
            Intent::ModifyOrder => "MODIFY_ORDER",
            Intent::Payment => "PAYMENT",
            Intent::Wallet => "WALLET",
            Intent::TaxInvoice => "TAX_INVOICE",
            Intent::Branch => "BRANCH",
            Intent::Contact => "CONTACT",
            Intent::Complaint => "COMPLAINT",
            Intent::Thanks => "THANKS",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//
// ================= Classification =================
//

/// Output of a single classification.
///
/// `matched_keyword` is the literal catalog phrase (before normalization)
/// that fired, and is `None` only when `intent` is `Unknown`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub reply: String,
    pub matched_keyword: Option<String>,
}
