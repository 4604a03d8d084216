//! Extraction orchestration.

use dealdesk_core::ExtractedDeal;

use crate::amount::{extract_amount, AmountMatch};
use crate::brand::match_brand;
use crate::confidence::{score_confidence, FieldCoverage};
use crate::deliverables::extract_deliverables;
use crate::status::classify_status;

/// Extracts a draft deal from one creator message.
///
/// The message is trimmed, then run through the amount, deliverable, brand,
/// and status extractors independently; the confidence score is derived from
/// which fields they produced. Pure and synchronous: identical inputs always
/// yield identical output.
///
/// An empty `known_brands` roster limits brand resolution to structural
/// inference.
#[must_use]
pub fn extract_deal(message: &str, known_brands: &[String]) -> ExtractedDeal {
    let text = message.trim();

    let AmountMatch { amount, currency } = extract_amount(text);
    let deliverables = extract_deliverables(text);
    let brand_name = match_brand(text, known_brands);
    let status = classify_status(text);

    let coverage = FieldCoverage {
        brand: brand_name.is_some(),
        value: amount.is_some(),
        currency: currency.is_some(),
        deliverables: !deliverables.is_empty(),
    };
    let confidence = score_confidence(coverage, text);

    tracing::debug!(
        brand = brand_name.as_deref(),
        amount,
        currency = currency.map(tracing::field::display),
        deliverables = deliverables.len(),
        %status,
        confidence,
        roster_size = known_brands.len(),
        "extracted deal draft"
    );

    ExtractedDeal {
        brand_name,
        total_value: amount,
        currency,
        deliverables,
        status,
        confidence,
    }
}
