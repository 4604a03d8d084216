//! Deterministic deal extraction for creator messages.
//!
//! Turns free-form text such as "Nike wants 2 reels for $1500" into an
//! [`ExtractedDeal`]: brand, amount, currency, deliverables, negotiation
//! status, and a confidence score. Everything here is a pure function of its
//! inputs; compiled patterns and keyword tables are process-wide statics, so
//! the extractor can be called from any number of threads at once.

pub mod amount;
pub mod brand;
pub mod confidence;
pub mod deliverables;
pub mod error;
pub mod extract;
pub mod request;
pub mod status;

pub use amount::{extract_amount, AmountMatch};
pub use brand::{infer_brand, match_brand, match_known_brand};
pub use confidence::{mentions_schedule, score_confidence, FieldCoverage};
pub use dealdesk_core::{
    ContentType, Currency, DealStatus, Deliverable, ExtractedDeal, Platform,
};
pub use deliverables::extract_deliverables;
pub use error::ExtractError;
pub use extract::extract_deal;
pub use request::{extract_request, DealRequest};
pub use status::classify_status;
