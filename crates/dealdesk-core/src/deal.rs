//! The structured deal draft produced from a single creator message.
//!
//! Both the deterministic extractor and the LLM-backed path emit this shape,
//! so the serde representation is part of the contract: `snake_case` field
//! names, `SCREAMING_SNAKE_CASE` enum values, `null` for absent optionals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    Instagram,
    Youtube,
    Tiktok,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "INSTAGRAM"),
            Platform::Youtube => write!(f, "YOUTUBE"),
            Platform::Tiktok => write!(f, "TIKTOK"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Reel,
    Post,
    Story,
    Short,
    Video,
}

impl ContentType {
    /// Platform assumed when a message names the content type but no platform.
    #[must_use]
    pub fn default_platform(self) -> Platform {
        match self {
            ContentType::Reel | ContentType::Post | ContentType::Story => Platform::Instagram,
            ContentType::Short | ContentType::Video => Platform::Youtube,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Reel => write!(f, "REEL"),
            ContentType::Post => write!(f, "POST"),
            ContentType::Story => write!(f, "STORY"),
            ContentType::Short => write!(f, "SHORT"),
            ContentType::Video => write!(f, "VIDEO"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Usd,
    Inr,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Inr => write!(f, "INR"),
        }
    }
}

/// Negotiation stage inferred from the message wording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DealStatus {
    #[default]
    Inbound,
    Negotiating,
    Agreed,
}

impl std::fmt::Display for DealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DealStatus::Inbound => write!(f, "INBOUND"),
            DealStatus::Negotiating => write!(f, "NEGOTIATING"),
            DealStatus::Agreed => write!(f, "AGREED"),
        }
    }
}

/// One unit of contracted content, e.g. "2 Instagram reels".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    pub platform: Platform,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Always at least 1.
    pub quantity: u32,
}

/// Draft deal extracted from one message. Reviewed by a human before it
/// becomes a persisted deal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDeal {
    pub brand_name: Option<String>,
    /// Strictly positive and finite when present. Currency-agnostic.
    pub total_value: Option<f64>,
    pub currency: Option<Currency>,
    /// At most one entry per (platform, type) pair.
    #[serde(default)]
    pub deliverables: Vec<Deliverable>,
    #[serde(default)]
    pub status: DealStatus,
    /// Calibrated reliability estimate in `[0, 1]`.
    pub confidence: f64,
}

impl ExtractedDeal {
    /// Total number of content pieces across all deliverables.
    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        self.deliverables
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.quantity))
    }
}
