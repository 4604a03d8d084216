//! Shared types and configuration for the dealdesk workspace.
//!
//! Holds the extracted-deal data model that every extractor (heuristic or
//! LLM-backed) must produce, the environment-driven application config, and
//! the YAML brand roster loader.

pub mod app_config;
pub mod brands;
pub mod config;
pub mod deal;
pub mod error;

pub use app_config::{AppConfig, Environment};
pub use brands::{load_roster, parse_roster, BrandEntry, BrandRoster};
pub use config::{load_app_config, load_app_config_from_env};
pub use deal::{ContentType, Currency, DealStatus, Deliverable, ExtractedDeal, Platform};
pub use error::ConfigError;
