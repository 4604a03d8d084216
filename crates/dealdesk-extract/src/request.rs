//! Loosely-typed request boundary.
//!
//! Callers that speak JSON (the CLI batch mode, queue consumers) hand over a
//! `serde_json::Value`. Types are checked here, before any extraction runs,
//! so a malformed request fails fast with [`ExtractError::InvalidInput`].

use dealdesk_core::ExtractedDeal;
use serde_json::Value;

use crate::error::ExtractError;
use crate::extract::extract_deal;

/// A validated extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealRequest {
    pub message: String,
    pub known_brands: Vec<String>,
}

impl DealRequest {
    /// Validates a JSON request of the form
    /// `{"message": "...", "known_brands": ["..."]}`.
    ///
    /// `known_brands` is optional (`knownBrands` is accepted as an alias);
    /// `null` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidInput`] if the value is not an object,
    /// `message` is missing or not a string, `known_brands` is not an array,
    /// or any roster entry is not a string.
    pub fn from_value(value: &Value) -> Result<Self, ExtractError> {
        let obj = value.as_object().ok_or_else(|| {
            ExtractError::InvalidInput(format!(
                "request must be a JSON object, got {}",
                type_name(value)
            ))
        })?;

        let message = match obj.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(ExtractError::InvalidInput(format!(
                    "`message` must be a string, got {}",
                    type_name(other)
                )))
            }
            None => {
                return Err(ExtractError::InvalidInput(
                    "`message` is required".to_string(),
                ))
            }
        };

        let known_brands = match obj.get("known_brands").or_else(|| obj.get("knownBrands")) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        ExtractError::InvalidInput(format!(
                            "`known_brands[{idx}]` must be a string, got {}",
                            type_name(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(ExtractError::InvalidInput(format!(
                    "`known_brands` must be an array, got {}",
                    type_name(other)
                )))
            }
        };

        Ok(Self {
            message,
            known_brands,
        })
    }

    /// Parses and validates one JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedJson`] for invalid JSON, otherwise as
    /// [`DealRequest::from_value`].
    pub fn from_json_str(raw: &str) -> Result<Self, ExtractError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Runs the extractor on this request.
    #[must_use]
    pub fn extract(&self) -> ExtractedDeal {
        extract_deal(&self.message, &self.known_brands)
    }
}

/// Validates `value` as a [`DealRequest`] and extracts a deal from it.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidInput`] for malformed requests.
pub fn extract_request(value: &Value) -> Result<ExtractedDeal, ExtractError> {
    DealRequest::from_value(value).map(|req| req.extract())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
