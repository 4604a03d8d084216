use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One brand in the roster, plus alternate spellings it is known by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub notes: Option<String>,
}

impl BrandEntry {
    /// Generate a URL-safe slug from the brand name.
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// The brand directory snapshot handed to the extractor as `known_brands`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandRoster {
    pub brands: Vec<BrandEntry>,
}

impl BrandRoster {
    /// Every brand name and alias, in file order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.brands
            .iter()
            .flat_map(|b| std::iter::once(&b.name).chain(b.aliases.iter()))
            .map(|n| n.trim().to_string())
            .collect()
    }

    /// Maps a matched name or alias back to the canonical brand name.
    ///
    /// Comparison is slug-based, so `"nike running"` resolves the alias
    /// `"Nike Running"`. Returns `None` for names not in the roster.
    #[must_use]
    pub fn canonical(&self, matched: &str) -> Option<&str> {
        let wanted = slugify(matched);
        self.brands
            .iter()
            .find(|b| {
                b.slug() == wanted || b.aliases.iter().any(|alias| slugify(alias) == wanted)
            })
            .map(|b| b.name.as_str())
    }
}

/// Load and validate the brand roster from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_roster(path: &Path) -> Result<BrandRoster, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_roster(&content)
}

/// Parse and validate roster YAML that is already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_roster(content: &str) -> Result<BrandRoster, ConfigError> {
    let roster: BrandRoster = serde_yaml::from_str(content)?;
    validate_roster(&roster)?;
    Ok(roster)
}

fn validate_roster(roster: &BrandRoster) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for brand in &roster.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        let slug = brand.slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has no alphanumeric characters",
                brand.name
            )));
        }
        if !seen.insert(slug) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }

        for alias in &brand.aliases {
            let alias_slug = slugify(alias);
            if alias_slug.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has an empty alias",
                    brand.name
                )));
            }
            if !seen.insert(alias_slug) {
                return Err(ConfigError::Validation(format!(
                    "duplicate alias '{}' (on brand '{}')",
                    alias, brand.name
                )));
            }
        }
    }

    Ok(())
}

fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
