//! Brand roster loading for CLI runs.

use std::path::Path;

use anyhow::Context;
use dealdesk_core::{AppConfig, BrandRoster};

/// Load the roster for a command.
///
/// An explicit `--brands-file` must exist. The configured default path is
/// optional: when it is missing the run continues with an empty roster and
/// brand resolution falls back to structural inference.
///
/// # Errors
///
/// Returns an error if an explicit file is missing, or if any roster file
/// fails to parse or validate.
pub(crate) fn load_for_run(
    config: &AppConfig,
    explicit: Option<&Path>,
) -> anyhow::Result<BrandRoster> {
    let path = match explicit {
        Some(p) => p,
        None if !config.brands_path.exists() => {
            tracing::warn!(
                path = %config.brands_path.display(),
                "brand roster not found, continuing with structural inference only"
            );
            return Ok(BrandRoster::default());
        }
        None => config.brands_path.as_path(),
    };

    let roster = dealdesk_core::load_roster(path)
        .with_context(|| format!("loading brand roster from {}", path.display()))?;
    tracing::debug!(path = %path.display(), brands = roster.brands.len(), "loaded brand roster");
    Ok(roster)
}

/// Roster names plus any ad-hoc names, without duplicates, roster first.
pub(crate) fn combined_names(roster: &BrandRoster, extra: &[String]) -> Vec<String> {
    let mut names = roster.names();
    for name in extra {
        let trimmed = name.trim();
        if !trimmed.is_empty() && !names.iter().any(|n| n.eq_ignore_ascii_case(trimmed)) {
            names.push(trimmed.to_string());
        }
    }
    names
}

pub(crate) fn print_roster(roster: &BrandRoster) {
    if roster.brands.is_empty() {
        println!("(no brands configured)");
        return;
    }
    for brand in &roster.brands {
        if brand.aliases.is_empty() {
            println!("{}", brand.name);
        } else {
            println!("{} (aka {})", brand.name, brand.aliases.join(", "));
        }
    }
}
