//! `extract` and `batch` command handlers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use dealdesk_core::{AppConfig, BrandRoster, ExtractedDeal};
use dealdesk_extract::{extract_deal, DealRequest};

use crate::roster::combined_names;

/// Outcome counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct BatchSummary {
    pub(crate) processed: usize,
    pub(crate) failed: usize,
    /// Content pieces across every extracted deal.
    pub(crate) pieces: u32,
}

/// Extracts one message and prints the deal as JSON on stdout.
///
/// # Errors
///
/// Returns an error if the deal cannot be serialized or stdout is closed.
pub(crate) fn run_extract(
    config: &AppConfig,
    roster: &BrandRoster,
    message: &str,
    extra_brands: &[String],
    pretty: bool,
) -> anyhow::Result<()> {
    let names = combined_names(roster, extra_brands);
    let deal = extract_one(config, roster, message, &names);

    let json = if pretty {
        serde_json::to_string_pretty(&deal)?
    } else {
        serde_json::to_string(&deal)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("writing deal to stdout")?;
    Ok(())
}

/// Reads newline-delimited requests from `input` (stdin when `None`) and
/// prints one JSON line per request.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read, or stdout is
/// closed. Malformed requests are reported inline and do not stop the run.
pub(crate) fn run_batch_command(
    config: &AppConfig,
    roster: &BrandRoster,
    input: Option<&Path>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening batch input {}", path.display()))?;
            run_batch(config, roster, BufReader::new(file), &mut out)?
        }
        None => run_batch(config, roster, io::stdin().lock(), &mut out)?,
    };

    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        pieces = summary.pieces,
        "batch complete"
    );
    Ok(())
}

/// Core batch loop over any reader and writer.
///
/// Each non-blank line must be a JSON request object. Roster names are
/// appended to the request's own `known_brands`. A line that fails to
/// parse or validate produces `{"line": N, "error": "..."}` instead of a
/// deal.
///
/// # Errors
///
/// Returns an error only on I/O failure.
pub(crate) fn run_batch<R: BufRead, W: Write>(
    config: &AppConfig,
    roster: &BrandRoster,
    reader: R,
    out: &mut W,
) -> anyhow::Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("reading batch input")?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;

        match DealRequest::from_json_str(&line) {
            Ok(request) => {
                let names = combined_names(roster, &request.known_brands);
                let deal = extract_one(config, roster, &request.message, &names);
                writeln!(out, "{}", serde_json::to_string(&deal)?)?;
                summary.processed += 1;
                summary.pieces = summary.pieces.saturating_add(deal.total_pieces());
            }
            Err(e) => {
                tracing::warn!(line = line_no, error = %e, "skipping invalid request");
                let report = serde_json::json!({ "line": line_no, "error": e.to_string() });
                writeln!(out, "{report}")?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Clamps the message, extracts, and maps roster aliases back to the
/// canonical brand name.
fn extract_one(
    config: &AppConfig,
    roster: &BrandRoster,
    message: &str,
    names: &[String],
) -> ExtractedDeal {
    let clamped = config.clamp_message(message);
    if clamped.len() < message.len() {
        tracing::warn!(
            limit = config.max_message_chars,
            "message truncated before extraction"
        );
    }

    let mut deal = extract_deal(clamped, names);
    if let Some(canonical) = deal
        .brand_name
        .as_deref()
        .and_then(|matched| roster.canonical(matched))
    {
        deal.brand_name = Some(canonical.to_string());
    }
    deal
}
