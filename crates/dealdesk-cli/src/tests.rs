use std::path::PathBuf;

use dealdesk_core::{AppConfig, BrandRoster, Environment};
use serde_json::Value;

use super::*;
use crate::extract::{run_batch, BatchSummary};
use crate::roster::{combined_names, load_for_run};

fn test_config(max_message_chars: usize) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        brands_path: PathBuf::from("/nonexistent/dealdesk/brands.yaml"),
        max_message_chars,
    }
}

fn test_roster() -> BrandRoster {
    dealdesk_core::parse_roster(
        "brands:\n  - name: Nike\n    aliases: [\"Nike Running\"]\n  - name: GlowCo\n    aliases: [\"Glow Co\"]\n",
    )
    .expect("valid test roster")
}

fn batch_lines(config: &AppConfig, roster: &BrandRoster, input: &str) -> (BatchSummary, Vec<Value>) {
    let mut out = Vec::new();
    let summary = run_batch(config, roster, input.as_bytes(), &mut out).expect("batch should run");
    let text = String::from_utf8(out).expect("utf-8 output");
    let lines = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("every output line is JSON"))
        .collect();
    (summary, lines)
}

// -----------------------------------------------------------------------
// argument parsing
// -----------------------------------------------------------------------

#[test]
fn parses_extract_with_defaults() {
    let cli = Cli::try_parse_from(["dealdesk", "extract", "Nike wants 2 reels"])
        .expect("expected valid cli args");

    match cli.command {
        Commands::Extract {
            message,
            brands,
            brands_file,
            no_roster,
            pretty,
        } => {
            assert_eq!(message, "Nike wants 2 reels");
            assert!(brands.is_empty());
            assert!(brands_file.is_none());
            assert!(!no_roster);
            assert!(!pretty);
        }
        other => panic!("expected extract, got {other:?}"),
    }
}

#[test]
fn parses_repeated_brand_flags() {
    let cli = Cli::try_parse_from([
        "dealdesk",
        "extract",
        "hello",
        "--brand",
        "Nike",
        "--brand",
        "Adidas",
        "--no-roster",
        "--pretty",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Extract { ref brands, no_roster: true, pretty: true, .. }
            if brands == &["Nike".to_string(), "Adidas".to_string()]
    ));
}

#[test]
fn extract_requires_message() {
    assert!(Cli::try_parse_from(["dealdesk", "extract"]).is_err());
}

#[test]
fn parses_batch_with_input_file() {
    let cli = Cli::try_parse_from(["dealdesk", "batch", "--input", "requests.ndjson"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Batch { input: Some(ref p), brands_file: None }
            if p == &PathBuf::from("requests.ndjson")
    ));
}

#[test]
fn parses_brands_command() {
    let cli = Cli::try_parse_from(["dealdesk", "brands", "--brands-file", "custom.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Brands { brands_file: Some(ref p) } if p == &PathBuf::from("custom.yaml")
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["dealdesk"]).is_err());
}

// -----------------------------------------------------------------------
// roster handling
// -----------------------------------------------------------------------

#[test]
fn missing_default_roster_yields_empty_roster() {
    let roster = load_for_run(&test_config(4000), None).expect("default roster is optional");
    assert!(roster.brands.is_empty());
}

#[test]
fn missing_explicit_roster_is_an_error() {
    let err = load_for_run(
        &test_config(4000),
        Some(std::path::Path::new("/nonexistent/dealdesk/custom.yaml")),
    )
    .unwrap_err();
    assert!(
        format!("{err:#}").contains("custom.yaml"),
        "error should name the file: {err:#}"
    );
}

#[test]
fn combined_names_dedupes_case_insensitively() {
    let names = combined_names(
        &test_roster(),
        &["nike".to_string(), "Adidas".to_string(), "  ".to_string()],
    );
    assert_eq!(names, vec!["Nike", "Nike Running", "GlowCo", "Glow Co", "Adidas"]);
}

// -----------------------------------------------------------------------
// batch
// -----------------------------------------------------------------------

#[test]
fn batch_extracts_each_line_and_skips_blanks() {
    let input = concat!(
        "{\"message\": \"Nike wants 2 reels for $1500\"}\n",
        "\n",
        "{\"message\": \"Adidas collab - 3 posts\", \"known_brands\": [\"Adidas\"]}\n",
    );
    let (summary, lines) = batch_lines(&test_config(4000), &test_roster(), input);

    assert_eq!(
        summary,
        BatchSummary {
            processed: 2,
            failed: 0,
            pieces: 5
        }
    );
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["brand_name"], "Nike");
    assert_eq!(lines[0]["total_value"], 1500.0);
    assert_eq!(lines[0]["currency"], "USD");
    assert_eq!(lines[1]["brand_name"], "Adidas");
}

#[test]
fn batch_reports_invalid_lines_and_continues() {
    let input = concat!(
        "not json\n",
        "{\"message\": 42}\n",
        "{\"message\": \"Nike wants a story\"}\n",
    );
    let (summary, lines) = batch_lines(&test_config(4000), &test_roster(), input);

    assert_eq!(
        summary,
        BatchSummary {
            processed: 1,
            failed: 2,
            pieces: 1
        }
    );
    assert_eq!(lines[0]["line"], 1);
    assert!(lines[0]["error"].is_string());
    assert_eq!(lines[1]["line"], 2);
    assert!(
        lines[1]["error"]
            .as_str()
            .is_some_and(|e| e.contains("`message` must be a string")),
        "unexpected error: {}",
        lines[1]["error"]
    );
    assert_eq!(lines[2]["brand_name"], "Nike");
}

#[test]
fn batch_maps_alias_to_canonical_brand() {
    let input = "{\"message\": \"Hi! this is Priya at Glow Co, 2 reels please\"}\n";
    let (_, lines) = batch_lines(&test_config(4000), &test_roster(), input);
    assert_eq!(lines[0]["brand_name"], "GlowCo");
}

#[test]
fn batch_truncates_long_messages() {
    // The amount sits past the limit and must not be seen.
    let input = "{\"message\": \"Nike wants 2 reels, budget is $1500\"}\n";
    let (_, lines) = batch_lines(&test_config(18), &test_roster(), input);
    assert_eq!(lines[0]["brand_name"], "Nike");
    assert!(lines[0]["total_value"].is_null());
    assert_eq!(lines[0]["deliverables"][0]["type"], "REEL");
}

#[test]
fn help_does_not_need_config() {
    // Argument parsing happens before config loading, so help and usage
    // errors surface from clap alone.
    let err = Cli::try_parse_from(["dealdesk", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
