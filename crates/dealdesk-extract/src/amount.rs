//! Monetary amount and currency extraction.
//!
//! Two pattern families run against the raw text:
//!
//! 1. **Currency-adjacent**: a currency token directly before (`$1,500`,
//!    `Rs. 5000`) or after (`1500 USD`, `15k rupees`) a numeric literal.
//! 2. **Bare**: only consulted when family 1 found nothing: a number with a
//!    `k`/`m` multiplier, or a number following a context word such as
//!    "budget" or "for".
//!
//! When family 1 finds several amounts the *last* one mentioned wins; see
//! [`select_final_offer`].

use std::sync::LazyLock;

use dealdesk_core::Currency;
use regex::{Captures, Regex};

/// Numeric literal that starts and ends on a digit, with optional `,`/`.`
/// separators in between.
const NUMBER: &str = r"[0-9](?:[0-9.,]*[0-9])?";

static LEFT_CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?P<cur>\$|₹|\busd|\binr|\bdollars?|\brupees?|\brs\.?)\s*(?P<num>{NUMBER})(?P<mult>[km])?\b"
    ))
    .expect("valid left-currency regex")
});

static RIGHT_CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?P<num>{NUMBER})(?P<mult>[km])?\s*(?P<cur>usd\b|inr\b|dollars?\b|rupees?\b|rs\b|\$|₹)"
    ))
    .expect("valid right-currency regex")
});

static MULTIPLIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?P<num>{NUMBER})(?P<mult>[km])\b"))
        .expect("valid multiplier regex")
});

static CONTEXT_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:budget|rate|pay|paying|for|fee|price|offer|offering|compensation)\b(?:\s+(?:is|of|at|around|about|approx|will\s+be|would\s+be))?\s*[:=]?\s*(?P<num>{NUMBER})(?P<mult>[km])?\b"
    ))
    .expect("valid context-word regex")
});

/// A number directly followed by one of these is a deliverable count, not money.
static QUANTITY_FOLLOWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:x\s*)?(?:instagram|insta|ig|youtube|yt|tik\s?tok|tt|reels?|posts?|stories|story|shorts?|videos?)\b",
    )
    .expect("valid quantity-follower regex")
});

static BARE_CURRENCY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$|₹|\b(?:usd|inr|dollars?|rupees?|rs)\b").expect("valid bare-currency regex")
});

/// Bare-amount matchers, each tried over the whole text. The earliest hit
/// across all of them wins.
static BARE_MATCHERS: [(&str, &LazyLock<Regex>); 2] = [
    ("multiplier", &MULTIPLIER_RE),
    ("context_word", &CONTEXT_WORD_RE),
];

/// Amount and currency found in a message.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AmountMatch {
    /// Strictly positive and finite when present.
    pub amount: Option<f64>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    value: f64,
    currency: Option<Currency>,
    /// Byte offset of the numeric literal.
    position: usize,
}

/// Finds the most likely monetary amount and currency in `text`.
#[must_use]
pub fn extract_amount(text: &str) -> AmountMatch {
    let tagged: Vec<Candidate> = [&*LEFT_CURRENCY_RE, &*RIGHT_CURRENCY_RE]
        .into_iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| candidate_from(&caps))
        .collect();

    let primary = select_final_offer(tagged).or_else(|| first_bare_amount(text));

    let amount = primary.map(|c| c.value);
    let currency = primary
        .and_then(|c| c.currency)
        .or_else(|| currency_anywhere(text));

    AmountMatch { amount, currency }
}

/// Among currency-tagged amounts the latest mention is authoritative
/// ("final offer wins"). On an offset tie the earlier-scanned candidate
/// (left-currency form) is kept.
///
/// "Negotiated down from X to Y" therefore resolves to Y, while "Y now, we
/// paid X last time" resolves to X.
fn select_final_offer(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates
        .into_iter()
        .reduce(|best, c| if c.position > best.position { c } else { best })
}

/// First bare-amount match by text position, with no currency attached.
fn first_bare_amount(text: &str) -> Option<Candidate> {
    BARE_MATCHERS
        .iter()
        .filter_map(|(name, re)| {
            re.captures_iter(text)
                .filter(|caps| !is_quantity(text, caps))
                .find_map(|caps| candidate_from(&caps))
                .inspect(|c| tracing::trace!(matcher = name, value = c.value, "bare amount candidate"))
        })
        .reduce(|best, c| if c.position < best.position { c } else { best })
}

fn is_quantity(text: &str, caps: &Captures<'_>) -> bool {
    caps.get(0)
        .is_some_and(|m| QUANTITY_FOLLOWER_RE.is_match(&text[m.end()..]))
}

/// Secondary currency signal: the first currency token anywhere in the text.
fn currency_anywhere(text: &str) -> Option<Currency> {
    BARE_CURRENCY_RE
        .find(text)
        .and_then(|m| currency_from_token(m.as_str()))
}

fn candidate_from(caps: &Captures<'_>) -> Option<Candidate> {
    let num = caps.name("num")?;
    let base = parse_number(num.as_str())?;
    let value = match caps.name("mult") {
        Some(m) => apply_multiplier(base, m.as_str())?,
        None => base,
    };
    let currency = caps
        .name("cur")
        .and_then(|c| currency_from_token(c.as_str()));

    Some(Candidate {
        value,
        currency,
        position: num.start(),
    })
}

fn currency_from_token(token: &str) -> Option<Currency> {
    let lower = token.trim_end_matches('.').to_lowercase();
    match lower.as_str() {
        "$" | "usd" | "dollar" | "dollars" => Some(Currency::Usd),
        "₹" | "inr" | "rupee" | "rupees" | "rs" => Some(Currency::Inr),
        _ => None,
    }
}

fn apply_multiplier(value: f64, suffix: &str) -> Option<f64> {
    let scaled = match suffix {
        "k" | "K" => value * 1_000.0,
        "m" | "M" => value * 1_000_000.0,
        _ => value,
    };
    scaled.is_finite().then_some(scaled)
}

/// Parses a numeric literal using the separator rules for creator messages.
///
/// - Whitespace is stripped.
/// - With both `,` and `.` present, `,` is a thousands separator.
/// - With only `,`, the last comma is a decimal point when exactly one or two
///   digits follow it at the end of the string; otherwise every comma is a
///   thousands separator.
///
/// Returns `None` for unparseable, non-finite, or non-positive values.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let normalized = if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.replace(',', "")
    } else if let Some(idx) = cleaned.rfind(',') {
        let tail = &cleaned[idx + 1..];
        if (1..=2).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}.{tail}", cleaned[..idx].replace(',', ""))
        } else {
            cleaned.replace(',', "")
        }
    } else {
        cleaned
    };

    let value = normalized.parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
#[path = "amount_test.rs"]
mod tests;
