//! Deliverable extraction: `[quantity] [platform] content-type` triples.

use std::sync::LazyLock;

use dealdesk_core::{ContentType, Deliverable, Platform};
use regex::{Captures, Regex};

static DELIVERABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?P<digits>\d+)\s*x?\s*|(?P<word>an|a|one|two|three|four|five|six|seven|eight|nine|ten)\s+)?(?:(?P<platform>instagram|insta|ig|youtube|yt|tik\s?tok|tt)\s+)?(?P<kind>reels?|posts?|stories|story|shorts?|videos?)\b",
    )
    .expect("valid deliverable regex")
});

static PLATFORM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:instagram|insta|ig|youtube|yt|tik\s?tok|tt)\b")
        .expect("valid platform regex")
});

/// A currency token ending right where a quantity would start: the digits
/// are a price ("$500 reels"), not a count.
static CURRENCY_BEFORE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\$|₹|\b(?:rs\.?|usd|inr))\s*$").expect("valid currency-before regex")
});

/// A count sitting immediately before a priced deliverable ("2 $500 reels").
static TRAILING_QUANTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?P<digits>\d+)\s*x?|(?P<word>an|a|one|two|three|four|five|six|seven|eight|nine|ten))\s*$",
    )
    .expect("valid trailing-quantity regex")
});

/// How far back (in chars) to look for a platform keyword when the match
/// itself does not name one.
const PLATFORM_LOOKBACK_CHARS: usize = 30;

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("a", 1),
    ("an", 1),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Extracts deliverables in order of first mention.
///
/// Repeated (platform, type) pairs are merged into the first occurrence by
/// summing quantities, so the result never holds two entries for the same
/// pair.
#[must_use]
pub fn extract_deliverables(text: &str) -> Vec<Deliverable> {
    let mut deliverables: Vec<Deliverable> = Vec::new();

    for caps in DELIVERABLE_RE.captures_iter(text) {
        let Some(deliverable) = deliverable_from(text, &caps) else {
            continue;
        };

        match deliverables.iter_mut().find(|d| {
            d.platform == deliverable.platform && d.content_type == deliverable.content_type
        }) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(deliverable.quantity);
            }
            None => deliverables.push(deliverable),
        }
    }

    deliverables
}

fn deliverable_from(text: &str, caps: &Captures<'_>) -> Option<Deliverable> {
    let content_type = content_type_from(caps.name("kind")?.as_str())?;

    let quantity = match (caps.name("digits"), caps.name("word")) {
        (Some(digits), _) => match CURRENCY_BEFORE_RE.find(&text[..digits.start()]) {
            Some(currency) => {
                tracing::trace!(
                    price = digits.as_str(),
                    "digits follow a currency token, not a quantity"
                );
                Some(quantity_before(&text[..currency.start()]).unwrap_or(1))
            }
            None => digits.as_str().parse::<u32>().ok(),
        },
        (None, Some(word)) => number_word(word.as_str()),
        (None, None) => Some(1),
    };
    let Some(quantity) = quantity.filter(|q| *q >= 1) else {
        tracing::trace!(
            matched = caps.get(0).map_or("", |m| m.as_str()),
            "rejected deliverable with unusable quantity"
        );
        return None;
    };

    let match_start = caps.get(0).map_or(0, |m| m.start());
    let platform = caps
        .name("platform")
        .and_then(|p| platform_from_keyword(p.as_str()))
        .or_else(|| platform_before(text, match_start))
        .unwrap_or_else(|| content_type.default_platform());

    Some(Deliverable {
        platform,
        content_type,
        quantity,
    })
}

/// Count written directly before a priced deliverable, if any.
fn quantity_before(head: &str) -> Option<u32> {
    let caps = TRAILING_QUANTITY_RE.captures(head)?;
    match (caps.name("digits"), caps.name("word")) {
        (Some(digits), _) => digits.as_str().parse::<u32>().ok(),
        (None, Some(word)) => number_word(word.as_str()),
        (None, None) => None,
    }
}

/// Nearest platform keyword in the window immediately preceding `offset`.
fn platform_before(text: &str, offset: usize) -> Option<Platform> {
    let head = &text[..offset];
    let window_start = head
        .char_indices()
        .rev()
        .nth(PLATFORM_LOOKBACK_CHARS - 1)
        .map_or(0, |(idx, _)| idx);

    PLATFORM_RE
        .find_iter(&head[window_start..])
        .last()
        .and_then(|m| platform_from_keyword(m.as_str()))
}

fn platform_from_keyword(keyword: &str) -> Option<Platform> {
    let compact: String = keyword
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    match compact.as_str() {
        "instagram" | "insta" | "ig" => Some(Platform::Instagram),
        "youtube" | "yt" => Some(Platform::Youtube),
        "tiktok" | "tt" => Some(Platform::Tiktok),
        _ => None,
    }
}

fn content_type_from(kind: &str) -> Option<ContentType> {
    let lower = kind.to_lowercase();
    if lower.starts_with("reel") {
        Some(ContentType::Reel)
    } else if lower.starts_with("post") {
        Some(ContentType::Post)
    } else if lower.starts_with("stor") {
        Some(ContentType::Story)
    } else if lower.starts_with("short") {
        Some(ContentType::Short)
    } else if lower.starts_with("video") {
        Some(ContentType::Video)
    } else {
        None
    }
}

fn number_word(word: &str) -> Option<u32> {
    let lower = word.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == lower)
        .map(|&(_, n)| n)
}
