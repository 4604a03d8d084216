//! Brand resolution against a caller-supplied roster, with structural
//! inference as a fallback when no roster brand appears in the message.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum Jaccard overlap for a token-level roster match.
const TOKEN_OVERLAP_THRESHOLD: f64 = 0.4;

/// Constant added to substring scores so they outrank weak token overlaps.
const SUBSTRING_BONUS: f64 = 0.5;

/// Trailing words dropped from inferred names ("GlowCo Marketing" → "GlowCo").
const TRAILING_SUFFIXES: &[&str] = &[
    "marketing",
    "partnerships",
    "partnership",
    "team",
    "agency",
];

/// Tokens that can never stand alone as a brand name.
const STOP_WORDS: &[&str] = &[
    // pronouns, articles, prepositions
    "i", "me", "my", "we", "us", "our", "ours", "you", "your", "yours", "they", "them", "their",
    "he", "him", "his", "she", "her", "it", "its", "this", "that", "these", "those", "there",
    "here", "a", "an", "the", "and", "or", "but", "so", "for", "from", "to", "of", "on", "in",
    "at", "by", "with", "about", "per", "as", "if", "just", "also", "all", "any",
    // contraction fragments left after punctuation stripping
    "s", "ll", "re", "ve", "d", "m", "t",
    // greetings and filler
    "hey", "hi", "hello", "dear", "thanks", "thank", "please", "guys", "everyone", "team",
    "folks", "ok", "okay", "yes", "no",
    // filler verbs
    "is", "are", "was", "were", "be", "been", "am", "have", "has", "had", "do", "does", "did",
    "can", "could", "will", "would", "should", "want", "wants", "need", "needs", "like", "love",
    "let", "lets", "get", "looking", "interested", "reach", "reaching", "out",
    // deal and payment jargon
    "deal", "collab", "collaboration", "partnership", "partnerships", "sponsor", "sponsored",
    "sponsorship", "campaign", "brand", "client", "offer", "budget", "rate", "rates", "pay",
    "payment", "paid", "fee", "price", "pricing", "quote", "contract", "usd", "inr", "dollars",
    "rupees", "rs", "k", "tbd", "negotiate", "marketing", "agency",
    // platform and content jargon
    "instagram", "insta", "ig", "youtube", "yt", "tiktok", "tik", "tok", "tt", "reel", "reels",
    "post", "posts", "story", "stories", "short", "shorts", "video", "videos", "content",
    "creator", "influencer",
    // calendar words
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "today",
    "tomorrow", "tonight", "week", "weekend", "month", "january", "february", "march", "april",
    "may", "june", "july", "august", "september", "october", "november", "december",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// One word of a brand name: letters, digits, and the joiners brands use.
const NAME_WORD: &str = r"[\p{L}\p{N}][\p{L}\p{N}&'’.\-]*";

/// Structural patterns tried in order when the roster yields nothing. Each
/// exposes the candidate through the `name` capture group.
static INFERENCE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    let capitalized_tail = r"(?:\s+\p{Lu}[\p{L}\p{N}&'’.\-]*){0,2}";
    vec![
        (
            "label",
            format!(r"\b(?i:brand|client)\s*:\s*(?P<name>{NAME_WORD}{capitalized_tail})"),
        ),
        (
            "leading_subject",
            format!(
                r"^(?P<name>{NAME_WORD}(?:\s+{NAME_WORD}){{0,3}}?)\s+(?i:(?:wants?|needs?|would\s+like|is\s+looking|are\s+looking|is\s+interested|are\s+interested|collab(?:oration)?|partnership|campaign)\b)"
            ),
        ),
        (
            "from",
            format!(r"\b(?i:from)\s+(?P<name>[\p{{Lu}}\p{{N}}][\p{{L}}\p{{N}}&'’.\-]*{capitalized_tail})"),
        ),
        (
            "this_is_from",
            format!(
                r"(?i:\bthis\s+is|\bi\s+am|\bi['’]m)\s+[^,.!?\n]{{0,40}}?\s+(?i:from|at|with)\s+(?P<name>{NAME_WORD}{capitalized_tail})"
            ),
        ),
        (
            "greeting",
            format!(r"^(?i:hey|hi|hello|dear)\s+(?P<name>{NAME_WORD}{capitalized_tail})\s*[,!:]"),
        ),
    ]
    .into_iter()
    .map(|(label, pattern)| {
        let re = Regex::new(&pattern).expect("valid brand inference regex");
        (label, re)
    })
    .collect()
});

/// Resolves the brand a message is about.
///
/// Roster brands are tried first (see [`match_known_brand`]); when none
/// matches, the name is inferred from message structure.
#[must_use]
pub fn match_brand(text: &str, known_brands: &[String]) -> Option<String> {
    match_known_brand(text, known_brands).or_else(|| infer_brand(text))
}

/// Best roster match for `text`, or `None`.
///
/// A brand whose normalized name appears anywhere in the normalized text
/// (hashtags and run-together handles included) scores
/// `len(brand) / len(text) + 0.5`, favouring longer, more specific names.
/// Otherwise the Jaccard overlap between brand tokens and the message's
/// non-stop-word tokens is used, if it reaches the 0.4 threshold. The
/// single highest score wins; on a tie the earlier roster entry is kept.
#[must_use]
pub fn match_known_brand(text: &str, known_brands: &[String]) -> Option<String> {
    let norm_text = normalize(text);
    if norm_text.is_empty() {
        return None;
    }
    let text_tokens: HashSet<&str> = norm_text
        .split(' ')
        .filter(|t| !STOP_WORD_SET.contains(t))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let text_len = norm_text.chars().count() as f64;

    let mut best: Option<(f64, &str)> = None;
    for brand in known_brands {
        let norm_brand = normalize(brand);
        if norm_brand.is_empty() {
            continue;
        }

        let score = if norm_text.contains(&norm_brand) {
            #[allow(clippy::cast_precision_loss)]
            let brand_len = norm_brand.chars().count() as f64;
            brand_len / text_len + SUBSTRING_BONUS
        } else {
            let brand_tokens: HashSet<&str> = norm_brand.split(' ').collect();
            let overlap = jaccard(&brand_tokens, &text_tokens);
            if overlap < TOKEN_OVERLAP_THRESHOLD {
                continue;
            }
            overlap
        };

        if best.is_none_or(|(top, _)| score > top) {
            best = Some((score, brand.trim()));
        }
    }

    best.map(|(score, name)| {
        tracing::trace!(brand = name, score, "roster brand matched");
        name.to_string()
    })
}

/// Infers a brand name from message structure alone.
///
/// Patterns are tried in a fixed order: `brand:`/`client:` labels, a leading
/// subject before a request verb ("Nike wants…"), "from X", "this is … from
/// X", then a greeting ("Hey X,"). Within a pattern the first match that
/// survives cleaning wins.
#[must_use]
pub fn infer_brand(text: &str) -> Option<String> {
    INFERENCE_PATTERNS.iter().find_map(|(label, re)| {
        re.captures_iter(text).find_map(|caps| {
            let raw = caps.name("name")?.as_str();
            let cleaned = clean_candidate(raw);
            if cleaned.is_none() {
                tracing::trace!(pattern = *label, candidate = raw, "rejected inferred brand");
            }
            cleaned
        })
    })
}

/// Trims punctuation and trailing team/agency suffixes from an inferred
/// name; returns `None` when nothing brand-like remains.
fn clean_candidate(raw: &str) -> Option<String> {
    let mut words: Vec<&str> = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    while words
        .last()
        .is_some_and(|w| TRAILING_SUFFIXES.contains(&w.to_lowercase().as_str()))
    {
        words.pop();
    }

    let name = words.join(" ");
    if name.is_empty() || is_generic(&name) {
        return None;
    }
    Some(name)
}

/// True when every normalized token is a stop word or a bare number.
fn is_generic(name: &str) -> bool {
    normalize(name)
        .split(' ')
        .all(|t| STOP_WORD_SET.contains(t) || t.chars().all(|c| c.is_ascii_digit()))
}

/// Lowercases, turns punctuation into spaces, and collapses whitespace.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = a.intersection(b).count() as f64 / union as f64;
    ratio
}

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;
