//! Keyword-based negotiation status classifier.

use std::sync::LazyLock;

use dealdesk_core::DealStatus;
use regex::Regex;

/// Phrases that mean the deal is closed. Checked before
/// [`NEGOTIATING_KEYWORDS`]: "approved, but can we lower the rate?" is AGREED.
pub(crate) const AGREED_KEYWORDS: &[&str] = &[
    "agreed",
    "locked in",
    "lock it in",
    "confirmed",
    "approved",
    "greenlit",
    "green lit",
    "green-lit",
    "finalized",
    "finalised",
    "signed",
    "accepted",
    "deal done",
    "it's a deal",
    "let's do it",
    "good to go",
];

pub(crate) const NEGOTIATING_KEYWORDS: &[&str] = &[
    "negotiate",
    "negotiating",
    "negotiation",
    "negotiable",
    "counter",
    "counter-offer",
    "counteroffer",
    "pricing",
    "budget",
    "lower",
    "higher",
    "offer",
    "offering",
    "proposal",
    "propose",
    "proposed",
    "discount",
    "flexible",
    "come down",
    "meet in the middle",
];

static AGREED_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(AGREED_KEYWORDS));
static NEGOTIATING_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(NEGOTIATING_KEYWORDS));

/// Classifies the negotiation stage of a message.
///
/// AGREED wins over NEGOTIATING; with no keyword from either set the message
/// is INBOUND. There is no scoring: the first set with any hit decides.
#[must_use]
pub fn classify_status(text: &str) -> DealStatus {
    if AGREED_RE.is_match(text) {
        DealStatus::Agreed
    } else if NEGOTIATING_RE.is_match(text) {
        DealStatus::Negotiating
    } else {
        DealStatus::Inbound
    }
}

/// Builds a case-insensitive, word-bounded alternation. Spaces inside a
/// phrase match any run of whitespace, and an apostrophe matches both the
/// straight and the typographic form.
fn keyword_regex(keywords: &[&str]) -> Regex {
    let alternation = keywords
        .iter()
        .map(|k| {
            k.split_whitespace()
                .map(|word| regex::escape(word).replace('\'', "['’]"))
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid status keyword regex")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_request_is_inbound() {
        assert_eq!(
            classify_status("Nike wants 2 reels for $1500"),
            DealStatus::Inbound
        );
    }

    #[test]
    fn empty_text_is_inbound() {
        assert_eq!(classify_status(""), DealStatus::Inbound);
    }

    #[test]
    fn negotiation_keyword() {
        assert_eq!(
            classify_status("Adidas collab - 3 posts, they'll pay $2000, let's negotiate pricing"),
            DealStatus::Negotiating
        );
    }

    #[test]
    fn counter_offer_with_hyphen() {
        assert_eq!(
            classify_status("They sent a Counter-Offer this morning"),
            DealStatus::Negotiating
        );
    }

    #[test]
    fn agreed_keyword() {
        assert_eq!(
            classify_status("Contract SIGNED, 2 reels at $900"),
            DealStatus::Agreed
        );
    }

    #[test]
    fn multiword_phrase_tolerates_extra_whitespace() {
        assert_eq!(
            classify_status("ok we're locked   in for friday"),
            DealStatus::Agreed
        );
    }

    #[test]
    fn agreed_takes_priority_over_negotiating() {
        assert_eq!(
            classify_status("Budget approved after a lower counter"),
            DealStatus::Agreed
        );
    }

    #[test]
    fn keywords_are_word_bounded() {
        // "designed" contains "signed"; "flower" contains "lower".
        assert_eq!(
            classify_status("we designed a flower themed reel"),
            DealStatus::Inbound
        );
    }

    #[test]
    fn typographic_apostrophe_matches() {
        assert_eq!(classify_status("It’s a deal! $500"), DealStatus::Agreed);
        assert_eq!(classify_status("Let’s do it, 2 reels"), DealStatus::Agreed);
    }

    #[test]
    fn every_keyword_is_recognised() {
        for k in AGREED_KEYWORDS {
            assert_eq!(classify_status(k), DealStatus::Agreed, "keyword {k:?}");
        }
        for k in NEGOTIATING_KEYWORDS {
            assert_eq!(classify_status(k), DealStatus::Negotiating, "keyword {k:?}");
        }
    }
}
