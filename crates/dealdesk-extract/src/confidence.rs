//! Calibrated confidence for an extraction.
//!
//! Scores are kept in hundredths internally so that the step values and the
//! schedule bonus combine exactly (0.70 + 0.05 is 0.75, not 0.7499…).

use std::sync::LazyLock;

use regex::Regex;

/// Score for 0, 1, 2, 3, and 4 present fields, in hundredths.
const COVERAGE_STEPS: [u8; 5] = [10, 30, 50, 70, 90];

/// Added when the message mentions a date or time, in hundredths.
const SCHEDULE_BONUS: u8 = 5;

/// Overall ceiling, in hundredths.
const CONFIDENCE_CAP: u8 = 95;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)";

static SCHEDULE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // relative day words
        r"(?i)\b(?:today|tonight|tomorrow|tmrw|yesterday|this\s+week(?:end)?|next\s+(?:week|month)|weekend|eod|end\s+of\s+(?:the\s+)?(?:day|week|month))\b".to_string(),
        // weekday names
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|tues|wed|thu|thur|thurs|fri)\b".to_string(),
        // numeric dates
        r"\b\d{1,2}/\d{1,2}(?:/\d{2,4})?\b|\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}-\d{1,2}-\d{2,4}\b".to_string(),
        // month-name dates
        format!(r"(?i)\b{MONTH}\.?\s+\d{{1,2}}(?:st|nd|rd|th)?\b|\b\d{{1,2}}(?:st|nd|rd|th)?\s+(?:of\s+)?{MONTH}\b"),
        // clock times
        r"(?i)\b\d{1,2}(?::\d{2})?\s*(?:am|pm)\b|\b\d{1,2}:\d{2}\b".to_string(),
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid schedule regex"))
    .collect()
});

/// Which of the four independent fields an extraction produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldCoverage {
    pub brand: bool,
    pub value: bool,
    pub currency: bool,
    pub deliverables: bool,
}

impl FieldCoverage {
    #[must_use]
    pub fn count(self) -> usize {
        [self.brand, self.value, self.currency, self.deliverables]
            .into_iter()
            .filter(|present| *present)
            .count()
    }
}

/// Maps field coverage to a step score and adds the schedule bonus when
/// `text` mentions a date or time. The result is always in `[0.10, 0.95]`.
#[must_use]
pub fn score_confidence(coverage: FieldCoverage, text: &str) -> f64 {
    let mut hundredths = COVERAGE_STEPS[coverage.count().min(COVERAGE_STEPS.len() - 1)];
    if mentions_schedule(text) {
        hundredths = (hundredths + SCHEDULE_BONUS).min(CONFIDENCE_CAP);
    }
    f64::from(hundredths) / 100.0
}

/// True when the text contains a relative day, weekday, date, or clock time.
#[must_use]
pub fn mentions_schedule(text: &str) -> bool {
    SCHEDULE_PATTERNS.iter().any(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(n: usize) -> FieldCoverage {
        FieldCoverage {
            brand: n > 0,
            value: n > 1,
            currency: n > 2,
            deliverables: n > 3,
        }
    }

    #[test]
    fn step_values_without_schedule() {
        let expected = [0.10, 0.30, 0.50, 0.70, 0.90];
        for (n, want) in expected.into_iter().enumerate() {
            let got = score_confidence(coverage(n), "no dates here");
            assert!((got - want).abs() < f64::EPSILON, "{n} fields: got {got}, want {want}");
        }
    }

    #[test]
    fn schedule_bonus_added() {
        let got = score_confidence(coverage(3), "can you post it tomorrow?");
        assert!((got - 0.75).abs() < f64::EPSILON, "got {got}");
    }

    #[test]
    fn schedule_bonus_capped() {
        let got = score_confidence(coverage(4), "live on Friday at 5pm");
        assert!((got - 0.95).abs() < f64::EPSILON, "got {got}");
    }

    #[test]
    fn empty_coverage_scores_floor() {
        let got = score_confidence(FieldCoverage::default(), "");
        assert!((got - 0.10).abs() < f64::EPSILON, "got {got}");
    }

    #[test]
    fn count_fields() {
        assert_eq!(FieldCoverage::default().count(), 0);
        assert_eq!(coverage(4).count(), 4);
        let partial = FieldCoverage {
            value: true,
            deliverables: true,
            ..FieldCoverage::default()
        };
        assert_eq!(partial.count(), 2);
    }

    #[test]
    fn schedule_patterns() {
        for text in [
            "going live tomorrow",
            "by end of the week",
            "shoot on Tuesday",
            "due 12/05",
            "due 2026-11-03",
            "post on March 3rd",
            "on the 14th of feb",
            "call at 10:30",
            "drop at 7 pm",
        ] {
            assert!(mentions_schedule(text), "expected schedule match in {text:?}");
        }
    }

    #[test]
    fn non_schedule_text() {
        for text in [
            "Nike wants 2 reels for $1500",
            "3-4 reels, rate is $1.50 per view",
            "we may add a story",
            "market 5 products",
        ] {
            assert!(!mentions_schedule(text), "unexpected schedule match in {text:?}");
        }
    }
}
