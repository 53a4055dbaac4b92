//! Believability scoring for excuse text
//!
//! A deterministic heuristic over the generated text: word count, presence
//! of specific nouns, and alignment with the requested urgency level.

use crate::model::Urgency;

/// Words that make an excuse sound concrete rather than vague.
const SPECIFICITY_KEYWORDS: &[&str] = &[
    "doctor",
    "meeting",
    "emergency",
    "appointment",
    "family",
    "car",
    "sick",
    "traffic",
    "urgent",
    "hospital",
];

/// Bonus per specificity keyword hit.
const SPECIFICITY_BONUS: f64 = 0.5;

/// Cap on the total specificity bonus.
const SPECIFICITY_CAP: f64 = 2.0;

/// Flat bonus when the text matches the requested urgency's vocabulary.
const URGENCY_ALIGNMENT_BONUS: f64 = 1.5;

/// Keywords expected in text written for a given urgency level.
fn urgency_keywords(urgency: Urgency) -> &'static [&'static str] {
    match urgency {
        Urgency::High => &[
            "emergency",
            "urgent",
            "immediately",
            "crisis",
            "hospital",
            "serious",
        ],
        Urgency::Medium => &[
            "appointment",
            "meeting",
            "issue",
            "problem",
            "doctor",
            "important",
        ],
        Urgency::Low => &["feeling", "might", "possibly", "may", "think", "probably"],
    }
}

/// Score how believable an excuse reads, on a 0..=10 scale.
///
/// Starts from a neutral 5.0 and applies three adjustments:
/// word-count fit (+1.5 for 10..=40 words, -1.0 below 5 or above 60),
/// specificity (+0.5 per keyword, capped at +2.0), and a flat +1.5 when
/// any keyword of the requested urgency appears. The result is capped at
/// 10.0; there is deliberately no lower clamp on this path.
pub fn score(text: &str, urgency: Urgency) -> f64 {
    let mut score = 5.0;

    let word_count = text.split_whitespace().count();
    if (10..=40).contains(&word_count) {
        score += 1.5;
    } else if word_count < 5 || word_count > 60 {
        score -= 1.0;
    }

    let lowered = text.to_lowercase();

    let specificity_hits = SPECIFICITY_KEYWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    score += (specificity_hits as f64 * SPECIFICITY_BONUS).min(SPECIFICITY_CAP);

    if urgency_keywords(urgency)
        .iter()
        .any(|word| lowered.contains(word))
    {
        score += URGENCY_ALIGNMENT_BONUS;
    }

    score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_stays_within_bounds() {
        let rambling = "word ".repeat(100);
        let texts = [
            "",
            "ok",
            "I have an emergency appointment with my doctor at the hospital, \
             the meeting is urgent and my family is sick in traffic with the car.",
            rambling.as_str(),
        ];
        for text in texts {
            for urgency in [Urgency::Low, Urgency::Medium, Urgency::High] {
                let s = score(text, urgency);
                assert!((0.0..=10.0).contains(&s), "score {s} out of range");
            }
        }
    }

    #[test]
    fn high_urgency_example_beats_base() {
        // Contains "emergency" (specificity) and a high-urgency keyword.
        let s = score(
            "I have an emergency that requires immediate attention.",
            Urgency::High,
        );
        assert!(s > 5.0);
    }

    #[test]
    fn specificity_is_monotonic_up_to_cap() {
        // Same word count, growing keyword presence, all below 5 words
        // is avoided by padding to a constant 12-word length.
        let pad = |kw: &str| {
            let mut words: Vec<&str> = kw.split(' ').collect();
            while words.len() < 12 {
                words.push("thing");
            }
            words.join(" ")
        };

        let mut previous = f64::MIN;
        for keywords in [
            "",
            "doctor",
            "doctor car",
            "doctor car traffic",
            "doctor car traffic family",
            "doctor car traffic family sick",
        ] {
            let s = score(&pad(keywords), Urgency::High);
            assert!(s >= previous, "score decreased at '{keywords}'");
            previous = s;
        }
    }

    #[test]
    fn specificity_bonus_caps_at_two() {
        // Ten distinct keywords would be +5.0 uncapped.
        let all = "doctor meeting emergency appointment family car sick traffic urgent hospital";
        let few = "doctor meeting appointment family padding padding padding padding padding padding";
        // Both have 10 words and >= 4 keywords (capped), same urgency bonus.
        assert_eq!(score(all, Urgency::Low), score(few, Urgency::Low));
    }

    #[test]
    fn word_count_adjustments() {
        let short = "Sick today."; // 2 words: -1.0
        let fitting = "I am not feeling well today and will need to rest at home."; // 13 words: +1.5
        assert!(score(short, Urgency::High) < score(fitting, Urgency::High));
    }

    #[test]
    fn urgency_bonus_requires_matching_vocabulary() {
        // "probably" is low-urgency vocabulary, so high urgency gets no bonus.
        let text = "I will probably need to stay home and rest for the day now.";
        assert!(score(text, Urgency::Low) > score(text, Urgency::High));
    }

    #[test]
    fn score_never_exceeds_ten() {
        let stacked = "emergency urgent hospital doctor meeting appointment family car sick \
                       traffic serious crisis immediately important issue problem";
        assert_eq!(score(stacked, Urgency::High), 10.0);
    }
}
