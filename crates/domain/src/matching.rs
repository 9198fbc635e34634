use crate::{UnmappedExercise, catalog, name::clean_exercise_name};

/// Minimum confidence for a suggestion to be emitted.
pub const MIN_CONFIDENCE: f32 = 0.6;

/// A proposed canonical match for one unmapped exercise.
///
/// Derived data, recomputed on demand and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSuggestion {
    pub name_id: String,
    pub canonical_id: String,
    pub canonical_name: &'static str,
    pub confidence: f32,
    pub reason: String,
}

static ABBREVIATIONS: [(&str, &str); 7] = [
    ("db", "dumbbell"),
    ("bb", "barbell"),
    ("ext", "extension"),
    ("ez", "ez bar"),
    ("ohp", "overhead press"),
    ("rdl", "romanian deadlift"),
    ("cgbp", "close grip bench press"),
];

static BRAND_MARKERS: [&str; 9] = [
    "domar",
    "technogym",
    "precor",
    "cybex",
    "nautilus",
    "hoist",
    "gym80",
    "panatta",
    "eleiko",
];

static UNILATERAL_MARKERS: [&str; 7] = [
    "single arm",
    "single leg",
    "single hand",
    "one arm",
    "one leg",
    "one hand",
    "unilateral",
];

static POSITION_PREFIXES: [&str; 8] = [
    "seated", "standing", "lying", "incline", "decline", "kneeling", "bent", "over",
];

static EQUIPMENT_WORDS: [&str; 10] = [
    "machine",
    "cable",
    "dumbbell",
    "barbell",
    "smith",
    "band",
    "kettlebell",
    "plate",
    "bodyweight",
    "bar",
];

static STOPWORDS: [&str; 4] = ["the", "and", "with", "for"];

/// Propose at most one canonical match per unmapped exercise.
///
/// Pure and deterministic: identical inputs yield identical suggestions.
/// Exercises with no candidate at or above [`MIN_CONFIDENCE`] are omitted.
#[must_use]
pub fn suggest_matches(unmapped: &[UnmappedExercise]) -> Vec<MatchSuggestion> {
    let candidates = catalog::all_exercises()
        .iter()
        .map(|entry| {
            let normalized = normalize_for_matching(entry.exercise.name);
            let core = core_words(&normalized);
            (entry, normalized, core)
        })
        .collect::<Vec<_>>();

    unmapped
        .iter()
        .filter_map(|exercise| {
            let normalized = normalize_for_matching(&exercise.display_name);
            let core = core_words(&normalized);
            let mut best: Option<MatchSuggestion> = None;

            for (entry, canonical_normalized, canonical_core) in &candidates {
                let (score, matched) =
                    confidence(&normalized, &core, canonical_normalized, canonical_core);

                if score > best.as_ref().map_or(0.0, |b| b.confidence) {
                    let reason = if matched.is_empty() {
                        "names match".to_string()
                    } else {
                        format!("matched: {}", matched.join(", "))
                    };
                    best = Some(MatchSuggestion {
                        name_id: exercise.name_id.clone(),
                        canonical_id: entry.id.clone(),
                        canonical_name: entry.exercise.name,
                        confidence: score,
                        reason,
                    });
                }
            }

            best.filter(|suggestion| suggestion.confidence >= MIN_CONFIDENCE)
        })
        .collect()
}

/// Normalize a raw name for matching: strip parentheses, lowercase, expand
/// abbreviations and drop gym-brand markers.
fn normalize_for_matching(name: &str) -> String {
    clean_exercise_name(name)
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbreviation, _)| *abbreviation == word)
                .map_or(word, |(_, expansion)| *expansion)
        })
        .filter(|word| !BRAND_MARKERS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the words that carry the identity of an exercise, dropping
/// unilateral markers, position prefixes, equipment words, stopwords and
/// short words.
fn core_words(normalized: &str) -> Vec<String> {
    let mut stripped = normalized.to_string();
    for marker in UNILATERAL_MARKERS {
        stripped = stripped.replace(marker, " ");
    }

    stripped
        .split_whitespace()
        .filter(|word| {
            word.len() >= 3
                && !POSITION_PREFIXES.contains(word)
                && !EQUIPMENT_WORDS.contains(word)
                && !STOPWORDS.contains(word)
        })
        .map(ToString::to_string)
        .collect()
}

fn words_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Confidence that an unmapped name denotes a canonical exercise, together
/// with the unmapped core words that matched.
fn confidence(
    unmapped_normalized: &str,
    unmapped_core: &[String],
    canonical_normalized: &str,
    canonical_core: &[String],
) -> (f32, Vec<String>) {
    if unmapped_normalized == canonical_normalized && !unmapped_normalized.is_empty() {
        return (1.0, vec![]);
    }

    let matched = unmapped_core
        .iter()
        .filter(|u| canonical_core.iter().any(|c| words_match(u, c)))
        .cloned()
        .collect::<Vec<_>>();

    if matched.is_empty() || canonical_core.is_empty() {
        return (0.0, vec![]);
    }

    let canonical_matched = canonical_core
        .iter()
        .filter(|c| unmapped_core.iter().any(|u| words_match(u, c)))
        .count();

    if matched.len() == unmapped_core.len() && canonical_matched == canonical_core.len() {
        return (0.9, matched);
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = (matched.len() as f32 / unmapped_core.len().min(canonical_core.len()) as f32)
        .min(1.0);

    let confidence = if ratio >= 0.8 {
        0.7 + 0.2 * ratio
    } else if ratio >= 0.5 {
        0.5 + 0.2 * ratio
    } else {
        0.3 * ratio
    };

    (confidence, matched)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn unmapped(display_name: &str) -> UnmappedExercise {
        UnmappedExercise::new(
            1.into(),
            crate::name::normalize_id(display_name),
            display_name.to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[rstest]
    #[case("Bench Press (Dumbbell)", "bench press")]
    #[case("Lateral raise Domar", "lateral raise")]
    #[case("OHP", "overhead press")]
    #[case("RDL", "romanian deadlift")]
    #[case("DB Curl", "dumbbell curl")]
    #[case("", "")]
    fn test_normalize_for_matching(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize_for_matching(name), expected);
    }

    #[rstest]
    #[case("lateral raise", &["lateral", "raise"])]
    #[case("seated cable row machine", &["row"])]
    #[case("single arm dumbbell curl", &["curl"])]
    #[case("bent over row", &["row"])]
    #[case("ez bar curl", &["curl"])]
    fn test_core_words(#[case] normalized: &str, #[case] expected: &[&str]) {
        assert_eq!(core_words(normalized), expected);
    }

    #[rstest]
    #[case::brand_suffix("Lateral raise Domar", Some("Lateral Raise"))]
    #[case::exact_with_equipment("Bench Press (Dumbbell)", Some("Bench Press"))]
    #[case::abbreviation("RDL (Barbell)", Some("Romanian Deadlift"))]
    #[case::brand_word("Lat Pulldown Technogym", Some("Lat Pulldown"))]
    #[case::position_and_equipment("Standing Calf Raise Machine", Some("Calf Raise"))]
    #[case::no_match("Completely Random Exercise XYZ123", None)]
    #[case::empty("", None)]
    fn test_suggest_matches(#[case] name: &str, #[case] expected: Option<&str>) {
        let suggestions = suggest_matches(&[unmapped(name)]);

        assert_eq!(suggestions.first().map(|s| s.canonical_name), expected);
        for suggestion in &suggestions {
            assert!(suggestion.confidence >= MIN_CONFIDENCE);
        }
    }

    #[test]
    fn test_suggest_matches_exact_confidence_and_reason() {
        let suggestions = suggest_matches(&[unmapped("Bench Press")]);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].confidence, 1.0);
        assert_eq!(suggestions[0].reason, "names match");
        assert_eq!(suggestions[0].canonical_id, "bench-press");
    }

    #[test]
    fn test_suggest_matches_brand_marker_only_difference_is_exact() {
        // Stripping the brand marker leaves the canonical name itself.
        let suggestions = suggest_matches(&[unmapped("Lateral raise Domar")]);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].confidence, 1.0);
        assert_eq!(suggestions[0].reason, "names match");
    }

    #[test]
    fn test_suggest_matches_reason_lists_matched_words() {
        let suggestions = suggest_matches(&[unmapped("Lateral raise cable Domar")]);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].canonical_name, "Lateral Raise");
        assert_eq!(suggestions[0].reason, "matched: lateral, raise");
    }

    #[test]
    fn test_suggest_matches_at_most_one_per_input() {
        let input = [
            unmapped("Lateral raise Domar"),
            unmapped("Squat (Barbell)"),
            unmapped("Some Unknowable Movement QQQ"),
        ];
        let suggestions = suggest_matches(&input);

        assert!(suggestions.len() <= input.len());
        let mut ids = suggestions.iter().map(|s| &s.name_id).collect::<Vec<_>>();
        ids.dedup();
        assert_eq!(ids.len(), suggestions.len());
    }

    #[test]
    fn test_suggest_matches_deterministic() {
        let input = [
            unmapped("Lateral raise Domar"),
            unmapped("DB Curl"),
            unmapped("Leg Press (Plate Loaded)"),
        ];

        assert_eq!(suggest_matches(&input), suggest_matches(&input));
    }
}
