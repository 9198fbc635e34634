use std::sync::LazyLock;

use crate::{
    Contribution, MuscleContributions, ScientificMuscle,
    name::{clean_exercise_name, normalize_id},
};

/// A canonical exercise with its predefined muscle-contribution table.
#[derive(Clone)]
pub struct Exercise {
    pub name: &'static str,
    pub muscles: &'static [(ScientificMuscle, Contribution)],
}

impl Exercise {
    #[must_use]
    pub fn contributions(&self) -> MuscleContributions {
        self.muscles.iter().copied().collect()
    }
}

/// An indexed catalog entry with its precomputed normalized ID.
pub struct Entry {
    pub id: String,
    pub exercise: &'static Exercise,
}

/// A search hit with its relevance score in (0, 1].
pub struct ScoredExercise {
    pub exercise: &'static Exercise,
    pub score: f32,
}

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

static INDEX: LazyLock<Vec<Entry>> = LazyLock::new(|| {
    let mut entries = EXERCISES
        .iter()
        .map(|e| Entry {
            id: normalize_id(e.name),
            exercise: e,
        })
        .collect::<Vec<_>>();
    entries.sort_by(|a, b| a.exercise.name.cmp(b.exercise.name));
    entries
});

/// All canonical exercises with their normalized IDs, in stable
/// (alphabetical) order. The index is computed once per process.
#[must_use]
pub fn all_exercises() -> &'static [Entry] {
    &INDEX
}

/// Look up a canonical exercise by its normalized ID.
#[must_use]
pub fn get(id: &str) -> Option<&'static Exercise> {
    INDEX
        .iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.exercise)
}

/// Search the catalog by free text.
///
/// Results are ordered by descending score, ties broken alphabetically, and
/// truncated to `limit`. Exercises sharing no word with the query are
/// excluded.
#[must_use]
pub fn search(query: &str, limit: usize) -> Vec<ScoredExercise> {
    let query = expand_search_abbreviations(&clean_exercise_name(query).to_lowercase());
    let mut results = INDEX
        .iter()
        .filter_map(|entry| {
            score(&query, entry.exercise.name).map(|score| ScoredExercise {
                exercise: entry.exercise,
                score,
            })
        })
        .collect::<Vec<_>>();
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.exercise.name.cmp(b.exercise.name))
    });
    results.truncate(limit);
    results
}

fn expand_search_abbreviations(query: &str) -> String {
    static ABBREVIATIONS: [(&str, &str); 2] = [("db", "dumbbell"), ("bb", "barbell")];

    query
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbreviation, _)| *abbreviation == word)
                .map_or(word, |(_, expansion)| *expansion)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn score(query: &str, name: &str) -> Option<f32> {
    if query.is_empty() {
        return None;
    }

    let name = name.to_lowercase();

    if name == query {
        return Some(1.0);
    }

    if name.starts_with(query) {
        return Some(0.9);
    }

    let query_words = query.split_whitespace().collect::<Vec<_>>();
    let name_words = name.split_whitespace().collect::<Vec<_>>();
    let matched = query_words
        .iter()
        .filter(|&&q| name_words.iter().any(|&n| q.contains(n) || n.contains(q)))
        .count();

    if matched == 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let match_ratio = matched as f32 / query_words.len() as f32;

    if matched == query_words.len() {
        Some(0.7 + 0.1 * match_ratio)
    } else {
        Some(0.3 + 0.3 * match_ratio)
    }
}

const P: Contribution = Contribution::PRIMARY;
const S: Contribution = Contribution::SECONDARY;
const A: Contribution = Contribution::AUXILIARY;

static EXERCISES: [Exercise; 42] = [
    Exercise {
        name: "Bench Press",
        muscles: &[
            (ScientificMuscle::PecsLower, P),
            (ScientificMuscle::PecsUpper, S),
            (ScientificMuscle::FrontDelts, S),
            (ScientificMuscle::TricepsLateral, S),
            (ScientificMuscle::TricepsLong, A),
        ],
    },
    Exercise {
        name: "Incline Bench Press",
        muscles: &[
            (ScientificMuscle::PecsUpper, P),
            (ScientificMuscle::PecsLower, A),
            (ScientificMuscle::FrontDelts, S),
            (ScientificMuscle::TricepsLateral, S),
        ],
    },
    Exercise {
        name: "Close Grip Bench Press",
        muscles: &[
            (ScientificMuscle::TricepsLateral, P),
            (ScientificMuscle::TricepsLong, P),
            (ScientificMuscle::PecsLower, S),
            (ScientificMuscle::FrontDelts, A),
        ],
    },
    Exercise {
        name: "Push Up",
        muscles: &[
            (ScientificMuscle::PecsLower, P),
            (ScientificMuscle::PecsUpper, S),
            (ScientificMuscle::FrontDelts, S),
            (ScientificMuscle::TricepsLateral, S),
            (ScientificMuscle::RectusAbdominis, A),
        ],
    },
    Exercise {
        name: "Chest Fly",
        muscles: &[
            (ScientificMuscle::PecsLower, P),
            (ScientificMuscle::PecsUpper, S),
            (ScientificMuscle::FrontDelts, A),
        ],
    },
    Exercise {
        name: "Overhead Press",
        muscles: &[
            (ScientificMuscle::FrontDelts, P),
            (ScientificMuscle::SideDelts, S),
            (ScientificMuscle::TricepsLateral, S),
            (ScientificMuscle::TricepsLong, A),
            (ScientificMuscle::Traps, A),
        ],
    },
    Exercise {
        name: "Lateral Raise",
        muscles: &[
            (ScientificMuscle::SideDelts, P),
            (ScientificMuscle::FrontDelts, A),
            (ScientificMuscle::Traps, A),
        ],
    },
    Exercise {
        name: "Rear Delt Fly",
        muscles: &[
            (ScientificMuscle::RearDelts, P),
            (ScientificMuscle::Rhomboids, S),
            (ScientificMuscle::Traps, A),
        ],
    },
    Exercise {
        name: "Face Pull",
        muscles: &[
            (ScientificMuscle::RearDelts, P),
            (ScientificMuscle::Traps, S),
            (ScientificMuscle::Rhomboids, S),
        ],
    },
    Exercise {
        name: "Shrug",
        muscles: &[
            (ScientificMuscle::Traps, P),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Pull Up",
        muscles: &[
            (ScientificMuscle::Lats, P),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::BicepsShort, S),
            (ScientificMuscle::Rhomboids, S),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Chin Up",
        muscles: &[
            (ScientificMuscle::Lats, P),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::BicepsShort, S),
            (ScientificMuscle::Brachialis, A),
        ],
    },
    Exercise {
        name: "Lat Pulldown",
        muscles: &[
            (ScientificMuscle::Lats, P),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::Rhomboids, A),
            (ScientificMuscle::RearDelts, A),
        ],
    },
    Exercise {
        name: "Seated Row",
        muscles: &[
            (ScientificMuscle::Lats, P),
            (ScientificMuscle::Rhomboids, S),
            (ScientificMuscle::Traps, S),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::RearDelts, A),
        ],
    },
    Exercise {
        name: "Bent Over Row",
        muscles: &[
            (ScientificMuscle::Lats, P),
            (ScientificMuscle::Rhomboids, S),
            (ScientificMuscle::Traps, S),
            (ScientificMuscle::ErectorSpinae, S),
            (ScientificMuscle::BicepsLong, A),
        ],
    },
    Exercise {
        name: "Deadlift",
        muscles: &[
            (ScientificMuscle::ErectorSpinae, P),
            (ScientificMuscle::GlutesMax, P),
            (ScientificMuscle::Hamstrings, S),
            (ScientificMuscle::Traps, S),
            (ScientificMuscle::QuadsVasti, A),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Romanian Deadlift",
        muscles: &[
            (ScientificMuscle::Hamstrings, P),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::ErectorSpinae, S),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Back Extension",
        muscles: &[
            (ScientificMuscle::ErectorSpinae, P),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::Hamstrings, S),
        ],
    },
    Exercise {
        name: "Squat",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::QuadsRectusFemoris, S),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::Adductors, S),
            (ScientificMuscle::ErectorSpinae, A),
        ],
    },
    Exercise {
        name: "Front Squat",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::QuadsRectusFemoris, S),
            (ScientificMuscle::GlutesMax, A),
            (ScientificMuscle::RectusAbdominis, A),
        ],
    },
    Exercise {
        name: "Leg Press",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::QuadsRectusFemoris, S),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::Adductors, A),
        ],
    },
    Exercise {
        name: "Leg Extension",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::QuadsRectusFemoris, P),
        ],
    },
    Exercise {
        name: "Leg Curl",
        muscles: &[
            (ScientificMuscle::Hamstrings, P),
            (ScientificMuscle::Calves, A),
        ],
    },
    Exercise {
        name: "Bulgarian Split Squat",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::GlutesMed, S),
            (ScientificMuscle::Adductors, A),
        ],
    },
    Exercise {
        name: "Lunge",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::GlutesMed, A),
            (ScientificMuscle::Hamstrings, A),
        ],
    },
    Exercise {
        name: "Hip Thrust",
        muscles: &[
            (ScientificMuscle::GlutesMax, P),
            (ScientificMuscle::Hamstrings, S),
            (ScientificMuscle::QuadsVasti, A),
        ],
    },
    Exercise {
        name: "Hip Abduction",
        muscles: &[
            (ScientificMuscle::GlutesMed, P),
            (ScientificMuscle::GlutesMax, A),
        ],
    },
    Exercise {
        name: "Hip Adduction",
        muscles: &[(ScientificMuscle::Adductors, P)],
    },
    Exercise {
        name: "Calf Raise",
        muscles: &[(ScientificMuscle::Calves, P)],
    },
    Exercise {
        name: "Bicep Curl",
        muscles: &[
            (ScientificMuscle::BicepsLong, P),
            (ScientificMuscle::BicepsShort, P),
            (ScientificMuscle::Brachialis, S),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Hammer Curl",
        muscles: &[
            (ScientificMuscle::Brachialis, P),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Preacher Curl",
        muscles: &[
            (ScientificMuscle::BicepsShort, P),
            (ScientificMuscle::BicepsLong, S),
            (ScientificMuscle::Brachialis, S),
        ],
    },
    Exercise {
        name: "Tricep Extension",
        muscles: &[
            (ScientificMuscle::TricepsLong, P),
            (ScientificMuscle::TricepsLateral, S),
        ],
    },
    Exercise {
        name: "Tricep Pushdown",
        muscles: &[
            (ScientificMuscle::TricepsLateral, P),
            (ScientificMuscle::TricepsLong, S),
        ],
    },
    Exercise {
        name: "Skull Crusher",
        muscles: &[
            (ScientificMuscle::TricepsLong, P),
            (ScientificMuscle::TricepsLateral, S),
        ],
    },
    Exercise {
        name: "Wrist Curl",
        muscles: &[(ScientificMuscle::ForearmFlexors, P)],
    },
    Exercise {
        name: "Reverse Wrist Curl",
        muscles: &[(ScientificMuscle::ForearmExtensors, P)],
    },
    Exercise {
        name: "Crunch",
        muscles: &[
            (ScientificMuscle::RectusAbdominis, P),
            (ScientificMuscle::Obliques, A),
        ],
    },
    Exercise {
        name: "Plank",
        muscles: &[
            (ScientificMuscle::TransverseAbdominis, P),
            (ScientificMuscle::RectusAbdominis, S),
            (ScientificMuscle::Obliques, S),
        ],
    },
    Exercise {
        name: "Russian Twist",
        muscles: &[
            (ScientificMuscle::Obliques, P),
            (ScientificMuscle::RectusAbdominis, S),
        ],
    },
    Exercise {
        name: "Hanging Leg Raise",
        muscles: &[
            (ScientificMuscle::RectusAbdominis, P),
            (ScientificMuscle::Obliques, A),
            (ScientificMuscle::ForearmFlexors, A),
        ],
    },
    Exercise {
        name: "Goblet Squat",
        muscles: &[
            (ScientificMuscle::QuadsVasti, P),
            (ScientificMuscle::QuadsRectusFemoris, S),
            (ScientificMuscle::GlutesMax, S),
            (ScientificMuscle::RectusAbdominis, A),
        ],
    },
];
