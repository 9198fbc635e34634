use derive_more::{AsRef, Display};

/// Remove every parenthetical segment from an exercise name.
///
/// Imported names frequently carry equipment or variant annotations in
/// parentheses ("Bench Press (Dumbbell)"). All such segments are removed,
/// regardless of position, and surrounding whitespace is collapsed.
#[must_use]
pub fn clean_exercise_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut depth = 0usize;

    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => result.push(c),
            _ => {}
        }
    }

    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Derive the normalized identifier used as a mapping key.
///
/// The same function must be applied to every imported name and to every
/// catalog entry, otherwise keys from different import sources diverge.
#[must_use]
pub fn normalize_id(name: &str) -> String {
    clean_exercise_name(name)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = trimmed_name.len();

        if len > 64 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(trimmed_name.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Bench Press (Dumbbell)", "Bench Press")]
    #[case("Bicep Curl (Dumbbell) (Single Arm)", "Bicep Curl")]
    #[case("Lateral Raise", "Lateral Raise")]
    #[case("  Squat  ", "Squat")]
    #[case("(Machine)", "")]
    #[case("Leg Press (Plate Loaded) Narrow", "Leg Press Narrow")]
    #[case("", "")]
    fn test_clean_exercise_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(clean_exercise_name(name), expected);
    }

    #[rstest]
    #[case("Bench Press (Dumbbell)", "bench-press")]
    #[case("Lateral   Raise", "lateral-raise")]
    #[case("Romanian Deadlift", "romanian-deadlift")]
    #[case("", "")]
    fn test_normalize_id(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize_id(name), expected);
    }

    #[rstest]
    #[case("Push", Ok(Name("Push".to_string())))]
    #[case("  Upper Body  ", Ok(Name("Upper Body".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(NameError::TooLong(65))
    )]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }
}
