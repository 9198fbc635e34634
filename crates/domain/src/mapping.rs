use std::collections::BTreeMap;

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{MuscleContributions, catalog};

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProfileID(Uuid);

impl ProfileID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ProfileID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ProfileID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// An imported exercise name with no resolved contribution table yet.
///
/// Created on first sight of an unknown name, its count bumped on repeats,
/// and superseded once a user mapping exists for its normalized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedExercise {
    pub profile: ProfileID,
    pub name_id: String,
    pub display_name: String,
    pub first_seen: NaiveDate,
    pub count: u32,
}

impl UnmappedExercise {
    #[must_use]
    pub fn new(profile: ProfileID, name_id: String, display_name: String, date: NaiveDate) -> Self {
        Self {
            profile,
            name_id,
            display_name,
            first_seen: date,
            count: 1,
        }
    }

    #[must_use]
    pub fn record_occurrence(mut self) -> Self {
        self.count += 1;
        self
    }
}

/// How a user mapping resolves an exercise name.
///
/// Exactly one mode is active per mapping. The variants make the precedence
/// of the former nullable-field encoding explicit and the illegal
/// combinations unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A user-defined contribution table, used verbatim.
    Custom(MuscleContributions),
    /// A redirect to a canonical exercise by normalized ID.
    Canonical(String),
    /// The exercise contributes no volume at all.
    Ignored,
}

/// Per-profile override for a single normalized exercise name.
#[derive(Debug, Clone, PartialEq)]
pub struct UserExerciseMapping {
    pub profile: ProfileID,
    pub name_id: String,
    pub resolution: Resolution,
}

/// Resolve the effective contribution table for one exercise ID.
///
/// Precedence: ignored, then custom values, then canonical redirect, then
/// the catalog entry under the exercise's own ID. `None` means the exercise
/// contributes no volume, which is the expected steady state for names the
/// user has not mapped yet.
#[must_use]
pub fn resolve_contributions(
    exercise_id: &str,
    user_mappings: &BTreeMap<String, UserExerciseMapping>,
) -> Option<MuscleContributions> {
    match user_mappings.get(exercise_id).map(|m| &m.resolution) {
        Some(Resolution::Ignored) => None,
        Some(Resolution::Custom(contributions)) => Some(contributions.clone()),
        Some(Resolution::Canonical(canonical_id)) => {
            catalog::get(canonical_id).map(catalog::Exercise::contributions)
        }
        None => catalog::get(exercise_id).map(catalog::Exercise::contributions),
    }
}

/// Resolve a batch of distinct exercise IDs into the effective table
/// consumed by the volume calculator.
#[must_use]
pub fn resolve_all<'a>(
    exercise_ids: impl IntoIterator<Item = &'a str>,
    user_mappings: &BTreeMap<String, UserExerciseMapping>,
) -> BTreeMap<String, MuscleContributions> {
    exercise_ids
        .into_iter()
        .filter_map(|id| resolve_contributions(id, user_mappings).map(|c| (id.to_string(), c)))
        .collect()
}
