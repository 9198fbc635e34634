#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod group_config;
pub mod mapping;
pub mod matching;
mod muscle;
pub mod name;
mod service;
pub mod workout;

pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{Contribution, ContributionError, MuscleContributions};
pub use group_config::{
    ConfigError, ConfigViolation, CustomMuscleGroup, GroupID, Location, MAX_GROUPS,
    MuscleGroupConfig,
};
pub use mapping::{
    ProfileID, Resolution, UnmappedExercise, UserExerciseMapping, resolve_all,
    resolve_contributions,
};
pub use matching::{MIN_CONFIDENCE, MatchSuggestion, suggest_matches};
pub use muscle::{FunctionalGroup, Property, ScientificMuscle};
pub use name::{Name, NameError, clean_exercise_name, normalize_id};
pub use service::{GroupConfigRepository, MappingRepository, Service, WorkoutRepository};
pub use workout::{
    RPE, RPEError, Reps, RepsError, SetType, Weight, WeightError, WorkoutSet, default_grouping,
    functional_group_volume, muscle_volume,
};
