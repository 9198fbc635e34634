use std::collections::BTreeMap;

use log::{debug, error};

use crate::{
    CreateError, DeleteError, FunctionalGroup, Location, MatchSuggestion, MuscleGroupConfig,
    ProfileID, ReadError, ScientificMuscle, UnmappedExercise, UpdateError, UserExerciseMapping,
    WorkoutSet, mapping, matching, workout,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workout_sets(&self, profile: ProfileID) -> Result<Vec<WorkoutSet>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait MappingRepository {
    async fn read_unmapped_exercises(
        &self,
        profile: ProfileID,
    ) -> Result<Vec<UnmappedExercise>, ReadError>;
    async fn read_user_mappings(
        &self,
        profile: ProfileID,
    ) -> Result<Vec<UserExerciseMapping>, ReadError>;
    async fn create_user_mapping(
        &self,
        mapping: UserExerciseMapping,
    ) -> Result<UserExerciseMapping, CreateError>;
    async fn delete_user_mapping(
        &self,
        profile: ProfileID,
        name_id: &str,
    ) -> Result<(), DeleteError>;
    async fn delete_unmapped_exercise(
        &self,
        profile: ProfileID,
        name_id: &str,
    ) -> Result<(), DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait GroupConfigRepository {
    async fn read_group_config(
        &self,
        profile: ProfileID,
    ) -> Result<Option<MuscleGroupConfig>, ReadError>;
    async fn replace_group_config(
        &self,
        profile: ProfileID,
        config: MuscleGroupConfig,
    ) -> Result<MuscleGroupConfig, UpdateError>;
}

pub struct Service<R> {
    repository: R,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R> Service<R>
where
    R: WorkoutRepository + MappingRepository,
{
    /// Per-muscle volume over all logged sets of a profile, with user
    /// overrides applied.
    pub async fn muscle_volume_stats(
        &self,
        profile: ProfileID,
    ) -> Result<BTreeMap<ScientificMuscle, f32>, ReadError> {
        let sets = log_on_error!(
            self.repository.read_workout_sets(profile),
            ReadError,
            "get",
            "workout sets"
        )?;
        let user_mappings = log_on_error!(
            self.repository.read_user_mappings(profile),
            ReadError,
            "get",
            "user mappings"
        )?
        .into_iter()
        .map(|m| (m.name_id.clone(), m))
        .collect();

        let resolved = mapping::resolve_all(
            sets.iter().map(|s| s.exercise_id.as_str()),
            &user_mappings,
        );

        Ok(workout::muscle_volume(&sets, &resolved))
    }

    /// [`Service::muscle_volume_stats`] rolled up into functional groups
    /// via the default grouping.
    pub async fn functional_group_stats(
        &self,
        profile: ProfileID,
    ) -> Result<BTreeMap<FunctionalGroup, f32>, ReadError> {
        let volume = self.muscle_volume_stats(profile).await?;
        Ok(workout::functional_group_volume(
            &volume,
            &workout::default_grouping(),
        ))
    }
}

impl<R: MappingRepository> Service<R> {
    pub async fn auto_match_suggestions(
        &self,
        profile: ProfileID,
    ) -> Result<Vec<MatchSuggestion>, ReadError> {
        let unmapped = log_on_error!(
            self.repository.read_unmapped_exercises(profile),
            ReadError,
            "get",
            "unmapped exercises"
        )?;
        Ok(matching::suggest_matches(&unmapped))
    }

    /// Persist a user mapping and remove the unmapped record it supersedes.
    pub async fn save_user_mapping(
        &self,
        mapping: UserExerciseMapping,
    ) -> Result<UserExerciseMapping, CreateError> {
        let profile = mapping.profile;
        let name_id = mapping.name_id.clone();
        let mapping = log_on_error!(
            self.repository.create_user_mapping(mapping),
            CreateError,
            "create",
            "user mapping"
        )?;
        log_on_error!(
            self.repository.delete_unmapped_exercise(profile, &name_id),
            DeleteError,
            "delete",
            "unmapped exercise"
        )?;
        Ok(mapping)
    }

    pub async fn remove_user_mapping(
        &self,
        profile: ProfileID,
        name_id: &str,
    ) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.delete_user_mapping(profile, name_id),
            DeleteError,
            "delete",
            "user mapping"
        )
    }
}

impl<R: GroupConfigRepository> Service<R> {
    /// The profile's group configuration, or the default presets if none
    /// has been stored yet.
    pub async fn group_config(&self, profile: ProfileID) -> Result<MuscleGroupConfig, ReadError> {
        Ok(log_on_error!(
            self.repository.read_group_config(profile),
            ReadError,
            "get",
            "group config"
        )?
        .unwrap_or_default())
    }

    /// Move a muscle and persist the resulting configuration.
    pub async fn move_muscle(
        &self,
        profile: ProfileID,
        muscle: ScientificMuscle,
        target: Location,
    ) -> Result<MuscleGroupConfig, UpdateError> {
        let config = self.group_config(profile).await?;
        let config = config
            .move_muscle(muscle, target)
            .map_err(|err| UpdateError::Other(Box::new(err)))?;
        log_on_error!(
            self.repository.replace_group_config(profile, config),
            UpdateError,
            "replace",
            "group config"
        )
    }
}
