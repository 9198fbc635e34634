use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, Property, ScientificMuscle};

/// Maximum number of named groups per profile.
pub const MAX_GROUPS: usize = 8;

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GroupID(Uuid);

impl GroupID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GroupID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GroupID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for GroupID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMuscleGroup {
    pub id: GroupID,
    pub name: Name,
    pub muscles: Vec<ScientificMuscle>,
}

/// Where a muscle lives within a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Group(GroupID),
    Ungrouped,
    Hidden,
}

/// Per-profile partition of all muscles into named groups plus the
/// ungrouped and hidden buckets.
///
/// A valid configuration holds every muscle exactly once across all
/// locations. Mutating operations return a new configuration and never
/// touch their input; [`MuscleGroupConfig::move_muscle`] is the sole
/// primitive for reassigning membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleGroupConfig {
    pub groups: Vec<CustomMuscleGroup>,
    pub ungrouped: Vec<ScientificMuscle>,
    pub hidden: Vec<ScientificMuscle>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigViolation {
    #[error("more than {MAX_GROUPS} groups ({0})")]
    TooManyGroups(usize),
    #[error("group {0} has no muscles")]
    EmptyGroup(Name),
    #[error("{} appears more than once", .0.name())]
    DuplicateMuscle(ScientificMuscle),
    #[error("{} is not assigned to any location", .0.name())]
    MissingMuscle(ScientificMuscle),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("group not found")]
    GroupNotFound,
    #[error("no more than {MAX_GROUPS} groups are allowed")]
    TooManyGroups,
}

impl MuscleGroupConfig {
    /// Check the partition invariant. All violations are reported together;
    /// an empty result means the configuration is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigViolation> {
        let mut violations = vec![];

        if self.groups.len() > MAX_GROUPS {
            violations.push(ConfigViolation::TooManyGroups(self.groups.len()));
        }

        for group in &self.groups {
            if group.muscles.is_empty() {
                violations.push(ConfigViolation::EmptyGroup(group.name.clone()));
            }
        }

        for muscle in ScientificMuscle::iter() {
            match self.locations().filter(|(_, m)| *m == muscle).count() {
                0 => violations.push(ConfigViolation::MissingMuscle(*muscle)),
                1 => {}
                _ => violations.push(ConfigViolation::DuplicateMuscle(*muscle)),
            }
        }

        violations
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Move a muscle to a new location.
    ///
    /// The muscle is removed from every list it appears in and appended to
    /// the target, so the partition invariant survives even a corrupted
    /// input. An unknown group ID is a hard error and the input is left
    /// untouched.
    pub fn move_muscle(
        &self,
        muscle: ScientificMuscle,
        target: Location,
    ) -> Result<MuscleGroupConfig, ConfigError> {
        if let Location::Group(id) = target {
            if !self.groups.iter().any(|g| g.id == id) {
                return Err(ConfigError::GroupNotFound);
            }
        }

        let mut config = self.clone();
        for group in &mut config.groups {
            group.muscles.retain(|m| *m != muscle);
        }
        config.ungrouped.retain(|m| *m != muscle);
        config.hidden.retain(|m| *m != muscle);

        match target {
            Location::Group(id) => {
                if let Some(group) = config.groups.iter_mut().find(|g| g.id == id) {
                    group.muscles.push(muscle);
                }
            }
            Location::Ungrouped => config.ungrouped.push(muscle),
            Location::Hidden => config.hidden.push(muscle),
        }

        Ok(config)
    }

    /// Append a new empty group. The caller is expected to move muscles in
    /// afterwards; an empty group is reported by [`MuscleGroupConfig::validate`].
    pub fn add_group(&self, name: Name) -> Result<(MuscleGroupConfig, GroupID), ConfigError> {
        if self.groups.len() >= MAX_GROUPS {
            return Err(ConfigError::TooManyGroups);
        }

        let id = GroupID::new();
        let mut config = self.clone();
        config.groups.push(CustomMuscleGroup {
            id,
            name,
            muscles: vec![],
        });

        Ok((config, id))
    }

    pub fn rename_group(&self, id: GroupID, name: Name) -> Result<MuscleGroupConfig, ConfigError> {
        let mut config = self.clone();
        let group = config
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(ConfigError::GroupNotFound)?;
        group.name = name;
        Ok(config)
    }

    /// Delete a group, routing its muscles to the ungrouped bucket.
    pub fn delete_group(&self, id: GroupID) -> Result<MuscleGroupConfig, ConfigError> {
        if !self.groups.iter().any(|g| g.id == id) {
            return Err(ConfigError::GroupNotFound);
        }

        let mut config = self.clone();
        let mut orphaned = vec![];
        config.groups.retain_mut(|g| {
            if g.id == id {
                orphaned.append(&mut g.muscles);
                false
            } else {
                true
            }
        });
        config.ungrouped.extend(orphaned);

        Ok(config)
    }

    fn locations(&self) -> impl Iterator<Item = (Location, &ScientificMuscle)> {
        self.groups
            .iter()
            .flat_map(|g| g.muscles.iter().map(move |m| (Location::Group(g.id), m)))
            .chain(self.ungrouped.iter().map(|m| (Location::Ungrouped, m)))
            .chain(self.hidden.iter().map(|m| (Location::Hidden, m)))
    }
}

impl Default for MuscleGroupConfig {
    /// The Push/Pull/Legs/Core presets covering every muscle, used when a
    /// profile has no configuration of its own. Read-only fallback.
    fn default() -> Self {
        MuscleGroupConfig {
            groups: vec![
                CustomMuscleGroup {
                    id: 1.into(),
                    name: Name::new("Push").unwrap(),
                    muscles: vec![
                        ScientificMuscle::PecsUpper,
                        ScientificMuscle::PecsLower,
                        ScientificMuscle::FrontDelts,
                        ScientificMuscle::SideDelts,
                        ScientificMuscle::TricepsLong,
                        ScientificMuscle::TricepsLateral,
                    ],
                },
                CustomMuscleGroup {
                    id: 2.into(),
                    name: Name::new("Pull").unwrap(),
                    muscles: vec![
                        ScientificMuscle::Lats,
                        ScientificMuscle::Traps,
                        ScientificMuscle::Rhomboids,
                        ScientificMuscle::RearDelts,
                        ScientificMuscle::BicepsLong,
                        ScientificMuscle::BicepsShort,
                        ScientificMuscle::Brachialis,
                        ScientificMuscle::ForearmFlexors,
                        ScientificMuscle::ForearmExtensors,
                    ],
                },
                CustomMuscleGroup {
                    id: 3.into(),
                    name: Name::new("Legs").unwrap(),
                    muscles: vec![
                        ScientificMuscle::QuadsVasti,
                        ScientificMuscle::QuadsRectusFemoris,
                        ScientificMuscle::Hamstrings,
                        ScientificMuscle::GlutesMax,
                        ScientificMuscle::GlutesMed,
                        ScientificMuscle::Adductors,
                        ScientificMuscle::Calves,
                    ],
                },
                CustomMuscleGroup {
                    id: 4.into(),
                    name: Name::new("Core").unwrap(),
                    muscles: vec![
                        ScientificMuscle::RectusAbdominis,
                        ScientificMuscle::Obliques,
                        ScientificMuscle::TransverseAbdominis,
                        ScientificMuscle::ErectorSpinae,
                    ],
                },
            ],
            ungrouped: vec![],
            hidden: vec![],
        }
    }
}
