use std::collections::BTreeMap;

use derive_more::{Display, Into};

use crate::{FunctionalGroup, MuscleContributions, Property, ScientificMuscle};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 999")]
    OutOfRange,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
}

#[derive(Debug, Default, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct RPE(f32);

impl RPE {
    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
}

/// How a set was performed. Warmup sets never contribute volume; all other
/// types contribute fully and equally.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SetType {
    Normal,
    Warmup,
    Failure,
    Drop,
}

impl Property for SetType {
    fn iter() -> std::slice::Iter<'static, SetType> {
        static SET_TYPES: [SetType; 4] = [
            SetType::Normal,
            SetType::Warmup,
            SetType::Failure,
            SetType::Drop,
        ];
        SET_TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            SetType::Normal => "Normal",
            SetType::Warmup => "Warmup",
            SetType::Failure => "Failure",
            SetType::Drop => "Drop",
        }
    }
}

/// A single logged set, immutable once imported.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub exercise_id: String,
    pub set_type: SetType,
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
    pub rpe: Option<RPE>,
}

/// Sum per-muscle volume over a batch of sets.
///
/// Each non-warmup set adds its exercise's contribution weights once, with
/// no rep or weight scaling. Sets whose exercise ID has no entry in
/// `mappings` contribute nothing. Pure summation: the result is independent
/// of input order.
#[must_use]
pub fn muscle_volume(
    sets: &[WorkoutSet],
    mappings: &BTreeMap<String, MuscleContributions>,
) -> BTreeMap<ScientificMuscle, f32> {
    let mut result: BTreeMap<ScientificMuscle, f32> = BTreeMap::new();
    for set in sets {
        if set.set_type == SetType::Warmup {
            continue;
        }
        if let Some(contributions) = mappings.get(&set.exercise_id) {
            for (muscle, contribution) in contributions {
                *result.entry(*muscle).or_insert(0.0) += **contribution;
            }
        }
    }
    result
}

/// Roll per-muscle volume up into functional groups.
///
/// Muscles absent from `grouping` are dropped. With [`default_grouping`]
/// the grouping is total and nothing is lost.
#[must_use]
pub fn functional_group_volume(
    volume: &BTreeMap<ScientificMuscle, f32>,
    grouping: &BTreeMap<ScientificMuscle, FunctionalGroup>,
) -> BTreeMap<FunctionalGroup, f32> {
    let mut result: BTreeMap<FunctionalGroup, f32> = BTreeMap::new();
    for (muscle, value) in volume {
        if let Some(group) = grouping.get(muscle) {
            *result.entry(*group).or_insert(0.0) += value;
        }
    }
    result
}

/// The total default muscle-to-group table.
#[must_use]
pub fn default_grouping() -> BTreeMap<ScientificMuscle, FunctionalGroup> {
    ScientificMuscle::iter()
        .map(|m| (*m, m.functional_group()))
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::Contribution;

    use super::*;

    fn set(exercise_id: &str, set_type: SetType) -> WorkoutSet {
        WorkoutSet {
            exercise_id: exercise_id.to_string(),
            set_type,
            weight: Some(Weight::new(60.0).unwrap()),
            reps: Some(Reps::new(8).unwrap()),
            rpe: Some(RPE::new(8.0).unwrap()),
        }
    }

    fn mappings() -> BTreeMap<String, MuscleContributions> {
        BTreeMap::from([
            (
                "squat".to_string(),
                MuscleContributions::from([
                    (ScientificMuscle::QuadsVasti, Contribution::PRIMARY),
                    (ScientificMuscle::GlutesMax, Contribution::SECONDARY),
                ]),
            ),
            (
                "leg-extension".to_string(),
                MuscleContributions::from([
                    (ScientificMuscle::QuadsVasti, Contribution::PRIMARY),
                    (ScientificMuscle::QuadsRectusFemoris, Contribution::PRIMARY),
                ]),
            ),
        ])
    }

    #[rstest]
    #[case(0, Ok(Reps(0)))]
    #[case(999, Ok(Reps(999)))]
    #[case(1000, Err(RepsError::OutOfRange))]
    fn test_reps_new(#[case] value: u32, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::new(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(Weight(0.0)))]
    #[case(999.9, Ok(Weight(999.9)))]
    #[case(1000.0, Err(WeightError::OutOfRange))]
    #[case(-1.0, Err(WeightError::OutOfRange))]
    fn test_weight_new(#[case] value: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(value), expected);
    }

    #[rstest]
    #[case(0.0, Ok(RPE(0.0)))]
    #[case(7.5, Ok(RPE(7.5)))]
    #[case(10.0, Ok(RPE(10.0)))]
    #[case(10.5, Err(RPEError::OutOfRange))]
    fn test_rpe_new(#[case] value: f32, #[case] expected: Result<RPE, RPEError>) {
        assert_eq!(RPE::new(value), expected);
    }

    #[test]
    fn test_muscle_volume_excludes_warmups() {
        let sets = [set("squat", SetType::Warmup), set("squat", SetType::Normal)];
        let volume = muscle_volume(&sets, &mappings());

        assert_approx_eq!(volume[&ScientificMuscle::QuadsVasti], 1.0);
        assert_approx_eq!(volume[&ScientificMuscle::GlutesMax], 0.5);
    }

    #[rstest]
    #[case::failure(SetType::Failure)]
    #[case::drop(SetType::Drop)]
    fn test_muscle_volume_counts_failure_and_drop_fully(#[case] set_type: SetType) {
        let volume = muscle_volume(&[set("squat", set_type)], &mappings());

        assert_approx_eq!(volume[&ScientificMuscle::QuadsVasti], 1.0);
    }

    #[test]
    fn test_muscle_volume_skips_unmapped() {
        let sets = [set("vague-machine", SetType::Normal)];

        assert_eq!(muscle_volume(&sets, &mappings()), BTreeMap::new());
    }

    #[test]
    fn test_muscle_volume_order_independent() {
        let mut sets = vec![
            set("squat", SetType::Normal),
            set("leg-extension", SetType::Normal),
            set("squat", SetType::Warmup),
            set("squat", SetType::Normal),
        ];
        let forward = muscle_volume(&sets, &mappings());
        sets.reverse();
        let backward = muscle_volume(&sets, &mappings());

        assert_eq!(forward, backward);
        assert_approx_eq!(forward[&ScientificMuscle::QuadsVasti], 3.0);
    }

    #[test]
    fn test_functional_group_volume() {
        let volume = BTreeMap::from([
            (ScientificMuscle::QuadsVasti, 4.0),
            (ScientificMuscle::QuadsRectusFemoris, 1.2),
        ]);
        let groups = functional_group_volume(&volume, &default_grouping());

        assert_approx_eq!(groups[&FunctionalGroup::Quads], 5.2);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_functional_group_volume_drops_unmapped_muscles() {
        let volume = BTreeMap::from([
            (ScientificMuscle::QuadsVasti, 4.0),
            (ScientificMuscle::Calves, 2.0),
        ]);
        let grouping = BTreeMap::from([(ScientificMuscle::QuadsVasti, FunctionalGroup::Quads)]);

        assert_eq!(
            functional_group_volume(&volume, &grouping),
            BTreeMap::from([(FunctionalGroup::Quads, 4.0)])
        );
    }

    #[test]
    fn test_default_grouping_is_total() {
        let grouping = default_grouping();

        assert_eq!(grouping.len(), 26);
    }
}
