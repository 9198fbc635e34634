use std::slice::Iter;

/// A fixed set of values with stable iteration order and display names.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

/// One of the 26 individual anatomical muscles tracked by the system.
///
/// The set is closed. Discriminants are grouped by body region and leave
/// gaps for readability, mirroring the region layout of the display layer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ScientificMuscle {
    // Chest
    PecsUpper = 1,
    PecsLower = 2,
    // Back
    Lats = 11,
    Traps = 12,
    Rhomboids = 13,
    ErectorSpinae = 14,
    // Shoulders
    FrontDelts = 21,
    SideDelts = 22,
    RearDelts = 23,
    // Upper arms
    BicepsLong = 31,
    BicepsShort = 32,
    Brachialis = 33,
    TricepsLong = 34,
    TricepsLateral = 35,
    // Forearms
    ForearmFlexors = 41,
    ForearmExtensors = 42,
    // Core
    RectusAbdominis = 51,
    Obliques = 52,
    TransverseAbdominis = 53,
    // Legs
    QuadsVasti = 61,
    QuadsRectusFemoris = 62,
    Hamstrings = 63,
    GlutesMax = 64,
    GlutesMed = 65,
    Adductors = 66,
    Calves = 67,
}

impl Property for ScientificMuscle {
    fn iter() -> Iter<'static, ScientificMuscle> {
        static MUSCLES: [ScientificMuscle; 26] = [
            ScientificMuscle::PecsUpper,
            ScientificMuscle::PecsLower,
            ScientificMuscle::Lats,
            ScientificMuscle::Traps,
            ScientificMuscle::Rhomboids,
            ScientificMuscle::ErectorSpinae,
            ScientificMuscle::FrontDelts,
            ScientificMuscle::SideDelts,
            ScientificMuscle::RearDelts,
            ScientificMuscle::BicepsLong,
            ScientificMuscle::BicepsShort,
            ScientificMuscle::Brachialis,
            ScientificMuscle::TricepsLong,
            ScientificMuscle::TricepsLateral,
            ScientificMuscle::ForearmFlexors,
            ScientificMuscle::ForearmExtensors,
            ScientificMuscle::RectusAbdominis,
            ScientificMuscle::Obliques,
            ScientificMuscle::TransverseAbdominis,
            ScientificMuscle::QuadsVasti,
            ScientificMuscle::QuadsRectusFemoris,
            ScientificMuscle::Hamstrings,
            ScientificMuscle::GlutesMax,
            ScientificMuscle::GlutesMed,
            ScientificMuscle::Adductors,
            ScientificMuscle::Calves,
        ];
        MUSCLES.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            ScientificMuscle::PecsUpper => "Pectoralis (Upper)",
            ScientificMuscle::PecsLower => "Pectoralis (Lower)",
            ScientificMuscle::Lats => "Latissimus Dorsi",
            ScientificMuscle::Traps => "Trapezius",
            ScientificMuscle::Rhomboids => "Rhomboids",
            ScientificMuscle::ErectorSpinae => "Erector Spinae",
            ScientificMuscle::FrontDelts => "Deltoid (Anterior)",
            ScientificMuscle::SideDelts => "Deltoid (Lateral)",
            ScientificMuscle::RearDelts => "Deltoid (Posterior)",
            ScientificMuscle::BicepsLong => "Biceps (Long Head)",
            ScientificMuscle::BicepsShort => "Biceps (Short Head)",
            ScientificMuscle::Brachialis => "Brachialis",
            ScientificMuscle::TricepsLong => "Triceps (Long Head)",
            ScientificMuscle::TricepsLateral => "Triceps (Lateral Head)",
            ScientificMuscle::ForearmFlexors => "Forearm Flexors",
            ScientificMuscle::ForearmExtensors => "Forearm Extensors",
            ScientificMuscle::RectusAbdominis => "Rectus Abdominis",
            ScientificMuscle::Obliques => "Obliques",
            ScientificMuscle::TransverseAbdominis => "Transverse Abdominis",
            ScientificMuscle::QuadsVasti => "Quadriceps (Vasti)",
            ScientificMuscle::QuadsRectusFemoris => "Quadriceps (RF)",
            ScientificMuscle::Hamstrings => "Hamstrings",
            ScientificMuscle::GlutesMax => "Gluteus Maximus",
            ScientificMuscle::GlutesMed => "Gluteus Medius",
            ScientificMuscle::Adductors => "Adductors",
            ScientificMuscle::Calves => "Calves",
        }
    }
}

impl ScientificMuscle {
    /// Default display group. Overridable per profile at the display layer.
    #[must_use]
    pub fn functional_group(self) -> FunctionalGroup {
        match self {
            ScientificMuscle::PecsUpper | ScientificMuscle::PecsLower => FunctionalGroup::Chest,
            ScientificMuscle::Lats | ScientificMuscle::Rhomboids => FunctionalGroup::Back,
            ScientificMuscle::Traps => FunctionalGroup::Traps,
            ScientificMuscle::ErectorSpinae => FunctionalGroup::LowerBack,
            ScientificMuscle::FrontDelts
            | ScientificMuscle::SideDelts
            | ScientificMuscle::RearDelts => FunctionalGroup::Shoulders,
            ScientificMuscle::BicepsLong
            | ScientificMuscle::BicepsShort
            | ScientificMuscle::Brachialis => FunctionalGroup::Biceps,
            ScientificMuscle::TricepsLong | ScientificMuscle::TricepsLateral => {
                FunctionalGroup::Triceps
            }
            ScientificMuscle::ForearmFlexors | ScientificMuscle::ForearmExtensors => {
                FunctionalGroup::Forearms
            }
            ScientificMuscle::RectusAbdominis
            | ScientificMuscle::Obliques
            | ScientificMuscle::TransverseAbdominis => FunctionalGroup::Abs,
            ScientificMuscle::QuadsVasti | ScientificMuscle::QuadsRectusFemoris => {
                FunctionalGroup::Quads
            }
            ScientificMuscle::Hamstrings => FunctionalGroup::Hamstrings,
            ScientificMuscle::GlutesMax | ScientificMuscle::GlutesMed => FunctionalGroup::Glutes,
            ScientificMuscle::Adductors => FunctionalGroup::Adductors,
            ScientificMuscle::Calves => FunctionalGroup::Calves,
        }
    }
}

/// Coarser display-oriented muscle grouping.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum FunctionalGroup {
    Chest,
    Back,
    Traps,
    LowerBack,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Quads,
    Hamstrings,
    Glutes,
    Adductors,
    Calves,
}

impl Property for FunctionalGroup {
    fn iter() -> Iter<'static, FunctionalGroup> {
        static GROUPS: [FunctionalGroup; 14] = [
            FunctionalGroup::Chest,
            FunctionalGroup::Back,
            FunctionalGroup::Traps,
            FunctionalGroup::LowerBack,
            FunctionalGroup::Shoulders,
            FunctionalGroup::Biceps,
            FunctionalGroup::Triceps,
            FunctionalGroup::Forearms,
            FunctionalGroup::Abs,
            FunctionalGroup::Quads,
            FunctionalGroup::Hamstrings,
            FunctionalGroup::Glutes,
            FunctionalGroup::Adductors,
            FunctionalGroup::Calves,
        ];
        GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FunctionalGroup::Chest => "Chest",
            FunctionalGroup::Back => "Back",
            FunctionalGroup::Traps => "Traps",
            FunctionalGroup::LowerBack => "Lower Back",
            FunctionalGroup::Shoulders => "Shoulders",
            FunctionalGroup::Biceps => "Biceps",
            FunctionalGroup::Triceps => "Triceps",
            FunctionalGroup::Forearms => "Forearms",
            FunctionalGroup::Abs => "Abs",
            FunctionalGroup::Quads => "Quads",
            FunctionalGroup::Hamstrings => "Hamstrings",
            FunctionalGroup::Glutes => "Glutes",
            FunctionalGroup::Adductors => "Adductors",
            FunctionalGroup::Calves => "Calves",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_scientific_muscle_count() {
        assert_eq!(ScientificMuscle::iter().count(), 26);
    }

    #[test]
    fn test_scientific_muscle_name() {
        let mut names = HashSet::new();

        for muscle in ScientificMuscle::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_functional_group_name() {
        let mut names = HashSet::new();

        for group in FunctionalGroup::iter() {
            let name = group.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));

            names.insert(name);
        }
    }

    #[test]
    fn test_every_functional_group_has_a_muscle() {
        let used = ScientificMuscle::iter()
            .map(|m| m.functional_group())
            .collect::<HashSet<_>>();

        for group in FunctionalGroup::iter() {
            assert!(used.contains(group), "unused group {:?}", group);
        }
    }
}
