use std::{
    collections::BTreeMap,
    ops::{Add, AddAssign},
};

use derive_more::{Deref, Into};

use crate::ScientificMuscle;

/// Fraction of a full working set credited to a single muscle, in [0, 1].
///
/// Weights of one exercise are independent of each other and do not have to
/// sum to 1.
#[derive(Deref, Debug, Default, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Contribution(f32);

impl Contribution {
    pub const PRIMARY: Contribution = Contribution(1.0);
    pub const SECONDARY: Contribution = Contribution(0.5);
    pub const AUXILIARY: Contribution = Contribution(0.25);
    pub const NONE: Contribution = Contribution(0.0);

    pub fn new(value: f32) -> Result<Self, ContributionError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ContributionError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl Add for Contribution {
    type Output = Contribution;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Contribution {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self(self.0 + rhs.0);
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ContributionError {
    #[error("Contribution must be in the range 0.0 to 1.0 ({0})")]
    OutOfRange(f32),
}

/// Partial per-muscle contribution table of one exercise.
pub type MuscleContributions = BTreeMap<ScientificMuscle, Contribution>;
