use serde::Serialize;

use crate::Error;

/// Rider classification, a total partition of ages 1 and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AgeGroup {
    Baby,
    Kids,
    Teenager,
    Adult,
}

impl AgeGroup {
    /// # Errors
    ///
    /// Returns [`Error::InvalidAge`] for age 0, which no group covers.
    pub fn classify(age: u32) -> Result<Self, Error> {
        match age {
            0 => Err(Error::InvalidAge(age)),
            1..=5 => Ok(Self::Baby),
            6..=12 => Ok(Self::Kids),
            13..=19 => Ok(Self::Teenager),
            _ => Ok(Self::Adult),
        }
    }
}
