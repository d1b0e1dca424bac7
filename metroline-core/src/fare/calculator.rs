use serde::Serialize;

use crate::Error;
use crate::fare::AgeGroup;
use crate::model::ExtraFare;

const BASE_FARE: u32 = 1250;
const BASE_BAND_KM: u32 = 10;
const MID_BAND_KM: u32 = 50;
const MID_BAND_UNIT_KM: u32 = 5;
const LONG_BAND_UNIT_KM: u32 = 8;
const UNIT_FARE: u32 = 100;
const DISCOUNT_DEDUCTION: u32 = 350;

/// Final trip price in currency units. Computed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Fare(u32);

impl Fare {
    /// Prices a trip from its total distance, the highest surcharge among
    /// the lines traversed, and the rider's age.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAge`] for an unclassifiable age.
    pub fn from_trip(total_distance: u32, extra_fare: ExtraFare, age: u32) -> Result<Self, Error> {
        let group = AgeGroup::classify(age)?;
        let charged = distance_fare(total_distance) + extra_fare.value();
        Ok(Self(discounted(charged, group)))
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

fn distance_fare(distance: u32) -> u32 {
    if distance <= BASE_BAND_KM {
        return BASE_FARE;
    }
    if distance <= MID_BAND_KM {
        return BASE_FARE + band_surcharge(distance - BASE_BAND_KM, MID_BAND_UNIT_KM);
    }
    BASE_FARE
        + band_surcharge(MID_BAND_KM - BASE_BAND_KM, MID_BAND_UNIT_KM)
        + band_surcharge(distance - MID_BAND_KM, LONG_BAND_UNIT_KM)
}

// One unit fare per started unit of overshoot
fn band_surcharge(overshoot: u32, unit: u32) -> u32 {
    overshoot.div_ceil(unit) * UNIT_FARE
}

fn discounted(fare: u32, group: AgeGroup) -> u32 {
    match group {
        AgeGroup::Baby => 0,
        AgeGroup::Kids => fare.saturating_sub(DISCOUNT_DEDUCTION) * 50 / 100,
        AgeGroup::Teenager => fare.saturating_sub(DISCOUNT_DEDUCTION) * 80 / 100,
        AgeGroup::Adult => fare,
    }
}
