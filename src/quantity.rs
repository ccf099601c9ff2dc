//! Physical quantities used throughout the charging calculations.

#[macro_use]
mod macros;

pub mod distance;
pub mod energy;
pub mod power;
pub mod proportions;
pub mod time;

pub use self::{
    distance::Kilometers,
    energy::KilowattHours,
    power::Kilowatts,
    proportions::Percentage,
    time::{Hours, Milliseconds},
};

/// Weak truthiness of a raw reading: zero and `NaN` carry no information.
pub trait Significant: Copy {
    fn is_significant(self) -> bool;
}
