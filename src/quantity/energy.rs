use std::ops::{Div, Mul};

use crate::quantity::{Hours, Kilowatts, Percentage};

quantity!(KilowattHours, f64, "kWh");

impl Mul<Percentage> for KilowattHours {
    type Output = Self;

    fn mul(self, percentage: Percentage) -> Self::Output {
        Self(percentage.to_proportion() * self.0)
    }
}

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        Hours(self.0 / rhs.0)
    }
}
