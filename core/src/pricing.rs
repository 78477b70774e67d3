//! Stay pricing.
//!
//! `cost = nightly_price × (hours between check-in and check-out ÷ 24)`,
//! plain float arithmetic: no rounding, taxes or minimum stay.

use crate::types::StayPeriod;

/// Length of a stay in 24-hour units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stay_days(stay: &StayPeriod) -> f64 {
    let hours = (stay.check_out() - stay.check_in()).num_hours();
    hours as f64 / 24.0
}

/// Cost of `stay` at `nightly_price`.
#[must_use]
pub fn stay_cost(nightly_price: f64, stay: &StayPeriod) -> f64 {
    nightly_price * stay_days(stay)
}
