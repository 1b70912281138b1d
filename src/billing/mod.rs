use log::debug;

use crate::model::bill::{BillRequest, BillResult, BracketCharge};
use crate::model::schedule::RateSchedule;
use crate::model::tariff::Tariff;

// Sums of derived rates such as 15 * 0.95 can land a hair above a whole
// penny; anything this close to an integer is that integer.
const SNAP_TOLERANCE: f64 = 1e-9;

/// Splits `minutes` across the schedule, stopping at the bracket that
/// contains the last minute. The first bracket is always present, even for
/// zero minutes.
pub fn breakdown(minutes: u32, schedule: &RateSchedule) -> Vec<BracketCharge> {
    let mut charges = Vec::new();
    let mut lower = 0;

    for bracket in schedule.brackets() {
        let top = match bracket.upper_bound {
            Some(bound) => minutes.min(bound),
            None => minutes,
        };
        let covered = top.saturating_sub(lower);

        charges.push(BracketCharge {
            lower,
            upper: bracket.upper_bound,
            minutes: covered,
            unit_rate: bracket.unit_rate,
            raw_pence: covered as f64 * bracket.unit_rate,
        });

        match bracket.upper_bound {
            Some(bound) if minutes > bound => lower = bound,
            _ => break,
        }
    }

    charges
}

/// Charges each minute at the rate of the bracket it falls in, then rounds
/// the total up to a whole penny.
pub fn calculate_bill(minutes: u32, schedule: &RateSchedule) -> BillResult {
    let charges = breakdown(minutes, schedule);
    let raw: f64 = charges.iter().map(|charge| charge.raw_pence).sum();
    let pence = round_up_pence(raw);

    debug!(
        "{} minutes matched {} bracket(s), raw {}p billed as {}p",
        minutes,
        charges.len(),
        raw,
        pence
    );

    BillResult::new(pence)
}

pub fn bill(tariff: &Tariff, request: &BillRequest) -> BillResult {
    calculate_bill(
        request.minutes_used,
        tariff.schedule_for(request.service_type),
    )
}

fn round_up_pence(raw: f64) -> u64 {
    let nearest = raw.round();
    let pence = if (raw - nearest).abs() < SNAP_TOLERANCE {
        nearest
    } else {
        raw.ceil()
    };

    pence.max(0.0) as u64
}
