use std::io::{self, Write};

use crate::model::bill::BracketCharge;
use crate::model::schedule::RateSchedule;

pub fn format_currency(pence: u64) -> String {
    format!("{0}.{1:02}", pence / 100, pence % 100)
}

/// Prints a per-minute rate the way a default stream would: `15`, `14.25`,
/// `13.5`.
pub fn format_rate(rate: f64) -> String {
    let rounded = (rate * 10_000.0).round() / 10_000.0;
    format!("{}", rounded)
}

pub fn write_rates(out: &mut impl Write, schedule: &RateSchedule) -> io::Result<()> {
    let brackets = schedule.brackets();
    if let [only] = brackets {
        return writeln!(
            out,
            "All minutes are charged at {}p per minute.",
            format_rate(only.unit_rate)
        );
    }

    let mut previous: Option<u32> = None;
    for bracket in brackets {
        let rate = format_rate(bracket.unit_rate);
        match (previous, bracket.upper_bound) {
            (None, Some(bound)) => writeln!(
                out,
                "Minutes spent up to and including {} minutes are charged at {}p per minute.",
                bound, rate
            )?,
            (Some(lower), Some(bound)) => writeln!(
                out,
                "Minutes spent from {} to including {} minutes are charged at {}p per minute.",
                lower + 1,
                bound,
                rate
            )?,
            (Some(lower), None) => writeln!(
                out,
                "Minutes spent from {} minutes and beyond are charged at {}p per minute.",
                lower + 1,
                rate
            )?,
            (None, None) => unreachable!("validated schedules only have an unbounded tail"),
        }
        previous = bracket.upper_bound;
    }

    Ok(())
}

pub fn write_breakdown(out: &mut impl Write, charges: &[BracketCharge]) -> io::Result<()> {
    writeln!(out, "Breakdown:")?;
    for charge in charges {
        let range = match charge.upper {
            Some(upper) => format!("{}-{}", charge.lower + 1, upper),
            None => format!("{}+", charge.lower + 1),
        };
        writeln!(
            out,
            "  {:>9} minutes: {} x {}p = {}p",
            range,
            charge.minutes,
            format_rate(charge.unit_rate),
            format_rate(charge.raw_pence)
        )?;
    }

    Ok(())
}
