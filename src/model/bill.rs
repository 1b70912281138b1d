use std::fmt;

use super::service::ServiceType;
use crate::report::format_currency;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BillRequest {
    pub service_type: ServiceType,
    pub minutes_used: u32,
}

impl BillRequest {
    pub fn new(service_type: ServiceType, minutes_used: u32) -> BillRequest {
        BillRequest {
            service_type,
            minutes_used,
        }
    }
}

/// A charge held in whole pence, so no fractional minor units can exist.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct BillResult {
    pub pence: u64,
}

impl BillResult {
    pub fn new(pence: u64) -> BillResult {
        BillResult { pence }
    }

    pub fn pounds(&self) -> f64 {
        self.pence as f64 / 100.0
    }
}

impl fmt::Display for BillResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", format_currency(self.pence))
    }
}

/// The share of a bill that falls into one bracket, before rounding.
#[derive(Clone, PartialEq, Debug)]
pub struct BracketCharge {
    pub lower: u32,
    pub upper: Option<u32>,
    pub minutes: u32,
    pub unit_rate: f64,
    pub raw_pence: f64,
}
