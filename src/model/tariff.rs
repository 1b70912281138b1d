use super::schedule::RateSchedule;
use super::service::ServiceType;

/// One schedule per service type. Bracket bounds are shared by policy, but
/// nothing here relies on it.
#[derive(Clone, PartialEq, Debug)]
pub struct Tariff {
    pub mobile: RateSchedule,
    pub landline: RateSchedule,
}

impl Tariff {
    pub fn new(mobile: RateSchedule, landline: RateSchedule) -> Tariff {
        Tariff { mobile, landline }
    }

    pub fn schedule_for(&self, service_type: ServiceType) -> &RateSchedule {
        match service_type {
            ServiceType::Mobile => &self.mobile,
            ServiceType::Landline => &self.landline,
        }
    }
}
