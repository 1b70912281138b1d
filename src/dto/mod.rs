use std::{fs, path::Path};

use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;

use crate::model::schedule::{RateSchedule, ScheduleError};
use crate::model::tariff::Tariff;

const DEFAULT_BOUNDARIES: [u32; 3] = [100, 200, 400];
const DEFAULT_MULTIPLIERS: [f64; 4] = [1.0, 0.95, 0.90, 0.85];
const DEFAULT_MOBILE_RATE: f64 = 15.0;
const DEFAULT_LANDLINE_RATE: f64 = 10.0;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServiceRates {
    base_rate: f64,
    multipliers: Option<Vec<f64>>,
}

impl ServiceRates {
    fn to_model(&self, shared: &[f64], boundaries: &[u32]) -> Result<RateSchedule, ScheduleError> {
        let multipliers = self.multipliers.as_deref().unwrap_or(shared);
        RateSchedule::from_discounts(self.base_rate, multipliers, boundaries)
    }
}

/// Tariff file contents. Both services share the bracket boundaries.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TariffDocument {
    boundaries: Vec<u32>,
    multipliers: Vec<f64>,
    mobile: ServiceRates,
    landline: ServiceRates,
}

impl Default for TariffDocument {
    fn default() -> Self {
        TariffDocument {
            boundaries: DEFAULT_BOUNDARIES.to_vec(),
            multipliers: DEFAULT_MULTIPLIERS.to_vec(),
            mobile: ServiceRates {
                base_rate: DEFAULT_MOBILE_RATE,
                multipliers: None,
            },
            landline: ServiceRates {
                base_rate: DEFAULT_LANDLINE_RATE,
                multipliers: None,
            },
        }
    }
}

impl TariffDocument {
    pub fn to_model(&self) -> Result<Tariff, ScheduleError> {
        let mobile = self.mobile.to_model(&self.multipliers, &self.boundaries)?;
        let landline = self.landline.to_model(&self.multipliers, &self.boundaries)?;
        Ok(Tariff::new(mobile, landline))
    }
}

pub fn parse_tariff(contents: &str) -> anyhow::Result<Tariff> {
    let document: TariffDocument =
        serde_yaml::from_str(contents).context("Tariff is not a valid document")?;
    debug!("Parsed tariff document {:?}", document);

    let tariff = document.to_model()?;
    Ok(tariff)
}

pub fn load_tariff(path: &Path) -> anyhow::Result<Tariff> {
    info!("Loading tariff from {:?}", path);

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tariff file {:?}", path))?;

    parse_tariff(&contents).with_context(|| format!("Failed to load tariff file {:?}", path))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::schedule::Bracket;

    #[test]
    fn test_default_tariff() {
        let tariff = TariffDocument::default().to_model().unwrap();

        assert_eq!(
            tariff.landline.brackets(),
            &[
                Bracket::new(Some(100), 10.0),
                Bracket::new(Some(200), 9.5),
                Bracket::new(Some(400), 9.0),
                Bracket::new(None, 8.5),
            ]
        );
        assert_eq!(15.0, tariff.mobile.brackets()[0].unit_rate);
    }

    #[test]
    fn test_parse_matches_default() {
        let contents = "
boundaries: [100, 200, 400]
multipliers: [1.0, 0.95, 0.90, 0.85]
mobile:
  base_rate: 15
landline:
  base_rate: 10
";
        let tariff = parse_tariff(contents).unwrap();
        assert_eq!(TariffDocument::default().to_model().unwrap(), tariff);
    }

    #[test]
    fn test_parse_service_multipliers_override() {
        let contents = "
boundaries: [60]
multipliers: [1.0, 0.5]
mobile:
  base_rate: 20
  multipliers: [1.0, 0.75]
landline:
  base_rate: 8
";
        let tariff = parse_tariff(contents).unwrap();

        assert_eq!(
            tariff.mobile.brackets(),
            &[Bracket::new(Some(60), 20.0), Bracket::new(None, 15.0)]
        );
        assert_eq!(
            tariff.landline.brackets(),
            &[Bracket::new(Some(60), 8.0), Bracket::new(None, 4.0)]
        );
    }

    #[test]
    fn test_parse_rejects_unordered_boundaries() {
        let contents = "
boundaries: [200, 100]
multipliers: [1.0, 0.9, 0.8]
mobile:
  base_rate: 15
landline:
  base_rate: 10
";
        let err = parse_tariff(contents).unwrap_err();
        assert!(err.downcast_ref::<ScheduleError>().is_some());
    }

    #[test]
    fn test_parse_rejects_largest_boundary() {
        let contents = "
boundaries: [4294967295]
multipliers: [1.0, 0.9]
mobile:
  base_rate: 15
landline:
  base_rate: 10
";
        let err = parse_tariff(contents).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScheduleError>(),
            Some(ScheduleError::BoundTooLarge { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let contents = "
boundaries: [100]
mobile:
  base_rate: 15
landline:
  base_rate: 10
";
        assert!(parse_tariff(contents).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_tariff(Path::new("does-not-exist.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("does-not-exist.yaml"));
    }
}
