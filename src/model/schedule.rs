use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("a rate schedule needs at least one bracket")]
    Empty,

    #[error("bracket {index} needs an upper bound, only the last bracket is unbounded")]
    MissingBound { index: usize },

    #[error("the last bracket must be unbounded, found an upper bound of {bound}")]
    BoundedTail { bound: u32 },

    #[error("bracket bound {bound} is too large, the largest allowed is {max}")]
    BoundTooLarge { bound: u32, max: u32 },

    #[error("bracket bounds must strictly increase, {previous} is followed by {next}")]
    UnorderedBounds { previous: u32, next: u32 },

    #[error("bracket {index} has an invalid rate of {rate}")]
    InvalidRate { index: usize, rate: f64 },

    #[error("expected {expected} discount multipliers for {bounds} bounds, found {found}")]
    MultiplierCount {
        expected: usize,
        bounds: usize,
        found: usize,
    },
}

/// The next bracket starts one minute past a bound, which must itself fit.
pub const MAX_BOUND: u32 = u32::MAX - 1;

#[derive(Clone, PartialEq, Debug)]
pub struct Bracket {
    /// Inclusive minute threshold; `None` for the unbounded tail.
    pub upper_bound: Option<u32>,
    /// Pence per minute.
    pub unit_rate: f64,
}

impl Bracket {
    pub fn new(upper_bound: Option<u32>, unit_rate: f64) -> Bracket {
        Bracket {
            upper_bound,
            unit_rate,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RateSchedule {
    brackets: Vec<Bracket>,
}

impl RateSchedule {
    pub fn new(brackets: Vec<Bracket>) -> Result<RateSchedule, ScheduleError> {
        let (tail, bounded) = brackets.split_last().ok_or(ScheduleError::Empty)?;

        if let Some(bound) = tail.upper_bound {
            return Err(ScheduleError::BoundedTail { bound });
        }

        let mut previous: Option<u32> = None;
        for (index, bracket) in bounded.iter().enumerate() {
            let bound = bracket
                .upper_bound
                .ok_or(ScheduleError::MissingBound { index })?;
            if bound > MAX_BOUND {
                return Err(ScheduleError::BoundTooLarge {
                    bound,
                    max: MAX_BOUND,
                });
            }
            if let Some(previous) = previous {
                if bound <= previous {
                    return Err(ScheduleError::UnorderedBounds {
                        previous,
                        next: bound,
                    });
                }
            }
            previous = Some(bound);
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if !bracket.unit_rate.is_finite() || bracket.unit_rate < 0.0 {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.unit_rate,
                });
            }
        }

        Ok(RateSchedule { brackets })
    }

    /// Builds a schedule whose bracket rates are `base_rate` scaled by each
    /// multiplier in turn. There is one more multiplier than there are bounds.
    pub fn from_discounts(
        base_rate: f64,
        multipliers: &[f64],
        bounds: &[u32],
    ) -> Result<RateSchedule, ScheduleError> {
        if multipliers.len() != bounds.len() + 1 {
            return Err(ScheduleError::MultiplierCount {
                expected: bounds.len() + 1,
                bounds: bounds.len(),
                found: multipliers.len(),
            });
        }

        let brackets = multipliers
            .iter()
            .enumerate()
            .map(|(i, multiplier)| Bracket::new(bounds.get(i).copied(), base_rate * multiplier))
            .collect();

        RateSchedule::new(brackets)
    }

    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_discounts() {
        let schedule =
            RateSchedule::from_discounts(15.0, &[1.0, 0.95, 0.90, 0.85], &[100, 200, 400])
                .unwrap();

        assert_eq!(
            schedule.brackets(),
            &[
                Bracket::new(Some(100), 15.0),
                Bracket::new(Some(200), 14.25),
                Bracket::new(Some(400), 13.5),
                Bracket::new(None, 12.75),
            ]
        );
    }

    #[test]
    fn test_single_unbounded_bracket() {
        let schedule = RateSchedule::new(vec![Bracket::new(None, 10.0)]).unwrap();
        assert_eq!(1, schedule.brackets().len());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Err(ScheduleError::Empty), RateSchedule::new(vec![]));
    }

    #[test]
    fn test_rejects_bounded_tail() {
        let result = RateSchedule::new(vec![
            Bracket::new(Some(100), 15.0),
            Bracket::new(Some(200), 14.0),
        ]);
        assert_eq!(Err(ScheduleError::BoundedTail { bound: 200 }), result);
    }

    #[test]
    fn test_rejects_missing_bound() {
        let result = RateSchedule::new(vec![
            Bracket::new(Some(100), 15.0),
            Bracket::new(None, 14.0),
            Bracket::new(None, 13.0),
        ]);
        assert_eq!(Err(ScheduleError::MissingBound { index: 1 }), result);
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        let result = RateSchedule::from_discounts(15.0, &[1.0, 0.9, 0.8], &[200, 200]);
        assert_eq!(
            Err(ScheduleError::UnorderedBounds {
                previous: 200,
                next: 200
            }),
            result
        );
    }

    #[test]
    fn test_rejects_largest_bound() {
        let result = RateSchedule::new(vec![
            Bracket::new(Some(u32::MAX), 15.0),
            Bracket::new(None, 14.0),
        ]);
        assert_eq!(
            Err(ScheduleError::BoundTooLarge {
                bound: u32::MAX,
                max: MAX_BOUND
            }),
            result
        );

        let schedule = RateSchedule::new(vec![
            Bracket::new(Some(MAX_BOUND), 15.0),
            Bracket::new(None, 14.0),
        ]);
        assert!(schedule.is_ok());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let result = RateSchedule::new(vec![
            Bracket::new(Some(100), 15.0),
            Bracket::new(None, -1.0),
        ]);
        assert_eq!(
            Err(ScheduleError::InvalidRate {
                index: 1,
                rate: -1.0
            }),
            result
        );
    }

    #[test]
    fn test_rejects_multiplier_count() {
        let result = RateSchedule::from_discounts(15.0, &[1.0, 0.9], &[100, 200]);
        assert_eq!(
            Err(ScheduleError::MultiplierCount {
                expected: 3,
                bounds: 2,
                found: 2
            }),
            result
        );
    }
}
