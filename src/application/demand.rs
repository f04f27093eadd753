// Placeholder energy demand series - drawn once per process
use crate::error::{DashboardError, Result};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

pub const DEMAND_DAYS: usize = 30;
pub const DEMAND_RANGE_KWH: Range<u32> = 900..1300;

#[derive(Debug, Clone, PartialEq)]
pub struct DemandPoint {
    pub date: NaiveDate,
    pub kwh: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemandSeries {
    pub points: Vec<DemandPoint>,
}

impl DemandSeries {
    /// One uniform draw from `range` per day, starting at `start`.
    pub fn generate<R: Rng>(
        rng: &mut R,
        start: NaiveDate,
        days: usize,
        range: Range<u32>,
    ) -> Result<Self> {
        if range.is_empty() {
            return Err(DashboardError::figure(
                "energy-demand",
                format!("empty demand range {:?}", range),
            ));
        }

        let points = (0..days)
            .map(|offset| -> Result<DemandPoint> {
                let date = start
                    .checked_add_days(Days::new(offset as u64))
                    .ok_or_else(|| {
                        DashboardError::InvalidDate(format!("{} + {} days", start, offset))
                    })?;
                Ok(DemandPoint {
                    date,
                    kwh: rng.random_range(range.clone()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { points })
    }

    /// The dashboard's series: 30 days from 2025-01-01. Seeded draws are reproducible.
    pub fn daily(seed: Option<u64>) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1)
            .ok_or_else(|| DashboardError::InvalidDate("2025-01-01".to_string()))?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate(&mut rng, start, DEMAND_DAYS, DEMAND_RANGE_KWH)
    }

    pub fn dates(&self) -> Vec<String> {
        self.points
            .iter()
            .map(|p| p.date.format("%Y-%m-%d").to_string())
            .collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.kwh as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_series_has_thirty_points_in_range() {
        let series = DemandSeries::daily(None).unwrap();
        assert_eq!(series.points.len(), 30);
        assert!(series.points.iter().all(|p| (900..=1300).contains(&p.kwh)));
    }

    #[test]
    fn test_dates_are_consecutive_from_new_year() {
        let series = DemandSeries::daily(Some(1)).unwrap();
        let dates = series.dates();
        assert_eq!(dates.first().unwrap(), "2025-01-01");
        assert_eq!(dates[1], "2025-01-02");
        assert_eq!(dates.last().unwrap(), "2025-01-30");
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = DemandSeries::daily(Some(42)).unwrap();
        let b = DemandSeries::daily(Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(DemandSeries::generate(&mut rng, start, 3, 5..5).is_err());
    }

    #[test]
    fn test_values_match_points() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let series = DemandSeries::generate(&mut rng, start, 5, 10..11).unwrap();
        assert_eq!(series.values(), vec![10.0; 5]);
    }
}
