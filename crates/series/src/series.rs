//! Dense day-indexed series.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// A dense daily series anchored at a start date.
///
/// Every day between `start` and `end` (inclusive) has a slot; missing days
/// are `None`. The dense layout makes the chronological invariant structural:
/// there is no way to hold out-of-order or duplicate dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    start: NaiveDate,
    values: Vec<Option<f64>>,
}

impl DailySeries {
    /// Creates an all-missing series covering `start..=end`.
    pub fn empty(start: NaiveDate, end: NaiveDate) -> Result<Self, SeriesError> {
        if start > end {
            return Err(SeriesError::MalformedDateRange { start, end });
        }
        let len = (end - start).num_days() as usize + 1;
        Ok(Self {
            start,
            values: vec![None; len],
        })
    }

    /// Builds a series from `(date, value)` pairs covering `start..=end`.
    ///
    /// Pairs must be in strictly increasing date order; gaps are allowed and
    /// stay `None`. A pair outside the range is rejected.
    pub fn from_pairs(
        start: NaiveDate,
        end: NaiveDate,
        pairs: impl IntoIterator<Item = (NaiveDate, f64)>,
    ) -> Result<Self, SeriesError> {
        let mut series = Self::empty(start, end)?;
        let mut last: Option<NaiveDate> = None;
        for (date, value) in pairs {
            if last.is_some_and(|prev| date <= prev) {
                return Err(SeriesError::NonChronological { date });
            }
            last = Some(date);
            series.set(date, Some(value))?;
        }
        Ok(series)
    }

    /// First date of the series.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the series.
    pub fn end(&self) -> NaiveDate {
        // len >= 1 by construction
        self.start + Days::new(self.values.len() as u64 - 1)
    }

    /// Number of day slots (always >= 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a series covers at least one day.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Date corresponding to slot `index`, if in range.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        (index < self.values.len()).then(|| self.start + Days::new(index as u64))
    }

    fn index_of(&self, date: NaiveDate) -> Result<usize, SeriesError> {
        let offset = (date - self.start).num_days();
        if offset < 0 || offset as usize >= self.values.len() {
            return Err(SeriesError::DateOutOfRange {
                date,
                start: self.start,
                end: self.end(),
            });
        }
        Ok(offset as usize)
    }

    /// Value on `date`; `None` for a missing day or a date outside the range.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.index_of(date).ok().and_then(|i| self.values[i])
    }

    /// Sets the slot for `date`.
    pub fn set(&mut self, date: NaiveDate, value: Option<f64>) -> Result<(), SeriesError> {
        let i = self.index_of(date)?;
        self.values[i] = value;
        Ok(())
    }

    /// Slice of all slots in date order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Mutable slice of all slots in date order.
    pub fn values_mut(&mut self) -> &mut [Option<f64>] {
        &mut self.values
    }

    /// Iterates `(date, slot)` in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (self.start + Days::new(i as u64), *v))
    }

    /// Number of non-missing slots.
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Mean of the non-missing slots, if any exist.
    pub fn mean(&self) -> Option<f64> {
        let present: Vec<f64> = self.values.iter().flatten().copied().collect();
        if present.is_empty() {
            None
        } else {
            Some(present.iter().sum::<f64>() / present.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_covers_inclusive_range() {
        let s = DailySeries::empty(d("2024-05-01"), d("2024-05-07")).unwrap();
        assert_eq!(s.len(), 7);
        assert_eq!(s.start(), d("2024-05-01"));
        assert_eq!(s.end(), d("2024-05-07"));
        assert_eq!(s.present_count(), 0);
    }

    #[test]
    fn single_day_series_is_valid() {
        let s = DailySeries::empty(d("2024-05-01"), d("2024-05-01")).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.end(), d("2024-05-01"));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = DailySeries::empty(d("2024-05-10"), d("2024-05-01")).unwrap_err();
        assert!(matches!(err, SeriesError::MalformedDateRange { .. }));
    }

    #[test]
    fn from_pairs_fills_gaps_with_none() {
        let s = DailySeries::from_pairs(
            d("2024-05-01"),
            d("2024-05-05"),
            [(d("2024-05-01"), 1.0), (d("2024-05-03"), 3.0)],
        )
        .unwrap();
        assert_eq!(s.get(d("2024-05-01")), Some(1.0));
        assert_eq!(s.get(d("2024-05-02")), None);
        assert_eq!(s.get(d("2024-05-03")), Some(3.0));
        assert_eq!(s.present_count(), 2);
    }

    #[test]
    fn from_pairs_rejects_out_of_order_dates() {
        let err = DailySeries::from_pairs(
            d("2024-05-01"),
            d("2024-05-05"),
            [(d("2024-05-03"), 3.0), (d("2024-05-02"), 2.0)],
        )
        .unwrap_err();
        assert_eq!(err, SeriesError::NonChronological { date: d("2024-05-02") });
    }

    #[test]
    fn from_pairs_rejects_duplicate_dates() {
        let err = DailySeries::from_pairs(
            d("2024-05-01"),
            d("2024-05-05"),
            [(d("2024-05-02"), 2.0), (d("2024-05-02"), 2.5)],
        )
        .unwrap_err();
        assert!(matches!(err, SeriesError::NonChronological { .. }));
    }

    #[test]
    fn set_outside_range_is_rejected() {
        let mut s = DailySeries::empty(d("2024-05-01"), d("2024-05-05")).unwrap();
        let err = s.set(d("2024-05-06"), Some(1.0)).unwrap_err();
        assert!(matches!(err, SeriesError::DateOutOfRange { .. }));
    }

    #[test]
    fn iter_yields_dates_in_order() {
        let s = DailySeries::from_pairs(
            d("2024-02-27"),
            d("2024-03-02"),
            [(d("2024-02-29"), 9.0)],
        )
        .unwrap();
        let dates: Vec<NaiveDate> = s.iter().map(|(date, _)| date).collect();
        assert_eq!(
            dates,
            vec![
                d("2024-02-27"),
                d("2024-02-28"),
                d("2024-02-29"),
                d("2024-03-01"),
                d("2024-03-02"),
            ]
        );
    }

    #[test]
    fn mean_ignores_missing_slots() {
        let s = DailySeries::from_pairs(
            d("2024-05-01"),
            d("2024-05-05"),
            [(d("2024-05-01"), 2.0), (d("2024-05-05"), 4.0)],
        )
        .unwrap();
        assert_relative_eq!(s.mean().unwrap(), 3.0);
    }
}
