//! Year-indexed numeric series.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// A calendar year.
pub type Year = i32;

/// The earliest year accepted into a corpus.
pub const MIN_YEAR: Year = 1400;
/// The latest year accepted into a corpus.
pub const MAX_YEAR: Year = 2100;

/// Test if the given year lies within `[MIN_YEAR, MAX_YEAR]`.
#[inline]
pub fn is_valid_year(year: Year) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// A mapping from year to value, always iterated in ascending year order.
///
/// Every operation producing a series returns a fresh value, so a series
/// handed out by an index never aliases the index's own storage.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    data: BTreeMap<Year, f64>,
}

impl TimeSeries {
    /// Construct a new empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for the given year, returning the previous value.
    pub fn insert(&mut self, year: Year, value: f64) -> Option<f64> {
        self.data.insert(year, value)
    }

    /// Get the value stored for the given year.
    pub fn get(&self, year: Year) -> Option<f64> {
        self.data.get(&year).copied()
    }

    /// Number of years in the series.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Test if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over `(year, value)` pairs in ascending year order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Copy the years within `[start, end]` inclusive into a new series.
    ///
    /// An inverted range produces an empty series.
    pub fn slice(&self, start: Year, end: Year) -> TimeSeries {
        if start > end {
            return TimeSeries::new();
        }

        TimeSeries {
            data: self
                .data
                .range(start..=end)
                .map(|(&year, &value)| (year, value))
                .collect(),
        }
    }

    /// All years in ascending order.
    pub fn years(&self) -> Vec<Year> {
        self.data.keys().copied().collect()
    }

    /// All values, positionally matching [`TimeSeries::years`].
    pub fn values(&self) -> Vec<f64> {
        self.data.values().copied().collect()
    }

    /// Sum of every value in the series.
    pub fn sum(&self) -> f64 {
        self.data.values().sum()
    }

    /// Year-wise sum of two series.
    ///
    /// A year present in only one operand is copied through unchanged.
    pub fn plus(&self, other: &TimeSeries) -> TimeSeries {
        let mut data = self.data.clone();

        for (&year, &value) in &other.data {
            *data.entry(year).or_insert(0.0) += value;
        }

        TimeSeries { data }
    }

    /// Divide every year of this series by the same year in `other`.
    ///
    /// Years only present in `other` are ignored. Fails if `other` lacks a
    /// year this series has.
    pub fn divided_by(&self, other: &TimeSeries) -> Result<TimeSeries> {
        let mut data = BTreeMap::new();

        for (&year, &value) in &self.data {
            let Some(divisor) = other.get(year) else {
                return Err(Error::new(ErrorKind::MissingDivisorYear(year)));
            };

            data.insert(year, value / divisor);
        }

        Ok(TimeSeries { data })
    }
}

impl FromIterator<(Year, f64)> for TimeSeries {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (Year, f64)>,
    {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = (Year, f64);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`TimeSeries`].
pub struct Iter<'a> {
    iter: btree_map::Iter<'a, Year, f64>,
}

impl Iterator for Iter<'_> {
    type Item = (Year, f64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (&year, &value) = self.iter.next()?;
        Some((year, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (&year, &value) = self.iter.next_back()?;
        Some((year, value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;

        let mut it = self.iter().peekable();

        while let Some((year, value)) = it.next() {
            write!(f, "{year}={value}")?;

            if it.peek().is_some() {
                write!(f, ", ")?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
fn series(entries: &[(Year, f64)]) -> TimeSeries {
    entries.iter().copied().collect()
}

#[test]
fn test_slice_stays_in_range() {
    let ts = series(&[(1990, 1.0), (1991, 2.0), (1995, 3.0), (2000, 4.0)]);
    let sliced = ts.slice(1991, 1999);

    assert_eq!(sliced.years(), [1991, 1995]);
    assert_eq!(sliced.values(), [2.0, 3.0]);

    for year in sliced.years() {
        assert!((1991..=1999).contains(&year));
        assert!(ts.get(year).is_some());
    }

    assert!(ts.slice(2001, 2050).is_empty());
    assert!(ts.slice(2000, 1990).is_empty());
    assert_eq!(ts.slice(1990, 1990).years(), [1990]);
}

#[test]
fn test_ascending_order() {
    let mut ts = TimeSeries::new();
    ts.insert(2000, 3.0);
    ts.insert(1500, 1.0);
    ts.insert(1800, 2.0);

    assert_eq!(ts.years(), [1500, 1800, 2000]);
    assert_eq!(ts.values(), [1.0, 2.0, 3.0]);
    assert_eq!(ts.sum(), 6.0);
}

#[test]
fn test_plus() {
    let a = series(&[(1991, 0.0), (1992, 100.0), (1994, 200.0)]);
    let b = series(&[(1994, 400.0), (1995, 500.0)]);

    let sum = a.plus(&b);
    assert_eq!(sum.years(), [1991, 1992, 1994, 1995]);
    assert_eq!(sum.values(), [0.0, 100.0, 600.0, 500.0]);

    // Inputs are unmodified.
    assert_eq!(a.values(), [0.0, 100.0, 200.0]);
    assert_eq!(b.values(), [400.0, 500.0]);

    assert!(TimeSeries::new().plus(&TimeSeries::new()).is_empty());
}

#[test]
fn test_divided_by() {
    let a = series(&[(2000, 10.0), (2001, 30.0)]);
    let b = series(&[(1999, 7.0), (2000, 5.0), (2001, 10.0)]);

    let quotient = a.divided_by(&b).unwrap();
    assert_eq!(quotient.years(), [2000, 2001]);
    assert_eq!(quotient.values(), [2.0, 3.0]);

    let partial = series(&[(2000, 5.0)]);
    let error = a.divided_by(&partial).unwrap_err();
    assert!(error.is_missing_divisor_year());
}

#[test]
fn test_display() {
    let ts = series(&[(2000, 1.5), (2001, 2.0)]);
    assert_eq!(ts.to_string(), "{2000=1.5, 2001=2}");
    assert_eq!(TimeSeries::new().to_string(), "{}");
}
