//! likelihood::frequency — tabulated samples and their moments.
//!
//! Purpose
//! -------
//! Represent a sample as distinct values with occurrence counts. Sliding
//! and k-block maxima repeat the same value over many consecutive
//! positions, so tabulating them shrinks the work of every likelihood
//! evaluation from `n` terms to the number of distinct maxima.
//!
//! Key behaviors
//! -------------
//! - [`FrequencyTable::new`] validates paired values / counts.
//! - [`FrequencyTable::from_labels`] parses textual value labels (as found
//!   in the names of a tabulated vector) into numbers.
//! - [`FrequencyTable::from_sample`] tabulates a raw sample, sorted by value.
//! - [`FrequencyTable::mean`] / [`FrequencyTable::variance`] give the
//!   count-weighted mean and unbiased (`N - 1`) variance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Values are finite; counts are finite and ≥ 0; the total count is > 0.
//! - Counts are `f64` so that fractional weights are accepted.
//!
//! Testing notes
//! -------------
//! - Unit tests compare moments against the expanded sample and cover each
//!   validation branch.

use crate::likelihood::errors::{GevError, GevResult};

/// `FrequencyTable` — distinct values paired with non-negative counts.
///
/// Fields
/// ------
/// - `values`: `Vec<f64>`
///   Tabulated values; finite.
/// - `counts`: `Vec<f64>`
///   Occurrence counts aligned with `values`; finite and ≥ 0, positive sum.
///
/// Performance
/// -----------
/// - Construction is O(m) in the number of entries (O(n log n) for
///   [`FrequencyTable::from_sample`] due to sorting); moments are O(m).
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    values: Vec<f64>,
    counts: Vec<f64>,
}

impl FrequencyTable {
    /// Construct a validated table from aligned values and counts.
    ///
    /// Errors
    /// ------
    /// - `GevError::EmptyTable` when `values` is empty.
    /// - `GevError::LengthMismatch` when the lengths differ.
    /// - `GevError::NonFiniteValue` for the first NaN/±∞ value.
    /// - `GevError::InvalidCount` for the first negative or non-finite count.
    /// - `GevError::ZeroTotalCount` when every count is zero.
    pub fn new(values: Vec<f64>, counts: Vec<f64>) -> GevResult<Self> {
        if values.is_empty() {
            return Err(GevError::EmptyTable);
        }
        if values.len() != counts.len() {
            return Err(GevError::LengthMismatch { values: values.len(), counts: counts.len() });
        }
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(GevError::NonFiniteValue { index, value });
            }
        }
        for (index, &count) in counts.iter().enumerate() {
            if !count.is_finite() || count < 0.0 {
                return Err(GevError::InvalidCount { index, count });
            }
        }
        if counts.iter().sum::<f64>() <= 0.0 {
            return Err(GevError::ZeroTotalCount);
        }
        Ok(FrequencyTable { values, counts })
    }

    /// Construct a table whose values are given as text labels.
    ///
    /// Labels are trimmed and parsed as `f64`; anything else is an error
    /// rather than a silent zero.
    ///
    /// Errors
    /// ------
    /// - `GevError::InvalidLabel { index, label }` for the first label that
    ///   does not parse.
    /// - Any error of [`FrequencyTable::new`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_extremes::likelihood::FrequencyTable;
    /// let table = FrequencyTable::from_labels(&["1.5", " 2", "4e0"], &[2.0, 1.0, 1.0]).unwrap();
    /// assert_eq!(table.values(), &[1.5, 2.0, 4.0]);
    /// assert_eq!(table.mean(), 2.25);
    /// ```
    pub fn from_labels<S: AsRef<str>>(labels: &[S], counts: &[f64]) -> GevResult<Self> {
        let values = labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let label = label.as_ref();
                label
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| GevError::InvalidLabel { index, label: label.to_string() })
            })
            .collect::<GevResult<Vec<f64>>>()?;
        FrequencyTable::new(values, counts.to_vec())
    }

    /// Tabulate a raw sample into ascending distinct values with counts.
    ///
    /// Errors
    /// ------
    /// - `GevError::EmptyTable` when `sample` is empty.
    /// - `GevError::NonFiniteValue { index, value }` for the first NaN/±∞
    ///   observation, with `index` into `sample`.
    pub fn from_sample(sample: &[f64]) -> GevResult<Self> {
        if sample.is_empty() {
            return Err(GevError::EmptyTable);
        }
        for (index, &value) in sample.iter().enumerate() {
            if !value.is_finite() {
                return Err(GevError::NonFiniteValue { index, value });
            }
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut values: Vec<f64> = Vec::new();
        let mut counts: Vec<f64> = Vec::new();
        for value in sorted {
            match values.last() {
                Some(&last) if last == value => {
                    if let Some(count) = counts.last_mut() {
                        *count += 1.0;
                    }
                }
                _ => {
                    values.push(value);
                    counts.push(1.0);
                }
            }
        }
        Ok(FrequencyTable { values, counts })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all counts (the size of the underlying sample).
    pub fn total_count(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Iterate over `(value, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.counts.iter().copied())
    }

    /// Count-weighted arithmetic mean `Σ cᵢ xᵢ / Σ cᵢ`.
    pub fn mean(&self) -> f64 {
        let weighted: f64 = self.iter().map(|(value, count)| value * count).sum();
        weighted / self.total_count()
    }

    /// Unbiased count-weighted variance `Σ cᵢ (xᵢ - x̄)² / (N - 1)`.
    ///
    /// Errors
    /// ------
    /// - `GevError::InsufficientCount` when `N = Σ cᵢ ≤ 1`.
    pub fn variance(&self) -> GevResult<f64> {
        let total = self.total_count();
        if total <= 1.0 {
            return Err(GevError::InsufficientCount { total });
        }
        let mean = self.mean();
        let squares: f64 = self.iter().map(|(value, count)| count * (mean - value).powi(2)).sum();
        Ok(squares / (total - 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation branches of `FrequencyTable::new` and `from_labels`.
    // - Tabulation order and counts of `from_sample`.
    // - Agreement of `mean` / `variance` with the expanded sample.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check that moments match those of the expanded sample.
    //
    // Given
    // -----
    // - Table `{1.0: 2, 3.0: 1, 6.0: 3}`, i.e. `[1, 1, 3, 6, 6, 6]`.
    //
    // Expect
    // ------
    // - Mean 23/6 and unbiased variance equal to the direct computation.
    fn frequency_table_moments_match_expanded_sample() {
        // Arrange
        let table = FrequencyTable::new(vec![1.0, 3.0, 6.0], vec![2.0, 1.0, 3.0]).unwrap();
        let expanded = [1.0, 1.0, 3.0, 6.0, 6.0, 6.0];
        let mean = expanded.iter().sum::<f64>() / 6.0;
        let var = expanded.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 5.0;

        // Act / Assert
        assert_relative_eq!(table.mean(), mean, epsilon = 1e-12);
        assert_relative_eq!(table.variance().unwrap(), var, epsilon = 1e-12);
        assert_eq!(table.total_count(), 6.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify tabulation of a raw sample.
    //
    // Given
    // -----
    // - `[5, 2, 5, 2, 2, 9]`.
    //
    // Expect
    // ------
    // - Values `[2, 5, 9]`, counts `[3, 2, 1]`.
    fn frequency_table_from_sample_sorts_and_counts() {
        let table = FrequencyTable::from_sample(&[5.0, 2.0, 5.0, 2.0, 2.0, 9.0]).unwrap();
        assert_eq!(table.values(), &[2.0, 5.0, 9.0]);
        assert_eq!(table.counts(), &[3.0, 2.0, 1.0]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Ensure unparsable labels are reported rather than read as zero.
    //
    // Given
    // -----
    // - Labels `["1.0", "x2"]`.
    //
    // Expect
    // ------
    // - `InvalidLabel { index: 1, label: "x2" }`.
    fn frequency_table_from_labels_rejects_garbage() {
        assert_eq!(
            FrequencyTable::from_labels(&["1.0", "x2"], &[1.0, 1.0]),
            Err(GevError::InvalidLabel { index: 1, label: "x2".to_string() })
        );
    }

    #[test]
    // Purpose
    // -------
    // Cover the structural validation branches of `new`.
    //
    // Given
    // -----
    // - Empty table, mismatched lengths, NaN value, negative count, and
    //   all-zero counts.
    //
    // Expect
    // ------
    // - The matching `GevError` variant for each.
    fn frequency_table_new_rejects_malformed_input() {
        assert_eq!(FrequencyTable::new(vec![], vec![]), Err(GevError::EmptyTable));
        assert_eq!(
            FrequencyTable::new(vec![1.0], vec![1.0, 2.0]),
            Err(GevError::LengthMismatch { values: 1, counts: 2 })
        );
        assert!(matches!(
            FrequencyTable::new(vec![1.0, f64::NAN], vec![1.0, 1.0]),
            Err(GevError::NonFiniteValue { index: 1, .. })
        ));
        assert_eq!(
            FrequencyTable::new(vec![1.0, 2.0], vec![1.0, -1.0]),
            Err(GevError::InvalidCount { index: 1, count: -1.0 })
        );
        assert_eq!(FrequencyTable::new(vec![1.0], vec![0.0]), Err(GevError::ZeroTotalCount));
    }

    #[test]
    // Purpose
    // -------
    // Ensure the variance needs more than one observation.
    //
    // Given
    // -----
    // - A single value with count 1.
    //
    // Expect
    // ------
    // - `InsufficientCount { total: 1.0 }`.
    fn frequency_table_variance_requires_two_observations() {
        let table = FrequencyTable::new(vec![4.0], vec![1.0]).unwrap();
        assert_eq!(table.variance(), Err(GevError::InsufficientCount { total: 1.0 }));
    }
}
