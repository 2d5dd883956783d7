// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Sum a slice of integers.
///
/// An empty slice sums to zero. Returns `None` if the total does not fit in
/// an `i64`.
///
/// # Example
///
/// ```rust
/// use data_processor::utils::calculate_sum;
///
/// assert_eq!(calculate_sum(&[1, 2, 3, 4, 5]), Some(15));
/// assert_eq!(calculate_sum(&[]), Some(0));
/// assert_eq!(calculate_sum(&[i64::MAX, 1]), None);
/// ```
pub fn calculate_sum(numbers: &[i64]) -> Option<i64> {
    numbers
        .iter()
        .try_fold(0i64, |total, &number| total.checked_add(number))
}
