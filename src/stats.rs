//! Descriptive statistics over slices of finite `f64` samples.
//!
//! Every function here panics on an empty (or, for [`stddev`], single
//! element) slice and on any NaN or infinite sample. The checks run before
//! any arithmetic, so a panic never leaves [`median`]'s input half sorted.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: plain left-to-right accumulation.
//! - **Median**: in-place bubble sort, then the middle element (or mean of
//!   the two middle elements).
//! - **Mode**: one scan for the longest run of equal neighbours; the input
//!   must already be sorted.
//! - **StdDev**: two-pass sample standard deviation with Bessel's
//!   correction (denominator `n − 1`).

use crate::arith::is_finite;
use crate::roots::sqrt;

/// Panics unless `data` has at least `min_len` samples, all finite.
#[track_caller]
fn require_samples(op: &str, data: &[f64], min_len: usize) {
    assert!(
        data.len() >= min_len,
        "{op}: need at least {min_len} sample(s), got {}",
        data.len()
    );
    if let Some((i, x)) = data.iter().enumerate().find(|(_, x)| !is_finite(**x)) {
        panic!("{op}: sample {i} must be finite, got {x}");
    }
}

/// Sum of all samples.
///
/// # Panics
/// If `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathlib::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    require_samples("sum", data, 1);
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Arithmetic mean.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Panics
/// If `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathlib::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    require_samples("mean", data, 1);
    sum(data) / data.len() as f64
}

/// Sorts `data` ascending in place with a stable bubble sort.
///
/// Each pass bubbles the largest remaining element to the end; a pass
/// that makes no swap ends the sort early.
///
/// # Complexity
/// Time: O(n²) worst case, O(n) on sorted input. Space: O(1)
///
/// # Panics
/// If `data` contains NaN/Inf.
pub fn bubble_sort(data: &mut [f64]) {
    require_samples("bubble_sort", data, 0);
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Median of `data`, sorting it **in place** first.
///
/// After the call `data` is in ascending order. Pass a copy
/// (`&mut data.to_vec()`) if the original order must be kept.
///
/// # Complexity
/// Time: O(n²) (bubble sort), Space: O(1)
///
/// # Panics
/// If `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathlib::stats::median;
/// let mut odd = [1.0, 3.0, 2.0];
/// assert_eq!(median(&mut odd), 2.0);
/// assert_eq!(odd, [1.0, 2.0, 3.0]);
///
/// let mut even = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(median(&mut even), 2.5);
/// ```
pub fn median(data: &mut [f64]) -> f64 {
    require_samples("median", data, 1);
    bubble_sort(data);

    let n = data.len();
    if n % 2 == 0 {
        (data[n / 2 - 1] + data[n / 2]) / 2.0
    } else {
        data[n / 2]
    }
}

/// Most frequent value of **sorted** `data`.
///
/// Scans once for the longest run of equal adjacent samples and returns
/// its value; among runs of equal length the first one wins.
///
/// The input is not sorted here. On unsorted input only adjacent
/// duplicates are counted and the result is not the mode; sort with
/// [`bubble_sort`] (or call [`median`]) first.
///
/// # Panics
/// If `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathlib::stats::mode;
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0, 3.0, 3.0]), 3.0);
/// assert_eq!(mode(&[1.0, 1.0, 2.0, 2.0]), 1.0);
/// ```
pub fn mode(data: &[f64]) -> f64 {
    require_samples("mode", data, 1);

    let mut mode = data[0];
    let mut max_count = 1;
    let mut current_count = 1;

    for pair in data.windows(2) {
        if pair[1] == pair[0] {
            current_count += 1;
        } else {
            if current_count > max_count {
                max_count = current_count;
                mode = pair[0];
            }
            current_count = 1;
        }
    }
    if current_count > max_count {
        mode = data[data.len() - 1];
    }
    mode
}

/// Sample standard deviation (Bessel-corrected, denominator `n − 1`).
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Panics
/// If `data.len() < 2` or `data` contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_mathlib::stats::stddev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((stddev(&v) - 2.138089935299395).abs() < 1e-12);
/// ```
pub fn stddev(data: &[f64]) -> f64 {
    require_samples("stddev", data, 2);

    let m = mean(data);
    let squares = data.iter().fold(0.0, |acc, &x| {
        let diff = x - m;
        acc + diff * diff
    });
    sqrt(squares / (data.len() - 1) as f64)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn bubble_sort_matches_std_sort(data in finite_vec(0, 60)) {
            let mut ours = data.clone();
            bubble_sort(&mut ours);
            let mut reference = data;
            reference.sort_by(|a, b| a.partial_cmp(b).unwrap());
            prop_assert_eq!(ours, reference);
        }

        #[test]
        fn median_between_min_and_max(data in finite_vec(1, 60)) {
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let m = median(&mut data.clone());
            prop_assert!(lo <= m && m <= hi);
        }

        #[test]
        fn mean_between_min_and_max(data in finite_vec(1, 60)) {
            let lo = data.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let m = mean(&data);
            let tol = 1e-9 * hi.abs().max(lo.abs()).max(1.0);
            prop_assert!(lo - tol <= m && m <= hi + tol);
        }

        #[test]
        fn stddev_non_negative_and_shift_invariant(
            data in finite_vec(2, 60),
            shift in -1e3_f64..1e3,
        ) {
            let sd = stddev(&data);
            prop_assert!(sd >= 0.0);
            let shifted: Vec<f64> = data.iter().map(|x| x + shift).collect();
            let sd2 = stddev(&shifted);
            prop_assert!((sd - sd2).abs() < 1e-6 * sd.max(1.0));
        }

        #[test]
        fn mode_of_sorted_is_most_frequent(
            data in proptest::collection::vec(0_i32..5, 1..40),
        ) {
            let mut values: Vec<f64> = data.iter().map(|&x| f64::from(x)).collect();
            bubble_sort(&mut values);
            let m = mode(&values);
            let count = |v: f64| values.iter().filter(|&&x| x == v).count();
            let best = values.iter().map(|&v| count(v)).max().unwrap();
            prop_assert_eq!(count(m), best);
        }
    }
}
