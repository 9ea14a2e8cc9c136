//! variation::pvar: exact p-variation of a real-valued sequence.
//!
//! Purpose
//! -------
//! Compute
//!
//!   V_p(x) = sup over i₀ < i₁ < … < i_k of ∑ⱼ |x[i_{j+1}] − x[i_j]|^p
//!
//! for a finite sequence `x` in near-linear time instead of searching the
//! exponentially many increasing index subsequences.
//!
//! Key behaviors
//! -------------
//! - [`pvar`] is the total, unvalidated entry point: `n <= 1` gives 0,
//!   `n == 2` gives `|x[0] − x[1]|^p`, and longer inputs run the pruning
//!   pipeline (local extrema, short-window pass, interval merge rounds)
//!   before summing the surviving links.
//! - [`pvar_with_options`] exposes the checkpoint stride of the merger.
//! - [`pvar_array`] accepts an `ndarray` view, borrowing the slice when the
//!   view is contiguous and copying once otherwise.
//! - [`PVarOutcome::compute`] validates `p` and the data first and returns
//!   the value together with the p-variation norm `V_p(x)^{1/p}`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The result is exact for `p >= 1`. For `0 < p < 1` the pipeline still
//!   returns the cost of an admissible subsequence, hence a lower bound.
//! - The input is never mutated; all working state lives in one arena that
//!   is dropped before returning, so calls are independent and reentrant.
//! - Out-of-domain inputs (`p <= 0`, non-finite samples) are not rejected by
//!   [`pvar`]; the result is whatever the `powf` arithmetic yields, e.g. a
//!   NaN at a kept point propagates to the sum.
//!
//! Conventions
//! -----------
//! - The returned value is the sum-of-powers form, not the `1/p`-rooted
//!   norm; use [`PVarOutcome::norm`] for the latter.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover the degenerate lengths, the hand-computable
//!   scenarios, the ndarray entry point, and validation in
//!   [`PVarOutcome::compute`].
//! - `tests/integration_pvar_properties.rs` checks the driver against a
//!   brute-force reference and the symmetry, scaling, and duplicate-point
//!   properties on seeded random inputs.

use ndarray::ArrayView1;

use crate::variation::{
    core::{
        edge_cost::EdgeCost, extrema::detect_local_extrema, merge::merge_intervals,
        options::PVarOptions, window::check_short_windows,
    },
    errors::PVarResult,
    validation::validate_input,
};

/// Compute the p-variation of `x` with the default options.
///
/// Examples
/// --------
/// ```rust
/// use rust_pvar::variation::pvar;
///
/// assert_eq!(pvar(&[0.0, 1.0, 0.0], 2.0), 2.0);
/// assert_eq!(pvar(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 2.0), 25.0);
/// assert_eq!(pvar(&[], 2.0), 0.0);
/// ```
pub fn pvar(x: &[f64], p: f64) -> f64 {
    pvar_with_options(x, p, &PVarOptions::default())
}

/// Compute the p-variation of `x` with an explicit checkpoint stride.
///
/// The stride only affects how work is split across merge rounds; the value
/// is the same for every admissible stride.
pub fn pvar_with_options(x: &[f64], p: f64, options: &PVarOptions) -> f64 {
    let cost = EdgeCost::new(p);
    match x.len() {
        0 | 1 => 0.0,
        2 => cost.cost(x[0] - x[1]),
        n => {
            let mut chain = detect_local_extrema(x, cost);
            check_short_windows(x, &mut chain, cost);
            merge_intervals(x, &mut chain, cost, options.checkpoint_stride());

            let value = chain.total_cost();
            log::debug!(
                "pvar: n = {n}, p = {p}, stride = {}, {} surviving points, value = {value}",
                options.checkpoint_stride(),
                chain.surviving()
            );
            value
        }
    }
}

/// Compute the p-variation of a one-dimensional `ndarray` view.
pub fn pvar_array(x: ArrayView1<'_, f64>, p: f64) -> f64 {
    match x.as_slice() {
        Some(slice) => pvar(slice, p),
        None => pvar(&x.to_vec(), p),
    }
}

/// PVarOutcome: validated p-variation of one sequence.
///
/// Purpose
/// -------
/// Carry the result of a validated computation together with the inputs
/// needed to interpret it, for callers (including the Python bindings) that
/// want typed errors instead of out-of-contract arithmetic.
///
/// Fields
/// ------
/// - `value`: `f64`
///   p-variation in sum-of-powers form.
/// - `p`: `f64`
///   Exponent used, finite and > 0.
/// - `n_obs`: `usize`
///   Length of the input sequence.
///
/// Invariants
/// ----------
/// - `value` is finite and ≥ 0 whenever the samples are finite and no
///   power overflows.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PVarOutcome {
    value: f64,
    p: f64,
    n_obs: usize,
}

impl PVarOutcome {
    /// Validate the inputs, then compute the p-variation.
    ///
    /// Errors
    /// ------
    /// - `PVarError::InvalidExponent`
    ///   `p` is NaN, infinite, or not strictly positive.
    /// - `PVarError::NonFiniteData`
    ///   `data` holds a NaN or ±∞.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use rust_pvar::variation::{PVarOptions, PVarOutcome};
    ///
    /// let outcome = PVarOutcome::compute(&[0.0, 3.0, 1.0], 2.0, &PVarOptions::default()).unwrap();
    /// assert_eq!(outcome.value(), 13.0);
    /// assert!((outcome.norm() - 13.0_f64.sqrt()).abs() < 1e-12);
    ///
    /// assert!(PVarOutcome::compute(&[0.0, f64::NAN], 2.0, &PVarOptions::default()).is_err());
    /// ```
    pub fn compute(data: &[f64], p: f64, options: &PVarOptions) -> PVarResult<Self> {
        validate_input(data, p)?;
        let value = pvar_with_options(data, p, options);
        Ok(PVarOutcome { value, p, n_obs: data.len() })
    }

    /// p-variation in sum-of-powers form.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// p-variation norm `value^{1/p}`.
    pub fn norm(&self) -> f64 {
        self.value.powf(self.p.recip())
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Length of the input sequence.
    pub fn n_obs(&self) -> usize {
        self.n_obs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variation::errors::PVarError;
    use approx::assert_relative_eq;
    use ndarray::{array, s, Array2};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Degenerate lengths (0, 1, 2).
    // - Hand-computable scenarios for p = 1, 2, 3.
    // - Contiguous and strided ndarray inputs.
    // - Validation and accessors of `PVarOutcome`.
    //
    // They intentionally DO NOT cover:
    // - Randomized exactness, symmetry, and scaling properties; see
    //   `tests/integration_pvar_properties.rs`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Sequences with fewer than two points have zero p-variation and two
    // points give a single link.
    //
    // Given
    // -----
    // - `[]`, `[3.5]`, and `[1, -2]` with p = 3.
    //
    // Expect
    // ------
    // - 0, 0, and 27.
    fn pvar_degenerate_lengths() {
        assert_eq!(pvar(&[], 3.0), 0.0);
        assert_eq!(pvar(&[3.5], 3.0), 0.0);
        assert_relative_eq!(pvar(&[1.0, -2.0], 3.0), 27.0);
    }

    #[test]
    // Purpose
    // -------
    // Check the driver on hand-computable sequences.
    //
    // Given
    // -----
    // - `[0, 1, 0]` with p = 2, `[0, 1, 0, 1, 0]` with p = 1,
    //   `[0, 2, 1, 3, 0]` with p = 1, `[1, 1, 1, 1]` with p = 3,
    //   `[0, 1, 2, 3, 4, 5]` with p = 2.
    //
    // Expect
    // ------
    // - 2, 4, 8, 0, and 25 respectively.
    fn pvar_hand_computable_scenarios() {
        assert_relative_eq!(pvar(&[0.0, 1.0, 0.0], 2.0), 2.0);
        assert_relative_eq!(pvar(&[0.0, 1.0, 0.0, 1.0, 0.0], 1.0), 4.0);
        assert_relative_eq!(pvar(&[0.0, 2.0, 1.0, 3.0, 0.0], 1.0), 8.0);
        assert_eq!(pvar(&[1.0, 1.0, 1.0, 1.0], 3.0), 0.0);
        assert_relative_eq!(pvar(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 2.0), 25.0);
    }

    #[test]
    // Purpose
    // -------
    // For p = 2 a small wiggle inside a large move is skipped in favour of
    // the direct jump, while for p = 1 every turn counts.
    //
    // Given
    // -----
    // - `x = [0, 10, 9, 20]`.
    //
    // Expect
    // ------
    // - p = 2: 400 (= 20²); p = 1: 22 (total variation).
    fn pvar_skips_wiggles_only_when_convexity_pays() {
        let x = [0.0, 10.0, 9.0, 20.0];
        assert_relative_eq!(pvar(&x, 2.0), 400.0);
        assert_relative_eq!(pvar(&x, 1.0), 22.0);
    }

    #[test]
    // Purpose
    // -------
    // The ndarray entry point agrees with the slice entry point for both
    // contiguous and strided views.
    //
    // Given
    // -----
    // - A contiguous array `[0, 3, 1]` and a strided view of
    //   `[0, 9, 1, 9, 0]` selecting `[0, 1, 0]`; a column of a 2-D array.
    //
    // Expect
    // ------
    // - 13 and 2 for p = 2, and the column result equals the slice result.
    fn pvar_array_handles_contiguous_and_strided_views() {
        // Arrange
        let contiguous = array![0.0, 3.0, 1.0];
        let base = array![0.0, 9.0, 1.0, 9.0, 0.0];
        let matrix = Array2::from_shape_vec((4, 2), vec![0.0, 5.0, 2.0, 5.0, -1.0, 5.0, 4.0, 5.0])
            .expect("4 x 2 shape matches 8 values");

        // Act
        let a = pvar_array(contiguous.view(), 2.0);
        let b = pvar_array(base.slice(s![..;2]), 2.0);
        let c = pvar_array(matrix.column(0), 2.0);

        // Assert
        assert_relative_eq!(a, 13.0);
        assert_relative_eq!(b, 2.0);
        assert_relative_eq!(c, pvar(&[0.0, 2.0, -1.0, 4.0], 2.0));
    }

    #[test]
    // Purpose
    // -------
    // Every admissible stride yields the same value.
    //
    // Given
    // -----
    // - A fixed zig-zag of 40 points with p = 2.5.
    //
    // Expect
    // ------
    // - `pvar_with_options` agrees with `pvar` for strides 1..=4.
    fn pvar_with_options_is_stride_independent() {
        // Arrange
        let x: Vec<f64> = (0..40).map(|i| ((i * 7919) % 23) as f64 - 11.0).collect();
        let reference = pvar(&x, 2.5);

        for stride in 1..=4 {
            // Act
            let opts = PVarOptions::new(stride).expect("stride in range");
            let value = pvar_with_options(&x, 2.5, &opts);

            // Assert
            assert_relative_eq!(value, reference, max_relative = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Document out-of-contract input: a NaN at the head is kept by the
    // extrema pass and propagates to the result.
    //
    // Given
    // -----
    // - `x = [NaN, 0, 1]`, p = 1.
    //
    // Expect
    // ------
    // - The result is NaN and no panic occurs.
    fn pvar_nan_at_kept_point_propagates() {
        assert!(pvar(&[f64::NAN, 0.0, 1.0], 1.0).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // `PVarOutcome::compute` returns the value, the norm, and the inputs.
    //
    // Given
    // -----
    // - `x = [0, 1, 0, 1, 0]`, p = 2.
    //
    // Expect
    // ------
    // - value 4, norm 2, p 2, n_obs 5.
    fn pvar_outcome_compute_reports_value_and_norm() {
        // Arrange
        let x = [0.0, 1.0, 0.0, 1.0, 0.0];

        // Act
        let outcome =
            PVarOutcome::compute(&x, 2.0, &PVarOptions::default()).expect("valid inputs");

        // Assert
        assert_relative_eq!(outcome.value(), 4.0);
        assert_relative_eq!(outcome.norm(), 2.0);
        assert_eq!(outcome.p(), 2.0);
        assert_eq!(outcome.n_obs(), 5);
    }

    #[test]
    // Purpose
    // -------
    // `PVarOutcome::compute` rejects out-of-contract inputs with typed
    // errors instead of returning NaN.
    //
    // Given
    // -----
    // - p = 0 with finite data; p = 2 with an infinite sample at index 1.
    //
    // Expect
    // ------
    // - `InvalidExponent(0.0)` and `NonFiniteData { index: 1, .. }`.
    fn pvar_outcome_compute_rejects_invalid_inputs() {
        // Arrange
        let opts = PVarOptions::default();

        // Act
        let bad_p = PVarOutcome::compute(&[0.0, 1.0], 0.0, &opts);
        let bad_x = PVarOutcome::compute(&[0.0, f64::INFINITY, 1.0], 2.0, &opts);

        // Assert
        assert_eq!(bad_p, Err(PVarError::InvalidExponent(0.0)));
        match bad_x {
            Err(PVarError::NonFiniteData { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected NonFiniteData error, got {other:?}"),
        }
    }
}
