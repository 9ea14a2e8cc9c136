//! Local-extrema reduction: the first pruning pass of the p-variation core.
//!
//! Purpose
//! -------
//! Build the initial [`Chain`] by keeping only the points where the path
//! strictly reverses direction, plus both endpoints. Along a monotone run the
//! single jump across the run dominates any route through its interior when
//! `p >= 1`, so interior points of runs can never improve the supremum.
//!
//! Key behaviors
//! -------------
//! - One linear scan; each kept point is linked to the previously kept one
//!   and its link cost is cached.
//! - Ties (`x[i+1] == x[i]`) never start a new extremum: the direction seen
//!   before the plateau carries across it, and the reversal is recorded at
//!   the last point of the plateau.
//! - The final index is always kept; index 0 is always the head.
//!
//! Invariants & assumptions
//! ------------------------
//! - Consecutive kept points alternate between local maxima and minima,
//!   apart from the two endpoints.
//! - The resulting chain cost is a lower bound on the p-variation (it is the
//!   cost of one admissible subsequence) and equals the total variation when
//!   `p == 1`.

use crate::variation::core::{chain::Chain, edge_cost::EdgeCost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Rising,
    Falling,
    Undetermined,
}

/// Link the local extrema of `x` into a fresh chain.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input sequence. The driver calls this for `x.len() >= 3`; shorter
///   inputs still produce a well-formed chain.
/// - `cost`: [`EdgeCost`]
///   Prices each kept link as `|x[i] - x[last]|^p`.
///
/// Returns
/// -------
/// [`Chain`] over `x.len()` records whose surviving indices are the head,
/// every strict direction reversal, and the final index.
pub fn detect_local_extrema(x: &[f64], cost: EdgeCost) -> Chain {
    let n = x.len();
    let mut chain = Chain::new(n);
    let mut last_extremum = 0;
    let mut direction = Direction::Undetermined;

    for i in 0..n {
        let is_extremum = match x.get(i + 1) {
            None => true,
            Some(&following) if following > x[i] => {
                let turned = direction == Direction::Falling;
                direction = Direction::Rising;
                turned
            }
            Some(&following) if following < x[i] => {
                let turned = direction == Direction::Rising;
                direction = Direction::Falling;
                turned
            }
            Some(_) => false,
        };

        if is_extremum && i > last_extremum {
            chain.link(last_extremum, i, cost.join(x, last_extremum, i));
            last_extremum = i;
        }
    }

    chain
}
