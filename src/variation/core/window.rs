//! Short-window pass: make every span of three consecutive links optimal.
//!
//! Purpose
//! -------
//! Slide a window of [`WINDOW_EDGES`] links along the chain. When the direct
//! join between the window's endpoints is worth more than the three links it
//! spans, the two interior points are redundant and are spliced out. Shorter
//! spans need no check: on an alternating chain of extrema, skipping a single
//! point never pays off for `p >= 1`.
//!
//! Key behaviors
//! -------------
//! - `window_sum >= join` keeps the interior points and advances the window
//!   by one link, updating `window_sum` incrementally.
//! - `window_sum < join` splices, then backtracks: a fresh three-link window
//!   is rebuilt around the splice point, reaching back toward the head first
//!   and forward only when the head is hit, because the splice can make
//!   already-checked neighbouring windows improvable.
//! - Control flow is an explicit cursor loop. It terminates because every
//!   splice removes two points and every advance moves the window right.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input chain holds only local extrema (output of
//!   [`detect_local_extrema`](crate::variation::core::extrema::detect_local_extrema)).
//! - On return, every span of three consecutive links satisfies
//!   `sum of link costs >= join of its endpoints`. This is the base case the
//!   interval merger builds on.
//! - Splicing only replaces a sum by a strictly larger join, so the chain
//!   cost never decreases.

use crate::variation::core::{chain::Chain, edge_cost::EdgeCost};

/// Number of links spanned by one window.
pub const WINDOW_EDGES: usize = 3;

/// Splice out interior points of every improvable three-link window.
pub fn check_short_windows(x: &[f64], chain: &mut Chain, cost: EdgeCost) {
    let sentinel = chain.sentinel();
    let mut begin = 0;
    let mut end = 0;
    let mut window_sum = 0.0;

    for _ in 0..WINDOW_EDGES {
        end = chain.next(end);
        if end == sentinel {
            // Chain too short to hold a single window.
            return;
        }
        window_sum += chain.edge_cost(end);
    }

    loop {
        let join = cost.join(x, begin, end);
        if window_sum >= join {
            end = chain.next(end);
            if end == sentinel {
                return;
            }
            begin = chain.next(begin);
            window_sum -= chain.edge_cost(begin);
            window_sum += chain.edge_cost(end);
        } else {
            chain.link(begin, end, join);

            // Re-span three links around the splice point.
            begin = end;
            window_sum = 0.0;
            for _ in 0..WINDOW_EDGES {
                if begin > 0 {
                    window_sum += chain.edge_cost(begin);
                    begin = chain.prev(begin);
                } else {
                    end = chain.next(end);
                    if end == sentinel {
                        return;
                    }
                    window_sum += chain.edge_cost(end);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variation::core::extrema::detect_local_extrema;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A single improvable window being spliced.
    // - Backtracking into an earlier window after a splice.
    // - The exit guarantee (every three-link span is unimprovable) and the
    //   non-decreasing chain cost on pseudo-random walks.
    //
    // They intentionally DO NOT cover:
    // - Exactness of the final p-variation; that depends on the interval
    //   merger and is checked in `variation::pvar` and integration tests.
    // -------------------------------------------------------------------------

    fn reduce(x: &[f64], p: f64) -> Chain {
        let cost = EdgeCost::new(p);
        let mut chain = detect_local_extrema(x, cost);
        check_short_windows(x, &mut chain, cost);
        chain
    }

    fn assert_windows_unimprovable(x: &[f64], chain: &Chain, cost: EdgeCost) {
        let points: Vec<usize> = chain.iter().collect();
        for w in points.windows(WINDOW_EDGES + 1) {
            let sum: f64 = w[1..].iter().map(|&i| chain.edge_cost(i)).sum();
            let join = cost.join(x, w[0], w[WINDOW_EDGES]);
            assert!(
                sum >= join * (1.0 - 1e-12),
                "window {w:?} is improvable: sum = {sum}, join = {join}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // A small wiggle inside a large move is removed.
    //
    // Given
    // -----
    // - `x = [0, 10, 9, 20]`, p = 2: links cost 100 + 1 + 121 = 222 while
    //   the direct join costs 400.
    //
    // Expect
    // ------
    // - Survivors `[0, 3]` with cached cost 400.
    fn check_short_windows_splices_improvable_window() {
        // Arrange / Act
        let chain = reduce(&[0.0, 10.0, 9.0, 20.0], 2.0);

        // Assert
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_relative_eq!(chain.edge_cost(3), 400.0);
        assert_relative_eq!(chain.total_cost(), 400.0);
    }

    #[test]
    // Purpose
    // -------
    // Windows whose links are worth more than the join are left intact.
    //
    // Given
    // -----
    // - `x = [0, 1, 0, 1, 0]`, p = 1.
    //
    // Expect
    // ------
    // - All points survive with total cost 4.
    fn check_short_windows_keeps_unimprovable_windows() {
        // Arrange / Act
        let chain = reduce(&[0.0, 1.0, 0.0, 1.0, 0.0], 1.0);

        // Assert
        assert_eq!(chain.surviving(), 5);
        assert_relative_eq!(chain.total_cost(), 4.0);
    }

    #[test]
    // Purpose
    // -------
    // A splice late in the chain can make an earlier, already accepted
    // window improvable; backtracking must catch it.
    //
    // Given
    // -----
    // - `x = [5, -4, -2, -4, -3, -8]`, p = 3. Windows starting at indices
    //   0 and 1 are accepted, the window 2..5 (8 + 1 + 125 < 216) is
    //   spliced, and the rebuilt window 0..5 (729 + 8 + 216 < 2197) is then
    //   improvable as well.
    //
    // Expect
    // ------
    // - Only the endpoints survive, with cost 13^3 = 2197.
    fn check_short_windows_backtracks_after_splice() {
        // Arrange / Act
        let chain = reduce(&[5.0, -4.0, -2.0, -4.0, -3.0, -8.0], 3.0);

        // Assert
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![0, 5]);
        assert_relative_eq!(chain.total_cost(), 2197.0);
    }

    #[test]
    // Purpose
    // -------
    // On random walks the exit guarantee holds and the pass never lowers
    // the chain cost.
    //
    // Given
    // -----
    // - 50 seeded random walks of length 200 and p in {1, 1.5, 2, 3}.
    //
    // Expect
    // ------
    // - Every three-link span satisfies `sum >= join`.
    // - Cost after the pass is >= cost of the extrema chain.
    fn check_short_windows_establishes_local_optimality() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for trial in 0..50 {
            let p = [1.0, 1.5, 2.0, 3.0][trial % 4];
            let cost = EdgeCost::new(p);
            let mut level = 0.0;
            let x: Vec<f64> = (0..200)
                .map(|_| {
                    level += rng.random_range(-1.0..1.0);
                    level
                })
                .collect();
            let mut chain = detect_local_extrema(&x, cost);
            let before = chain.total_cost();

            // Act
            check_short_windows(&x, &mut chain, cost);

            // Assert
            assert_windows_unimprovable(&x, &chain, cost);
            assert!(chain.total_cost() >= before * (1.0 - 1e-12));
        }
    }
}
