//! Interval merger: pairwise merging of locally optimal intervals.
//!
//! Purpose
//! -------
//! Turn a chain whose short spans are already optimal into a chain whose
//! cost equals the p-variation of the whole sequence. The chain is cut into
//! checkpoint intervals, each known to be optimal on its own, and adjacent
//! intervals `[a, v]` and `[v, b]` are merged in tournament rounds until a
//! single interval remains.
//!
//! Key behaviors
//! -------------
//! - [`select_checkpoints`] records every `stride`-th surviving point, then
//!   always appends the final index.
//! - [`merge_good_intervals`] merges one pair of intervals around the pivot
//!   `v`. Only running extrema seen while walking away from `v` can take part
//!   in a joint that skips `v`; every other point is dominated by an extremum
//!   reached at no greater cost with at least as large a displacement. The
//!   best joint is searched over (left minima x right maxima) and
//!   (left maxima x right minima) with a forward-only sweep of the right
//!   candidates, and spliced in when its balance is strictly positive.
//! - [`merge_intervals`] runs the rounds; each round merges disjoint triples
//!   `(c[0], c[1], c[2])`, `(c[2], c[3], c[4])`, ... and drops the pivots,
//!   roughly halving the checkpoint list.
//!
//! Invariants & assumptions
//! ------------------------
//! - Intervals between consecutive checkpoints are optimal when a round
//!   starts. For the first round this comes from the short-window pass and a
//!   stride of at most `MAX_CHECKPOINT_STRIDE`.
//! - A merge never removes its outer endpoints `a` and `b`: the spliced
//!   joint runs between a left candidate in `[a, v)` and a right candidate in
//!   `(v, b]`, so checkpoints of later rounds always survive.
//! - Candidate buffers live in a [`MergeScratch`] owned by one computation
//!   and are cleared, not reallocated, for every merge.
//!
//! Performance
//! -----------
//! - Each round touches every surviving point at most twice, and there are
//!   `O(log(n / stride))` rounds.

use crate::variation::core::{chain::Chain, edge_cost::EdgeCost};

/// CandidatePoint: a running extremum on one side of a merge pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidatePoint {
    /// Index into the input sequence.
    pub index: usize,
    /// Cost of the chain links between the pivot and this point.
    pub cost_from_pivot: f64,
}

/// Reusable candidate buffers for [`merge_good_intervals`].
///
/// Left buffers hold running extrema of `[a, v)` in order of increasing
/// distance from the pivot; right buffers do the same for `(v, b]`.
#[derive(Debug, Default)]
pub struct MergeScratch {
    left_minima: Vec<CandidatePoint>,
    left_maxima: Vec<CandidatePoint>,
    right_minima: Vec<CandidatePoint>,
    right_maxima: Vec<CandidatePoint>,
}

impl MergeScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn clear(&mut self) {
        self.left_minima.clear();
        self.left_maxima.clear();
        self.right_minima.clear();
        self.right_maxima.clear();
    }
}

/// Best joint found so far while merging one pair of intervals.
#[derive(Debug, Clone, Copy)]
struct Joint {
    left: usize,
    right: usize,
    cost: f64,
    balance: f64,
}

/// Record every `stride`-th surviving point, starting at the head, and then
/// the final index.
///
/// The final index may be recorded twice when the surviving count is
/// `1 (mod stride)`; the resulting empty interval is a no-op merge.
pub fn select_checkpoints(chain: &Chain, stride: usize) -> Vec<usize> {
    let mut checkpoints: Vec<usize> = chain.iter().step_by(stride).collect();
    if let Some(last) = chain.sentinel().checked_sub(1) {
        checkpoints.push(last);
    }
    checkpoints
}

/// Merge the optimal intervals `[a, v]` and `[v, b]` into one optimal
/// interval `[a, b]`.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Input sequence.
/// - `chain`: `&mut Chain`
///   Working chain; `a <= v <= b` must all be surviving points.
/// - `cost`: [`EdgeCost`]
///   Link pricing.
/// - `scratch`: `&mut MergeScratch`
///   Candidate buffers, cleared on entry.
/// - `a`, `v`, `b`: `usize`
///   Left checkpoint, pivot, and right checkpoint.
///
/// Returns
/// -------
/// `bool`
///   `true` when a joint with strictly positive balance was spliced in,
///   removing every point strictly between its endpoints (including `v`).
///   `false` when the two intervals are already jointly optimal or one of
///   them is empty.
pub fn merge_good_intervals(
    x: &[f64], chain: &mut Chain, cost: EdgeCost, scratch: &mut MergeScratch, a: usize, v: usize,
    b: usize,
) -> bool {
    if a == v || v == b {
        return false;
    }

    scratch.clear();
    collect_left_candidates(x, chain, scratch, a, v);
    collect_right_candidates(x, chain, scratch, v, b);

    let mut best: Option<Joint> = None;
    sweep_joints(x, cost, &scratch.left_minima, &scratch.right_maxima, &mut best);
    sweep_joints(x, cost, &scratch.left_maxima, &scratch.right_minima, &mut best);

    match best {
        Some(joint) => {
            log::trace!(
                "merge [{a}, {v}, {b}]: joint {} -> {} (balance {})",
                joint.left,
                joint.right,
                joint.balance
            );
            chain.link(joint.left, joint.right, joint.cost);
            true
        }
        None => false,
    }
}

/// Walk from the pivot back to `a`, recording new running minima and maxima.
fn collect_left_candidates(
    x: &[f64], chain: &Chain, scratch: &mut MergeScratch, a: usize, v: usize,
) {
    let mut reached = 0.0;
    let mut cursor = v;
    let (mut low, mut high) = (x[v], x[v]);

    while cursor != a {
        reached += chain.edge_cost(cursor);
        cursor = chain.prev(cursor);
        let value = x[cursor];
        if value > high {
            high = value;
            scratch.left_maxima.push(CandidatePoint { index: cursor, cost_from_pivot: reached });
        }
        if value < low {
            low = value;
            scratch.left_minima.push(CandidatePoint { index: cursor, cost_from_pivot: reached });
        }
    }
}

/// Walk from the pivot forward to `b`, recording new running minima and maxima.
fn collect_right_candidates(
    x: &[f64], chain: &Chain, scratch: &mut MergeScratch, v: usize, b: usize,
) {
    let mut reached = 0.0;
    let mut cursor = v;
    let (mut low, mut high) = (x[v], x[v]);

    while cursor != b {
        cursor = chain.next(cursor);
        reached += chain.edge_cost(cursor);
        let value = x[cursor];
        if value > high {
            high = value;
            scratch.right_maxima.push(CandidatePoint { index: cursor, cost_from_pivot: reached });
        }
        if value < low {
            low = value;
            scratch.right_minima.push(CandidatePoint { index: cursor, cost_from_pivot: reached });
        }
    }
}

/// Search one orientation for a joint beating `best`.
///
/// For each left candidate the scan of right candidates restarts at the
/// right candidate of the last improvement; right candidates before it are
/// never revisited.
fn sweep_joints(
    x: &[f64], cost: EdgeCost, left: &[CandidatePoint], right: &[CandidatePoint],
    best: &mut Option<Joint>,
) {
    let mut start = 0;
    for l in left {
        let mut next_start = start;
        for (k, r) in right.iter().enumerate().skip(start) {
            let join = cost.join(x, l.index, r.index);
            let balance = join - r.cost_from_pivot - l.cost_from_pivot;
            if balance > best.map_or(0.0, |j| j.balance) {
                *best = Some(Joint { left: l.index, right: r.index, cost: join, balance });
                next_start = k;
            }
        }
        start = next_start;
    }
}

/// Merge checkpoint intervals in rounds until one interval spans the chain.
///
/// Requires every interval between consecutive checkpoints of
/// [`select_checkpoints`] to be optimal, which holds after the short-window
/// pass for `1 <= stride <= MAX_CHECKPOINT_STRIDE`.
pub fn merge_intervals(x: &[f64], chain: &mut Chain, cost: EdgeCost, stride: usize) {
    let mut scratch = MergeScratch::new();
    let mut checkpoints = select_checkpoints(chain, stride);
    let mut round = 0;

    while checkpoints.len() > 2 {
        let len = checkpoints.len();
        let mut splices = 0;
        let mut write = 1;
        let mut i = 0;

        while i + 2 < len {
            let (a, v, b) = (checkpoints[i], checkpoints[i + 1], checkpoints[i + 2]);
            if merge_good_intervals(x, chain, cost, &mut scratch, a, v, b) {
                splices += 1;
            }
            checkpoints[write] = b;
            write += 1;
            i += 2;
        }
        // Unpaired trailing checkpoint carries over to the next round.
        for j in i + 1..len {
            checkpoints[write] = checkpoints[j];
            write += 1;
        }
        checkpoints.truncate(write);

        log::trace!("merge round {round}: {len} -> {write} checkpoints, {splices} splices");
        round += 1;
    }
}
