//! Edge cost: the contribution `|d|^p` of one displacement to a p-variation sum.
//!
//! Every other component of the p-variation core prices links through
//! [`EdgeCost`], so the exponent is fixed once per call and the power
//! semantics are shared. Out-of-domain inputs (`p <= 0`, non-finite `d`)
//! yield whatever `f64::powf` produces; NaN propagates.

/// Raise `|diff|` to the power `p`.
#[inline]
pub fn edge_cost(diff: f64, p: f64) -> f64 {
    diff.abs().powf(p)
}

/// EdgeCost: `|d|^p` with `p` fixed for the duration of one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCost {
    p: f64,
}

impl EdgeCost {
    pub fn new(p: f64) -> Self {
        EdgeCost { p }
    }

    /// Exponent this cost function was built with.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Cost of the displacement `diff`.
    #[inline]
    pub fn cost(&self, diff: f64) -> f64 {
        edge_cost(diff, self.p)
    }

    /// Cost of the direct link between `x[from]` and `x[to]`.
    #[inline]
    pub fn join(&self, x: &[f64], from: usize, to: usize) -> f64 {
        self.cost(x[to] - x[from])
    }
}
