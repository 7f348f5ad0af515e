//! Perfect matchings of field positions.
//!
//! A matching is stored flattened: positions `2k` and `2k + 1` form pair `k`.
//! The enumerator fixes the first remaining position, pairs it with every
//! other position in turn and recurses on what is left, so a list of M
//! positions yields `(M-1)!!` matchings. Nothing is pruned; keep M small.

use rayon::prelude::*;
use tracing::trace;

/// Flattened, pair-grouped perfect matching over positions.
pub type Matching = Vec<usize>;

/// `n!! = n (n-2) (n-4) ...`, with `0!! = 1!! = 1`.
///
/// `None` once the product no longer fits in a `u128` (from `57!!` on).
pub fn double_factorial(n: u64) -> Option<u128> {
    (1..=n)
        .rev()
        .step_by(2)
        .try_fold(1u128, |acc, k| acc.checked_mul(u128::from(k)))
}

/// Number of perfect matchings on `n` elements: `(n-1)!!` for even `n`,
/// zero for odd `n`. `None` when the count overflows a `u128` (`n >= 58`).
pub fn matching_count(n: usize) -> Option<u128> {
    match n {
        0 => Some(1),
        n if n % 2 == 1 => Some(0),
        n => double_factorial(n as u64 - 1),
    }
}

/// One top-level choice: the first position paired with a partner, and the
/// positions left for the recursion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub pair:    (usize, usize),
    pub friends: Vec<usize>,
}

impl Branch {
    /// All matchings starting with this branch's pair.
    pub fn expand(&self) -> Vec<Matching> {
        let (a, b) = self.pair;
        perfect_matchings(&self.friends)
            .into_iter()
            .map(|rest| {
                let mut m = Vec::with_capacity(rest.len() + 2);
                m.push(a);
                m.push(b);
                m.extend(rest);
                m
            })
            .collect()
    }
}

/// Split `positions` by the partner of its first element.
///
/// Friends keep their original relative order. Empty for fewer than two
/// positions.
pub fn first_partner_branches(positions: &[usize]) -> Vec<Branch> {
    let Some((&first, rest)) = positions.split_first() else {
        return Vec::new();
    };
    (0..rest.len())
        .map(|i| {
            let friends = rest
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &p)| p)
                .collect();
            Branch { pair: (first, rest[i]), friends }
        })
        .collect()
}

/// Every perfect matching of `positions`.
///
/// An empty list has exactly one (empty) matching; an odd-length list has none.
pub fn perfect_matchings(positions: &[usize]) -> Vec<Matching> {
    match positions.len() {
        0 => return vec![Vec::new()],
        2 => return vec![positions.to_vec()],
        m if m % 2 == 1 => return Vec::new(),
        _ => {}
    }

    let mut out = Vec::new();
    for branch in first_partner_branches(positions) {
        trace!(pair = ?branch.pair, remaining = branch.friends.len(), "branch");
        out.extend(branch.expand());
    }
    out
}

/// Same result and order as [`perfect_matchings`], with the top-level
/// branches expanded on the rayon pool.
pub fn perfect_matchings_par(positions: &[usize]) -> Vec<Matching> {
    expand_branches(positions, true, || {})
}

/// Every perfect matching of `positions`, in [`perfect_matchings`] order,
/// calling `on_branch` once per first-partner branch after it is expanded.
///
/// With `parallel` the branches run on the rayon pool. Inputs without
/// branches (empty or odd) never call the hook.
pub fn expand_branches<P>(positions: &[usize], parallel: bool, on_branch: P) -> Vec<Matching>
where
    P: Fn() + Sync,
{
    if positions.is_empty() || positions.len() % 2 == 1 {
        return perfect_matchings(positions);
    }

    let branches = first_partner_branches(positions);
    let expand = |b: &Branch| {
        let m = b.expand();
        on_branch();
        m
    };

    if parallel {
        branches
            .par_iter()
            .map(expand)
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    } else {
        branches.iter().flat_map(expand).collect()
    }
}

/// View a flattened matching as its pairs.
pub fn pairs(matching: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    matching.chunks_exact(2).map(|p| (p[0], p[1]))
}
