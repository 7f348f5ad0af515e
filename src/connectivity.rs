//! Vacuum-diagram filter.
//!
//! A pattern is read as a graph: its distinct labels are the vertices and
//! its pairs are the edges. A pattern whose graph falls apart into several
//! components factors into independent sub-diagrams and is dropped.

use tracing::debug;

use crate::labels::Label;
use crate::multiplicity::Term;
use crate::pattern::LabeledPattern;

/// Disjoint sets over labels `0..n`.
#[derive(Debug, Clone)]
struct UnionFind {
    parent: Vec<usize>,
    rank:   Vec<u8>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), rank: vec![0; n] }
    }

    /// Root of `x`'s set, with path compression.
    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`. Returns false if already merged.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

/// Number of connected components of the pattern's label graph.
///
/// The empty pattern has no vertices and therefore no components.
pub fn component_count(pattern: &LabeledPattern) -> usize {
    let vertices = pattern.vertices();
    let slot = |l: Label| vertices.binary_search(&l).unwrap_or_default();

    let mut uf = UnionFind::new(vertices.len());
    let mut components = vertices.len();
    for &(a, b) in pattern.pairs() {
        if uf.union(slot(a), slot(b)) {
            components -= 1;
        }
    }
    components
}

/// True iff every label of the pattern is reachable from every other.
pub fn is_connected(pattern: &LabeledPattern) -> bool {
    component_count(pattern) <= 1
}

/// Keep only terms whose pattern is connected. Multiplicities and relative
/// order of the survivors are unchanged.
pub fn connected_terms(terms: &[Term]) -> Vec<Term> {
    let kept: Vec<Term> = terms
        .iter()
        .filter(|t| is_connected(&t.pattern))
        .cloned()
        .collect();
    debug!(before = terms.len(), after = kept.len(), "dropped vacuum diagrams");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_reports_merges() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(!uf.union(1, 0));
        assert!(uf.union(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
    }

    #[test]
    fn self_pair_is_one_component() {
        let p = LabeledPattern::from_pairs([(1, 1)]);
        assert_eq!(component_count(&p), 1);
    }
}
