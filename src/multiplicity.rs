//! Grouping of equivalent contraction terms.

use std::collections::HashMap;

use tracing::debug;

use crate::pattern::LabeledPattern;

/// A distinct pattern and how many matchings produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub multiplicity: u64,
    pub pattern:      LabeledPattern,
}

/// Count occurrences of each distinct pattern.
///
/// Terms come back in reverse order of first appearance, so the output is
/// fully determined by the input order.
pub fn count_multiplicities<I>(patterns: I) -> Vec<Term>
where
    I: IntoIterator<Item = LabeledPattern>,
{
    let mut index: HashMap<LabeledPattern, usize> = HashMap::new();
    let mut terms: Vec<Term> = Vec::new();

    for pattern in patterns {
        match index.get(&pattern) {
            Some(&k) => terms[k].multiplicity += 1,
            None => {
                index.insert(pattern.clone(), terms.len());
                terms.push(Term { multiplicity: 1, pattern });
            }
        }
    }

    terms.reverse();
    debug!(n_terms = terms.len(), "grouped patterns");
    terms
}
