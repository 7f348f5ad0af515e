//! Canonical label-space form of a matching.

use std::fmt;

use crate::labels::{Label, LabelSequence};
use crate::matching::pairs;

/// A matching with positions replaced by labels, each pair sorted ascending
/// and the pair list sorted lexicographically. Two matchings describe the same
/// contraction term iff their patterns compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabeledPattern(Vec<(Label, Label)>);

impl LabeledPattern {
    /// Canonicalize arbitrary label pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Label, Label)>) -> Self {
        let mut v: Vec<_> = pairs
            .into_iter()
            .map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        v.sort_unstable();
        Self(v)
    }

    pub fn pairs(&self) -> &[(Label, Label)] {
        &self.0
    }

    /// Distinct labels appearing in the pattern, ascending.
    pub fn vertices(&self) -> Vec<Label> {
        let mut v: Vec<_> = self.0.iter().flat_map(|&(a, b)| [a, b]).collect();
        v.sort_unstable();
        v.dedup();
        v
    }
}

/// Pattern of one flattened matching under `labels`.
pub fn canonicalize(matching: &[usize], labels: &LabelSequence) -> LabeledPattern {
    LabeledPattern::from_pairs(pairs(matching).map(|(i, j)| (labels.at(i), labels.at(j))))
}

impl fmt::Display for LabeledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, (a, b)) in self.0.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{a}, {b}]")?;
        }
        write!(f, "]")
    }
}
