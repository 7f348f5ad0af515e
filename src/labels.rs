//! Integer labels for field operators.
//!
//! Fields sharing a name share a label. Labels start at 1 and are handed out
//! in order of first appearance, so `phi phi psi psi` becomes `[1, 1, 2, 2]`.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::{Result, WickError};
use crate::field::Named;

/// Label carried by a field position.
pub type Label = usize;

/// Labels for every input position, plus the name each label stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSequence {
    labels: Vec<Label>,
    names:  Vec<String>,   // names[label - 1]
}

impl LabelSequence {
    /// Label at each position.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label of position `pos`.
    #[inline(always)]
    pub fn at(&self, pos: usize) -> Label {
        self.labels[pos]
    }

    /// Number of positions (N).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct field names.
    pub fn n_distinct(&self) -> usize {
        self.names.len()
    }

    /// `(label, name)` in label order.
    pub fn legend(&self) -> impl Iterator<Item = (Label, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (i + 1, n.as_str()))
    }
}

impl fmt::Display for LabelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, l) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{l}")?;
        }
        write!(f, "]")
    }
}

/// Map a field sequence to its label sequence.
///
/// Fails with [`WickError::OddFieldCount`] when the number of fields is odd,
/// since no complete pairing exists.
pub fn label_sequence<F: Named>(fields: &[F]) -> Result<LabelSequence> {
    if fields.len() % 2 != 0 {
        return Err(WickError::OddFieldCount { count: fields.len() });
    }

    let mut seen: HashMap<&str, Label> = HashMap::new();
    let mut names = Vec::new();
    let mut labels = Vec::with_capacity(fields.len());

    for field in fields {
        let name = field.name();
        let label = *seen.entry(name).or_insert_with(|| {
            names.push(name.to_string());
            names.len()
        });
        labels.push(label);
    }

    debug!(n_fields = labels.len(), n_distinct = names.len(), "assigned labels");
    Ok(LabelSequence { labels, names })
}
