//! Contraction report and its renderings.

use std::fmt;
use std::io;

use csv::WriterBuilder;

use crate::config::{Ignore, Mode};
use crate::connectivity::is_connected;
use crate::error::Result;
use crate::labels::{Label, LabelSequence};
use crate::multiplicity::Term;

/// Multiplicity-weighted sum of contraction terms for one field sequence.
#[derive(Debug, Clone)]
pub struct ContractionReport {
    pub labels:      LabelSequence,
    pub terms:       Vec<Term>,
    /// Filter that produced `terms`.
    pub ignore:      Ignore,
    /// Raw matchings enumerated before grouping.
    pub n_matchings: usize,
}

impl ContractionReport {
    /// Σ multiplicities. Equals `n_matchings` unless a filter removed terms.
    pub fn total_multiplicity(&self) -> u64 {
        self.terms.iter().map(|t| t.multiplicity).sum()
    }

    /// `(label, field name)` in label order.
    pub fn legend(&self) -> Vec<(Label, String)> {
        self.labels.legend().map(|(l, n)| (l, n.to_string())).collect()
    }

    /// Render in the requested layout.
    pub fn render(&self, mode: Mode) -> String {
        match mode {
            Mode::Console => self.to_string(),
        }
    }

    /// One CSV row per term: `multiplicity,pattern,connected`.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(["multiplicity", "pattern", "connected"])?;
        for t in &self.terms {
            wtr.write_record(&[
                t.multiplicity.to_string(),
                t.pattern.to_string(),
                is_connected(&t.pattern).to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// `<0|T[labels]|0> = \n\nm0 x pattern0 + m1 x pattern1 ...`
impl fmt::Display for ContractionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<0|T{}|0> = \n\n", self.labels)?;
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (k, t) in self.terms.iter().enumerate() {
            if k > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} x {}", t.multiplicity, t.pattern)?;
        }
        Ok(())
    }
}
