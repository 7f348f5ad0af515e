//! Wick-contraction pipeline.
//!
//! fields → labels → matchings over positions → label-space patterns →
//! multiplicities → optional vacuum filter → report.
//! Each stage takes and returns plain values; no state survives a call.

use tracing::{debug, info};

use crate::config::{Ignore, Options};
use crate::connectivity::connected_terms;
use crate::error::{Result, WickError};
use crate::field::Named;
use crate::labels::label_sequence;
use crate::matching::expand_branches;
use crate::multiplicity::count_multiplicities;
use crate::pattern::canonicalize;
use crate::report::ContractionReport;

/// Evaluate `<0|T[fields]|0>` as a sum of contraction terms.
pub fn evaluate<F: Named>(fields: &[F], options: &Options) -> Result<ContractionReport> {
    evaluate_with(fields, options, || {})
}

/// Like [`evaluate`], calling `on_branch` once for every first-partner
/// branch after it has been expanded. Used for progress reporting.
pub fn evaluate_with<F, P>(fields: &[F], options: &Options, on_branch: P) -> Result<ContractionReport>
where
    F: Named,
    P: Fn() + Sync,
{
    let labels = label_sequence(fields)?;
    let positions: Vec<usize> = (0..labels.len()).collect();

    debug!(
        n_fields = positions.len(),
        mode = %options.mode,
        ignore = %options.ignore,
        parallel = options.parallel,
        "enumerating matchings"
    );

    let matchings = expand_branches(&positions, options.parallel, on_branch);
    let n_matchings = matchings.len();

    let terms = count_multiplicities(matchings.iter().map(|m| canonicalize(m, &labels)));
    let terms = match options.ignore {
        Ignore::None => terms,
        Ignore::Vacuum => connected_terms(&terms),
    };

    info!(n_fields = labels.len(), n_matchings, n_terms = terms.len(), "contraction done");
    Ok(ContractionReport { labels, terms, ignore: options.ignore, n_matchings })
}

/// Evaluate with options given as strings (`mode = "console"`,
/// `ignore = None | Some("vac")`).
///
/// The field count is checked before the options, so an odd sequence is
/// always reported as such.
pub fn evaluate_str<F: Named>(fields: &[F], mode: &str, ignore: Option<&str>) -> Result<ContractionReport> {
    if fields.len() % 2 != 0 {
        return Err(WickError::OddFieldCount { count: fields.len() });
    }
    let options = Options::parse(mode, ignore)?;
    evaluate(fields, &options)
}
