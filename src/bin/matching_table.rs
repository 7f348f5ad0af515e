// src/bin/matching_table.rs - Matching and pattern counts per field number

use std::io;

use clap::Parser;
use csv::WriterBuilder;
use rayon::prelude::*;
use wick::matching::matching_count;
use wick::{evaluate, Ignore, Options};

#[derive(Parser)]
struct Cli {
    /// Largest (even) number of fields to tabulate
    #[arg(long, default_value = "8")]
    max_fields: usize,

    /// Output file (stdout if omitted)
    #[arg(long)]
    output: Option<String>,
}

/// One table row.
#[derive(Debug)]
struct Row {
    n_fields:            usize,
    n_matchings:         u128,
    distinct_all_unique: usize,
    distinct_all_same:   usize,
    connected_pairwise:  usize,
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn row(n: usize) -> Result<Row, BoxError> {
    let n_matchings = matching_count(n)
        .ok_or_else(|| format!("(N-1)!! overflows u128 for N = {n}"))?;

    let unique: Vec<String> = (1..=n).map(|i| format!("phi{i}")).collect();
    let same: Vec<String> = vec!["phi".to_string(); n];
    let pairwise: Vec<String> = (0..n).map(|i| format!("phi{}", i / 2 + 1)).collect();

    let all = Options::default();
    let vac = Options { ignore: Ignore::Vacuum, ..Options::default() };

    Ok(Row {
        n_fields:            n,
        n_matchings,
        distinct_all_unique: evaluate(&unique, &all)?.terms.len(),
        distinct_all_same:   evaluate(&same, &all)?.terms.len(),
        connected_pairwise:  evaluate(&pairwise, &vac)?.terms.len(),
    })
}

fn main() -> Result<(), BoxError> {
    let args = Cli::parse();

    let largest = args.max_fields - args.max_fields % 2;
    if matching_count(largest).is_none() {
        return Err(format!(
            "--max-fields {} too large: (N-1)!! no longer fits in 128 bits", args.max_fields
        ).into());
    }

    let sizes: Vec<usize> = (2..=largest).step_by(2).collect();
    let rows = sizes
        .par_iter()
        .map(|&n| row(n))
        .collect::<Result<Vec<_>, BoxError>>()?;

    let out: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut wtr = WriterBuilder::new().from_writer(out);
    wtr.write_record([
        "n_fields", "n_matchings", "distinct_all_unique", "distinct_all_same", "connected_pairwise",
    ])?;
    for r in &rows {
        wtr.write_record(&[
            r.n_fields.to_string(),
            r.n_matchings.to_string(),
            r.distinct_all_unique.to_string(),
            r.distinct_all_same.to_string(),
            r.connected_pairwise.to_string(),
        ])?;
    }
    wtr.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Generated {} rows in {}", rows.len(), path);
    }
    Ok(())
}
