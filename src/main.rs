//! Wick contractions of a field sequence, printed as `<0|T[...]|0> = ...`.
//
//  Run:  `cargo run --bin wick -- phi phi psi psi --ignore vac`

use std::fs::File;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;
use wick::{evaluate_with, Options};

#[derive(Parser, Debug)]
#[command(name = "wick", about = "Enumerate Wick contractions of field operators")]
struct Cli {
    /// Field names, one per operator (repeat a name for the same field)
    fields: Vec<String>,

    /// Output layout
    #[arg(long, default_value = "console")]
    mode: String,

    /// Diagrams to leave out (`vac` drops disconnected ones)
    #[arg(long)]
    ignore: Option<String>,

    /// Expand top-level branches in parallel
    #[arg(long)]
    parallel: bool,

    /// Print which field each label stands for
    #[arg(long)]
    legend: bool,

    /// Also write the terms to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Show a progress bar over first-partner branches
    #[arg(long)]
    progress: bool,

    /// Log at info level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if args.fields.len() % 2 != 0 {
        return Err(wick::WickError::OddFieldCount { count: args.fields.len() }.into());
    }
    let mut opts = Options::parse(&args.mode, args.ignore.as_deref())?;
    opts.parallel = args.parallel;

    let n_branches = args.fields.len().saturating_sub(1) as u64;
    let bar = if args.progress { ProgressBar::new(n_branches) } else { ProgressBar::hidden() };
    bar.set_style(ProgressStyle::with_template(
        " {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]",
    )?);

    let report = evaluate_with(&args.fields, &opts, || bar.inc(1))?;
    bar.finish_and_clear();

    if args.legend {
        for (label, name) in report.legend() {
            println!("{label} = {name}");
        }
        println!();
    }
    println!("{}", report.render(opts.mode));

    if let Some(path) = &args.csv {
        report.write_csv(File::create(path)?)?;
        eprintln!("Terms written → {path}");
    }
    Ok(())
}
