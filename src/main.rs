use clap::Parser;
use perfshape::value::Number;
use perfshape::{Options, Result, options};

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perfshape")]
#[command(about = "Convert perf stat output to a more plottable format", long_about = None)]
struct Cli {
    /// File to convert (default: stdin).
    source_file: Option<PathBuf>,

    /// Destination file (default: stdout).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Absolute start time in nanoseconds (default: 0).
    #[arg(short = 's', long, value_parser = options::positive_number)]
    start: Option<Number>,

    /// Absolute end time in nanoseconds; the last sample is anchored to it.
    #[arg(short = 'e', long, value_parser = options::positive_number)]
    end: Option<Number>,

    /// The input has no header line (raw `perf stat -x,` output).
    #[arg(long)]
    no_header: bool,

    /// Emit an all-zero row at the start time before the first sample.
    #[arg(long)]
    baseline_row: bool,

    /// Write a JSON summary of the run to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // Validate before touching the input.
    let opts = Options {
        skip_header: !cli.no_header,
        baseline_row: cli.baseline_row,
        ..Options::with_window(cli.start, cli.end)?
    };

    let input: Box<dyn BufRead> = match &cli.source_file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    // Opened by `convert` only once the first sample has produced a schema,
    // so a malformed log does not truncate an existing destination.
    let open_output = || -> Result<Box<dyn Write>> {
        let output: Box<dyn Write> = match &cli.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("create {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(output)
    };

    let report = perfshape::convert(input, open_output, &opts)?;
    info!(
        samples = report.samples,
        fields = report.fields.len(),
        "converted"
    );

    if let Some(path) = &cli.report {
        report.write(path)?;
    }

    Ok(())
}
