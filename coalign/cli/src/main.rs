use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::{bail, Result, WrapErr};

use coalign_alignment_rs::pairwise::{
    Aligner, Alignment, BottomRight, Limits, Outcome, Summary, WholeMatrix,
};
use coalign_io_rs::{compare, Comparison, Params, Reader, Results, Writer};

#[derive(Parser)]
#[command(name = "coalign")]
#[command(about = "Enumerate all co-optimal pairwise alignments under affine gap penalties", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align the two sequences from a parameter file and write every co-optimal alignment
    Align {
        /// Parameter file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Results file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        #[command(flatten)]
        options: AlignOptions,
    },

    /// Align every `<case>.input` in a directory and compare it with the expected `<case>.output`
    Batch {
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Also write the results of each case to `<RESULTS>/<case>.output`
        #[arg(long, value_name = "DIR")]
        results: Option<PathBuf>,

        #[command(flatten)]
        options: AlignOptions,
    },

    /// Compare two results files, ignoring the order of alignments
    Compare {
        #[arg(value_name = "EXPECTED")]
        expected: PathBuf,

        #[arg(value_name = "ACTUAL")]
        actual: PathBuf,
    },

    /// Count mismatches and gaps of every alignment in a results file
    Stats {
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct AlignOptions {
    /// Cells where the traceback may start
    #[arg(long, value_enum, default_value_t = Terminal::Whole)]
    terminal: Terminal,

    /// Fail if there are more co-optimal alignments than this
    #[arg(long, value_name = "INT", default_value_t = Limits::default().max_paths)]
    max_paths: usize,

    /// Fail if an alignment path is longer than this
    #[arg(long, value_name = "INT")]
    max_depth: Option<usize>,

    /// Fill the DP matrices by anti-diagonals on this many threads (-1 = all cores)
    #[arg(short = 't', long, value_name = "INT", allow_negative_numbers = true)]
    threads: Option<isize>,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum Terminal {
    /// Any best-scoring cell of the match matrix
    Whole,
    /// The bottom-right cell of the match matrix only
    BottomRight,
}

impl AlignOptions {
    fn run(&self, params: &Params) -> Result<Outcome<f64>> {
        let mut builder = Aligner::builder()
            .with_mode(params.mode())
            .with_limits(Limits::new(self.max_paths, self.max_depth));
        builder = match self.terminal {
            Terminal::Whole => builder.with_terminals(WholeMatrix),
            Terminal::BottomRight => builder.with_terminals(BottomRight),
        };
        if let Some(threads) = self.threads {
            builder = builder.with_thread_pool(coalign_core_rs::parallelism::pool(threads)?);
        }

        let seq_a = params.seq_a().chars().collect::<Vec<_>>();
        let seq_b = params.seq_b().chars().collect::<Vec<_>>();
        builder.build().align(&params.model(), &seq_a, &seq_b)
    }
}

fn write(output: &Path, outcome: &Outcome<f64>) -> Result<()> {
    Writer::from_path(output)?.write(*outcome.score(), outcome.alignments())?;
    log::info!(
        "Wrote {} alignment(s) to {}",
        outcome.alignments().len(),
        output.display()
    );
    Ok(())
}

fn align(input: &Path, output: &Path, options: &AlignOptions) -> Result<()> {
    let params = Params::from_path(input)?;
    log::info!("Aligning {} ({} mode)", input.display(), params.mode());

    let outcome = options.run(&params)?;
    write(output, &outcome)
}

fn report(expected: &Results, actual: &Results, comparison: &Comparison) {
    if !comparison.score_matches() {
        println!(
            "Score mismatch: expected={} actual={}",
            expected.score(),
            actual.score()
        );
    }
    for (title, pairs) in [
        ("Missing pairs (expected but not found):", comparison.missing()),
        ("Extra pairs (found but not expected):", comparison.extra()),
    ] {
        if pairs.is_empty() {
            continue;
        }
        println!("{title}");
        for ((a, b), count) in pairs {
            println!("  x{count}: {a}\n      {b}");
        }
    }
}

fn compare_files(expected: &Path, actual: &Path) -> Result<()> {
    let (expected, actual) = (Reader::from_path(expected)?, Reader::from_path(actual)?);
    let comparison = compare(&expected, &actual);
    report(&expected, &actual, &comparison);

    if !comparison.is_match() {
        bail!("Results differ");
    }
    println!("Results match");
    Ok(())
}

fn batch(dir: &Path, results: Option<&Path>, options: &AlignOptions) -> Result<()> {
    let mut inputs = fs::read_dir(dir)
        .wrap_err_with(|| format!("Failed to list {}", dir.display()))?
        .map(|entry| entry.map(|x| x.path()))
        .collect::<Result<Vec<_>, _>>()?;
    inputs.retain(|path| path.extension().is_some_and(|ext| ext == "input"));
    inputs.sort();

    if inputs.is_empty() {
        bail!("No *.input files found in {}", dir.display());
    }

    let mut failed = 0;
    for input in &inputs {
        let case = input
            .file_stem()
            .map(|x| x.to_string_lossy().into_owned())
            .unwrap_or_default();
        let expected = input.with_extension("output");
        if !expected.exists() {
            println!("[{case}] Missing expected output {}", expected.display());
            failed += 1;
            continue;
        }

        let params = Params::from_path(input)?;
        let outcome = options
            .run(&params)
            .wrap_err_with(|| format!("Failed to align case {case}"))?;
        if let Some(results) = results {
            write(&results.join(format!("{case}.output")), &outcome)?;
        }

        let actual = Results::new(
            *outcome.score(),
            outcome
                .alignments()
                .iter()
                .map(|x| (x.seq1().clone(), x.seq2().clone()))
                .collect(),
        );
        let expected = Reader::from_path(&expected)?;
        let comparison = compare(&expected, &actual);
        if comparison.is_match() {
            println!("[{case}] Match");
        } else {
            println!("[{case}] Mismatch");
            report(&expected, &actual, &comparison);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} case(s) failed", inputs.len());
    }
    println!("All {} case(s) match", inputs.len());
    Ok(())
}

fn stats(output: &Path) -> Result<()> {
    let results = Reader::from_path(output)?;

    let mut total = Summary::default();
    for (ind, (a, b)) in results.pairs().iter().enumerate() {
        let summary = Alignment::new(a.clone(), b.clone()).summary();
        println!(
            "Alignment {}: {} columns, {} matches, {} mismatches, {} gap columns, {} gaps",
            ind + 1,
            summary.columns,
            summary.matches,
            summary.mismatches,
            summary.gaps,
            summary.gap_runs
        );

        total.columns += summary.columns;
        total.matches += summary.matches;
        total.mismatches += summary.mismatches;
        total.gaps += summary.gaps;
        total.gap_runs += summary.gap_runs;
    }
    println!(
        "Total: {} alignment(s), {} columns, {} matches, {} mismatches, {} gap columns, {} gaps",
        results.pairs().len(),
        total.columns,
        total.matches,
        total.mismatches,
        total.gaps,
        total.gap_runs
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Align {
            input,
            output,
            options,
        } => align(&input, &output, &options),
        Commands::Batch {
            dir,
            results,
            options,
        } => batch(&dir, results.as_deref(), &options),
        Commands::Compare { expected, actual } => compare_files(&expected, &actual),
        Commands::Stats { output } => stats(&output),
    }
}
