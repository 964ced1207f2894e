use std::{fs, io::Read, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use gauss_trace::{
    augmented_matrix::{generate::random_nonsingular_system, AugmentedMatrix},
    elimination::{solve, PivotPolicy, SolverParams},
    input::parse_system,
    trace::{
        transcript::{render_solution, TranscriptSink, DEFAULT_PRECISION},
        LogSink,
    },
};
use rand::{rngs::StdRng, SeedableRng};

/// Solve a square linear system by Gaussian elimination and print every
/// row operation along the way.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding `n` and the augmented matrix; stdin when omitted
    #[arg(short, long, conflicts_with = "random")]
    pub input: Option<PathBuf>,

    /// Solve a random nonsingular system with this many unknowns
    #[arg(short, long)]
    pub random: Option<usize>,

    /// Seed for --random, 0 when omitted
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = PivotPolicy::PartialPivoting)]
    pub pivot_policy: PivotPolicy,

    /// Magnitudes at or below this count as zero pivots
    #[arg(short, long, default_value_t = 0.0, value_parser = parse_zero_tolerance)]
    pub zero_tolerance: f64,

    /// Significant digits in the printed numbers
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Print only the solution
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_zero_tolerance(s: &str) -> Result<f64, String> {
    let tolerance: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(format!("{s} is not a finite, non-negative number"))
    }
}

impl Args {
    fn solver_params(&self) -> Result<SolverParams> {
        SolverParams::new(self.pivot_policy)
            .with_zero_tolerance(self.zero_tolerance)
            .context("checking --zero-tolerance")
    }
}

fn read_system(args: &Args) -> Result<AugmentedMatrix> {
    if let Some(n) = args.random {
        let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or(0));
        return random_nonsingular_system(n, &mut rng)
            .with_context(|| format!("generating a random system of {n} unknowns"));
    }
    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };
    parse_system(&text)
}

fn run_solver(args: &Args) -> Result<()> {
    let params = args.solver_params()?;
    let precision = args.precision;
    let matrix = read_system(args)?;
    let original = matrix.clone();
    log::debug!("Solving {} unknowns with {}", matrix.number_of_unknowns, params.pivot_policy);

    let solution = if args.quiet {
        let sink = LogSink { precision };
        let solution = solve(matrix, &params, sink).context("solving system")?;
        println!("{}", render_solution(&solution, precision));
        solution
    } else {
        let mut sink = TranscriptSink::with_initial_matrix(precision, &matrix);
        let outcome = solve(matrix, &params, &mut sink);
        // printed before the error so a failed solve still shows its steps
        print!("{}", sink.as_str());
        outcome.context("solving system")?
    };
    log::info!("max residual: {:e}", original.max_residual(&solution));
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_solver(&args) {
        eprintln!("could not solve system: {err:?}");
        process::exit(1)
    }
}
