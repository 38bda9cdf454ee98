//! Bisector CLI - find a root of f(x) on [a, b] by bisection.
//!
//! Prints the iteration table and a summary (or a JSON report), and can open
//! a plot of the function with the root marked when built with `--features gui`.

use std::io::{self, Write};
use std::process::ExitCode;

use bisector_solvers::equation::bisection::{self, Solution};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod input;
mod render;

use error::{CliError, Result};

use input::{RawInput, SolveInput};
use render::{Format, Report};

/// Bisection root finder.
#[derive(Debug, Parser)]
#[command(name = "bisector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Function of x, e.g. "x^3 - 2*x - 5"
    #[arg(short, long, env = "BISECTOR_FUNCTION", default_value = "x^3 - 2*x - 5")]
    function: String,

    /// Left end of the interval
    #[arg(
        short = 'a',
        long = "low",
        env = "BISECTOR_LOW",
        default_value = "-5",
        allow_hyphen_values = true,
    )]
    low: String,

    /// Right end of the interval
    #[arg(
        short = 'b',
        long = "high",
        env = "BISECTOR_HIGH",
        default_value = "5",
        allow_hyphen_values = true,
    )]
    high: String,

    /// Stop once the interval half-width is below this
    #[arg(
        short,
        long = "tol",
        env = "BISECTOR_TOL",
        default_value = "1e-6",
        allow_hyphen_values = true,
    )]
    tolerance: String,

    /// Maximum number of iterations
    #[arg(
        short = 'n',
        long = "max-iter",
        env = "BISECTOR_MAX_ITER",
        default_value = "50",
        allow_hyphen_values = true,
    )]
    max_iters: String,

    /// Output format
    #[arg(long, value_enum, env = "BISECTOR_FORMAT", default_value_t = Format::Table)]
    format: Format,

    /// Open a plot of f with the root marked
    #[arg(long)]
    plot: bool,

    /// Enable debug logging of every iteration
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn raw_input(&self) -> RawInput<'_> {
        RawInput {
            function: &self.function,
            low: &self.low,
            high: &self.high,
            tolerance: &self.tolerance,
            max_iters: &self.max_iters,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(hint) = err.hint() {
                eprintln!("hint: {hint}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let input = SolveInput::parse(&cli.raw_input())?;
    info!(
        function = input.function.as_str(),
        low = input.bracket[0],
        high = input.bracket[1],
        tolerance = input.config.tolerance(),
        max_iters = input.config.max_iters(),
        "solving"
    );

    let solution = bisection::solve_unobserved(&input.function, input.bracket, &input.config)?;

    let report = Report {
        function: input.function.as_str(),
        bracket: input.bracket,
        tolerance: input.config.tolerance(),
        max_iters: input.config.max_iters(),
        solution: &solution,
    };
    let mut stdout = io::stdout().lock();
    report.write(&mut stdout, cli.format)?;
    stdout.flush()?;

    if cli.plot {
        plot(&input, &solution)?;
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn plot(input: &SolveInput, solution: &Solution) -> Result<()> {
    use bisector_plot::{Figure, ShowConfig};

    let figure = Figure::from_solution(&input.function, input.bracket, solution);
    debug!(segments = figure.curve.segments().len(), "opening plot");

    let config = ShowConfig::new()
        .title(format!("f(x) = {}", input.function))
        .legend();
    bisector_plot::show(figure, config).map_err(|err| CliError::Plot(err.to_string()))
}

#[cfg(not(feature = "gui"))]
fn plot(_input: &SolveInput, _solution: &Solution) -> Result<()> {
    debug!("plot requested without the gui feature");
    Err(CliError::PlotUnavailable)
}
