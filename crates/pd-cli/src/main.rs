//! probdist CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pd_core::Distribution;
use pd_prob::combine::{Model, combine};
use pd_prob::{BinomialModel, GaussianModel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "probdist")]
#[command(about = "probdist - fit and evaluate binomial and gaussian models")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Family {
    Binomial,
    Gaussian,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a binomial model from a file of 0/1 outcomes
    Binomial {
        /// Input file, one value per line
        #[arg(short, long)]
        input: PathBuf,

        /// Success counts to evaluate the PMF at (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        k: Vec<i64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fit a gaussian model from a file of real values
    Gaussian {
        /// Input file, one value per line
        #[arg(short, long)]
        input: PathBuf,

        /// Treat the data as the whole population (divide by n, not n-1)
        #[arg(long)]
        population: bool,

        /// Lower bound of the probability interval. Defaults to -inf.
        #[arg(long, allow_negative_numbers = true)]
        lower: Option<f64>,

        /// Upper bound of the probability interval. Defaults to +inf.
        #[arg(long, allow_negative_numbers = true)]
        upper: Option<f64>,

        /// Points to evaluate the PDF at (repeatable)
        #[arg(long, allow_negative_numbers = true)]
        at: Vec<f64>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Series a plotting tool would draw for a fitted model
    Curve {
        /// Input file, one value per line
        #[arg(short, long)]
        input: PathBuf,

        /// Model family to fit
        #[arg(long, value_enum)]
        family: Family,

        /// Number of density points (gaussian only)
        #[arg(long, default_value = "50")]
        points: usize,

        /// Treat the data as the whole population (gaussian only)
        #[arg(long)]
        population: bool,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Distribution of the sum of two independent parametric models
    Sum {
        /// Model family of both operands
        #[arg(long, value_enum)]
        family: Family,

        /// Operand parameters, `n,p` or `mean,std`; give exactly two
        #[arg(long = "params", required = true)]
        params: Vec<String>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON results.
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Binomial { input, k, output } => cmd_binomial(&input, &k, output.as_ref()),
        Commands::Gaussian { input, population, lower, upper, at, output } => {
            cmd_gaussian(&input, population, lower, upper, &at, output.as_ref())
        }
        Commands::Curve { input, family, points, population, output } => {
            cmd_curve(&input, family, points, population, output.as_ref())
        }
        Commands::Sum { family, params, output } => cmd_sum(family, &params, output.as_ref()),
    }
}

fn cmd_binomial(input: &PathBuf, ks: &[i64], output: Option<&PathBuf>) -> Result<()> {
    tracing::info!(path = %input.display(), "fitting binomial");
    let model = BinomialModel::from_file(input)
        .with_context(|| format!("fitting binomial from {}", input.display()))?;
    tracing::info!(n = model.n(), p = model.p(), "binomial fitted");

    let pmf = ks
        .iter()
        .map(|&k| -> Result<serde_json::Value> {
            Ok(serde_json::json!({ "k": k, "pmf": model.pmf(k)? }))
        })
        .collect::<Result<Vec<_>>>()?;

    let output_json = serde_json::json!({
        "summary": model.summary(),
        "description": model.to_string(),
        "n": model.n(),
        "p": model.p(),
        "pmf": pmf,
    });
    write_json(output, output_json)
}

fn cmd_gaussian(
    input: &PathBuf,
    population: bool,
    lower: Option<f64>,
    upper: Option<f64>,
    at: &[f64],
    output: Option<&PathBuf>,
) -> Result<()> {
    tracing::info!(path = %input.display(), population, "fitting gaussian");
    let model = GaussianModel::from_file(input, !population)
        .with_context(|| format!("fitting gaussian from {}", input.display()))?;
    tracing::info!(mean = model.mean(), std = model.std(), "gaussian fitted");

    let a = lower.unwrap_or(f64::NEG_INFINITY);
    let b = upper.unwrap_or(f64::INFINITY);
    let probability = model.probability(a, b)?;
    tracing::debug!(a, b, probability, "interval probability");

    let pdf: Vec<_> =
        at.iter().map(|&x| serde_json::json!({ "x": x, "pdf": model.pdf(x) })).collect();

    let output_json = serde_json::json!({
        "summary": model.summary(),
        "description": model.to_string(),
        "interval": { "lower": lower, "upper": upper, "probability": probability },
        "pdf": pdf,
    });
    write_json(output, output_json)
}

fn cmd_curve(
    input: &PathBuf,
    family: Family,
    points: usize,
    population: bool,
    output: Option<&PathBuf>,
) -> Result<()> {
    let output_json = match family {
        Family::Binomial => {
            let model = BinomialModel::from_file(input)?;
            let [failures, successes] = model.outcome_counts()?;
            let curve: Vec<_> = model
                .pmf_curve()?
                .into_iter()
                .map(|(k, p)| serde_json::json!({ "k": k, "pmf": p }))
                .collect();
            serde_json::json!({
                "summary": model.summary(),
                "outcome_counts": { "failure": failures, "success": successes },
                "curve": curve,
            })
        }
        Family::Gaussian => {
            let model = GaussianModel::from_file(input, !population)?;
            let curve: Vec<_> = model
                .density_curve(points)?
                .into_iter()
                .map(|(x, y)| serde_json::json!({ "x": x, "pdf": y }))
                .collect();
            serde_json::json!({ "summary": model.summary(), "curve": curve })
        }
    };
    write_json(output, output_json)
}

fn cmd_sum(family: Family, params: &[String], output: Option<&PathBuf>) -> Result<()> {
    if params.len() != 2 {
        bail!("sum needs exactly two --params, got {}", params.len());
    }
    let lhs = parse_model(family, &params[0])?;
    let rhs = parse_model(family, &params[1])?;
    let sum = combine(&lhs, rhs)?;
    tracing::info!(mean = sum.mean(), std = sum.std(), "models combined");

    let output_json = serde_json::json!({
        "summary": sum.summary(),
        "description": sum.to_string(),
    });
    write_json(output, output_json)
}

fn parse_model(family: Family, spec: &str) -> Result<Model> {
    let (first, second) =
        spec.split_once(',').with_context(|| format!("expected two comma-separated values, got {spec:?}"))?;
    let second: f64 =
        second.trim().parse().with_context(|| format!("invalid number {second:?} in {spec:?}"))?;
    let model = match family {
        Family::Binomial => {
            let n: u64 =
                first.trim().parse().with_context(|| format!("invalid trial count {first:?}"))?;
            BinomialModel::new(n, second)?.into()
        }
        Family::Gaussian => {
            let mean: f64 =
                first.trim().parse().with_context(|| format!("invalid number {first:?}"))?;
            GaussianModel::new(mean, second)?.into()
        }
    };
    Ok(model)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
