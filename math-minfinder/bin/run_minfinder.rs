use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_minfinder::function_registry::{FunctionRegistry, RegisteredFunction};
use math_minfinder::report::{CsvWriter, FunctionRun, ResultsWriter, write_json};
use math_minfinder::{
    AnnealingConfig, AnnealingReport, MultiStartReport, Objective, RunParameters,
    RunParametersBuilder, find_minima, simulated_annealing,
};
use ndarray::Array1;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "run_minfinder",
    about = "Catalogue the distinct local minima of the benchmark functions by multi-start gradient descent"
)]
struct Cli {
    /// Function to run (repeatable; defaults to camel, rastrigin, griewank, branin, shubert)
    #[arg(long = "function")]
    functions: Vec<String>,

    /// Results file
    #[arg(long, default_value = "results_minfinder.txt")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Number of outer iterations
    #[arg(long, default_value_t = 4)]
    iterations: usize,

    /// Random starting points per iteration
    #[arg(long, default_value_t = 5)]
    samples: usize,

    /// Fixed gradient descent step
    #[arg(long, default_value_t = 0.001)]
    learning_rate: f64,

    /// Gradient norm at which descent stops
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Distance under which two minima are the same (defaults to --tolerance)
    #[arg(long)]
    proximity_tolerance: Option<f64>,

    /// Lower sampling bound for every coordinate
    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    lower: f64,

    /// Upper sampling bound for every coordinate
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    upper: f64,

    /// Seed shared by every function run (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Also run simulated annealing from the best minimum of each function
    #[arg(long)]
    anneal: bool,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

struct Outcome<'a> {
    function: &'a RegisteredFunction,
    report: MultiStartReport,
    annealing: Option<AnnealingReport>,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();
    let registry = FunctionRegistry::standard();

    if args.list_functions {
        list_available_functions(&registry);
        return;
    }

    let selected = match select_functions(&registry, &args.functions) {
        Ok(selected) => selected,
        Err(e) => {
            eprintln!("Error: {e}. Use --list-functions to inspect available names.");
            process::exit(2);
        }
    };

    let params = match build_params(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // Open the destination before any work is done
    let file = match File::create(&args.output) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "Error: failed to open output file {}: {}",
                args.output.display(),
                e
            );
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &params, &selected, BufWriter::new(file)) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }

    println!("Results written to: {}", args.output.display());
}

fn run(
    args: &Cli,
    params: &RunParameters,
    selected: &[&RegisteredFunction],
    out: BufWriter<File>,
) -> anyhow::Result<()> {
    let mut outcomes = Vec::with_capacity(selected.len());
    for &function in selected {
        let report = find_minima(function.objective(), params.clone())
            .with_context(|| format!("minima search failed for {}", function.name()))?;
        println!(
            "{}: {} distinct minima from {} descents (seed {})",
            function.label(),
            report.minima.len(),
            report.attempts,
            report.seed
        );

        let annealing = if args.anneal {
            let start = annealing_start(&report, params, function.objective().dimension());
            let config = AnnealingConfig {
                seed: params.seed,
                ..AnnealingConfig::default()
            };
            Some(
                simulated_annealing(function.objective(), &start, &config)
                    .with_context(|| format!("annealing failed for {}", function.name()))?,
            )
        } else {
            None
        };

        outcomes.push(Outcome {
            function,
            report,
            annealing,
        });
    }

    match args.format {
        OutputFormat::Text => {
            let mut writer = ResultsWriter::new(out);
            for o in &outcomes {
                writer.write_report(o.function.label(), &o.report)?;
                if let Some(a) = &o.annealing {
                    writer.write_annealing(a)?;
                }
            }
            writer.into_inner()?;
        }
        OutputFormat::Csv => {
            let mut writer = CsvWriter::new(out);
            for o in &outcomes {
                writer.write_run(o.function.name(), &o.report)?;
            }
            writer.into_inner()?;
        }
        OutputFormat::Json => {
            let runs: Vec<FunctionRun<'_>> = outcomes
                .iter()
                .map(|o| FunctionRun {
                    function: o.function.name(),
                    parameters: params,
                    report: &o.report,
                    annealing: o.annealing.as_ref(),
                })
                .collect();
            write_json(out, &runs)?;
        }
    }
    Ok(())
}

fn build_params(args: &Cli) -> math_minfinder::Result<RunParameters> {
    let mut builder = RunParametersBuilder::new()
        .max_iterations(args.iterations)
        .sample_size(args.samples)
        .learning_rate(args.learning_rate)
        .tolerance(args.tolerance)
        .bounds(args.lower, args.upper);
    if let Some(p) = args.proximity_tolerance {
        builder = builder.proximity_tolerance(p);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    builder.build()
}

fn select_functions<'a>(
    registry: &'a FunctionRegistry,
    requested: &[String],
) -> math_minfinder::Result<Vec<&'a RegisteredFunction>> {
    if requested.is_empty() {
        return FunctionRegistry::standard_run_order()
            .iter()
            .map(|name| registry.get(name))
            .collect();
    }
    requested
        .iter()
        .map(|name| registry.get(name.trim()))
        .collect()
}

/// Best minimum found, or the centre of the sampling box when none was.
fn annealing_start(report: &MultiStartReport, params: &RunParameters, dim: usize) -> Array1<f64> {
    match report.best() {
        Some(best) => best.x.clone(),
        None => {
            let (lower, upper) = params.bounds;
            Array1::from_elem(dim, 0.5 * (lower + upper))
        }
    }
}

fn list_available_functions(registry: &FunctionRegistry) {
    println!("Available test functions:");
    for f in registry.iter() {
        match f.metadata() {
            Some(meta) => println!("- {} ({}D): {}", f.name(), meta.dimension, meta.description),
            None => println!("- {}", f.name()),
        }
    }
}
