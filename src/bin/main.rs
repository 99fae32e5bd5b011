//! depmax Command Line Interface
//!
//! Precomputes kernel Gram matrices over label features loaded from CSV and
//! inspects saved matrices.

use clap::{Args, Parser, Subcommand, ValueEnum};
use depmax::core::{Result, SelectionError};
use depmax::kernel::{KernelHandle, LinearKernel, PrecomputedKernel, RbfKernel};
use depmax::persistence::SerializableGram;
use depmax::CsvFeatures;
use env_logger::Env;
use log::{error, info};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "depmax")]
#[command(about = "Kernel-based dependence maximization preprocessor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "depmax contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Precompute a labels kernel matrix from CSV data
    Precompute(PrecomputeArgs),
    /// Display information about a saved Gram matrix
    Info(InfoArgs),
}

#[derive(Args)]
struct PrecomputeArgs {
    /// Input data file (CSV)
    #[arg(long)]
    data: PathBuf,

    /// Output Gram matrix file (JSON)
    #[arg(short, long)]
    output: PathBuf,

    /// Treat the last CSV column as the label column and precompute over it;
    /// otherwise all columns are used as label features
    #[arg(long)]
    label_column: bool,

    /// Kernel to evaluate
    #[arg(short, long, default_value = "linear")]
    kernel: CliKernel,

    /// Gamma parameter for the RBF kernel
    #[arg(long, default_value = "1.0")]
    gamma: f64,
}

#[derive(ValueEnum, Clone, Debug)]
enum CliKernel {
    /// Linear kernel: K(x, y) = x^T y
    #[value(name = "linear")]
    Linear,
    /// RBF kernel: K(x, y) = exp(-gamma * ||x - y||^2)
    #[value(name = "rbf")]
    Rbf,
}

#[derive(Args)]
struct InfoArgs {
    /// Gram matrix file
    gram: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Precompute(args) => precompute_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn precompute_command(args: PrecomputeArgs) -> Result<()> {
    info!("Precomputing labels kernel...");
    info!("Data file: {:?}", args.data);

    let loaded = if args.label_column {
        CsvFeatures::from_file_with_labels(&args.data)?
    } else {
        CsvFeatures::from_file(&args.data)?
    };
    let (features, labels) = loaded.into_parts();
    let label_features = labels.unwrap_or(features);

    info!(
        "Loaded {} observations of dimension {}",
        label_features.len(),
        label_features.dim()
    );

    let kernel: KernelHandle = match args.kernel {
        CliKernel::Linear => Arc::new(LinearKernel::new()),
        CliKernel::Rbf => {
            // RbfKernel::new asserts on gamma; reject bad user input here so
            // the failure takes the normal error exit instead of a panic
            if !(args.gamma > 0.0) {
                return Err(SelectionError::InvalidParameter(format!(
                    "gamma must be positive, got {}",
                    args.gamma
                )));
            }
            Arc::new(RbfKernel::new(args.gamma))
        }
    };

    let precomputed = PrecomputedKernel::from_kernel(kernel.as_ref(), &label_features)?;

    let gram = SerializableGram::from_precomputed(&precomputed);
    gram.save_to_file(&args.output)?;

    info!("Saved Gram matrix to {:?}", args.output);
    println!("Precomputed {0} x {0} Gram matrix", gram.matrix.size());
    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    let gram = SerializableGram::load_from_file(&args.gram)?;
    gram.print_summary();
    Ok(())
}
