use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zkmatmul_circuits::audit::AuditMode;
use zkmatmul_circuits::{runner, MERSENNE_61};

#[derive(Parser)]
#[command(name = "zkmatmul")]
#[command(about = "Secret matrix-multiplication circuits over a prime field")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a secret matrix-product circuit and write its gate trace.
    Generate {
        /// Side length of the generated demo matrices (ignored with --input).
        #[arg(short, long, default_value_t = 8)]
        dim: usize,
        /// Prime field modulus.
        #[arg(long, default_value_t = MERSENNE_61)]
        modulus: u64,
        /// JSON file with matrix_a / matrix_b entry arrays.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Trace file to write.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Count multiplication and addition gates in a trace file.
    Count {
        /// Trace file to scan.
        #[arg(short, long)]
        trace: PathBuf,
        /// Policy for unrecognized gate records: permissive or strict.
        #[arg(long, default_value_t = AuditMode::Permissive)]
        mode: AuditMode,
        /// Emit the summary as JSON instead of labeled counts.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            dim,
            modulus,
            input,
            output,
        } => runner::generate::run(dim, modulus, input.as_deref(), &output)?,
        Commands::Count { trace, mode, json } => runner::count::run(&trace, mode, json)?,
    }
    Ok(())
}
