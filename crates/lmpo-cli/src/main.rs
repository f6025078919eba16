//! lindbladmpo command-line interface.
//!
//! Inspect the registered lattice topologies, plot them, and run the solver
//! on a parameter file:
//!
//! ```text
//! lmpo topologies --family ring
//! lmpo show 10.plaquette.B
//! lmpo plot 8.ring.A --alternating --save figs/8.ring.A
//! lmpo solve --params run.yaml --topology 9.chain.M --solver bloch
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{OutputFormat, SolverKind};
use commands::{plot, show, solve, topologies, version};

/// lindbladmpo - lattice topologies and solver runs for open quantum systems
#[derive(Parser)]
#[command(name = "lmpo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered topologies
    Topologies {
        /// Only list one family (chain, ring, plaquette, falcon, eagle)
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Print the coupling map, coordinates and field pattern of a topology
    Show {
        /// Topology key, e.g. 10.ring.A or 27.falcon
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Plot a topology (best-effort; needs Graphviz)
    Plot {
        /// Topology key
        key: String,

        /// Swap rows and columns
        #[arg(long)]
        transpose: bool,

        /// Color qubits with a nonzero field
        #[arg(long)]
        alternating: bool,

        /// Save to PREFIX[.alternating].png
        #[arg(short, long, value_name = "PREFIX")]
        save: Option<String>,

        /// Print the Graphviz source instead of rendering
        #[arg(long)]
        dot: bool,

        /// Graphviz layout program
        #[arg(long, default_value = "neato")]
        program: String,
    },

    /// Run a solver on a parameter file
    Solve {
        /// Parameter file (YAML, or JSON by extension)
        #[arg(short, long)]
        params: PathBuf,

        /// Take N, bonds and the h_z pattern from a registered topology
        #[arg(short, long)]
        topology: Option<String>,

        /// Solver to run
        #[arg(short, long, value_enum, default_value_t = SolverKind::Process)]
        solver: SolverKind,

        /// Path to the lindbladmpo binary
        #[arg(long, env = "LINDBLADMPO_PATH")]
        solver_path: Option<PathBuf>,

        /// Program used to start the solver binary
        #[arg(long)]
        launcher: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Topologies { family } => topologies::execute(family.as_deref()),

        Commands::Show { key, format } => show::execute(&key, format),

        Commands::Plot {
            key,
            transpose,
            alternating,
            save,
            dot,
            program,
        } => {
            plot::execute(&key, transpose, alternating, save, dot, &program);
            Ok(())
        }

        Commands::Solve {
            params,
            topology,
            solver,
            solver_path,
            launcher,
            format,
        } => {
            solve::execute(
                &params,
                topology.as_deref(),
                solver,
                solver_path,
                launcher,
                format,
            )
            .await
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
