//! apigraph command line.
//!
//! Provides the `apigraph` binary: loads a designer graph export, resolves
//! its route policies, and either writes a server (`generate`) or prints the
//! resolved route table (`routes`).
//!
//! Every flag also reads from an environment variable:
//! - `APIGRAPH_CONFIG`: graph configuration path (default: "./config.json")
//! - `APIGRAPH_OUTPUT`: generated server path (default: "./server.js")
//! - `APIGRAPH_PORT`: port of the generated server (default: 3000)
//!
//! Logging goes to stderr and follows `RUST_LOG` unless `-v` is given.

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apigraph_codegen::{CodegenError, EmitOptions};
use apigraph_core::ApiGraph;
use apigraph_policy::{Resolution, Traverser, TraverserConfig};
use apigraph_storage::{load_nodes, FileSource, StorageError};

/// API graph to server generator.
#[derive(Debug, Parser)]
#[command(name = "apigraph", about = "Resolve API designer graphs into servers")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the graph and write a server implementation.
    Generate {
        /// Path to the graph configuration (JSON).
        #[arg(short, long, env = "APIGRAPH_CONFIG", default_value = "./config.json")]
        config: PathBuf,

        /// Where to write the generated server.
        #[arg(short, long, env = "APIGRAPH_OUTPUT", default_value = "./server.js")]
        output: PathBuf,

        /// Port the generated server listens on.
        #[arg(short, long, env = "APIGRAPH_PORT", default_value_t = apigraph_codegen::DEFAULT_PORT)]
        port: u16,
    },

    /// Resolve the graph and print the route table as JSON.
    Routes {
        /// Path to the graph configuration (JSON).
        #[arg(short, long, env = "APIGRAPH_CONFIG", default_value = "./config.json")]
        config: PathBuf,

        /// Include the per-visit traversal trace.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Commands::Generate {
            config,
            output,
            port,
        } => run_generate(
            &config,
            &EmitOptions {
                output_path: output,
                port,
            },
        ),
        Commands::Routes { config, trace } => run_routes(&config, trace),
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load, build, and traverse.
fn resolve_config(config: &Path, trace: bool) -> Result<Resolution, StorageError> {
    let nodes = load_nodes(&FileSource::new(config))?;
    let graph = ApiGraph::build(nodes);
    let traverser_config = TraverserConfig {
        trace,
        ..TraverserConfig::default()
    };
    let resolution = Traverser::new(&graph, traverser_config).run();
    tracing::info!(
        config = %config.display(),
        nodes = graph.len(),
        routes = resolution.routes.len(),
        "resolved graph"
    );
    Ok(resolution)
}

/// Execute the generate subcommand.
///
/// Returns exit code: 0 = success, 1 = config not found, 2 = empty graph,
/// 3 = I/O or parse error.
fn run_generate(config: &Path, options: &EmitOptions) -> i32 {
    let resolution = match resolve_config(config, false) {
        Ok(r) => r,
        Err(e) => return report_storage_error(&e),
    };

    match apigraph_codegen::generate(&resolution, options) {
        Ok(result) => {
            // Print EmitResult as JSON to stdout for machine-readable output
            let json = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize result: {}\"}}", e)
            });
            println!("{}", json);
            0
        }
        Err(CodegenError::IoError(e)) => {
            eprintln!(
                "Error: failed to write '{}': {}",
                options.output_path.display(),
                e
            );
            3
        }
    }
}

/// Execute the routes subcommand. Same exit codes as `generate`.
fn run_routes(config: &Path, trace: bool) -> i32 {
    match resolve_config(config, trace) {
        Ok(resolution) => match serde_json::to_string_pretty(&resolution) {
            Ok(json) => {
                println!("{}", json);
                0
            }
            Err(e) => {
                eprintln!("Error: failed to serialize routes: {}", e);
                3
            }
        },
        Err(e) => report_storage_error(&e),
    }
}

fn report_storage_error(err: &StorageError) -> i32 {
    eprintln!("Error: {}", err);
    exit_code(err)
}

fn exit_code(err: &StorageError) -> i32 {
    match err {
        StorageError::ConfigNotFound { .. } => 1,
        StorageError::EmptyGraph => 2,
        StorageError::Io(_) | StorageError::Serialization(_) => 3,
    }
}
