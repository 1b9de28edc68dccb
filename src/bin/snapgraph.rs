//! snapgraph CLI: converts SNAP JSON-LD documents into property graphs.
//!
//! Usage:
//!   snapgraph convert <input> [--output path] [--pretty] [--keep-raw]
//!   snapgraph stats <input>

use clap::{Parser, Subcommand};
use snap_graph::{
    Callback, Delivered, Delivery, Destination, DocumentLoader, FileTransport, Graph,
    MemoryGraph, MemoryGraphConfig, SnapConfig,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "snapgraph",
    version,
    about = "Convert SNAP ontology JSON-LD into property graphs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document and write the graph as JSON
    Convert {
        /// Path or file:// URL of the JSON-LD document
        input: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        /// Attach each source element to the record it produced
        #[arg(long)]
        keep_raw: bool,
    },
    /// Print node and edge counts for a document
    Stats {
        /// Path or file:// URL of the JSON-LD document
        input: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn make_loader(config: &SnapConfig) -> DocumentLoader {
    DocumentLoader::new()
        .with_transport(Arc::new(FileTransport::new()))
        .with_builder(config.graph_builder())
}

fn write_graph(graph: &Graph, output: Option<&PathBuf>, pretty: bool) -> Result<(), String> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    }
    .map_err(|e| format!("cannot serialize graph: {}", e))?;

    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .map_err(|e| format!("cannot write '{}': {}", path.display(), e)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

async fn cmd_convert(
    config: &SnapConfig,
    input: String,
    output: Option<PathBuf>,
    pretty: bool,
) -> i32 {
    let loader = make_loader(config);
    let delivery = match loader
        .load::<MemoryGraph>(input.into(), Destination::None, None)
        .await
    {
        Ok(delivery) => delivery,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let Delivery::Detached(graph) = delivery else {
        eprintln!("Error: graph was taken by a sink");
        return 1;
    };
    match write_graph(&graph, output.as_ref(), pretty || config.pretty) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_stats(config: &SnapConfig, input: String) -> i32 {
    let loader = make_loader(config);
    let report: Callback<'_, MemoryGraph> = Box::new(|delivered: Delivered<'_, MemoryGraph>| {
        if let Delivered::Sink(graph) = delivered {
            println!("{}: {}", graph.name().unwrap_or("graph"), graph.stats());
        }
    });
    let destination = Destination::Config(MemoryGraphConfig::named(input.clone()));
    match loader.load(input.into(), destination, Some(report)).await {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match SnapConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: cannot start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Convert {
            input,
            output,
            pretty,
            keep_raw,
        } => {
            config.keep_raw_source |= keep_raw;
            runtime.block_on(cmd_convert(&config, input, output, pretty))
        }
        Commands::Stats { input } => runtime.block_on(cmd_stats(&config, input)),
    };
    std::process::exit(code);
}
