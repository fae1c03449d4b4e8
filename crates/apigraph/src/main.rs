//! apigraph command line.
//!
//! Loads an AMF API graph model (expanded or flattened JSON-LD) and prints
//! projections of it: the API summary, any single node, a resolved node, or
//! the list of operations.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use apigraph_graph::node::node_id;
use apigraph_graph::{ApiGraph, UriOptions};
use apigraph_projector::{NodeKind, Projector};
use apigraph_telemetry::{LogFormat, TelemetryConfig};
use apigraph_vocab::api_contract;

#[derive(Parser, Debug)]
#[command(name = "apigraph", about = "Inspect AMF API graph models", version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "APIGRAPH_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    /// Log format (pretty, json or compact).
    #[arg(long, global = true, env = "APIGRAPH_LOG_FORMAT", default_value = "pretty")]
    log_format: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the API summary as JSON.
    Summary {
        /// Model file (JSON-LD, expanded or flattened).
        #[arg(short, long)]
        model: PathBuf,
    },

    /// Project the API, or a single node, into its typed form.
    Project {
        /// Model file (JSON-LD, expanded or flattened).
        #[arg(short, long)]
        model: PathBuf,

        /// Node to project. Defaults to the encoded API.
        #[arg(long)]
        id: Option<String>,

        /// Projection kind (endpoint, operation, shape, ...). Inferred from
        /// the node type when omitted.
        #[arg(long)]
        kind: Option<String>,

        /// Output format (json or yaml).
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Print a node with its links resolved.
    Resolve {
        /// Model file (JSON-LD, expanded or flattened).
        #[arg(short, long)]
        model: PathBuf,

        /// Node to resolve.
        #[arg(long)]
        id: String,
    },

    /// List operations, one `METHOD path` per line.
    Endpoints {
        /// Model file (JSON-LD, expanded or flattened).
        #[arg(short, long)]
        model: PathBuf,

        /// Print the full URI (server base plus path) instead of the path.
        #[arg(long)]
        uri: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_format = match LogFormat::parse(&cli.log_format) {
        Some(format) => format,
        None => {
            eprintln!("error: unknown log format '{}'", cli.log_format);
            return ExitCode::from(1);
        }
    };
    let telemetry = TelemetryConfig::new()
        .with_log_level(&cli.log_level)
        .with_log_format(log_format);
    if let Err(e) = apigraph_telemetry::init(&telemetry) {
        eprintln!("error: {}", e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Command::Summary { model } => run_summary(&model),
        Command::Project {
            model,
            id,
            kind,
            format,
        } => run_project(&model, id.as_deref(), kind.as_deref(), &format),
        Command::Resolve { model, id } => run_resolve(&model, &id),
        Command::Endpoints { model, uri } => run_endpoints(&model, uri),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn load_model(path: &Path) -> Result<ApiGraph> {
    let graph = ApiGraph::from_path(path)
        .with_context(|| format!("failed to load model {}", path.display()))?;
    tracing::debug!(path = %path.display(), "model file loaded");
    Ok(graph)
}

fn run_summary(model: &Path) -> Result<()> {
    let graph = load_model(model)?;
    let summary = Projector::new(&graph)
        .api_summary()
        .context("model does not encode an API")?;
    print_output(&summary, "json")
}

fn run_project(model: &Path, id: Option<&str>, kind: Option<&str>, format: &str) -> Result<()> {
    let graph = load_model(model)?;
    let projector = Projector::new(&graph);

    let hint = match kind {
        Some(name) => match NodeKind::parse(name) {
            Some(kind) => Some(kind),
            None => bail!("unknown node kind '{}'", name),
        },
        None => None,
    };

    let projection = match id {
        Some(id) => projector
            .project_id(id, hint)
            .with_context(|| format!("no node with id '{}'", id))?,
        None => {
            let api = graph.api().context("model does not encode an API")?;
            projector.project(api, hint)
        }
    };
    print_output(&projection, format)
}

fn run_resolve(model: &Path, id: &str) -> Result<()> {
    let graph = load_model(model)?;
    let node = graph
        .find_by_id(id)
        .with_context(|| format!("no node with id '{}'", id))?;
    let resolved = graph.resolve_node(node);
    print_output(&resolved, "json")
}

fn run_endpoints(model: &Path, full_uri: bool) -> Result<()> {
    let graph = load_model(model)?;
    let mut stdout = std::io::stdout().lock();

    for endpoint in graph.endpoints() {
        let location = if full_uri {
            let options = UriOptions {
                server: graph.server(node_id(endpoint), None, None),
                ..UriOptions::default()
            };
            graph.endpoint_uri(endpoint, &options)
        } else {
            graph
                .value_string(endpoint, api_contract::PATH)
                .unwrap_or_default()
        };

        for operation in graph.operations(endpoint) {
            let method = graph
                .value_string(operation, api_contract::METHOD)
                .unwrap_or_default()
                .to_uppercase();
            writeln!(stdout, "{} {}", method, location)?;
        }
    }
    Ok(())
}

fn print_output<T: Serialize>(value: &T, format: &str) -> Result<()> {
    let rendered = match format {
        "json" => serde_json::to_string_pretty(value)?,
        "yaml" => serde_yaml::to_string(value)?,
        other => bail!("unknown output format '{}' (expected json or yaml)", other),
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(())
}
