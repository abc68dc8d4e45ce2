//! Command-line front end: builds a graph from arguments, then traverses or prints it.
#![forbid(unsafe_code)]

#[path = "hopgraph/config.rs"]
mod config;
#[path = "hopgraph/ui.rs"]
mod ui;

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hopgraph::{
    BfsOptions, Capabilities, DisplayPrinter, Graph, GraphError, GraphOptions, InEdgePolicy,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{CliConfig, ConfigError};
use ui::Ui;

const DEFAULT_LOG_FILTER: &str = "hopgraph=warn";

#[derive(Parser, Debug)]
#[command(
    name = "hopgraph",
    version,
    about = "Build an adjacency-list graph and compute hop distances",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "HOPGRAPH_CONFIG",
        value_name = "FILE",
        help = "Path to the CLI config file"
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        help = "Output format for structured responses [default: text]"
    )]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Breadth-first traversal reporting the hop count of each reached vertex")]
    Bfs(BfsCmd),

    #[command(about = "Print the adjacency lists of the graph")]
    Show(ShowCmd),
}

#[derive(Args, Debug)]
struct GraphArgs {
    #[arg(
        long,
        value_delimiter = ',',
        required = true,
        value_name = "LABELS",
        help = "Comma-separated vertex labels, inserted in order"
    )]
    vertices: Vec<String>,

    #[arg(
        long = "edge",
        value_name = "FROM:TO",
        help = "Edge between two labels (repeatable)"
    )]
    edges: Vec<EdgeArg>,

    #[arg(long, help = "Store every edge in both directions")]
    undirected: bool,

    #[arg(
        long,
        conflicts_with = "undirected",
        help = "Keep edges one-way even when the config file says otherwise"
    )]
    directed: bool,

    #[arg(long, value_enum, help = "How vertex removal treats incoming edges")]
    in_edge_policy: Option<PolicyArg>,
}

#[derive(Args, Debug)]
struct BfsCmd {
    #[command(flatten)]
    graph: GraphArgs,

    #[arg(long, value_name = "LABEL", help = "Vertex the traversal starts from")]
    start: String,

    #[arg(long, help = "Do not discover vertices further than this many hops")]
    max_depth: Option<u32>,

    #[arg(long, help = "Report at most this many vertices")]
    max_results: Option<usize>,
}

#[derive(Args, Debug)]
struct ShowCmd {
    #[command(flatten)]
    graph: GraphArgs,

    #[arg(
        long = "remove-edge",
        value_name = "FROM:TO",
        help = "Edge to remove before printing (repeatable)"
    )]
    remove_edges: Vec<EdgeArg>,

    #[arg(
        long = "remove-vertex",
        value_name = "LABEL",
        help = "Vertex to remove before printing, after edge removals (repeatable)"
    )]
    remove_vertices: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum PolicyArg {
    Reject,
    Detach,
}

impl From<PolicyArg> for InEdgePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Reject => InEdgePolicy::Reject,
            PolicyArg::Detach => InEdgePolicy::Detach,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct EdgeArg {
    from: String,
    to: String,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(Self {
                from: from.to_string(),
                to: to.to_string(),
            }),
            _ => Err(format!("expected FROM:TO, got '{s}'")),
        }
    }
}

impl std::fmt::Display for EdgeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("vertex {label}: {source}")]
    Vertex { label: String, source: GraphError },
    #[error("edge {edge}: {source}")]
    Edge { edge: EdgeArg, source: GraphError },
    #[error("start vertex {label}: {source}")]
    Traversal { label: String, source: GraphError },
    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render graph: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Settings resolved from flags, then the config file, then built-in defaults.
struct Resolved {
    format: OutputFormat,
    directed: bool,
    in_edge_policy: InEdgePolicy,
}

#[derive(Serialize)]
struct BfsReport {
    start: String,
    directed: bool,
    vertices: usize,
    edges: usize,
    visits: Vec<VisitRow>,
}

#[derive(Serialize)]
struct VisitRow {
    vertex: String,
    hops: u32,
}

#[derive(Serialize)]
struct ShowReport {
    directed: bool,
    vertices: usize,
    edges: usize,
    adjacency: Vec<AdjacencyRow>,
}

#[derive(Serialize)]
struct AdjacencyRow {
    vertex: String,
    neighbors: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.clone())?;
    init_tracing(
        config
            .defaults()
            .log_filter
            .as_deref()
            .unwrap_or(DEFAULT_LOG_FILTER),
    );
    debug!(config = ?config.path(), "cli.config_loaded");

    let ui = Ui::new();
    let format = cli
        .format
        .or(config.defaults().format)
        .unwrap_or(OutputFormat::Text);

    match cli.command {
        Command::Bfs(cmd) => {
            let resolved = resolve(format, &cmd.graph, &config);
            run_bfs(&ui, &resolved, cmd)
        }
        Command::Show(cmd) => {
            let resolved = resolve(format, &cmd.graph, &config);
            run_show(&ui, &resolved, cmd)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve(format: OutputFormat, args: &GraphArgs, config: &CliConfig) -> Resolved {
    let defaults = config.defaults();
    Resolved {
        format,
        directed: match (args.directed, args.undirected) {
            (true, _) => true,
            (_, true) => false,
            _ => defaults.directed.unwrap_or(true),
        },
        in_edge_policy: args
            .in_edge_policy
            .map(InEdgePolicy::from)
            .or(defaults.in_edge_policy)
            .unwrap_or_default(),
    }
}

fn build_graph(args: &GraphArgs, resolved: &Resolved) -> Result<Graph<String>, CliError> {
    let caps = Capabilities::partial_eq().printer(DisplayPrinter);
    let opts = GraphOptions::new()
        .directed(resolved.directed)
        .in_edge_policy(resolved.in_edge_policy)
        .vertex_capacity(args.vertices.len());
    let mut graph = Graph::create(caps, opts);

    for label in &args.vertices {
        graph
            .insert_vertex(label.clone())
            .map_err(|source| CliError::Vertex {
                label: label.clone(),
                source,
            })?;
    }
    for edge in &args.edges {
        graph
            .insert_edge(&edge.from, &edge.to)
            .map_err(|source| CliError::Edge {
                edge: edge.clone(),
                source,
            })?;
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "cli.graph_built"
    );
    Ok(graph)
}

fn run_bfs(ui: &Ui, resolved: &Resolved, cmd: BfsCmd) -> Result<(), CliError> {
    let graph = build_graph(&cmd.graph, resolved)?;
    let mut opts = BfsOptions::new();
    if let Some(depth) = cmd.max_depth {
        opts = opts.max_depth(depth);
    }
    if let Some(limit) = cmd.max_results {
        opts = opts.max_results(limit);
    }

    let visits = graph
        .bfs_with(&cmd.start, &opts)
        .map_err(|source| CliError::Traversal {
            label: cmd.start.clone(),
            source,
        })?;
    let report = BfsReport {
        start: cmd.start.clone(),
        directed: graph.is_directed(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        visits: visits
            .iter()
            .map(|visit| VisitRow {
                vertex: visit.vertex.clone(),
                hops: visit.hops,
            })
            .collect(),
    };

    emit(resolved.format, &report, || {
        ui.heading(format!("bfs from {}", report.start));
        for row in &report.visits {
            println!("{} {}", row.vertex, row.hops);
        }
    })
}

fn run_show(ui: &Ui, resolved: &Resolved, cmd: ShowCmd) -> Result<(), CliError> {
    let mut graph = build_graph(&cmd.graph, resolved)?;

    for edge in &cmd.remove_edges {
        if let Err(err) = graph.remove_edge(&edge.from, &edge.to) {
            debug!(edge = %edge, error = %err, "cli.remove_edge_failed");
            ui.warn(format!("could not remove edge {edge}: {err}"));
        }
    }
    for label in &cmd.remove_vertices {
        if let Err(err) = graph.remove_vertex(label) {
            debug!(vertex = %label, error = %err, "cli.remove_vertex_failed");
            ui.warn(format!("could not remove vertex {label}: {err}"));
        }
    }

    match resolved.format {
        OutputFormat::Json => {
            let report = ShowReport {
                directed: graph.is_directed(),
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                adjacency: graph
                    .adjacency_records()
                    .map(|record| AdjacencyRow {
                        vertex: record.vertex().clone(),
                        neighbors: record
                            .neighbors()
                            .iter()
                            .filter_map(|&id| graph.vertex(id).cloned())
                            .collect(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let mut out = String::new();
            graph.iterate(&mut out)?;
            print!("{out}");
        }
    }
    Ok(())
}

fn emit<T, F>(format: OutputFormat, value: &T, printer: F) -> Result<(), CliError>
where
    T: Serialize,
    F: FnOnce(),
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            println!("{json}");
        }
        OutputFormat::Text => printer(),
    }
    Ok(())
}
