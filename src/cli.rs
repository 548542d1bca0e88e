//! Command line front end: argument parsing, command execution and rendering.
//!
//! Commands return an [`Execution`] which is rendered separately, so that the
//! pipeline can be exercised without spawning a process.

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{field, info, instrument, Span};

use crate::{
    algo::{compute_properties, Properties, ShortestPath},
    core::{Graph, NodeKey, NotFoundError, ValidationError},
    generate::RandomGraph,
    geo::{build_geo_graph, Dataset, DatasetError},
    infra::export::Dot,
};

/// Seed used by `generate` unless `--random` is given, so repeated runs render
/// the same graph.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "geograph",
    about = "Generate random graphs, inspect their properties and find shortest routes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random simple graph and print its properties.
    Generate(GenerateArgs),
    /// Find the shortest route between two locations of a dataset.
    Route(RouteArgs),
    /// Print degrees and the adjacency matrix of a dataset's graph.
    Properties(PropertiesArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of nodes.
    #[arg(long, short = 'n')]
    pub nodes: usize,

    /// Number of edges.
    #[arg(long, short = 'm')]
    pub edges: usize,

    /// Seed of the random number generator.
    #[arg(long, default_value_t = DEFAULT_SEED, conflicts_with = "random")]
    pub seed: u64,

    /// Use fresh entropy instead of a seed.
    #[arg(long)]
    pub random: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args, Clone)]
pub struct RouteArgs {
    /// JSON file with locations and connections.
    #[arg(long)]
    pub dataset: PathBuf,

    /// Name of the start location.
    #[arg(long)]
    pub from: String,

    /// Name of the destination.
    #[arg(long)]
    pub to: String,

    /// Minimise the number of stops instead of the distance.
    #[arg(long)]
    pub hops: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

#[derive(Debug, Args, Clone)]
pub struct PropertiesArgs {
    /// JSON file with locations and connections.
    #[arg(long)]
    pub dataset: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned text tables.
    Table,
    /// Pretty printed JSON.
    Json,
    /// Graphviz DOT.
    Dot,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to open `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to load dataset `{path}`: {source}")]
    Dataset {
        path: PathBuf,
        #[source]
        source: DatasetError,
    },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a command, ready to be rendered.
#[derive(Debug, Clone)]
pub enum Report {
    Generated {
        graph: Graph<usize>,
        properties: Properties<usize>,
        seed: Option<u64>,
    },
    Properties {
        graph: Graph<String>,
        properties: Properties<String>,
    },
    Route {
        graph: Graph<String>,
        route: ShortestPath<String>,
        hops: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Execution {
    pub format: Format,
    pub report: Report,
}

#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Execution, CliError> {
    let span = Span::current();

    match cli.command {
        Command::Generate(args) => {
            span.record("command", "generate");
            run_generate(args)
        }
        Command::Route(args) => {
            span.record("command", "route");
            run_route(args)
        }
        Command::Properties(args) => {
            span.record("command", "properties");
            run_properties(args)
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<Execution, CliError> {
    let seed = (!args.random).then_some(args.seed);
    let graph = RandomGraph::new(args.nodes, args.edges)
        .seed_opt(seed)
        .build()?;
    let properties = compute_properties(&graph);

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "random graph ready"
    );

    Ok(Execution {
        format: args.format,
        report: Report::Generated {
            graph,
            properties,
            seed,
        },
    })
}

fn run_route(args: RouteArgs) -> Result<Execution, CliError> {
    let graph = load_graph(&args.dataset)?;

    let route = if args.hops {
        ShortestPath::on(&graph)
            .unit_weight()
            .run(args.from.as_str(), args.to.as_str())?
    } else {
        ShortestPath::on(&graph).run(args.from.as_str(), args.to.as_str())?
    };

    info!(
        from = args.from.as_str(),
        to = args.to.as_str(),
        success = route.is_success(),
        "route computed"
    );

    Ok(Execution {
        format: args.format,
        report: Report::Route {
            graph,
            route,
            hops: args.hops,
        },
    })
}

fn run_properties(args: PropertiesArgs) -> Result<Execution, CliError> {
    let graph = load_graph(&args.dataset)?;
    let properties = compute_properties(&graph);

    Ok(Execution {
        format: args.format,
        report: Report::Properties { graph, properties },
    })
}

/// Reads a dataset file and builds the geographic graph from it.
pub fn load_graph(path: &Path) -> Result<Graph<String>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset =
        Dataset::from_json_reader(BufReader::new(file)).map_err(|source| CliError::Dataset {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(build_geo_graph(&dataset.locations, &dataset.connections)?)
}

/// Writes the report in the requested format.
pub fn render<W: Write>(execution: &Execution, out: &mut W) -> Result<(), CliError> {
    match (&execution.report, execution.format) {
        (Report::Generated { graph, .. }, Format::Dot) => {
            write!(out, "{}", Dot::new(None).precision(0).display(graph))?
        }
        (Report::Properties { graph, .. }, Format::Dot) => {
            write!(out, "{}", Dot::new(None).display(graph))?
        }
        (Report::Route { graph, route, .. }, Format::Dot) => {
            let dot = Dot::new(None).highlight(route.path().to_vec());
            write!(out, "{}", dot.display(graph))?
        }

        (report, Format::Json) => {
            render_json(report, &mut *out)?;
            writeln!(out)?;
        }

        (
            Report::Generated {
                graph,
                properties,
                seed,
            },
            Format::Table,
        ) => {
            write!(
                out,
                "Random graph with {} nodes and {} edges",
                graph.node_count(),
                graph.edge_count()
            )?;
            match seed {
                Some(seed) => writeln!(out, " (seed {seed})")?,
                None => writeln!(out)?,
            }
            writeln!(out)?;
            render_properties(properties, out)?;
        }
        (Report::Properties { properties, .. }, Format::Table) => {
            render_properties(properties, out)?;
        }
        (Report::Route { route, hops, .. }, Format::Table) => {
            if !route.is_success() {
                writeln!(out, "No route found.")?;
            } else if *hops {
                writeln!(out, "{} ({} hops)", route.path().join(" - "), route.hops())?;
            } else {
                writeln!(out, "{}", route.display_km())?;
            }
        }
    }

    Ok(())
}

fn render_properties<K: NodeKey, W: Write>(
    properties: &Properties<K>,
    out: &mut W,
) -> Result<(), CliError> {
    writeln!(out, "Degrees")?;
    write!(out, "{}", properties.degrees)?;
    writeln!(out)?;
    writeln!(out, "Adjacency matrix")?;
    write!(out, "{}", properties.adjacency)?;
    Ok(())
}

#[derive(Serialize)]
struct GraphView<'a, K> {
    nodes: Vec<&'a K>,
    edges: Vec<(&'a K, &'a K, f64)>,
}

impl<'a, K> GraphView<'a, K> {
    fn of(graph: &'a Graph<K>) -> Self {
        Self {
            nodes: graph.nodes().iter().map(|node| node.key()).collect(),
            edges: graph.edge_triples().collect(),
        }
    }
}

fn render_json<W: Write>(report: &Report, out: W) -> Result<(), CliError> {
    let value = match report {
        Report::Generated {
            graph,
            properties,
            seed,
        } => serde_json::json!({
            "seed": seed,
            "graph": GraphView::of(graph),
            "properties": properties
        }),
        Report::Properties { graph, properties } => serde_json::json!({
            "graph": GraphView::of(graph),
            "properties": properties
        }),
        Report::Route { route, hops, .. } => serde_json::json!({
            "route": route,
            "hops": hops
        }),
    };

    serde_json::to_writer_pretty(out, &value)?;
    Ok(())
}
