use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waymark_lib::{
    demo_graph, AStarEngine, Error as LibError, Graph, RouteSummary, SearchControl, SearchEvent,
    SearchObserver, SearchOutcome, TraceRecorder,
};

#[derive(Parser, Debug)]
#[command(version, about = "Waymark graph search utilities")]
struct Cli {
    /// Seed for the demo graph's randomized edge weights.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the demo graph's nodes, positions, and weighted edges.
    Show,
    /// Compute a route between two node labels on the demo graph.
    Route {
        /// Starting node label.
        #[arg(long = "from")]
        from: String,
        /// Goal node label.
        #[arg(long = "to")]
        to: String,
        /// Report each node expansion.
        #[arg(long)]
        trace: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Show => handle_show(cli.seed),
        Command::Route {
            from,
            to,
            trace,
            format,
        } => handle_route(cli.seed, &from, &to, trace, format),
    }
}

fn handle_show(seed: u64) -> Result<()> {
    let graph = demo_graph(seed).context("failed to build the demo graph")?;

    println!("Nodes:");
    for (id, label) in graph.nodes() {
        match graph.position(id) {
            Some(pos) => println!("- {} ({}, {})", label, pos.x, pos.y),
            None => println!("- {}", label),
        }
    }

    println!("Edges:");
    for (u, v, weight) in graph.edges() {
        let u_label = graph.label(u).unwrap_or("<unknown>");
        let v_label = graph.label(v).unwrap_or("<unknown>");
        println!("- {} - {} (weight {})", u_label, v_label, weight);
    }

    Ok(())
}

fn handle_route(seed: u64, from: &str, to: &str, trace: bool, format: OutputFormat) -> Result<()> {
    let graph = demo_graph(seed).context("failed to build the demo graph")?;
    let mut engine = AStarEngine::new();

    let outcome = match format {
        OutputFormat::Text => {
            let mut printer = ExpansionPrinter {
                graph: &graph,
                enabled: trace,
            };
            engine.search(&graph, from, to, &mut printer)?
        }
        OutputFormat::Json => {
            let mut recorder = TraceRecorder::new();
            let outcome = engine.search(&graph, from, to, &mut recorder)?;
            print_json(&graph, &outcome, trace.then_some(recorder.events()))?;
            return finish(from, to, outcome);
        }
    };

    if let SearchOutcome::Found(route) = &outcome {
        let summary = RouteSummary::from_route(&graph, route)?;
        println!("{}", summary.render_text());
    }
    finish(from, to, outcome)
}

/// Turn a terminal outcome into the process result; an exhausted frontier
/// exits nonzero the way unknown endpoints do.
fn finish(from: &str, to: &str, outcome: SearchOutcome) -> Result<()> {
    match outcome {
        SearchOutcome::Found(_) => Ok(()),
        SearchOutcome::NotFound | SearchOutcome::Cancelled => Err(LibError::PathNotFound {
            start: from.to_string(),
            goal: to.to_string(),
        }
        .into()),
    }
}

fn print_json(
    graph: &Graph,
    outcome: &SearchOutcome,
    events: Option<&[SearchEvent]>,
) -> Result<()> {
    let route = match outcome {
        SearchOutcome::Found(route) => Some(RouteSummary::from_route(graph, route)?),
        _ => None,
    };

    let mut body = serde_json::json!({
        "outcome": match outcome {
            SearchOutcome::Found(_) => "found",
            SearchOutcome::NotFound => "not_found",
            SearchOutcome::Cancelled => "cancelled",
        },
        "route": route,
    });
    if let Some(events) = events {
        body["events"] = serde_json::to_value(events)?;
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

/// Observer that renders expansions as they happen; stands in for the
/// original canvas recoloring.
struct ExpansionPrinter<'a> {
    graph: &'a Graph,
    enabled: bool,
}

impl SearchObserver for ExpansionPrinter<'_> {
    fn on_event(&mut self, event: &SearchEvent) -> SearchControl {
        if self.enabled {
            if let SearchEvent::NodeExpanded(node) = event {
                let label = self.graph.label(*node).unwrap_or("<unknown>");
                println!("expanded {}", label);
            }
        }
        SearchControl::Continue
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
