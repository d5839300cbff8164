use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use cone_spanners::graph::{SpannerGraph, VertexId};
use cone_spanners::spanner::{ThetaGraphBuilder, YaoGraphBuilder};
use cone_spanners::Vec2;

mod dijkstra;
mod io;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Cone spanner construction and shortest-path demos")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    Theta,
    Yao,
}

#[derive(Args)]
struct SpannerArgs {
    /// Point file: one `x y` pair per line, `#` comments allowed
    #[arg(long)]
    input: String,
    /// Which cone rule to use
    #[arg(long, value_enum, default_value_t = Algo::Theta)]
    algo: Algo,
    /// Number of cones
    #[arg(long, default_value_t = 6)]
    cones: u32,
    /// x component of the first boundary ray
    #[arg(long, default_value_t = 1.0)]
    dir_x: f64,
    /// y component of the first boundary ray
    #[arg(long, default_value_t = 0.0)]
    dir_y: f64,
    /// Print a machine-readable JSON summary instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Action {
    /// Build a spanner and report its size
    Build {
        #[command(flatten)]
        args: SpannerArgs,
    },
    /// Build a spanner and print shortest-path distances from a source vertex
    Dijkstra {
        #[command(flatten)]
        args: SpannerArgs,
        /// Source vertex index
        #[arg(long, default_value_t = 0)]
        source: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Build { args } => build(args),
        Action::Dijkstra { args, source } => run_dijkstra(args, source),
    }
}

fn construct(args: &SpannerArgs) -> Result<SpannerGraph> {
    let points = io::read_points(&args.input)?;
    let initial = Vec2::new(args.dir_x, args.dir_y);
    tracing::info!(
        n = points.len(),
        cones = args.cones,
        algo = ?args.algo,
        "constructing spanner"
    );
    let mut g = SpannerGraph::new();
    match args.algo {
        Algo::Theta => ThetaGraphBuilder::with_initial_direction(args.cones, initial)
            .and_then(|b| b.construct(points, &mut g)),
        Algo::Yao => YaoGraphBuilder::with_initial_direction(args.cones, initial)
            .and_then(|b| b.construct(points, &mut g)),
    }
    .context("spanner construction failed")?;
    Ok(g)
}

fn build(args: SpannerArgs) -> Result<()> {
    let g = construct(&args)?;
    if args.json {
        let summary = serde_json::json!({
            "algo": format!("{:?}", args.algo).to_lowercase(),
            "cones": args.cones,
            "vertices": g.num_vertices(),
            "edges": g.num_edges(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{:?} graph with {} cones: {} vertices, {} edges",
            args.algo,
            args.cones,
            g.num_vertices(),
            g.num_edges()
        );
        for &(u, w) in g.edges() {
            let len = (g.point(w) - g.point(u)).norm();
            println!("{} {} {len:.6}", u.0, w.0);
        }
    }
    Ok(())
}

fn run_dijkstra(args: SpannerArgs, source: usize) -> Result<()> {
    let g = construct(&args)?;
    anyhow::ensure!(
        source < g.num_vertices(),
        "source vertex {source} out of range (graph has {} vertices)",
        g.num_vertices()
    );
    let dist = dijkstra::shortest_paths(&g, VertexId(source));
    if args.json {
        let summary = serde_json::json!({
            "source": source,
            "vertices": g.num_vertices(),
            "edges": g.num_edges(),
            "distances": dist,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("shortest paths from vertex {source}:");
        for (i, d) in dist.iter().enumerate() {
            let p = g.point(VertexId(i));
            println!("  {i} ({:.3}, {:.3}): {d:.6}", p.x, p.y);
        }
    }
    Ok(())
}
