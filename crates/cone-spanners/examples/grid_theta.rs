//! Build a Theta graph on a small grid and print its edges.
//!
//! Usage:
//!   cargo run -p cone-spanners --example grid_theta -- [cones]

use cone_spanners::graph::SpannerGraph;
use cone_spanners::points::grid;
use cone_spanners::spanner::ThetaGraphBuilder;

fn main() {
    let k: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(6);
    let builder = match ThetaGraphBuilder::new(k) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let pts = grid(5, 5, 1.0);
    let mut g = SpannerGraph::new();
    builder.construct(pts, &mut g).expect("regular rays are never degenerate");
    println!(
        "theta graph: k={k}, {} vertices, {} edges",
        g.num_vertices(),
        g.num_edges()
    );
    for &(u, w) in g.edges() {
        let (pu, pw) = (g.point(u), g.point(w));
        println!(
            "  {} -- {}  ({:.1},{:.1}) -- ({:.1},{:.1})",
            u.0, w.0, pu.x, pu.y, pw.x, pw.y
        );
    }
}
