//! Print a random point cloud as a graph with its convex hull.
//!
//! Usage:
//!   cargo run -p hull2d --example random_cloud -- 40 > cloud.dot
//!   neato -n -Tpng cloud.dot -o cloud.png
//!
//! The first argument is the point count (default 30), the second the seed.

use hull2d::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count = args.next().and_then(|s| s.parse().ok()).unwrap_or(30);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = CloudCfg {
        count,
        shape: CloudShape::Grid,
        scale: 50.0,
    };
    let points = draw_points(cfg, ReplayToken { seed, index: 0 });
    let qh = match QuickHull::new(points) {
        Ok(qh) => qh,
        Err(e) => {
            eprintln!("random_cloud: {e}");
            return;
        }
    };
    eprintln!(
        "points={} hull={} edges={}",
        qh.points().len(),
        qh.hull().len(),
        qh.edges().len()
    );
    let stdout = std::io::stdout();
    if let Err(e) = write_dot(&qh, &mut stdout.lock(), FormatCfg::default()) {
        eprintln!("random_cloud: {e}");
    }
}
