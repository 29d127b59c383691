use anyhow::{Context, Result};
use clap::Parser;
use hull2d::input::read_points;
use hull2d::output::{write_dot, write_hull, FormatCfg};
use hull2d::QuickHull;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser, Debug)]
#[command(name = "quickhull", version)]
#[command(about = "Convex hull of a 2D point set (QuickHull), written as an undirected graph")]
struct Cmd {
    /// Point file: a count `n`, then `n` lines `x y`; lines starting with `#` are comments
    input: PathBuf,
    /// Graph output (DOT): one pinned node per input point, one edge per hull segment
    output: PathBuf,
    /// Also write the hull points (count, then `x<TAB>y` per point)
    #[arg(long)]
    hull_out: Option<PathBuf>,
    /// Write `<output-stem>.provenance.json` next to the graph
    #[arg(long)]
    provenance: bool,
    /// Field width of printed coordinates
    #[arg(long, default_value_t = 3)]
    width: usize,
    /// Decimal digits of printed coordinates
    #[arg(long, default_value_t = 0)]
    precision: usize,
}

/// Summary of one run, logged and stored in the provenance sidecar.
#[derive(Debug, Serialize, PartialEq)]
struct RunStats {
    points: usize,
    hull: usize,
    edges: usize,
    skipped_edges: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    match parse_args(std::env::args_os()) {
        Some(cmd) => run(&cmd).map(|_| ()),
        None => Ok(()),
    }
}

/// `None` when the process should stop after printing help or usage.
///
/// Usage errors deliberately exit with status 0 (see DESIGN.md).
fn parse_args<I, T>(args: I) -> Option<Cmd>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cmd::try_parse_from(args) {
        Ok(cmd) => Some(cmd),
        Err(e) => {
            if let Err(io) = e.print() {
                tracing::warn!(error = %io, "failed to print usage");
            }
            None
        }
    }
}

fn run(cmd: &Cmd) -> Result<RunStats> {
    tracing::info!(input = %cmd.input.display(), output = %cmd.output.display(), "run");
    let file = File::open(&cmd.input)
        .with_context(|| format!("opening {}", cmd.input.display()))?;
    let points = read_points(BufReader::new(file))
        .with_context(|| format!("parsing {}", cmd.input.display()))?;
    tracing::debug!(points = points.len(), "input_parsed");

    let qh = QuickHull::new(points)
        .with_context(|| format!("building hull of {}", cmd.input.display()))?;
    let fmt = FormatCfg {
        width: cmd.width,
        precision: cmd.precision,
    };

    let skipped = write_with(&cmd.output, |w| write_dot(&qh, w, fmt))?;
    if skipped > 0 {
        tracing::warn!(skipped, "hull edges without a matching input point were dropped");
    }
    if let Some(path) = &cmd.hull_out {
        write_with(path, |w| write_hull(&qh, w, fmt))?;
    }

    let stats = RunStats {
        points: qh.points().len(),
        hull: qh.hull().len(),
        edges: qh.edges().len(),
        skipped_edges: skipped,
    };
    tracing::info!(
        points = stats.points,
        hull = stats.hull,
        edges = stats.edges,
        "hull_written"
    );

    if cmd.provenance {
        let params = serde_json::json!({
            "input": cmd.input.to_string_lossy(),
            "hull_out": cmd.hull_out.as_ref().map(|p| p.to_string_lossy()),
            "width": cmd.width,
            "precision": cmd.precision,
        });
        let payload = provenance::Payload::new(params, serde_json::to_value(&stats)?);
        let prov = provenance::write_sidecar(&cmd.output, payload)?;
        tracing::info!(path = %prov.display(), "provenance");
    }
    Ok(stats)
}

/// Create `path` (and missing parent dirs), hand a buffered writer to `f`, flush.
fn write_with<T>(
    path: &Path,
    f: impl FnOnce(&mut BufWriter<File>) -> std::io::Result<T>,
) -> Result<T> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    let out = f(&mut w).with_context(|| format!("writing {}", path.display()))?;
    w.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn cmd_for(input: &Path, output: &Path) -> Cmd {
        parse_args([
            OsString::from("quickhull"),
            input.as_os_str().to_os_string(),
            output.as_os_str().to_os_string(),
        ])
        .expect("valid args")
    }

    #[test]
    fn usage_errors_and_help_stop_without_a_command() {
        assert!(parse_args(["quickhull"]).is_none());
        assert!(parse_args(["quickhull", "only-input.txt"]).is_none());
        assert!(parse_args(["quickhull", "a", "b", "c"]).is_none());
        assert!(parse_args(["quickhull", "--help"]).is_none());
    }

    #[test]
    fn flags_are_parsed() {
        let cmd = parse_args([
            "quickhull",
            "in.txt",
            "out.dot",
            "--hull-out",
            "hull.txt",
            "--provenance",
            "--width",
            "6",
            "--precision",
            "2",
        ])
        .unwrap();
        assert_eq!(cmd.hull_out, Some(PathBuf::from("hull.txt")));
        assert!(cmd.provenance);
        assert_eq!((cmd.width, cmd.precision), (6, 2));
    }

    #[test]
    fn run_writes_graph_hull_and_provenance() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("diamond.txt");
        fs::write(
            &input,
            "# diamond with one interior point\n5\n0 0\n1 1\n2 0\n1 -1\n1 0\n",
        )
        .unwrap();
        let output = dir.path().join("nested/diamond.dot");
        let mut cmd = cmd_for(&input, &output);
        cmd.hull_out = Some(dir.path().join("diamond.hull"));
        cmd.provenance = true;

        let stats = run(&cmd).unwrap();
        assert_eq!(
            stats,
            RunStats {
                points: 5,
                hull: 4,
                edges: 4,
                skipped_edges: 0
            }
        );

        let dot = fs::read_to_string(&output).unwrap();
        assert!(dot.starts_with("graph{\n\n 0 [pos = \"  0,  0!\"]\n"));
        assert!(dot.contains(" 3 -- 2\n"));
        assert!(dot.ends_with("}\n"));

        let hull = fs::read_to_string(dir.path().join("diamond.hull")).unwrap();
        assert_eq!(hull.lines().next(), Some("4"));

        let prov: serde_json::Value = serde_json::from_slice(
            &fs::read(dir.path().join("nested/diamond.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(prov["stats"]["hull"], 4);
    }

    #[test]
    fn fractional_coordinates_complete() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("cloud.txt");
        fs::write(
            &input,
            "6\n36.12448870968691 -31.87304616522781\n25.94705984050943 -42.007228686356406\n\
             -3.25 7.125\n0.1 0.2\n12.5 48.75\n-40.3 -12.9\n",
        )
        .unwrap();
        let mut cmd = cmd_for(&input, &dir.path().join("cloud.dot"));
        cmd.precision = 2;
        let stats = run(&cmd).unwrap();
        assert_eq!(stats.points, 6);
        assert_eq!((stats.hull, stats.edges), (4, 4));
    }

    #[test]
    fn malformed_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "2\n0 0\n1 x\n").unwrap();
        let err = run(&cmd_for(&input, &dir.path().join("bad.dot"))).unwrap_err();
        assert!(format!("{err:#}").contains("invalid coordinate"));
    }

    #[test]
    fn empty_point_set_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "0\n").unwrap();
        let err = run(&cmd_for(&input, &dir.path().join("empty.dot"))).unwrap_err();
        assert!(format!("{err:#}").contains("empty point set"));
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = run(&cmd_for(
            &dir.path().join("absent.txt"),
            &dir.path().join("out.dot"),
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("opening"));
    }
}
