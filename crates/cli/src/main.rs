use anyhow::{bail, Context, Result};
use calipers::prelude::*;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact convex hulls and minimum bounding rectangles")]
struct Cmd {
    /// Optional free-form tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of the input points (CCW from the lowest point)
    Hull {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Every edge-aligned bounding rectangle, minimum flagged
    Rects {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Only the minimum-area bounding rectangle
    Min {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Draw a reproducible random point cloud as a point list
    Random {
        #[arg(long, default_value_t = 24)]
        count: usize,
        #[arg(long, default_value_t = 100)]
        extent: i64,
        #[arg(long, value_enum, default_value_t = LayoutArg::Disc)]
        layout: LayoutArg,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct InputArgs {
    /// Inline point list, e.g. "(60,10), (60,20), (70,10)"
    #[arg(long)]
    points: Option<String>,
    /// File with a point list (tuples, or one `x,y` per line)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Write JSON here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Square,
    Disc,
    Line,
}

impl From<LayoutArg> for Layout {
    fn from(l: LayoutArg) -> Self {
        match l {
            LayoutArg::Square => Layout::Square,
            LayoutArg::Disc => Layout::Disc,
            LayoutArg::Line => Layout::Line,
        }
    }
}

#[derive(Serialize)]
struct PointOut {
    x: String,
    y: String,
    approx: [f64; 2],
}

impl From<&Point> for PointOut {
    fn from(p: &Point) -> Self {
        let v = p.to_vec2();
        Self {
            x: p.x.to_string(),
            y: p.y.to_string(),
            approx: [v.x, v.y],
        }
    }
}

#[derive(Serialize)]
struct RectOut {
    name: String,
    corners: Vec<PointOut>,
    area: String,
    area_approx: f64,
    width_squared: String,
    height_squared: String,
    minimum: bool,
}

fn rect_out(i: usize, r: &Rectangle, minimum: bool) -> RectOut {
    let area = r.area();
    RectOut {
        name: format!("rectangle {}", i + 1),
        corners: r.corners().iter().map(PointOut::from).collect(),
        area_approx: area.to_f64(),
        area: area.to_string(),
        width_squared: r.width_squared().to_string(),
        height_squared: r.height_squared().to_string(),
        minimum,
    }
}

fn main() -> Result<()> {
    // stdout carries the JSON / point-list results; logs go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let tag = cmd.tag;
    match cmd.action {
        Action::Hull { input } => emit(&input, "hull", tag, hull_json),
        Action::Rects { input } => emit(&input, "rects", tag, rects_json),
        Action::Min { input } => emit(&input, "min", tag, min_json),
        Action::Random {
            count,
            extent,
            layout,
            seed,
            index,
            out,
        } => random(count, extent, layout.into(), seed, index, out, tag),
        Action::Report => report(tag),
    }
}

impl InputArgs {
    fn load(&self) -> Result<(String, Vec<Point>)> {
        let (source, text) = match (&self.points, &self.input) {
            (Some(_), Some(_)) => bail!("pass either --points or --input, not both"),
            (None, None) => bail!("missing input: pass --points or --input"),
            (Some(s), None) => ("inline".to_string(), s.clone()),
            (None, Some(path)) => (
                path.display().to_string(),
                std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?,
            ),
        };
        let points = parse_points(&text).with_context(|| format!("parsing points from {source}"))?;
        Ok((source, points))
    }
}

fn emit(
    input: &InputArgs,
    command: &str,
    tag: Option<String>,
    build: fn(&[Point]) -> Result<Value>,
) -> Result<()> {
    let (source, points) = input.load()?;
    tracing::info!(command, source, points = points.len(), tag = ?tag, "run");
    let value = build(&points)
        .inspect_err(|e| tracing::warn!(command, error = %chain(e), "kernel"))?;
    let params = json!({
        "command": command,
        "source": source,
        "points": points.len(),
        "tag": tag,
    });
    write_or_print(input.out.as_deref(), &value, params)
}

/// Context plus root cause, e.g. "not enough ... points: ... got 2".
fn chain(e: &anyhow::Error) -> String {
    format!("{e:#}")
}

fn write_or_print(out: Option<&str>, value: &Value, params: Value) -> Result<()> {
    match out {
        Some(out) => {
            let out_path = Path::new(out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, serde_json::to_vec_pretty(value)?)
                .with_context(|| format!("writing {out}"))?;
            let prov = provenance::write_sidecar(out_path, provenance::Payload::new(params))?;
            tracing::info!(out, provenance = %prov.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn hull_json(points: &[Point]) -> Result<Value> {
    let hull = compute_convex_hull(points)?;
    tracing::info!(vertices = hull.len(), degenerate = hull.is_degenerate(), "hull");
    let vertices: Vec<PointOut> = hull.vertices().iter().map(PointOut::from).collect();
    Ok(json!({
        "vertices": vertices,
        "degenerate": hull.is_degenerate(),
        "area": hull.area().to_string(),
    }))
}

fn rects_json(points: &[Point]) -> Result<Value> {
    let s = sweep(points).context("not enough distinct, non-collinear points")?;
    tracing::info!(
        vertices = s.hull.len(),
        rectangles = s.rectangles.len(),
        min_index = s.min_index,
        min_area = %s.minimum().area(),
        "sweep"
    );
    let rects: Vec<RectOut> = s
        .rectangles
        .iter()
        .enumerate()
        .map(|(i, r)| rect_out(i, r, i == s.min_index))
        .collect();
    let hull: Vec<PointOut> = s.hull.vertices().iter().map(PointOut::from).collect();
    Ok(json!({
        "hull": hull,
        "rectangles": rects,
        "min_index": s.min_index,
    }))
}

fn min_json(points: &[Point]) -> Result<Value> {
    let s = sweep(points).context("not enough distinct, non-collinear points")?;
    let min = s.minimum();
    tracing::info!(index = s.min_index, area = %min.area(), "minimum");
    // Same name as in `rects`: position of the generating edge.
    Ok(serde_json::to_value(rect_out(s.min_index, min, true))?)
}

fn random(
    count: usize,
    extent: i64,
    layout: Layout,
    seed: u64,
    index: u64,
    out: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(count, extent, seed, index, tag = ?tag, "random");
    let cfg = CloudCfg {
        count: PointCount::Fixed(count),
        extent,
        layout,
    };
    let points = draw_point_cloud(cfg, ReplayToken { seed, index });
    let text = points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match out {
        Some(out) => {
            std::fs::write(&out, format!("{text}\n")).with_context(|| format!("writing {out}"))?;
            let params = json!({
                "command": "random",
                "count": count,
                "extent": extent,
                "seed": seed,
                "index": index,
                "tag": tag,
            });
            provenance::write_sidecar(&out, provenance::Payload::new(params))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "kernel_version": calipers::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn demo_points() -> Vec<Point> {
        parse_points("(0,0), (4,0), (4,3), (0,3), (2,1)").unwrap()
    }

    #[test]
    fn hull_json_lists_ccw_vertices() {
        let v = hull_json(&demo_points()).unwrap();
        let xs: Vec<&str> = v["vertices"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["x"].as_str().unwrap())
            .collect();
        assert_eq!(xs, ["0", "4", "4", "0"]);
        assert_eq!(v["area"], "12");
        assert_eq!(v["degenerate"], false);
    }

    #[test]
    fn rects_json_flags_single_minimum() {
        let v = rects_json(&demo_points()).unwrap();
        let rects = v["rectangles"].as_array().unwrap();
        assert_eq!(rects.len(), 4);
        assert_eq!(rects.iter().filter(|r| r["minimum"] == true).count(), 1);
        assert_eq!(rects[0]["name"], "rectangle 1");
        assert_eq!(v["min_index"], 0);
    }

    #[test]
    fn min_json_rejects_collinear_input() {
        let pts = parse_points("(0,0), (1,0), (2,0)").unwrap();
        let err = min_json(&pts).unwrap_err();
        let root = err.downcast_ref::<GeomError>().unwrap();
        assert_eq!(root.kind(), ErrorKind::Structural);
    }

    #[test]
    fn min_json_names_rectangle_by_edge_position() {
        let pts = parse_points("(60,10), (60,20), (70,10), (60,20), (10,70), (50,30)").unwrap();
        let min = min_json(&pts).unwrap();
        assert_eq!(min["name"], "rectangle 2");
        assert_eq!(min["area"], "600");
        let rects = rects_json(&pts).unwrap();
        let flagged = &rects["rectangles"][1];
        assert_eq!(flagged["minimum"], true);
        assert_eq!(flagged["name"], min["name"]);
    }

    #[test]
    fn logged_error_keeps_kernel_detail() {
        let pts = parse_points("(0,0), (1,1), (2,2)").unwrap();
        let msg = chain(&min_json(&pts).unwrap_err());
        assert!(msg.starts_with("not enough distinct, non-collinear points: "));
        assert!(msg.ends_with("got 2"));
    }

    #[test]
    fn input_args_require_exactly_one_source() {
        let none = InputArgs {
            points: None,
            input: None,
            out: None,
        };
        assert!(none.load().is_err());

        let dir = tempdir().unwrap();
        let file = dir.path().join("pts.txt");
        std::fs::write(&file, "0,0\n1,0\n0,1\n").unwrap();
        let from_file = InputArgs {
            points: None,
            input: Some(file.clone()),
            out: None,
        };
        assert_eq!(from_file.load().unwrap().1.len(), 3);

        let both = InputArgs {
            points: Some("(0,0)".into()),
            input: Some(file),
            out: None,
        };
        assert!(both.load().is_err());
    }

    #[test]
    fn out_file_gets_provenance_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("min.json");
        let value = min_json(&demo_points()).unwrap();
        write_or_print(out.to_str(), &value, json!({"command": "min"})).unwrap();
        let written: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(written["area"], "12");
        assert!(dir.path().join("nested").join("min.provenance.json").exists());
    }
}
