//! Input parsing and the comparative solver report.
//!
//! The core works with 0-based point indices; everything printed here is
//! 1-based, the presentation convention of the original planner. The +1
//! happens once, in `Placement::new`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use radiocover::cover::PointId;
use radiocover::Point;

/// Read one "x y" pair per line; blank lines and `#` comments are skipped.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading points from {}", path.display()))?;
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(xs), Some(ys), None) = (fields.next(), fields.next(), fields.next()) else {
            bail!("{}:{}: expected exactly two fields", path.display(), lineno + 1);
        };
        let x: f64 = xs
            .parse()
            .with_context(|| format!("{}:{}: bad x coordinate", path.display(), lineno + 1))?;
        let y: f64 = ys
            .parse()
            .with_context(|| format!("{}:{}: bad y coordinate", path.display(), lineno + 1))?;
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// One chosen router in presentation form (1-based site number + coordinates).
#[derive(Debug, Serialize)]
pub struct Placement {
    pub site: usize,
    pub x: f64,
    pub y: f64,
}

impl Placement {
    fn new(points: &[Point], id: PointId) -> Self {
        let p = points[id.0];
        Self {
            site: id.0 + 1,
            x: p.x,
            y: p.y,
        }
    }
}

/// Result of one solver on the instance.
#[derive(Debug, Serialize)]
pub struct SolverReport {
    pub solver: String,
    pub routers: usize,
    pub placements: Vec<Placement>,
}

/// Comparative report over one instance, one entry per solver run.
#[derive(Debug, Serialize)]
pub struct InstanceReport {
    pub points: usize,
    pub radius: f64,
    pub solvers: Vec<SolverReport>,
}

impl InstanceReport {
    pub fn new(points: &[Point], radius: f64) -> Self {
        Self {
            points: points.len(),
            radius,
            solvers: Vec::new(),
        }
    }

    pub fn add_solver(&mut self, name: &str, points: &[Point], chosen: &[PointId]) {
        self.solvers.push(SolverReport {
            solver: name.to_string(),
            routers: chosen.len(),
            placements: chosen.iter().map(|&id| Placement::new(points, id)).collect(),
        });
    }

    /// Human listing in the original planner's comparative format.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.solvers {
            let _ = writeln!(out, "--- {} ---", report.solver.to_uppercase());
            let _ = writeln!(out, "Routers required: {}", report.routers);
            for (k, p) in report.placements.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "Router {} placed at site {} ({:.2}, {:.2})",
                    k + 1,
                    p.site,
                    p.x,
                    p.y
                );
            }
        }
        if self.solvers.len() > 1 {
            let counts: Vec<String> = self
                .solvers
                .iter()
                .map(|s| format!("{} {}", s.solver, s.routers))
                .collect();
            let _ = writeln!(out, "Comparison: {}", counts.join(" | "));
        }
        out
    }
}
