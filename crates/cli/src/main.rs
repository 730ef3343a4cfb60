use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;

use radiocover::cover::build_coverage;
use radiocover::scatter::{scatter_points, Bounds2, ReplayToken, ScatterCfg};
use radiocover::Point;

mod report;

use report::{read_points, InstanceReport};

#[derive(Parser)]
#[command(name = "radiocover")]
#[command(about = "Minimum router placement over 2D facility points")]
struct Cmd {
    /// Emit the report as JSON instead of the human listing
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an instance read from a text file (one "x y" pair per line)
    Solve {
        #[arg(long)]
        input: String,
        #[arg(long, default_value_t = 50.0)]
        radius: f64,
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
    },
    /// Generate a random instance, then solve it
    Random {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 50.0)]
        radius: f64,
        #[arg(long, value_enum, default_value_t = Algo::Both)]
        algo: Algo,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    Greedy,
    Exact,
    Both,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            radius,
            algo,
        } => {
            let points = read_points(&input)?;
            tracing::info!(input, n = points.len(), radius, "solve");
            run(&points, radius, algo, cmd.json)
        }
        Action::Random {
            count,
            seed,
            radius,
            algo,
        } => {
            let cfg = ScatterCfg {
                count,
                bounds: Bounds2::default(),
            };
            let points = scatter_points(&cfg, ReplayToken { seed, index: 0 });
            tracing::info!(n = count, seed, radius, "random");
            run(&points, radius, algo, cmd.json)
        }
    }
}

fn run(points: &[Point], radius: f64, algo: Algo, json: bool) -> Result<()> {
    let coverage = build_coverage(points, radius)?;
    let mut report = InstanceReport::new(points, radius);
    if matches!(algo, Algo::Greedy | Algo::Both) {
        let chosen = radiocover::solver::greedy_solve(&coverage);
        tracing::info!(routers = chosen.len(), "greedy");
        report.add_solver("greedy", points, &chosen);
    }
    if matches!(algo, Algo::Exact | Algo::Both) {
        let chosen = radiocover::solver::exact_solve(&coverage)?;
        tracing::info!(routers = chosen.len(), "exact");
        report.add_solver("exact", points, &chosen);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
