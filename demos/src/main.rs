//! `algotrace`: print algorithm traces in the terminal.

mod render;

use std::time::Duration;

use algotrace::{
    AlgorithmKind, Category, GridArena, Input, MazeConfig, MazeGen, MazeKind, Step, TraceConfig,
    generate,
};
use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "algotrace", version, about = "Step-by-step algorithm traces")]
struct Cli {
    /// Log to stderr: warnings by default, -v debug, -vv trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Benchmark budget per trace, in milliseconds.
    #[arg(long, default_value_t = 150, global = true)]
    bench_ms: u64,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available algorithms and maze generators.
    List,
    /// Trace a sorting algorithm.
    Sort(SortArgs),
    /// Trace a pathfinding algorithm over a generated maze.
    Path(PathArgs),
    /// Print a generated maze.
    Maze(MazeArgs),
}

#[derive(Parser, Debug)]
struct SortArgs {
    /// Algorithm key, e.g. `quick-sort`.
    algorithm: String,

    /// Values to sort. Random values are used when none are given.
    values: Vec<i32>,

    /// How many random values to draw.
    #[arg(long, default_value_t = 12)]
    len: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Print only the last step.
    #[arg(long)]
    summary: bool,
}

#[derive(Args, Debug)]
struct MazeSpec {
    /// Maze generator key, e.g. `kruskal`. An open grid when omitted.
    #[arg(long)]
    maze: Option<String>,

    #[arg(long, default_value_t = 21)]
    rows: i32,

    #[arg(long, default_value_t = 41)]
    cols: i32,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Algorithm key, e.g. `a-star`.
    algorithm: String,

    #[command(flatten)]
    grid: MazeSpec,

    /// Print every step instead of only the last one.
    #[arg(long)]
    all: bool,
}

#[derive(Parser, Debug)]
struct MazeArgs {
    /// Maze generator key.
    kind: String,

    #[arg(long, default_value_t = 21)]
    rows: i32,

    #[arg(long, default_value_t = 41)]
    cols: i32,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let cfg = TraceConfig::default().with_budget(Duration::from_millis(cli.bench_ms));

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Sort(args) => cmd_sort(args, &cfg),
        Command::Path(args) => cmd_path(args, &cfg),
        Command::Maze(args) => cmd_maze(args),
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Route `log` records through a stderr `fmt` subscriber.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

fn algorithm(key: &str, category: Category) -> anyhow::Result<AlgorithmKind> {
    let kind: AlgorithmKind = key.parse()?;
    if kind.category() != category {
        bail!("{kind} is a {} algorithm", kind.category());
    }
    Ok(kind)
}

fn cmd_list() -> anyhow::Result<()> {
    for category in [Category::Sorting, Category::Pathfinding] {
        println!("{category}:");
        for kind in AlgorithmKind::by_category(category) {
            let d = kind.descriptor();
            println!(
                "  {:<20} {:<26} time {:<36} space {}",
                d.key, d.name, d.time_complexity, d.space_complexity
            );
        }
    }
    println!("mazes:");
    for kind in MazeKind::ALL {
        println!("  {:<20} {}", kind.key(), kind.name());
    }
    Ok(())
}

fn cmd_sort(args: SortArgs, cfg: &TraceConfig) -> anyhow::Result<()> {
    let kind = algorithm(&args.algorithm, Category::Sorting)?;
    let values: Vec<i32> = if args.values.is_empty() {
        let mut rng = rng(args.seed);
        (0..args.len).map(|_| rng.random_range(1..100)).collect()
    } else {
        args.values
    };

    let steps = generate(kind, Input::Values(&values), cfg)?;
    let shown = if args.summary { &steps[steps.len() - 1..] } else { &steps[..] };
    for step in shown {
        if let Step::Sorting(s) = step {
            println!("{}", render::sort_step(s));
        }
    }
    println!(
        "{} steps, {:.4} ms per run",
        steps.len(),
        steps.last().map_or(0.0, |s| algotrace::Timed::execution_time(s))
    );
    Ok(())
}

fn build_grid(spec: &MazeSpec) -> anyhow::Result<GridArena> {
    match &spec.maze {
        None => Ok(GridArena::new(spec.rows, spec.cols)?),
        Some(key) => {
            let kind: MazeKind = key.parse()?;
            let maze = MazeGen::with_config(rng(spec.seed), MazeConfig::default())
                .generate(kind, spec.rows, spec.cols)
                .with_context(|| format!("generating {kind} maze"))?;
            if !maze.report.solvable {
                log::warn!("{kind} maze is not solvable");
            }
            Ok(maze.grid)
        }
    }
}

fn cmd_path(args: PathArgs, cfg: &TraceConfig) -> anyhow::Result<()> {
    let kind = algorithm(&args.algorithm, Category::Pathfinding)?;
    let grid = build_grid(&args.grid)?;
    let steps = generate(kind, Input::Grid(&grid), cfg)?;

    let shown = if args.all { &steps[..] } else { &steps[steps.len() - 1..] };
    for step in shown {
        let Step::Pathfinding(s) = step else {
            continue;
        };
        println!("{}", render::grid_step(s));
        println!("{}", s.message);
    }
    if let Some(Step::Pathfinding(last)) = steps.last() {
        println!(
            "visited {}, length {}, cost {:.3}, {:.4} ms per run",
            last.stats.nodes_visited,
            last.stats.path_length,
            last.stats.path_cost,
            last.stats.execution_time_ms
        );
    }
    Ok(())
}

fn cmd_maze(args: MazeArgs) -> anyhow::Result<()> {
    let kind: MazeKind = args.kind.parse()?;
    let maze = MazeGen::new(rng(args.seed)).generate(kind, args.rows, args.cols)?;
    println!("{}", maze.grid);
    let r = maze.report;
    println!(
        "{kind}: {} passages opened, {} repairs, solvable: {}",
        r.edges_opened, r.repair_attempts, r.solvable
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(1), LevelFilter::DEBUG);
        assert_eq!(log_level(2), LevelFilter::TRACE);
        assert_eq!(log_level(5), LevelFilter::TRACE);
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from(["algotrace", "-vv", "list"]);
        assert_eq!(log_level(cli.verbose), LevelFilter::TRACE);
        let cli = Cli::parse_from(["algotrace", "maze", "kruskal"]);
        assert_eq!(log_level(cli.verbose), LevelFilter::WARN);
    }
}
