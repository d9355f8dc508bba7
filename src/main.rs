use std::{io::IsTerminal, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use maze_carver::{Maze, MazeError, NullRenderer, Renderer, Solver, TracingRenderer};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Pixel offset of the maze's top-left corner, kept for renderers that draw on a canvas
const MARGIN: i32 = 50;

/// Generate a perfect maze and solve it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of rows
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(1..=100))]
    rows: u16,

    /// Number of columns
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(1..=100))]
    cols: u16,

    /// Cell size in pixels, for canvas renderers
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(5..=50))]
    cell_size: u32,

    /// Random seed; a fresh one is drawn and printed when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Solver to run: dfs, bfs, astar, or all
    #[arg(long, default_value = "all")]
    solver: String,

    /// Print without colours
    #[arg(long)]
    plain: bool,

    /// Log every generation and solving step (needs -vvv)
    #[arg(long)]
    trace_events: bool,

    /// Write logs to maze-carver.log in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(args: &Args) -> Option<WorkerGuard> {
    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    match &args.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "maze-carver.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn selected_solvers(name: &str) -> Result<Vec<Solver>, MazeError> {
    match name {
        "all" => Ok(Solver::ALL.to_vec()),
        name => Ok(vec![name.parse::<Solver>()?]),
    }
}

fn run(args: &Args) -> Result<(), MazeError> {
    // Fail on a bad solver name before spending time on generation
    let solvers = selected_solvers(&args.solver)?;

    let renderer: Box<dyn Renderer> = if args.trace_events {
        Box::new(TracingRenderer)
    } else {
        Box::new(NullRenderer)
    };
    let mut maze = Maze::with_renderer(
        (MARGIN, MARGIN),
        args.rows,
        args.cols,
        (args.cell_size, args.cell_size),
        args.seed,
        renderer,
    )?;
    tracing::info!(
        "Generated {}x{} maze with seed {}",
        maze.num_cols(),
        maze.num_rows(),
        maze.seed()
    );
    println!(
        "Maze {}x{} (seed {})",
        maze.num_cols(),
        maze.num_rows(),
        maze.seed()
    );

    let colored = !args.plain && std::io::stdout().is_terminal();
    for solver in solvers {
        let start = Instant::now();
        let solved = maze.solve(solver);
        let duration = start.elapsed().as_secs_f64();

        if solved {
            println!(
                "{}: Solved in {:.3} seconds! Path length: {}",
                solver,
                duration,
                maze.path().len()
            );
        } else {
            println!("{}: Not solvable. (Tried for {:.3}s)", solver, duration);
        }

        let view = maze.view();
        if colored {
            println!("{}", view);
        } else {
            println!("{}", view.plain());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
