use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use amaze_cli::{image_io, mazegen};
use amaze_graph::{Algorithm, MazeGraph, solve};

#[derive(Parser, Debug)]
#[command(author, version, about = "Maze image solver", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a maze image and write a copy with the route marked in red.
    Solve {
        /// Maze image; exactly white pixels are passages.
        image: PathBuf,
        /// Search strategy: depth-first, breadth-first, dijkstra or astar.
        #[arg(short, long, default_value_t = Algorithm::DepthFirst)]
        algorithm: Algorithm,
        /// Output image path. Defaults to `<input stem>-solved.png`.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a solvable maze image.
    Generate {
        /// Width in cells, rounded up to odd.
        width: i32,
        /// Height in cells, rounded up to odd.
        height: i32,
        /// Seed for a reproducible layout.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output image path.
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Args::parse().command {
        Command::Solve {
            image,
            algorithm,
            output,
        } => run_solve(&image, algorithm, output),
        Command::Generate {
            width,
            height,
            seed,
            output,
        } => run_generate(width, height, seed, &output),
    }
}

fn run_solve(input: &Path, algorithm: Algorithm, output: Option<PathBuf>) -> Result<()> {
    let maze = image_io::load(input)?;
    info!(
        "loaded {} ({}x{} cells)",
        input.display(),
        maze.width(),
        maze.height()
    );

    let started = Instant::now();
    let graph = MazeGraph::from_maze(&maze);
    let found = solve(&graph, algorithm);
    let elapsed = started.elapsed().as_secs_f64();
    info!("graph compiled: {} nodes", graph.len());

    let Some(path) = found else {
        info!("{algorithm}: no path through this maze ({elapsed:.3}s)");
        return Ok(());
    };

    let out = output.unwrap_or_else(|| default_output_path(input));
    image_io::save(&maze.render_path(path.points()), &out)?;

    info!(
        "{algorithm}: path {} nodes / {} cells, {elapsed:.3}s",
        path.len(),
        path.cost() + 1
    );
    info!("wrote {}", out.display());
    Ok(())
}

fn run_generate(width: i32, height: i32, seed: Option<u64>, output: &Path) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = SmallRng::seed_from_u64(seed);
    let maze = mazegen::generate(width, height, &mut rng);
    image_io::save(&maze, output)?;
    info!(
        "wrote {} ({}x{}, seed {seed})",
        output.display(),
        maze.width(),
        maze.height()
    );
    Ok(())
}

/// `maze.png` becomes `maze-solved.png` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("maze");
    input.with_file_name(format!("{stem}-solved.png"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_input() {
        assert_eq!(
            default_output_path(Path::new("mazes/big.png")),
            PathBuf::from("mazes/big-solved.png")
        );
        assert_eq!(
            default_output_path(Path::new("flat.png")),
            PathBuf::from("flat-solved.png")
        );
    }
}
