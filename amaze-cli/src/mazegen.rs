//! Maze image generation.
//!
//! Uses an iterative recursive-backtracker walk over a lattice of rooms at
//! odd coordinates, carving the wall between a room and the randomly
//! chosen unvisited neighbor it steps to. The walk visits every room, so
//! the result is a perfect maze: every pair of rooms is connected by
//! exactly one route, and the entrance cut into the top border always
//! reaches the exit cut into the bottom border.

use amaze_core::{Cell, Maze, Point};
use rand::{Rng, RngExt};

/// Steps between lattice rooms, two cells apart.
const ROOM_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Generate a solvable maze of roughly the requested size.
///
/// Dimensions are raised to at least 3 and rounded up to odd so the
/// lattice fits. The entrance is the cell (1, 0) on the top border and the
/// exit the cell (W-2, H-1) on the bottom border.
pub fn generate<R: Rng>(width: i32, height: i32, rng: &mut R) -> Maze {
    let w = width.max(3) | 1;
    let h = height.max(3) | 1;
    let mut maze = Maze::new(w, h);

    // Rooms start as wall; carving one marks it visited.
    let start = Point::new(1, 1);
    maze.set(start, Cell::Passage);
    let mut stack = vec![start];

    while let Some(&room) = stack.last() {
        let mut unvisited = Vec::with_capacity(4);
        for (dx, dy) in ROOM_STEPS {
            let next = room.shift(dx, dy);
            if next.x > 0 && next.x < w && next.y > 0 && next.y < h
                && maze.at(next) == Some(Cell::Wall)
            {
                unvisited.push(next);
            }
        }

        if unvisited.is_empty() {
            stack.pop();
            continue;
        }
        let next = unvisited[rng.random_range(0..unvisited.len())];

        // Open the wall between the two rooms, then the room itself.
        maze.set(
            Point::new((room.x + next.x) / 2, (room.y + next.y) / 2),
            Cell::Passage,
        );
        maze.set(next, Cell::Passage);
        stack.push(next);
    }

    maze.set(Point::new(1, 0), Cell::Passage);
    maze.set(Point::new(w - 2, h - 1), Cell::Passage);
    maze
}

#[cfg(test)]
mod tests {
    use super::*;
    use amaze_graph::{Algorithm, MazeGraph, solve};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::image_io;

    fn generate_seeded(width: i32, height: i32, seed: u64) -> Maze {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate(width, height, &mut rng)
    }

    #[test]
    fn dimensions_are_normalized_to_odd() {
        let maze = generate_seeded(10, 8, 1);
        assert_eq!(maze.width(), 11);
        assert_eq!(maze.height(), 9);
        let tiny = generate_seeded(0, -5, 1);
        assert_eq!(tiny.width(), 3);
        assert_eq!(tiny.height(), 3);
    }

    #[test]
    fn entrance_and_exit_are_cut_into_the_borders() {
        let maze = generate_seeded(15, 11, 42);
        assert!(maze.is_passage(Point::new(1, 0)));
        assert!(maze.is_passage(Point::new(maze.width() - 2, maze.height() - 1)));
        // The rest of the border stays closed.
        for x in 0..maze.width() {
            if x != 1 {
                assert!(!maze.is_passage(Point::new(x, 0)));
            }
            if x != maze.width() - 2 {
                assert!(!maze.is_passage(Point::new(x, maze.height() - 1)));
            }
        }
        for y in 1..maze.height() - 1 {
            assert!(!maze.is_passage(Point::new(0, y)));
            assert!(!maze.is_passage(Point::new(maze.width() - 1, y)));
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_maze() {
        assert_eq!(generate_seeded(21, 15, 7), generate_seeded(21, 15, 7));
    }

    #[test]
    fn generated_mazes_are_solved_by_every_strategy() {
        for seed in 0..4 {
            let maze = generate_seeded(21, 15, seed);
            let graph = MazeGraph::from_maze(&maze);
            let dijkstra = solve(&graph, Algorithm::Dijkstra).unwrap();
            for algorithm in Algorithm::ALL {
                let path = solve(&graph, algorithm)
                    .unwrap_or_else(|| panic!("{algorithm} failed on seed {seed}"));
                assert!(path.cost() >= dijkstra.cost(), "{algorithm}, seed {seed}");
            }
            let astar = solve(&graph, Algorithm::AStar).unwrap();
            assert_eq!(astar.cost(), dijkstra.cost(), "seed {seed}");
        }
    }

    #[test]
    fn generated_mazes_survive_the_image_round_trip() {
        let maze = generate_seeded(15, 11, 3);
        let decoded = image_io::decode(&image_io::encode(&maze));
        assert_eq!(decoded, maze);

        let graph = MazeGraph::from_maze(&decoded);
        for algorithm in Algorithm::ALL {
            assert!(solve(&graph, algorithm).is_some(), "{algorithm}");
        }
    }
}
