/// Fuzzes the pathfinding system by checking for many random grids that a
/// path is found exactly when the goal shares a connected component with the
/// start, that every returned path is a valid walk over open cells, and that
/// its hop count matches a breadth-first distance oracle.
use grid_util::grid::Grid;
use grid_util::point::Point;
use maze_pathfinding::MazeGrid;
use rand::prelude::*;
use std::collections::VecDeque;

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> MazeGrid {
    let mut maze: MazeGrid = MazeGrid::new(w, h, false);
    for x in 0..w {
        for y in 0..h {
            maze.set(x, y, rng.gen_bool(0.4));
        }
    }
    maze
}

fn visualize_grid(maze: &MazeGrid, start: &Point, end: &Point) {
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if maze.get(x as usize, y as usize) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

/// Breadth-first hop count from `start` to `goal`, or [None] if unreachable.
/// Serves as the shortest-distance oracle the A* results are held against.
fn bfs_distance(maze: &MazeGrid, start: Point, goal: Point) -> Option<i32> {
    let w = maze.width();
    let h = maze.height();
    let idx = |p: &Point| p.y as usize * w + p.x as usize;
    let mut dist = vec![-1i32; w * h];
    dist[idx(&start)] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return Some(dist[idx(&current)]);
        }
        let d = dist[idx(&current)];
        for next in [
            Point::new(current.x, current.y - 1),
            Point::new(current.x, current.y + 1),
            Point::new(current.x - 1, current.y),
            Point::new(current.x + 1, current.y),
        ] {
            if next.x < 0 || next.y < 0 || next.x as usize >= w || next.y as usize >= h {
                continue;
            }
            if maze.get(next.x as usize, next.y as usize) || dist[idx(&next)] != -1 {
                continue;
            }
            dist[idx(&next)] = d + 1;
            queue.push_back(next);
        }
    }
    None
}

fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[test]
fn fuzz_completeness() {
    const N: usize = 10;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut maze = random_grid(N, N, &mut rng);
        maze.set(start.x as usize, start.y as usize, false);
        maze.set(end.x as usize, end.y as usize, false);
        maze.generate_components();
        let reachable = maze.reachable(&start, &end);
        let path = maze.find_path(start, end).unwrap();
        // Show the grid if the component check and the search disagree
        if path.is_some() != reachable {
            visualize_grid(&maze, &start, &end);
        }
        assert!(path.is_some() == reachable);
    }
}

#[test]
fn fuzz_optimality_and_validity() {
    const N: usize = 8;
    const N_GRIDS: usize = 5000;
    let mut rng = StdRng::seed_from_u64(1);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut maze = random_grid(N, N, &mut rng);
        maze.set(start.x as usize, start.y as usize, false);
        maze.set(end.x as usize, end.y as usize, false);
        maze.generate_components();
        let oracle = bfs_distance(&maze, start, end);
        let path = maze.find_path(start, end).unwrap();
        match (oracle, &path) {
            (Some(hops), Some(path)) => {
                if path.len() as i32 - 1 != hops {
                    println!("Expected {} hops, got {:?}", hops, path);
                    visualize_grid(&maze, &start, &end);
                }
                assert_eq!(path.len() as i32 - 1, hops);
                assert_eq!(*path.first().unwrap(), start);
                assert_eq!(*path.last().unwrap(), end);
                for p in path {
                    assert!(!maze.get(p.x as usize, p.y as usize));
                }
                for pair in path.windows(2) {
                    assert_eq!(manhattan(&pair[0], &pair[1]), 1);
                }
            }
            (None, None) => {}
            _ => {
                visualize_grid(&maze, &start, &end);
                panic!("oracle {:?} disagrees with search {:?}", oracle, path);
            }
        }
    }
}

#[test]
fn fuzz_determinism() {
    const N: usize = 10;
    const N_GRIDS: usize = 200;
    let mut rng = StdRng::seed_from_u64(2);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut maze = random_grid(N, N, &mut rng);
        maze.set(start.x as usize, start.y as usize, false);
        maze.set(end.x as usize, end.y as usize, false);
        maze.generate_components();
        let first = maze.find_path(start, end).unwrap();
        let second = maze.find_path(start, end).unwrap();
        assert_eq!(first, second);
    }
}
