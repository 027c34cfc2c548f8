use grid_util::grid::Grid;
use grid_util::point::Point;
use maze_pathfinding::MazeGrid;

// In this demo a wall seals the goal corner off completely, so the solver
// reports the no-path outcome instead of a path. The connected-component
// check answers this without expanding a single search node.

fn main() {
    let mut maze: MazeGrid = MazeGrid::new(5, 5, false);
    for y in 0..5 {
        maze.set(3, y, true);
    }
    maze.generate_components();
    println!("{}", maze);
    let start = Point::new(0, 0);
    let goal = Point::new(4, 4);
    match maze.find_path(start, goal).unwrap() {
        Some(path) => println!("Solved in {} hops: {:?}", path.len() - 1, path),
        None => println!("No path found."),
    }
}
