use grid_util::point::Point;
use maze_pathfinding::MazeGrid;

// In this demo the 7x7 demonstration maze is solved from the top-left to the
// bottom-right corner and the resulting path is drawn over the maze, where
// - # marks a blocked cell
// - S marks the start
// - G marks the goal
// - * marks the path between them
//
// Nodes have a 4-neighborhood.

const MAZE: [[u8; 7]; 7] = [
    [0, 0, 0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 0, 0, 0],
    [1, 1, 0, 0, 0, 1, 0],
    [0, 0, 0, 1, 0, 0, 0],
];

fn draw(maze: &[[u8; 7]; 7], path: &[Point], start: Point, goal: Point) {
    for (y, row) in maze.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            if p == start {
                print!("S");
            } else if p == goal {
                print!("G");
            } else if path.contains(&p) {
                print!("*");
            } else if value != 0 {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

fn main() {
    let maze = MazeGrid::from_rows(&MAZE);
    println!("{}", maze);
    let start = Point::new(0, 0);
    let goal = Point::new(6, 6);
    match maze.find_path(start, goal).unwrap() {
        Some(path) => {
            println!("Solved in {} hops:", path.len() - 1);
            draw(&MAZE, &path, start, goal);
        }
        None => println!("No path found."),
    }
}
