use hashbrown::HashSet;
use puzzle_paths::prelude::*;

const FIRST_MAZE: [&str; 15] = [
    "###############",
    "#.......#....E#",
    "#.#.###.#.###.#",
    "#.....#.#...#.#",
    "#.###.#####.#.#",
    "#.#.#.......#.#",
    "#.#.#####.###.#",
    "#...........#.#",
    "###.#.#####.#.#",
    "#...#.....#.#.#",
    "#.#.#.###.#.#.#",
    "#.....#...#.#.#",
    "#.###.#.#.#.#.#",
    "#S..#.....#...#",
    "###############",
];

const SECOND_MAZE: [&str; 17] = [
    "#################",
    "#...#...#...#..E#",
    "#.#.#.#.#.#.#.#.#",
    "#.#.#.#...#...#.#",
    "#.#.#.#.###.#.#.#",
    "#...#.#.#.....#.#",
    "#.#.#.#.#.#####.#",
    "#.#...#.#.#.....#",
    "#.#.#####.#.###.#",
    "#.#.#.......#...#",
    "#.#.###.#####.###",
    "#.#.#...#.....#.#",
    "#.#.#.#####.###.#",
    "#.#.#.........#.#",
    "#.#.#.#########.#",
    "#S#.............#",
    "#################",
];

const STEP_COST: Cost = 1;
const TURN_COST: Cost = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tile {
    Wall,
    Open,
    Start,
    End,
}

impl Tile {
    fn parse(c: char) -> Result<Tile, char> {
        match c {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Open),
            'S' => Ok(Tile::Start),
            'E' => Ok(Tile::End),
            other => Err(other),
        }
    }

    fn is_traversable(self) -> bool {
        self != Tile::Wall
    }
}

type Reindeer = (Point2D, Direction);

struct ReindeerMaze {
    tiles: GridMap<Tile>,
}

impl ReindeerMaze {
    fn new(rows: &[&str]) -> ReindeerMaze {
        let tiles = GridMap::try_from_rows(rows, Tile::parse).expect("valid maze tiles");
        ReindeerMaze { tiles }
    }

    fn start(&self) -> Reindeer {
        let (position, _) = self.tiles.find_tile(|&tile| tile == Tile::Start).unwrap();
        (position, Direction::Right)
    }

    fn moves(&self, node: &SearchNode<Reindeer>) -> Vec<SearchNode<Reindeer>> {
        let (position, facing) = node.value;
        let mut moves = Vec::with_capacity(3);

        let ahead = position.shift(facing);
        if self.tiles.tile_or(ahead, &Tile::Wall).is_traversable() {
            moves.push(SearchNode::new((ahead, facing), STEP_COST));
        }

        moves.extend(
            Direction::CARDINAL
                .into_iter()
                .filter(|&direction| direction != facing && !direction.is_opposite(facing))
                .map(|direction| SearchNode::new((position, direction), TURN_COST)),
        );

        moves
    }

    fn is_end(&self, node: &SearchNode<Reindeer>) -> bool {
        self.tiles.tile(node.value.0) == Some(&Tile::End)
    }

    fn lowest_score(&self) -> SearchResult<Cost> {
        dijkstra_search([self.start()], |node| self.moves(node), |node| self.is_end(node))
    }

    fn best_paths(&self) -> SearchResult<ShortestPaths<Reindeer>> {
        let _ = env_logger::builder().is_test(true).try_init();
        dijkstra_all_paths([self.start()], |node| self.moves(node), |node| self.is_end(node))
    }

    fn best_path_tiles(&self) -> usize {
        let best = self.best_paths().unwrap();
        let tiles: HashSet<Point2D> = best.values().into_iter().map(|(pos, _)| pos).collect();
        tiles.len()
    }

    /// Adds up the cost of a Path given as a set of states, by walking it from the start.
    fn path_score(&self, path: &HashSet<Reindeer>) -> Cost {
        let mut current = self.start();
        let mut visited = HashSet::new();
        visited.insert(current);
        let mut score = 0;
        while self.tiles.tile(current.0) != Some(&Tile::End) {
            let step = self
                .moves(&SearchNode::new(current, 0))
                .into_iter()
                .find(|next| path.contains(&next.value) && !visited.contains(&next.value))
                .expect("path is connected");
            score += step.distance;
            current = step.value;
            visited.insert(current);
        }
        assert_eq!(visited.len(), path.len());
        score
    }
}

#[test]
fn lowest_score_first_maze() {
    let maze = ReindeerMaze::new(&FIRST_MAZE);
    assert_eq!(maze.lowest_score(), Ok(7036));
}

#[test]
fn lowest_score_second_maze() {
    let maze = ReindeerMaze::new(&SECOND_MAZE);
    assert_eq!(maze.lowest_score(), Ok(11048));
}

#[test]
fn best_path_tiles_first_maze() {
    let maze = ReindeerMaze::new(&FIRST_MAZE);
    assert_eq!(maze.best_path_tiles(), 45);
}

#[test]
fn best_path_tiles_second_maze() {
    let maze = ReindeerMaze::new(&SECOND_MAZE);
    assert_eq!(maze.best_path_tiles(), 64);
}

#[test]
fn both_searches_agree() {
    for rows in [&FIRST_MAZE[..], &SECOND_MAZE[..]] {
        let maze = ReindeerMaze::new(rows);
        let best = maze.best_paths().unwrap();
        assert_eq!(Ok(best.distance), maze.lowest_score());
    }
}

#[test]
fn every_best_path_has_the_lowest_score() {
    for rows in [&FIRST_MAZE[..], &SECOND_MAZE[..]] {
        let maze = ReindeerMaze::new(rows);
        let best = maze.best_paths().unwrap();
        assert!(!best.is_empty());
        for path in best.iter() {
            assert_eq!(maze.path_score(path), best.distance);
        }
    }
}

#[test]
fn walled_in_reindeer() {
    let maze = ReindeerMaze::new(&["#####", "#S#E#", "#####"]);
    assert_eq!(maze.lowest_score(), Err(SearchError::Unreachable));
    assert_eq!(
        maze.best_paths().map(|best| best.distance),
        Err(SearchError::Unreachable)
    );
}

#[test]
fn reindeer_starting_on_the_end() {
    let mut maze = ReindeerMaze::new(&["###", "#S#", "###"]);
    let start = maze.start();
    maze.tiles.add_tile(start.0, Tile::End);
    // find_tile no longer sees a start, so search from the former start directly
    let result = dijkstra_search([start], |node| maze.moves(node), |node| maze.is_end(node));
    assert_eq!(result, Ok(0));
}
