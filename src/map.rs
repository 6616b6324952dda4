//! Sparse two-dimensional Maps of Tiles.

use crate::geometry::Point2D;
use crate::neighbors::Neighborhood;
use hashbrown::{HashMap, HashSet};
use std::fmt;

/// A Map that stores Tiles of type `T` at [`Point2D`] positions.
///
/// Positions without a Tile are simply absent, so the Map does not have to be rectangular
/// and may grow in any direction. Searches usually use [`has_recorded`](GridMap::has_recorded)
/// to decide whether a position can be entered and [`tile`](GridMap::tile) to look up its cost.
///
/// ## Examples
/// ```
/// # use puzzle_paths::{geometry::Point2D, map::GridMap};
/// let map = GridMap::from_rows(["#.#", "..#"], |c| c);
///
/// assert_eq!(map.len(), 6);
/// assert_eq!(map.tile(Point2D::new(1, 0)), Some(&'.'));
/// assert_eq!(map.tile(Point2D::new(3, 0)), None);
/// assert_eq!(map.to_string(), "# . #\n. . #\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap<T> {
    tiles: HashMap<Point2D, T>,
}

impl<T> Default for GridMap<T> {
    fn default() -> GridMap<T> {
        GridMap {
            tiles: HashMap::new(),
        }
    }
}

impl<T> GridMap<T> {
    /// Creates an empty GridMap
    pub fn new() -> GridMap<T> {
        GridMap::default()
    }

    /// Creates a GridMap from rows of characters.
    ///
    /// The character in column `x` of row `y` is turned into a Tile by `tile_fn` and stored at `(x, y)`.
    pub fn from_rows<R, S>(rows: R, mut tile_fn: impl FnMut(char) -> T) -> GridMap<T>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = GridMap::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, c) in row.as_ref().chars().enumerate() {
                map.add_tile(Point2D::new(x as i32, y as i32), tile_fn(c));
            }
        }
        map
    }

    /// Like [`from_rows`](GridMap::from_rows), but stops at the first character `tile_fn` rejects.
    /// ## Examples
    /// ```
    /// # use puzzle_paths::map::GridMap;
    /// let parse = |c: char| c.to_digit(10).ok_or(c);
    ///
    /// let map = GridMap::try_from_rows(["12", "34"], parse).unwrap();
    /// assert_eq!(map.len(), 4);
    ///
    /// assert_eq!(GridMap::try_from_rows(["1x"], parse), Err('x'));
    /// ```
    pub fn try_from_rows<R, S, E>(
        rows: R,
        mut tile_fn: impl FnMut(char) -> Result<T, E>,
    ) -> Result<GridMap<T>, E>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = GridMap::new();
        for (y, row) in rows.into_iter().enumerate() {
            for (x, c) in row.as_ref().chars().enumerate() {
                map.add_tile(Point2D::new(x as i32, y as i32), tile_fn(c)?);
            }
        }
        Ok(map)
    }

    /// Stores `tile` at `position`, returning the Tile that was there before, if any.
    pub fn add_tile(&mut self, position: Point2D, tile: T) -> Option<T> {
        self.tiles.insert(position, tile)
    }

    /// Removes the Tile at `position` and returns it.
    pub fn remove_tile(&mut self, position: Point2D) -> Option<T> {
        self.tiles.remove(&position)
    }

    /// The Tile at `position`, if one is recorded.
    pub fn tile(&self, position: Point2D) -> Option<&T> {
        self.tiles.get(&position)
    }

    /// The Tile at `position`, or `default` if none is recorded.
    pub fn tile_or<'a>(&'a self, position: Point2D, default: &'a T) -> &'a T {
        self.tiles.get(&position).unwrap_or(default)
    }

    /// `true` if a Tile is recorded at `position`.
    pub fn has_recorded(&self, position: Point2D) -> bool {
        self.tiles.contains_key(&position)
    }

    /// `true` if at least one Tile equals `tile`.
    pub fn has_tile(&self, tile: &T) -> bool
    where
        T: PartialEq,
    {
        self.tiles.values().any(|t| t == tile)
    }

    /// The number of recorded Tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// `true` if no Tiles are recorded.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Removes all Tiles.
    pub fn clear(&mut self) {
        self.tiles.clear()
    }

    /// An Iterator over all positions and their Tiles, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point2D, &T)> + '_ {
        self.tiles.iter().map(|(&pos, tile)| (pos, tile))
    }

    /// An Iterator over all recorded positions, in no particular order.
    pub fn positions(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.tiles.keys().copied()
    }

    /// Finds the first Tile matching `predicate`, reading the Map row by row.
    pub fn find_tile(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<(Point2D, &T)> {
        self.iter()
            .filter(|(_, tile)| predicate(tile))
            .min_by_key(|(pos, _)| (pos.y, pos.x))
    }

    /// All Tiles matching `predicate`.
    pub fn filter_tiles(&self, mut predicate: impl FnMut(&T) -> bool) -> HashMap<Point2D, &T> {
        self.iter().filter(|(_, tile)| predicate(tile)).collect()
    }

    /// The Tiles at the given `positions`. Positions without a Tile are left out.
    pub fn filter_points<'a>(
        &'a self,
        positions: impl IntoIterator<Item = Point2D>,
    ) -> HashMap<Point2D, &'a T> {
        positions
            .into_iter()
            .filter_map(|pos| self.tile(pos).map(|tile| (pos, tile)))
            .collect()
    }

    /// The neighbors of `position` according to `neighborhood` that have a Tile recorded.
    pub fn neighbors<'a, N: Neighborhood>(
        &'a self,
        position: Point2D,
        neighborhood: &N,
    ) -> impl Iterator<Item = Point2D> + 'a {
        self.recorded(neighborhood.get_all_neighbors(position))
    }

    fn recorded<'a>(
        &'a self,
        positions: Box<dyn Iterator<Item = Point2D>>,
    ) -> impl Iterator<Item = Point2D> + 'a {
        positions.filter(move |&pos| self.has_recorded(pos))
    }

    /// The recorded Tiles in the 8 surrounding positions of any of `positions`.
    pub fn adjacent_tiles(&self, positions: &HashSet<Point2D>) -> HashMap<Point2D, &T> {
        self.filter_points(positions.iter().flat_map(|pos| pos.adjacent()))
    }

    /// The recorded Tiles in the 4 orthogonal positions of any of `positions`.
    pub fn orthogonal_tiles(&self, positions: &HashSet<Point2D>) -> HashMap<Point2D, &T> {
        self.filter_points(positions.iter().flat_map(|pos| pos.orthogonally_adjacent()))
    }

    /// The smallest recorded `x`.
    pub fn x_min(&self) -> Option<i32> {
        self.tiles.keys().map(|pos| pos.x).min()
    }

    /// The largest recorded `x`.
    pub fn x_max(&self) -> Option<i32> {
        self.tiles.keys().map(|pos| pos.x).max()
    }

    /// The smallest recorded `y`.
    pub fn y_min(&self) -> Option<i32> {
        self.tiles.keys().map(|pos| pos.y).min()
    }

    /// The largest recorded `y`.
    pub fn y_max(&self) -> Option<i32> {
        self.tiles.keys().map(|pos| pos.y).max()
    }
}

impl<T> FromIterator<(Point2D, T)> for GridMap<T> {
    fn from_iter<I: IntoIterator<Item = (Point2D, T)>>(iter: I) -> GridMap<T> {
        GridMap {
            tiles: iter.into_iter().collect(),
        }
    }
}

use std::ops::Index;
impl<T> Index<Point2D> for GridMap<T> {
    type Output = T;
    /// ## Panics
    /// if no Tile is recorded at `position`. Use [`tile`](GridMap::tile) to check instead.
    #[track_caller]
    fn index(&self, position: Point2D) -> &T {
        match self.tiles.get(&position) {
            Some(tile) => tile,
            None => panic!("Map does not contain a tile at {}", position),
        }
    }
}

impl<T: fmt::Display> fmt::Display for GridMap<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let (x_min, x_max) = (self.x_min().unwrap_or(0), self.x_max().unwrap_or(0));
        let (y_min, y_max) = (self.y_min().unwrap_or(0), self.y_max().unwrap_or(0));
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                if x != x_min {
                    write!(fmt, " ")?;
                }
                match self.tile(Point2D::new(x, y)) {
                    Some(tile) => write!(fmt, "{}", tile)?,
                    None => write!(fmt, " ")?,
                }
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
