use super::Direction;
use std::fmt;
use std::ops::{Add, Sub};

/// A Point on a two-dimensional grid.
///
/// `x` grows to the [`Right`](Direction::Right) and `y` grows [`Down`](Direction::Down),
/// which matches the order in which rows of text are read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2D {
    /// the column
    pub x: i32,
    /// the row
    pub y: i32,
}

impl Point2D {
    /// Creates a new Point2D
    pub const fn new(x: i32, y: i32) -> Point2D {
        Point2D { x, y }
    }

    /// The Point where the axes intersect
    pub const fn origin() -> Point2D {
        Point2D { x: 0, y: 0 }
    }

    /// The 4 Points directly above, right of, below and left of this Point.
    pub fn orthogonally_adjacent(self) -> [Point2D; 4] {
        Direction::CARDINAL.map(|dir| self.shift(dir))
    }

    /// The 8 Points surrounding this Point.
    ///
    /// The orthogonal neighbors come first, followed by the diagonals.
    /// ## Examples
    /// ```
    /// # use puzzle_paths::geometry::Point2D;
    /// let adjacent = Point2D::new(1, 1).adjacent();
    /// assert_eq!(adjacent.len(), 8);
    /// assert_eq!(adjacent[0], Point2D::new(1, 0));
    /// assert_eq!(adjacent[4], Point2D::new(0, 0));
    /// ```
    pub fn adjacent(self) -> [Point2D; 8] {
        let [up, right, down, left] = self.orthogonally_adjacent();
        [
            up,
            right,
            down,
            left,
            Point2D::new(self.x - 1, self.y - 1),
            Point2D::new(self.x + 1, self.y - 1),
            Point2D::new(self.x + 1, self.y + 1),
            Point2D::new(self.x - 1, self.y + 1),
        ]
    }

    /// The Manhattan Distance between the two Points. Saturates at `u32::MAX`.
    pub fn distance_between(self, other: Point2D) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The Chebyshev Distance between the two Points, i.e. the number of king moves.
    pub fn chebyshev_distance(self, other: Point2D) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// `true` if `other` is one of the 8 surrounding Points.
    pub fn is_adjacent_to(self, other: Point2D) -> bool {
        self != other && self.chebyshev_distance(other) <= 1
    }

    /// The Point one step in `direction`.
    pub fn shift(self, direction: Direction) -> Point2D {
        self.shift_by(direction, 1)
    }

    /// The Point `units` steps in `direction`.
    /// ## Examples
    /// ```
    /// # use puzzle_paths::geometry::{Direction, Point2D};
    /// let point = Point2D::origin().shift_by(Direction::BottomRight, 3);
    /// assert_eq!(point, Point2D::new(3, 3));
    /// ```
    pub fn shift_by(self, direction: Direction, units: i32) -> Point2D {
        let (dx, dy) = direction.offset();
        Point2D::new(self.x + dx * units, self.y + dy * units)
    }

    /// Where this Point lies horizontally relative to `other`, and how far away.
    ///
    /// `None` if both share the same column.
    pub fn x_relative_direction(self, other: Point2D) -> Option<(Direction, i32)> {
        let delta = self.x - other.x;
        match delta {
            0 => None,
            d if d > 0 => Some((Direction::Right, d)),
            d => Some((Direction::Left, -d)),
        }
    }

    /// Where this Point lies vertically relative to `other`, and how far away.
    ///
    /// `None` if both share the same row.
    pub fn y_relative_direction(self, other: Point2D) -> Option<(Direction, i32)> {
        let delta = self.y - other.y;
        match delta {
            0 => None,
            d if d > 0 => Some((Direction::Down, d)),
            d => Some((Direction::Up, -d)),
        }
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Point2D {
        Point2D::new(x, y)
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}, {})", self.x, self.y)
    }
}
