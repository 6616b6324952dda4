use crate::errors::GeometryError;

/// One of the eight compass directions, as seen on a grid printed top to bottom.
///
/// Every Direction has a clockwise angle from [`Up`](Direction::Up), which is what
/// [`rotate`](Direction::rotate) operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// 0°, towards smaller `y`
    Up,
    /// 45°
    TopRight,
    /// 90°, towards larger `x`
    Right,
    /// 135°
    BottomRight,
    /// 180°, towards larger `y`
    Down,
    /// 225°
    BottomLeft,
    /// 270°, towards smaller `x`
    Left,
    /// 315°
    TopLeft,
}
pub use self::Direction::*;

impl Direction {
    /// The four directions along the axes, clockwise from [`Up`](Direction::Up).
    pub const CARDINAL: [Direction; 4] = [Up, Right, Down, Left];

    /// All eight directions, clockwise from [`Up`](Direction::Up).
    pub const ALL: [Direction; 8] = [
        Up,
        TopRight,
        Right,
        BottomRight,
        Down,
        BottomLeft,
        Left,
        TopLeft,
    ];

    /// The clockwise angle from [`Up`](Direction::Up) in degrees.
    pub fn degrees(self) -> i32 {
        self as i32 * 45
    }

    /// Rotates by `angle` degrees. Positive is clockwise, negative counter-clockwise.
    ///
    /// ## Examples
    /// ```
    /// # use puzzle_paths::geometry::Direction;
    /// assert_eq!(Direction::Right.rotate(90), Ok(Direction::Down));
    /// assert_eq!(Direction::Up.rotate(-45), Ok(Direction::TopLeft));
    /// assert!(Direction::Up.rotate(30).is_err());
    /// ```
    pub fn rotate(self, angle: i32) -> Result<Direction, GeometryError> {
        if angle % 45 != 0 {
            return Err(GeometryError::InvalidAngle(angle));
        }
        let steps = (self as i32 + angle / 45).rem_euclid(8);
        Ok(Direction::ALL[steps as usize])
    }

    /// The Direction 90° clockwise.
    pub fn turn_right(self) -> Direction {
        Direction::ALL[(self as usize + 2) % 8]
    }

    /// The Direction 90° counter-clockwise.
    pub fn turn_left(self) -> Direction {
        Direction::ALL[(self as usize + 6) % 8]
    }

    /// The Direction 180° around.
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 4) % 8]
    }

    /// `true` if `other` points the exact opposite way.
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The `(dx, dy)` of a single step in this Direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            TopRight => (1, -1),
            Right => (1, 0),
            BottomRight => (1, 1),
            Down => (0, 1),
            BottomLeft => (-1, 1),
            Left => (-1, 0),
            TopLeft => (-1, -1),
        }
    }

    /// `true` for [`Up`](Direction::Up) and [`Down`](Direction::Down).
    pub fn is_vertical(self) -> bool {
        self == Up || self == Down
    }

    /// `true` for [`Left`](Direction::Left) and [`Right`](Direction::Right).
    pub fn is_horizontal(self) -> bool {
        self == Left || self == Right
    }
}
