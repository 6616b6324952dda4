//! Points and Directions on a two-dimensional grid.
//!
//! These are the building blocks most search states are made of: a position, and often the
//! direction something is facing.

mod direction;
pub use self::direction::Direction;

mod point;
pub use self::point::Point2D;
