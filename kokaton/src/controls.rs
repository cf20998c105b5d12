use crate::geo::Point;
use crate::PLAYER_SPEED;

/// Player control inputs.
#[derive(Clone, Debug, Default)]
pub struct Controls {
    /// Movement keys currently held.
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Launch a beam. This is an edge, not a level; it is only set on the tick the key went down.
    pub fire: bool,
}

/// The eight directions the player can face.
///
/// Listed counter-clockwise, starting from the right.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Controls {
    /// Sum the movement of every held key.
    ///
    /// Opposite keys cancel each other out.
    pub fn movement(&self) -> Point {
        let mut mv = Point::default();

        if self.up {
            mv.y -= PLAYER_SPEED;
        }
        if self.down {
            mv.y += PLAYER_SPEED;
        }
        if self.left {
            mv.x -= PLAYER_SPEED;
        }
        if self.right {
            mv.x += PLAYER_SPEED;
        }

        mv
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Classify a movement vector by the sign of each component.
    ///
    /// Returns `None` for the zero vector.
    pub fn from_vector(v: Point) -> Option<Direction> {
        use Direction::*;

        match (v.x.signum(), v.y.signum()) {
            (1, 0) => Some(Right),
            (1, -1) => Some(UpRight),
            (0, -1) => Some(Up),
            (-1, -1) => Some(UpLeft),
            (-1, 0) => Some(Left),
            (-1, 1) => Some(DownLeft),
            (0, 1) => Some(Down),
            (1, 1) => Some(DownRight),
            _ => None,
        }
    }

    /// The per-tick movement vector for this direction, in pixels.
    pub fn vector(self) -> Point {
        use Direction::*;

        let s = PLAYER_SPEED;
        match self {
            Right => Point::new(s, 0),
            UpRight => Point::new(s, -s),
            Up => Point::new(0, -s),
            UpLeft => Point::new(-s, -s),
            Left => Point::new(-s, 0),
            DownLeft => Point::new(-s, s),
            Down => Point::new(0, s),
            DownRight => Point::new(s, s),
        }
    }

    /// Position in [`Direction::ALL`], for table lookups.
    pub fn index(self) -> usize {
        self as usize
    }
}
