//! Simple geometry primitives.

use crate::sprites::Drawable;
use crate::{HEIGHT, WIDTH};

/// A tiny absolute position vector.
///
/// Coordinates are signed; sprites are allowed to hang off the edges of the screen.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A tiny absolute rectangle based on two `Point`s.
///
/// `p1` is the upper-left corner (inclusive) and `p2` is the lower-right corner (exclusive).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rect {
    pub p1: Point,
    pub p2: Point,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::SubAssign for Point {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl std::ops::Mul<i32> for Point {
    type Output = Self;

    fn mul(self, scale: i32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl std::ops::Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Rect {
    /// Create a rectangle from two `Point`s.
    pub const fn new(p1: Point, p2: Point) -> Rect {
        Rect { p1, p2 }
    }

    /// Create a rectangle the size of a `Drawable`, centered on `center`.
    pub fn around<D>(center: Point, drawable: &D) -> Rect
    where
        D: Drawable,
    {
        Rect::with_center(center, drawable.width() as i32, drawable.height() as i32)
    }

    /// Create a rectangle of the given size, centered on `center`.
    ///
    /// Odd sizes put the extra pixel on the right and bottom sides.
    pub fn with_center(center: Point, width: i32, height: i32) -> Rect {
        let p1 = center - Point::new(width / 2, height / 2);

        Rect::new(p1, p1 + Point::new(width, height))
    }

    pub fn width(&self) -> i32 {
        self.p2.x - self.p1.x
    }

    pub fn height(&self) -> i32 {
        self.p2.y - self.p1.y
    }

    /// The center point, rounded toward the upper-left corner.
    pub fn center(&self) -> Point {
        self.p1 + Point::new(self.width() / 2, self.height() / 2)
    }

    /// Move the rectangle in place.
    pub fn translate(&mut self, offset: Point) {
        self.p1 += offset;
        self.p2 += offset;
    }

    /// Test for intersections between two rectangles.
    ///
    /// Rectangles intersect when the geometry of either overlaps. Rectangles that merely share an
    /// edge do not intersect, and neither does an empty rectangle.
    pub fn intersects(&self, other: Rect) -> bool {
        let (top1, right1, bottom1, left1) = self.get_bounds();
        let (top2, right2, bottom2, left2) = other.get_bounds();

        !self.is_empty()
            && !other.is_empty()
            && bottom1 > top2
            && bottom2 > top1
            && right1 > left2
            && right2 > left1
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Compute the bounding box for this rectangle.
    ///
    /// # Returns
    ///
    /// Tuple of `(top, right, bottom, left)`, e.g. in CSS clockwise order.
    fn get_bounds(&self) -> (i32, i32, i32, i32) {
        (self.p1.y, self.p2.x, self.p2.y, self.p1.x)
    }
}

/// Test whether a rectangle lies within the playfield.
///
/// # Returns
///
/// Tuple of `(horizontal, vertical)`. Each axis is `true` when the rectangle fits inside
/// `[0, WIDTH]` or `[0, HEIGHT]` respectively.
pub fn in_bounds(rect: &Rect) -> (bool, bool) {
    let (top, right, bottom, left) = rect.get_bounds();

    let horizontal = left >= 0 && right <= WIDTH as i32;
    let vertical = top >= 0 && bottom <= HEIGHT as i32;

    (horizontal, vertical)
}

/// The whole playfield as a rectangle.
pub fn playfield() -> Rect {
    Rect::new(Point::new(0, 0), Point::new(WIDTH as i32, HEIGHT as i32))
}
