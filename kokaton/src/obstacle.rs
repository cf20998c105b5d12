use crate::geo::{in_bounds, Point, Rect};
use crate::sprites::Sprite;
use crate::{Entity, HEIGHT, OBSTACLE_SPEED, WIDTH};
use randomize::PCG32;

/// Bombs are one of these colors.
pub const PALETTE: [[u8; 3]; 6] = [
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
];

/// Smallest and largest bomb radius, inclusive.
const MIN_RADIUS: usize = 10;
const MAX_RADIUS: usize = 100;

/// A bouncing bomb.
#[derive(Debug)]
pub struct Obstacle {
    rect: Rect,
    velocity: Point,
    radius: usize,
    color: [u8; 3],
    sprite: Sprite,
}

impl Obstacle {
    pub fn new(center: Point, radius: usize, color: [u8; 3], velocity: Point) -> Obstacle {
        let sprite = Sprite::circle(radius, color);
        let size = (radius * 2) as i32;

        Obstacle {
            rect: Rect::with_center(center, size, size),
            velocity,
            radius,
            color,
            sprite,
        }
    }

    /// Create a bomb with random size, color, position and heading.
    ///
    /// The center may be anywhere on the playfield, edges included.
    pub fn random(prng: &mut PCG32) -> Obstacle {
        let radius = MIN_RADIUS + prng.next_u32() as usize % (MAX_RADIUS - MIN_RADIUS + 1);
        let color = PALETTE[prng.next_u32() as usize % PALETTE.len()];
        let center = Point::new(
            (prng.next_u32() % (WIDTH as u32 + 1)) as i32,
            (prng.next_u32() % (HEIGHT as u32 + 1)) as i32,
        );
        let velocity = Point::new(random_sign(prng), random_sign(prng)) * OBSTACLE_SPEED;

        Obstacle::new(center, radius, color, velocity)
    }

    /// Bounce off the edges of the playfield, then move.
    pub fn update(&mut self) {
        let (horizontal, vertical) = in_bounds(&self.rect);
        if !horizontal {
            self.velocity.x = -self.velocity.x;
        }
        if !vertical {
            self.velocity.y = -self.velocity.y;
        }

        self.rect.translate(self.velocity);
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn color(&self) -> [u8; 3] {
        self.color
    }
}

impl Entity for Obstacle {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

fn random_sign(prng: &mut PCG32) -> i32 {
    if prng.next_u32() & 1 == 0 {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_bombs_stay_in_range() {
        let mut prng = PCG32::seed(6_364_136_223_846_793_005, 1);

        for _ in 0..200 {
            let bomb = Obstacle::random(&mut prng);
            let center = bomb.rect().center();

            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&bomb.radius()));
            assert!(PALETTE.contains(&bomb.color()));
            assert!((0..=WIDTH as i32).contains(&center.x));
            assert!((0..=HEIGHT as i32).contains(&center.y));
            assert_eq!(bomb.velocity().x.abs(), OBSTACLE_SPEED);
            assert_eq!(bomb.velocity().y.abs(), OBSTACLE_SPEED);
            assert_eq!(bomb.rect().width(), bomb.radius() as i32 * 2);
        }
    }

    #[test]
    fn bounces_off_left_edge() {
        let mut bomb = Obstacle::new(Point::new(5, 450), 10, PALETTE[0], Point::new(-5, 5));

        bomb.update();

        assert_eq!(bomb.velocity(), Point::new(5, 5));
        assert_eq!(bomb.rect().center(), Point::new(10, 455));
    }

    #[test]
    fn bounces_off_bottom_edge() {
        let bottom = HEIGHT as i32 - 5;
        let mut bomb = Obstacle::new(Point::new(800, bottom), 10, PALETTE[1], Point::new(5, 5));

        bomb.update();

        assert_eq!(bomb.velocity(), Point::new(5, -5));
        assert_eq!(bomb.rect().center(), Point::new(805, bottom - 5));
    }

    #[test]
    fn reflection_keeps_speed() {
        let mut bomb = Obstacle::new(Point::new(20, 20), 15, PALETTE[2], Point::new(-5, -5));
        let mut flips = 0;
        let mut last = bomb.velocity();

        for _ in 0..1000 {
            bomb.update();

            let v = bomb.velocity();
            assert_eq!(v.x.abs(), OBSTACLE_SPEED);
            assert_eq!(v.y.abs(), OBSTACLE_SPEED);
            if v.x != last.x {
                flips += 1;
            }
            last = v;
        }

        assert!(flips > 0);
    }

    #[test]
    fn flips_once_per_wall() {
        let mut bomb = Obstacle::new(Point::new(20, 450), 15, PALETTE[4], Point::new(-5, 5));
        let width = bomb.rect().width();
        let mut flips = Vec::new();
        let mut last = bomb.velocity().x;

        for tick in 1..=2000 {
            bomb.update();

            if bomb.velocity().x != last {
                flips.push(tick);
                last = bomb.velocity().x;
            }
        }

        // The bomb overshoots each wall by one step before it turns around
        let crossing = (WIDTH as i32 - width + 2 * OBSTACLE_SPEED) / OBSTACLE_SPEED;

        assert_eq!(flips[0], 3);
        assert!(flips.len() > 5);
        for pair in flips.windows(2) {
            assert!(pair[1] - pair[0] > 1, "flipped twice in a row: {:?}", pair);
            assert_eq!(pair[1] - pair[0], crossing);
        }
    }

    #[test]
    fn free_flight_keeps_heading() {
        let mut bomb = Obstacle::new(Point::new(800, 450), 50, PALETTE[3], Point::new(5, -5));

        bomb.update();
        bomb.update();

        assert_eq!(bomb.velocity(), Point::new(5, -5));
        assert_eq!(bomb.rect().center(), Point::new(810, 440));
    }
}
