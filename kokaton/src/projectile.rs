use crate::geo::{playfield, Point, Rect};
use crate::loader::{Assets, Frame};
use crate::player::Player;
use crate::sprites::{rotozoom, Sprite};
use crate::{Entity, PLAYER_SPEED};

/// The beam entity.
#[derive(Debug)]
pub struct Projectile {
    rect: Rect,
    velocity: Point,
    sprite: Sprite,
}

impl Projectile {
    /// Fire a beam from the player, in the direction the player is facing.
    ///
    /// The beam appears one player-length ahead of the player's center and is rotated to match
    /// its heading.
    pub fn launch(assets: &Assets, player: &Player) -> Projectile {
        let velocity = player.facing().vector();

        // Screen space is upside down compared to the usual polar angle
        let angle = f64::from(-velocity.y)
            .atan2(f64::from(velocity.x))
            .to_degrees();
        let sprite = rotozoom(assets.sprite(Frame::Beam), angle, 1.0);

        let origin = player.rect();
        let offset = Point::new(
            origin.width() * velocity.x / PLAYER_SPEED,
            origin.height() * velocity.y / PLAYER_SPEED,
        );
        let rect = Rect::around(origin.center() + offset, &sprite);

        Projectile {
            rect,
            velocity,
            sprite,
        }
    }

    pub fn update(&mut self) {
        self.rect.translate(self.velocity);
    }

    /// A beam is off-screen once no part of it overlaps the playfield.
    pub fn is_offscreen(&self) -> bool {
        !self.rect.intersects(playfield())
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }
}

impl Entity for Projectile {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Controls, Direction};
    use crate::loader::tests::test_assets;
    use crate::sprites::Drawable;
    use crate::PLAYER_START;

    #[test]
    fn launches_ahead_of_the_player() {
        let assets = test_assets();
        let player = Player::new(&assets, PLAYER_START);
        let beam = Projectile::launch(&assets, &player);

        assert_eq!(beam.velocity(), Direction::Right.vector());
        assert_eq!(beam.rect().center(), PLAYER_START + Point::new(60, 0));
        assert_eq!(beam.sprite().width(), 20);
        assert_eq!(beam.sprite().height(), 4);
    }

    #[test]
    fn oriented_by_facing() {
        let assets = test_assets();
        let mut player = Player::new(&assets, PLAYER_START);
        player.update(&Controls {
            down: true,
            ..Controls::default()
        });
        let start = player.rect().center();

        let beam = Projectile::launch(&assets, &player);
        assert_eq!(beam.velocity(), Direction::Down.vector());
        assert_eq!(beam.rect().center(), start + Point::new(0, 40));

        // Rotated a quarter turn
        assert_eq!(beam.sprite().width(), 4);
        assert_eq!(beam.sprite().height(), 20);
    }

    #[test]
    fn flies_in_a_straight_line() {
        let assets = test_assets();
        let player = Player::new(&assets, PLAYER_START);
        let mut beam = Projectile::launch(&assets, &player);
        let start = beam.rect().center();

        for _ in 0..10 {
            beam.update();
        }

        assert_eq!(beam.rect().center(), start + Point::new(50, 0));
        assert!(!beam.is_offscreen());

        for _ in 0..200 {
            beam.update();
        }
        assert!(beam.is_offscreen());
    }
}
