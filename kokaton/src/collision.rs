//! Collision detection primitives.

use crate::geo::Rect;
use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::projectile::Projectile;
use crate::Entity;

/// Store information about collisions (for debug mode).
#[derive(Debug, Default)]
pub(crate) struct Collision {
    /// Index of the bomb that ran into the player.
    pub(crate) player: Option<usize>,
    /// Where a beam destroyed a bomb.
    pub(crate) hits: Vec<Rect>,
}

impl Collision {
    /// Clear the collision details.
    pub(crate) fn clear(&mut self) {
        self.player = None;
        self.hits.clear();
    }

    /// Handle collisions between the player and bombs.
    pub(crate) fn player_to_obstacles(&mut self, player: &Player, obstacles: &[Obstacle]) -> bool {
        let player_rect = player.rect();

        self.player = obstacles
            .iter()
            .position(|obstacle| player_rect.intersects(obstacle.rect()));

        self.player.is_some()
    }

    /// Handle collisions between the beam and bombs.
    ///
    /// The beam is spent on the first bomb it touches, so at most one bomb is hit.
    ///
    /// # Returns
    ///
    /// The index of the bomb that was hit.
    pub(crate) fn projectile_to_obstacles(
        &mut self,
        projectile: Option<&Projectile>,
        obstacles: &[Obstacle],
    ) -> Option<usize> {
        let projectile_rect = projectile?.rect();
        let hit = obstacles
            .iter()
            .position(|obstacle| projectile_rect.intersects(obstacle.rect()))?;

        self.hits.push(obstacles[hit].rect());

        Some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Point;
    use crate::loader::tests::test_assets;
    use crate::obstacle::PALETTE;
    use crate::PLAYER_START;

    fn bomb(center: Point) -> Obstacle {
        Obstacle::new(center, 10, PALETTE[0], Point::new(5, 5))
    }

    #[test]
    fn player_hits() {
        let player = Player::new(&test_assets(), PLAYER_START);
        let mut collision = Collision::default();

        let far = [bomb(Point::new(100, 100)), bomb(Point::new(1500, 800))];
        assert!(!collision.player_to_obstacles(&player, &far));
        assert_eq!(collision.player, None);

        let near = [bomb(Point::new(100, 100)), bomb(PLAYER_START + Point::new(30, 0))];
        assert!(collision.player_to_obstacles(&player, &near));
        assert_eq!(collision.player, Some(1));

        collision.clear();
        assert_eq!(collision.player, None);
    }

    #[test]
    fn beam_hits_first_bomb_only() {
        let assets = test_assets();
        let player = Player::new(&assets, PLAYER_START);
        let beam = Projectile::launch(&assets, &player);
        let target = beam.rect().center();
        let mut collision = Collision::default();

        let bombs = [
            bomb(Point::new(100, 100)),
            bomb(target),
            bomb(target + Point::new(5, 0)),
        ];

        assert_eq!(collision.projectile_to_obstacles(None, &bombs), None);
        assert_eq!(
            collision.projectile_to_obstacles(Some(&beam), &bombs),
            Some(1)
        );
        assert_eq!(collision.hits, vec![bombs[1].rect()]);
    }
}
