use crate::collision::Collision;
use crate::effect::Effect;
use crate::obstacle::Obstacle;
use crate::player::Player;
use crate::projectile::Projectile;
use crate::sprites::rect;
use crate::Entity;

// Colors
const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];

/// Draw bounding box for the player.
pub(crate) fn draw_player(screen: &mut [u8], player: &Player, collision: &Collision) {
    // Select color based on collisions
    let color = if collision.player.is_some() {
        RED
    } else {
        GREEN
    };

    rect(screen, &player.rect(), color);
}

/// Draw bounding boxes for bombs, and for the bombs destroyed this tick.
pub(crate) fn draw_obstacles(screen: &mut [u8], obstacles: &[Obstacle], collision: &Collision) {
    for (i, obstacle) in obstacles.iter().enumerate() {
        let color = if collision.player == Some(i) {
            RED
        } else {
            GREEN
        };

        rect(screen, &obstacle.rect(), color);
    }

    for hit in &collision.hits {
        rect(screen, hit, YELLOW);
    }
}

/// Draw bounding box for the beam.
pub(crate) fn draw_projectile(screen: &mut [u8], projectile: Option<&Projectile>) {
    if let Some(projectile) = projectile {
        rect(screen, &projectile.rect(), GREEN);
    }
}

/// Draw bounding boxes for explosions.
pub(crate) fn draw_effects(screen: &mut [u8], effects: &[Effect]) {
    for effect in effects {
        rect(screen, &effect.rect(), BLUE);
    }
}
