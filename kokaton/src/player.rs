use crate::controls::{Controls, Direction};
use crate::geo::{in_bounds, Point, Rect};
use crate::loader::{Assets, Frame};
use crate::sprites::{flip_horizontal, rotozoom, Sprite};
use crate::Entity;

/// Artwork is drawn at twice its native size.
const ZOOM: f64 = 2.0;

/// The kokaton.
#[derive(Debug)]
pub struct Player {
    rect: Rect,
    /// Last non-zero movement direction. Beams are launched this way.
    facing: Direction,
    /// Oriented artwork, indexed by `Direction::index`.
    poses: [Sprite; 8],
    victory: Sprite,
    defeat: Sprite,
    /// Currently displayed artwork.
    sprite: Sprite,
}

/// Reaction poses that replace the current artwork.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Pose {
    Victory,
    Defeat,
}

impl Player {
    pub fn new(assets: &Assets, center: Point) -> Player {
        // The source artwork faces left
        let left = rotozoom(assets.sprite(Frame::Kokaton), 0.0, ZOOM);
        let right = flip_horizontal(&left);

        let poses = [
            right.clone(),
            rotozoom(&right, 45.0, 1.0),
            rotozoom(&right, 90.0, 1.0),
            rotozoom(&left, -45.0, 1.0),
            left.clone(),
            rotozoom(&left, 45.0, 1.0),
            rotozoom(&right, -90.0, 1.0),
            rotozoom(&right, -45.0, 1.0),
        ];

        // The hit box keeps the size of the unrotated artwork, whatever is displayed
        let rect = Rect::around(center, &right);

        Player {
            rect,
            facing: Direction::Right,
            poses,
            victory: rotozoom(assets.sprite(Frame::Victory), 0.0, ZOOM),
            defeat: rotozoom(assets.sprite(Frame::Defeat), 0.0, ZOOM),
            sprite: right,
        }
    }

    /// Move the player according to the held keys.
    ///
    /// Moves that would leave the playfield are undone. The displayed artwork follows this tick's
    /// movement and is left alone when the player stands still.
    pub fn update(&mut self, controls: &Controls) {
        let mv = controls.movement();
        let direction = Direction::from_vector(mv);

        if let Some(direction) = direction {
            self.facing = direction;
        }

        self.rect.translate(mv);
        if in_bounds(&self.rect) != (true, true) {
            self.rect.translate(-mv);
        }

        if let Some(direction) = direction {
            self.sprite = self.poses[direction.index()].clone();
        }
    }

    /// Swap the displayed artwork for a reaction pose.
    ///
    /// The pose stays until the next movement replaces it.
    pub fn set_pose(&mut self, pose: Pose) {
        self.sprite = match pose {
            Pose::Victory => self.victory.clone(),
            Pose::Defeat => self.defeat.clone(),
        };
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }
}

impl Entity for Player {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &Sprite {
        &self.sprite
    }
}
