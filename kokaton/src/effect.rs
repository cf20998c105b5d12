use crate::geo::{Point, Rect};
use crate::loader::{Assets, Frame};
use crate::sprites::{flip_horizontal, Sprite};
use crate::{Entity, EFFECT_LIFE};

/// An explosion, played where a bomb was destroyed.
#[derive(Debug)]
pub struct Effect {
    rect: Rect,
    frames: [Sprite; 2],
    index: usize,
    /// Ticks left to live.
    life: i32,
}

impl Effect {
    pub fn new(assets: &Assets, center: Point) -> Effect {
        let base = assets.sprite(Frame::Explosion).clone();
        let mirrored = flip_horizontal(&base);
        let rect = Rect::around(center, &base);

        Effect {
            rect,
            frames: [base, mirrored],
            index: 0,
            life: EFFECT_LIFE,
        }
    }

    /// Advance the animation by one tick.
    ///
    /// # Returns
    ///
    /// `true` when the effect has expired and should be removed.
    pub fn update(&mut self) -> bool {
        self.life -= 1;
        if self.life <= 0 {
            return true;
        }

        if self.index < self.frames.len() - 1 {
            self.index += 1;
        }

        false
    }
}

impl Entity for Effect {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn sprite(&self) -> &Sprite {
        &self.frames[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::test_assets;

    #[test]
    fn expires_on_the_tenth_update() {
        let mut effect = Effect::new(&test_assets(), Point::new(100, 100));

        for _ in 1..EFFECT_LIFE {
            assert!(!effect.update());
        }
        assert!(effect.update());
    }

    #[test]
    fn animation_stops_on_last_frame() {
        let mut effect = Effect::new(&test_assets(), Point::new(100, 100));
        assert_eq!(effect.index, 0);

        effect.update();
        assert_eq!(effect.index, 1);

        effect.update();
        effect.update();
        assert_eq!(effect.index, 1);
    }

    #[test]
    fn centered_on_spawn_point() {
        let effect = Effect::new(&test_assets(), Point::new(321, 123));

        assert_eq!(effect.rect().center(), Point::new(321, 123));
        assert_eq!(effect.rect().width(), 12);
    }
}
