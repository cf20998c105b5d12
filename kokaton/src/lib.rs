//! Fight, Kokaton! A tiny arcade game rendered in software to a pixel buffer.
//!
//! The kokaton dodges bouncing bombs and blows them up with its beam. Touching a bomb ends the
//! game. This crate owns the simulation and the drawing; opening a window, pacing the frames and
//! presenting the pixel buffer are left to the caller.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::collision::Collision;
pub use crate::controls::{Controls, Direction};
pub use crate::effect::Effect;
pub use crate::error::Error;
use crate::geo::Rect;
pub use crate::geo::{in_bounds, Point};
pub use crate::loader::{find_asset_dir, load_assets, Assets, Frame};
pub use crate::obstacle::{Obstacle, PALETTE};
pub use crate::player::{Player, Pose};
pub use crate::projectile::Projectile;
pub use crate::sprites::{Drawable, Sprite};
pub use crate::timing::{Delay, FrameGovernor};
use crate::sprites::blit;
use log::{debug, info};
use randomize::PCG32;
use std::time::Duration;

mod collision;
mod controls;
mod debug;
mod effect;
mod error;
pub mod geo;
mod loader;
mod obstacle;
mod player;
mod projectile;
pub mod sprites;
mod timing;

/// The screen width is constant (units are in pixels)
pub const WIDTH: usize = 1600;
/// The screen height is constant (units are in pixels)
pub const HEIGHT: usize = 900;

// Fixed time step (50 fps)
pub const FPS: usize = 50;
pub const TIME_STEP: Duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

/// How long the defeat frame stays on screen before the game exits.
pub const DEFEAT_HOLD: Duration = Duration::from_secs(1);

/// Number of bombs at the start of the game. They are never replenished.
pub const NUM_OBSTACLES: usize = 5;

// Player positioning
pub const PLAYER_START: Point = Point::new(900, 400);

// Speeds in pixels per tick
const PLAYER_SPEED: i32 = 5;
const OBSTACLE_SPEED: i32 = 5;

/// Explosions last this many ticks.
const EFFECT_LIFE: i32 = 10;

/// Anything that occupies space on the playfield and can draw itself there.
pub trait Entity {
    /// The hit box, in screen coordinates.
    fn rect(&self) -> Rect;

    /// The artwork currently displayed at the hit box's upper-left corner.
    fn sprite(&self) -> &Sprite;

    fn draw(&self, screen: &mut [u8]) {
        blit(screen, &self.rect().p1, self.sprite());
    }
}

/// Game state machine.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Running,
    /// The kokaton touched a bomb. Terminal.
    GameOver,
}

/// What happens to a beam that leaves the playfield.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ProjectilePolicy {
    /// The beam keeps flying forever until the next one replaces it.
    #[default]
    Persist,
    /// The beam is removed as soon as it is entirely off-screen.
    CullOffscreen,
}

/// Runtime options.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Draw hit boxes.
    pub debug: bool,
    pub projectile_policy: ProjectilePolicy,
}

#[derive(Debug)]
pub struct World {
    player: Player,
    obstacles: Vec<Obstacle>,
    projectile: Option<Projectile>,
    effects: Vec<Effect>,
    collision: Collision,
    assets: Assets,
    state: State,
    frame: u64,
    config: Config,
}

impl World {
    /// Create a new `World` with randomly placed bombs.
    ///
    /// # Arguments
    ///
    /// * `assets` - Artwork for every entity.
    /// * `seed` - Inputs for the pseudorandom number generator.
    /// * `config` - Runtime options.
    ///
    /// # Example
    ///
    /// ```
    /// use byteorder::{ByteOrder, NativeEndian};
    /// use getrandom::getrandom;
    /// use kokaton::{Assets, Config, Sprite, World};
    ///
    /// // Create a seed for the PRNG
    /// let mut seed = [0_u8; 16];
    /// getrandom(&mut seed).expect("failed to getrandom");
    /// let seed = (
    ///     NativeEndian::read_u64(&seed[0..8]),
    ///     NativeEndian::read_u64(&seed[8..16]),
    /// );
    ///
    /// // Placeholder artwork
    /// let assets = Assets::from_fn(|_| Sprite::solid(16, 16, [255, 255, 255, 255]));
    ///
    /// let world = World::new(assets, seed, Config::default());
    /// assert_eq!(world.obstacles().len(), kokaton::NUM_OBSTACLES);
    /// ```
    pub fn new(assets: Assets, seed: (u64, u64), config: Config) -> World {
        let mut prng = PCG32::seed(seed.0, seed.1);
        let obstacles = (0..NUM_OBSTACLES)
            .map(|_| Obstacle::random(&mut prng))
            .collect();

        World::with_obstacles(assets, obstacles, config)
    }

    /// Create a new `World` with a chosen set of bombs.
    pub fn with_obstacles(assets: Assets, obstacles: Vec<Obstacle>, config: Config) -> World {
        let player = Player::new(&assets, PLAYER_START);

        World {
            player,
            obstacles,
            projectile: None,
            effects: Vec::new(),
            collision: Collision::default(),
            assets,
            state: State::Running,
            frame: 0,
            config,
        }
    }

    /// Advance the game by one tick.
    ///
    /// Collisions are checked against the positions from the end of the previous tick, before
    /// anything moves. Once the game is over this is a no-op.
    pub fn update(&mut self, controls: &Controls) {
        if self.state == State::GameOver {
            return;
        }

        // Clear the collision details
        self.collision.clear();

        // A new beam replaces the old one
        if controls.fire {
            let projectile = Projectile::launch(&self.assets, &self.player);
            debug!(
                "Beam launched {:?} at frame {}",
                self.player.facing(),
                self.frame
            );
            self.projectile = Some(projectile);
        }

        // One of the end scenarios
        if self
            .collision
            .player_to_obstacles(&self.player, &self.obstacles)
        {
            info!("Game over at frame {}", self.frame);
            self.player.set_pose(Pose::Defeat);
            self.state = State::GameOver;
            return;
        }

        if let Some(i) = self
            .collision
            .projectile_to_obstacles(self.projectile.as_ref(), &self.obstacles)
        {
            let center = self.obstacles[i].rect().center();
            debug!("Bomb destroyed at {:?}, frame {}", center, self.frame);

            self.effects.push(Effect::new(&self.assets, center));
            self.projectile = None;
            self.obstacles.remove(i);
            self.player.set_pose(Pose::Victory);
        }

        // Animate explosions and destroy the finished ones
        let frame = self.frame;
        self.effects.retain_mut(|effect| {
            let finished = effect.update();
            if finished {
                debug!("Explosion finished at frame {}", frame);
            }
            !finished
        });

        self.player.update(controls);

        for obstacle in self.obstacles.iter_mut() {
            obstacle.update();
        }

        if let Some(projectile) = &mut self.projectile {
            projectile.update();

            if self.config.projectile_policy == ProjectilePolicy::CullOffscreen
                && projectile.is_offscreen()
            {
                debug!("Beam left the playfield at frame {}", self.frame);
                self.projectile = None;
            }
        }

        self.frame += 1;
    }

    /// Draw the internal state to the screen.
    ///
    /// After the game is over only the defeated kokaton is drawn over the background.
    pub fn draw(&self, screen: &mut [u8]) {
        // Clear the screen
        clear(screen);
        blit(
            screen,
            &Point::new(0, 0),
            self.assets.sprite(Frame::Background),
        );

        if self.state == State::GameOver {
            self.player.draw(screen);
        } else {
            for effect in &self.effects {
                effect.draw(screen);
            }

            self.player.draw(screen);

            for obstacle in &self.obstacles {
                obstacle.draw(screen);
            }

            if let Some(projectile) = &self.projectile {
                projectile.draw(screen);
            }
        }

        // Draw debug information
        if self.config.debug {
            debug::draw_effects(screen, &self.effects);
            debug::draw_player(screen, &self.player, &self.collision);
            debug::draw_obstacles(screen, &self.obstacles, &self.collision);
            debug::draw_projectile(screen, self.projectile.as_ref());
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state == State::GameOver
    }

    /// Number of ticks played.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }
}

/// Clear the screen
fn clear(screen: &mut [u8]) {
    for (i, byte) in screen.iter_mut().enumerate() {
        *byte = if i % 4 == 3 { 255 } else { 0 };
    }
}
