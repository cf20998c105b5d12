#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use game_loop::{game_loop, Time, TimeTrait as _};
use kokaton::{
    find_asset_dir, load_assets, Config, Controls, Delay, FrameGovernor, ProjectilePolicy, World,
    DEFEAT_HOLD, FPS, HEIGHT, TIME_STEP, WIDTH,
};
use log::{error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{dpi::LogicalSize, event_loop::EventLoop, keyboard::KeyCode, window::WindowBuilder};
use winit_input_helper::WinitInputHelper;

/// Uber-struct representing the entire game.
struct Game {
    /// Software renderer.
    pixels: Pixels<'static>,
    /// Kokaton world.
    world: World,
    /// Player controls for world updates.
    controls: Controls,
    /// Event manager.
    input: WinitInputHelper,
    /// Frame rate limiter.
    governor: FrameGovernor,
    /// Started when the kokaton is defeated; the game exits when it runs out.
    defeat: Option<Delay>,
}

impl Game {
    fn new(pixels: Pixels<'static>, world: World) -> Self {
        Self {
            pixels,
            world,
            controls: Controls::default(),
            input: WinitInputHelper::new(),
            governor: FrameGovernor::new(TIME_STEP),
            defeat: None,
        }
    }

    fn update_controls(&mut self) {
        self.controls = Controls {
            up: self.input.key_held(KeyCode::ArrowUp),
            down: self.input.key_held(KeyCode::ArrowDown),
            left: self.input.key_held(KeyCode::ArrowLeft),
            right: self.input.key_held(KeyCode::ArrowRight),
            // Latched until the next world update consumes it
            fire: self.controls.fire || self.input.key_pressed(KeyCode::Space),
        };
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let event_loop = EventLoop::new().map_err(|e| Error::UserDefined(Box::new(e)))?;

    // Enable debug mode with `DEBUG=true` environment variable
    // Remove beams that fly off-screen with `CULL_BEAMS=true`
    let config = Config {
        debug: env_flag("DEBUG"),
        projectile_policy: if env_flag("CULL_BEAMS") {
            ProjectilePolicy::CullOffscreen
        } else {
            ProjectilePolicy::Persist
        },
    };

    let assets = find_asset_dir(asset_dirs())
        .and_then(|dir| {
            info!("Loading assets from {}", dir.display());
            load_assets(&dir)
        })
        .map_err(|err| {
            log_error("load_assets", &err);
            Error::UserDefined(Box::new(err))
        })?;

    let seed = generate_seed().map_err(|e| Error::UserDefined(Box::new(e)))?;
    let world = World::new(assets, seed, config);

    let window = {
        let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
        let min_size = LogicalSize::new(WIDTH as f64 / 2.0, HEIGHT as f64 / 2.0);
        let window = WindowBuilder::new()
            .with_title("Fight, Kokaton!")
            .with_inner_size(size)
            .with_min_inner_size(min_size)
            .build(&event_loop)
            .map_err(|e| Error::UserDefined(Box::new(e)))?;
        Arc::new(window)
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, Arc::clone(&window));
        Pixels::new(WIDTH as u32, HEIGHT as u32, surface_texture)?
    };

    let game = Game::new(pixels, world);

    let res = game_loop(
        event_loop,
        window,
        game,
        FPS as u32,
        0.1,
        move |g| {
            // Update the world
            g.game.world.update(&g.game.controls);
            g.game.controls.fire = false;
        },
        move |g| {
            // Drawing
            g.game.world.draw(g.game.pixels.frame_mut());
            if let Err(err) = g.game.pixels.render() {
                log_error("pixels.render", &err);
                g.exit();
                return;
            }

            // Hold the defeat frame for a moment, then quit
            if g.game.world.is_game_over() {
                let now = Instant::now();
                let defeat = match g.game.defeat {
                    Some(defeat) => defeat,
                    None => {
                        let defeat = Delay::start(DEFEAT_HOLD, now);
                        info!("Defeated, exiting in {:?}", defeat.remaining(now));
                        g.game.defeat = Some(defeat);
                        defeat
                    }
                };

                if defeat.is_elapsed(now) {
                    info!("Game over after {} frames", g.game.governor.frames());
                    g.exit();
                    return;
                }
            }

            // Limit drawing to the fixed time step.
            let elapsed = Time::now().sub(&g.current_instant()).max(0.0);
            g.game.governor.pace(Duration::from_secs_f64(elapsed));
        },
        |g, event| {
            // Let winit_input_helper collect events to build its state.
            if g.game.input.update(event) {
                // Update controls
                g.game.update_controls();

                // Close events
                if g.game.input.key_pressed(KeyCode::Escape) || g.game.input.close_requested() {
                    info!("Quit");
                    g.exit();
                    return;
                }

                // Resize the window
                if let Some(size) = g.game.input.window_resized() {
                    if let Err(err) = g.game.pixels.resize_surface(size.width, size.height) {
                        log_error("pixels.resize_surface", &err);
                        g.exit();
                    }
                }
            }
        },
    );
    res.map_err(|e| Error::UserDefined(Box::new(e)))
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: &E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}

/// Parse a boolean flag from the environment. Anything but `true` is `false`.
fn env_flag(name: &str) -> bool {
    env::var(name)
        .unwrap_or_else(|_| "false".to_string())
        .parse()
        .unwrap_or(false)
}

/// Places to look for the `fig` directory: next to the executable, then in the package root.
fn asset_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|parent| parent.join("fig")))
    {
        dirs.push(dir);
    }
    dirs.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fig"));

    dirs
}

/// Generate a pseudorandom seed for the game's PRNG.
fn generate_seed() -> Result<(u64, u64), getrandom::Error> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}
