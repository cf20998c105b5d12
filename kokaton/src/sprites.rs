use std::rc::Rc;

use crate::geo::{Point, Rect};
use crate::{HEIGHT, WIDTH};
use line_drawing::Bresenham;

/// Sprites can be drawn and transformed.
///
/// The pixel data is RGBA and shared, so cloning a `Sprite` is cheap. Transformations always
/// produce a new `Sprite`.
#[derive(Clone, Debug)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: Rc<Vec<u8>>,
}

/// Drawables can be blitted to the pixel buffer.
pub trait Drawable {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn pixels(&self) -> &[u8];
}

impl Sprite {
    /// Create a sprite from raw RGBA pixels.
    ///
    /// # Panics
    ///
    /// Asserts that `pixels` holds exactly `width * height` RGBA values.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Sprite {
        assert_eq!(pixels.len(), width * height * 4);

        Sprite {
            width,
            height,
            pixels: Rc::new(pixels),
        }
    }

    /// Create a sprite filled with a single color.
    pub fn solid(width: usize, height: usize, color: [u8; 4]) -> Sprite {
        let pixels = color
            .iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect();

        Sprite::new(width, height, pixels)
    }

    /// Create a sprite from a decoded image.
    pub fn from_image(image: &image::RgbaImage) -> Sprite {
        let (width, height) = image.dimensions();

        Sprite::new(width as usize, height as usize, image.as_raw().clone())
    }

    /// Create a filled circle on a transparent square canvas with sides of `2 * radius`.
    pub fn circle(radius: usize, color: [u8; 3]) -> Sprite {
        let size = radius * 2;
        let r = radius as f32;
        let mut pixels = vec![0; size * size * 4];

        for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
            let dx = (i % size) as f32 + 0.5 - r;
            let dy = (i / size) as f32 + 0.5 - r;

            if dx * dx + dy * dy <= r * r {
                px.copy_from_slice(&[color[0], color[1], color[2], 255]);
            }
        }

        Sprite::new(size, size, pixels)
    }

    /// Read a single RGBA pixel.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (x + y * self.width) * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[i..i + 4]);

        rgba
    }
}

impl Drawable for Sprite {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Mirror a drawable left to right.
pub fn flip_horizontal<D>(sprite: &D) -> Sprite
where
    D: Drawable,
{
    let stride = sprite.width() * 4;
    let mut pixels = Vec::with_capacity(stride * sprite.height());

    for row in sprite.pixels().chunks_exact(stride) {
        for px in row.chunks_exact(4).rev() {
            pixels.extend_from_slice(px);
        }
    }

    Sprite::new(sprite.width(), sprite.height(), pixels)
}

/// Rotate and scale a drawable.
///
/// `angle` is in degrees, counter-clockwise as seen on screen. The result is sized to fit the
/// whole transformed image; uncovered corners are transparent. Sampling is nearest-neighbor.
pub fn rotozoom<D>(sprite: &D, angle: f64, scale: f64) -> Sprite
where
    D: Drawable,
{
    let (sin, cos) = angle.to_radians().sin_cos();
    let src_w = sprite.width() as f64;
    let src_h = sprite.height() as f64;
    let scaled_w = src_w * scale;
    let scaled_h = src_h * scale;

    let width = fit(scaled_w * cos.abs() + scaled_h * sin.abs());
    let height = fit(scaled_w * sin.abs() + scaled_h * cos.abs());
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);

    let src = sprite.pixels();
    let mut pixels = vec![0; width * height * 4];

    for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
        let dx = (i % width) as f64 + 0.5 - cx;
        let dy = (i / width) as f64 + 0.5 - cy;

        // Inverse rotation maps each destination pixel back into the source
        let sx = (dx * cos - dy * sin) / scale + src_w / 2.0;
        let sy = (dx * sin + dy * cos) / scale + src_h / 2.0;

        if sx >= 0.0 && sy >= 0.0 && sx < src_w && sy < src_h {
            let j = (sx as usize + sy as usize * sprite.width()) * 4;
            px.copy_from_slice(&src[j..j + 4]);
        }
    }

    Sprite::new(width, height, pixels)
}

/// Round a transformed extent up to whole pixels, ignoring floating point noise.
fn fit(extent: f64) -> usize {
    (extent - 1e-6).ceil().max(1.0) as usize
}

/// Blit a drawable to the pixel buffer.
///
/// The sprite is clipped to the screen. Fully transparent pixels are skipped and partially
/// transparent pixels are blended over the existing contents.
pub fn blit<S>(screen: &mut [u8], dest: &Point, sprite: &S)
where
    S: Drawable,
{
    let pixels = sprite.pixels();
    let width = sprite.width() as i32;
    let height = sprite.height() as i32;

    let x0 = dest.x.max(0);
    let x1 = (dest.x + width).min(WIDTH as i32);
    let y0 = dest.y.max(0);
    let y1 = (dest.y + height).min(HEIGHT as i32);

    for y in y0..y1 {
        for x in x0..x1 {
            let s = ((x - dest.x) + (y - dest.y) * width) as usize * 4;
            let i = (x as usize + y as usize * WIDTH) * 4;
            let src = &pixels[s..s + 4];

            match src[3] {
                0 => (),
                255 => screen[i..i + 4].copy_from_slice(src),
                alpha => {
                    let a = u16::from(alpha);
                    for c in 0..3 {
                        let blended =
                            (u16::from(src[c]) * a + u16::from(screen[i + c]) * (255 - a)) / 255;
                        screen[i + c] = blended as u8;
                    }
                    screen[i + 3] = 255;
                }
            }
        }
    }
}

/// Draw a line to the pixel buffer using Bresenham's algorithm.
///
/// Pixels outside of the screen are discarded.
pub fn line(screen: &mut [u8], p1: &Point, p2: &Point, color: [u8; 4]) {
    let p1 = (p1.x, p1.y);
    let p2 = (p2.x, p2.y);

    for (x, y) in Bresenham::new(p1, p2) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            continue;
        }

        let i = (x as usize + y as usize * WIDTH) * 4;
        screen[i..i + 4].copy_from_slice(&color);
    }
}

/// Draw the outline of a rectangle to the pixel buffer.
pub fn rect(screen: &mut [u8], rect: &Rect, color: [u8; 4]) {
    let p1 = rect.p1;
    let p2 = rect.p2 - Point::new(1, 1);
    let p3 = Point::new(p1.x, p2.y);
    let p4 = Point::new(p2.x, p1.y);

    line(screen, &p1, &p3, color);
    line(screen, &p3, &p2, color);
    line(screen, &p2, &p4, color);
    line(screen, &p4, &p1, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 0];

    fn screen() -> Vec<u8> {
        vec![0; WIDTH * HEIGHT * 4]
    }

    fn screen_pixel(screen: &[u8], x: usize, y: usize) -> &[u8] {
        let i = (x + y * WIDTH) * 4;
        &screen[i..i + 4]
    }

    #[test]
    fn flip_mirrors_rows() {
        let mut pixels = vec![0; 3 * 4];
        pixels[..4].copy_from_slice(&RED);
        let sprite = Sprite::new(3, 1, pixels);

        let flipped = flip_horizontal(&sprite);
        assert_eq!(flipped.pixel(0, 0), CLEAR);
        assert_eq!(flipped.pixel(2, 0), RED);
    }

    #[test]
    fn rotozoom_scales_without_rotation() {
        let sprite = Sprite::solid(4, 3, RED);
        let zoomed = rotozoom(&sprite, 0.0, 2.0);

        assert_eq!(zoomed.width(), 8);
        assert_eq!(zoomed.height(), 6);
        assert!(zoomed.pixels().chunks_exact(4).all(|px| px == RED));
    }

    #[test]
    fn rotozoom_quarter_turn_is_counter_clockwise() {
        // A 4x2 sprite with only its top-right pixel set
        let mut pixels = vec![0; 4 * 2 * 4];
        pixels[3 * 4..4 * 4].copy_from_slice(&RED);
        let sprite = Sprite::new(4, 2, pixels);

        let rotated = rotozoom(&sprite, 90.0, 1.0);
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 4);

        // The right edge turns to face up, so the pixel lands in the top-left corner
        assert_eq!(rotated.pixel(0, 0), RED);
        assert_eq!(rotated.pixel(1, 3), CLEAR);

        let rotated = rotozoom(&sprite, -90.0, 1.0);
        assert_eq!(rotated.pixel(1, 3), RED);
    }

    #[test]
    fn rotozoom_diagonal_grows_canvas() {
        let sprite = Sprite::solid(10, 10, RED);
        let rotated = rotozoom(&sprite, 45.0, 1.0);

        assert_eq!(rotated.width(), 15);
        assert_eq!(rotated.height(), 15);
        assert_eq!(rotated.pixel(0, 0), CLEAR);
        assert_eq!(rotated.pixel(7, 7), RED);
    }

    #[test]
    fn circle_has_transparent_corners() {
        let circle = Sprite::circle(10, [0, 255, 0]);

        assert_eq!(circle.width(), 20);
        assert_eq!(circle.height(), 20);
        assert_eq!(circle.pixel(0, 0), CLEAR);
        assert_eq!(circle.pixel(10, 10), [0, 255, 0, 255]);
        assert_eq!(circle.pixel(0, 10), [0, 255, 0, 255]);
    }

    #[test]
    fn blit_clips_to_screen() {
        let mut screen = screen();
        let sprite = Sprite::solid(4, 4, RED);

        // Hanging off the upper-left corner
        blit(&mut screen, &Point::new(-2, -2), &sprite);
        assert_eq!(screen_pixel(&screen, 0, 0), RED);
        assert_eq!(screen_pixel(&screen, 1, 1), RED);
        assert_eq!(screen_pixel(&screen, 2, 2), CLEAR);

        // Hanging off the lower-right corner
        blit(&mut screen, &Point::new(WIDTH as i32 - 1, HEIGHT as i32 - 1), &sprite);
        assert_eq!(screen_pixel(&screen, WIDTH - 1, HEIGHT - 1), RED);

        // Entirely off-screen is a no-op
        blit(&mut screen, &Point::new(-100, 100), &sprite);
        blit(&mut screen, &Point::new(WIDTH as i32, 0), &sprite);
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut screen = screen();
        let background = Sprite::solid(20, 20, [0, 0, 255, 255]);
        blit(&mut screen, &Point::new(0, 0), &background);

        let circle = Sprite::circle(10, [255, 0, 0]);
        blit(&mut screen, &Point::new(0, 0), &circle);

        assert_eq!(screen_pixel(&screen, 0, 0), [0, 0, 255, 255]);
        assert_eq!(screen_pixel(&screen, 10, 10), RED);
    }

    #[test]
    fn rect_outline_stays_inside_bounds() {
        let mut screen = screen();
        let r = Rect::new(Point::new(2, 2), Point::new(6, 6));
        rect(&mut screen, &r, RED);

        assert_eq!(screen_pixel(&screen, 2, 2), RED);
        assert_eq!(screen_pixel(&screen, 5, 5), RED);
        assert_eq!(screen_pixel(&screen, 6, 6), CLEAR);
        assert_eq!(screen_pixel(&screen, 3, 3), CLEAR);
    }
}
