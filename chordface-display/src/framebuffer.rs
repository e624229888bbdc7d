//! In-memory RGB565 framebuffer with software rasterization
//!
//! Primitives clip to the buffer bounds, so the renderer can hand over
//! chord endpoints far outside the panel. Fill rules are integer-only:
//! circles by squared-distance test, polygons by scanline with half-open
//! edges so shared vertices are not double-counted.

use heapless::Vec;

use chordface_core::geometry::Point;
use chordface_core::settings::Color;
use chordface_core::surface::{DrawError, DrawSurface};

/// Maximum scanline edge crossings tracked during polygon fill.
const MAX_CROSSINGS: usize = 16;

/// A `W` x `H` RGB565 pixel buffer.
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[u16; W]; H],
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Create a zeroed (black) buffer.
    pub const fn new() -> Self {
        Self {
            pixels: [[0; W]; H],
        }
    }

    /// One row of pixels, for streaming to the panel.
    pub fn row(&self, y: usize) -> &[u16; W] {
        &self.pixels[y]
    }

    /// Pixel value at (x, y). Panics out of bounds; test helper and
    /// flush-path accessor, not a clipped drawing primitive.
    pub fn pixel(&self, x: usize, y: usize) -> u16 {
        self.pixels[y][x]
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if (0..W as i32).contains(&x) && (0..H as i32).contains(&y) {
            self.pixels[y as usize][x as usize] = color.0;
        }
    }

    /// Fill the horizontal span `[x0, x1)` on row `y`.
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if !(0..H as i32).contains(&y) {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(W as i32);
        for x in x0..x1 {
            self.pixels[y as usize][x as usize] = color.0;
        }
    }

    fn stroke_circle_outline(&mut self, center: Point, radius: i32, color: Color) {
        // Midpoint circle
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;
        while x >= y {
            self.set_pixel(center.x + x, center.y + y, color);
            self.set_pixel(center.x + y, center.y + x, color);
            self.set_pixel(center.x - y, center.y + x, color);
            self.set_pixel(center.x - x, center.y + y, color);
            self.set_pixel(center.x - x, center.y - y, color);
            self.set_pixel(center.x - y, center.y - x, color);
            self.set_pixel(center.x + y, center.y - x, color);
            self.set_pixel(center.x + x, center.y - y, color);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn fill_annulus(&mut self, center: Point, inner: i32, outer: i32, color: Color) {
        let inner_sq = inner * inner;
        let outer_sq = outer * outer;
        for dy in -outer..=outer {
            for dx in -outer..=outer {
                let dist_sq = dx * dx + dy * dy;
                if dist_sq >= inner_sq && dist_sq < outer_sq {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    fn edge_crossings(
        points: &[Point],
        y: i32,
    ) -> Result<Vec<i32, MAX_CROSSINGS>, DrawError> {
        let mut crossings: Vec<i32, MAX_CROSSINGS> = Vec::new();

        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            let (top, bottom) = if p.y <= q.y { (p, q) } else { (q, p) };

            // Half-open: the bottom endpoint belongs to the next edge.
            // Horizontal edges never match.
            if top.y <= y && y < bottom.y {
                let x = top.x + (y - top.y) * (bottom.x - top.x) / (bottom.y - top.y);
                let pos = crossings.iter().position(|&c| c > x).unwrap_or(crossings.len());
                crossings
                    .insert(pos, x)
                    .map_err(|_| DrawError::Unrepresentable)?;
            }
        }

        Ok(crossings)
    }
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> DrawSurface for Framebuffer<W, H> {
    fn dimensions(&self) -> (u16, u16) {
        (W as u16, H as u16)
    }

    fn fill_screen(&mut self, color: Color) {
        for row in self.pixels.iter_mut() {
            row.fill(color.0);
        }
    }

    fn draw_line(&mut self, a: Point, b: Point, color: Color) {
        // Bresenham over all octants
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut x = a.x;
        let mut y = a.y;

        loop {
            self.set_pixel(x, y, color);
            if x == b.x && y == b.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) {
        let r_sq = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32, width: i32, color: Color) {
        if radius <= 0 {
            return;
        }
        if width <= 1 {
            self.stroke_circle_outline(center, radius, color);
        } else {
            let inner = (radius - width / 2).max(0);
            self.fill_annulus(center, inner, inner + width, color);
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError> {
        if points.len() < 3 {
            return Err(DrawError::Unrepresentable);
        }

        let y_min = points.iter().map(|p| p.y).min().unwrap_or(0);
        let y_max = points.iter().map(|p| p.y).max().unwrap_or(0);

        for y in y_min..y_max {
            let crossings = Self::edge_crossings(points, y)?;
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1] + 1, color);
            }
        }
        Ok(())
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color) -> Result<(), DrawError> {
        if points.len() < 3 {
            return Err(DrawError::Unrepresentable);
        }
        for i in 0..points.len() {
            self.draw_line(points[i], points[(i + 1) % points.len()], color);
        }
        Ok(())
    }
}
