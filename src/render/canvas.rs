use super::{Surface, Viewport};
use crate::geometry::{Point, Rect};
use crossterm::style::Color;

/// Software raster target. Shapes are given in scene coordinates and scaled
/// onto the pixel grid; a pixel is covered when its center is inside the shape.
pub struct Canvas {
    width: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
    pixels: Vec<Color>,
    color: Color,
}

impl Canvas {
    /// A canvas whose pixels are scene units one to one.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            pixels: vec![Color::Black; width * height],
            color: Color::Black,
        }
    }

    pub fn for_viewport(viewport: &Viewport) -> Self {
        let mut canvas = Self::new(viewport.pixel_width(), viewport.pixel_height());
        canvas.scale_x = viewport.scale_x();
        canvas.scale_y = viewport.scale_y();
        canvas
    }

    /// Reallocates only when the pixel dimensions change.
    pub fn fit(&mut self, viewport: &Viewport) {
        let width = viewport.pixel_width();
        let height = viewport.pixel_height();
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels = vec![Color::Black; width * height];
        }
        self.scale_x = viewport.scale_x();
        self.scale_y = viewport.scale_y();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Fills pixels of `row` whose centers fall in `[x_start, x_end)`.
    fn fill_span(&mut self, row: i64, x_start: f32, x_end: f32) {
        if row < 0 || row >= self.height as i64 {
            return;
        }

        let first = (x_start - 0.5).ceil().max(0.0) as i64;
        let last = ((x_end - 0.5).ceil() as i64).min(self.width as i64);
        if first >= last {
            return;
        }

        let offset = row as usize * self.width;
        self.pixels[offset + first as usize..offset + last as usize].fill(self.color);
    }

    fn rows_between(&self, y_start: f32, y_end: f32) -> std::ops::Range<i64> {
        let first = (y_start - 0.5).ceil().max(0.0) as i64;
        let last = ((y_end - 0.5).ceil() as i64).min(self.height as i64);
        first..last.max(first)
    }
}

impl Surface for Canvas {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }

        let x0 = rect.x as f32 * self.scale_x;
        let x1 = rect.right() as f32 * self.scale_x;
        let y0 = rect.y as f32 * self.scale_y;
        let y1 = rect.bottom() as f32 * self.scale_y;

        for row in self.rows_between(y0, y1) {
            self.fill_span(row, x0, x1);
        }
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        if bounds.is_empty() {
            return;
        }

        let rx = bounds.width as f32 * self.scale_x / 2.0;
        let ry = bounds.height as f32 * self.scale_y / 2.0;
        let cx = bounds.x as f32 * self.scale_x + rx;
        let cy = bounds.y as f32 * self.scale_y + ry;

        for row in self.rows_between(cy - ry, cy + ry) {
            let dy = (row as f32 + 0.5 - cy) / ry;
            let span = 1.0 - dy * dy;
            if span < 0.0 {
                continue;
            }
            let half = rx * span.sqrt();
            self.fill_span(row, cx - half, cx + half);
        }
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        if points.len() < 3 {
            return;
        }

        let scaled: Vec<(f32, f32)> = points
            .iter()
            .map(|p| (p.x as f32 * self.scale_x, p.y as f32 * self.scale_y))
            .collect();

        let min_y = scaled.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = scaled.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

        let mut crossings = Vec::with_capacity(scaled.len());
        for row in self.rows_between(min_y, max_y) {
            let y = row as f32 + 0.5;
            crossings.clear();

            for i in 0..scaled.len() {
                let (x0, y0) = scaled[i];
                let (x1, y1) = scaled[(i + 1) % scaled.len()];
                if (y0 <= y && y < y1) || (y1 <= y && y < y0) {
                    crossings.push(x0 + (y - y0) * (x1 - x0) / (y1 - y0));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                self.fill_span(row, pair[0], pair[1]);
            }
        }
    }
}
