pub mod canvas;
pub mod recorder;
pub mod terminal;

pub use canvas::Canvas;
pub use recorder::{DrawCommand, Fill, Recorder};
pub use terminal::TerminalRenderer;

use crate::geometry::{Point, Rect};
use crossterm::style::Color;

/// The whole drawing contract the scene relies on.
///
/// Fills use whatever color was set last. Sizes are in scene coordinates; an
/// implementation decides how those map onto its own pixels.
pub trait Surface {
    fn set_color(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect);
    fn fill_ellipse(&mut self, bounds: Rect);
    fn fill_polygon(&mut self, points: &[Point]);
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Maps terminal cells onto the fixed logical scene.
///
/// Every cell holds two canvas pixels stacked vertically, so the canvas is
/// `cols` wide and `rows * 2` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub scene_width: i32,
    pub scene_height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, scene_width: i32, scene_height: i32) -> Self {
        Self {
            cols,
            rows,
            scene_width: scene_width.max(1),
            scene_height: scene_height.max(1),
        }
    }

    pub fn pixel_width(&self) -> usize {
        self.cols as usize
    }

    pub fn pixel_height(&self) -> usize {
        self.rows as usize * 2
    }

    /// Canvas pixels per scene unit, horizontally.
    pub fn scale_x(&self) -> f32 {
        self.pixel_width() as f32 / self.scene_width as f32
    }

    /// Canvas pixels per scene unit, vertically.
    pub fn scale_y(&self) -> f32 {
        self.pixel_height() as f32 / self.scene_height as f32
    }

    /// Scene coordinate under the center of a terminal cell.
    pub fn cell_to_scene(&self, col: u16, row: u16) -> Point {
        if self.cols == 0 || self.rows == 0 {
            return Point::default();
        }

        // Integer math keeps cell centers from landing one unit short.
        let x = (2 * col as i64 + 1) * self.scene_width as i64 / (2 * self.cols as i64);
        let y = (2 * row as i64 + 1) * self.scene_height as i64 / (2 * self.rows as i64);
        Point::new(x as i32, y as i32)
    }
}
