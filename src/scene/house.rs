use super::SceneObject;
use crate::geometry::{Point, Rect};
use crate::render::{Surface, rgb};
use crossterm::style::Color;

pub const MIN_WINDOW_WIDTH: i32 = 12;
pub const WINDOW_GAP: i32 = 10;
pub const MAX_WINDOWS: i32 = 10;
pub const MIN_WINDOW_HEIGHT: i32 = 20;

const ROOF_COLOR: Color = rgb(64, 64, 64);
const WINDOW_LIT: Color = rgb(255, 255, 0);
const WINDOW_DARK: Color = rgb(0, 0, 0);

/// How many windows fit side by side on a wall of the given width.
pub fn window_count(wall_width: i32) -> i32 {
    ((wall_width.max(0) - 2 * WINDOW_GAP) / (MIN_WINDOW_WIDTH + WINDOW_GAP)).clamp(1, MAX_WINDOWS)
}

/// Lays out one row of windows on a wall, relative to the wall's top-left.
///
/// Windows are vertically centered and the leftover width is shared out as
/// equal gaps, so the row is centered and never leaves the wall. Non-positive
/// dimensions give zero-sized windows.
pub fn window_layout(wall_width: i32, wall_height: i32) -> Vec<Rect> {
    let wall_width = wall_width.max(0);
    let wall_height = wall_height.max(0);

    let count = window_count(wall_width);
    let width = (wall_width / (2 * count + 1))
        .max(MIN_WINDOW_WIDTH)
        .min(wall_width);
    let height = (wall_height / 4).max(MIN_WINDOW_HEIGHT).min(wall_height);
    let y = (wall_height - height) / 2;

    let free = wall_width - count * width;
    let gap = free / (count + 1);
    let left = (free - gap * (count + 1)) / 2;

    (0..count)
        .map(|i| Rect::new(left + gap + i * (width + gap), y, width, height))
        .collect()
}

pub struct House {
    x: i32,
    ground_y: i32,
    width: i32,
    height: i32,
    wall_color: Color,
    lit: bool,
}

impl House {
    pub fn new(x: i32, ground_y: i32, width: i32, height: i32, wall_color: Color) -> Self {
        Self {
            x,
            ground_y,
            width: width.max(0),
            height: height.max(0),
            wall_color,
            lit: false,
        }
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn roof_height(&self) -> i32 {
        self.height / 4
    }

    pub fn wall_height(&self) -> i32 {
        self.height - self.roof_height()
    }

    pub fn wall(&self) -> Rect {
        let wall_height = self.wall_height();
        Rect::new(self.x, self.ground_y - wall_height, self.width, wall_height)
    }

    pub fn roof(&self) -> Rect {
        let wall = self.wall();
        let roof_height = self.roof_height();
        Rect::new(self.x, wall.y - roof_height, self.width, roof_height)
    }

    /// Window rectangles in scene coordinates.
    pub fn windows(&self) -> Vec<Rect> {
        let wall = self.wall();
        window_layout(wall.width, wall.height)
            .into_iter()
            .map(|w| w.offset(wall.x, wall.y))
            .collect()
    }

    /// Flips the lights when `(px, py)` lands on the wall or the roof.
    pub fn toggle_light(&mut self, px: i32, py: i32) -> bool {
        if !self.hit_test(Point::new(px, py)) {
            return false;
        }

        self.lit = !self.lit;
        log::debug!(
            "house at x={} lights {}",
            self.x,
            if self.lit { "on" } else { "off" }
        );
        true
    }
}

impl SceneObject for House {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(ROOF_COLOR);
        surface.fill_rect(self.roof());

        surface.set_color(self.wall_color);
        surface.fill_rect(self.wall());

        surface.set_color(if self.lit { WINDOW_LIT } else { WINDOW_DARK });
        for window in self.windows() {
            surface.fill_rect(window);
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        self.wall().contains(point) || self.roof().contains(point)
    }
}
