use super::Motion;
use crate::geometry::{Point, Rect};
use crate::render::Surface;
use crate::scene::SceneObject;
use crate::scene::decorations::{BROOM_BRISTLE_COLOR, BROOM_STEM_COLOR};
use crossterm::style::Color;

pub const DEFAULT_MAX_WIDTH: i32 = 1110;
pub const DEFAULT_MAX_HEIGHT: i32 = 670;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BristleStyle {
    /// Right-pointing wedge trailing the stem.
    Triangle,
    /// Small round tuft under the rear end of the stem.
    Oval,
}

/// A broom crossing the sky. `y` is the vertical center of the stem.
#[derive(Debug, Clone)]
pub struct FlyingBroom {
    x: i32,
    y: i32,
    size: i32,
    velocity_x: i32,
    velocity_y: i32,
    max_width: i32,
    max_height: i32,
    baseline_y: i32,
    ticks: u64,
    stem_color: Color,
    bristle_color: Color,
    bristles: BristleStyle,
}

impl FlyingBroom {
    pub fn new(size: i32, x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            size: size.max(0),
            velocity_x: 2,
            velocity_y: 1,
            max_width: DEFAULT_MAX_WIDTH,
            max_height: DEFAULT_MAX_HEIGHT,
            baseline_y: y,
            ticks: 0,
            stem_color: BROOM_STEM_COLOR,
            bristle_color: BROOM_BRISTLE_COLOR,
            bristles: BristleStyle::Triangle,
        }
    }

    pub fn with_bristles(mut self, bristles: BristleStyle, color: Color) -> Self {
        self.bristles = bristles;
        self.bristle_color = color;
        self
    }

    pub fn set_velocity(&mut self, velocity_x: i32, velocity_y: i32) {
        self.velocity_x = velocity_x;
        self.velocity_y = velocity_y;
    }

    pub fn set_screen_bounds(&mut self, max_width: i32, max_height: i32) {
        self.max_width = max_width.max(0);
        self.max_height = max_height.max(0);
    }

    pub fn set_baseline(&mut self, baseline_y: i32) {
        self.baseline_y = baseline_y;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn advance(&mut self, motion: Motion) {
        match motion {
            Motion::Linear => self.step_linear(),
            Motion::Wave {
                amplitude,
                frequency,
            } => self.step_wave(amplitude, frequency),
        }
    }

    /// Moves by the velocity, re-entering from the far side once the broom is
    /// a full size past the horizontal edge. Vertically it snaps straight to
    /// the opposite rail.
    pub fn step_linear(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
        self.wrap_horizontal();

        if self.y > self.max_height {
            self.y = 0;
        }
        if self.y < 0 {
            self.y = self.max_height;
        }
    }

    /// Moves horizontally and bobs around the baseline on a sine curve.
    pub fn step_wave(&mut self, amplitude: f64, frequency: f64) {
        self.x += self.velocity_x;
        self.ticks += 1;

        let offset = (amplitude * (self.ticks as f64 * frequency).sin()).round();
        self.y = self.baseline_y + offset as i32;

        self.wrap_horizontal();
    }

    fn wrap_horizontal(&mut self) {
        if self.x > self.max_width + self.size {
            self.x = -self.size;
        }
        if self.x < -self.size {
            self.x = self.max_width + self.size;
        }
    }

    pub fn stem(&self) -> Rect {
        let thickness = self.size / 4;
        Rect::new(self.x, self.y - thickness / 2, self.size * 2, thickness)
    }

    fn bristle_triangle(&self) -> [Point; 3] {
        let base = self.size * 3 / 2;
        let left = self.x - base * 4 / 5;
        [
            Point::new(left, self.y - base / 2),
            Point::new(left, self.y + base / 2),
            Point::new(left + base, self.y),
        ]
    }

    fn bristle_oval(&self) -> Rect {
        let diameter = self.size / 2;
        Rect::new(self.x - diameter / 2, self.y, diameter, diameter)
    }
}

impl SceneObject for FlyingBroom {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(self.stem_color);
        surface.fill_rect(self.stem());

        surface.set_color(self.bristle_color);
        match self.bristles {
            BristleStyle::Triangle => surface.fill_polygon(&self.bristle_triangle()),
            BristleStyle::Oval => surface.fill_ellipse(self.bristle_oval()),
        }
    }
}
