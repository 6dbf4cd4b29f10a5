use super::SceneObject;
use crate::geometry::{Point, Rect};
use crate::render::{Surface, rgb};
use crossterm::style::Color;

const SUN_COLOR: Color = rgb(243, 159, 24);
const MOON_COLOR: Color = rgb(255, 255, 255);

/// The sun by day, the moon by night. Also owns the day/night state.
pub struct Sun {
    bounds: Rect,
    night: bool,
}

impl Sun {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            bounds: Rect::new(x, y, width.max(0), height.max(0)),
            night: false,
        }
    }

    pub fn is_night(&self) -> bool {
        self.night
    }

    pub fn is_day(&self) -> bool {
        !self.night
    }

    pub fn toggle(&mut self) {
        self.night = !self.night;
        log::debug!("switched to {}", if self.night { "night" } else { "day" });
    }

    /// True when the point lies on the disc inscribed in the bounding box.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        let radius = (self.bounds.width.min(self.bounds.height) / 2) as i64;
        if radius == 0 {
            return false;
        }

        let center_x = (self.bounds.x + self.bounds.width / 2) as i64;
        let center_y = (self.bounds.y + self.bounds.height / 2) as i64;
        let dx = x as i64 - center_x;
        let dy = y as i64 - center_y;
        dx * dx + dy * dy <= radius * radius
    }

    pub fn color(&self) -> Color {
        if self.night { MOON_COLOR } else { SUN_COLOR }
    }
}

impl SceneObject for Sun {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(self.color());
        surface.fill_ellipse(self.bounds);
    }

    fn hit_test(&self, point: Point) -> bool {
        self.contains_point(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    #[test]
    fn test_contains_center() {
        let sun = Sun::new(850, 80, 200, 200);
        assert!(sun.contains_point(950, 180));
    }

    #[test]
    fn test_rejects_box_corner() {
        let sun = Sun::new(850, 80, 200, 200);
        assert!(!sun.contains_point(851, 81));
        assert!(!sun.contains_point(1049, 279));
    }

    #[test]
    fn test_rejects_points_beyond_radius() {
        let sun = Sun::new(0, 0, 100, 60);
        // radius 30 around (50, 30)
        assert!(sun.contains_point(80, 30));
        assert!(!sun.contains_point(82, 30));
        assert!(!sun.contains_point(50, 62));

        for angle in 0..360 {
            let theta = (angle as f64).to_radians();
            let x = 50 + (32.0 * theta.cos()).round() as i32;
            let y = 30 + (32.0 * theta.sin()).round() as i32;
            assert!(!sun.contains_point(x, y), "({x}, {y}) should be outside");
        }
    }

    #[test]
    fn test_zero_radius_never_contains() {
        let sun = Sun::new(10, 10, 0, 50);
        assert!(!sun.contains_point(10, 35));
        let sun = Sun::new(10, 10, 1, 1);
        assert!(!sun.contains_point(10, 10));
    }

    #[test]
    fn test_toggle_flips_night() {
        let mut sun = Sun::new(0, 0, 10, 10);
        assert!(sun.is_day());
        sun.toggle();
        assert!(sun.is_night());
        sun.toggle();
        assert!(sun.is_day());
    }

    #[test]
    fn test_draw_color_follows_state_without_mutating() {
        let mut sun = Sun::new(0, 0, 10, 10);
        let mut recorder = Recorder::new();

        sun.draw(&mut recorder);
        sun.draw(&mut recorder);
        assert!(sun.is_day());
        assert_eq!(recorder.fills()[0].color, SUN_COLOR);
        assert_eq!(
            recorder.fills()[0].shape,
            DrawCommand::FillEllipse(Rect::new(0, 0, 10, 10))
        );

        sun.toggle();
        recorder.clear();
        sun.draw(&mut recorder);
        assert_eq!(recorder.fills()[0].color, MOON_COLOR);
    }
}
