use super::SceneObject;
use crate::geometry::{Point, Rect};
use crate::render::{Surface, rgb};
use crossterm::style::Color;

const TRUNK_COLOR: Color = rgb(80, 60, 60);
const CROWN_COLOR: Color = rgb(45, 87, 44);

pub const BROOM_STEM_COLOR: Color = rgb(102, 0, 153);
pub const BROOM_BRISTLE_COLOR: Color = rgb(229, 190, 1);

/// Trunk with a round crown. `y` is where trunk and crown meet.
pub struct Tree {
    size: i32,
    x: i32,
    y: i32,
}

impl Tree {
    pub fn new(size: i32, x: i32, y: i32) -> Self {
        Self {
            size: size.max(0),
            x,
            y,
        }
    }

    pub fn trunk(&self) -> Rect {
        let width = self.size / 4;
        Rect::new(self.x - width / 2, self.y, width, self.size * 2)
    }

    pub fn crown(&self) -> Rect {
        let diameter = self.size * 6 / 5;
        Rect::new(
            self.x - diameter / 2,
            self.y - diameter / 2,
            diameter,
            diameter,
        )
    }
}

impl SceneObject for Tree {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(TRUNK_COLOR);
        surface.fill_rect(self.trunk());

        surface.set_color(CROWN_COLOR);
        surface.fill_ellipse(self.crown());
    }
}

/// Broom leaning upright, bristles at the bottom. `y` is the top of the stem.
pub struct StandingBroom {
    size: i32,
    x: i32,
    y: i32,
}

impl StandingBroom {
    pub fn new(size: i32, x: i32, y: i32) -> Self {
        Self {
            size: size.max(0),
            x,
            y,
        }
    }

    pub fn stem(&self) -> Rect {
        let width = self.size / 4;
        Rect::new(self.x - width / 2, self.y, width, self.size * 2)
    }

    pub fn bristles(&self) -> [Point; 3] {
        let base = self.size * 3 / 2;
        let left = self.x - base / 2;
        let foot = self.y + self.size * 2;
        [
            Point::new(left, foot),
            Point::new(left + base, foot),
            Point::new(left + base / 2, foot - base / 2),
        ]
    }
}

impl SceneObject for StandingBroom {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(BROOM_STEM_COLOR);
        surface.fill_rect(self.stem());

        surface.set_color(BROOM_BRISTLE_COLOR);
        surface.fill_polygon(&self.bristles());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    #[test]
    fn test_tree_geometry() {
        let tree = Tree::new(100, 180, 370);
        assert_eq!(tree.trunk(), Rect::new(168, 370, 25, 200));
        assert_eq!(tree.crown(), Rect::new(120, 310, 120, 120));
    }

    #[test]
    fn test_tree_draws_trunk_before_crown() {
        let tree = Tree::new(80, 1000, 410);
        let mut recorder = Recorder::new();
        tree.draw(&mut recorder);

        let fills = recorder.fills();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].color, TRUNK_COLOR);
        assert!(matches!(fills[0].shape, DrawCommand::FillRect(_)));
        assert_eq!(fills[1].color, CROWN_COLOR);
        assert!(matches!(fills[1].shape, DrawCommand::FillEllipse(_)));
    }

    #[test]
    fn test_standing_broom_geometry() {
        let broom = StandingBroom::new(50, 80, 470);
        assert_eq!(broom.stem(), Rect::new(74, 470, 12, 100));
        assert_eq!(
            broom.bristles(),
            [Point::new(43, 570), Point::new(118, 570), Point::new(80, 533)]
        );
    }

    #[test]
    fn test_zero_size_is_harmless() {
        let broom = StandingBroom::new(-5, 0, 0);
        assert!(broom.stem().is_empty());
        let tree = Tree::new(0, 0, 0);
        assert!(tree.crown().is_empty());
    }
}
