use super::SceneObject;
use crate::geometry::Rect;
use crate::render::{Surface, rgb};
use crossterm::style::Color;

const STREET_COLOR: Color = rgb(128, 128, 128);

pub struct Street {
    area: Rect,
    color: Color,
}

impl Street {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            area: Rect::new(x, y, width.max(0), height.max(0)),
            color: STREET_COLOR,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl SceneObject for Street {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_color(self.color);
        surface.fill_rect(self.area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, Recorder};

    #[test]
    fn test_street_draws_single_rect() {
        let street = Street::new(0, 570, 1110, 100);
        let mut recorder = Recorder::new();
        street.draw(&mut recorder);

        let fills = recorder.fills();
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].color, street.color());
        assert_eq!(fills[0].shape, DrawCommand::FillRect(Rect::new(0, 570, 1110, 100)));
    }
}
