use super::Surface;
use crate::geometry::{Point, Rect};
use crossterm::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetColor(Color),
    FillRect(Rect),
    FillEllipse(Rect),
    FillPolygon(Vec<Point>),
}

/// A fill together with the color it was painted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub shape: DrawCommand,
}

/// Surface that keeps the command stream instead of rasterizing it.
#[derive(Debug, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Every fill paired with the color active when it was issued.
    pub fn fills(&self) -> Vec<Fill> {
        let mut color = Color::Reset;
        let mut fills = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetColor(c) => color = *c,
                shape => fills.push(Fill {
                    color,
                    shape: shape.clone(),
                }),
            }
        }
        fills
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for Recorder {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn fill_ellipse(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::FillEllipse(bounds));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::FillPolygon(points.to_vec()));
    }
}
