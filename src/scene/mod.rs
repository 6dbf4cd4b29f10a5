pub mod decorations;
pub mod house;
pub mod street;
pub mod sun;

use crate::animation::Motion;
use crate::animation::broom::FlyingBroom;
use crate::geometry::{Point, Rect};
use crate::render::{Surface, rgb};
use crossterm::style::Color;
use decorations::{StandingBroom, Tree};
use house::House;
use street::Street;
use sun::Sun;

pub const SCENE_WIDTH: i32 = 1110;
pub const SCENE_HEIGHT: i32 = 670;

const DAY_SKY: Color = rgb(50, 100, 200);
const NIGHT_SKY: Color = rgb(0, 0, 0);

/// Anything that can paint itself. Hit-testing is optional.
pub trait SceneObject {
    fn draw(&self, surface: &mut dyn Surface);

    fn hit_test(&self, _point: Point) -> bool {
        false
    }
}

/// What a host event loop drives: one call per tick, one per click, and a
/// full repaint whenever it wants a frame.
pub trait Interactive {
    fn on_tick(&mut self);
    fn on_click(&mut self, x: i32, y: i32) -> ClickOutcome;
    fn render(&self, surface: &mut dyn Surface);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    HouseLight { index: usize, lit: bool },
    DayNight { night: bool },
    Missed,
}

pub struct WorldScene {
    houses: Vec<House>,
    street: Street,
    sun: Sun,
    trees: Vec<Tree>,
    standing_brooms: Vec<StandingBroom>,
    flying_brooms: Vec<FlyingBroom>,
    motion: Motion,
    paused: bool,
    width: i32,
    height: i32,
}

impl WorldScene {
    pub fn new(street: Street, sun: Sun, motion: Motion) -> Self {
        Self {
            houses: Vec::new(),
            street,
            sun,
            trees: Vec::new(),
            standing_brooms: Vec::new(),
            flying_brooms: Vec::new(),
            motion,
            paused: false,
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }

    /// The village: five houses along the street, three trees, brooms
    /// leaning by the doors and two more in the sky.
    pub fn village(motion: Motion) -> Self {
        let mut scene = Self::new(
            Street::new(0, 570, SCENE_WIDTH, 100),
            Sun::new(850, 80, 200, 200),
            motion,
        );

        scene.standing_brooms = vec![
            StandingBroom::new(50, 80, 470),
            StandingBroom::new(50, 330, 470),
            StandingBroom::new(50, 720, 470),
        ];

        scene.houses = vec![
            House::new(35, 575, 150, 240, rgb(123, 3, 35)),
            House::new(240, 575, 170, 215, rgb(70, 130, 180)),
            House::new(545, 575, 135, 185, rgb(60, 180, 115)),
            House::new(700, 575, 150, 165, rgb(240, 230, 140)),
            House::new(850, 575, 170, 175, rgb(219, 112, 147)),
        ];

        scene.trees = vec![
            Tree::new(100, 180, 370),
            Tree::new(80, 1000, 410),
            Tree::new(110, 516, 350),
        ];

        for (x, y, velocity_x) in [(300, 200, 3), (600, 150, 2)] {
            let mut broom = FlyingBroom::new(50, x, y);
            broom.set_velocity(velocity_x, 0);
            broom.set_screen_bounds(SCENE_WIDTH, SCENE_HEIGHT);
            broom.set_baseline(y);
            scene.flying_brooms.push(broom);
        }

        scene
    }

    pub fn add_house(&mut self, house: House) {
        self.houses.push(house);
    }

    pub fn add_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    pub fn add_standing_broom(&mut self, broom: StandingBroom) {
        self.standing_brooms.push(broom);
    }

    pub fn add_flying_broom(&mut self, broom: FlyingBroom) {
        self.flying_brooms.push(broom);
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn flying_brooms(&self) -> &[FlyingBroom] {
        &self.flying_brooms
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_night(&self) -> bool {
        self.sun.is_night()
    }

    pub fn toggle_night(&mut self) -> bool {
        self.sun.toggle();
        self.sun.is_night()
    }

    pub fn lit_houses(&self) -> usize {
        self.houses.iter().filter(|h| h.is_lit()).count()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn sky_color(&self) -> Color {
        if self.sun.is_night() { NIGHT_SKY } else { DAY_SKY }
    }
}

impl Interactive for WorldScene {
    fn on_tick(&mut self) {
        if self.paused {
            return;
        }
        for broom in &mut self.flying_brooms {
            broom.advance(self.motion);
        }
    }

    fn on_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        for (index, house) in self.houses.iter_mut().enumerate() {
            if house.toggle_light(x, y) {
                return ClickOutcome::HouseLight {
                    index,
                    lit: house.is_lit(),
                };
            }
        }

        if self.sun.contains_point(x, y) {
            self.sun.toggle();
            return ClickOutcome::DayNight {
                night: self.sun.is_night(),
            };
        }

        ClickOutcome::Missed
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.set_color(self.sky_color());
        surface.fill_rect(Rect::new(0, 0, self.width, self.height));

        for house in &self.houses {
            house.draw(surface);
        }
        self.street.draw(surface);
        self.sun.draw(surface);
        for broom in &self.flying_brooms {
            broom.draw(surface);
        }
        for broom in &self.standing_brooms {
            broom.draw(surface);
        }
        for tree in &self.trees {
            tree.draw(surface);
        }
    }
}
