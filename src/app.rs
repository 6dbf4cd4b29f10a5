use crate::app_state::AppState;
use crate::config::Config;
use crate::render::{Canvas, TerminalRenderer, Viewport};
use crate::scene::{ClickOutcome, Interactive, WorldScene};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Whether the loop keeps going after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    state: AppState,
    scene: WorldScene,
    canvas: Canvas,
    viewport: Viewport,
    tick_interval: Duration,
}

impl App {
    pub fn new(config: &Config, term_width: u16, term_height: u16) -> Self {
        let mut scene = WorldScene::village(config.animation.motion());
        if config.scene.start_at_night {
            scene.toggle_night();
        }

        let (scene_width, scene_height) = scene.size();
        let viewport = Viewport::new(term_width, term_height, scene_width, scene_height);
        let state = AppState::new(&scene, config.hide_hud);

        Self {
            state,
            scene,
            canvas: Canvas::for_viewport(&viewport),
            viewport,
            tick_interval: config.animation.tick_interval(),
        }
    }

    pub fn scene(&self) -> &WorldScene {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(&mut self, term_width: u16, term_height: u16) {
        let (scene_width, scene_height) = self.scene.size();
        self.viewport = Viewport::new(term_width, term_height, scene_width, scene_height);
        self.canvas.fit(&self.viewport);
    }

    /// Applies one terminal event to the scene.
    pub fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key_event) => return self.handle_key(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            Event::Resize(width, height) => self.resize(width, height),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key_event: KeyEvent) -> Flow {
        if key_event.kind == KeyEventKind::Release {
            return Flow::Continue;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let night = self.scene.toggle_night();
                self.state.record_click(ClickOutcome::DayNight { night });
            }
            KeyCode::Char(' ') => {
                let paused = self.scene.toggle_pause();
                log::debug!("animation {}", if paused { "paused" } else { "resumed" });
            }
            _ => {}
        }
        Flow::Continue
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        // Presses only; drags, moves and scrolling do nothing.
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let point = self.viewport.cell_to_scene(mouse_event.column, mouse_event.row);
        let outcome = self.scene.on_click(point.x, point.y);
        log::debug!("click at ({}, {}): {:?}", point.x, point.y, outcome);
        self.state.record_click(outcome);
    }

    pub fn draw(&mut self, renderer: &mut TerminalRenderer) -> io::Result<()> {
        self.scene.render(&mut self.canvas);
        renderer.present(&self.canvas)?;

        if !self.state.hide_hud {
            self.state.observe(&self.scene);
            self.state.update_cached_info();
            renderer.render_line_colored(
                2,
                1,
                &self.state.cached_hud,
                crossterm::style::Color::Cyan,
            )?;
        }

        renderer.flush()
    }

    pub async fn run(&mut self, renderer: &mut TerminalRenderer) -> io::Result<()> {
        let (term_width, term_height) = renderer.get_size();
        self.resize(term_width, term_height);

        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        log::info!(
            "animating at {} ms per tick, motion {}",
            self.tick_interval.as_millis(),
            self.scene.motion().mode()
        );

        loop {
            ticker.tick().await;

            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                if let Event::Resize(width, height) = event {
                    renderer.manual_resize(width, height)?;
                }
                if self.handle_event(event) == Flow::Quit {
                    return Ok(());
                }
            }

            self.scene.on_tick();
            self.draw(renderer)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::MotionMode;
    use crate::geometry::Point;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        // 111 x 67 cells map 10 scene units to a column and 5 to a pixel row
        App::new(&Config::default(), 111, 67)
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_click_on_sun_switches_to_night() {
        let mut app = app();
        // cell (95, 18) is scene (955, 185), inside the sun
        assert_eq!(app.handle_event(click(95, 18)), Flow::Continue);
        assert!(app.scene().is_night());
    }

    #[test]
    fn test_click_on_house_lights_it() {
        let mut app = app();
        // cell (30, 50) is scene (305, 505), on the second house
        app.handle_event(click(30, 50));
        assert!(app.scene().houses()[1].is_lit());
    }

    #[test]
    fn test_non_press_mouse_events_are_ignored() {
        let mut app = app();
        for kind in [
            MouseEventKind::Up(MouseButton::Left),
            MouseEventKind::Drag(MouseButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::Down(MouseButton::Right),
            MouseEventKind::ScrollDown,
        ] {
            app.handle_event(Event::Mouse(MouseEvent {
                kind,
                column: 95,
                row: 18,
                modifiers: KeyModifiers::NONE,
            }));
        }
        assert!(!app.scene().is_night());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(
            app.handle_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Flow::Quit
        );
        assert_eq!(
            app.handle_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
        assert_eq!(
            app.handle_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Flow::Continue
        );
    }

    #[test]
    fn test_night_and_pause_keys() {
        let mut app = app();
        app.handle_event(key(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(app.scene().is_night());
        app.handle_event(key(KeyCode::Char(' '), KeyModifiers::NONE));
        assert!(app.scene().is_paused());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        app.handle_event(Event::Resize(222, 134));
        assert_eq!(app.viewport().cols, 222);
        assert_eq!(app.viewport().cell_to_scene(0, 0), Point::new(2, 2));
    }

    #[test]
    fn test_config_drives_initial_scene() {
        let mut config = Config::default();
        config.scene.start_at_night = true;
        config.animation.motion = MotionMode::Wave;
        let app = App::new(&config, 80, 24);
        assert!(app.scene().is_night());
        assert_eq!(app.scene().motion().mode(), MotionMode::Wave);
    }
}
