use hogsmeade::animation::Motion;
use hogsmeade::animation::broom::FlyingBroom;
use hogsmeade::geometry::Point;
use hogsmeade::render::{Canvas, DrawCommand, Recorder, Viewport, rgb};
use hogsmeade::scene::house::{House, window_count, window_layout};
use hogsmeade::scene::sun::Sun;
use hogsmeade::scene::{ClickOutcome, Interactive, SCENE_HEIGHT, SCENE_WIDTH, WorldScene};

#[test]
fn test_scene_integration_house_scenario() {
    let mut house = House::new(0, 100, 100, 40, rgb(123, 3, 35));

    assert_eq!(house.roof_height(), 10);
    assert_eq!(house.wall_height(), 30);
    // Roof and wall together cover y 60..=100
    assert_eq!(house.roof().y, 60);
    assert_eq!(house.wall().bottom(), 100);

    assert!(!house.is_lit());
    assert!(house.toggle_light(50, 75));
    assert!(house.is_lit());
}

#[test]
fn test_scene_integration_window_count_bounds() {
    for width in (0..=5000).step_by(7) {
        let count = window_count(width);
        assert!((1..=10).contains(&count));

        let windows = window_layout(width, 120);
        let span_start = windows.first().map(|w| w.x).unwrap_or(0);
        let span_end = windows.last().map(|w| w.right()).unwrap_or(0);
        assert!(span_start >= 0);
        assert!(span_end - span_start <= width, "span overflows wall of {width}");
        assert!(span_end <= width);
    }
}

#[test]
fn test_scene_integration_broom_linear_scenario() {
    let mut broom = FlyingBroom::new(50, 1090, 300);
    broom.set_screen_bounds(1110, 670);
    broom.set_velocity(30, 0);

    broom.step_linear();
    assert_eq!(broom.position(), Point::new(1120, 300));
}

#[test]
fn test_scene_integration_broom_wave_scenario() {
    let mut broom = FlyingBroom::new(50, 600, 150);
    broom.set_baseline(150);
    broom.set_velocity(2, 0);

    broom.advance(Motion::Wave {
        amplitude: 30.0,
        frequency: 0.05,
    });
    assert_eq!(broom.position().y, 151);
}

#[test]
fn test_scene_integration_sun_center_and_far_points() {
    let sun = Sun::new(850, 80, 200, 200);
    assert!(sun.contains_point(950, 180));
    assert!(!sun.contains_point(950 + 102, 180));
    assert!(!sun.contains_point(950, 180 - 102));
}

#[test]
fn test_scene_integration_click_sequence() {
    let mut scene = WorldScene::village(Motion::Linear);

    // Every house, then the sun
    let clicks = [(100, 500), (300, 500), (600, 500), (770, 500), (900, 500)];
    for (i, (x, y)) in clicks.iter().enumerate() {
        assert_eq!(
            scene.on_click(*x, *y),
            ClickOutcome::HouseLight { index: i, lit: true }
        );
    }
    assert_eq!(scene.lit_houses(), 5);

    assert_eq!(scene.on_click(950, 180), ClickOutcome::DayNight { night: true });
    assert!(scene.is_night());

    // Clicking the street misses
    assert_eq!(scene.on_click(500, 650), ClickOutcome::Missed);
}

#[test]
fn test_scene_integration_brooms_keep_flying_across_the_screen() {
    let mut scene = WorldScene::village(Motion::Linear);
    for _ in 0..2000 {
        scene.on_tick();
        for broom in scene.flying_brooms() {
            let p = broom.position();
            assert!(p.x >= -50 && p.x <= SCENE_WIDTH + 50, "broom escaped: {p:?}");
            assert!(p.y >= 0 && p.y <= SCENE_HEIGHT);
        }
    }
}

#[test]
fn test_scene_integration_night_render_on_small_terminal() {
    let mut scene = WorldScene::village(Motion::wave());
    scene.toggle_night();
    scene.on_tick();

    let viewport = Viewport::new(80, 24, SCENE_WIDTH, SCENE_HEIGHT);
    let mut canvas = Canvas::for_viewport(&viewport);
    scene.render(&mut canvas);

    assert_eq!(canvas.width(), 80);
    assert_eq!(canvas.height(), 48);
    assert_eq!(canvas.pixel(0, 0), Some(rgb(0, 0, 0)));

    // The moon is white; its center maps to roughly (68, 12)
    let center = viewport.cell_to_scene(68, 6);
    assert!(scene.sun().contains_point(center.x, center.y));
    assert_eq!(canvas.pixel(68, 12), Some(rgb(255, 255, 255)));
}

#[test]
fn test_scene_integration_recorded_frame_starts_with_sky() {
    let scene = WorldScene::village(Motion::Linear);
    let mut recorder = Recorder::new();
    scene.render(&mut recorder);

    let fills = recorder.fills();
    assert_eq!(fills[0].color, rgb(50, 100, 200));
    assert!(matches!(fills[0].shape, DrawCommand::FillRect(_)));
    assert!(matches!(fills.last().map(|f| &f.shape), Some(DrawCommand::FillEllipse(_))));
}
