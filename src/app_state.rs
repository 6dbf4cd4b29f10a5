use crate::animation::MotionMode;
use crate::scene::{ClickOutcome, WorldScene};

/// What the status line currently shows, rebuilt only when it goes stale.
pub struct AppState {
    pub hide_hud: bool,
    pub cached_hud: String,
    pub hud_needs_update: bool,
    pub last_click: Option<ClickOutcome>,
    snapshot: HudSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HudSnapshot {
    night: bool,
    lit: usize,
    houses: usize,
    motion: MotionMode,
    paused: bool,
}

impl HudSnapshot {
    fn of(scene: &WorldScene) -> Self {
        Self {
            night: scene.is_night(),
            lit: scene.lit_houses(),
            houses: scene.houses().len(),
            motion: scene.motion().mode(),
            paused: scene.is_paused(),
        }
    }
}

impl AppState {
    pub fn new(scene: &WorldScene, hide_hud: bool) -> Self {
        Self {
            hide_hud,
            cached_hud: String::new(),
            hud_needs_update: true,
            last_click: None,
            snapshot: HudSnapshot::of(scene),
        }
    }

    pub fn record_click(&mut self, outcome: ClickOutcome) {
        self.last_click = Some(outcome);
        self.hud_needs_update = true;
    }

    /// Marks the HUD stale if anything it displays has changed.
    pub fn observe(&mut self, scene: &WorldScene) {
        let snapshot = HudSnapshot::of(scene);
        if snapshot != self.snapshot {
            self.snapshot = snapshot;
            self.hud_needs_update = true;
        }
    }

    pub fn update_cached_info(&mut self) {
        if !self.hud_needs_update {
            return;
        }

        let s = &self.snapshot;
        let mut parts = vec![
            if s.night { "Night" } else { "Day" }.to_string(),
            format!("Lights on: {}/{}", s.lit, s.houses),
            format!("Motion: {}{}", s.motion, if s.paused { " (paused)" } else { "" }),
        ];

        parts.push(match self.last_click {
            Some(ClickOutcome::Missed) => "Nothing there".to_string(),
            _ => "Click a house or the sun".to_string(),
        });
        parts.push("Press 'q' to quit".to_string());

        self.cached_hud = parts.join(" | ");
        self.hud_needs_update = false;
    }
}
