use std::fmt;

use crossterm::style::Stylize;
use dialoguer::{Confirm, Input, Select};

use crate::animation::MotionMode;
use crate::config::{Config, MAX_TICK_MS};
use crate::error::SetupError;

// ── Styling helpers ──────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!(
        "{}",
        "┌───────────────────────────────────────┐".magenta().bold()
    );
    println!(
        "{}",
        "│     Welcome to hogsmeade setup!       │".magenta().bold()
    );
    println!(
        "{}",
        "│  Let's tune the brooms and the sky.   │".magenta().bold()
    );
    println!(
        "{}",
        "└───────────────────────────────────────┘".magenta().bold()
    );
    println!();
    println!(
        "{}",
        "  Tip: existing values are shown as defaults. Press Enter to keep them.".dim()
    );
    println!();
}

fn print_section(title: &str) {
    let line = "─".repeat(40 - title.len().min(38));
    println!();
    println!("{}", format!("── {title} {line}").magenta().bold());
    println!();
}

fn print_success(config_path: &std::path::Path) {
    println!();
    println!(
        "{}",
        "── All set! ────────────────────────────".green().bold()
    );
    println!();
    println!(
        "  Config saved to {}",
        config_path.display().to_string().bold()
    );
    println!();
    println!("  Run {} to start!", "hogsmeade".green().bold());
    println!();
}

fn print_error(msg: &str) {
    println!("  {} {msg}", "Error:".red().bold());
}

fn current_hint(value: impl fmt::Display) -> String {
    format!("[current: {value}]").dim().to_string()
}

fn yes_no(val: bool) -> &'static str {
    if val { "yes" } else { "no" }
}

const MOTION_MODES: &[MotionMode] = &[MotionMode::Linear, MotionMode::Wave];

fn describe_motion(mode: MotionMode) -> &'static str {
    match mode {
        MotionMode::Linear => "Straight lines, wrapping at the screen edges",
        MotionMode::Wave => "Gentle waves around a fixed height",
    }
}

fn validate_tick_ms(input: &u64) -> Result<(), String> {
    if (1..=MAX_TICK_MS).contains(input) {
        Ok(())
    } else {
        Err(format!("Must be between 1 and {MAX_TICK_MS}"))
    }
}

fn validate_finite(input: &f64) -> Result<(), String> {
    if input.is_finite() {
        Ok(())
    } else {
        Err("Must be a finite number".to_string())
    }
}

// ── Prompt helpers ───────────────────────────────────────────────────

fn prompt_motion(current: MotionMode) -> Result<MotionMode, SetupError> {
    let items: Vec<String> = MOTION_MODES
        .iter()
        .map(|m| format!("{m}: {}", describe_motion(*m)))
        .collect();
    let default = MOTION_MODES.iter().position(|m| *m == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(format!("How should brooms fly? {}", current_hint(current)))
        .items(&items)
        .default(default)
        .interact_opt()
        .map_err(|e| SetupError::PromptError(e.to_string()))?
        .ok_or(SetupError::Cancelled)?;

    Ok(MOTION_MODES[selection])
}

fn prompt_tick_ms(current: u64) -> Result<u64, SetupError> {
    Input::new()
        .with_prompt(format!(
            "Milliseconds per animation tick {}",
            current_hint(current)
        ))
        .default(current)
        .validate_with(|input: &u64| validate_tick_ms(input))
        .interact_text()
        .map_err(|e| SetupError::PromptError(e.to_string()))
}

fn prompt_amplitude(current: f64) -> Result<f64, SetupError> {
    Input::new()
        .with_prompt(format!("Wave height in pixels {}", current_hint(current)))
        .default(current)
        .validate_with(|input: &f64| validate_finite(input))
        .interact_text()
        .map_err(|e| SetupError::PromptError(e.to_string()))
}

fn prompt_frequency(current: f64) -> Result<f64, SetupError> {
    Input::new()
        .with_prompt(format!("Wave frequency per tick {}", current_hint(current)))
        .default(current)
        .validate_with(|input: &f64| validate_finite(input))
        .interact_text()
        .map_err(|e| SetupError::PromptError(e.to_string()))
}

fn prompt_start_at_night(current: bool) -> Result<bool, SetupError> {
    Confirm::new()
        .with_prompt(format!("Start at night? {}", current_hint(yes_no(current))))
        .default(current)
        .interact_opt()
        .map_err(|e| SetupError::PromptError(e.to_string()))?
        .ok_or(SetupError::Cancelled)
}

fn prompt_hide_hud(current: bool) -> Result<bool, SetupError> {
    Confirm::new()
        .with_prompt(format!(
            "Hide the HUD (status line)? {}",
            current_hint(yes_no(current))
        ))
        .default(current)
        .interact_opt()
        .map_err(|e| SetupError::PromptError(e.to_string()))?
        .ok_or(SetupError::Cancelled)
}

// ── Main setup flow ──────────────────────────────────────────────────

pub fn run() -> Result<(), SetupError> {
    print_banner();

    let config_path = Config::get_config_path()?;

    let mut config = if config_path.exists() {
        println!(
            "  {}",
            format!("Found existing config at {}", config_path.display()).dim()
        );
        match Config::load_from_path(&config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("  Warning: Failed to load config: {e}");
                eprintln!("  Starting with default settings.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // ── Animation ────────────────────────────────────────────
    print_section("Animation");

    config.animation.motion = prompt_motion(config.animation.motion)?;
    config.animation.tick_ms = prompt_tick_ms(config.animation.tick_ms)?;
    if config.animation.motion == MotionMode::Wave {
        config.animation.amplitude = prompt_amplitude(config.animation.amplitude)?;
        config.animation.frequency = prompt_frequency(config.animation.frequency)?;
    }

    // ── Display ──────────────────────────────────────────────
    print_section("Display");

    config.scene.start_at_night = prompt_start_at_night(config.scene.start_at_night)?;
    config.hide_hud = prompt_hide_hud(config.hide_hud)?;

    if let Err(e) = config.validate() {
        print_error(&format!("Invalid config: {e}"));
        return Err(SetupError::Config(e));
    }

    config.save(&config_path)?;
    log::info!("setup wrote {}", config_path.display());

    print_success(&config_path);

    Ok(())
}
