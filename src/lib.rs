pub mod animation;
pub mod app;
pub mod app_state;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod onboard;
pub mod render;
pub mod scene;
