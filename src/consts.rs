//! Gameplay tuning. Everything is in logical canvas pixels and frames.

use ratatui::style::Color;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const FPS: u32 = 60;

pub const BACKGROUND_COLOR: Color = Color::Rgb(20, 20, 50);
pub const PLAYER_COLOR: Color = Color::Rgb(255, 180, 0);
pub const TEXT_COLOR: Color = Color::Rgb(255, 255, 255);
pub const GAME_OVER_COLOR: Color = Color::Rgb(255, 60, 60);

pub const STAR_COLORS: [Color; 4] = [
    Color::Rgb(255, 255, 100),
    Color::Rgb(250, 250, 210),
    Color::Rgb(255, 215, 0),
    Color::Rgb(240, 230, 140),
];

pub const BASKET_WIDTH: i32 = 100;
pub const BASKET_HEIGHT: i32 = 20;
pub const BASKET_Y: i32 = SCREEN_HEIGHT - BASKET_HEIGHT - 30;
pub const BASKET_SPEED: i32 = 10;
pub const BASKET_RADIUS: i32 = 5;
pub const HANDLE_SIZE: i32 = 10;
pub const HANDLE_RADIUS: i32 = 3;

pub const STAR_SIZE_MIN: i32 = 10;
pub const STAR_SIZE_MAX: i32 = 25;
pub const STAR_SPEED_MIN: i32 = 2;
pub const STAR_SPEED_MAX: i32 = 5;

pub const START_LIVES: i32 = 5;

pub const SPAWN_INTERVAL_START: u32 = 40;
pub const SPAWN_INTERVAL_MIN: u32 = 15;
pub const SPAWN_INTERVAL_STEP: u32 = 2;
/// The ramp only fires on scores that are a multiple of this.
pub const SPAWN_RAMP_EVERY: u32 = 10;
