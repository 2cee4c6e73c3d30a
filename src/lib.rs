//! Catch the Falling Stars, a terminal arcade game.
//!
//! - `game`: state, spawning, collisions (pure, seedable)
//! - `render`: draws a game state onto any `Surface`
//! - `ui`: the ratatui frame and the terminal `Surface`
//! - `input`, `event`, `app`: key tracking, frame pacing and the shell

pub mod app;
pub mod consts;
pub mod event;
pub mod game;
pub mod input;
pub mod render;
pub mod ui;
