pub mod actor;
pub mod config;
pub mod frame;
pub mod game;
pub mod hud;
pub mod input;
pub mod level;
pub mod player;
pub mod raycaster;
pub mod renderer;
pub mod sprites;
pub mod texture;
pub mod trig;
pub mod vec2;
