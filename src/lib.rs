// Library exports for the binary and for testing
pub use controls::{Controls, EdgeTrigger};
pub use entities::{Bounds, Bullet, Collider, Direction, Enemy, Player, SessionState, Tint};
pub use world::{FrameReport, World, update};

pub mod app;
pub mod audio;
pub mod config;
pub mod controls;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod screen;
pub mod world;
