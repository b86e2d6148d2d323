mod bounds;
mod bullet;
mod enemy;
mod game_state;
mod player;
mod tint;

// Re-export all public types
pub use bounds::{Bounds, Collider};
pub use bullet::Bullet;
pub use enemy::Enemy;
pub use game_state::SessionState;
pub use player::{Direction, Player};
pub use tint::Tint;
