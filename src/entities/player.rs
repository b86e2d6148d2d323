use super::bounds::{Bounds, Collider};
use super::bullet::Bullet;
use crate::config::{
    BULLET_WIDTH, PLAYER_BOTTOM_OFFSET, PLAYER_HEALTH, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn sign(&self) -> i32 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub speed: i32,
    /// Not clamped at zero; anything `<= 0` ends the session.
    pub health: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            speed: PLAYER_SPEED,
            health: PLAYER_HEALTH,
        }
    }

    /// Fresh ship with its left edge at mid-canvas, just above the bottom edge
    pub fn spawn(canvas_width: i32, canvas_height: i32) -> Self {
        Self::new(canvas_width / 2, canvas_height - PLAYER_BOTTOM_OFFSET)
    }

    /// Shifts by one step of `speed` and clamps into `[0, canvas_width - width]`.
    pub fn shift(&mut self, direction: Direction, canvas_width: i32) {
        let max_x = (canvas_width - self.get_width()).max(0);
        self.x = (self.x + direction.sign() * self.speed).clamp(0, max_x);
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.health -= damage;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Bullet leaving the horizontal centre of the ship's top edge
    pub fn fire(&self) -> Bullet {
        let center_x = self.x + self.get_width() / 2;
        Bullet::new(center_x - BULLET_WIDTH / 2, self.y)
    }

    pub fn get_width(&self) -> i32 {
        PLAYER_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        PLAYER_HEIGHT
    }
}

impl Collider for Player {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }
}
