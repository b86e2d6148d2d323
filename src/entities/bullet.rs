use super::bounds::{Bounds, Collider};
use crate::config::{BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Pixels travelled upward per frame
    pub speed: i32,
}

impl Bullet {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            speed: BULLET_SPEED,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// Bullets are gone once their top edge passes the top of the canvas
    pub fn is_out_of_bounds(&self) -> bool {
        self.y < 0
    }

    pub fn get_width(&self) -> i32 {
        BULLET_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        BULLET_HEIGHT
    }
}

impl Collider for Bullet {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }
}
