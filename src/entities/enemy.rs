use super::bounds::{Bounds, Collider};
use crate::config::{ENEMY_HEALTH, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    /// Horizontal heading, -1 or 1
    pub direction: i32,
    pub speed: i32,
}

impl Enemy {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            health: ENEMY_HEALTH,
            direction: 1,
            speed: ENEMY_SPEED,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_speed(mut self, speed: i32) -> Self {
        self.speed = speed;
        self
    }

    /// Moves one step sideways. Leaving `[0, canvas_width - width]` reverses
    /// the heading and drops the enemy by its own height in the same tick.
    pub fn update(&mut self, canvas_width: i32) {
        self.x += self.direction * self.speed;

        let max_x = canvas_width - self.get_width();
        if self.x < 0 || self.x > max_x {
            self.direction = -self.direction;
            self.y += self.get_height();
        }
    }

    /// Returns `true` when this hit destroyed the enemy.
    pub fn take_damage(&mut self) -> bool {
        self.health -= 1;
        !self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn get_width(&self) -> i32 {
        ENEMY_WIDTH
    }

    pub fn get_height(&self) -> i32 {
        ENEMY_HEIGHT
    }
}

impl Collider for Enemy {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.get_width(), self.get_height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANVAS_WIDTH;

    #[test]
    fn test_enemy_new() {
        let enemy = Enemy::new(100, 50);
        assert_eq!(enemy.health, 3);
        assert_eq!(enemy.direction, 1);
        assert_eq!(enemy.speed, 3);
    }

    #[test]
    fn test_enemy_moves_sideways() {
        let mut enemy = Enemy::new(100, 50);
        enemy.update(CANVAS_WIDTH);
        assert_eq!(enemy.x, 103);
        assert_eq!(enemy.y, 50);
    }

    #[test]
    fn test_enemy_bounces_off_left_wall() {
        let mut enemy = Enemy::new(0, 50);
        enemy.direction = -1;
        enemy.update(CANVAS_WIDTH);
        assert_eq!(enemy.direction, 1);
        assert_eq!(enemy.y, 100);

        // Back inside on the next tick, no second flip
        enemy.update(CANVAS_WIDTH);
        assert_eq!(enemy.x, 0);
        assert_eq!(enemy.direction, 1);
        assert_eq!(enemy.y, 100);
    }

    #[test]
    fn test_enemy_bounces_off_right_wall() {
        let mut enemy = Enemy::new(1149, 50);
        enemy.update(CANVAS_WIDTH);
        assert_eq!(enemy.x, 1152);
        assert_eq!(enemy.direction, -1);
        assert_eq!(enemy.y, 100);
    }

    #[test]
    fn test_enemy_at_edge_keeps_heading() {
        let mut enemy = Enemy::new(1147, 50);
        enemy.update(CANVAS_WIDTH);
        assert_eq!(enemy.x, 1150);
        assert_eq!(enemy.direction, 1);
        assert_eq!(enemy.y, 50);
    }

    #[test]
    fn test_enemy_take_damage() {
        let mut enemy = Enemy::new(10, 10);
        assert!(!enemy.take_damage());
        assert!(!enemy.take_damage());
        assert!(enemy.take_damage());
        assert_eq!(enemy.health, 0);
        assert!(!enemy.is_alive());
    }

    #[test]
    fn test_enemy_with_health_one_dies_on_first_hit() {
        let mut enemy = Enemy::new(10, 10).with_health(1);
        assert!(enemy.take_damage());
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_enemy_never_drifts_far_outside(
                initial_x in 0i32..=1150,
                heading in prop::sample::select(vec![-1i32, 1]),
                ticks in 1usize..2000
            ) {
                let mut enemy = Enemy::new(initial_x, 50);
                enemy.direction = heading;
                for _ in 0..ticks {
                    enemy.update(CANVAS_WIDTH);
                    prop_assert!(enemy.x >= -enemy.speed);
                    prop_assert!(enemy.x <= CANVAS_WIDTH - ENEMY_WIDTH + enemy.speed);
                }
            }

            #[test]
            fn test_enemy_only_descends(
                initial_x in 0i32..=1150,
                ticks in 1usize..1000
            ) {
                let mut enemy = Enemy::new(initial_x, 50);
                let mut previous_y = enemy.y;
                for _ in 0..ticks {
                    enemy.update(CANVAS_WIDTH);
                    let dropped = enemy.y - previous_y;
                    prop_assert!(dropped == 0 || dropped == ENEMY_HEIGHT);
                    previous_y = enemy.y;
                }
            }
        }
    }
}
