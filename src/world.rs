use crate::config::GameConfig;
use crate::controls::{Controls, EdgeTrigger};
use crate::entities::{Bullet, Collider, Direction, Enemy, Player, SessionState};

pub const GAME_OVER_BANNER: &str = "Game Over!";

/// What happened during one [`World::step`], for sound and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub shots_fired: u32,
    pub waves_spawned: u32,
    pub enemies_destroyed: u32,
    pub player_hits: u32,
    /// The session ended on this frame
    pub game_over: bool,
}

/// One play session: the entities, the counters and the session state.
///
/// The world never loops or sleeps. A driver calls [`World::step`] once per
/// frame with that frame's [`Controls`].
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    player: Player,
    enemies: Vec<Enemy>,
    bullets: Vec<Bullet>,
    score: u32,
    level: u32,
    frame_count: u64,
    state: SessionState,
    fire_trigger: EdgeTrigger,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        if !config.wave_fits_canvas() {
            log::warn!(
                "wave of {} x {} px does not fit a {} px canvas, enemies will start outside the walls",
                config.wave_columns,
                config.wave_spacing,
                config.canvas_width
            );
        }
        let mut player = Player::spawn(config.canvas_width, config.canvas_height);
        player.speed = config.player_speed;
        player.health = config.player_health;

        Self {
            config,
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            level: 0,
            frame_count: 0,
            state: SessionState::NotStarted,
            fire_trigger: EdgeTrigger::new(),
        }
    }

    /// Start trigger. Only meaningful before the first frame of a session.
    pub fn start(&mut self) {
        if self.state == SessionState::NotStarted {
            self.state = SessionState::Running;
            log::info!("session started");
        }
    }

    /// Advances the session by one frame. Does nothing unless running.
    pub fn step(&mut self, controls: &Controls) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.state.is_running() {
            return report;
        }

        self.frame_count += 1;

        if self.fire_trigger.sample(controls.fire) {
            let mut bullet = self.player.fire();
            bullet.speed = self.config.bullet_speed;
            self.bullets.push(bullet);
            report.shots_fired += 1;
        }

        // Waves stack on top of whatever is still alive
        if self.config.wave_interval > 0 && self.frame_count % self.config.wave_interval == 0 {
            self.spawn_wave();
            report.waves_spawned += 1;
        }

        // Both keys held means two shifts, not a cancel
        if controls.left {
            self.player.shift(Direction::Left, self.config.canvas_width);
        }
        if controls.right {
            self.player.shift(Direction::Right, self.config.canvas_width);
        }

        self.update_bullets();
        self.update_enemies(&mut report);

        if !self.player.is_alive() {
            self.state = SessionState::GameOver;
            report.game_over = true;
            log::info!(
                "game over: score {} level {} after {} frames",
                self.score,
                self.level,
                self.frame_count
            );
        }

        report
    }

    /// Appends one row of enemies centred on the canvas and bumps the level.
    pub fn spawn_wave(&mut self) {
        let columns = self.config.wave_columns;
        let spacing = self.config.wave_spacing;
        let start_x = (self.config.canvas_width - columns * spacing) / 2;

        for col in 0..columns {
            self.enemies.push(
                Enemy::new(start_x + col * spacing, self.config.wave_start_y)
                    .with_health(self.config.enemy_health)
                    .with_speed(self.config.enemy_speed),
            );
        }
        self.level += 1;

        log::debug!(
            "wave {} spawned, {} enemies on screen",
            self.level,
            self.enemies.len()
        );
    }

    fn update_bullets(&mut self) {
        for i in (0..self.bullets.len()).rev() {
            self.bullets[i].update();
            if self.bullets[i].is_out_of_bounds() {
                self.bullets.remove(i);
            }
        }
    }

    fn update_enemies(&mut self, report: &mut FrameReport) {
        // Back to front: removing slot i only shifts slots already visited
        for i in (0..self.enemies.len()).rev() {
            self.enemies[i].update(self.config.canvas_width);
            let enemy_bounds = self.enemies[i].bounds();
            let mut destroyed = false;

            // At most one bullet per enemy per frame, newest slot first
            if let Some(j) = self
                .bullets
                .iter()
                .rposition(|bullet| bullet.collides_with(&enemy_bounds))
            {
                self.bullets.remove(j);
                if self.enemies[i].take_damage() {
                    self.enemies.remove(i);
                    self.score += self.config.kill_score;
                    report.enemies_destroyed += 1;
                    destroyed = true;
                    log::trace!("enemy destroyed at ({}, {})", enemy_bounds.x, enemy_bounds.y);
                }
            }

            // Checked against the box this slot held at the top of the
            // iteration, even when the enemy was just shot down
            if self.player.collides_with(&enemy_bounds) {
                self.player.take_damage(self.config.collision_damage);
                report.player_hits += 1;
                if !destroyed {
                    self.enemies.remove(i);
                }
                log::debug!("player hit, health now {}", self.player.health);
            }
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn bullets_mut(&mut self) -> &mut Vec<Bullet> {
        &mut self.bullets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn health(&self) -> i32 {
        self.player.health
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Text the front-end should put over the playfield, if any
    pub fn banner(&self) -> Option<&'static str> {
        match self.state {
            SessionState::GameOver => Some(GAME_OVER_BANNER),
            _ => None,
        }
    }
}

/// Value-in, value-out form of [`World::step`].
pub fn update(mut world: World, controls: &Controls) -> World {
    world.step(controls);
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Bounds;

    fn running_world() -> World {
        let mut world = World::new();
        world.start();
        world
    }

    /// Steps `frames` times with no input
    fn idle(world: &mut World, frames: usize) {
        for _ in 0..frames {
            world.step(&Controls::idle());
        }
    }

    #[test]
    fn test_new_world_waits_for_start() {
        let mut world = World::new();
        assert_eq!(world.state(), SessionState::NotStarted);
        assert_eq!(world.level(), 0);

        let report = world.step(&Controls::fire());
        assert_eq!(report, FrameReport::default());
        assert_eq!(world.frame_count(), 0);
        assert!(world.bullets().is_empty());
    }

    #[test]
    fn test_start_only_from_not_started() {
        let mut world = running_world();
        assert_eq!(world.state(), SessionState::Running);

        world.player_mut().health = 0;
        world.step(&Controls::idle());
        assert_eq!(world.state(), SessionState::GameOver);

        world.start();
        assert_eq!(world.state(), SessionState::GameOver);
    }

    #[test]
    fn test_wave_spawns_every_sixty_frames() {
        let mut world = running_world();
        idle(&mut world, 59);
        assert!(world.enemies().is_empty());

        let report = world.step(&Controls::idle());
        assert_eq!(report.waves_spawned, 1);
        assert_eq!(world.level(), 1);
        assert_eq!(world.enemies().len(), 10);

        let xs: Vec<i32> = world.enemies().iter().map(|e| e.x).collect();
        // Advanced once in the spawn frame
        assert_eq!(xs, vec![103, 203, 303, 403, 503, 603, 703, 803, 903, 1003]);
        assert!(world.enemies().iter().all(|e| e.y == 50));
    }

    #[test]
    fn test_waves_accumulate() {
        let mut world = running_world();
        world.spawn_wave();
        world.spawn_wave();
        assert_eq!(world.enemies().len(), 20);
        assert_eq!(world.level(), 2);
    }

    #[test]
    fn test_holding_fire_yields_one_bullet() {
        let mut world = running_world();
        for _ in 0..10 {
            world.step(&Controls::fire());
        }
        assert_eq!(world.bullets().len(), 1);

        world.step(&Controls::idle());
        world.step(&Controls::fire());
        assert_eq!(world.bullets().len(), 2);
    }

    #[test]
    fn test_fired_bullet_starts_at_ship_center() {
        let mut world = running_world();
        world.step(&Controls::fire());
        let bullet = &world.bullets()[0];
        assert_eq!(bullet.x, 628);
        // Fired, then advanced once in the same frame
        assert_eq!(bullet.y, 750 - 12);
    }

    #[test]
    fn test_both_directions_apply() {
        let mut world = running_world();
        world.player_mut().x = 0;
        world.step(&Controls {
            left: true,
            right: true,
            fire: false,
        });
        // Clamped left first, then moved right
        assert_eq!(world.player().x, 8);
    }

    #[test]
    fn test_one_bullet_consumed_per_enemy_per_frame() {
        let mut world = running_world();
        world.enemies_mut().push(Enemy::new(300, 300));
        world.bullets_mut().push(Bullet::new(320, 330));
        world.bullets_mut().push(Bullet::new(310, 330));

        world.step(&Controls::idle());
        assert_eq!(world.bullets().len(), 1);
        // The later slot is scanned first and wins
        assert_eq!(world.bullets()[0].x, 320);
        assert_eq!(world.enemies()[0].health, 2);
    }

    #[test]
    fn test_shot_down_enemy_overlapping_player_still_hurts() {
        let mut world = running_world();
        let player = world.player().clone();
        world
            .enemies_mut()
            .push(Enemy::new(player.x, player.y - 10).with_health(1).with_speed(0));
        world.bullets_mut().push(Bullet::new(player.x + 10, player.y));

        let report = world.step(&Controls::idle());
        assert_eq!(report.enemies_destroyed, 1);
        assert_eq!(report.player_hits, 1);
        assert_eq!(world.score(), 10);
        assert_eq!(world.health(), 90);
        assert!(world.enemies().is_empty());
    }

    #[test]
    fn test_player_collision_does_not_touch_other_slots() {
        let mut world = running_world();
        let player = world.player().clone();
        world.enemies_mut().push(Enemy::new(100, 100).with_speed(0));
        world
            .enemies_mut()
            .push(Enemy::new(player.x, player.y).with_speed(0));

        world.step(&Controls::idle());
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].bounds(), Bounds::new(100, 100, 50, 50));
        assert_eq!(world.health(), 90);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut world = running_world();
        world.player_mut().health = 10;
        let player = world.player().clone();
        world
            .enemies_mut()
            .push(Enemy::new(player.x, player.y).with_speed(0));
        world.enemies_mut().push(Enemy::new(100, 100));
        world.bullets_mut().push(Bullet::new(600, 400));

        let report = world.step(&Controls::idle());
        assert!(report.game_over);
        assert_eq!(world.state(), SessionState::GameOver);
        assert_eq!(world.banner(), Some("Game Over!"));

        let enemies = world.enemies().to_vec();
        let bullets = world.bullets().to_vec();
        idle(&mut world, 120);
        assert_eq!(world.enemies(), enemies.as_slice());
        assert_eq!(world.bullets(), bullets.as_slice());
    }

    #[test]
    fn test_update_passes_world_through() {
        let world = running_world();
        let world = update(world, &Controls::right());
        assert_eq!(world.player().x, 608);
        assert_eq!(world.frame_count(), 1);
    }

    #[test]
    fn test_zero_wave_interval_disables_spawning() {
        let mut world = World::with_config(GameConfig {
            wave_interval: 0,
            ..GameConfig::default()
        });
        world.start();
        idle(&mut world, 240);
        assert!(world.enemies().is_empty());
        assert_eq!(world.level(), 0);
    }
}
