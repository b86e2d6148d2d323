use std::env;
use std::path::PathBuf;
use std::time::Duration;

// Gameplay tuning. World units are canvas pixels, speeds are pixels per frame.

pub const CANVAS_WIDTH: i32 = 1200;
pub const CANVAS_HEIGHT: i32 = 800;

pub const PLAYER_WIDTH: i32 = 60;
pub const PLAYER_HEIGHT: i32 = 60;
pub const PLAYER_SPEED: i32 = 8;
pub const PLAYER_HEALTH: i32 = 100;
/// Distance from the bottom edge of the canvas to the player's top edge
pub const PLAYER_BOTTOM_OFFSET: i32 = 50;

pub const ENEMY_WIDTH: i32 = 50;
pub const ENEMY_HEIGHT: i32 = 50;
pub const ENEMY_SPEED: i32 = 3;
pub const ENEMY_HEALTH: i32 = 3;

pub const BULLET_WIDTH: i32 = 4;
pub const BULLET_HEIGHT: i32 = 20;
pub const BULLET_SPEED: i32 = 12;

pub const WAVE_INTERVAL_FRAMES: u64 = 60;
pub const WAVE_COLUMNS: i32 = 10;
pub const WAVE_SPACING: i32 = 100;
pub const WAVE_START_Y: i32 = 50;

pub const KILL_SCORE: u32 = 10;
pub const COLLISION_DAMAGE: i32 = 10;

/// Gameplay tuning handed to [`crate::World`].
///
/// `Default` reproduces the arcade constants above; tests shrink the canvas
/// or weaken enemies through struct update syntax.
///
/// A wave row must fit on the canvas (see [`GameConfig::wave_fits_canvas`]).
/// Enemies are never pulled back inside the walls, so one spawned outside
/// `[0, canvas_width - ENEMY_WIDTH]` flips and drops on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub player_speed: i32,
    pub player_health: i32,
    pub enemy_speed: i32,
    pub enemy_health: i32,
    pub bullet_speed: i32,
    pub wave_interval: u64,
    pub wave_columns: i32,
    pub wave_spacing: i32,
    pub wave_start_y: i32,
    pub kill_score: u32,
    pub collision_damage: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_health: PLAYER_HEALTH,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_HEALTH,
            bullet_speed: BULLET_SPEED,
            wave_interval: WAVE_INTERVAL_FRAMES,
            wave_columns: WAVE_COLUMNS,
            wave_spacing: WAVE_SPACING,
            wave_start_y: WAVE_START_Y,
            kill_score: KILL_SCORE,
            collision_damage: COLLISION_DAMAGE,
        }
    }
}

impl GameConfig {
    /// Whether every enemy of a centred wave row starts inside the walls
    pub fn wave_fits_canvas(&self) -> bool {
        if self.wave_columns <= 0 {
            return true;
        }
        let start_x = (self.canvas_width - self.wave_columns * self.wave_spacing) / 2;
        let last_x = start_x + (self.wave_columns - 1) * self.wave_spacing;
        start_x >= 0 && last_x <= self.canvas_width - ENEMY_WIDTH
    }
}

// Runtime knobs (not gameplay tuning).

const DEFAULT_FPS: u32 = 60;
const MAX_FPS: u32 = 240;

/// Ticks per second for the driver loop. `WAVE_SHOOTER_FPS`, clamped to 1..=240.
pub fn frames_per_second() -> u32 {
    match env::var("WAVE_SHOOTER_FPS") {
        Ok(raw) => parse_fps(&raw).unwrap_or_else(|| {
            log::warn!("ignoring WAVE_SHOOTER_FPS={raw:?}, using {DEFAULT_FPS}");
            DEFAULT_FPS
        }),
        Err(_) => DEFAULT_FPS,
    }
}

pub fn tick_interval() -> Duration {
    Duration::from_micros(1_000_000 / u64::from(frames_per_second()))
}

fn parse_fps(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|fps| *fps > 0)
        .map(|fps| fps.min(MAX_FPS))
}

pub fn log_path() -> PathBuf {
    env::var_os("WAVE_SHOOTER_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("debug.log"))
}

pub fn audio_muted() -> bool {
    env::var_os("WAVE_SHOOTER_MUTE").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 1200);
        assert_eq!(config.canvas_height, 800);
        assert_eq!(config.wave_interval, 60);
        assert_eq!(config.wave_columns * config.wave_spacing, 1000);
        assert!(config.wave_fits_canvas());
    }

    #[test]
    fn test_wave_wider_than_canvas_does_not_fit() {
        let config = GameConfig {
            wave_columns: 13,
            ..GameConfig::default()
        };
        assert!(!config.wave_fits_canvas());

        let narrow = GameConfig {
            canvas_width: 400,
            wave_columns: 4,
            ..GameConfig::default()
        };
        assert!(narrow.wave_fits_canvas());
    }

    #[test]
    fn test_parse_fps() {
        assert_eq!(parse_fps("30"), Some(30));
        assert_eq!(parse_fps(" 120 "), Some(120));
        assert_eq!(parse_fps("1000"), Some(MAX_FPS));
        assert_eq!(parse_fps("0"), None);
        assert_eq!(parse_fps("fast"), None);
    }
}
