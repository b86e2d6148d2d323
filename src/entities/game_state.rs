/// Lifecycle of one play session.
///
/// `NotStarted -> Running` on the start trigger, `Running -> GameOver` once
/// the player's health drops to zero. There is no way back from `GameOver`;
/// a new session needs a fresh [`crate::World`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl SessionState {
    pub fn is_running(&self) -> bool {
        *self == SessionState::Running
    }
}
