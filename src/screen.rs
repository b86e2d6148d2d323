use crate::entities::SessionState;

/// Which screen the front-end shows. Pausing lives here, not in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Screen {
    pub fn of(state: SessionState, paused: bool) -> Self {
        match state {
            SessionState::NotStarted => Screen::Menu,
            SessionState::Running if paused => Screen::Paused,
            SessionState::Running => Screen::Playing,
            SessionState::GameOver => Screen::GameOver,
        }
    }
}
