use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::controls::Controls;
use crate::screen::Screen;

/// One-shot actions for the driver, outside of gameplay controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Start,
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    fire: bool,
}

/// Manages input polling and translates raw key events into game input
pub struct InputManager {
    key_state: KeyState,
    /// Set by a fire press so a press released before the next frame still counts.
    /// Release then re-press within one frame collapses into a single hold.
    fire_latch: bool,
    /// Whether the terminal reports key releases (kitty keyboard protocol)
    release_events: bool,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputManager {
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            fire_latch: false,
            release_events,
            oneshot_actions: Vec::new(),
        }
    }

    /// Drains every pending terminal event without blocking.
    /// Should be called once per frame before taking actions and controls.
    pub fn poll_events(&mut self, screen: Screen) -> color_eyre::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, screen);
            }
        }
        Ok(())
    }

    /// Processes a key event and updates key state and one-shot actions
    pub fn handle_key_event(&mut self, key_event: KeyEvent, screen: Screen) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, screen),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
            // Auto-repeat must not look like a fresh press
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, screen: Screen) {
        // Quit works on every screen
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match screen {
            Screen::Menu => {
                if key_event.code == KeyCode::Enter {
                    self.oneshot_actions.push(InputAction::Start);
                }
            }
            Screen::Paused => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Resume);
                }
            }
            Screen::GameOver => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                }
            }
            Screen::Playing => match key_event.code {
                KeyCode::Char('p') | KeyCode::Char('P') => {
                    self.oneshot_actions.push(InputAction::Pause);
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    self.key_state.left = true;
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    self.key_state.right = true;
                }
                KeyCode::Char(' ') => {
                    self.key_state.fire = true;
                    self.fire_latch = true;
                }
                _ => {}
            },
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// Returns the one-shot actions collected since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.oneshot_actions)
    }

    /// Samples the held keys for this frame.
    ///
    /// Without release events every press counts as a single-frame hold.
    pub fn controls(&mut self) -> Controls {
        let controls = Controls {
            left: self.key_state.left,
            right: self.key_state.right,
            fire: self.key_state.fire || self.fire_latch,
        };

        self.fire_latch = false;
        if !self.release_events {
            self.key_state = KeyState::default();
        }

        controls
    }

    /// Forgets held keys, e.g. when gameplay pauses or restarts
    pub fn clear(&mut self) {
        self.key_state = KeyState::default();
        self.fire_latch = false;
    }
}
