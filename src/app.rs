use color_eyre::Result;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::screen::Screen;
use crate::world::World;

/// The main application: drives the world at a fixed tick rate and owns the
/// terminal-facing components.
pub struct App {
    running: bool,
    /// Front-end pause; the world is simply not stepped
    paused: bool,
    world: World,
    tick_interval: Duration,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// `release_events` tells the input layer whether key releases will arrive.
    pub fn new(release_events: bool) -> Self {
        Self::with_audio(release_events, AudioManager::from_env())
    }

    pub fn with_audio(release_events: bool, audio_manager: AudioManager) -> Self {
        Self {
            running: true,
            paused: false,
            world: World::new(),
            tick_interval: config::tick_interval(),
            input_manager: InputManager::new(release_events),
            renderer: GameRenderer::new(),
            audio_manager,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        log::info!(
            "running at {} ticks/s, audio {}",
            1_000_000 / self.tick_interval.as_micros().max(1),
            if self.audio_manager.is_enabled() { "on" } else { "off" }
        );

        while self.running {
            let frame_start = Instant::now();

            terminal.draw(|frame| {
                let view = RenderView::new(&self.world, self.screen(), frame.area());
                self.renderer.render(frame, &view);
            })?;

            self.input_manager.poll_events(self.screen())?;
            for action in self.input_manager.take_actions() {
                self.handle_action(action);
            }

            self.tick();

            // Sleep out the rest of the frame
            if let Some(remaining) = self.tick_interval.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        Screen::of(self.world.state(), self.paused)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies a one-shot action to the app
    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => {
                self.running = false;
            }
            InputAction::Start => {
                self.world.start();
            }
            InputAction::Pause => {
                self.paused = true;
                self.input_manager.clear();
            }
            InputAction::Resume => {
                self.paused = false;
            }
            InputAction::Restart => {
                // Fresh session: entities and counters all start over
                self.world = World::new();
                self.world.start();
                self.paused = false;
                self.input_manager.clear();
            }
        }
    }

    /// Steps the world once if gameplay is live
    fn tick(&mut self) {
        if self.screen() != Screen::Playing {
            return;
        }

        let controls = self.input_manager.controls();
        let report = self.world.step(&controls);
        self.audio_manager.play_report(&report);
    }
}
