use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{Bounds, Bullet, Collider, Enemy, Player, Tint};
use crate::screen::Screen;
use crate::world::World;

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub screen: Screen,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub bullets: &'a [Bullet],
    pub score: u32,
    pub level: u32,
    pub health: i32,
    pub banner: Option<&'static str>,
    pub frame_count: u64,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub area: Rect,
}

impl<'a> RenderView<'a> {
    pub fn new(world: &'a World, screen: Screen, area: Rect) -> Self {
        Self {
            screen,
            player: world.player(),
            enemies: world.enemies(),
            bullets: world.bullets(),
            score: world.score(),
            level: world.level(),
            health: world.health(),
            banner: world.banner(),
            frame_count: world.frame_count(),
            canvas_width: world.config().canvas_width,
            canvas_height: world.config().canvas_height,
            area,
        }
    }
}

/// Maps canvas pixels onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Rect,
    pub canvas_width: i32,
    pub canvas_height: i32,
}

impl Viewport {
    pub fn new(area: Rect, canvas_width: i32, canvas_height: i32) -> Self {
        Self {
            area,
            canvas_width,
            canvas_height,
        }
    }

    /// Cells covered by `bounds`, at least one cell wide and tall.
    /// `None` when the box lies entirely off the canvas.
    pub fn project(&self, bounds: Bounds) -> Option<Rect> {
        let (x, width) = scale_span(bounds.x, bounds.width, self.canvas_width, self.area.width)?;
        let (y, height) =
            scale_span(bounds.y, bounds.height, self.canvas_height, self.area.height)?;
        Some(Rect {
            x: self.area.x + x,
            y: self.area.y + y,
            width,
            height,
        })
    }
}

fn scale_span(start: i32, len: i32, world: i32, cells: u16) -> Option<(u16, u16)> {
    if world <= 0 || cells == 0 || start + len <= 0 || start >= world {
        return None;
    }

    let cells = i64::from(cells);
    let world = i64::from(world);
    let lo = (i64::from(start) * cells).div_euclid(world).clamp(0, cells - 1);
    let end = i64::from(start + len) * cells;
    let hi = (end.div_euclid(world) + i64::from(end.rem_euclid(world) != 0)).clamp(lo + 1, cells);

    Some((u16::try_from(lo).ok()?, u16::try_from(hi - lo).ok()?))
}

fn color(tint: Tint) -> Color {
    let (r, g, b) = tint.rgb();
    Color::Rgb(r, g, b)
}

/// Handles all rendering responsibilities for the game
#[derive(Default)]
pub struct GameRenderer {}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Main render method that dispatches to screen-specific renderers
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.screen {
            Screen::Menu => self.render_menu(frame, view),
            Screen::Playing => self.render_game(frame, view),
            Screen::Paused => self.render_paused(frame, view),
            Screen::GameOver => self.render_game_over(frame, view),
        }
    }

    fn render_menu(&self, frame: &mut Frame, view: &RenderView) {
        let menu_text = vec![
            Line::from(""),
            Line::from("W A V E   S H O O T E R").centered().bold().green(),
            Line::from(""),
            Line::from("Enemies drop a row every time they hit a wall.")
                .centered()
                .white(),
            Line::from("Shoot them down before they reach you.")
                .centered()
                .white(),
            Line::from(""),
            Line::from("[A/D or Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]")
                .centered()
                .dark_gray(),
            Line::from(""),
            Line::from("Press Enter to start").centered().yellow().bold(),
        ];

        frame.render_widget(
            Paragraph::new(menu_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        // Bottom row is reserved for the controls hint
        let game_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let viewport = Viewport::new(game_area, view.canvas_width, view.canvas_height);

        // Render stars (simple background)
        if view.frame_count % 10 < 5 {
            let mut rng = rand::rng();
            let star_text = (0..game_area.height)
                .map(|_| {
                    (0..game_area.width)
                        .map(|_| if rng.random_bool(0.01) { '.' } else { ' ' })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                game_area,
            );
        }

        let buffer = frame.buffer_mut();
        let shapes = view
            .enemies
            .iter()
            .map(|enemy| (enemy.bounds(), Tint::Enemy))
            .chain(
                view.bullets
                    .iter()
                    .map(|bullet| (bullet.bounds(), Tint::Bullet)),
            )
            .chain(std::iter::once((view.player.bounds(), Tint::Player)));

        for (bounds, tint) in shapes {
            if let Some(cells) = viewport.project(bounds) {
                let row = "█".repeat(usize::from(cells.width));
                let style = Style::default().fg(color(tint));
                for y in cells.y..cells.y + cells.height {
                    buffer.set_string(cells.x, y, &row, style);
                }
            }
        }

        // HUD in the top-left corner
        let text_style = Style::default()
            .fg(color(Tint::Text))
            .add_modifier(Modifier::BOLD);
        let hud = vec![
            Line::from(Span::styled(format!("Score: {}", view.score), text_style)),
            Line::from(Span::styled(format!("Level: {}", view.level), text_style)),
            Line::from(Span::styled(format!("Health: {}", view.health), text_style)),
        ];
        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2).min(20),
            height: area.height.min(3),
        };
        frame.render_widget(Paragraph::new(hud), hud_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the pause screen with overlay
    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);

        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            centered_rect(view.area, 30, 6),
        );
    }

    /// Renders the frozen playfield with the game over banner on top
    fn render_game_over(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);

        let alert = Style::default()
            .fg(color(Tint::Alert))
            .add_modifier(Modifier::BOLD);
        let game_over_text = vec![
            Line::from(""),
            Line::from(Span::styled(view.banner.unwrap_or_default(), alert)).centered(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Level Reached: {}", view.level))
                .centered()
                .cyan()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color(Tint::Alert))),
                )
                .alignment(Alignment::Center),
            centered_rect(view.area, 34, 10),
        );
    }
}

/// A `width` x `height` box centred in `area`, shrunk to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
