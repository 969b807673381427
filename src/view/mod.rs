//! Terminal shell: event loop, input mapping and frame drawing.
//!
//! The shell owns the terminal and the interpolated stage offset. It
//! feeds keys, mouse gestures and resizes into the controller, drains
//! the resulting events every frame, and reports transition ends back
//! when a glide finishes.

pub mod stage;
pub mod strip;

pub use stage::Stage;
pub use strip::StripView;

use crossterm::{
    event::{
        self, Event as TermEvent, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

use crate::config::Options;
use crate::core::{Carousel, Event, StateFlag};
use crate::model::{AppError, DragOutcome, Item, Pointer};

/// Virtual pixels per terminal column.
const PX_PER_CELL: f64 = 10.0;

/// Terminal rows are roughly twice as tall as columns are wide, so
/// vertical pointer deltas count double when claiming a gesture.
const PX_PER_ROW: f64 = 20.0;

/// Frame interval while idle or animating.
const TICK: Duration = Duration::from_millis(33);

/// The demo application.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    carousel: Carousel,
    stage: Stage,
    status: Option<String>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal and build the controller over `items`.
    pub fn new(options: Options, items: Vec<Item>) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let width = match terminal.size() {
            Ok(size) if size.width > 0 => f64::from(size.width) * PX_PER_CELL,
            _ => 800.0,
        };

        let carousel = Carousel::new(options, items, width);

        let mut app = Self {
            terminal,
            carousel,
            stage: Stage::default(),
            status: None,
        };
        app.drain();
        Ok(app)
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;

        loop {
            if event::poll(TICK)? {
                match event::read()? {
                    TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key.code) {
                            return Ok(());
                        }
                    }
                    TermEvent::Mouse(mouse) => self.handle_mouse(mouse),
                    TermEvent::Resize(width, _) => {
                        self.carousel.on_resize(f64::from(width) * PX_PER_CELL);
                    }
                    _ => {}
                }
            }

            if self.stage.tick() {
                self.carousel.on_transition_end();
            }
            self.drain();
            self.draw()?;
        }
    }

    /// Map a key press to a controller operation. Returns true to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Char('h') => self.carousel.prev(None),
            KeyCode::Right | KeyCode::Char('l') => self.carousel.next(None),
            KeyCode::Home => self.carousel.to(0, None),
            KeyCode::End => {
                let last = self.carousel.maximum_relative();
                self.carousel.to(last as isize, None);
            }
            KeyCode::Char(ch @ '0'..='9') => {
                let position = ch as isize - '0' as isize;
                self.carousel.to(position, None);
            }
            KeyCode::Char('a') => {
                let index = self.carousel.items().len();
                if let Ok(item) = Item::new(format!("item {index}"), 100.0) {
                    self.carousel.add(item, None);
                    if self.carousel.is_visible() {
                        self.carousel.update();
                    }
                }
            }
            KeyCode::Char('x') => {
                if let Some(current) = self.carousel.relative(self.carousel.current()) {
                    self.carousel.remove(current as isize);
                    if self.carousel.is_visible() {
                        self.carousel.update();
                    }
                }
            }
            KeyCode::Char('r') => self.carousel.refresh(),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pointer = Pointer::new(
            f64::from(mouse.column) * PX_PER_CELL,
            f64::from(mouse.row) * PX_PER_ROW,
        );

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.carousel.pointer_down(pointer, self.stage.offset());
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.pointer_move(pointer);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let outcome = self.carousel.pointer_up(pointer);
                self.status = Some(match outcome {
                    DragOutcome::Click => "click".to_string(),
                    DragOutcome::Moved => "dragged".to_string(),
                });
            }
            _ => {}
        }
    }

    /// Apply pending controller events to the stage.
    fn drain(&mut self) {
        for event in self.carousel.take_events() {
            debug!(?event, "controller event");
            if let Event::Translate {
                coordinate,
                duration,
            } = event
            {
                self.stage.apply(coordinate, duration);
            }
        }
    }

    fn draw(&mut self) -> Result<(), AppError> {
        let carousel = &self.carousel;
        let stage_offset = self.stage.offset();
        let status = self.status.clone();

        self.terminal.draw(|frame| {
            let [status_area, strip_area, help_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_widget(status_line(carousel, stage_offset, status), status_area);
            frame.render_widget(
                StripView::new(carousel, stage_offset, PX_PER_CELL),
                strip_area,
            );
            frame.render_widget(help_line(), help_area);
        })?;
        Ok(())
    }
}

fn status_line(carousel: &Carousel, stage_offset: f64, status: Option<String>) -> Paragraph<'_> {
    let relative = carousel
        .relative(carousel.current())
        .map(|position| position.to_string())
        .unwrap_or_else(|| "-".to_string());
    let breakpoint = carousel
        .breakpoint()
        .map(|breakpoint| breakpoint.to_string())
        .unwrap_or_else(|| "base".to_string());
    let mut flags = String::new();
    if carousel.is(StateFlag::Animating) {
        flags.push('A');
    }
    if carousel.is(StateFlag::Dragging) {
        flags.push('D');
    }
    if carousel.is(StateFlag::Valid) {
        flags.push('V');
    }

    let text = format!(
        " item {relative}/{total}  slot {slot}  offset {offset:.0}px  breakpoint {breakpoint}  [{flags}] {status}",
        total = carousel.items().len().saturating_sub(1),
        slot = carousel.current(),
        offset = stage_offset,
        status = status.unwrap_or_default(),
    );
    Paragraph::new(Line::from(text)).style(Style::default().fg(Color::Cyan))
}

fn help_line() -> Paragraph<'static> {
    Paragraph::new(" ←/→ move  0-9 jump  mouse drag  a add  x remove  r refresh  q quit")
        .style(Style::default().fg(Color::DarkGray))
}

/// Run the demo over a strip, restoring the terminal even on error.
pub fn run_with_strip(options: Options, items: Vec<Item>) -> Result<(), AppError> {
    let mut app = TuiApp::new(options, items)?;
    let result = app.run();
    restore_terminal()?;
    result
}

/// Disable raw mode, mouse capture and the alternate screen.
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
