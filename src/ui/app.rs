//! Main TUI application state and logic

use crate::constants::PLAY_INTERVAL_MS;
use crate::drills::{Drill, Tracer};
use crate::errors::DrillError;
use crate::snapshot::{Snapshot, SnapshotManager};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Recorded history of one drill, plus the error that cut it short (if any)
#[derive(Debug, Clone)]
pub struct Walkthrough {
    pub drill: Drill,
    pub history: SnapshotManager,
    pub error: Option<DrillError>,
}

impl Walkthrough {
    /// Run `drill` on a fresh tracer and keep whatever history it recorded
    pub fn record(drill: Drill) -> Self {
        let mut tracer = Tracer::new();
        let error = drill.run(&mut tracer).err();
        Walkthrough {
            drill,
            history: tracer.into_history(),
            error,
        }
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Steps,
    Stack,
    Heap,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: steps -> terminal -> stack -> heap)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Heap,
            FocusedPane::Heap => FocusedPane::Steps,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Heap,
            FocusedPane::Terminal => FocusedPane::Steps,
            FocusedPane::Stack => FocusedPane::Terminal,
            FocusedPane::Heap => FocusedPane::Stack,
        }
    }
}

/// The main application state
pub struct App {
    walkthroughs: Vec<Walkthrough>,

    /// Index of the drill on screen
    current: usize,

    /// Step position per drill, so switching drills keeps each one's place
    positions: Vec<usize>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_scroll: usize,
    pub heap_scroll: usize,
    pub terminal_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    last_play_time: Instant,
}

impl App {
    pub fn new(walkthroughs: Vec<Walkthrough>) -> Self {
        let status_message = match walkthroughs.first().and_then(|w| w.error.as_ref()) {
            Some(e) => format!("Drill stopped early: {}", e),
            None => String::from("Ready!"),
        };
        App {
            positions: vec![0; walkthroughs.len()],
            walkthroughs,
            current: 0,
            focused_pane: FocusedPane::Steps,
            stack_scroll: 0,
            heap_scroll: 0,
            terminal_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Record every drill and build the app around the results
    pub fn record_all() -> Self {
        Self::new(Drill::ALL.into_iter().map(Walkthrough::record).collect())
    }

    pub fn walkthroughs(&self) -> &[Walkthrough] {
        &self.walkthroughs
    }

    pub fn walkthrough(&self) -> Option<&Walkthrough> {
        self.walkthroughs.get(self.current)
    }

    /// Current step index within the drill on screen
    pub fn position(&self) -> usize {
        self.positions.get(self.current).copied().unwrap_or(0)
    }

    pub fn total_steps(&self) -> usize {
        self.walkthrough().map_or(0, |w| w.history.len())
    }

    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.walkthrough()?.history.get(self.position())
    }

    fn set_position(&mut self, position: usize) {
        if let Some(slot) = self.positions.get_mut(self.current) {
            *slot = position;
        }
    }

    /// Advance one step
    pub fn step_forward(&mut self) -> Result<(), DrillError> {
        let next = self.position() + 1;
        if next >= self.total_steps() {
            return Err(DrillError::HistoryOperationFailed {
                message: "already at the last step".to_string(),
            });
        }
        self.set_position(next);
        Ok(())
    }

    /// Go back one step
    pub fn step_backward(&mut self) -> Result<(), DrillError> {
        let position = self.position();
        if position == 0 {
            return Err(DrillError::HistoryOperationFailed {
                message: "already at the first step".to_string(),
            });
        }
        self.set_position(position - 1);
        Ok(())
    }

    pub fn jump_to_start(&mut self) {
        self.set_position(0);
    }

    pub fn jump_to_end(&mut self) {
        let last = self.total_steps().saturating_sub(1);
        self.set_position(last);
    }

    /// Switch to the drill at `index`, if it exists
    pub fn select_drill(&mut self, index: usize) {
        if index >= self.walkthroughs.len() {
            return;
        }
        self.current = index;
        self.is_playing = false;
        self.stack_scroll = 0;
        self.heap_scroll = 0;
        self.terminal_scroll = usize::MAX;
        self.status_message = match &self.walkthroughs[index].error {
            Some(e) => format!("Drill stopped early: {}", e),
            None => format!("Switched to {}", self.walkthroughs[index].drill.title()),
        };
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing
                && self.last_play_time.elapsed() >= Duration::from_millis(PLAY_INTERVAL_MS)
            {
                if self.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.terminal_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: Steps (top) | Terminal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Stack (top) | Heap (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let position = self.positions.get(self.current).copied().unwrap_or(0);
        let Some(walkthrough) = self.walkthroughs.get(self.current) else {
            return;
        };
        let title = format!(
            "[{}/{}] {}",
            self.current + 1,
            self.walkthroughs.len(),
            walkthrough.drill.title()
        );

        super::panes::render_steps_pane(
            frame,
            left_rows[0],
            &title,
            &walkthrough.history,
            position,
            walkthrough.error.is_some(),
            self.focused_pane == FocusedPane::Steps,
        );

        if let Some(snapshot) = walkthrough.history.get(position) {
            let is_last = position + 1 == walkthrough.history.len();
            let error_address = if is_last {
                walkthrough.error.as_ref().and_then(DrillError::address)
            } else {
                None
            };

            super::panes::render_terminal_pane(
                frame,
                left_rows[1],
                &snapshot.terminal,
                self.focused_pane == FocusedPane::Terminal,
                &mut self.terminal_scroll,
            );
            super::panes::render_stack_pane(
                frame,
                right_rows[0],
                &snapshot.stack,
                self.focused_pane == FocusedPane::Stack,
                &mut self.stack_scroll,
            );
            super::panes::render_heap_pane(
                frame,
                right_rows[1],
                &snapshot.heap,
                error_address,
                self.focused_pane == FocusedPane::Heap,
                &mut self.heap_scroll,
            );
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: position,
                total_steps: walkthrough.history.len(),
                has_error: walkthrough.error.is_some(),
                is_playing: self.is_playing,
                history_bytes: walkthrough.history.memory_usage(),
                history_limit: walkthrough.history.memory_limit(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.select_drill(digit as usize - 1);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = match self.step_backward() {
                    Ok(()) => "Stepped backward".to_string(),
                    Err(e) => format!("Cannot step backward: {}", e),
                };
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = match self.step_forward() {
                    Ok(()) => "Stepped forward".to_string(),
                    Err(e) => format!("Cannot step forward: {}", e),
                };
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Steps => {
                    let _ = self.step_backward();
                }
                FocusedPane::Stack => self.stack_scroll = self.stack_scroll.saturating_sub(1),
                FocusedPane::Heap => self.heap_scroll = self.heap_scroll.saturating_sub(1),
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1)
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Steps => {
                    let _ = self.step_forward();
                }
                FocusedPane::Stack => self.stack_scroll = self.stack_scroll.saturating_add(1),
                FocusedPane::Heap => self.heap_scroll = self.heap_scroll.saturating_add(1),
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1)
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now()
                        .checked_sub(Duration::from_millis(PLAY_INTERVAL_MS))
                        .unwrap_or_else(Instant::now);
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.jump_to_start();
                self.status_message = "Jumped to start".to_string();
                self.terminal_scroll = usize::MAX;
            }
            _ => {}
        }
    }
}
