//! Terminal UI for the fetch run.
//!
//! Shows the current phase, a progress gauge over the ID space, and a
//! scrolling activity log (skipped IDs land there). `ConsoleUi` is the
//! line-oriented fallback for --plain and non-interactive terminals;
//! `SilentUi` keeps tests quiet.

mod components;

use anyhow::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;
use std::io::{self, Stdout};

use components::{ActivityPanel, GaugePanel, StatusPanel};

/// Run phases shown in the status panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preparing,
    Fetching,
    Writing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Preparing => write!(f, "Preparing run"),
            Phase::Fetching => write!(f, "Fetching species"),
            Phase::Writing => write!(f, "Writing database"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Progress of the current operation
#[derive(Debug, Clone, Default)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
    pub label: String,
}

impl Progress {
    pub fn new(current: u64, total: u64, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: label.into(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Trait for UI implementations - allows TUI, plain console and test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_info(&mut self, info: impl Into<String>);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn clear_progress(&mut self);
    fn log(&mut self, message: impl Into<String>);
}

/// Full-screen terminal UI
pub struct UiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    status: StatusPanel,
    gauge: GaugePanel,
    activity: ActivityPanel,
}

impl UiApp {
    /// Enter the alternate screen and set up the panels
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            status: StatusPanel::new(),
            gauge: GaugePanel::new(),
            activity: ActivityPanel::new(),
        })
    }

    fn draw(&mut self) -> Result<()> {
        let status = &self.status;
        let gauge = &self.gauge;
        let activity = &self.activity;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // status
                    Constraint::Length(3), // gauge
                    Constraint::Min(5),    // activity log
                ])
                .split(area);

            status.render(frame, chunks[0]);
            gauge.render(frame, chunks[1]);
            activity.render(frame, chunks[2]);
        })?;

        Ok(())
    }

    /// Show the final summary and restore the terminal on keypress
    pub fn finish(mut self, summary: &str) -> Result<()> {
        self.set_phase(Phase::Complete);
        self.clear_progress();
        self.log(summary);
        self.log("Press any key to exit...");
        self.draw()?;

        loop {
            if let crossterm::event::Event::Key(_) = crossterm::event::read()? {
                break;
            }
        }

        self.restore()
    }

    /// Restore terminal without waiting
    pub fn restore(mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Ui for UiApp {
    fn set_phase(&mut self, phase: Phase) {
        self.status.set_phase(phase);
        self.draw().ok();
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.status.set_info(info);
        self.draw().ok();
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        self.gauge.set_progress(Progress::new(current, total, label));
        self.draw().ok();
    }

    fn clear_progress(&mut self) {
        self.gauge.clear();
        self.draw().ok();
    }

    fn log(&mut self, message: impl Into<String>) {
        self.activity.add(message);
        self.draw().ok();
    }
}

impl Drop for UiApp {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}

/// Line-oriented output for --plain runs and non-interactive terminals
#[derive(Default)]
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        eprintln!("==> {}", phase);
    }

    fn set_info(&mut self, info: impl Into<String>) {
        eprintln!("{}", info.into());
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        eprintln!("[{}/{}] {}", current, total, label.into());
    }

    fn clear_progress(&mut self) {}

    fn log(&mut self, message: impl Into<String>) {
        eprintln!("{}", message.into());
    }
}

/// Silent UI implementation for testing
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_info(&mut self, _info: impl Into<String>) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn clear_progress(&mut self) {}
    fn log(&mut self, _message: impl Into<String>) {}
}
