//! Panels for the terminal interface

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;

use super::{Phase, Progress};

const MAX_LOG_ENTRIES: usize = 200;

/// Current phase plus a one-line detail (generation being fetched)
pub struct StatusPanel {
    phase: Phase,
    info: String,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Preparing,
            info: String::new(),
        }
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let phase_style = match self.phase {
            Phase::Complete => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        };

        let phase_indicator = match self.phase {
            Phase::Preparing => "◐",
            Phase::Fetching => "↓",
            Phase::Writing => "⚙",
            Phase::Complete => "✓",
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", phase_indicator), phase_style),
                Span::styled(self.phase.to_string(), phase_style),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("   "),
                Span::styled(&self.info, Style::default().fg(Color::Gray)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" pokedex-sync ")
            .border_style(Style::default().fg(Color::Red));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Gauge over the species ID space
pub struct GaugePanel {
    progress: Option<Progress>,
}

impl GaugePanel {
    pub fn new() -> Self {
        Self { progress: None }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }

    pub fn clear(&mut self) {
        self.progress = None;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::Red));

        match &self.progress {
            Some(progress) => {
                let label = if progress.total > 0 {
                    format!(
                        "{} — {}/{} ({:.0}%)",
                        progress.label,
                        progress.current,
                        progress.total,
                        progress.ratio() * 100.0
                    )
                } else {
                    progress.label.clone()
                };

                let gauge = Gauge::default()
                    .block(block)
                    .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
                    .ratio(progress.ratio().min(1.0))
                    .label(label);

                frame.render_widget(gauge, area);
            }
            None => {
                frame.render_widget(Paragraph::new("").block(block), area);
            }
        }
    }
}

/// Scrolling history; skipped IDs and milestones end up here
pub struct ActivityPanel {
    entries: Vec<String>,
}

impl ActivityPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
        if self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.remove(0);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Activity ")
            .border_style(Style::default().fg(Color::Red));

        let visible_height = area.height.saturating_sub(2) as usize;
        let start = self.entries.len().saturating_sub(visible_height);

        let last = self.entries.len().saturating_sub(1);
        let items: Vec<ListItem> = self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if start + i == last {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Span::styled(format!(" {}", entry), style))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
