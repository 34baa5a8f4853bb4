//! Quit confirmation dialog component
//!
//! Asked before the window closes. The two buttons can be clicked like the
//! rest of the chrome or picked with the arrow keys.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{hit, quit_dialog_layout, QUIT_LABEL, STAY_LABEL};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Button that Enter activates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitChoice {
    #[default]
    Stay,
    Quit,
}

impl QuitChoice {
    fn other(self) -> Self {
        match self {
            QuitChoice::Stay => QuitChoice::Quit,
            QuitChoice::Quit => QuitChoice::Stay,
        }
    }

    fn action(self) -> Action {
        match self {
            QuitChoice::Stay => Action::CloseModal,
            QuitChoice::Quit => Action::ForceQuit,
        }
    }
}

#[derive(Debug, Default)]
pub struct QuitDialog {
    pub selected: QuitChoice,
}

impl QuitDialog {
    /// Start over on the safe button each time the dialog opens
    pub fn reset(&mut self) {
        self.selected = QuitChoice::Stay;
    }

    /// Action for a left click at (`column`, `row`) with the dialog over `area`
    pub fn click_action(&self, area: Rect, column: u16, row: u16) -> Option<Action> {
        let layout = quit_dialog_layout(area);
        if hit(layout.quit_button, column, row) {
            Some(Action::ForceQuit)
        } else if hit(layout.stay_button, column, row) {
            Some(Action::CloseModal)
        } else {
            None
        }
    }

    fn button_style(&self, choice: QuitChoice, color: Color) -> Style {
        let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if self.selected == choice {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = self.selected.other();
                None
            }
            KeyCode::Enter => Some(self.selected.action()),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = quit_dialog_layout(area);
        frame.render_widget(Clear, layout.popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Quit ")
            .title_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(block, layout.popup);

        let message = Paragraph::new(Span::styled(
            "Close the translator?",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(message, layout.message);

        frame.render_widget(
            Paragraph::new(Span::styled(
                QUIT_LABEL,
                self.button_style(QuitChoice::Quit, Color::Red),
            )),
            layout.quit_button,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                STAY_LABEL,
                self.button_style(QuitChoice::Stay, Color::Green),
            )),
            layout.stay_button,
        );

        let hint = Paragraph::new(Line::from(Span::styled(
            "y quit · n/Esc stay · ←/→ pick",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, layout.hint);

        Ok(())
    }
}
