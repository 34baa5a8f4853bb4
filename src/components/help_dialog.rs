//! Help dialog component
//!
//! Lists the keyboard shortcuts and mouse gestures of the translator.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::F(10) | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let total = content.len();

        let dialog_area = centered_popup(area, 60, (total as u16).saturating_add(2));
        frame.render_widget(Clear, dialog_area);

        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keys and Mouse ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Translator");
    add_shortcut(&mut lines, "Enter", "Translate the input");
    add_shortcut(&mut lines, "Alt+Enter", "New line in the input");
    add_shortcut(&mut lines, "Esc", "Cancel a running translation");
    add_shortcut(&mut lines, "Ctrl+S", "Swap languages");
    add_shortcut(&mut lines, "Ctrl+L", "Clear both fields");
    add_shortcut(&mut lines, "Ctrl+Y", "Copy the translation");
    add_shortcut(&mut lines, "← / →", "Scroll the history cards");
    add_shortcut(&mut lines, "Ctrl+K", "Clear the history");

    add_section(&mut lines, "Sections");
    add_shortcut(&mut lines, "F1", "Translator");
    add_shortcut(&mut lines, "F2", "Symbols popup (1-3 copies a symbol)");
    add_shortcut(&mut lines, "F3", "About (↑/↓ to scroll)");

    add_section(&mut lines, "Window");
    add_shortcut(&mut lines, "Drag", "Move the window");
    add_shortcut(&mut lines, "Drag edge", "Resize from that edge or corner");
    add_shortcut(&mut lines, "F9", "Minimize / restore");
    add_shortcut(&mut lines, "F11", "Maximize / restore");
    add_shortcut(&mut lines, "F10", "Show this help");
    add_shortcut(&mut lines, "Ctrl+Q", "Quit");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc or F10 to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
