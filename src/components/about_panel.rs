//! About panel - static project description with vertical scrolling
//!
//! Built the first time the About section is opened and kept afterwards.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

pub struct AboutPanel {
    pub scroll_offset: usize,
    content: Vec<Line<'static>>,
}

impl Default for AboutPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AboutPanel {
    pub fn new() -> Self {
        log::debug!("Building About panel");
        Self {
            scroll_offset: 0,
            content: build_about_content(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }
}

impl Component for AboutPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Up => Some(Action::ScrollAbout(-1)),
            KeyCode::Down => Some(Action::ScrollAbout(1)),
            KeyCode::PageUp => Some(Action::ScrollAbout(-10)),
            KeyCode::PageDown => Some(Action::ScrollAbout(10)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::ScrollAbout(lines) = action {
            let max = self.line_count().saturating_sub(1);
            let next = self.scroll_offset as i64 + lines as i64;
            self.scroll_offset = next.clamp(0, max as i64) as usize;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" About ");
        let visible = block.inner(area).height as usize;

        // Keep the last page full when the panel grows
        let max_scroll = self.line_count().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        frame.render_widget(
            Paragraph::new(self.content.clone())
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .scroll((self.scroll_offset as u16, 0)),
            area,
        );

        if self.line_count() > visible {
            let mut state = ScrollbarState::new(max_scroll).position(self.scroll_offset);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut state,
            );
        }

        Ok(())
    }
}

fn build_about_content() -> Vec<Line<'static>> {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let body = |text: &'static str| Line::from(Span::raw(text));

    vec![
        Line::from(""),
        heading("Russian–Aleut Translator"),
        Line::from(""),
        body("A small desktop-style translator between Russian and the Aleut language,"),
        body("spoken on the Commander and Aleutian Islands."),
        Line::from(""),
        heading("Using the translator"),
        body("Type text on the left and press Enter or click Translate."),
        body("The arrow button between the fields swaps the direction."),
        body("The last ten translations are kept below the fields;"),
        body("click a card to bring it back."),
        Line::from(""),
        heading("Special characters"),
        body("The Symbols menu copies x̂, ĝ and ẍ to the clipboard,"),
        body("ready to paste into the input field."),
        Line::from(""),
        heading("The window"),
        body("Drag the title bar to move the window, drag its edges"),
        body("or corners to resize it. Press F10 for all shortcuts."),
        Line::from(""),
        Line::from(Span::styled(
            "Translations are provided by an online service and may be inexact.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
