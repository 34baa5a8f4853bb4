//! Symbols popup - Aleut letters missing from common keyboard layouts

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::symbol_slots;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const SYMBOLS: [&str; 3] = ["x\u{0302}", "ĝ", "ẍ"];

#[derive(Default)]
pub struct SymbolsPopup;

impl Component for SymbolsPopup {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                (index < SYMBOLS.len()).then_some(Action::CopySymbol(index))
            }
            KeyCode::Esc => Some(Action::CloseSymbols),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
            area,
        );

        for (i, (slot, symbol)) in symbol_slots(area, SYMBOLS.len())
            .into_iter()
            .zip(SYMBOLS)
            .enumerate()
        {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("{}:{}", i + 1, symbol),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center),
                slot,
            );
        }
        Ok(())
    }
}
