//! Translator panel - language labels, input/output fields and buttons

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{
    TranslatorLayout, CLEAR_LABEL, COPY_LABEL, SWAP_LABEL, TRANSLATE_LABEL,
};
use crate::model::TranslatorSession;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Data needed to draw the panel
pub struct TranslatorRenderContext<'a> {
    pub session: &'a TranslatorSession,
    /// Tooltip next to the copy button, if still showing
    pub copy_notice: Option<&'a str>,
    /// Spinner frame while a request is in flight
    pub spinner: Option<char>,
}

#[derive(Default)]
pub struct TranslatorPanel;

impl Component for TranslatorPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let action = match key.code {
            KeyCode::Enter if alt => Some(Action::InputChar('\n')),
            KeyCode::Enter => Some(Action::Translate),
            KeyCode::Esc => Some(Action::CancelTranslation),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char('s') if ctrl => Some(Action::SwapLanguages),
            KeyCode::Char('l') if ctrl => Some(Action::ClearFields),
            KeyCode::Char('y') if ctrl => Some(Action::CopyOutput),
            KeyCode::Char('k') if ctrl => Some(Action::ClearHistory),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::InputChar(c)),
            KeyCode::Left => Some(Action::ScrollHistory(-1)),
            KeyCode::Right => Some(Action::ScrollHistory(1)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the session, so the app calls draw_with_session
        Ok(())
    }
}

impl TranslatorPanel {
    pub fn draw_with_session(
        &self,
        frame: &mut Frame,
        layout: &TranslatorLayout,
        ctx: &TranslatorRenderContext,
    ) -> Result<()> {
        let session = ctx.session;
        let label_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);

        frame.render_widget(
            Paragraph::new(Span::styled(session.source.name(), label_style))
                .alignment(Alignment::Center),
            layout.source_label,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(session.target.name(), label_style))
                .alignment(Alignment::Center),
            layout.target_label,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(SWAP_LABEL, Style::default().fg(Color::Cyan))),
            layout.swap_button,
        );

        self.draw_input(frame, layout.input, &session.input);
        self.draw_output(frame, layout.output, ctx);

        let button_style = Style::default().fg(Color::Green);
        frame.render_widget(
            Paragraph::new(Span::styled(TRANSLATE_LABEL, button_style)),
            layout.translate_button,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(CLEAR_LABEL, button_style)),
            layout.clear_button,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(COPY_LABEL, button_style)),
            layout.copy_button,
        );

        if let Some(notice) = ctx.copy_notice {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    notice,
                    Style::default().fg(Color::Black).bg(Color::Gray),
                ))
                .alignment(Alignment::Right),
                layout.notice,
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                "Translation history",
                Style::default().fg(Color::DarkGray),
            )),
            layout.history_label,
        );

        Ok(())
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect, input: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Input ");
        let inner = block.inner(area);

        let text = format!("{}▏", input);
        let scroll = wrapped_height(&text, inner.width).saturating_sub(inner.height);

        frame.render_widget(
            Paragraph::new(text)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            area,
        );
    }

    fn draw_output(&self, frame: &mut Frame, area: Rect, ctx: &TranslatorRenderContext) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Translation ");

        let content = if let Some(error) = &ctx.session.error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else if let Some(spinner) = ctx.spinner {
            Line::from(Span::styled(
                format!("{} Translating…  (Esc to cancel)", spinner),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(ctx.session.output.clone())
        };

        frame.render_widget(
            Paragraph::new(content)
                .block(block)
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

/// Rows `text` occupies when wrapped at `width` columns
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    text.split('\n')
        .map(|line| {
            let columns = UnicodeWidthStr::width(line) as u16;
            columns.div_ceil(width).max(1)
        })
        .fold(0u16, |total, rows| total.saturating_add(rows))
}
