//! History strip - newest-first cards of recent translations
//!
//! Cards scroll horizontally a whole card at a time; clicking one loads the
//! record back into the translator fields.

use crate::components::layout::{history_cards, hit, visible_card_count};
use crate::model::{HistoryStore, TranslationRecord};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Default)]
pub struct HistoryStrip {
    /// Index of the leftmost visible card
    pub offset: usize,
}

impl HistoryStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll by `cards`, keeping the last page full where possible
    pub fn scroll(&mut self, cards: i16, len: usize, area: Rect) {
        let max_offset = len.saturating_sub(visible_card_count(area).max(1));
        let next = self.offset as i64 + cards as i64;
        self.offset = next.clamp(0, max_offset as i64) as usize;
    }

    /// Reset to the newest card, e.g. after a new record was added
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// History index of the card under (`column`, `row`)
    pub fn card_at(&self, area: Rect, len: usize, column: u16, row: u16) -> Option<usize> {
        history_cards(area, len, self.offset)
            .into_iter()
            .find(|(_, rect)| hit(*rect, column, row))
            .map(|(index, _)| index)
    }

    pub fn draw_with_history(&mut self, frame: &mut Frame, area: Rect, history: &HistoryStore) {
        let records = history.all();
        if self.offset >= records.len() {
            self.offset = records.len().saturating_sub(1);
        }

        if history.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No translations yet",
                    Style::default().fg(Color::DarkGray),
                )),
                area,
            );
            return;
        }

        for (index, rect) in history_cards(area, records.len(), self.offset) {
            if let Some(record) = records.get(index) {
                draw_card(frame, rect, record);
            }
        }

        if self.offset > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled("‹", Style::default().fg(Color::Yellow))),
                Rect::new(area.x, area.y, 1, 1),
            );
        }
        if self.offset + visible_card_count(area) < records.len() {
            frame.render_widget(
                Paragraph::new(Span::styled("›", Style::default().fg(Color::Yellow))),
                Rect::new(area.right().saturating_sub(1), area.y, 1, 1),
            );
        }
    }
}

fn draw_card(frame: &mut Frame, rect: Rect, record: &TranslationRecord) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let width = block.inner(rect).width as usize;
    let lang_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(record.source_lang.clone(), lang_style)),
        Line::from(elide(&record.input_text, width)),
        Line::from(Span::styled(record.target_lang.clone(), lang_style)),
        Line::from(elide(&record.translated_text, width)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Fit `text` on one line of `width` columns, ending with `…` when cut
pub fn elide(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if UnicodeWidthStr::width(flat.as_str()) <= width {
        return flat;
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in flat.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::{HISTORY_CARD_WIDTH, HISTORY_STRIP_HEIGHT};

    fn strip_area(cards: u16) -> Rect {
        Rect::new(0, 10, cards * (HISTORY_CARD_WIDTH + 1), HISTORY_STRIP_HEIGHT)
    }

    #[test]
    fn test_elide() {
        assert_eq!(elide("short", 10), "short");
        assert_eq!(elide("one\ntwo", 10), "one two");
        assert_eq!(elide("abcdefghijkl", 6), "abcde…");
        // Wide characters count as two columns
        assert_eq!(elide("日本語テキスト", 6), "日本…");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut strip = HistoryStrip::new();
        let area = strip_area(2);

        strip.scroll(5, 4, area);
        assert_eq!(strip.offset, 2);
        strip.scroll(-10, 4, area);
        assert_eq!(strip.offset, 0);
    }

    #[test]
    fn test_card_at() {
        let mut strip = HistoryStrip::new();
        let area = strip_area(2);
        strip.scroll(1, 5, area);

        assert_eq!(strip.card_at(area, 5, 3, 12), Some(1));
        assert_eq!(strip.card_at(area, 5, HISTORY_CARD_WIDTH + 2, 12), Some(2));
        // The gap between cards
        assert_eq!(strip.card_at(area, 5, HISTORY_CARD_WIDTH, 12), None);
        assert_eq!(strip.card_at(area, 5, 3, 2), None);
    }
}
