//! Layout calculations for the window and its panels
//!
//! Drawing and mouse hit-testing both go through these functions, so a
//! button is clickable exactly where it is drawn.

use crate::model::Section;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one title bar button, e.g. `[×]`
pub const TITLE_BUTTON_WIDTH: u16 = 3;
/// Width of one history card including its border
pub const HISTORY_CARD_WIDTH: u16 = 24;
/// Height of the history strip including card borders
pub const HISTORY_STRIP_HEIGHT: u16 = 6;
/// Width of one symbol slot in the symbols popup
pub const SYMBOL_SLOT_WIDTH: u16 = 5;

pub const TRANSLATE_LABEL: &str = "[ Translate ]";
pub const CLEAR_LABEL: &str = "[ Clear ]";
pub const COPY_LABEL: &str = "[ Copy ]";
pub const SWAP_LABEL: &str = "[⇄]";
pub const QUIT_LABEL: &str = "[ Quit ]";
pub const STAY_LABEL: &str = "[ Stay ]";

/// Areas of the window chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub frame: Rect,
    pub title: Rect,
    pub minimize_button: Rect,
    pub maximize_button: Rect,
    pub close_button: Rect,
    pub separator: Rect,
    /// One tab per `Section::all()` entry
    pub tabs: [Rect; 3],
    pub content: Rect,
}

/// Areas of the translator panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorLayout {
    pub source_label: Rect,
    pub swap_button: Rect,
    pub target_label: Rect,
    pub input: Rect,
    pub output: Rect,
    pub translate_button: Rect,
    pub clear_button: Rect,
    pub copy_button: Rect,
    /// Where the copy tooltip appears, left of the copy button
    pub notice: Rect,
    pub history_label: Rect,
    pub history: Rect,
}

/// Areas of the quit confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitDialogLayout {
    pub popup: Rect,
    pub message: Rect,
    pub quit_button: Rect,
    pub stay_button: Rect,
    pub hint: Rect,
}

/// Whether the cell at (`column`, `row`) lies inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// A single-row button of `label`'s width at `x` inside `row`, clipped to it
fn button_at(row: Rect, x: u16, label: &str) -> Rect {
    let width = label.chars().count() as u16;
    let x = x.clamp(row.x, row.right());
    Rect::new(x, row.y, width.min(row.right() - x), row.height.min(1))
}

/// Chrome layout for the visible window rect.
///
/// The rect is bordered; one extra column on the left and one row on top
/// are left as padding so the title bar sits outside the resize band.
pub fn window_layout(frame: Rect) -> WindowLayout {
    let inner = Rect::new(
        frame.x.saturating_add(2),
        frame.y.saturating_add(2),
        frame.width.saturating_sub(3),
        frame.height.saturating_sub(3),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let title_row = rows[0];
    let close_x = title_row.right().saturating_sub(TITLE_BUTTON_WIDTH);
    let maximize_x = close_x.saturating_sub(TITLE_BUTTON_WIDTH + 1);
    let minimize_x = maximize_x.saturating_sub(TITLE_BUTTON_WIDTH + 1);

    let close_button = button_at(title_row, close_x, "[×]");
    let maximize_button = button_at(title_row, maximize_x, "[□]");
    let minimize_button = button_at(title_row, minimize_x, "[─]");
    let title = Rect::new(
        title_row.x,
        title_row.y,
        minimize_x.saturating_sub(title_row.x + 1),
        title_row.height,
    );

    let menu_row = rows[2];
    let mut tabs = [Rect::default(); 3];
    let mut x = menu_row.x;
    for (slot, section) in tabs.iter_mut().zip(Section::all()) {
        let label = tab_label(section);
        *slot = button_at(menu_row, x, &label);
        x = x.saturating_add(slot.width + 1);
    }

    WindowLayout {
        frame,
        title,
        minimize_button,
        maximize_button,
        close_button,
        separator: rows[1],
        tabs,
        content: rows[3],
    }
}

/// Menu text for a section tab
pub fn tab_label(section: Section) -> String {
    format!(" {} ", section.title())
}

pub fn translator_layout(content: Rect) -> TranslatorLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(HISTORY_STRIP_HEIGHT),
        ])
        .split(content);

    let columns = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(5),
                Constraint::Fill(1),
            ])
            .split(row)
    };

    let labels = columns(rows[0]);
    let fields = columns(rows[1]);
    let buttons = columns(rows[2]);

    let translate_button = button_at(buttons[0], buttons[0].x, TRANSLATE_LABEL);
    let clear_button = button_at(
        buttons[0],
        translate_button.right().saturating_add(2),
        CLEAR_LABEL,
    );

    let copy_width = COPY_LABEL.chars().count() as u16;
    let copy_button = button_at(
        buttons[2],
        buttons[2].right().saturating_sub(copy_width),
        COPY_LABEL,
    );
    let notice = Rect::new(
        buttons[2].x,
        buttons[2].y,
        copy_button.x.saturating_sub(buttons[2].x + 1),
        buttons[2].height,
    );

    TranslatorLayout {
        source_label: labels[0],
        swap_button: button_at(labels[1], labels[1].x + 1, SWAP_LABEL),
        target_label: labels[2],
        input: fields[0],
        output: fields[2],
        translate_button,
        clear_button,
        copy_button,
        notice,
        history_label: rows[3],
        history: rows[4],
    }
}

/// Number of whole history cards that fit in `area`
pub fn visible_card_count(area: Rect) -> usize {
    ((area.width + 1) / (HISTORY_CARD_WIDTH + 1)) as usize
}

/// Card rects for history entries `offset..`, paired with their index
pub fn history_cards(area: Rect, len: usize, offset: usize) -> Vec<(usize, Rect)> {
    let height = area.height.min(HISTORY_STRIP_HEIGHT);
    (offset..len)
        .take(visible_card_count(area))
        .enumerate()
        .map(|(slot, index)| {
            let x = area.x + slot as u16 * (HISTORY_CARD_WIDTH + 1);
            (index, Rect::new(x, area.y, HISTORY_CARD_WIDTH, height))
        })
        .collect()
}

/// Symbols popup dropped down under the Symbols tab, kept on `screen`
pub fn symbols_popup(anchor: Rect, screen: Rect, symbol_count: usize) -> Rect {
    let width = (SYMBOL_SLOT_WIDTH * symbol_count as u16 + 2).min(screen.width);
    let height = 3u16.min(screen.height);
    let x = anchor.x.min(screen.right().saturating_sub(width));
    let y = anchor
        .bottom()
        .min(screen.bottom().saturating_sub(height));
    Rect::new(x, y, width, height)
}

/// Slot rects inside the symbols popup
pub fn symbol_slots(popup: Rect, symbol_count: usize) -> Vec<Rect> {
    (0..symbol_count)
        .map(|i| {
            Rect::new(
                popup.x + 1 + i as u16 * SYMBOL_SLOT_WIDTH,
                popup.y + 1,
                SYMBOL_SLOT_WIDTH,
                1,
            )
        })
        .filter(|slot| slot.right() <= popup.right())
        .collect()
}

/// Quit dialog centered on `area`: message, button row and key hint
pub fn quit_dialog_layout(area: Rect) -> QuitDialogLayout {
    let popup = centered_popup(area, 40, 7);
    let inner = Rect::new(
        popup.x.saturating_add(1),
        popup.y.saturating_add(1),
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );
    let line = |offset: u16| {
        let y = inner.y.saturating_add(offset);
        let height = if y < inner.bottom() { 1 } else { 0 };
        Rect::new(inner.x, y, inner.width, height)
    };

    let row = line(3);
    let gap = 3;
    let quit_width = QUIT_LABEL.chars().count() as u16;
    let total = quit_width + gap + STAY_LABEL.chars().count() as u16;
    let start = row.x + row.width.saturating_sub(total) / 2;

    QuitDialogLayout {
        popup,
        message: line(1),
        quit_button: button_at(row, start, QUIT_LABEL),
        stay_button: button_at(row, start + quit_width + gap, STAY_LABEL),
        hint: line(4),
    }
}

/// One-line bar shown in place of the minimized window
pub fn restore_bar(screen: Rect) -> Rect {
    Rect::new(
        screen.x,
        screen.bottom().saturating_sub(1),
        screen.width,
        screen.height.min(1),
    )
}
