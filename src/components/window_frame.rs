//! Window chrome: border, title bar buttons and the section menu
//!
//! The frame has no state of its own; everything it shows comes from the
//! window and interaction models through `FrameRenderContext`.

use crate::components::layout::{tab_label, WindowLayout};
use crate::model::{CursorShape, InteractionMode, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const WINDOW_TITLE: &str = "Russian–Aleut Translator";

/// Data needed to draw the chrome
pub struct FrameRenderContext<'a> {
    pub maximize_glyph: &'a str,
    pub active_section: Section,
    pub cursor: CursorShape,
    pub mode: InteractionMode,
    /// Last pointer cell seen over the window
    pub pointer: Option<(u16, u16)>,
}

pub fn draw_window_frame(frame: &mut Frame, layout: &WindowLayout, ctx: &FrameRenderContext) {
    let border_color = match ctx.mode {
        InteractionMode::Resizing(_) => Color::Yellow,
        InteractionMode::Moving => Color::LightCyan,
        InteractionMode::Idle if ctx.cursor != CursorShape::Arrow => Color::Yellow,
        InteractionMode::Idle => Color::Cyan,
    };

    frame.render_widget(Clear, layout.frame);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
        layout.frame,
    );

    draw_title_bar(frame, layout, ctx);

    frame.render_widget(
        Paragraph::new("─".repeat(layout.separator.width as usize))
            .style(Style::default().fg(Color::DarkGray)),
        layout.separator,
    );

    draw_menu(frame, layout, ctx.active_section);

    if ctx.cursor != CursorShape::Arrow {
        if let Some((column, row)) = ctx.pointer {
            draw_cursor_hint(frame, layout.frame, column, row, ctx.cursor);
        }
    }
}

fn draw_title_bar(frame: &mut Frame, layout: &WindowLayout, ctx: &FrameRenderContext) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            WINDOW_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        layout.title,
    );

    let button_style = Style::default().fg(Color::Gray);
    frame.render_widget(
        Paragraph::new(Span::styled("[─]", button_style)),
        layout.minimize_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[{}]", ctx.maximize_glyph),
            button_style,
        )),
        layout.maximize_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("[×]", Style::default().fg(Color::Red))),
        layout.close_button,
    );
}

fn draw_menu(frame: &mut Frame, layout: &WindowLayout, active: Section) {
    for (rect, section) in layout.tabs.iter().zip(Section::all()) {
        let style = if section == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(tab_label(section), style))),
            *rect,
        );
    }
}

/// Terminals cannot change the mouse pointer, so the hint is drawn in place
fn draw_cursor_hint(frame: &mut Frame, window: Rect, column: u16, row: u16, cursor: CursorShape) {
    let cell = Rect::new(column, row, 1, 1);
    if cell.intersection(window) != cell {
        return;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            cursor.glyph(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        cell,
    );
}
