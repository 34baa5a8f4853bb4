//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes events to the window chrome, the active panel and the dialogs.
//! Window geometry, section switching, history and the translator session
//! all live in the model layer; App only wires their results together.

use crate::action::{Action, PointerEvent};
use crate::component::Component;
use crate::components::layout::{
    restore_bar, symbol_slots, symbols_popup, TranslatorLayout, WindowLayout,
};
use crate::components::window_frame::WINDOW_TITLE;
use crate::components::{
    draw_window_frame, hit, translator_layout, window_layout, AboutPanel, FrameRenderContext,
    HelpDialog, HistoryStrip, QuitDialog, SymbolsPopup, TranslatorPanel, TranslatorRenderContext,
    SYMBOLS,
};
use crate::config::Config;
use crate::model::interaction::{clamp_resize, WindowEffect};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{
    HistoryStore, MainPanel, Point, Section, SectionController, SectionEffect, Size,
    TranslatorSession, WindowGeometry, WindowInteractionController, WindowState,
};
use crate::services::{Clipboard, JobRunner, TranslationGateway};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::sync::Arc;
use std::time::Instant;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Terminal area the window lives in
    pub screen: Rect,

    pub window: WindowState,
    pub interaction: WindowInteractionController,
    pub sections: SectionController,
    pub session: TranslatorSession,
    pub history: HistoryStore,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Background translation requests
    pub job_runner: JobRunner,

    /// Last pointer position, drives the cursor hint
    pub pointer: Option<Point>,

    clipboard: Box<dyn Clipboard>,
    tick_count: usize,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub translator_panel: TranslatorPanel,
    pub history_strip: HistoryStrip,
    pub symbols_popup: SymbolsPopup,
    /// Built on first switch to the About section
    pub about_panel: Option<AboutPanel>,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(
        config: &Config,
        gateway: Arc<dyn TranslationGateway>,
        clipboard: Box<dyn Clipboard>,
        screen: Rect,
    ) -> App {
        let window_config = &config.window;
        let min_size = Size::new(window_config.min_width, window_config.min_height);
        let geometry = WindowGeometry::new(
            window_config.x,
            window_config.y,
            window_config.width.max(min_size.width),
            window_config.height.max(min_size.height),
        );

        let mut window = WindowState::new(geometry);
        window.fit_to_screen(screen_size(screen), min_size);

        App {
            should_quit: false,
            screen,
            window,
            interaction: WindowInteractionController::new(window_config.resize_margin, min_size),
            sections: SectionController::new(),
            session: TranslatorSession::new(),
            history: HistoryStore::new(),
            modals: ModalStack::new(),
            job_runner: JobRunner::new(gateway),
            pointer: None,
            clipboard,
            tick_count: 0,
            translator_panel: TranslatorPanel,
            history_strip: HistoryStrip::new(),
            symbols_popup: SymbolsPopup,
            about_panel: None,
            quit_dialog: QuitDialog::default(),
            help_dialog: HelpDialog::default(),
        }
    }

    fn window_layout(&self) -> WindowLayout {
        window_layout(self.window.geometry.visible_rect(self.screen))
    }

    fn translator_layout(&self) -> TranslatorLayout {
        translator_layout(self.window_layout().content)
    }

    fn symbols_popup_area(&self, layout: &WindowLayout) -> Rect {
        symbols_popup(layout.tabs[1], self.screen, SYMBOLS.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Translation
    // ─────────────────────────────────────────────────────────────────────────

    fn submit_translation(&mut self) {
        match self.session.prepare_request() {
            Ok(request) => {
                let id = self.job_runner.spawn(request);
                self.session.begin(id);
            }
            Err(e) => log::debug!("Translation not submitted: {}", e),
        }
    }

    /// Drop the in-flight request, if any
    fn cancel_translation(&mut self) {
        if self.job_runner.cancel() {
            self.session.cancel_pending();
        }
    }

    fn poll_translation(&mut self) {
        if let Some(outcome) = self.job_runner.poll() {
            if let Some(record) = self.session.complete(outcome) {
                self.history.append(record);
                self.history_strip.reset();
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────────

    fn copy_output(&mut self) {
        let now = Instant::now();
        let output = self.session.output.trim().to_string();
        if output.is_empty() {
            self.session
                .show_copy_notice("Output is empty, nothing to copy", now);
            return;
        }

        match self.clipboard.set_text(&output) {
            Ok(()) => self.session.show_copy_notice("Copied to clipboard", now),
            Err(e) => {
                log::warn!("Copy to clipboard failed: {:#}", e);
                self.session.show_copy_notice("Clipboard unavailable", now);
            }
        }
    }

    fn copy_symbol(&mut self, index: usize) {
        let Some(symbol) = SYMBOLS.get(index) else {
            return;
        };

        if let Err(e) = self.clipboard.set_text(symbol) {
            log::warn!("Copy of symbol {} failed: {:#}", symbol, e);
        } else {
            log::debug!("Copied symbol {}", symbol);
        }

        if let Some(effect) = self.sections.close_symbols() {
            self.apply_section_effect(effect);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_pointer(&mut self, event: PointerEvent) {
        let geometry = self.window.geometry;

        match event {
            PointerEvent::Down(global) => {
                self.pointer = Some(global);
                // No move/resize while maximized
                if self.window.is_maximized {
                    return;
                }
                let mode = self.interaction.pointer_down(
                    geometry.to_local(global),
                    global,
                    geometry.size(),
                );
                log::debug!("Gesture started: {:?}", mode);
            }
            PointerEvent::Drag(global) | PointerEvent::Moved(global) => {
                self.pointer = Some(global);
                if self.window.is_maximized {
                    return;
                }
                if let Some(effect) =
                    self.interaction
                        .pointer_move(geometry.to_local(global), global, &geometry)
                {
                    let bounds = screen_size(self.screen);
                    let min = self.interaction.min_size();
                    let effect = match effect {
                        WindowEffect::ResizeTo {
                            direction,
                            geometry: next,
                        } => WindowEffect::ResizeTo {
                            direction,
                            geometry: clamp_resize(&geometry, next, direction, bounds, min),
                        },
                        other => other,
                    };
                    self.window.apply(&effect);
                    self.window.geometry.fit_within(bounds, min);
                }
            }
            PointerEvent::Up(global) => {
                self.pointer = Some(global);
                self.interaction.pointer_up();
            }
        }
    }

    fn toggle_maximized(&mut self) {
        self.interaction.cancel();
        self.window
            .toggle_maximized(screen_size(self.screen), self.interaction.min_size());
        log::info!(
            "Window {}",
            if self.window.is_maximized {
                "maximized"
            } else {
                "restored"
            }
        );
    }

    fn minimize(&mut self) {
        self.interaction.cancel();
        if let Some(effect) = self.sections.close_symbols() {
            self.apply_section_effect(effect);
        }
        self.window.minimize();
        log::info!("Window minimized");
    }

    fn resize_screen(&mut self, width: u16, height: u16) {
        self.screen = Rect::new(0, 0, width, height);
        self.window
            .fit_to_screen(screen_size(self.screen), self.interaction.min_size());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────

    fn switch_section(&mut self, section: Section) {
        for effect in self.sections.switch_section(section) {
            self.apply_section_effect(effect);
        }
    }

    fn apply_section_effect(&mut self, effect: SectionEffect) {
        match effect {
            SectionEffect::ConstructAbout => {
                if self.about_panel.is_none() {
                    self.about_panel = Some(AboutPanel::new());
                }
            }
            SectionEffect::ShowPanel(panel) => log::debug!("Showing {:?} panel", panel),
            SectionEffect::OpenSymbols => log::debug!("Symbols popup opened"),
            SectionEffect::CloseSymbols => log::debug!("Symbols popup closed"),
        }
    }
}

fn screen_size(screen: Rect) -> Size {
    Size::new(screen.width as i32, screen.height as i32)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        log::info!(
            "Window at {}x{}+{}+{} on a {}x{} terminal",
            self.window.geometry.width,
            self.window.geometry.height,
            self.window.geometry.x,
            self.window.geometry.y,
            self.screen.width,
            self.screen.height
        );
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let global = match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => Some(Action::OpenQuitDialog),
            KeyCode::F(1) => Some(Action::SwitchSection(Section::Translator)),
            KeyCode::F(2) => Some(Action::SwitchSection(Section::Symbols)),
            KeyCode::F(3) => Some(Action::SwitchSection(Section::About)),
            KeyCode::F(9) if self.window.is_minimized => Some(Action::RestoreWindow),
            KeyCode::F(9) => Some(Action::Minimize),
            KeyCode::F(10) => Some(Action::OpenHelp),
            KeyCode::F(11) => Some(Action::ToggleMaximized),
            _ => None,
        };
        if global.is_some() {
            return Ok(global);
        }

        if self.window.is_minimized {
            let action = match key.code {
                KeyCode::Enter | KeyCode::Esc => Some(Action::RestoreWindow),
                _ => None,
            };
            return Ok(action);
        }

        if self.sections.symbols_open() {
            return self.symbols_popup.handle_key_event(key);
        }

        match self.sections.main_panel() {
            MainPanel::Translator => self.translator_panel.handle_key_event(key),
            MainPanel::About => match self.about_panel.as_mut() {
                Some(about) => about.handle_key_event(key),
                None => Ok(None),
            },
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let (column, row) = (mouse.column, mouse.row);
        let global = Point::new(column as i32, row as i32);

        // Dialogs swallow the pointer apart from their own buttons
        if let Some(modal) = self.modals.top() {
            let action = match (modal, mouse.kind) {
                (Modal::QuitConfirm, MouseEventKind::Down(MouseButton::Left)) => {
                    self.quit_dialog.click_action(self.screen, column, row)
                }
                (_, MouseEventKind::Up(_)) => Some(Action::Pointer(PointerEvent::Up(global))),
                _ => None,
            };
            return Ok(action);
        }

        if self.window.is_minimized {
            let action = match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if hit(restore_bar(self.screen), column, row) =>
                {
                    Some(Action::RestoreWindow)
                }
                _ => None,
            };
            return Ok(action);
        }

        let layout = self.window_layout();
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click_action(&layout, column, row),
            MouseEventKind::Drag(MouseButton::Left) => {
                Some(Action::Pointer(PointerEvent::Drag(global)))
            }
            MouseEventKind::Moved => Some(Action::Pointer(PointerEvent::Moved(global))),
            MouseEventKind::Up(MouseButton::Left) => {
                Some(Action::Pointer(PointerEvent::Up(global)))
            }
            MouseEventKind::ScrollUp => self.scroll_action(&layout, column, row, -1),
            MouseEventKind::ScrollDown => self.scroll_action(&layout, column, row, 1),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.tick_count = self.tick_count.wrapping_add(1);
                self.poll_translation();
                self.session.expire_copy_notice(Instant::now());
            }
            Action::Resize(width, height) => self.resize_screen(width, height),
            Action::OpenQuitDialog => {
                self.interaction.cancel();
                if !self.modals.contains(&Modal::QuitConfirm) {
                    self.quit_dialog.reset();
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::ForceQuit => {
                self.job_runner.cancel();
                self.should_quit = true;
            }
            Action::OpenHelp => {
                self.interaction.cancel();
                if !self.modals.contains(&Modal::Help) {
                    self.help_dialog.scroll_offset = 0;
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Window Chrome
            // ─────────────────────────────────────────────────────────────────
            Action::Pointer(event) => self.handle_pointer(event),
            Action::ToggleMaximized => self.toggle_maximized(),
            Action::Minimize => self.minimize(),
            Action::RestoreWindow => {
                self.window.restore_from_minimized();
                log::info!("Window restored from minimized");
            }

            // ─────────────────────────────────────────────────────────────────
            // Sections
            // ─────────────────────────────────────────────────────────────────
            Action::SwitchSection(section) => self.switch_section(section),
            Action::CopySymbol(index) => self.copy_symbol(index),
            Action::CloseSymbols => {
                if let Some(effect) = self.sections.close_symbols() {
                    self.apply_section_effect(effect);
                }
            }
            Action::ScrollAbout(_) => {
                if let Some(about) = self.about_panel.as_mut() {
                    return about.update(action);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Translator
            // ─────────────────────────────────────────────────────────────────
            Action::Translate => self.submit_translation(),
            Action::CancelTranslation => self.cancel_translation(),
            Action::SwapLanguages => {
                self.cancel_translation();
                self.session.swap_languages();
            }
            Action::ClearFields => {
                self.cancel_translation();
                self.session.clear();
            }
            Action::CopyOutput => self.copy_output(),
            Action::InputChar(c) => {
                self.cancel_translation();
                self.session.insert_char(c);
            }
            Action::InputBackspace => {
                self.cancel_translation();
                self.session.backspace();
            }
            Action::ClearHistory => {
                self.history.clear();
                self.history_strip.reset();
                log::info!("History cleared");
            }
            Action::SelectHistory(index) => {
                if let Some(record) = self.history.get(index).cloned() {
                    self.cancel_translation();
                    self.session.load_record(&record);
                }
            }
            Action::ScrollHistory(cards) => {
                let area = self.translator_layout().history;
                self.history_strip.scroll(cards, self.history.len(), area);
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if self.window.is_minimized {
            draw_restore_bar(frame, restore_bar(area));
        } else {
            let layout = window_layout(self.window.geometry.visible_rect(area));
            let ctx = FrameRenderContext {
                maximize_glyph: self.window.maximize_glyph(),
                active_section: self.sections.active_button(),
                cursor: self.interaction.cursor(),
                mode: self.interaction.mode(),
                pointer: self.pointer.and_then(|p| {
                    Some((u16::try_from(p.x).ok()?, u16::try_from(p.y).ok()?))
                }),
            };
            draw_window_frame(frame, &layout, &ctx);

            match self.sections.main_panel() {
                MainPanel::Translator => {
                    let panel_layout = translator_layout(layout.content);
                    let now = Instant::now();
                    let ctx = TranslatorRenderContext {
                        session: &self.session,
                        copy_notice: self.session.copy_notice(now),
                        spinner: self
                            .session
                            .is_pending()
                            .then(|| SPINNER[self.tick_count % SPINNER.len()]),
                    };
                    self.translator_panel
                        .draw_with_session(frame, &panel_layout, &ctx)?;
                    self.history_strip
                        .draw_with_history(frame, panel_layout.history, &self.history);
                }
                MainPanel::About => {
                    if let Some(about) = self.about_panel.as_mut() {
                        about.draw(frame, layout.content)?;
                    }
                }
            }

            if self.sections.symbols_open() {
                let popup = symbols_popup(layout.tabs[1], area, SYMBOLS.len());
                self.symbols_popup.draw(frame, popup)?;
            }
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    /// Left click: buttons first, then the frame starts a move/resize gesture
    fn click_action(&self, layout: &WindowLayout, column: u16, row: u16) -> Option<Action> {
        let global = Point::new(column as i32, row as i32);

        if self.sections.symbols_open() {
            let popup = self.symbols_popup_area(layout);
            if hit(popup, column, row) {
                return symbol_slots(popup, SYMBOLS.len())
                    .iter()
                    .position(|slot| hit(*slot, column, row))
                    .map(Action::CopySymbol);
            }
            // The Symbols tab itself toggles the popup closed below
            if !hit(layout.tabs[1], column, row) {
                return Some(Action::CloseSymbols);
            }
        }

        if !self.window.geometry.contains(global) {
            return None;
        }

        if hit(layout.close_button, column, row) {
            return Some(Action::OpenQuitDialog);
        }
        if hit(layout.maximize_button, column, row) {
            return Some(Action::ToggleMaximized);
        }
        if hit(layout.minimize_button, column, row) {
            return Some(Action::Minimize);
        }
        for (tab, section) in layout.tabs.iter().zip(Section::all()) {
            if hit(*tab, column, row) {
                return Some(Action::SwitchSection(section));
            }
        }

        match self.sections.main_panel() {
            MainPanel::Translator => {
                let panel = translator_layout(layout.content);
                if hit(panel.swap_button, column, row) {
                    return Some(Action::SwapLanguages);
                }
                if hit(panel.translate_button, column, row) {
                    return Some(Action::Translate);
                }
                if hit(panel.clear_button, column, row) {
                    return Some(Action::ClearFields);
                }
                if hit(panel.copy_button, column, row) {
                    return Some(Action::CopyOutput);
                }
                if let Some(index) =
                    self.history_strip
                        .card_at(panel.history, self.history.len(), column, row)
                {
                    return Some(Action::SelectHistory(index));
                }
                // Text fields take the click for themselves
                if hit(panel.input, column, row) || hit(panel.output, column, row) {
                    return None;
                }
            }
            MainPanel::About => {
                if hit(layout.content, column, row) {
                    return None;
                }
            }
        }

        Some(Action::Pointer(PointerEvent::Down(global)))
    }

    fn scroll_action(&self, layout: &WindowLayout, column: u16, row: u16, step: i16) -> Option<Action> {
        if !hit(layout.content, column, row) {
            return None;
        }
        match self.sections.main_panel() {
            MainPanel::Translator => {
                let panel = translator_layout(layout.content);
                hit(panel.history, column, row).then_some(Action::ScrollHistory(step))
            }
            MainPanel::About => Some(Action::ScrollAbout(step * 3)),
        }
    }
}

fn draw_restore_bar(frame: &mut Frame, area: Rect) {
    let bar = Line::from(vec![
        Span::styled(
            format!(" ▣ {} ", WINDOW_TITLE),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  click or press F9 to restore",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(bar), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::quit_dialog_layout;
    use crate::model::interaction::ResizeDirection;
    use crate::model::InteractionMode;
    use crate::services::clipboard::MemoryClipboard;
    use crate::services::job_runner::tests::FakeGateway;
    use crate::services::gateway::GatewayError;
    use ratatui::{backend::TestBackend, Terminal};
    use std::thread;
    use std::time::Duration;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn app_with(gateway: Arc<FakeGateway>, clipboard: MemoryClipboard) -> App {
        let mut config = Config::default();
        config.window.x = 10;
        config.window.y = 4;
        App::new(&config, gateway, Box::new(clipboard), SCREEN)
    }

    fn app() -> App {
        app_with(Arc::new(FakeGateway::echo_upper()), MemoryClipboard::default())
    }

    fn app_at(x: i32, y: i32) -> App {
        let mut config = Config::default();
        config.window.x = x;
        config.window.y = y;
        App::new(
            &config,
            Arc::new(FakeGateway::echo_upper()),
            Box::new(MemoryClipboard::default()),
            SCREEN,
        )
    }

    fn press(app: &mut App, column: u16, row: u16) {
        let action = app
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row))
            .unwrap();
        dispatch(app, action);
    }

    /// Drag target may be off the terminal, so skip the u16 mouse event
    fn drag_to(app: &mut App, x: i32, y: i32) {
        dispatch(app, Some(Action::Pointer(PointerEvent::Drag(Point::new(x, y)))));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Feed an event through the app the way the main loop does
    fn dispatch(app: &mut App, action: Option<Action>) {
        let mut current = action;
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn click(app: &mut App, column: u16, row: u16) {
        let action = app
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), column, row))
            .unwrap();
        dispatch(app, action);
        let action = app
            .handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), column, row))
            .unwrap();
        dispatch(app, action);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let action = app
                .handle_key_event(key(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap();
            dispatch(app, action);
        }
    }

    fn wait_for_translation(app: &mut App) {
        for _ in 0..200 {
            app.update(Action::Tick).unwrap();
            if !app.session.is_pending() {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("translation did not finish");
    }

    #[test]
    fn test_empty_input_never_calls_gateway() {
        let gateway = Arc::new(FakeGateway::echo_upper());
        let mut app = app_with(gateway.clone(), MemoryClipboard::default());

        type_text(&mut app, "   ");
        let action = app
            .handle_key_event(key(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        dispatch(&mut app, action);

        assert!(!app.session.is_pending());
        assert_eq!(
            app.session.error.as_deref(),
            Some("Error: enter text to translate")
        );
        thread::sleep(Duration::from_millis(20));
        assert_eq!(gateway.call_count(), 0);
    }

    #[test]
    fn test_translation_lands_in_history() {
        let mut app = app();

        type_text(&mut app, "privet");
        dispatch(&mut app, Some(Action::Translate));
        assert!(app.session.is_pending());
        wait_for_translation(&mut app);

        assert_eq!(app.session.output, "PRIVET");
        assert_eq!(app.history.len(), 1);
        let record = app.history.get(0).unwrap();
        assert_eq!(record.source_lang, "Russian");
        assert_eq!(record.input_text, "privet");
        assert_eq!(record.target_lang, "Aleut");
    }

    #[test]
    fn test_gateway_failure_shown_inline() {
        let gateway = Arc::new(FakeGateway::replying(|_| Err(GatewayError::Status(502))));
        let mut app = app_with(gateway, MemoryClipboard::default());

        type_text(&mut app, "privet");
        dispatch(&mut app, Some(Action::Translate));
        wait_for_translation(&mut app);

        assert!(app.history.is_empty());
        assert!(app.session.output.is_empty());
        assert!(app
            .session
            .error
            .as_deref()
            .unwrap()
            .starts_with("Translation error:"));
    }

    #[test]
    fn test_typing_during_translation_discards_result() {
        let gateway = Arc::new(FakeGateway::replying(|text| {
            thread::sleep(Duration::from_millis(50));
            Ok(text.to_uppercase())
        }));
        let mut app = app_with(gateway, MemoryClipboard::default());

        type_text(&mut app, "abc");
        dispatch(&mut app, Some(Action::Translate));
        assert!(app.session.is_pending());
        type_text(&mut app, "xyz");
        assert!(!app.session.is_pending());

        thread::sleep(Duration::from_millis(150));
        for _ in 0..5 {
            app.update(Action::Tick).unwrap();
        }

        assert_eq!(app.session.input, "abcxyz");
        assert!(app.session.output.is_empty());
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_backspace_during_translation_discards_result() {
        let gateway = Arc::new(FakeGateway::replying(|text| {
            thread::sleep(Duration::from_millis(50));
            Ok(text.to_uppercase())
        }));
        let mut app = app_with(gateway, MemoryClipboard::default());

        type_text(&mut app, "abc");
        dispatch(&mut app, Some(Action::Translate));
        let action = app
            .handle_key_event(key(KeyCode::Backspace, KeyModifiers::NONE))
            .unwrap();
        dispatch(&mut app, action);

        thread::sleep(Duration::from_millis(150));
        app.update(Action::Tick).unwrap();

        assert_eq!(app.session.input, "ab");
        assert!(app.session.output.is_empty());
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_clear_history_shortcut() {
        let mut app = app();
        type_text(&mut app, "privet");
        dispatch(&mut app, Some(Action::Translate));
        wait_for_translation(&mut app);
        assert_eq!(app.history.len(), 1);

        let action = app
            .handle_key_event(key(KeyCode::Char('k'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ClearHistory));
        dispatch(&mut app, action);

        assert!(app.history.is_empty());
        assert_eq!(app.session.output, "PRIVET");
    }

    #[test]
    fn test_history_card_click_restores_record() {
        let mut app = app();
        type_text(&mut app, "privet");
        dispatch(&mut app, Some(Action::Translate));
        wait_for_translation(&mut app);
        dispatch(&mut app, Some(Action::ClearFields));

        let strip = app.translator_layout().history;
        click(&mut app, strip.x + 2, strip.y + 2);

        assert_eq!(app.session.input, "privet");
        assert_eq!(app.session.output, "PRIVET");
    }

    #[test]
    fn test_copy_output_notices() {
        let clipboard = MemoryClipboard::default();
        let mut app = app_with(Arc::new(FakeGateway::echo_upper()), clipboard.clone());

        dispatch(&mut app, Some(Action::CopyOutput));
        assert_eq!(
            app.session.copy_notice(Instant::now()),
            Some("Output is empty, nothing to copy")
        );
        assert!(clipboard.contents.borrow().is_none());

        app.session.output = "hello".to_string();
        dispatch(&mut app, Some(Action::CopyOutput));
        assert_eq!(
            app.session.copy_notice(Instant::now()),
            Some("Copied to clipboard")
        );
        assert_eq!(clipboard.contents.borrow().as_deref(), Some("hello"));
    }

    #[test]
    fn test_symbol_click_copies_and_closes_popup() {
        let clipboard = MemoryClipboard::default();
        let mut app = app_with(Arc::new(FakeGateway::echo_upper()), clipboard.clone());

        let tab = app.window_layout().tabs[1];
        click(&mut app, tab.x + 1, tab.y);
        assert!(app.sections.symbols_open());
        assert_eq!(app.sections.main_panel(), MainPanel::Translator);

        let popup = app.symbols_popup_area(&app.window_layout());
        let slot = symbol_slots(popup, SYMBOLS.len())[1];
        click(&mut app, slot.x + 1, slot.y);

        assert!(!app.sections.symbols_open());
        assert_eq!(app.sections.active_button(), Section::Symbols);
        assert_eq!(clipboard.contents.borrow().as_deref(), Some("ĝ"));
    }

    #[test]
    fn test_symbols_tab_toggles_popup() {
        let mut app = app();
        let tab = app.window_layout().tabs[1];

        click(&mut app, tab.x + 1, tab.y);
        click(&mut app, tab.x + 1, tab.y);
        assert!(!app.sections.symbols_open());
        assert_eq!(app.sections.main_panel(), MainPanel::Translator);
    }

    #[test]
    fn test_about_built_once() {
        let mut app = app();
        assert!(app.about_panel.is_none());

        dispatch(&mut app, Some(Action::SwitchSection(Section::About)));
        app.about_panel.as_mut().unwrap().scroll_offset = 3;
        dispatch(&mut app, Some(Action::SwitchSection(Section::Translator)));
        dispatch(&mut app, Some(Action::SwitchSection(Section::About)));

        assert_eq!(app.sections.main_panel(), MainPanel::About);
        assert_eq!(app.about_panel.as_ref().unwrap().scroll_offset, 3);
    }

    #[test]
    fn test_title_drag_moves_window() {
        let mut app = app();
        let before = app.window.geometry;
        let title = app.window_layout().title;
        let (x, y) = (title.x + 5, title.y);

        let down = app
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y))
            .unwrap();
        assert_eq!(
            down,
            Some(Action::Pointer(PointerEvent::Down(Point::new(x as i32, y as i32))))
        );
        dispatch(&mut app, down);
        let drag = app
            .handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), x + 4, y + 2))
            .unwrap();
        dispatch(&mut app, drag);
        let up = app
            .handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), x + 4, y + 2))
            .unwrap();
        dispatch(&mut app, up);

        assert_eq!(app.window.geometry.x, before.x + 4);
        assert_eq!(app.window.geometry.y, before.y + 2);
        assert_eq!(app.window.geometry.size(), before.size());
        assert!(!app.interaction.is_active());
    }

    #[test]
    fn test_right_edge_drag_resizes_window() {
        let mut app = app();
        let before = app.window.geometry;
        let x = (before.x + before.width - 1) as u16;
        let y = (before.y + before.height / 2) as u16;

        let down = app
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y))
            .unwrap();
        dispatch(&mut app, down);
        dispatch(
            &mut app,
            Some(Action::Pointer(PointerEvent::Drag(Point::new(x as i32 + 6, y as i32)))),
        );

        assert_eq!(app.window.geometry.width, before.width + 6);
        assert_eq!(app.window.geometry.x, before.x);
    }

    #[test]
    fn test_top_left_drag_keeps_far_edges() {
        let mut app = app_at(10, 4);
        let before = app.window.geometry;

        press(&mut app, 10, 4);
        assert_eq!(
            app.interaction.mode(),
            InteractionMode::Resizing(ResizeDirection::TopLeft)
        );
        drag_to(&mut app, 14, 6);

        let after = app.window.geometry;
        assert_eq!((after.x, after.y), (14, 6));
        assert_eq!(after.x + after.width, before.x + before.width);
        assert_eq!(after.y + after.height, before.y + before.height);
    }

    #[test]
    fn test_left_drag_at_screen_origin_keeps_right_edge() {
        let mut app = app_at(0, 4);
        let before = app.window.geometry;
        let y = (before.y + before.height / 2) as u16;

        press(&mut app, 0, y);
        assert_eq!(
            app.interaction.mode(),
            InteractionMode::Resizing(ResizeDirection::Left)
        );
        drag_to(&mut app, -3, y as i32);

        assert_eq!(app.window.geometry, before);
    }

    #[test]
    fn test_top_drag_at_screen_origin_keeps_bottom_edge() {
        let mut app = app_at(10, 0);
        let before = app.window.geometry;
        let x = (before.x + before.width / 2) as u16;

        press(&mut app, x, 0);
        assert_eq!(
            app.interaction.mode(),
            InteractionMode::Resizing(ResizeDirection::Top)
        );
        drag_to(&mut app, x as i32, -2);

        assert_eq!(app.window.geometry, before);
    }

    #[test]
    fn test_right_drag_stops_at_screen_edge() {
        let mut app = app_at(20, 4);
        let before = app.window.geometry;
        let x = (before.x + before.width - 1) as u16;
        let y = (before.y + before.height / 2) as u16;

        press(&mut app, x, y);
        drag_to(&mut app, x as i32 + 10, y as i32);

        let after = app.window.geometry;
        assert_eq!(after.x, before.x);
        assert_eq!(after.x + after.width, SCREEN.width as i32);
    }

    #[test]
    fn test_maximize_on_small_terminal_keeps_min_size() {
        let config = Config::default();
        let mut app = App::new(
            &config,
            Arc::new(FakeGateway::echo_upper()),
            Box::new(MemoryClipboard::default()),
            Rect::new(0, 0, 50, 20),
        );

        dispatch(&mut app, Some(Action::ToggleMaximized));

        assert!(app.window.is_maximized);
        assert_eq!(
            app.window.geometry,
            WindowGeometry::new(0, 0, config.window.min_width, config.window.min_height)
        );
    }

    #[test]
    fn test_maximize_cancels_gesture() {
        let mut app = app();
        let title = app.window_layout().title;

        let down = app
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), title.x + 2, title.y))
            .unwrap();
        dispatch(&mut app, down);
        assert!(app.interaction.is_active());

        let action = app
            .handle_key_event(key(KeyCode::F(11), KeyModifiers::NONE))
            .unwrap();
        dispatch(&mut app, action);

        assert!(!app.interaction.is_active());
        assert!(app.window.is_maximized);
        assert_eq!(app.window.geometry, WindowGeometry::new(0, 0, 120, 40));

        // Pointer gestures do not start while maximized
        dispatch(
            &mut app,
            Some(Action::Pointer(PointerEvent::Down(Point::new(5, 2)))),
        );
        assert!(!app.interaction.is_active());
    }

    #[test]
    fn test_minimize_and_restore() {
        let mut app = app();
        let button = app.window_layout().minimize_button;

        click(&mut app, button.x + 1, button.y);
        assert!(app.window.is_minimized);

        click(&mut app, 3, SCREEN.height - 1);
        assert!(!app.window.is_minimized);
    }

    #[test]
    fn test_close_button_asks_first() {
        let mut app = app();
        let button = app.window_layout().close_button;

        click(&mut app, button.x + 1, button.y);
        assert!(app.modals.contains(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        let action = app
            .handle_key_event(key(KeyCode::Char('y'), KeyModifiers::NONE))
            .unwrap();
        dispatch(&mut app, action);
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_dialog_buttons_are_clickable() {
        let mut app = app();
        let close = app.window_layout().close_button;
        let dialog = quit_dialog_layout(SCREEN);

        click(&mut app, close.x + 1, close.y);
        click(&mut app, dialog.stay_button.x + 1, dialog.stay_button.y);
        assert!(!app.modals.contains(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        click(&mut app, close.x + 1, close.y);
        click(&mut app, dialog.quit_button.x + 1, dialog.quit_button.y);
        assert!(app.should_quit);
    }

    #[test]
    fn test_terminal_shrink_keeps_window_visible() {
        let mut app = app();
        dispatch(&mut app, Some(Action::Resize(80, 30)));

        let geometry = app.window.geometry;
        assert!(geometry.x + geometry.width <= 80);
        assert!(geometry.y + geometry.height <= 30);
    }

    #[test]
    fn test_draw_smoke() {
        let mut app = app();
        app.session.input = "привет".to_string();
        app.session.output = "hello".to_string();
        app.history.append(crate::model::TranslationRecord {
            source_lang: "Russian".to_string(),
            input_text: "привет".to_string(),
            target_lang: "Aleut".to_string(),
            translated_text: "hello".to_string(),
        });

        let mut terminal = Terminal::new(TestBackend::new(SCREEN.width, SCREEN.height)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Translator"));
        assert!(text.contains("hello"));

        dispatch(&mut app, Some(Action::SwitchSection(Section::About)));
        dispatch(&mut app, Some(Action::OpenHelp));
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
    }
}
