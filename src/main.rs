//! aleut-translator - A Russian–Aleut translator in a floating terminal window
//!
//! This is the main entry point. It uses the Component Architecture pattern
//! from ratatui: events become Actions, the App updates state from them and
//! then redraws.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{GoogleGateway, SystemClipboard};
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    // The UI still runs without a log file
    let log_init = logging::init();

    let config = Config::load();
    logging::set_level(config.log_level());
    if let Err(e) = &log_init {
        eprintln!("Logging disabled: {:#}", e);
    }
    log::info!("Starting aleut-translator {}", env!("CARGO_PKG_VERSION"));

    let gateway =
        GoogleGateway::new(&config.gateway).context("Failed to create the translation client")?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(config.tick_rate_ms.max(10)));
    tui.enter()?;

    let (width, height) = tui.screen_size()?;
    let mut app = App::new(
        &config,
        Arc::new(gateway),
        Box::new(SystemClipboard::new()),
        Rect::new(0, 0, width, height),
    );
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        log::error!("Fatal: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    log::info!("Shutting down");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                log::error!("Draw error: {:#}", e);
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Actions may produce follow-up actions
        let mut current_action = action;
        while let Some(a) = current_action {
            if a != Action::Tick {
                log::trace!("Action: {}", a);
            }
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
