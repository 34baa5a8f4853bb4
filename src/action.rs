//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{Point, Section};
use std::fmt;

/// Raw pointer event on the window frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Drag(Point),
    Moved(Point),
    Up(Point),
}

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling and timeouts
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Quit without confirmation
    ForceQuit,
    /// Open keyboard/mouse help
    OpenHelp,
    /// Close the current modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Window Chrome
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer activity that may move or resize the window
    Pointer(PointerEvent),
    /// Toggle between maximized and normal geometry
    ToggleMaximized,
    /// Hide the window to the restore bar
    Minimize,
    /// Bring the window back from the restore bar
    RestoreWindow,

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────
    /// Menu button: Translator, Symbols (toggle) or About
    SwitchSection(Section),
    /// Copy a special character from the symbols popup
    CopySymbol(usize),
    /// Dismiss the symbols popup without picking
    CloseSymbols,
    /// Scroll the About text
    ScrollAbout(i16),

    // ─────────────────────────────────────────────────────────────────────────
    // Translator
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the input for translation
    Translate,
    /// Cancel the in-flight translation
    CancelTranslation,
    /// Swap source and target languages
    SwapLanguages,
    /// Clear input and output
    ClearFields,
    /// Copy the output text to the clipboard
    CopyOutput,
    /// Type a character into the input
    InputChar(char),
    /// Delete the last input character
    InputBackspace,
    /// Fill the fields from a history card
    SelectHistory(usize),
    /// Scroll the history strip by whole cards
    ScrollHistory(i16),
    /// Forget all history records
    ClearHistory,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::Pointer(event) => write!(f, "Pointer({:?})", event),
            Action::ToggleMaximized => write!(f, "ToggleMaximized"),
            Action::Minimize => write!(f, "Minimize"),
            Action::RestoreWindow => write!(f, "RestoreWindow"),
            Action::SwitchSection(section) => write!(f, "SwitchSection({})", section.title()),
            Action::CopySymbol(index) => write!(f, "CopySymbol({})", index),
            Action::CloseSymbols => write!(f, "CloseSymbols"),
            Action::ScrollAbout(lines) => write!(f, "ScrollAbout({})", lines),
            Action::Translate => write!(f, "Translate"),
            Action::CancelTranslation => write!(f, "CancelTranslation"),
            Action::SwapLanguages => write!(f, "SwapLanguages"),
            Action::ClearFields => write!(f, "ClearFields"),
            Action::CopyOutput => write!(f, "CopyOutput"),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::InputBackspace => write!(f, "InputBackspace"),
            Action::SelectHistory(index) => write!(f, "SelectHistory({})", index),
            Action::ScrollHistory(cards) => write!(f, "ScrollHistory({})", cards),
            Action::ClearHistory => write!(f, "ClearHistory"),
        }
    }
}
