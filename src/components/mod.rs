//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod about_panel;
pub mod help_dialog;
pub mod history_strip;
pub mod layout;
pub mod quit_dialog;
pub mod symbols_popup;
pub mod translator_panel;
pub mod window_frame;

pub use about_panel::AboutPanel;
pub use help_dialog::HelpDialog;
pub use history_strip::HistoryStrip;
pub use layout::{hit, translator_layout, window_layout};
pub use quit_dialog::QuitDialog;
pub use symbols_popup::{SymbolsPopup, SYMBOLS};
pub use translator_panel::{TranslatorPanel, TranslatorRenderContext};
pub use window_frame::{draw_window_frame, FrameRenderContext};
