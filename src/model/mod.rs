//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `HistoryStore` - bounded log of completed translations
//! - `TranslatorSession` - input/output text and language direction
//! - `SectionController` - panel visibility and menu highlight
//! - `WindowInteractionController` - frameless window move/resize
//! - `ModalStack` - Modal overlay management

pub mod geometry;
pub mod history;
pub mod interaction;
pub mod language;
pub mod modal;
pub mod section;
pub mod session;
pub mod window;

// Re-export commonly used types
pub use geometry::{Point, Size, WindowGeometry};
pub use history::{HistoryStore, TranslationRecord};
pub use interaction::{CursorShape, InteractionMode, WindowInteractionController};
pub use section::{MainPanel, Section, SectionController, SectionEffect};
pub use session::TranslatorSession;
pub use window::WindowState;
