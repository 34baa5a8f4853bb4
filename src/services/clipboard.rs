//! System clipboard access

use anyhow::{anyhow, Result};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Platform clipboard.
///
/// The context is created on first use and kept alive afterwards; on X11
/// the selection is only served while the owning context exists.
#[derive(Default)]
pub struct SystemClipboard {
    context: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.context.is_none() {
            let context =
                ClipboardContext::new().map_err(|e| anyhow!("clipboard unavailable: {}", e))?;
            self.context = Some(context);
        }

        if let Some(context) = self.context.as_mut() {
            context
                .set_contents(text.to_string())
                .map_err(|e| anyhow!("clipboard write failed: {}", e))?;
        }

        Ok(())
    }
}

/// In-memory clipboard for tests
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryClipboard {
    pub contents: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
