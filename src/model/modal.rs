//! Modal stack for dialogs drawn over the window

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing key and mouse bindings
    Help,
}

/// Modals are rendered bottom to top; only the top one receives input
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Whether `modal` is open anywhere in the stack
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.contains(modal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_contains() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        assert!(stack.contains(&Modal::Help));
        assert!(!stack.contains(&Modal::QuitConfirm));
        assert_eq!(stack.top(), Some(&Modal::Help));
    }
}
