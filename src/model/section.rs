//! Section switching
//!
//! Tracks which main panel is visible, whether the symbols popup is open,
//! and which menu button is highlighted. These are three separate pieces
//! of state: the highlight can point at Symbols while the translator panel
//! is still the visible one.

/// Menu sections, also used for the button highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Translator,
    Symbols,
    About,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Translator, Section::Symbols, Section::About]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Translator => "Translator",
            Section::Symbols => "Symbols",
            Section::About => "About",
        }
    }
}

/// Main panels; exactly one is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainPanel {
    Translator,
    About,
}

/// Visibility changes the shell has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEffect {
    /// Build the About panel (emitted at most once)
    ConstructAbout,
    ShowPanel(MainPanel),
    /// Open the symbols popup anchored under the Symbols button
    OpenSymbols,
    CloseSymbols,
}

#[derive(Debug)]
pub struct SectionController {
    main_panel: MainPanel,
    symbols_open: bool,
    active_button: Section,
    about_constructed: bool,
}

impl Default for SectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionController {
    pub fn new() -> Self {
        Self {
            main_panel: MainPanel::Translator,
            symbols_open: false,
            active_button: Section::Translator,
            about_constructed: false,
        }
    }

    pub fn main_panel(&self) -> MainPanel {
        self.main_panel
    }

    pub fn symbols_open(&self) -> bool {
        self.symbols_open
    }

    pub fn active_button(&self) -> Section {
        self.active_button
    }

    #[cfg(test)]
    pub fn about_constructed(&self) -> bool {
        self.about_constructed
    }

    pub fn switch_section(&mut self, target: Section) -> Vec<SectionEffect> {
        let mut effects = Vec::new();

        match target {
            Section::Translator => {
                self.main_panel = MainPanel::Translator;
                effects.push(SectionEffect::ShowPanel(MainPanel::Translator));
                if self.symbols_open {
                    self.symbols_open = false;
                    effects.push(SectionEffect::CloseSymbols);
                }
            }
            Section::Symbols => {
                self.symbols_open = !self.symbols_open;
                effects.push(if self.symbols_open {
                    SectionEffect::OpenSymbols
                } else {
                    SectionEffect::CloseSymbols
                });
            }
            Section::About => {
                if !self.about_constructed {
                    self.about_constructed = true;
                    effects.push(SectionEffect::ConstructAbout);
                }
                self.main_panel = MainPanel::About;
                effects.push(SectionEffect::ShowPanel(MainPanel::About));
            }
        }

        self.active_button = target;
        effects
    }

    /// Close the popup without touching the highlight
    pub fn close_symbols(&mut self) -> Option<SectionEffect> {
        if self.symbols_open {
            self.symbols_open = false;
            Some(SectionEffect::CloseSymbols)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_translator() {
        let sections = SectionController::new();
        assert_eq!(sections.main_panel(), MainPanel::Translator);
        assert_eq!(sections.active_button(), Section::Translator);
        assert!(!sections.symbols_open());
        assert!(!sections.about_constructed());
    }

    #[test]
    fn test_symbols_toggle_twice_restores_state() {
        for start in [Section::Translator, Section::About] {
            let mut sections = SectionController::new();
            sections.switch_section(start);
            let panel = sections.main_panel();

            assert_eq!(
                sections.switch_section(Section::Symbols),
                vec![SectionEffect::OpenSymbols]
            );
            assert!(sections.symbols_open());
            assert_eq!(
                sections.switch_section(Section::Symbols),
                vec![SectionEffect::CloseSymbols]
            );

            assert!(!sections.symbols_open());
            assert_eq!(sections.main_panel(), panel);
            assert_eq!(sections.active_button(), Section::Symbols);
        }
    }

    #[test]
    fn test_about_is_constructed_once() {
        let mut sections = SectionController::new();
        let first = sections.switch_section(Section::About);
        let second = sections.switch_section(Section::About);

        let constructions = first
            .iter()
            .chain(second.iter())
            .filter(|e| **e == SectionEffect::ConstructAbout)
            .count();
        assert_eq!(constructions, 1);
        assert_eq!(sections.main_panel(), MainPanel::About);
        assert_eq!(sections.active_button(), Section::About);
    }

    #[test]
    fn test_translator_closes_symbols_popup() {
        let mut sections = SectionController::new();
        sections.switch_section(Section::About);
        sections.switch_section(Section::Symbols);

        let effects = sections.switch_section(Section::Translator);
        assert_eq!(
            effects,
            vec![
                SectionEffect::ShowPanel(MainPanel::Translator),
                SectionEffect::CloseSymbols
            ]
        );
        assert_eq!(sections.main_panel(), MainPanel::Translator);
        assert!(!sections.symbols_open());
    }

    #[test]
    fn test_about_keeps_symbols_popup() {
        let mut sections = SectionController::new();
        sections.switch_section(Section::Symbols);
        sections.switch_section(Section::About);
        assert!(sections.symbols_open());
        assert_eq!(sections.active_button(), Section::About);
    }

    #[test]
    fn test_close_symbols_keeps_highlight() {
        let mut sections = SectionController::new();
        sections.switch_section(Section::Symbols);
        assert_eq!(sections.close_symbols(), Some(SectionEffect::CloseSymbols));
        assert_eq!(sections.close_symbols(), None);
        assert_eq!(sections.active_button(), Section::Symbols);
    }
}
