//! The two configured languages and their gateway codes

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    Aleut,
}

/// Display name → gateway code.
///
/// Aleut has no code on the gateway side and is sent as English. Kept as-is
/// until the product side decides on a real mapping.
pub const LANGUAGE_CODES: [(&str, &str); 2] = [("Russian", "ru"), ("Aleut", "en")];

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::Russian => LANGUAGE_CODES[0].0,
            Language::Aleut => LANGUAGE_CODES[1].0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Russian => LANGUAGE_CODES[0].1,
            Language::Aleut => LANGUAGE_CODES[1].1,
        }
    }
}
