//! Active language, text direction, and the single-writer controller that owns them.
//!
//! The frontend keeps exactly one `LanguageController` inside its provider component.
//! Consumers only ever see the current `Language` and a setter callback; the
//! controller is the one place that persists the choice and mirrors it onto the
//! document root.

use serde::{Deserialize, Serialize};

use crate::content::{self, Content};

/// Client storage key holding the two-letter language code.
pub const STORAGE_KEY: &str = "royrai-language";

/// Supported site languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

/// Text direction applied to the document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::He];

    /// Two-letter code, used for storage, the `lang` attribute and webhook payloads.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Parses a stored code. Only the exact codes `en` and `he` are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "he" => Some(Language::He),
            _ => None,
        }
    }

    /// Name of the language written in that language, for the switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::He => "עברית",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::He => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The full content tree for this language.
    pub fn content(self) -> &'static Content {
        match self {
            Language::En => &content::en::EN,
            Language::He => &content::he::HE,
        }
    }

    /// Picks the starting language: a valid stored code wins, then a browser
    /// language starting with `he`, then English.
    pub fn resolve_initial(stored: Option<&str>, browser_language: Option<&str>) -> Self {
        if let Some(language) = stored.and_then(Language::from_code) {
            return language;
        }
        match browser_language {
            Some(tag) if tag.to_lowercase().starts_with("he") => Language::He,
            _ => Language::En,
        }
    }
}

/// Side effects a language change has on its host environment.
///
/// The browser implementation writes `localStorage` and the `lang`/`dir`
/// attributes; tests use a recording implementation.
pub trait LanguageHost {
    fn persist(&self, language: Language);
    fn apply_to_document(&self, language: Language, direction: Direction);
}

/// Handle returned by [`LanguageController::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Sole owner of the process-wide language value.
pub struct LanguageController<H: LanguageHost> {
    current: Language,
    host: H,
    next_id: usize,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(Language)>)>,
}

impl<H: LanguageHost> LanguageController<H> {
    /// Creates the controller and mirrors the initial language onto the document.
    /// Nothing is persisted until the first explicit `set`.
    pub fn new(initial: Language, host: H) -> Self {
        host.apply_to_document(initial, initial.direction());
        Self {
            current: initial,
            host,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> Language {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.current.direction()
    }

    /// Persists `language`, updates the document synchronously, and notifies
    /// subscribers when the value actually changed.
    pub fn set(&mut self, language: Language) {
        let changed = self.current != language;
        self.current = language;
        self.host.persist(language);
        self.host.apply_to_document(language, language.direction());
        if changed {
            for (_, subscriber) in &self.subscribers {
                subscriber(language);
            }
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(Language) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingHost {
        stored: Rc<RefCell<Vec<Language>>>,
        document: Rc<RefCell<Vec<(Language, Direction)>>>,
    }

    impl LanguageHost for RecordingHost {
        fn persist(&self, language: Language) {
            self.stored.borrow_mut().push(language);
        }

        fn apply_to_document(&self, language: Language, direction: Direction) {
            self.document.borrow_mut().push((language, direction));
        }
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::En.direction(), Direction::Ltr);
        assert_eq!(Language::He.direction(), Direction::Rtl);
        assert_eq!(Direction::Rtl.as_str(), "rtl");
    }

    #[test]
    fn initial_language_prefers_storage_then_browser() {
        assert_eq!(Language::resolve_initial(Some("he"), Some("en-US")), Language::He);
        assert_eq!(Language::resolve_initial(Some("en"), Some("he-IL")), Language::En);
        assert_eq!(Language::resolve_initial(Some("fr"), Some("he-IL")), Language::He);
        assert_eq!(Language::resolve_initial(None, Some("HE")), Language::He);
        assert_eq!(Language::resolve_initial(None, Some("de-DE")), Language::En);
        assert_eq!(Language::resolve_initial(None, None), Language::En);
    }

    #[test]
    fn set_persists_and_mirrors_document() {
        let host = RecordingHost::default();
        let mut controller = LanguageController::new(Language::En, host.clone());
        assert!(host.stored.borrow().is_empty());
        assert_eq!(host.document.borrow().as_slice(), &[(Language::En, Direction::Ltr)]);

        controller.set(Language::He);

        assert_eq!(controller.get(), Language::He);
        assert_eq!(controller.direction(), Direction::Rtl);
        assert_eq!(host.stored.borrow().as_slice(), &[Language::He]);
        assert_eq!(host.document.borrow().last(), Some(&(Language::He, Direction::Rtl)));
    }

    #[test]
    fn subscribers_hear_only_real_changes() {
        let mut controller = LanguageController::new(Language::En, RecordingHost::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = controller.subscribe(move |language| sink.borrow_mut().push(language));

        controller.set(Language::En);
        controller.set(Language::He);
        controller.unsubscribe(id);
        controller.set(Language::En);

        assert_eq!(seen.borrow().as_slice(), &[Language::He]);
    }

    #[test]
    fn language_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Language::He).unwrap(), "\"he\"");
        assert_eq!(Language::from_code("he"), Some(Language::He));
        assert_eq!(Language::from_code("HE"), None);
    }
}
