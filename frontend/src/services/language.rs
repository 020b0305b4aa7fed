//! Language provider: the only place the active language is written.
//!
//! `LanguageProvider` owns the `LanguageController` and exposes a read-only
//! snapshot plus a setter callback through Yew context. Pages read it with
//! [`use_language`]; nothing else touches storage or the document attributes.

use common::content::Content;
use common::language::{Direction, Language, LanguageController, LanguageHost, STORAGE_KEY};
use yew::prelude::*;

use super::platform;

/// Browser side effects of a language change.
pub struct WebLanguageHost;

impl LanguageHost for WebLanguageHost {
    fn persist(&self, language: Language) {
        platform::storage_set(STORAGE_KEY, language.code());
    }

    fn apply_to_document(&self, language: Language, direction: Direction) {
        platform::apply_document_language(language.code(), direction.as_str());
    }
}

/// What consumers see: the current language and the single setter.
#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn content(&self) -> &'static Content {
        self.language.content()
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self {
            language: Language::default(),
            set_language: Callback::noop(),
        }
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().unwrap_or_default()
}

pub enum Msg {
    Set(Language),
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct LanguageProvider {
    controller: LanguageController<WebLanguageHost>,
    set_language: Callback<Language>,
}

impl Component for LanguageProvider {
    type Message = Msg;
    type Properties = LanguageProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let stored = platform::storage_get(STORAGE_KEY);
        let browser = platform::browser_language();
        let initial = Language::resolve_initial(stored.as_deref(), browser.as_deref());

        let mut controller = LanguageController::new(initial, WebLanguageHost);
        platform::set_document_title(initial.content().seo.title);
        controller.subscribe(|language| platform::set_document_title(language.content().seo.title));

        Self {
            controller,
            set_language: ctx.link().callback(Msg::Set),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(language) => {
                let changed = self.controller.get() != language;
                self.controller.set(language);
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let context = LanguageContext {
            language: self.controller.get(),
            set_language: self.set_language.clone(),
        };
        html! {
            <ContextProvider<LanguageContext> {context}>
                { ctx.props().children.clone() }
            </ContextProvider<LanguageContext>>
        }
    }
}
