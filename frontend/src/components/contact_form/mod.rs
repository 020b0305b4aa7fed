//! Contact form: validates locally, then posts one JSON payload to the
//! contact webhook. A success or error banner shows for a fixed time before
//! the form returns to idle; success also clears every field.

use common::language::Language;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ContactFormComponent;

#[derive(Properties, PartialEq, Clone)]
pub struct ContactFormProps {
    pub language: Language,
    /// Contact webhook; `None` means submissions are only logged.
    #[prop_or_default]
    pub webhook_url: Option<AttrValue>,
    /// ISO code the phone input starts on.
    pub default_country: AttrValue,
}

impl Component for ContactFormComponent {
    type Message = Msg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
