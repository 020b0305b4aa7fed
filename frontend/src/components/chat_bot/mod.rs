//! Floating chat widget that walks the visitor through the scripted
//! name, email and question exchange and forwards the answers to the
//! chatbot webhook. Delivery failures are logged only; the visitor always
//! sees the closing message.

use common::language::Language;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::services::platform;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ChatBot;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatBotProps {
    pub language: Language,
    #[prop_or_default]
    pub webhook_url: Option<AttrValue>,
}

impl Component for ChatBot {
    type Message = Msg;
    type Properties = ChatBotProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ChatBot::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(list) = self.messages_ref.cast::<HtmlElement>() {
            platform::scroll_to_bottom(&list);
        }
    }
}
