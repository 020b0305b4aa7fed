use common::chat::{ChatMessage, ChatRole, ChatStep};
use common::site;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ChatBot;

pub fn view(component: &ChatBot, ctx: &Context<ChatBot>) -> Html {
    let language = ctx.props().language;
    let text = &language.content().chatbot;
    let link = ctx.link();
    let side = if language.is_rtl() { "left" } else { "right" };
    let complete = component.script.step() == ChatStep::Complete;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Send
    });
    let oninput = link.callback(|e: InputEvent| {
        Msg::Input(e.target_unchecked_into::<HtmlInputElement>().value())
    });

    html! {
        <>
            <button
                type="button"
                class={classes!("chat-launcher", side, component.open.then_some("hidden"))}
                aria-label={text.open_label}
                onclick={link.callback(|_| Msg::Open)}
            >
                { "💬" }
            </button>

            if component.open {
                <section class={classes!("chat-window", side)} aria-live="polite">
                    <header class="chat-header">
                        <div class="chat-avatar">{ site::BRAND_FIRST.chars().next().unwrap_or('R') }</div>
                        <div>
                            <p class="chat-title">{ text.assistant_name }</p>
                            <p class="chat-subtitle">{ text.usually_replies }</p>
                        </div>
                        <button
                            type="button"
                            class="chat-close"
                            aria-label={text.close_label}
                            onclick={link.callback(|_| Msg::Close)}
                        >
                            { "✕" }
                        </button>
                    </header>

                    <div class="chat-messages" ref={component.messages_ref.clone()}>
                        { for component.script.messages().iter().map(bubble) }
                        if component.script.is_awaiting_reply() {
                            <div class="bubble bot typing">{ "…" }</div>
                        }
                    </div>

                    if complete {
                        <div class="chat-footer">
                            <button type="button" class="btn btn-link" onclick={link.callback(|_| Msg::Reset)}>
                                { text.new_conversation }
                            </button>
                        </div>
                    } else {
                        <form class="chat-input" {onsubmit}>
                            <input
                                type={if component.script.step() == ChatStep::Email { "email" } else { "text" }}
                                value={component.input.clone()}
                                placeholder={component.script.placeholder(language)}
                                {oninput}
                            />
                            <button type="submit" class="btn btn-primary" aria-label={text.send_label}>
                                { "➤" }
                            </button>
                        </form>
                    }
                </section>
            }
        </>
    }
}

fn bubble(message: &ChatMessage) -> Html {
    let role = match message.role {
        ChatRole::Bot => "bot",
        ChatRole::User => "user",
    };
    html! { <div class={classes!("bubble", role)}>{ message.text.clone() }</div> }
}
