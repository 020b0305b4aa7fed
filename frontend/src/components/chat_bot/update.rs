use chrono::Utc;
use common::chat::BOT_REPLY_DELAY_MS;
use common::webhook::{self, Delivery};
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ChatBot;
use crate::services::platform;
use crate::services::webhook::GlooWebhookSender;

pub fn update(component: &mut ChatBot, ctx: &Context<ChatBot>, msg: Msg) -> bool {
    let language = ctx.props().language;
    match msg {
        Msg::Open => {
            component.open = true;
            component.script.open(language);
            true
        }
        Msg::Close => {
            component.open = false;
            true
        }
        Msg::Input(value) => {
            component.input = value;
            true
        }
        Msg::Send => {
            let Some(answered) = component.script.answer(&component.input, language) else {
                return false;
            };
            component.input.clear();

            let link = ctx.link().clone();
            let reply = answered.reply;
            component.reply_timer = Some(Timeout::new(BOT_REPLY_DELAY_MS, move || {
                link.send_message(Msg::Deliver(reply))
            }));

            if let Some(answers) = answered.completed {
                let payload = answers.into_submission(language, &platform::current_page_url(), Utc::now());
                let url = ctx.props().webhook_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = webhook::dispatch(&GlooWebhookSender, url.as_deref(), &payload).await;
                    link.send_message(Msg::Forwarded(outcome));
                });
            }
            true
        }
        Msg::Deliver(reply) => {
            component.reply_timer = None;
            component.script.deliver(reply);
            true
        }
        Msg::Reset => {
            component.reply_timer = None;
            component.input.clear();
            component.script.reset(language);
            true
        }
        Msg::Forwarded(outcome) => {
            match outcome {
                Ok(Delivery::Sent) => gloo_console::log!("Chatbot conversation forwarded"),
                Ok(Delivery::NotConfigured) => {
                    gloo_console::log!("Chatbot webhook not configured; conversation not sent")
                }
                Err(e) => gloo_console::error!("Chatbot webhook failed:", e.to_string()),
            }
            false
        }
    }
}
