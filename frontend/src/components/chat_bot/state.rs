use common::chat::ChatScript;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub struct ChatBot {
    pub open: bool,
    pub script: ChatScript,
    pub input: String,
    /// Scrollable bubble list, kept pinned to the newest message.
    pub messages_ref: NodeRef,
    /// Delay before the pending bot bubble appears.
    pub reply_timer: Option<Timeout>,
}

impl ChatBot {
    pub fn new() -> Self {
        Self {
            open: false,
            script: ChatScript::default(),
            input: String::new(),
            messages_ref: NodeRef::default(),
            reply_timer: None,
        }
    }
}
