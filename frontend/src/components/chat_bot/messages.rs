use common::chat::PendingReply;
use common::webhook::{Delivery, WebhookError};

pub enum Msg {
    Open,
    Close,
    Input(String),
    Send,
    Deliver(PendingReply),
    Reset,
    Forwarded(Result<Delivery, WebhookError>),
}
