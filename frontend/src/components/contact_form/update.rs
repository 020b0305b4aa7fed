use chrono::Utc;
use common::submission::{self, ContactField, FormStatus, SubmitError, STATUS_RESET_MS};
use common::webhook::Delivery;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactFormComponent;
use crate::services::platform;
use crate::services::webhook::GlooWebhookSender;

pub fn update(
    component: &mut ContactFormComponent,
    ctx: &Context<ContactFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Name(value) => {
            component.form.name = value;
            component.errors.clear(ContactField::Name);
            true
        }
        Msg::Email(value) => {
            component.form.email = value;
            component.errors.clear(ContactField::Email);
            true
        }
        Msg::Phone(value) => {
            component.form.phone = value;
            component.errors.clear(ContactField::Phone);
            true
        }
        Msg::Subject(value) => {
            component.form.subject = value;
            true
        }
        Msg::Message(value) => {
            component.form.message = value;
            component.errors.clear(ContactField::Message);
            true
        }
        Msg::Submit => {
            if component.status.is_submitting() {
                return false;
            }
            if let Err(errors) = component.form.validate() {
                component.errors = errors;
                return true;
            }
            component.status = FormStatus::Submitting;
            component.status_timer = None;

            let props = ctx.props();
            let form = component.form.clone();
            let language = props.language;
            let url = props.webhook_url.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = submission::submit_contact(
                    &GlooWebhookSender,
                    url.as_deref(),
                    &form,
                    language,
                    &platform::current_page_url(),
                    Utc::now(),
                )
                .await;
                link.send_message(Msg::Finished(outcome));
            });
            true
        }
        Msg::Finished(outcome) => {
            match outcome {
                Ok(delivery) => {
                    if delivery == Delivery::NotConfigured {
                        gloo_console::log!("Contact webhook not configured; submission not sent");
                    }
                    component.status = FormStatus::Success;
                    component.form = Default::default();
                    component.errors = Default::default();
                    component.generation += 1;
                }
                Err(SubmitError::Invalid(errors)) => {
                    component.status = FormStatus::Idle;
                    component.errors = errors;
                    return true;
                }
                Err(SubmitError::Delivery(e)) => {
                    gloo_console::error!("Contact form submission failed:", e.to_string());
                    component.status = FormStatus::Error;
                }
            }
            let link = ctx.link().clone();
            component.status_timer = Some(Timeout::new(STATUS_RESET_MS, move || {
                link.send_message(Msg::ResetStatus)
            }));
            true
        }
        Msg::ResetStatus => {
            component.status_timer = None;
            component.status = FormStatus::Idle;
            true
        }
    }
}
