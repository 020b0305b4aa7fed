use chrono::Utc;
use common::submission::{self, FormStatus, STATUS_RESET_MS, SubmitError};
use common::webhook::Delivery;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::config::use_site_config;
use crate::services::language::use_language;
use crate::services::platform;
use crate::services::webhook::GlooWebhookSender;

#[function_component(GuidesPage)]
pub fn guides_page() -> Html {
    let language = use_language();
    let guides = &language.content().guides;
    let coming_soon = language.content().contact.coming_soon;

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ guides.title }</h1>
                    <p class="lead">{ guides.subtitle }</p>
                </div>
            </section>

            <section class="section">
                <div class="container card-grid three">
                    { for guides.posts.iter().map(|post| html! {
                        <article class="card post" id={post.id}>
                            <span class="card-icon">{ post.emoji }</span>
                            <span class="tag">{ post.category }</span>
                            <h2>{ post.title }</h2>
                            <p>{ post.excerpt }</p>
                            <p class="post-meta">
                                <time datetime={post.date}>{ post.display_date(language.language) }</time>
                                { " · " }{ post.read_time }
                            </p>
                            <button type="button" class="btn btn-link" disabled=true title={coming_soon}>
                                { guides.read_more }
                            </button>
                        </article>
                    }) }
                </div>
            </section>

            <NewsletterSignup />
        </>
    }
}

#[function_component(NewsletterSignup)]
fn newsletter_signup() -> Html {
    let language = use_language();
    let config = use_site_config();
    let text = &language.content().guides;

    let email = use_state(String::new);
    let invalid = use_state(|| false);
    let status = use_state(|| FormStatus::Idle);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let oninput = {
        let email = email.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
            invalid.set(false);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let invalid = invalid.clone();
        let status = status.clone();
        let reset_timer = reset_timer.clone();
        let url = config.webhooks.newsletter.clone();
        let lang = language.language;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            status.set(FormStatus::Submitting);

            let email = email.clone();
            let invalid = invalid.clone();
            let status = status.clone();
            let reset_timer = reset_timer.clone();
            let url = url.clone();
            spawn_local(async move {
                let outcome = submission::submit_newsletter(
                    &GlooWebhookSender,
                    url.as_deref(),
                    &email,
                    lang,
                    &platform::current_page_url(),
                    Utc::now(),
                )
                .await;

                let finished = match outcome {
                    Ok(delivery) => {
                        if delivery == Delivery::NotConfigured {
                            gloo_console::log!("Newsletter webhook not configured; signup not sent");
                        }
                        email.set(String::new());
                        FormStatus::Success
                    }
                    Err(SubmitError::Invalid(_)) => {
                        invalid.set(true);
                        status.set(FormStatus::Idle);
                        return;
                    }
                    Err(SubmitError::Delivery(e)) => {
                        gloo_console::error!("Newsletter webhook failed:", e.to_string());
                        FormStatus::Error
                    }
                };
                status.set(finished);
                let back_to_idle = status.clone();
                *reset_timer.borrow_mut() = Some(Timeout::new(STATUS_RESET_MS, move || {
                    back_to_idle.set(FormStatus::Idle)
                }));
            });
        })
    };

    let banner = match *status {
        FormStatus::Success => html! { <p class="banner banner-success">{ text.subscribed }</p> },
        FormStatus::Error => html! { <p class="banner banner-error">{ text.subscribe_error }</p> },
        _ => html! {},
    };

    html! {
        <section class="section section-alt newsletter">
            <div class="container center">
                <h2>{ text.stay_updated }</h2>
                <p>{ text.stay_updated_subtitle }</p>
                { banner }
                <form class="inline-form" novalidate=true {onsubmit}>
                    <input
                        type="email"
                        class={classes!((*invalid).then_some("invalid"))}
                        value={(*email).clone()}
                        placeholder={text.email_placeholder}
                        {oninput}
                    />
                    <button type="submit" class="btn btn-primary" disabled={status.is_submitting()}>
                        { text.subscribe }
                    </button>
                </form>
                if *invalid {
                    <p class="field-error">{ text.email_invalid }</p>
                }
                <p class="fine-print">{ text.no_spam }</p>
            </div>
        </section>
    }
}
