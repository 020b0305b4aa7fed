//! Builds a compose link for Gmail, Outlook or the visitor's mail app.

use common::links::{EmailProvider, LinkErrors, LinkRequest};
use common::validation::FieldError;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::generated_link::GeneratedLink;
use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(EmailLinkPage)]
pub fn email_link_page() -> Html {
    let language = use_language();
    let tools = &language.content().tools;
    let text = &tools.email;

    let provider = use_state(EmailProvider::default);
    let to = use_state(String::new);
    let subject = use_state(String::new);
    let body = use_state(String::new);
    let errors = use_state(LinkErrors::default);
    let link = use_state(|| None::<AttrValue>);

    // Any edit invalidates the previous result.
    let edit = |field: UseStateHandle<String>| {
        let link = link.clone();
        move |value: String| {
            field.set(value);
            link.set(None);
        }
    };
    let on_to = {
        let edit = edit(to.clone());
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            edit(e.target_unchecked_into::<HtmlInputElement>().value());
            errors.set(LinkErrors { recipient: None, ..*errors });
        })
    };
    let on_subject = {
        let edit = edit(subject.clone());
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            edit(e.target_unchecked_into::<HtmlInputElement>().value());
            errors.set(LinkErrors { subject: None, ..*errors });
        })
    };
    let on_body = {
        let edit = edit(body.clone());
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            edit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
            errors.set(LinkErrors { body: None, ..*errors });
        })
    };

    let onsubmit = {
        let (provider, to, subject, body) = (provider.clone(), to.clone(), subject.clone(), body.clone());
        let errors = errors.clone();
        let link = link.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LinkRequest::Email {
                provider: *provider,
                to: (*to).clone(),
                subject: (*subject).clone(),
                body: (*body).clone(),
            };
            match request.generate() {
                Ok(generated) => {
                    errors.set(LinkErrors::default());
                    link.set(Some(generated.into()));
                }
                Err(found) => {
                    errors.set(found);
                    link.set(None);
                }
            }
        })
    };

    let provider_options = EmailProvider::ALL
        .into_iter()
        .map(|option| {
            let provider = provider.clone();
            let link = link.clone();
            let onchange = {
                let provider = provider.clone();
                Callback::from(move |_: Event| {
                provider.set(option);
                link.set(None);
            })
            };
            html! {
                <label class={classes!("radio-pill", (*provider == option).then_some("active"))}>
                    <input type="radio" name="provider" value={option.code()} checked={*provider == option} {onchange} />
                    { text.providers.label(option) }
                </label>
            }
        })
        .collect::<Html>();

    let recipient_error = errors.recipient.map(|error| match error {
        FieldError::InvalidEmail => text.to_invalid,
        _ => text.to_required,
    });

    html! {
        <section class="section tool-page">
            <div class="container narrow">
                <Link<Route> to={Route::Tools} classes="back-link">{ tools.all_tools }</Link<Route>>
                <h1>{ text.title }</h1>
                <p class="lead">{ text.subtitle }</p>

                <form class="tool-form" novalidate=true {onsubmit}>
                    <fieldset class="field">
                        <legend class="field-label">{ text.provider_label }</legend>
                        <div class="radio-row">{ provider_options }</div>
                        <p class="field-hint">{ text.provider_note }</p>
                    </fieldset>

                    <div class="field">
                        <label class="field-label" for="email-to">{ text.to_label }</label>
                        <input id="email-to" type="email" dir="ltr"
                            class={classes!(recipient_error.is_some().then_some("invalid"))}
                            value={(*to).clone()} placeholder={text.to_placeholder} oninput={on_to} />
                        if let Some(error) = recipient_error {
                            <p class="field-error">{ error }</p>
                        }
                    </div>

                    <div class="field">
                        <label class="field-label" for="email-subject">{ text.subject_label }</label>
                        <input id="email-subject" type="text"
                            class={classes!(errors.subject.is_some().then_some("invalid"))}
                            value={(*subject).clone()} placeholder={text.subject_placeholder} oninput={on_subject} />
                        if errors.subject.is_some() {
                            <p class="field-error">{ text.subject_required }</p>
                        }
                    </div>

                    <div class="field">
                        <label class="field-label" for="email-body">{ text.body_label }</label>
                        <textarea id="email-body" rows="5"
                            class={classes!(errors.body.is_some().then_some("invalid"))}
                            value={(*body).clone()} placeholder={text.body_placeholder} oninput={on_body} />
                        if errors.body.is_some() {
                            <p class="field-error">{ text.body_required }</p>
                        }
                    </div>

                    <button type="submit" class="btn btn-primary">{ tools.generate_button }</button>
                </form>

                if let Some(generated) = (*link).clone() {
                    <GeneratedLink language={language.language} link={generated} />
                }
            </div>
        </section>
    }
}
