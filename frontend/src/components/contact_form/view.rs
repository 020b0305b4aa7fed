use common::submission::{ContactField, FormStatus};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactFormComponent;
use crate::components::phone_input::PhoneInput;

pub fn view(component: &ContactFormComponent, ctx: &Context<ContactFormComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let text = &props.language.content().contact;
    let error_for = |field: ContactField| {
        component
            .errors
            .get(field)
            .map(|error| AttrValue::Static(text.field_error(field, error)))
    };
    let submitting = component.status.is_submitting();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="contact-form" novalidate=true {onsubmit}>
            <h2>{ text.form_title }</h2>
            { status_banner(component.status, text.success, text.error) }

            { text_field(link, "name", text.name_label, text.name_placeholder, &component.form.name, error_for(ContactField::Name), Msg::Name) }
            { text_field(link, "email", text.email_label, text.email_placeholder, &component.form.email, error_for(ContactField::Email), Msg::Email) }

            <PhoneInput
                key={component.generation.to_string()}
                language={props.language}
                default_country={props.default_country.clone()}
                label={AttrValue::Static(text.phone_label)}
                placeholder={AttrValue::Static(text.phone_placeholder)}
                required=true
                error={error_for(ContactField::Phone)}
                on_change={link.callback(Msg::Phone)}
            />

            <div class="field">
                <label class="field-label" for="contact-subject">{ text.subject_label }</label>
                <input
                    id="contact-subject"
                    type="text"
                    value={component.form.subject.clone()}
                    placeholder={text.subject_placeholder}
                    oninput={link.callback(|e: InputEvent| Msg::Subject(e.target_unchecked_into::<HtmlInputElement>().value()))}
                />
            </div>

            <div class="field">
                <label class="field-label" for="contact-message">
                    { text.message_label }<span class="required">{ " *" }</span>
                </label>
                <textarea
                    id="contact-message"
                    rows="5"
                    class={classes!(component.errors.message.is_some().then_some("invalid"))}
                    value={component.form.message.clone()}
                    placeholder={text.message_placeholder}
                    oninput={link.callback(|e: InputEvent| Msg::Message(e.target_unchecked_into::<HtmlTextAreaElement>().value()))}
                />
                if let Some(error) = error_for(ContactField::Message) {
                    <p class="field-error">{ error }</p>
                }
            </div>

            <button type="submit" class="btn btn-primary" disabled={submitting}>
                { if submitting { text.submitting } else { text.submit_button } }
            </button>
        </form>
    }
}

fn status_banner(status: FormStatus, success: &'static str, error: &'static str) -> Html {
    match status {
        FormStatus::Success => html! { <div class="banner banner-success" role="status">{ success }</div> },
        FormStatus::Error => html! { <div class="banner banner-error" role="alert">{ error }</div> },
        FormStatus::Idle | FormStatus::Submitting => html! {},
    }
}

fn text_field(
    link: &Scope<ContactFormComponent>,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<AttrValue>,
    to_msg: fn(String) -> Msg,
) -> Html {
    let input_type = if id == "email" { "email" } else { "text" };
    html! {
        <div class="field">
            <label class="field-label" for={format!("contact-{id}")}>
                { label }<span class="required">{ " *" }</span>
            </label>
            <input
                id={format!("contact-{id}")}
                type={input_type}
                class={classes!(error.is_some().then_some("invalid"))}
                value={value.to_string()}
                {placeholder}
                oninput={link.callback(move |e: InputEvent| to_msg(e.target_unchecked_into::<HtmlInputElement>().value()))}
            />
            if let Some(error) = error {
                <p class="field-error">{ error }</p>
            }
        </div>
    }
}
