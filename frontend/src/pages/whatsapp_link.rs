//! Builds a `wa.me` link from a phone number and an optional message.

use common::links::LinkRequest;
use common::phone::PhoneValue;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::generated_link::GeneratedLink;
use crate::components::phone_input::PhoneInput;
use crate::routes::Route;
use crate::services::language::use_language;
use crate::services::platform;

#[function_component(WhatsAppLinkPage)]
pub fn whatsapp_link_page() -> Html {
    let language = use_language();
    let tools = &language.content().tools;
    let text = &tools.whatsapp;

    let default_country = use_state(platform::inferred_country);
    let phone = use_state(PhoneValue::default);
    let message = use_state(String::new);
    let phone_invalid = use_state(|| false);
    let link = use_state(|| None::<AttrValue>);

    let on_phone = {
        let phone = phone.clone();
        let phone_invalid = phone_invalid.clone();
        let link = link.clone();
        Callback::from(move |value: PhoneValue| {
            phone.set(value);
            phone_invalid.set(false);
            link.set(None);
        })
    };
    let on_message = {
        let message = message.clone();
        let link = link.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
            link.set(None);
        })
    };

    let onsubmit = {
        let phone = phone.clone();
        let message = message.clone();
        let phone_invalid = phone_invalid.clone();
        let link = link.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LinkRequest::WhatsApp {
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            match request.generate() {
                Ok(generated) => {
                    phone_invalid.set(false);
                    link.set(Some(generated.into()));
                }
                Err(_) => {
                    phone_invalid.set(true);
                    link.set(None);
                }
            }
        })
    };

    html! {
        <section class="section tool-page">
            <div class="container narrow">
                <Link<Route> to={Route::Tools} classes="back-link">{ tools.all_tools }</Link<Route>>
                <h1>{ text.title }</h1>
                <p class="lead">{ text.subtitle }</p>

                <form class="tool-form" novalidate=true {onsubmit}>
                    <PhoneInput
                        language={language.language}
                        default_country={AttrValue::Static(*default_country)}
                        label={AttrValue::Static(text.phone_label)}
                        placeholder={AttrValue::Static(text.phone_placeholder)}
                        required=true
                        error={(*phone_invalid).then_some(AttrValue::Static(text.phone_error))}
                        on_change={on_phone}
                    />

                    <div class="field">
                        <label class="field-label" for="wa-message">{ text.message_label }</label>
                        <textarea id="wa-message" rows="4"
                            value={(*message).clone()} placeholder={text.message_placeholder} oninput={on_message} />
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
