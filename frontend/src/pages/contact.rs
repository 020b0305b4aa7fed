use common::site::{self, ContactChannel};
use yew::prelude::*;

use crate::components::contact_form::ContactFormComponent;
use crate::services::config::use_site_config;
use crate::services::language::use_language;
use crate::services::platform;

fn channel_icon(channel: ContactChannel) -> &'static str {
    match channel {
        ContactChannel::WhatsApp => "💬",
        ContactChannel::Facebook => "📘",
        ContactChannel::Instagram => "📸",
        ContactChannel::LinkedIn => "💼",
        ContactChannel::Email => "✉️",
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let language = use_language();
    let config = use_site_config();
    let text = &language.content().contact;
    // Timezone lookup runs once per visit to the page.
    let default_country = use_state(platform::inferred_country);

    let quick_links = site::quick_contact_links(&config, language.language)
        .into_iter()
        .map(|link| {
            let (target, rel) = if link.channel.is_external() {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a class={classes!("quick-link", link.channel.name().to_lowercase())} href={link.href} {target} {rel}>
                    <span class="quick-icon">{ channel_icon(link.channel) }</span>
                    <span class="quick-text">
                        <strong>{ link.channel.name() }</strong>
                        <small>{ link.channel.caption(language.language) }</small>
                    </span>
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ text.title }</h1>
                    <p class="lead">{ text.subtitle }</p>
                </div>
            </section>

            <section class="section">
                <div class="container contact-grid">
                    <aside class="quick-contact">
                        <h2>{ text.connect_with }</h2>
                        { quick_links }
                        <p class="contact-phone" dir="ltr">{ site::PHONE_DISPLAY }</p>
                    </aside>
                    <ContactFormComponent
                        language={language.language}
                        webhook_url={config.webhooks.contact_form.clone().map(AttrValue::from)}
                        default_country={AttrValue::Static(*default_country)}
                    />
                </div>
            </section>
        </>
    }
}
