use chrono::{Datelike, Utc};
use common::site;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::config::use_site_config;
use crate::services::language::use_language;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let config = use_site_config();
    let content = language.content();
    let nav = &content.nav;
    let year = Utc::now().year();

    let links = [
        (Route::Services, nav.services),
        (Route::About, nav.about),
        (Route::Portfolio, nav.portfolio),
        (Route::Guides, nav.guides),
        (Route::Tools, nav.tools),
        (Route::Contact, nav.contact),
    ];

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <p class="brand">{ site::BRAND_NAME }</p>
                    <p class="muted">{ content.footer.tagline }</p>
                </div>
                <div>
                    <h4>{ content.footer.quick_links }</h4>
                    <ul class="plain-list">
                        { for links.into_iter().map(|(route, label)| html! {
                            <li><Link<Route> to={route}>{ label }</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{ content.footer.connect }</h4>
                    <ul class="plain-list">
                        { for site::quick_contact_links(&config, language.language).into_iter().map(|link| {
                            let target = link.channel.is_external().then_some("_blank");
                            html! {
                                <li>
                                    <a href={link.href} target={target} rel="noopener noreferrer">
                                        { link.channel.name() }
                                    </a>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom" dir="ltr">
                { format!("© {year} {}. ", site::BRAND_NAME) }
                <span dir={language.language.direction().as_str()}>{ content.footer.rights }</span>
            </div>
        </footer>
    }
}
