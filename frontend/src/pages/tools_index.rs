use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(ToolsIndexPage)]
pub fn tools_index_page() -> Html {
    let language = use_language();
    let tools = &language.content().tools;

    let cards = [
        (Route::EmailLink, "✉️", tools.email.title, tools.email.card_description, tools.email.card_cta),
        (Route::WhatsAppLink, "💬", tools.whatsapp.title, tools.whatsapp.card_description, tools.whatsapp.card_cta),
    ];

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ tools.title }</h1>
                    <p class="lead">{ tools.subtitle }</p>
                </div>
            </section>
            <section class="section">
                <div class="container card-grid two">
                    { for cards.into_iter().map(|(route, icon, title, description, cta)| html! {
                        <article class="card">
                            <span class="card-icon">{ icon }</span>
                            <h2>{ title }</h2>
                            <p>{ description }</p>
                            <Link<Route> to={route} classes="btn btn-primary">{ cta }</Link<Route>>
                        </article>
                    }) }
                </div>
            </section>
        </>
    }
}
