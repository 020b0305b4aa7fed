use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let language = use_language();
    let portfolio = &language.content().portfolio;
    let coming_soon = language.content().contact.coming_soon;

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ portfolio.title }</h1>
                    <p class="lead">{ portfolio.subtitle }</p>
                </div>
            </section>

            <section class="section">
                <div class="container card-grid two">
                    { for portfolio.items.iter().map(|item| html! {
                        <article class="card project" id={item.id}>
                            <span class="card-icon">{ item.emoji }</span>
                            <h2>{ item.title }</h2>
                            <p>{ item.description }</p>
                            <p class="result">{ item.result }</p>
                            <ul class="tag-list">
                                { for item.technologies.iter().map(|tech| html! { <li class="tag">{ *tech }</li> }) }
                            </ul>
                            <button type="button" class="btn btn-link" disabled=true title={coming_soon}>
                                { portfolio.view_project }
                            </button>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section cta-band">
                <div class="container center">
                    <h2>{ portfolio.want_similar }</h2>
                    <p>{ portfolio.want_similar_subtitle }</p>
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        { language.content().about.lets_talk }
                    </Link<Route>>
                </div>
            </section>
        </>
    }
}
