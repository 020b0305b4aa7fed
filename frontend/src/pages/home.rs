use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::config::use_site_config;
use crate::services::language::use_language;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let language = use_language();
    let config = use_site_config();
    let content = language.content();
    let hero = &content.hero;

    html! {
        <>
            <section class="hero">
                <div class="container">
                    <h1>
                        <span>{ hero.headline_line1 }</span>
                        <span class="accent">{ hero.headline_line2 }</span>
                    </h1>
                    <p class="lead">{ hero.subheadline }</p>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href={config.calcom_url()} target="_blank" rel="noopener noreferrer">
                            { hero.cta_primary }
                        </a>
                        <Link<Route> to={Route::Services} classes="btn btn-outline">
                            { hero.cta_secondary }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title">{ content.services.title }</h2>
                    <p class="section-subtitle">{ content.services.subtitle }</p>
                    <div class="card-grid">
                        { for content.services.items.iter().map(|item| html! {
                            <article class="card">
                                <span class="card-icon">{ item.icon }</span>
                                <h3>{ item.title }</h3>
                                <p>{ item.description }</p>
                            </article>
                        }) }
                    </div>
                    <div class="center">
                        <Link<Route> to={Route::Services} classes="btn btn-link">
                            { content.services.cta }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="section section-alt">
                <div class="container stats">
                    { for content.about.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <strong>{ stat.value }</strong>
                            <span>{ stat.label }</span>
                        </div>
                    }) }
                </div>
                <div class="center">
                    <Link<Route> to={Route::About} classes="btn btn-link">
                        { content.about.cta }
                    </Link<Route>>
                </div>
            </section>
        </>
    }
}
