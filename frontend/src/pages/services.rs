use yew::prelude::*;

use crate::services::config::use_site_config;
use crate::services::language::use_language;

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let language = use_language();
    let config = use_site_config();
    let services = &language.content().services;

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ services.title }</h1>
                    <p class="lead">{ services.subtitle }</p>
                </div>
            </section>

            <section class="section">
                <div class="container card-grid two">
                    { for services.items.iter().map(|item| html! {
                        <article class="card">
                            <span class="card-icon">{ item.icon }</span>
                            <h2>{ item.title }</h2>
                            <p>{ item.description }</p>
                            <ul class="feature-list">
                                { for item.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section section-alt">
                <div class="container">
                    <h2 class="section-title">{ services.process_title }</h2>
                    <p class="section-subtitle">{ services.process_subtitle }</p>
                    <ol class="process">
                        { for services.steps.iter().map(|step| html! {
                            <li class="process-step">
                                <span class="step-number">{ step.step.to_string() }</span>
                                <h3>{ step.title }</h3>
                                <p>{ step.desc }</p>
                            </li>
                        }) }
                    </ol>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container center">
                    <h2>{ services.ready }</h2>
                    <p>{ services.ready_subtitle }</p>
                    <a class="btn btn-primary" href={config.calcom_url()} target="_blank" rel="noopener noreferrer">
                        { language.content().hero.cta_primary }
                    </a>
                </div>
            </section>
        </>
    }
}
