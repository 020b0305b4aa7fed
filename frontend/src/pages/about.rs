use common::site;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let language = use_language();
    let about = &language.content().about;

    html! {
        <>
            <section class="page-header">
                <div class="container">
                    <h1>{ about.title }</h1>
                    <p class="lead">{ about.subtitle }</p>
                </div>
            </section>

            <section class="section">
                <div class="container about-grid">
                    <div class="about-portrait" aria-label={site::OWNER}>
                        { site::OWNER.split(' ').filter_map(|part| part.chars().next()).collect::<String>() }
                    </div>
                    <div>
                        <p class="lead">{ about.intro }</p>
                        <h2>{ about.story_title }</h2>
                        <p>{ about.story_p1 }</p>
                        <p>{ about.story_p2 }</p>
                        <h3>{ about.technologies }</h3>
                        <ul class="tag-list">
                            { for about.skills.iter().map(|skill| html! { <li class="tag">{ *skill }</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section class="section section-alt">
                <div class="container">
                    <h2 class="section-title">{ about.values_title }</h2>
                    <div class="card-grid three">
                        { for about.values.iter().map(|value| html! {
                            <article class="card">
                                <h3>{ value.title }</h3>
                                <p>{ value.desc }</p>
                            </article>
                        }) }
                    </div>
                    <div class="stats">
                        { for about.stats.iter().map(|stat| html! {
                            <div class="stat">
                                <strong>{ stat.value }</strong>
                                <span>{ stat.label }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section cta-band">
                <div class="container center">
                    <Link<Route> to={Route::Contact} classes="btn btn-primary">
                        { about.lets_talk }
                    </Link<Route>>
                </div>
            </section>
        </>
    }
}
