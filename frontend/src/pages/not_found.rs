use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let language = use_language();
    let text = &language.content().not_found;

    html! {
        <section class="section not-found">
            <div class="container center">
                <p class="big-code">{ "404" }</p>
                <h1>{ text.title }</h1>
                <p>{ text.message }</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{ text.cta }</Link<Route>>
            </div>
        </section>
    }
}
