use common::language::Language;
use common::site;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::services::language::use_language;

#[function_component(Header)]
pub fn header() -> Html {
    let language = use_language();
    let nav = &language.content().nav;
    let current = use_route::<Route>();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let items = [
        (Route::Home, nav.home),
        (Route::Services, nav.services),
        (Route::About, nav.about),
        (Route::Portfolio, nav.portfolio),
        (Route::Guides, nav.guides),
        (Route::Tools, nav.tools),
        (Route::Contact, nav.contact),
    ];

    let switcher = Language::ALL
        .into_iter()
        .map(|option| {
            let set_language = language.set_language.clone();
            let active = option == language.language;
            html! {
                <button
                    type="button"
                    class={classes!("lang-btn", active.then_some("active"))}
                    lang={option.code()}
                    aria-pressed={active.to_string()}
                    onclick={Callback::from(move |_: MouseEvent| set_language.emit(option))}
                >
                    { option.native_name() }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <header class="site-header">
            <div class="container header-row">
                <Link<Route> to={Route::Home} classes="brand">
                    <span class="brand-first">{ site::BRAND_FIRST }</span>
                    <span class="brand-second">{ site::BRAND_SECOND }</span>
                </Link<Route>>

                <nav class={classes!("main-nav", (*menu_open).then_some("open"))}>
                    { for items.into_iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(&route);
                        html! {
                            <span onclick={close_menu.clone()}>
                                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                                    { label }
                                </Link<Route>>
                            </span>
                        }
                    }) }
                </nav>

                <div class="lang-switcher" role="group" aria-label={nav.language}>
                    { switcher }
                </div>

                <button
                    type="button"
                    class="menu-toggle"
                    aria-label={nav.menu}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
        </header>
    }
}
