use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::email_link::EmailLinkPage;
use crate::pages::guides::GuidesPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::portfolio::PortfolioPage;
use crate::pages::services::ServicesPage;
use crate::pages::tools_index::ToolsIndexPage;
use crate::pages::whatsapp_link::WhatsAppLinkPage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/portfolio")]
    Portfolio,
    #[at("/guides")]
    Guides,
    #[at("/contact")]
    Contact,
    #[at("/tools")]
    Tools,
    #[at("/tools/email-link")]
    EmailLink,
    #[at("/tools/whatsapp-link")]
    WhatsAppLink,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::About => html! { <AboutPage /> },
        Route::Portfolio => html! { <PortfolioPage /> },
        Route::Guides => html! { <GuidesPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Tools => html! { <ToolsIndexPage /> },
        Route::EmailLink => html! { <EmailLinkPage /> },
        Route::WhatsAppLink => html! { <WhatsAppLinkPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
