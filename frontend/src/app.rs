use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat_bot::ChatBot;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use crate::routes::{switch, Route};
use crate::services::config::{use_site_config, ConfigProvider};
use crate::services::language::{use_language, LanguageProvider};
use crate::services::platform;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <LanguageProvider>
                <ConfigProvider>
                    <BrowserRouter>
                        <Shell />
                    </BrowserRouter>
                </ConfigProvider>
            </LanguageProvider>
        }
    }
}

/// Page chrome around the routed content.
#[function_component(Shell)]
fn shell() -> Html {
    let language = use_language();
    let config = use_site_config();
    let route = use_route::<Route>();

    use_effect_with(route, |_| platform::scroll_to_top());

    let chatbot_url = config.webhooks.chat_bot.clone().map(AttrValue::from);

    html! {
        <div class={classes!("site", language.is_rtl().then_some("rtl"))}>
            <Header />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
            <ChatBot language={language.language} webhook_url={chatbot_url} />
        </div>
    }
}
