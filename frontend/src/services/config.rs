//! Fetches the start-time site configuration once and shares it through context.

use std::rc::Rc;

use common::config::SiteConfig;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

const CONFIG_ENDPOINT: &str = "/api/config";

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

async fn fetch_config() -> Result<SiteConfig, String> {
    let response = Request::get(CONFIG_ENDPOINT)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<SiteConfig>().await.map_err(|e| e.to_string())
}

pub enum Msg {
    Loaded(SiteConfig),
}

#[derive(Properties, PartialEq)]
pub struct ConfigProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Starts with the built-in defaults and swaps in the server's values when
/// `/api/config` answers.
pub struct ConfigProvider {
    config: Rc<SiteConfig>,
}

impl Component for ConfigProvider {
    type Message = Msg;
    type Properties = ConfigProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match fetch_config().await {
                Ok(config) => link.send_message(Msg::Loaded(config)),
                Err(e) => gloo_console::warn!("Using default site config:", e),
            }
        });
        Self {
            config: Rc::new(SiteConfig::default()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(config) => {
                let changed = *self.config != config;
                self.config = Rc::new(config);
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Rc<SiteConfig>> context={self.config.clone()}>
                { ctx.props().children.clone() }
            </ContextProvider<Rc<SiteConfig>>>
        }
    }
}
