mod api;
mod components;
mod config;
mod error;
mod loader;
mod state;
mod types;

use api::{DateSourceHandle, HttpDateSource};
use components::date_display::DateDisplay;
use config::ApiConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ApiConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let source = use_memo(props.config.clone(), |config| {
        DateSourceHandle::new(HttpDateSource::new(config))
    });

    html! {
        <DateDisplay source={(*source).clone()} logo={props.config.logo_src.clone()} />
    }
}

fn main() {
    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Err(e) = loaded {
        log::warn!("Ignoring page config, using defaults: {}", e);
    }
    log::info!("Fetching date from {}", config.endpoint);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
