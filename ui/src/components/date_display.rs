use crate::api::DateSourceHandle;
use crate::config::DEFAULT_LOGO_SRC;
use crate::loader::DateLoader;
use crate::state::DateStore;
use yew::prelude::*;

pub const HEADING_PREFIX: &str = "The current date is ";
pub const HEADING_SUFFIX: &str = ".";

#[derive(Properties, PartialEq)]
pub struct DateDisplayProps {
    pub source: DateSourceHandle,
    #[prop_or_else(default_logo)]
    pub logo: String,
}

fn default_logo() -> String {
    DEFAULT_LOGO_SRC.to_string()
}

#[function_component(DateDisplay)]
pub fn date_display(props: &DateDisplayProps) -> Html {
    let store = use_memo((), |_| DateStore::new());
    let trigger = use_force_update();

    // One loader per mount; its start guard keeps re-renders from refetching
    let loader = {
        let store = (*store).clone();
        let source = props.source.source();
        use_memo((), move |_| DateLoader::new(source, store))
    };

    {
        let store = (*store).clone();
        let loader = loader.clone();

        use_effect_with((), move |_| {
            let subscription = store.subscribe(move |_| trigger.force_update());

            if let Some(fetch) = loader.start() {
                wasm_bindgen_futures::spawn_local(async move {
                    fetch.await;
                });
            }

            move || {
                loader.unmount();
                drop(subscription);
            }
        });
    }

    html! {
        <div class="App">
            <header class="App-header">
                <img src={props.logo.clone()} class="App-logo" alt="logo" />
                <DateHeading date={store.current_date()} />
            </header>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DateHeadingProps {
    pub date: String,
}

#[function_component(DateHeading)]
pub fn date_heading(props: &DateHeadingProps) -> Html {
    html! {
        <h2>{HEADING_PREFIX}<i>{props.date.clone()}</i>{HEADING_SUFFIX}</h2>
    }
}
