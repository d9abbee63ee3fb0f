use super::game_view::GameView;
use crate::config::GameConfig;
use crate::util::{clog, cwarn};
use yew::prelude::*;

/// Id of the optional `<script type="application/json">` block holding overrides.
const CONFIG_ELEMENT_ID: &str = "platformer-config";

fn load_page_config() -> GameConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let present = raw.is_some();
    match GameConfig::from_page(raw.as_deref()) {
        Ok(config) => {
            if present {
                clog("using config from page");
            }
            config
        }
        Err(err) => {
            cwarn(&format!("ignoring page config, using defaults: {}", err));
            GameConfig::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // read once; no runtime reload
    let config = use_state(load_page_config);
    html! { <GameView config={(*config).clone()} /> }
}
