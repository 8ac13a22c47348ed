use super::fractal_view::FractalView;
use crate::model::ViewerConfig;
use crate::util::cwarn;
use yew::prelude::*;

/// Reads the optional JSON config from `<body data-config="...">`.
fn load_config() -> ViewerConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-config"));
    match raw {
        Some(raw) => ViewerConfig::from_json(&raw).unwrap_or_else(|e| {
            cwarn(&format!("ignoring data-config: {e}"));
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| load_config());
    html! { <FractalView config={(*config).clone()} /> }
}
