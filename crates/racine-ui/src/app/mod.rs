//! Application root and wasm entry point.

pub(crate) mod api;

use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::components::status_page::StatusPage;

#[function_component(RacineApp)]
fn racine_app() -> Html {
    let api_ctx = use_memo(|()| ApiCtx::default(), ());
    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <StatusPage />
        </ContextProvider<ApiCtx>>
    }
}

/// Mount the frontend on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RacineApp>::with_root(root).render();
    } else {
        yew::Renderer::<RacineApp>::new().render();
    }
}
