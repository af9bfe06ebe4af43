//! Backend status page.
//!
//! # Design
//! - The page model lives in a mutable ref; the mount-only effect hands it to
//!   [`StatusPageModel::on_mount`], which claims the single probe.
//! - A settled status triggers one forced re-render.

use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::app::api::ApiCtx;
use crate::core::page::{PAGE_STYLE, StatusPageModel};

#[function_component(StatusPage)]
pub(crate) fn status_page() -> Html {
    let api_ctx = use_context::<ApiCtx>().unwrap_or_default();
    let model = use_mut_ref(StatusPageModel::new);
    let rerender = use_force_update();

    {
        let model = Rc::clone(&model);
        let transport = Rc::clone(&api_ctx.transport);
        use_effect_with_deps(
            move |()| {
                spawn_local(async move {
                    if StatusPageModel::on_mount(&model, transport.as_ref()).await {
                        rerender.force_update();
                    }
                });
                || ()
            },
            (),
        );
    }

    let view = model.borrow().view();
    html! {
        <div style={PAGE_STYLE}>
            <h1>{ view.heading }</h1>
            <p>{ view.status_label }<code>{ view.status_text }</code></p>
            <p>{ view.topology_note }<code>{ view.api_prefix }</code>{ "." }</p>
        </div>
    }
}
