//! Main module for the range slider showcase using Yew.
//! Fetches the bounds for both widget modes and mounts them.

use range_slider::api::load_bounds;
use range_slider::RangeBounds;
use yew::prelude::*;

mod components;
mod hooks;

use components::{Keymap, Range};

// ──────────────────────────────────────────────────────────────────────────────

#[derive(Properties, PartialEq)]
struct ShowcaseProps {
    title: AttrValue,
    bounds: RangeBounds,
}

/// One widget next to the keymap legend.
#[function_component(Showcase)]
fn showcase(props: &ShowcaseProps) -> Html {
    html! {
        <section class="showcase">
            <h2>{ props.title.clone() }</h2>
            <div class="showcase-slider">
                <Range bounds={props.bounds.clone()} />
            </div>
            <Keymap />
        </section>
    }
}

/// Page component: loads bounds on mount, then renders both widgets.
#[function_component]
pub fn App() -> Html {
    let bounds = use_state(|| None::<(RangeBounds, RangeBounds)>);

    {
        let bounds = bounds.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                bounds.set(Some(load_bounds().await));
            });
            || ()
        });
    }

    html! {
        <main class="app">
            if let Some((limits, fixed)) = (*bounds).clone() {
                <Showcase title="Continuous range" bounds={limits} />
                <Showcase title="Fixed values" bounds={fixed} />
            } else {
                <p class="loading-message">{ "Loading ranges…" }</p>
            }
        </main>
    }
}

/// Entry point: routes panics to the console and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    log::info!("Mounting range slider showcase");
    yew::Renderer::<App>::new().render();
}
