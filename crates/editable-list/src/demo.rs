//! Demo page hosting two list instances.
//!
//! # Design
//! - Yew renders the hosts with their attributes first.
//! - The element is registered from an effect after the first render, so the
//!   browser upgrades hosts whose attributes are already in place.

use gloo::console;
use yew::prelude::*;

use crate::config::TAG_NAME;
use crate::element::define_element;

#[function_component(DemoPage)]
fn demo_page() -> Html {
    use_effect_with_deps(
        |_| {
            if let Err(err) = define_element(TAG_NAME) {
                console::error!("editable-list registration failed", format!("{err:?}"));
            }
            || ()
        },
        (),
    );

    html! {
        <main class="demo">
            <editable-list
                heading="Tasks"
                add-item-text="New task"
                list-item-milk="Buy milk"
                list-item-dog="Walk dog"
            >
                <p>{"Slotted content lands between the list and the add row."}</p>
            </editable-list>
            <editable-list
                heading="Groceries"
                add-item-text="Add grocery"
                variant="minimal"
                strict-items=""
                list-item-apples="Apples"
                data-list-item-note="ignored under strict-items"
            />
        </main>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_demo() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<DemoPage>::with_root(root).render();
    } else {
        yew::Renderer::<DemoPage>::new().render();
    }
}
